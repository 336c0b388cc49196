//! Game comment entity <-> model mapper

use pickup_core::entities::GameComment;

use crate::models::GameCommentModel;

impl From<GameCommentModel> for GameComment {
    fn from(model: GameCommentModel) -> Self {
        GameComment {
            id: model.id,
            game_id: model.game_id,
            author_username: model.author_username,
            body: model.body,
            is_active: model.is_active,
            created_on: model.created_on,
        }
    }
}
