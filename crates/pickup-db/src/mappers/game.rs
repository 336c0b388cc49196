//! Game entity <-> model mapper

use pickup_core::entities::Game;

use crate::models::GameModel;

impl From<GameModel> for Game {
    fn from(model: GameModel) -> Self {
        Game {
            id: model.id,
            title: model.title,
            description: model.description,
            location: model.location,
            game_time: model.game_time,
            creator_username: model.creator_username,
            is_active: model.is_active,
            created_on: model.created_on,
        }
    }
}
