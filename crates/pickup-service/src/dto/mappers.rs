//! Entity -> DTO mappers

use chrono::Utc;
use pickup_core::entities::{Activity, Game, GameComment, Invite, Message, User};

use super::responses::{
    ActivityResponse, CommentResponse, GameResponse, InviteResponse, MessageResponse,
    ProfileResponse, UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            city: user.city.clone(),
            state: user.state.clone(),
            image: user.image.clone(),
            created_on: user.created_on,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        ProfileResponse {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            birth_date: user.birth_date,
            city: user.city.clone(),
            state: user.state.clone(),
            image: user.image.clone(),
            phone: user.phone.clone(),
            email: user.email.clone(),
            is_active: user.is_active,
            is_private: user.is_private,
            created_on: user.created_on,
        }
    }
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        GameResponse {
            id: game.id,
            title: game.title.clone(),
            description: game.description.clone(),
            location: game.location.clone(),
            game_time: game.game_time,
            creator_username: game.creator_username.clone(),
            is_active: game.is_active,
            status: game.status_at(Utc::now()).as_str(),
            created_on: game.created_on,
        }
    }
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self::from(&game)
    }
}

impl From<GameComment> for CommentResponse {
    fn from(comment: GameComment) -> Self {
        CommentResponse {
            id: comment.id,
            game_id: comment.game_id,
            author_username: comment.author_username,
            body: comment.body,
            created_on: comment.created_on,
        }
    }
}

impl From<Invite> for InviteResponse {
    fn from(invite: Invite) -> Self {
        InviteResponse {
            id: invite.id,
            game_id: invite.game_id,
            from_username: invite.from_username,
            to_username: invite.to_username,
            status: invite.status.as_str(),
            created_on: invite.created_on,
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        MessageResponse {
            id: message.id,
            thread_id: message.thread_id.into_inner(),
            sender_username: message.sender_username,
            body: message.body,
            created_on: message.created_on,
        }
    }
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        ActivityResponse {
            feature: activity.feature.as_str(),
            username: activity.username,
            target_username: activity.target_username,
            game_id: activity.game_id,
            data: activity.data,
            operation: activity.operation,
            created_on: activity.created_on,
        }
    }
}
