//! Activity entity <-> model mapper

use pickup_core::entities::{Activity, ActivityFeature};

use crate::models::ActivityModel;

/// Convert the union query's feature discriminator to ActivityFeature
fn parse_feature(feature: &str) -> ActivityFeature {
    match feature {
        "comment" => ActivityFeature::Comment,
        "follow" => ActivityFeature::Follow,
        "invite" => ActivityFeature::Invite,
        _ => ActivityFeature::Game,
    }
}

impl From<ActivityModel> for Activity {
    fn from(model: ActivityModel) -> Self {
        Activity {
            id: model.id,
            feature: parse_feature(&model.feature),
            username: model.username,
            target_username: model.target_username,
            game_id: model.game_id,
            data: model.data,
            operation: model.operation,
            created_on: model.created_on,
        }
    }
}
