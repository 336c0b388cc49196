//! Message entity <-> model mapper

use pickup_core::entities::Message;
use pickup_core::value_objects::ThreadId;

use crate::models::MessageModel;

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: model.id,
            thread_id: ThreadId::new(model.thread_id),
            sender_username: model.sender_username,
            body: model.body,
            created_on: model.created_on,
        }
    }
}
