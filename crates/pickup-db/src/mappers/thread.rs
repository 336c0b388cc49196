//! Thread summary <-> model mapper

use pickup_core::entities::Message;
use pickup_core::traits::ThreadSummary;
use pickup_core::value_objects::ThreadId;

use crate::models::ThreadSummaryModel;

impl From<ThreadSummaryModel> for ThreadSummary {
    fn from(model: ThreadSummaryModel) -> Self {
        let thread_id = ThreadId::new(model.thread_id);
        ThreadSummary {
            thread_id: thread_id.clone(),
            last_message: Message {
                id: model.message_id,
                thread_id,
                sender_username: model.sender_username,
                body: model.body,
                created_on: model.created_on,
            },
        }
    }
}
