//! User feedback domain

mod entity;
mod store;

pub use entity::{decode_data_url, FeedbackId, FeedbackSubmission, StoredFeedback};
pub use store::FeedbackStore;

#[cfg(test)]
pub use store::MockFeedbackStore;
