pub mod recommendation;
pub mod redis;
pub mod review;

pub use recommendation::Recommendation;
pub use review::{Review, ReviewSubmission, TimestampInput};
