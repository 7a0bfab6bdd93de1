pub mod publish;

pub use publish::publish_review;
