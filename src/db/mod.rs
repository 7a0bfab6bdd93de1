pub mod recommendation;
pub mod review;

pub use recommendation::get_recommendations;
pub use review::publish_review;
