pub mod recommendation;
pub mod review;

pub use recommendation::get_recommendations_handler;
pub use review::create_review_handler;
