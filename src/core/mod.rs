pub mod api;
pub mod cache;
pub mod normalize;
pub mod scene;
