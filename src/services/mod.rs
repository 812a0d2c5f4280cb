pub mod cache_service;
pub mod scoring;
pub mod search_service;

pub use cache_service::*;
pub use scoring::*;
pub use search_service::*;
