pub mod asset_repo;
pub mod index;
pub mod page_repo;

pub use asset_repo::*;
pub use index::*;
pub use page_repo::*;
