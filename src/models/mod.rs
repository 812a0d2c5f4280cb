pub mod api;
pub mod page;
pub mod query;

pub use api::*;
pub use page::*;
pub use query::*;
