pub mod assets;
pub mod health;
pub mod search;

pub use assets::*;
pub use health::*;
pub use search::*;
