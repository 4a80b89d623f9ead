pub mod models;
pub mod navigation;
pub mod catalog;
pub mod errors;

pub use models::*;
pub use navigation::*;
pub use catalog::*;
pub use errors::*;
