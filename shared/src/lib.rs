pub mod config;
pub mod decision;
pub mod errors;
pub mod models;

pub use config::*;
pub use decision::*;
pub use errors::*;
pub use models::*;
