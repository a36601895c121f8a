pub mod config;
pub mod contact;
pub mod controller;
pub mod error;

pub use config::*;
pub use contact::*;
pub use controller::*;
pub use error::*;
