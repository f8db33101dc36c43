mod error;
pub mod models;
pub mod ports;
mod roster;
mod seed;
pub mod services;

pub use error::*;
pub use roster::*;
pub use seed::*;
