pub mod command;
pub mod config;
pub mod dex;
pub mod error;
pub mod executor;
pub mod interface;
pub mod metadata;
pub mod swapper;
pub mod token;

pub use error::{Result, SwapperError};
