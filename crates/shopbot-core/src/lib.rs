pub mod config;
pub mod error;

pub use config::ShopbotConfig;
pub use error::{Result, ShopbotError};
