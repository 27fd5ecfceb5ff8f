pub mod config;
pub mod descriptor;
pub mod error;
pub mod release;
pub mod requirements;
pub mod ui;
pub mod version;
pub mod warning;

pub use error::{PackError, Result};
