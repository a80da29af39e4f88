pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod port;
pub mod process;
pub mod ui;
pub mod utils;

pub use error::{Error, Result};
