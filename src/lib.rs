pub mod capture;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod notebook;
pub mod photos;
pub mod pins;

pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use notebook::{Listing, Notebook};
