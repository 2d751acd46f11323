//! Reader for the consolidated French tax code: article search by code or full text,
//! highlighted result snippets, article detail with version history, and the recent-search
//! list kept on the device.

pub mod article;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod recent;
pub mod search;
pub mod store;
pub mod util;

pub use error::{Error, Result};
