pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use config::CliConfig;
pub use crate::core::{App, Fetch, FetchState, QueryCache, StorefrontClient};
pub use domain::model::{Cart, ContactSubmission, Pizza};
pub use utils::error::{Result, StorefrontError};
