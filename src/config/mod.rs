pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::{Parser, Subcommand};
use file::StorefrontConfig;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[derive(Debug, Parser)]
#[command(name = "pizza-storefront")]
#[command(about = "Client for the Padre Gino's pizza storefront API")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, help = "TOML config file; fills flags left at their defaults")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a route and write it as index.html under the output path
    Render {
        #[arg(long, default_value = "/")]
        route: String,

        #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
        output_path: String,
    },
    /// Submit the contact form once and print the resulting page
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },
}

/// CLI flags merged with the optional config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub output_path: String,
}

impl Settings {
    pub fn resolve(config: &CliConfig) -> Result<Settings> {
        let file = match &config.config {
            Some(path) => StorefrontConfig::load(path)?,
            None => StorefrontConfig::default(),
        };

        let base_url = if config.base_url != DEFAULT_BASE_URL {
            config.base_url.clone()
        } else {
            file.base_url.unwrap_or_else(|| config.base_url.clone())
        };

        let output_path = match &config.command {
            Command::Render { output_path, .. } if output_path.as_str() != DEFAULT_OUTPUT_PATH => {
                output_path.clone()
            }
            _ => file
                .output_path
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
        };

        Ok(Settings {
            base_url,
            output_path,
        })
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
