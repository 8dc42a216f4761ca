use clap::Parser;
use pizza_storefront::config::{CliConfig, Command, Settings};
use pizza_storefront::domain::ports::ConfigProvider;
use pizza_storefront::utils::{logger, validation::Validate};
use pizza_storefront::{App, ContactSubmission, QueryCache, StorefrontClient};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting pizza-storefront CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match Settings::resolve(&config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Could not resolve configuration: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let client = StorefrontClient::from_config(&settings);
    let cache = Arc::new(QueryCache::new());
    let app = App::new(client, cache);

    let outcome = match &config.command {
        Command::Render { route, .. } => app
            .render_to_dir(route, Path::new(settings.output_path()))
            .await
            .map(|file| format!("Rendered {} to {}", route, file.display())),
        Command::Contact {
            name,
            email,
            message,
        } => {
            let (page, result) = app
                .submit_contact(ContactSubmission {
                    name: name.clone(),
                    email: email.clone(),
                    message: message.clone(),
                })
                .await;
            match result {
                Ok(()) => Ok(page),
                Err(e) => {
                    // Show the page the form ended on before reporting
                    // the failure.
                    println!("{}", page);
                    Err(e)
                }
            }
        }
    };

    match outcome {
        Ok(output) => {
            tracing::info!("Done");
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}
