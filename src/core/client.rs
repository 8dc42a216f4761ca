use crate::domain::model::{ContactSubmission, Pizza};
use crate::domain::ports::{ConfigProvider, StorefrontApi};
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const PIZZA_OF_THE_DAY_PATH: &str = "/api/pizza-of-the-day";
pub const PIZZAS_PATH: &str = "/api/pizzas";
pub const CONTACT_PATH: &str = "/api/contact";

/// HTTP client for the storefront API. Cheap to clone; all clones share
/// one connection pool.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    client: Client,
    base_url: String,
}

impl StorefrontClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON payload from an endpoint path, decoded into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("Making API request to: {}", self.url(path));
        let response = self.client.get(self.url(path)).send().await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(StorefrontError::StatusError {
                endpoint: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// POST a JSON body to an endpoint path, ignoring the response body.
    pub async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<()> {
        tracing::debug!("Posting to: {}", self.url(path));
        let response = self.client.post(self.url(path)).json(body).send().await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(StorefrontError::StatusError {
                endpoint: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl StorefrontApi for StorefrontClient {
    async fn pizza_of_the_day(&self) -> Result<Pizza> {
        let pizza: Pizza = self.get_json(PIZZA_OF_THE_DAY_PATH).await?;
        pizza.validate()?;
        Ok(pizza)
    }

    async fn pizzas(&self) -> Result<Vec<Pizza>> {
        let pizzas: Vec<Pizza> = self.get_json(PIZZAS_PATH).await?;
        for pizza in &pizzas {
            pizza.validate()?;
        }
        Ok(pizzas)
    }

    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<()> {
        submission.validate()?;
        self.post_json(CONTACT_PATH, submission).await
    }
}
