use crate::domain::model::{ContactSubmission, Pizza};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The storefront backend as seen from this client. Production code
/// talks to it over HTTP; tests stand a mock server behind the same
/// operations.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    async fn pizza_of_the_day(&self) -> Result<Pizza>;

    async fn pizzas(&self) -> Result<Vec<Pizza>>;

    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;

    fn output_path(&self) -> &str;
}
