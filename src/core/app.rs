use crate::core::cache::QueryCache;
use crate::core::client::{StorefrontClient, PIZZAS_PATH, PIZZA_OF_THE_DAY_PATH};
use crate::core::contact::ContactForm;
use crate::core::fetch::{Fetch, FetchState};
use crate::domain::model::{Cart, ContactSubmission, Pizza};
use crate::render;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::Validate;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Pages the storefront can show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route {
    Order,
    Contact,
}

impl Route {
    pub fn resolve(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Order),
            "/contact" => Some(Route::Contact),
            _ => None,
        }
    }
}

/// Application shell: owns the HTTP client, the shared query cache, and
/// the session cart, and composes routes with the data they need. Both
/// collaborators are injected; nothing here is a global.
pub struct App {
    client: StorefrontClient,
    cache: Arc<QueryCache>,
    cart: Cart,
}

impl App {
    pub fn new(client: StorefrontClient, cache: Arc<QueryCache>) -> Self {
        Self {
            client,
            cache,
            cart: Cart::new(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Resolve a path and render its page.
    pub async fn render(&self, path: &str) -> Result<String> {
        let route = Route::resolve(path).ok_or_else(|| StorefrontError::ProcessingError {
            message: format!("no route matches {}", path),
        })?;

        tracing::debug!("Rendering route {:?}", route);
        match route {
            Route::Order => self.render_order().await,
            Route::Contact => Ok(render::contact_page(&ContactForm::new())),
        }
    }

    async fn render_order(&self) -> Result<String> {
        let pizzas: Vec<Pizza> = self.cache.get(&self.client, PIZZAS_PATH).await?;
        for pizza in &pizzas {
            pizza.validate()?;
        }
        tracing::info!("Loaded catalog with {} pizzas", pizzas.len());

        let mut fetch: Fetch<Pizza> = Fetch::spawn(self.client.clone(), PIZZA_OF_THE_DAY_PATH);
        let pizza_of_the_day = match fetch.try_resolved().await {
            Ok(pizza) => FetchState::Resolved(pizza),
            // The widget degrades on its own; the page still renders.
            Err(e) => {
                tracing::warn!("Pizza of the day unavailable: {}", e);
                FetchState::Failed(e.to_string())
            }
        };

        Ok(render::order_page(&pizzas, &self.cart, &pizza_of_the_day))
    }

    /// Render a route and write it as index.html under `dir`, creating
    /// the directory if needed. Returns the written file's path.
    pub async fn render_to_dir(&self, path: &str, dir: &Path) -> Result<PathBuf> {
        let html = self.render(path).await?;

        std::fs::create_dir_all(dir)?;
        let file = dir.join("index.html");
        std::fs::write(&file, html)?;

        tracing::info!("Wrote {} to {}", path, file.display());
        Ok(file)
    }

    /// Drive the contact form flow once. Returns the page the form
    /// ended on together with the submit outcome, so a failed submit
    /// still has a visible page.
    pub async fn submit_contact(&self, submission: ContactSubmission) -> (String, Result<()>) {
        let mut form = ContactForm::new();
        let outcome = form.submit(&self.client, submission).await;
        (render::contact_page(&form), outcome)
    }
}
