use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{validate_email, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable product snapshot as served by the storefront API.
/// `sizes` maps a size label ("S", "M", "L") to its price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub sizes: BTreeMap<String, f64>,
}

impl Pizza {
    pub fn price(&self, size: &str) -> Option<f64> {
        self.sizes.get(size).copied()
    }
}

impl Validate for Pizza {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("pizza id", &self.id)?;
        validate_non_empty_string("pizza name", &self.name)?;
        Ok(())
    }
}

/// One selected pizza in the cart. The price is captured from the size
/// table at add time so a later catalog refresh cannot reprice the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub pizza: Pizza,
    pub size: String,
    pub price: f64,
}

/// Session-local selection. Lives in memory only and is discarded with
/// the session that created it.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pizza: Pizza, size: &str) -> Result<()> {
        let price = pizza
            .price(size)
            .ok_or_else(|| StorefrontError::ValidationError {
                message: format!("pizza {} has no size {}", pizza.id, size),
            })?;
        self.items.push(CartItem {
            pizza,
            size: size.to_string(),
            price,
        });
        Ok(())
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Contact form payload, sent once per submit action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Validate for ContactSubmission {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_email("email", &self.email)?;
        validate_non_empty_string("message", &self.message)?;
        Ok(())
    }
}
