pub mod app;
pub mod cache;
pub mod client;
pub mod contact;
pub mod fetch;

pub use crate::domain::model::{Cart, CartItem, ContactSubmission, Pizza};
pub use crate::domain::ports::{ConfigProvider, StorefrontApi};
pub use app::{App, Route};
pub use cache::QueryCache;
pub use client::StorefrontClient;
pub use contact::{ContactForm, SubmitState};
pub use fetch::{Fetch, FetchState};
