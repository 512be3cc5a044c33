//! Search, browse and inspect recipes from a meal catalog API.
//!
//! The crate has four parts: an API client
//! ([`client`]), pure renderers ([`render`]), the page state they write into
//! ([`view`]), and the handlers wiring user gestures to both ([`browser`]).
//!
//! ```no_run
//! use meal_browser::{connect, BrowserConfig, LogNotifier};
//!
//! # async fn run() -> Result<(), meal_browser::MealError> {
//! let browser = connect(&BrowserConfig::load()?, Box::new(LogNotifier))?;
//! browser.search("Arrabiata").await;
//! println!("{}", browser.view().results());
//! # Ok(())
//! # }
//! ```

pub mod browser;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod view;

pub use browser::{LogNotifier, MealBrowser, Notifier};
pub use client::{MealApi, MealClient};
pub use config::BrowserConfig;
pub use error::MealError;
pub use model::{Category, Ingredient, MealDetail, MealSummary};
pub use view::{Panel, ViewModel};

/// Builds a browser backed by the HTTP client described by `config`.
pub fn connect(
    config: &BrowserConfig,
    notifier: Box<dyn Notifier>,
) -> Result<MealBrowser, MealError> {
    let client = MealClient::new(config)?;
    Ok(MealBrowser::new(Box::new(client), notifier))
}
