use crate::config::BrowserConfig;
use crate::model::{Category, MealDetail, MealSummary, Meals};
use crate::MealError;
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use url::form_urlencoded::byte_serialize;

/// The requests the browser can make against the meal catalog.
///
/// `None` means the catalog answered with `{"meals": null}`.
#[async_trait]
pub trait MealApi: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, MealError>;

    async fn search_by_name(&self, name: &str) -> Result<Option<Vec<MealSummary>>, MealError>;

    async fn random(&self) -> Result<Option<Vec<MealSummary>>, MealError>;

    async fn filter_by_category(
        &self,
        category: &str,
    ) -> Result<Option<Vec<MealSummary>>, MealError>;

    async fn lookup_by_id(&self, id: &str) -> Result<Option<MealDetail>, MealError>;
}

/// HTTP client for the meal backend.
pub struct MealClient {
    client: Client,
    api_base: String,
    fallback_base: Option<String>,
}

impl MealClient {
    pub fn new(config: &BrowserConfig) -> Result<Self, MealError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }

        // Both bases must parse before any request is made.
        Url::parse(&config.api_base)?;
        let fallback_base = if config.fallback_enabled {
            Url::parse(&config.fallback_base)?;
            Some(config.fallback_base.clone())
        } else {
            None
        };

        Ok(Self {
            client: builder.build()?,
            api_base: config.api_base.clone(),
            fallback_base,
        })
    }

    /// `{base}/{path}?key=value...` with every value percent-encoded.
    fn endpoint(base: &str, path: &str, query: &[(&str, &str)]) -> Result<Url, MealError> {
        let mut url = Url::parse(&format!("{}/{}", base.trim_end_matches('/'), path))?;
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
                .collect();
            url.set_query(Some(&pairs.join("&")));
        }
        Ok(url)
    }

    async fn send(&self, url: Url) -> Result<Response, MealError> {
        debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, MealError> {
        let url = Self::endpoint(&self.api_base, path, query)?;
        let response = self.send(url).await?;
        if !response.status().is_success() {
            warn!("{} answered with status {}", response.url(), response.status());
        }
        parse_body(response).await
    }
}

/// Form encoding with spaces as `%20`. A literal `+` is already `%2B` by then.
fn percent_encode(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T, MealError> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl MealApi for MealClient {
    async fn categories(&self) -> Result<Vec<Category>, MealError> {
        let list: Meals<Category> = self.get_json("categories", &[]).await?;
        Ok(list.meals.unwrap_or_default())
    }

    async fn search_by_name(&self, name: &str) -> Result<Option<Vec<MealSummary>>, MealError> {
        let list: Meals<MealSummary> = self.get_json("search", &[("name", name)]).await?;
        Ok(list.meals)
    }

    async fn random(&self) -> Result<Option<Vec<MealSummary>>, MealError> {
        let list: Meals<MealSummary> = self.get_json("random", &[]).await?;
        Ok(list.meals)
    }

    async fn filter_by_category(
        &self,
        category: &str,
    ) -> Result<Option<Vec<MealSummary>>, MealError> {
        let url = Self::endpoint(&self.api_base, "filter", &[("category", category)])?;
        let response = self.send(url).await?;
        let status = response.status();

        if status.is_success() {
            let list: Meals<MealSummary> = parse_body(response).await?;
            return Ok(list.meals);
        }

        let Some(fallback_base) = &self.fallback_base else {
            return Err(MealError::StatusError {
                url: response.url().to_string(),
                status,
            });
        };

        // Best effort: the third-party catalog may reject us just the same.
        info!(
            "Category filter answered {}, falling back to {}",
            status, fallback_base
        );
        let url = Self::endpoint(fallback_base, "filter.php", &[("c", category)])?;
        let fallback = self.send(url).await?;
        let list: Meals<MealSummary> = parse_body(fallback).await?;
        Ok(list.meals)
    }

    async fn lookup_by_id(&self, id: &str) -> Result<Option<MealDetail>, MealError> {
        let list: Meals<MealDetail> = self.get_json("lookup", &[("id", id)]).await?;
        Ok(list.meals.and_then(|meals| meals.into_iter().next()))
    }
}
