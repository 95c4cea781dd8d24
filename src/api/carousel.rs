//! Carousel Collection Client
//!
//! `GET/POST {base}/items`, `PUT/DELETE {base}/items/{id}`.

use async_trait::async_trait;
use carousel_list::{CarouselApi, CarouselDraft, CarouselItem, CarouselSource, FetchError, FetchResult};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    pub fn item_url(&self, id: i64) -> String {
        format!("{}/items/{}", self.base_url, id)
    }
}

fn request_error(err: reqwest::Error) -> FetchError {
    FetchError::Request(err.to_string())
}

fn check_status(response: &reqwest::Response) -> FetchResult<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status(status.as_u16()))
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> FetchResult<T> {
    check_status(&response)?;
    let body = response.text().await.map_err(request_error)?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait(?Send)]
impl CarouselSource for RestClient {
    async fn list(&self) -> FetchResult<Vec<CarouselItem>> {
        let response = self
            .http
            .get(self.items_url())
            .send()
            .await
            .map_err(request_error)?;
        read_json(response).await
    }
}

#[async_trait(?Send)]
impl CarouselApi for RestClient {
    async fn create(&self, draft: &CarouselDraft) -> FetchResult<CarouselItem> {
        let response = self
            .http
            .post(self.items_url())
            .json(draft)
            .send()
            .await
            .map_err(request_error)?;
        read_json(response).await
    }

    async fn update(&self, id: i64, draft: &CarouselDraft) -> FetchResult<CarouselItem> {
        let response = self
            .http
            .put(self.item_url(id))
            .json(draft)
            .send()
            .await
            .map_err(request_error)?;
        read_json(response).await
    }

    async fn delete(&self, id: i64) -> FetchResult<()> {
        let response = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(request_error)?;
        // The deleted record comes back in the body; nothing uses it.
        check_status(&response)
    }
}
