//! Data Source Traits
//!
//! Abstract access to the remote carousel collection.
//! The browser client implements these over HTTP; tests use scripted fakes.

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::record::{CarouselDraft, CarouselItem};

/// Read side, all the list view itself needs.
///
/// Futures are `?Send`: in the browser everything runs on one thread and the
/// fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait CarouselSource {
    /// Fetch the whole collection. Order of the result is irrelevant.
    async fn list(&self) -> FetchResult<Vec<CarouselItem>>;
}

/// Write side, used by the form and dialog collaborators.
#[async_trait(?Send)]
pub trait CarouselApi: CarouselSource {
    /// Register a new entry.
    async fn create(&self, draft: &CarouselDraft) -> FetchResult<CarouselItem>;

    /// Replace the editable fields of an existing entry.
    async fn update(&self, id: i64, draft: &CarouselDraft) -> FetchResult<CarouselItem>;

    /// Remove an entry.
    async fn delete(&self, id: i64) -> FetchResult<()>;
}
