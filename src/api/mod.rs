//! Remote API
//!
//! HTTP bindings to the carousel collection, organized by resource.

mod carousel;

pub use carousel::RestClient;
