//! Test fixtures shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};
use crate::record::CarouselItem;
use crate::source::CarouselSource;

pub fn item(id: i64, order: i64) -> CarouselItem {
    CarouselItem {
        order,
        key: format!("key-{id}"),
        id,
        title: format!("Item {id}"),
        description: String::new(),
        image: format!("https://img.example/{id}.png"),
        link: format!("https://site.example/{id}"),
    }
}

/// `count` items whose `order` runs backwards so sorting is observable.
pub fn reversed_items(count: i64) -> Vec<CarouselItem> {
    (1..=count).map(|id| item(id, count - id)).collect()
}

/// Replays queued responses and counts how many times it was asked.
#[derive(Default)]
pub struct ScriptedSource {
    responses: RefCell<VecDeque<FetchResult<Vec<CarouselItem>>>>,
    calls: Cell<usize>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, items: Vec<CarouselItem>) {
        self.responses.borrow_mut().push_back(Ok(items));
    }

    pub fn push_err(&self, err: FetchError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl CarouselSource for ScriptedSource {
    async fn list(&self) -> FetchResult<Vec<CarouselItem>> {
        self.calls.set(self.calls.get() + 1);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Request("no scripted response".into())))
    }
}
