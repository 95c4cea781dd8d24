//! Carousel Records
//!
//! Wire and in-memory shapes of a carousel entry.

use serde::{Deserialize, Serialize};

/// One carousel entry as held by the list view.
///
/// `id` is assigned by the remote store and is the only field that
/// correlates a record across fetches. `order` is a display hint and may
/// repeat. `key` is purely a row identity for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WireItem")]
pub struct CarouselItem {
    pub order: i64,
    pub key: String,
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
}

impl CarouselItem {
    /// Editable fields of this record, e.g. to prefill the edit form.
    pub fn to_draft(&self) -> CarouselDraft {
        CarouselDraft {
            order: self.order,
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            link: self.link.clone(),
        }
    }
}

/// Body sent when registering or editing an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselDraft {
    pub order: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
}

/// The mock API serialises numbers as strings (`"id": "7"`), so both are accepted.
/// Whole floats such as `1.0` also pass.
#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Numeric {
    fn to_i64(&self, field: &str) -> Result<i64, String> {
        match self {
            Numeric::Int(n) => Ok(*n),
            Numeric::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(*f as i64),
            Numeric::Float(f) => Err(format!("{field} is not a whole number: {f}")),
            Numeric::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("{field} is not a number: {s:?}")),
        }
    }
}

#[derive(Deserialize)]
struct WireItem {
    #[serde(default)]
    order: Option<Numeric>,
    #[serde(default)]
    key: Option<String>,
    id: Numeric,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    link: String,
}

impl TryFrom<WireItem> for CarouselItem {
    type Error = String;

    fn try_from(wire: WireItem) -> Result<Self, Self::Error> {
        let id = wire.id.to_i64("id")?;
        let order = match &wire.order {
            Some(order) => order.to_i64("order")?,
            None => 0,
        };
        let key = match wire.key {
            Some(key) if !key.is_empty() => key,
            _ => id.to_string(),
        };
        Ok(Self {
            order,
            key,
            id,
            title: wire.title,
            description: wire.description,
            image: wire.image,
            link: wire.link,
        })
    }
}
