//! # Paginated Responses
//!
//! The backend paginates list endpoints with a Laravel-style paginator
//! (`{data: [...], current_page, last_page, next_page_url}`); a few legacy
//! routes return the bare array. [`Paginated`] decodes either shape.

use serde::{Deserialize, Deserializer, Serialize};

/// One page of a list endpoint
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub current_page: Option<u32>,
    pub last_page: Option<u32>,
    pub next_page_url: Option<String>,
    /// Whether the payload carried a `next_page_url` key at all (even `null`).
    #[serde(skip)]
    pub has_next_marker: bool,
}

impl<T> Paginated<T> {
    /// A final page holding `items`.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            current_page: None,
            last_page: None,
            next_page_url: None,
            has_next_marker: true,
        }
    }

    /// Whether another page follows this one.
    ///
    /// Driven by the `next_page_url` marker; page counters are only consulted
    /// when the payload omits the marker entirely.
    pub fn has_more(&self) -> bool {
        if self.has_next_marker {
            return self.next_page_url.is_some();
        }
        matches!((self.current_page, self.last_page), (Some(current), Some(last)) if current < last)
    }
}

impl<'de, T> Deserialize<'de> for Paginated<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Paginator<T> {
            data: Vec<T>,
            #[serde(default)]
            current_page: Option<u32>,
            #[serde(default)]
            last_page: Option<u32>,
            // Outer None: key absent. Some(None): explicit null.
            #[serde(default, deserialize_with = "present")]
            next_page_url: Option<Option<String>>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape<T> {
            Paginator(Paginator<T>),
            Bare(Vec<T>),
        }

        Ok(match Shape::deserialize(deserializer)? {
            Shape::Paginator(p) => Paginated {
                items: p.data,
                current_page: p.current_page,
                last_page: p.last_page,
                has_next_marker: p.next_page_url.is_some(),
                next_page_url: p.next_page_url.flatten(),
            },
            Shape::Bare(items) => Paginated::last(items),
        })
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
