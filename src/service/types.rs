//! Wire types shared between the book data service and the catalog store.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// A single book record.
///
/// The store only relies on `id`, which may arrive as a string or a number.
/// Every other attribute is kept as the API sent it, whatever its JSON shape,
/// and serialized back unchanged. The accessors read the common ones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Book {
    #[serde(deserialize_with = "label")]
    pub id: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Book {
    /// Create a book with only an id and title set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let mut attributes = Map::new();
        attributes.insert("title".to_string(), Value::String(title.into()));
        Self {
            id: id.into(),
            attributes,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn author(&self) -> Option<&str> {
        self.text("author")
    }

    pub fn category(&self) -> Option<&str> {
        self.text("category")
    }

    /// Publication year as text, whether the API sent a string or a number.
    pub fn publication_year(&self) -> Option<String> {
        match self.attributes.get("publicationYear")? {
            Value::String(year) => Some(year.clone()),
            Value::Number(year) => Some(year.to_string()),
            _ => None,
        }
    }

    /// A string attribute. `None` when absent or not a string.
    fn text(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}

/// Query parameters for a filtered book listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl FilterParams {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_publication_year(mut self, year: impl Into<String>) -> Self {
        self.publication_year = Some(year.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Query string pairs in a stable order. Unset and blank fields are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("category", &self.category),
            ("publicationYear", &self.publication_year),
            ("search", &self.search),
        ];
        let numbers = [("page", self.page), ("limit", self.limit)];

        text.into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v.to_string()))
            })
            .chain(
                numbers
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v.to_string()))),
            )
            .collect()
    }
}

/// A label the API may send either as a JSON string or a number.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum LabelRepr {
    Text(String),
    Number(Number),
}

impl From<LabelRepr> for String {
    fn from(repr: LabelRepr) -> Self {
        match repr {
            LabelRepr::Text(text) => text,
            LabelRepr::Number(n) => n.to_string(),
        }
    }
}

fn label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    LabelRepr::deserialize(deserializer).map(String::from)
}

/// Decode a list of labels, accepting strings and numbers mixed.
pub(crate) fn labels_from_value(value: Value) -> Result<Vec<String>, serde_json::Error> {
    let reprs: Vec<LabelRepr> = serde_json::from_value(value)?;
    Ok(reprs.into_iter().map(String::from).collect())
}
