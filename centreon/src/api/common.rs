//! Common types shared by the collection endpoints

use serde::Deserialize;

/// Collection responses wrap their items in a `result` array
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub result: Vec<T>,
}

/// An `{id, name}` pair, how the platform enriches association references
/// on read
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

/// Search criterion rendered into the collection endpoints' `search` query
/// parameter as a JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    pub name: String,
    pub value: String,
}

impl SearchFilter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Exact-name filter, the lookup every name-addressed operation uses
    pub fn by_name(value: impl Into<String>) -> Self {
        Self::new("name", value)
    }

    fn to_json(&self) -> String {
        let mut filter = serde_json::Map::new();
        filter.insert(
            self.name.clone(),
            serde_json::Value::String(self.value.clone()),
        );
        serde_json::Value::Object(filter).to_string()
    }
}

/// Pagination plus optional search for collection GETs
#[derive(Debug, Clone, PartialEq)]
pub struct ListParams {
    pub limit: u32,
    pub page: u32,
    pub search: Option<SearchFilter>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: 10,
            page: 1,
            search: None,
        }
    }
}

impl ListParams {
    pub fn new(limit: u32, page: u32) -> Self {
        Self {
            limit,
            page,
            search: None,
        }
    }

    pub fn with_search(mut self, search: SearchFilter) -> Self {
        self.search = Some(search);
        self
    }

    /// Single-result lookup by exact name
    pub fn name_lookup(name: &str) -> Self {
        Self::new(1, 1).with_search(SearchFilter::by_name(name))
    }

    pub fn query_string(&self) -> String {
        let search = match &self.search {
            Some(filter) => filter.to_json(),
            None => "{}".to_string(),
        };
        format!(
            "?limit={}&page={}&search={}",
            self.limit,
            self.page,
            urlencoding::encode(&search)
        )
    }
}
