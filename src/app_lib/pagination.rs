//! List parameters and the reshaping of the backend's paginated envelope
//! (`data` + `meta.current_page/per_page/total/last_page`) into `Page<T>`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_PAGE: u32 = 1;

/// Caller-side list options. Zero or missing values fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub search: Option<String>,
}

impl ListParams {
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Query string parameters as sent to the backend.
    #[must_use]
    pub fn query(&self) -> ListQuery {
        ListQuery {
            limit: self.limit.filter(|limit| *limit > 0).unwrap_or(DEFAULT_LIMIT),
            page: self.page.filter(|page| *page > 0).unwrap_or(DEFAULT_PAGE),
            search: self.search.clone().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub limit: u32,
    pub page: u32,
    pub search: String,
}

/// Pagination metadata as the backend sends it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BackendMeta {
    #[serde(default)]
    pub current_page: u64,
    #[serde(default)]
    pub per_page: u64,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub last_page: u64,
}

/// Paginated backend response.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: BackendMeta,
}

/// Plain `data` wrapper used by non-paginated endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub last_page: u64,
}

impl From<BackendMeta> for PageMeta {
    fn from(meta: BackendMeta) -> Self {
        Self {
            page: meta.current_page,
            per_page: meta.per_page,
            total: meta.total,
            last_page: meta.last_page,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> From<Envelope<T>> for Page<T> {
    fn from(envelope: Envelope<T>) -> Self {
        Self {
            items: envelope.data,
            meta: envelope.meta.into(),
        }
    }
}
