use crate::utils::text::normalize_diacritics;
use serde::Deserialize;

/// Inbound filter parameters, shared by the query builders for both
/// backends. `company`, `city` and `remote` may hold comma-separated lists
/// with OR semantics; `page` is 1-based.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub company: Option<String>,
    pub city: Option<String>,
    pub remote: Option<String>,
    pub page: Option<u32>,
}

impl SearchParams {
    /// Applies the diacritics substitution table to every filter value.
    pub fn normalized(self) -> Self {
        Self {
            q: self.q.map(|v| normalize_diacritics(&v)),
            company: self.company.map(|v| normalize_diacritics(&v)),
            city: self.city.map(|v| normalize_diacritics(&v)),
            remote: self.remote.map(|v| normalize_diacritics(&v)),
            page: self.page,
        }
    }
}
