use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

/// Canonical job record. Every response emits this shape, no matter which
/// backend actually served the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobRecord {
    pub job_title: String,
    pub company: String,
    pub city: Vec<String>,
    pub county: Vec<String>,
    pub remote: String,
    pub job_link: String,
    pub id: String,
    #[serde(rename = "logoUrl", skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchBody {
    pub docs: Vec<JobRecord>,
    #[serde(rename = "numFound")]
    pub num_found: u64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub response: SearchBody,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TotalCounts {
    pub jobs: u64,
    pub companies: u64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TotalsResult {
    pub total: TotalCounts,
}

/// Structured error payload; optional fields are omitted from the JSON.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
            details: None,
            raw_response: None,
        }
    }

    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_raw_response(mut self, raw: impl Into<String>) -> Self {
        self.raw_response = Some(raw.into());
        self
    }
}
