use serde::Deserialize;
use serde_json::Value;

/// A document as Solr returns it: the company field is multi-valued.
#[derive(Debug, Clone, Deserialize)]
pub struct SolrJob {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: Vec<String>,
    #[serde(default)]
    pub city: Vec<String>,
    #[serde(default)]
    pub county: Vec<String>,
    #[serde(default)]
    pub remote: String,
    #[serde(default)]
    pub job_link: String,
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct SolrResponseBody {
    #[serde(default)]
    pub docs: Vec<SolrJob>,
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
}

#[derive(Debug, Deserialize)]
pub struct SolrSearchResponse {
    pub response: SolrResponseBody,
}

/// Facet payload for the totals query. Solr encodes facet counts as a flat
/// array alternating value and count: `["Acme", 5, "Beta", 0, ...]`.
#[derive(Debug, Deserialize)]
pub struct SolrFacetFields {
    pub company_str: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SolrFacetCounts {
    pub facet_fields: SolrFacetFields,
}

#[derive(Debug, Deserialize)]
pub struct SolrFacetDocs {
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
}

#[derive(Debug, Deserialize)]
pub struct SolrFacetResponse {
    pub response: SolrFacetDocs,
    pub facet_counts: SolrFacetCounts,
}
