use crate::config::AppConfig;
use crate::models::params::SearchParams;
use crate::models::solr::{SolrFacetResponse, SolrSearchResponse};
use crate::services::http::{get_json, FetchError};
use serde_json::Value;

const SOLR_CORE: &str = "jobs";
const PAGE_SIZE: u32 = 12;
const FACET_LIMIT: u32 = 2_000_000;

/// Solr query values only need three characters escaped.
pub fn escape_value(value: &str) -> String {
    value
        .replace(' ', "%20")
        .replace('&', "%26")
        .replace('$', "%24")
}

/// Turns a comma-separated value list into one disjunctive filter query:
/// `&fq=field%3A%22a%22%20OR%20field%3A%22b%22`.
pub fn filter_clause(field: &str, values: &str) -> String {
    let clauses: Vec<String> = values
        .split(',')
        .map(|item| format!("{}%3A%22{}%22", field, escape_value(item)))
        .collect();

    format!("&fq={}", clauses.join("%20OR%20"))
}

/// Builds the select URL for a search request. Absent `remote` forces the
/// literal `remote:"remote"` filter; `page` is 1-based with a fixed page
/// size of 12.
pub fn build_search_url(server: &str, params: &SearchParams) -> String {
    let mut query = String::from("?indent=true&q.op=OR&");

    match params.q.as_deref() {
        Some(q) => query.push_str(&format!("q={}", escape_value(q))),
        None => query.push_str("q=*:*"),
    }

    if let Some(company) = params.company.as_deref() {
        query.push_str(&filter_clause("company", company));
    }
    if let Some(city) = params.city.as_deref() {
        query.push_str(&filter_clause("city", city));
    }
    match params.remote.as_deref() {
        Some(remote) => query.push_str(&filter_clause("remote", remote)),
        None => query.push_str("&fq=remote%3A%22remote%22"),
    }

    if let Some(page) = params.page {
        // u64 so the largest 1-based page still yields a correct offset.
        let start = u64::from(page.saturating_sub(1)) * u64::from(PAGE_SIZE);
        query.push_str(&format!("&start={}&rows={}", start, PAGE_SIZE));
    }

    query.push_str("&useParams=");

    format!("http://{}/solr/{}/select{}", server, SOLR_CORE, query)
}

/// Fixed facet query for the totals endpoint: company facet counts only,
/// zero document rows.
pub fn build_totals_url(server: &str) -> String {
    format!(
        "http://{}/solr/{}/select?facet.field=company_str&facet.limit={}&facet=true\
         &fl=company&indent=true&q.op=OR&q=*:*&rows=0&start=0&useParams=",
        server, SOLR_CORE, FACET_LIMIT
    )
}

/// Facet entries alternate value and count; a company counts only when its
/// count is positive.
pub fn count_companies(entries: &[Value]) -> u64 {
    entries
        .iter()
        .skip(1)
        .step_by(2)
        .filter(|count| count.as_i64().unwrap_or(0) > 0)
        .count() as u64
}

pub async fn fetch_search(
    config: &AppConfig,
    url: &str,
) -> Result<SolrSearchResponse, FetchError> {
    get_json(config, url, basic_auth(config)).await
}

pub async fn fetch_totals(config: &AppConfig, url: &str) -> Result<SolrFacetResponse, FetchError> {
    get_json(config, url, basic_auth(config)).await
}

fn basic_auth(config: &AppConfig) -> Option<(&str, &str)> {
    Some((
        config.solr_user.as_deref().unwrap_or(""),
        config.solr_pass.as_deref().unwrap_or(""),
    ))
}
