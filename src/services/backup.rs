use crate::config::AppConfig;
use crate::models::backup::{BackupSearchResponse, BackupTotalsResponse};
use crate::models::params::SearchParams;
use crate::models::responses::{SearchResult, TotalCounts, TotalsResult};
use crate::services::http::{get_json, probe, FetchError};
use crate::utils::text::urlencode;
use tracing::info;

/// Rebuilds the query in the backup API's dialect from the original filter
/// parameters. `search` is always present; `~` characters are stripped from
/// the city list.
pub fn build_search_query(params: &SearchParams) -> String {
    let mut query = format!("?search={}", urlencode(params.q.as_deref().unwrap_or("")));

    if let Some(city) = params.city.as_deref() {
        query.push_str(&format!("&cities={}", urlencode(&city.replace('~', ""))));
    }
    if let Some(company) = params.company.as_deref() {
        query.push_str(&format!("&companies={}", urlencode(company)));
    }
    if let Some(remote) = params.remote.as_deref() {
        query.push_str(&format!("&remote={}", urlencode(remote)));
    }
    if let Some(page) = params.page {
        query.push_str(&format!("&page={}", page));
    }

    query
}

fn backup_base(config: &AppConfig) -> Result<&str, FetchError> {
    config
        .backup_server
        .as_deref()
        .map(|server| server.trim_end_matches('/'))
        .ok_or(FetchError::ConfigMissing("BACK_SERVER"))
}

/// Fetches the backup search endpoint and reshapes its schema into the
/// canonical one.
pub async fn fetch_search(
    config: &AppConfig,
    params: &SearchParams,
) -> Result<SearchResult, FetchError> {
    let base = backup_base(config)?;
    let url = format!("{}/mobile/{}", base, build_search_query(params));
    info!("Querying backup endpoint: {}", url);

    let response: BackupSearchResponse = get_json(config, &url, None).await?;
    Ok(SearchResult::from(response))
}

/// Fetches the backup totals endpoint. The backup is probed first, the same
/// way the primary is, so an unreachable backup fails cleanly.
pub async fn fetch_totals(config: &AppConfig) -> Result<TotalsResult, FetchError> {
    let base = backup_base(config)?;
    let url = format!("{}/mobile/total/", base);
    info!("Querying backup totals endpoint: {}", url);

    probe(config, &url).await?;
    let response: BackupTotalsResponse = get_json(config, &url, None).await?;

    Ok(TotalsResult {
        total: TotalCounts {
            jobs: response.total,
            companies: response.companies.unwrap_or(0),
        },
    })
}
