use super::ApiJson;
use crate::config::AppConfig;
use crate::models::responses::{ErrorResponse, TotalCounts, TotalsResult};
use crate::services::http::FetchError;
use crate::services::{backup, http, solr};
use axum::{
    extract::State,
    http::{Method, StatusCode},
};
use std::sync::Arc;
use tracing::{error, info};

type Config = Arc<AppConfig>;
type ApiError = (StatusCode, ApiJson<ErrorResponse>);

/// Aggregation proxy. The fallback policy differs from the search endpoint
/// on purpose: only a failed probe routes to the backup; transport and
/// decode failures after a successful probe are status-coded (503/500).
pub async fn job_totals(
    method: Method,
    State(config): State<Config>,
) -> Result<ApiJson<TotalsResult>, ApiError> {
    if method != Method::GET {
        return Err((
            StatusCode::METHOD_NOT_ALLOWED,
            ApiJson(ErrorResponse::new("Only GET method is allowed")),
        ));
    }

    let server = match config.solr_server.as_deref() {
        Some(server) => server,
        None => {
            error!("PROD_SERVER is not configured, refusing totals request");
            return Err((
                StatusCode::OK,
                ApiJson(ErrorResponse::new("PROD_SERVER is not set")),
            ));
        }
    };

    let url = solr::build_totals_url(server);

    match http::probe(&config, &url).await {
        Ok(()) => match solr::fetch_totals(&config, &url).await {
            Ok(facets) => {
                let companies =
                    solr::count_companies(&facets.facet_counts.facet_fields.company_str);
                Ok(ApiJson(TotalsResult {
                    total: TotalCounts {
                        jobs: facets.response.num_found,
                        companies,
                    },
                }))
            }
            Err(FetchError::InvalidJson { raw, .. }) => {
                error!("Malformed facet response from primary backend");
                Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiJson(
                        ErrorResponse::new("Invalid response from Solr")
                            .with_code(500)
                            .with_raw_response(raw),
                    ),
                ))
            }
            Err(e) => {
                error!("Totals fetch failed: {}", e);
                Err((
                    StatusCode::SERVICE_UNAVAILABLE,
                    ApiJson(
                        ErrorResponse::new("SOLR server is down")
                            .with_code(503)
                            .with_details(e.to_string()),
                    ),
                ))
            }
        },
        Err(probe_err) => {
            info!("Primary backend unavailable, using backup: {}", probe_err);
            match backup::fetch_totals(&config).await {
                Ok(totals) => Ok(ApiJson(totals)),
                Err(backup_err) => {
                    error!(
                        "Both backends failed: primary: {}; backup: {}",
                        probe_err, backup_err
                    );
                    Err((
                        StatusCode::OK,
                        ApiJson(ErrorResponse::new("Both endpoints are unavailable").with_details(
                            format!("primary: {}; backup: {}", probe_err, backup_err),
                        )),
                    ))
                }
            }
        }
    }
}
