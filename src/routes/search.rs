use super::ApiJson;
use crate::config::AppConfig;
use crate::models::params::SearchParams;
use crate::models::responses::{ErrorResponse, JobRecord, SearchBody, SearchResult};
use crate::models::solr::SolrSearchResponse;
use crate::services::logo::logo_url_for;
use crate::services::{backup, http, solr};
use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
};
use std::sync::Arc;
use tracing::{error, info};

type Config = Arc<AppConfig>;
type ApiError = (StatusCode, ApiJson<ErrorResponse>);

/// Search proxy. The probe result is the only fallback trigger on this
/// endpoint; every failure of its own is reported with HTTP 200 and an
/// embedded error payload, which the frontend consumer expects.
pub async fn search_jobs(
    method: Method,
    State(config): State<Config>,
    Query(params): Query<SearchParams>,
) -> Result<ApiJson<SearchResult>, ApiError> {
    if method != Method::GET {
        return Err((
            StatusCode::METHOD_NOT_ALLOWED,
            ApiJson(ErrorResponse::new("Only GET method is allowed")),
        ));
    }

    info!("Search query: {:?}", params);
    let params = params.normalized();

    let server = match config.solr_server.as_deref() {
        Some(server) => server,
        None => {
            error!("PROD_SERVER is not configured, refusing search request");
            return Err((
                StatusCode::OK,
                ApiJson(ErrorResponse::new("PROD_SERVER is not set")),
            ));
        }
    };

    let url = solr::build_search_url(server, &params);

    match http::probe(&config, &url).await {
        Ok(()) => match solr::fetch_search(&config, &url).await {
            Ok(response) => Ok(ApiJson(enrich(response))),
            Err(e) => {
                error!("Primary search fetch failed: {}", e);
                Err((
                    StatusCode::OK,
                    ApiJson(
                        ErrorResponse::new("Invalid response from Solr")
                            .with_details(e.to_string()),
                    ),
                ))
            }
        },
        Err(probe_err) => {
            info!("Primary backend unavailable, using backup: {}", probe_err);
            match backup::fetch_search(&config, &params).await {
                Ok(result) => Ok(ApiJson(result)),
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

/// Maps the Solr schema onto the canonical one and attaches a logo URL per
/// document, keyed by the first company entry.
fn enrich(response: SolrSearchResponse) -> SearchResult {
    let docs = response
        .response
        .docs
        .into_iter()
        .map(|doc| {
            let company = doc.company.into_iter().next().unwrap_or_default();
            let logo_url = logo_url_for(&company);
            JobRecord {
                job_title: doc.job_title,
                company,
                city: doc.city,
                county: doc.county,
                remote: doc.remote,
                job_link: doc.job_link,
                id: doc.id,
                logo_url: Some(logo_url),
            }
        })
        .collect();

    SearchResult {
        response: SearchBody {
            docs,
            num_found: response.response.num_found,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::solr::{SolrJob, SolrResponseBody};
    use axum::{body::Body, http::Request, routing::any, Router};
    use http_body_util::BodyExt;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tower::ServiceExt;

    fn test_config(solr: Option<&str>, backup: Option<&str>) -> Config {
        Arc::new(AppConfig {
            solr_server: solr.map(String::from),
            solr_user: None,
            solr_pass: None,
            backup_server: backup.map(String::from),
            request_timeout: Duration::from_secs(1),
        })
    }

    fn app(config: Config) -> Router {
        Router::new()
            .route("/search", any(search_jobs))
            .with_state(config)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Answers exactly one HTTP request with the given JSON body.
    async fn spawn_stub_server(body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn rejects_non_get_requests() {
        let app = app(test_config(Some("127.0.0.1:1"), None));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/search")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Only GET method is allowed");
    }

    #[tokio::test]
    async fn missing_prod_server_fails_without_outbound_calls() {
        let app = app(test_config(None, None));
        let response = app
            .oneshot(Request::builder().uri("/search?q=x").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["error"], "PROD_SERVER is not set");
    }

    #[tokio::test]
    async fn responses_carry_utf8_json_content_type() {
        let app = app(test_config(None, None));
        let response = app
            .oneshot(Request::builder().uri("/search").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn failed_probe_falls_back_and_reshapes_to_canonical() {
        let backup = spawn_stub_server(
            r#"{"results":[{"job_title":"X","company_name":"Acme","city":"Cluj",
                "county":"Cluj","remote":"yes","job_link":"l","id":"1"}],"count":1}"#,
        )
        .await;

        // Port 1 refuses connections, so the probe fails immediately.
        let app = app(test_config(Some("127.0.0.1:1"), Some(backup.as_str())));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/search?q=engineer&company=Acme,Beta&page=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({
                "response": {
                    "docs": [{
                        "job_title": "X",
                        "company": "Acme",
                        "city": ["Cluj"],
                        "county": ["Cluj"],
                        "remote": "yes",
                        "job_link": "l",
                        "id": "1"
                    }],
                    "numFound": 1
                }
            })
        );
    }

    #[tokio::test]
    async fn both_backends_down_yields_single_structured_error() {
        let app = app(test_config(Some("127.0.0.1:1"), Some("http://127.0.0.1:1")));
        let response = app
            .oneshot(Request::builder().uri("/search?q=x").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Both endpoints are unavailable");
        let details = json["details"].as_str().unwrap();
        assert!(details.contains("primary:"));
        assert!(details.contains("backup:"));
        assert!(json.get("response").is_none());
    }

    #[test]
    fn enrich_attaches_logo_and_takes_first_company() {
        let solr = SolrSearchResponse {
            response: SolrResponseBody {
                docs: vec![SolrJob {
                    job_title: "Dev".to_string(),
                    company: vec!["Acme".to_string(), "Acme RO".to_string()],
                    city: vec!["Cluj".to_string()],
                    county: vec!["Cluj".to_string()],
                    remote: "remote".to_string(),
                    job_link: "l".to_string(),
                    id: "7".to_string(),
                }],
                num_found: 1,
            },
        };

        let result = enrich(solr);
        let doc = &result.response.docs[0];
        assert_eq!(doc.company, "Acme");
        assert_eq!(
            doc.logo_url.as_deref(),
            Some("https://logo.clearbit.com/acme.com")
        );
    }
}
