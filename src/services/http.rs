use crate::config::AppConfig;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Outcome of one outbound call. Handlers branch on the variant: probe
/// failures route to the fallback translator, transport and decode failures
/// become status-coded errors.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("endpoint is not available: {0}")]
    Unavailable(String),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid JSON response from {url}")]
    InvalidJson { url: String, raw: String },
    #[error("{0} is not set")]
    ConfigMissing(&'static str),
}

fn client_for(config: &AppConfig, url: &str) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })
}

/// Header-only existence check. Best-effort and unauthenticated; anything
/// other than a clean 200 counts as unavailable.
pub async fn probe(config: &AppConfig, url: &str) -> Result<(), FetchError> {
    let client = client_for(config, url)?;
    let available = match client.head(url).send().await {
        Ok(response) => response.status() == StatusCode::OK,
        Err(_) => false,
    };

    if available {
        Ok(())
    } else {
        Err(FetchError::Unavailable(url.to_string()))
    }
}

/// GET + JSON decode, with optional Basic-Auth credentials. Keeps the raw
/// body around so malformed payloads can be surfaced for diagnosis.
pub async fn get_json<T: DeserializeOwned>(
    config: &AppConfig,
    url: &str,
    auth: Option<(&str, &str)>,
) -> Result<T, FetchError> {
    let client = client_for(config, url)?;

    let mut request = client.get(url);
    if let Some((user, pass)) = auth {
        request = request.basic_auth(user, Some(pass));
    }

    let transport = |source| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let response = request.send().await.map_err(transport)?;
    let raw = response.text().await.map_err(transport)?;

    serde_json::from_str(&raw).map_err(|_| FetchError::InvalidJson {
        url: url.to_string(),
        raw,
    })
}
