use crate::models::responses::{JobRecord, SearchBody, SearchResult};
use serde::Deserialize;

/// A record as the backup API returns it: flat field names, singular city
/// and county strings.
#[derive(Debug, Clone, Deserialize)]
pub struct BackupJob {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub county: String,
    #[serde(default)]
    pub remote: String,
    #[serde(default)]
    pub job_link: String,
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct BackupSearchResponse {
    #[serde(default)]
    pub results: Vec<BackupJob>,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub struct BackupTotalsResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub companies: Option<u64>,
}

impl From<BackupJob> for JobRecord {
    fn from(job: BackupJob) -> Self {
        JobRecord {
            job_title: job.job_title,
            company: job.company_name,
            city: vec![job.city],
            county: vec![job.county],
            remote: job.remote,
            job_link: job.job_link,
            id: job.id,
            logo_url: None,
        }
    }
}

impl From<BackupSearchResponse> for SearchResult {
    fn from(backup: BackupSearchResponse) -> Self {
        SearchResult {
            response: SearchBody {
                docs: backup.results.into_iter().map(JobRecord::from).collect(),
                num_found: backup.count,
            },
        }
    }
}
