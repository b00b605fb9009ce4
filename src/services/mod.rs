pub mod backup;
pub mod http;
pub mod logo;
pub mod solr;
