pub mod backup;
pub mod params;
pub mod responses;
pub mod solr;
