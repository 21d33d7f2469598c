//! Domain entities.

pub mod url_record;

pub use url_record::UrlRecord;
