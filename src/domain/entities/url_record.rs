//! URL record entity representing an alias to destination mapping.

/// A stored alias and the destination it redirects to.
///
/// `id` is assigned by the store on insert and never reused by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub destination: String,
}

impl UrlRecord {
    /// Creates a new record instance.
    pub fn new(id: i64, alias: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            destination: destination.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let record = UrlRecord::new(7, "abc123", "https://example.com");

        assert_eq!(record.id, 7);
        assert_eq!(record.alias, "abc123");
        assert_eq!(record.destination, "https://example.com");
    }
}
