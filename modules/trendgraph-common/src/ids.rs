use sha2::{Digest, Sha256};

/// Stable article identity: the first 12 hex chars of the SHA-256 of the
/// exact URL string. The same URL maps to the same Article node across runs
/// and across trends.
pub fn article_id(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut hex = hex::encode(digest);
    hex.truncate(12);
    hex
}

/// Snapshot identity: one per keyword per calendar day.
pub fn snapshot_id(keyword_id: i64, date: &str) -> String {
    format!("{keyword_id}_{date}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_id_is_deterministic() {
        let url = "https://example.com/some/article";
        assert_eq!(article_id(url), article_id(url));
    }

    #[test]
    fn article_id_is_twelve_hex_chars() {
        let id = article_id("https://example.com/a");
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn article_id_distinguishes_urls() {
        assert_ne!(
            article_id("https://example.com/a"),
            article_id("https://example.com/b")
        );
    }

    #[test]
    fn article_id_is_case_sensitive() {
        assert_ne!(
            article_id("https://example.com/A"),
            article_id("https://example.com/a")
        );
    }

    #[test]
    fn snapshot_id_concatenates_keyword_and_day() {
        assert_eq!(snapshot_id(42, "2024-03-01"), "42_2024-03-01");
    }
}
