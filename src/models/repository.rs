use serde::{Deserialize, Serialize};

use crate::clients::github::RawRepository;

/// Normalized projection of one repository descriptor, the shape that gets
/// stored and served. Fields the upstream omits become empty/`None` rather
/// than failing normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub full_name: String,
    pub url: String,
    pub description: Option<String>,
    pub stars: u64,
    pub language: Option<String>,
}

impl RepositorySummary {
    /// Total mapping from the raw provider item; never fails.
    #[must_use]
    pub fn from_raw(raw: RawRepository) -> Self {
        Self {
            name: raw.name.unwrap_or_default(),
            full_name: raw.full_name.unwrap_or_default(),
            url: raw.html_url.unwrap_or_default(),
            description: raw.description,
            stars: raw.stargazers_count.unwrap_or(0),
            language: raw.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, stars: u64) -> RawRepository {
        RawRepository {
            name: Some(name.to_string()),
            full_name: Some(format!("owner/{name}")),
            html_url: Some(format!("https://github.com/owner/{name}")),
            description: Some("a repo".to_string()),
            stargazers_count: Some(stars),
            language: Some("Rust".to_string()),
        }
    }

    #[test]
    fn test_from_raw_maps_all_fields() {
        let summary = RepositorySummary::from_raw(raw("tokio", 25000));
        assert_eq!(summary.name, "tokio");
        assert_eq!(summary.full_name, "owner/tokio");
        assert_eq!(summary.url, "https://github.com/owner/tokio");
        assert_eq!(summary.description.as_deref(), Some("a repo"));
        assert_eq!(summary.stars, 25000);
        assert_eq!(summary.language.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_from_raw_never_fails_on_missing_fields() {
        let summary = RepositorySummary::from_raw(RawRepository::default());
        assert_eq!(summary.name, "");
        assert_eq!(summary.full_name, "");
        assert_eq!(summary.url, "");
        assert_eq!(summary.description, None);
        assert_eq!(summary.stars, 0);
        assert_eq!(summary.language, None);
    }

    #[test]
    fn test_mapping_preserves_order() {
        let items = vec![raw("c", 3), raw("a", 1), raw("b", 2)];
        let names: Vec<String> = items
            .into_iter()
            .map(RepositorySummary::from_raw)
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }
}
