use serde::{Deserialize, Serialize};

/// Search parameters for listing catalog files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileQuery {
    pub q: Option<String>,
    pub tags: Vec<String>,
    pub project: Option<String>,
}

impl FileQuery {
    /// Query-string pairs in the catalog's format. Empty parameters are omitted;
    /// tags travel comma-joined.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            pairs.push(("q", q.to_string()));
        }
        if !self.tags.is_empty() {
            pairs.push(("tags", self.tags.join(",")));
        }
        if let Some(project) = self.project.as_deref().filter(|p| !p.is_empty()) {
            pairs.push(("project", project.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_pairs() {
        assert!(FileQuery::default().to_query_pairs().is_empty());
    }

    #[test]
    fn test_tags_are_comma_joined() {
        let query = FileQuery {
            q: Some("boom".into()),
            tags: vec!["impact".into(), "metal".into()],
            project: Some(String::new()),
        };

        assert_eq!(
            query.to_query_pairs(),
            vec![("q", "boom".to_string()), ("tags", "impact,metal".to_string())]
        );
    }
}
