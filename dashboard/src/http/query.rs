//! Query parameters for the list endpoints

use url::form_urlencoded;

/// Optional filters shared by the deployments and security-scans endpoints.
/// Absent fields are omitted from the request entirely, never sent empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Maximum number of entries to return
    pub limit: Option<u32>,

    /// Restrict to one repository ("owner/name")
    pub repo: Option<String>,
}

impl ListParams {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            repo: None,
        }
    }

    /// Append the parameters to a base path. An empty parameter set yields
    /// the bare path with no `?`.
    pub fn to_path(&self, base: &str) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(limit) = self.limit {
            query.append_pair("limit", &limit.to_string());
        }
        if let Some(repo) = &self.repo {
            query.append_pair("repo", repo);
        }

        let query = query.finish();
        if query.is_empty() {
            base.to_string()
        } else {
            format!("{}?{}", base, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_produce_bare_path() {
        assert_eq!(
            ListParams::default().to_path("/api/deployments"),
            "/api/deployments"
        );
    }

    #[test]
    fn test_limit_only() {
        assert_eq!(
            ListParams::with_limit(20).to_path("/api/deployments"),
            "/api/deployments?limit=20"
        );
    }

    #[test]
    fn test_repo_is_percent_encoded() {
        let params = ListParams {
            limit: Some(10),
            repo: Some("foo/bar".to_string()),
        };
        assert_eq!(
            params.to_path("/api/deployments"),
            "/api/deployments?limit=10&repo=foo%2Fbar"
        );
    }

    #[test]
    fn test_repo_only() {
        let params = ListParams {
            limit: None,
            repo: Some("octocat/hello-world".to_string()),
        };
        assert_eq!(
            params.to_path("/api/security-scans"),
            "/api/security-scans?repo=octocat%2Fhello-world"
        );
    }
}
