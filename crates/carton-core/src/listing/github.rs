//! GitHub contents API implementation of the catalog lister.

use reqwest::header::ACCEPT;

use crate::error::{Error, Result};
use crate::listing::{CatalogLister, ContentEntry};

const API_ROOT: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("carton/", env!("CARGO_PKG_VERSION"));

/// Lists catalog entries through the GitHub repository contents API.
#[derive(Debug)]
pub struct GitHubLister {
    client: reqwest::Client,
    owner: String,
    repo: String,
    token: String,
}

impl GitHubLister {
    /// Build a lister for one repository using a bearer token.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::RemoteAccess)?;

        Ok(Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
            token: token.into(),
        })
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            API_ROOT, self.owner, self.repo, path
        )
    }
}

impl CatalogLister for GitHubLister {
    async fn list(&self, path: &str) -> Result<Vec<ContentEntry>> {
        let url = self.contents_url(path);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(Error::RemoteAccess)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteStatus { status, url });
        }

        response.json().await.map_err(Error::RemoteAccess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contents_url_targets_the_catalog_path() {
        let lister = GitHubLister::new("carton-project", "catalog", "token").unwrap();

        assert_eq!(
            lister.contents_url("extensions"),
            "https://api.github.com/repos/carton-project/catalog/contents/extensions"
        );
    }

    #[test]
    fn contents_url_keeps_nested_paths() {
        let lister = GitHubLister::new("carton-project", "catalog", "token").unwrap();

        assert_eq!(
            lister.contents_url("extensions/community"),
            "https://api.github.com/repos/carton-project/catalog/contents/extensions/community"
        );
    }
}
