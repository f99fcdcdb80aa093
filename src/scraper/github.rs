use std::sync::LazyLock;

use eyre::{Result, eyre};
use log::{debug, info, warn};
use regex::Regex;

use crate::models::github::Repository;
use crate::utils::config::Config;

const NOT_FOUND: &str = "Invalid GitHub URL or User Not Found";

static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?github\.com/([A-Za-z0-9-]+)/?(?:[?#].*)?$").unwrap()
});
static USERNAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());

pub struct GitHubScraper {
    config: Config,
    client: reqwest::Client,
}

/// Extracts the account name from a profile URL (or a bare username).
pub fn username_from_url(url: &str) -> Option<String> {
    let url = url.trim();

    if let Some(caps) = PROFILE_URL.captures(url) {
        return Some(caps[1].to_string());
    }

    USERNAME.is_match(url).then(|| url.to_string())
}

impl GitHubScraper {
    pub fn new(config: Config) -> Self {
        GitHubScraper {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let mut page: u32 = 1;
        let mut repositories = Vec::new();
        loop {
            let mut req = self
                .client
                .get(format!(
                    "https://api.github.com/users/{}/repos?per_page=100&page={}",
                    username, page
                ))
                .header("User-Agent", "protrack-app");

            if let Some(token) = &self.config.github.token {
                req = req.header("Authorization", format!("token {}", token));
            }

            let response = req.send().await?;
            if !response.status().is_success() {
                return Err(eyre!(
                    "GitHub returned {} for user {}",
                    response.status(),
                    username
                ));
            }

            let has_next = has_next_page(
                response
                    .headers()
                    .get("link")
                    .and_then(|v| v.to_str().ok()),
            );
            let mut batch: Vec<Repository> = response.json().await?;
            debug!("fetched {} repositories from page {}", batch.len(), page);
            repositories.append(&mut batch);

            match has_next {
                true => page += 1,
                false => break,
            }
        }

        Ok(repositories)
    }

    /// One-line description of a GitHub profile for the analysis prompt.
    ///
    /// Never fails: lookup problems produce the "not found" text instead.
    pub async fn profile_summary(&self, url: &str) -> String {
        let Some(username) = username_from_url(url) else {
            warn!("could not extract a GitHub username from: {:?}", url);
            return NOT_FOUND.to_string();
        };

        info!("listing GitHub repositories for {}", username);
        match self.list_repositories(&username).await {
            Ok(repos) => {
                info!("found {} repositories", repos.len());
                format_repositories(&repos)
            }
            Err(e) => {
                warn!("GitHub lookup failed: {}", e);
                NOT_FOUND.to_string()
            }
        }
    }
}

fn has_next_page(link: Option<&str>) -> bool {
    link.is_some_and(|l| l.split(',').any(|part| part.contains("rel=\"next\"")))
}

pub fn format_repositories(repos: &[Repository]) -> String {
    let names = repos
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!("GitHub Repositories: {}", names)
}
