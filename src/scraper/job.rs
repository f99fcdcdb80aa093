use std::path::Path;

use eyre::{Result, eyre};
use log::info;

use crate::utils::cli::CheckArgs;

pub struct JobScraper;

impl JobScraper {
    pub async fn from_url(url: &str) -> Result<String> {
        info!("fetching job description from: {}", url);

        let client = reqwest::Client::new();
        let response = client
            .get(url)
            .header("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(eyre!("job posting returned {}", response.status()));
        }

        let html = response.text().await?;

        info!("successfully fetched job description ({} bytes)", html.len());

        Ok(html)
    }

    pub async fn from_file(path: &Path) -> Result<String> {
        info!("reading job description from file: {}", path.display());

        tokio::fs::read_to_string(path).await.map_err(Into::into)
    }
}

/// Job description from whichever source was given; empty when none was.
pub async fn get_job_description(args: &CheckArgs) -> Result<String> {
    if let Some(ref text) = args.job_text {
        Ok(text.clone())
    } else if let Some(ref file) = args.job_file {
        JobScraper::from_file(file).await
    } else if let Some(ref url) = args.job_url {
        JobScraper::from_url(url).await
    } else {
        info!("no job description provided");
        Ok(String::new())
    }
}
