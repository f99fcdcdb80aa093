use log::warn;

/// Placeholder LinkedIn profile summary for the analysis prompt.
///
/// Profiles are not scraped; only the URL is checked and echoed back.
pub fn linkedin_summary(url: &str) -> String {
    let url = url.trim();

    if !url.to_lowercase().contains("linkedin.com") {
        warn!("not a LinkedIn URL: {:?}", url);
        return "Invalid LinkedIn URL".to_string();
    }

    format!("Extracted data from LinkedIn profile: {}", url)
}
