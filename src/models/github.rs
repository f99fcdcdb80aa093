use serde::Deserialize;

/// Subset of the GitHub `GET /users/{user}/repos` item used for profile summaries.
#[derive(Debug, Deserialize, Clone)]
pub struct Repository {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_ignores_extra_api_fields() {
        let repos: Vec<Repository> = serde_json::from_str(
            r#"[{
                "id": 1,
                "name": "protrack",
                "full_name": "jane/protrack",
                "html_url": "https://github.com/jane/protrack",
                "description": null,
                "language": "Rust",
                "fork": false,
                "stargazers_count": 12,
                "topics": []
            }]"#,
        )
        .unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "protrack");
    }
}
