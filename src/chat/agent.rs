use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use eyre::{Result, eyre};
use log::{debug, info};
use serde_json::{Value, json};

const REVIEW_PROMPT: &str = "You are an experienced Technical HR Manager. Evaluate the resume against the job description. \
Also, analyze the provided LinkedIn and GitHub data to enhance the assessment.";

const MATCH_PROMPT: &str = "You are an ATS system. Evaluate the resume and profile data to provide a match percentage. \
Include missing keywords and final thoughts.";

const PDF_SIGNATURE: &[u8] = b"%PDF-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Narrative evaluation of strengths and weaknesses.
    Review,
    /// Percentage match, missing keywords, final thoughts.
    Match,
}

impl AnalysisMode {
    pub fn prompt(&self) -> &'static str {
        match self {
            AnalysisMode::Review => REVIEW_PROMPT,
            AnalysisMode::Match => MATCH_PROMPT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub job_description: String,
    pub resume_pdf: Vec<u8>,
    pub linkedin_info: String,
    pub github_info: String,
    pub mode: AnalysisMode,
}

impl AnalysisRequest {
    /// Fails when `resume_pdf` does not look like a PDF file.
    pub fn new(
        job_description: String,
        resume_pdf: Vec<u8>,
        linkedin_info: String,
        github_info: String,
        mode: AnalysisMode,
    ) -> Result<Self> {
        if !resume_pdf.starts_with(PDF_SIGNATURE) {
            return Err(eyre!(
                "could not process the uploaded resume: not a PDF file"
            ));
        }

        Ok(Self {
            job_description,
            resume_pdf,
            linkedin_info,
            github_info,
            mode,
        })
    }

    fn body(&self) -> Value {
        json!({
            "contents": [{
                "parts": [
                    {"text": self.job_description},
                    {
                        "inline_data": {
                            "mime_type": "application/pdf",
                            "data": BASE64_STANDARD.encode(&self.resume_pdf)
                        }
                    },
                    {"text": self.linkedin_info},
                    {"text": self.github_info},
                    {"text": self.mode.prompt()}
                ]
            }]
        })
    }
}

pub struct AtsAgent {
    api_key: String,
    model: String,
    endpoint: String,
    client: reqwest::Client,
}

impl AtsAgent {
    pub fn new(api_key: String, model: String, endpoint: String) -> Self {
        Self {
            api_key,
            model,
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<String> {
        info!(
            "requesting {:?} analysis from {} ({} byte resume)",
            request.mode,
            self.model,
            request.resume_pdf.len()
        );
        debug!("job description length: {}", request.job_description.len());

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let response = self.client.post(&url).json(&request.body()).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error = response.text().await?;
            return Err(eyre!("AI analysis failed ({}): {}", status, error));
        }

        let body: Value = response.json().await?;
        response_text(&body)
    }
}

/// Concatenates the text parts of the first candidate.
fn response_text(body: &Value) -> Result<String> {
    let parts = body
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| eyre!("invalid AI response: no candidate content"))?;

    let text = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        return Err(eyre!("invalid AI response: empty text"));
    }

    Ok(text)
}
