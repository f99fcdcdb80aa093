pub mod model;

use std::path::Path;

use eyre::{Result, WrapErr};
use log::{debug, info};

use crate::resume::model::{ResumeData, ResumeForm};

/// Reads a resume form from a TOML file and builds the filtered resume record.
pub async fn load(path: &Path) -> Result<ResumeData> {
    info!("reading resume form from: {}", path.display());

    let raw = tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let form = ResumeForm::from_toml(&raw)
        .wrap_err_with(|| format!("failed to parse resume form {}", path.display()))?;

    let data = form.into_resume_data();
    debug!("resume data:\n{}", serde_json::to_string_pretty(&data)?);

    Ok(data)
}
