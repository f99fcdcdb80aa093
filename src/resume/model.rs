use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured resume content handed to the renderer.
///
/// Every text field is a plain `String` that defaults to empty. List entries
/// are only ever built through [`ResumeForm::into_resume_data`] (or the entry
/// constructors), so blank entries, blank responsibilities and blank skills
/// never reach the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub dates: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationEntry {
    pub degree: String,
    pub university: String,
    pub dates: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Splits `text` on `sep`, trimming each piece and dropping blank ones.
pub fn split_non_blank(text: &str, sep: char) -> Vec<String> {
    text.split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl ExperienceEntry {
    /// `responsibilities` is one line per responsibility, as typed into the form.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        dates: impl Into<String>,
        responsibilities: &str,
    ) -> Option<Self> {
        let (title, company, dates) = (title.into(), company.into(), dates.into());
        let responsibilities = split_non_blank(responsibilities, '\n');

        if is_blank(&title) && is_blank(&company) && is_blank(&dates) && responsibilities.is_empty()
        {
            return None;
        }

        Some(Self {
            title,
            company,
            dates,
            responsibilities,
        })
    }
}

impl EducationEntry {
    pub fn new(
        degree: impl Into<String>,
        university: impl Into<String>,
        dates: impl Into<String>,
    ) -> Option<Self> {
        let (degree, university, dates) = (degree.into(), university.into(), dates.into());

        if is_blank(&degree) && is_blank(&university) && is_blank(&dates) {
            return None;
        }

        Some(Self {
            degree,
            university,
            dates,
        })
    }
}

impl ProjectEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Option<Self> {
        let (name, description) = (name.into(), description.into());

        if is_blank(&name) && is_blank(&description) {
            return None;
        }

        Some(Self { name, description })
    }
}

impl ResumeData {
    /// The minimal-completeness rule enforced before a render is attempted.
    pub fn ensure_complete(&self) -> Result<(), ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::MissingField("name"));
        }
        if is_blank(&self.email) {
            return Err(ValidationError::MissingField("email"));
        }
        Ok(())
    }

    pub fn download_file_name(&self) -> String {
        format!("{}_Resume.pdf", self.name.replace(' ', "_"))
    }

    /// Short plain-text preview shown after a successful build.
    pub fn preview(&self) -> String {
        let mut out = format!("Name: {}\nEmail: {}\n", self.name, self.email);

        if !is_blank(&self.summary) {
            out.push_str(&format!("Summary: {}\n", self.summary));
        }
        if !self.skills.is_empty() {
            out.push_str(&format!("Skills: {}\n", self.skills.join(", ")));
        }

        out
    }
}

/// Raw resume form as a user fills it in.
///
/// Mirrors the builder form: responsibilities are one multi-line string per
/// job, skills are a single comma-separated string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResumeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub experience: Vec<ExperienceForm>,
    pub education: Vec<EducationForm>,
    pub skills: String,
    pub projects: Vec<ProjectForm>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceForm {
    pub title: String,
    pub company: String,
    pub dates: String,
    pub responsibilities: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EducationForm {
    pub degree: String,
    pub university: String,
    pub dates: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
}

impl ResumeForm {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn into_resume_data(self) -> ResumeData {
        ResumeData {
            name: self.name,
            email: self.email,
            phone: self.phone,
            linkedin: self.linkedin,
            github: self.github,
            summary: self.summary,
            experience: self
                .experience
                .into_iter()
                .filter_map(|e| ExperienceEntry::new(e.title, e.company, e.dates, &e.responsibilities))
                .collect(),
            education: self
                .education
                .into_iter()
                .filter_map(|e| EducationEntry::new(e.degree, e.university, e.dates))
                .collect(),
            skills: split_non_blank(&self.skills, ','),
            projects: self
                .projects
                .into_iter()
                .filter_map(|p| ProjectEntry::new(p.name, p.description))
                .collect(),
        }
    }
}
