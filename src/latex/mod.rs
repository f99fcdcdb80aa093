//! Resume renderer: [`ResumeData`] in, finished PDF bytes out.

pub mod assembler;
pub mod compiler;
pub mod layout;

use log::debug;
use thiserror::Error;

use crate::latex::assembler::LatexResumeAssembler;
use crate::latex::layout::{LayoutOptions, layout};
use crate::resume::model::ResumeData;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("field `{field}` contains a character that cannot be typeset: {character:?}")]
    UnsupportedCharacter { field: String, character: char },

    #[error("failed to compile resume: {0}")]
    Compile(String),
}

/// Renders a resume to PDF.
///
/// Either the complete document is returned or an error is; the input is only borrowed.
/// Text the fonts cannot show fails with [`RenderError::UnsupportedCharacter`]
/// rather than being dropped from the page.
pub fn render(data: &ResumeData, options: &LayoutOptions) -> Result<Vec<u8>, RenderError> {
    let latex = to_latex(data, options)?;
    debug!("assembled {} bytes of LaTeX", latex.len());

    let compiled = compiler::compile(&latex)?;
    if let Some(&character) = compiled.missing_characters.first() {
        return Err(unsupported(data, character));
    }

    Ok(compiled.pdf)
}

/// Checks every field and returns the LaTeX source for the resume.
pub fn to_latex(data: &ResumeData, options: &LayoutOptions) -> Result<String, RenderError> {
    for (field, text) in fields(data) {
        if let Some(character) = text
            .chars()
            .find(|&c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
        {
            return Err(RenderError::UnsupportedCharacter { field, character });
        }
    }

    let blocks = layout(data, options);
    Ok(LatexResumeAssembler::new(&blocks).assemble())
}

/// Names the first field containing `character`.
fn unsupported(data: &ResumeData, character: char) -> RenderError {
    let field = fields(data)
        .into_iter()
        .find(|(_, text)| text.contains(character))
        .map(|(field, _)| field)
        .unwrap_or_else(|| "document".to_string());

    RenderError::UnsupportedCharacter { field, character }
}

/// Every text field with its path, in document order.
fn fields(data: &ResumeData) -> Vec<(String, &str)> {
    let mut out = vec![
        ("name".to_string(), data.name.as_str()),
        ("email".to_string(), data.email.as_str()),
        ("phone".to_string(), data.phone.as_str()),
        ("linkedin".to_string(), data.linkedin.as_str()),
        ("github".to_string(), data.github.as_str()),
        ("summary".to_string(), data.summary.as_str()),
    ];

    for (i, exp) in data.experience.iter().enumerate() {
        out.push((format!("experience[{i}].title"), exp.title.as_str()));
        out.push((format!("experience[{i}].company"), exp.company.as_str()));
        out.push((format!("experience[{i}].dates"), exp.dates.as_str()));
        for (j, resp) in exp.responsibilities.iter().enumerate() {
            out.push((format!("experience[{i}].responsibilities[{j}]"), resp.as_str()));
        }
    }

    for (i, edu) in data.education.iter().enumerate() {
        out.push((format!("education[{i}].degree"), edu.degree.as_str()));
        out.push((format!("education[{i}].university"), edu.university.as_str()));
        out.push((format!("education[{i}].dates"), edu.dates.as_str()));
    }

    for (i, skill) in data.skills.iter().enumerate() {
        out.push((format!("skills[{i}]"), skill.as_str()));
    }

    for (i, proj) in data.projects.iter().enumerate() {
        out.push((format!("projects[{i}].name"), proj.name.as_str()));
        out.push((format!("projects[{i}].description"), proj.description.as_str()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::model::{ExperienceEntry, ProjectEntry};

    fn jane() -> ResumeData {
        ResumeData {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            skills: vec!["Python".to_string(), "SQL".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_to_latex_is_deterministic() {
        let mut data = jane();
        data.experience = vec![ExperienceEntry::new("Dev", "Acme", "2021", "Shipped").unwrap()];

        let options = LayoutOptions::default();
        assert_eq!(
            to_latex(&data, &options).unwrap(),
            to_latex(&data, &options).unwrap()
        );
    }

    #[test]
    fn test_skills_scenario_latex() {
        let latex = to_latex(&jane(), &LayoutOptions::default()).unwrap();

        assert!(latex.contains("\\resumetitle{Jane Doe}"));
        assert!(latex.contains("\\resumecontact{jane@x.com |  |  | }"));
        assert!(latex.contains("\\resumeheading{Skills}\n\\bodytext{Python, SQL}"));
        assert!(!latex.contains("\\resumeheading{Summary}"));
    }

    #[test]
    fn test_unicode_reaches_the_source() {
        let mut data = jane();
        data.name = "Zoë Ångström".to_string();
        data.projects = vec![ProjectEntry::new("Überblick", "Ñandú — 日本語").unwrap()];

        let latex = to_latex(&data, &LayoutOptions::default()).unwrap();
        assert!(latex.contains("\\resumetitle{Zoë Ångström}"));
        assert!(latex.contains("\\bodytext{Ñandú — \\cjktext{日本語}}"));
    }

    #[test]
    fn test_unsupported_glyph_names_first_field() {
        let mut data = jane();
        data.summary = "Plain summary".to_string();
        data.projects = vec![
            ProjectEntry::new("Hangul", "한국어 docs").unwrap(),
            ProjectEntry::new("Again", "한").unwrap(),
        ];

        assert_eq!(
            unsupported(&data, '한'),
            RenderError::UnsupportedCharacter {
                field: "projects[0].description".to_string(),
                character: '한',
            }
        );
        assert_eq!(
            unsupported(&data, '€'),
            RenderError::UnsupportedCharacter {
                field: "document".to_string(),
                character: '€',
            }
        );
    }

    #[test]
    fn test_fields_cover_every_entry() {
        let mut data = jane();
        data.experience = vec![ExperienceEntry::new("Dev", "Acme", "2021", "a\nb").unwrap()];

        let names: Vec<String> = fields(&data).into_iter().map(|(f, _)| f).collect();
        assert!(names.contains(&"experience[0].responsibilities[1]".to_string()));
        assert!(names.contains(&"skills[1]".to_string()));
        assert_eq!(names.len(), 6 + 3 + 2 + 2);
    }

    #[test]
    fn test_control_character_names_field() {
        let mut data = jane();
        data.experience = vec![
            ExperienceEntry::new("Dev", "Acme", "", "").unwrap(),
            ExperienceEntry::new("Dev", "Bad\u{7}Corp", "", "").unwrap(),
        ];

        let err = to_latex(&data, &LayoutOptions::default()).unwrap_err();
        assert_eq!(
            err,
            RenderError::UnsupportedCharacter {
                field: "experience[1].company".to_string(),
                character: '\u{7}',
            }
        );
        assert!(err.to_string().contains("experience[1].company"));
    }

    #[test]
    fn test_render_rejects_before_compiling() {
        let mut data = jane();
        data.summary = "null\u{0}byte".to_string();

        assert!(matches!(
            render(&data, &LayoutOptions::default()),
            Err(RenderError::UnsupportedCharacter { ref field, .. }) if field == "summary"
        ));
    }

    #[test]
    fn test_newlines_and_tabs_are_accepted() {
        let mut data = jane();
        data.summary = "line one\r\n\tline two".to_string();
        assert!(to_latex(&data, &LayoutOptions::default()).is_ok());
    }

    fn page_count(pdf: &[u8]) -> usize {
        lopdf::Document::load_mem(pdf).unwrap().get_pages().len()
    }

    fn text_layer(pdf: &[u8]) -> String {
        pdf_extract::extract_text_from_mem(pdf).unwrap()
    }

    // The tests below need the TeX resource bundle (network on first run).

    #[test]
    #[ignore]
    fn test_render_twice_is_byte_identical() {
        let data = jane();
        let options = LayoutOptions::default();

        let first = render(&data, &options).unwrap();
        let second = render(&data, &options).unwrap();

        assert!(first.starts_with(b"%PDF-"));
        assert_eq!(first, second);
    }

    #[test]
    #[ignore]
    fn test_skills_scenario_is_one_page() {
        let pdf = render(&jane(), &LayoutOptions::default()).unwrap();
        assert_eq!(page_count(&pdf), 1);

        let text = text_layer(&pdf);
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("jane@x.com"));
        assert!(text.contains("Skills"));
        assert!(text.contains("Python, SQL"));
        assert!(!text.contains("Work Experience"));
    }

    #[test]
    #[ignore]
    fn test_blank_skills_leave_no_heading_in_pdf() {
        let mut data = jane();
        data.skills.clear();

        let text = text_layer(&render(&data, &LayoutOptions::default()).unwrap());
        assert!(text.contains("Jane Doe"));
        assert!(!text.contains("Skills"));
    }

    #[test]
    #[ignore]
    fn test_long_resume_breaks_onto_more_pages() {
        let mut data = jane();
        data.experience = (0..30)
            .map(|i| {
                ExperienceEntry::new(
                    format!("Engineer {i}"),
                    "Acme",
                    "2010 - 2020",
                    "Built the billing platform\nRan the on-call rotation\nMentored new hires",
                )
                .unwrap()
            })
            .collect();

        let pdf = render(&data, &LayoutOptions::default()).unwrap();
        assert!(page_count(&pdf) > 1);
    }

    #[test]
    #[ignore]
    fn test_long_token_and_dashes_render() {
        let mut data = jane();
        data.summary = "Dates 2020--2023 and https://example.com/a/very/long/path/that/keeps/going/and/going/on/and/on/until/it/no/longer/fits/on/one/line".to_string();
        data.skills = vec!["x".repeat(200)];

        let pdf = render(&data, &LayoutOptions::default()).unwrap();
        assert!(text_layer(&pdf).contains("2020--2023"));
    }

    #[test]
    #[ignore]
    fn test_cyrillic_greek_and_cjk_render() {
        let mut data = jane();
        data.name = "Иван Иванов".to_string();
        data.summary = "Ελληνικά, 日本語, 中文".to_string();

        let pdf = render(&data, &LayoutOptions::default()).unwrap();
        assert_eq!(page_count(&pdf), 1);
    }

    #[test]
    #[ignore]
    fn test_glyph_missing_from_fonts_is_an_error() {
        let mut data = jane();
        data.summary = "한국어".to_string();

        assert!(matches!(
            render(&data, &LayoutOptions::default()),
            Err(RenderError::UnsupportedCharacter { ref field, .. }) if field == "summary"
        ));
    }
}
