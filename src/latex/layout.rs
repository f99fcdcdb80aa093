//! Section layout: decides which blocks a resume consists of, in order.
//!
//! The result is independent of the output format. The assembler turns it into
//! LaTeX and [`plain_text`] turns it into the document's text layer.

use crate::resume::model::ResumeData;

pub const SUMMARY_HEADING: &str = "Summary";
pub const EXPERIENCE_HEADING: &str = "Work Experience";
pub const EDUCATION_HEADING: &str = "Education";
pub const SKILLS_HEADING: &str = "Skills";
pub const PROJECTS_HEADING: &str = "Projects";

const CONTACT_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Large bold centered name.
    Title(String),
    /// Small centered contact line.
    Contact(String),
    /// Medium bold section heading.
    Heading(&'static str),
    /// Bold entry line ("title at company", "degree, university", project name).
    EntryTitle(String),
    /// Italic date range.
    EntryDates(String),
    /// Wrapped body paragraph.
    Body(String),
    /// Indented "- " bullet, wrapped.
    Bullet(String),
    EntryGap,
    SectionGap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Leave blank contact fields and their separators out of the header.
    pub compact_contact_line: bool,
}

fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}

pub fn contact_line(data: &ResumeData, options: &LayoutOptions) -> String {
    let fields = [&data.email, &data.phone, &data.linkedin, &data.github];

    if options.compact_contact_line {
        fields
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .collect::<Vec<_>>()
            .join(CONTACT_SEPARATOR)
    } else {
        fields
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(CONTACT_SEPARATOR)
    }
}

pub fn layout(data: &ResumeData, options: &LayoutOptions) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title(data.name.clone()),
        Block::Contact(contact_line(data, options)),
        Block::SectionGap,
    ];

    if has_text(&data.summary) {
        blocks.push(Block::Heading(SUMMARY_HEADING));
        blocks.push(Block::Body(data.summary.clone()));
        blocks.push(Block::SectionGap);
    }

    if !data.experience.is_empty() {
        blocks.push(Block::Heading(EXPERIENCE_HEADING));
        for exp in &data.experience {
            blocks.push(Block::EntryTitle(format!("{} at {}", exp.title, exp.company)));
            blocks.push(Block::EntryDates(exp.dates.clone()));
            blocks.extend(
                exp.responsibilities
                    .iter()
                    .filter(|r| has_text(r))
                    .map(|r| Block::Bullet(r.clone())),
            );
            blocks.push(Block::EntryGap);
        }
        blocks.push(Block::SectionGap);
    }

    if !data.education.is_empty() {
        blocks.push(Block::Heading(EDUCATION_HEADING));
        for edu in &data.education {
            blocks.push(Block::EntryTitle(format!("{}, {}", edu.degree, edu.university)));
            blocks.push(Block::EntryDates(edu.dates.clone()));
            blocks.push(Block::EntryGap);
        }
        blocks.push(Block::SectionGap);
    }

    let skills: Vec<&str> = data
        .skills
        .iter()
        .map(|s| s.as_str())
        .filter(|s| has_text(s))
        .collect();
    if !skills.is_empty() {
        blocks.push(Block::Heading(SKILLS_HEADING));
        blocks.push(Block::Body(skills.join(", ")));
        blocks.push(Block::SectionGap);
    }

    if !data.projects.is_empty() {
        blocks.push(Block::Heading(PROJECTS_HEADING));
        for proj in &data.projects {
            blocks.push(Block::EntryTitle(proj.name.clone()));
            if has_text(&proj.description) {
                blocks.push(Block::Body(proj.description.clone()));
            }
            blocks.push(Block::EntryGap);
        }
        blocks.push(Block::SectionGap);
    }

    blocks
}

/// Text layer of a laid-out document, one line per printed block.
pub fn plain_text(blocks: &[Block]) -> String {
    let mut out = String::new();

    for block in blocks {
        let line = match block {
            Block::Title(s)
            | Block::Contact(s)
            | Block::EntryTitle(s)
            | Block::EntryDates(s)
            | Block::Body(s) => s.clone(),
            Block::Heading(s) => s.to_string(),
            Block::Bullet(s) => format!("- {s}"),
            Block::EntryGap | Block::SectionGap => continue,
        };
        out.push_str(&line);
        out.push('\n');
    }

    out
}
