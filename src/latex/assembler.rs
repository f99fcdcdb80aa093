use crate::latex::layout::Block;

static TEMPLATE: &str = include_str!("template.tex");

/// Tokens longer than this get a break point between every character. Shorter
/// ones fit on a line even at title size.
const LONG_WORD_CHARS: usize = 20;

pub struct LatexResumeAssembler<'a> {
    blocks: &'a [Block],
}

impl<'a> LatexResumeAssembler<'a> {
    pub fn new(blocks: &'a [Block]) -> Self {
        Self { blocks }
    }

    pub fn assemble(&self) -> String {
        TEMPLATE.replace("<<BODY>>", &self.body())
    }

    fn body(&self) -> String {
        let mut out = String::new();
        let mut in_bullets = false;

        for block in self.blocks {
            let is_bullet = matches!(block, Block::Bullet(_));
            if in_bullets && !is_bullet {
                out.push_str("\\end{bullets}\n");
            } else if !in_bullets && is_bullet {
                out.push_str("\\begin{bullets}\n");
            }
            in_bullets = is_bullet;

            out.push_str(&Self::block(block));
            out.push('\n');
        }

        if in_bullets {
            out.push_str("\\end{bullets}\n");
        }

        out
    }

    fn block(block: &Block) -> String {
        match block {
            Block::Title(s) => format!("\\resumetitle{{{}}}", Self::escape_latex(s)),
            Block::Contact(s) => format!("\\resumecontact{{{}}}", Self::escape_latex(s)),
            Block::Heading(s) => format!("\\resumeheading{{{}}}", Self::escape_latex(s)),
            Block::EntryTitle(s) => format!("\\entrytitle{{{}}}", Self::escape_latex(s)),
            Block::EntryDates(s) => format!("\\entrydates{{{}}}", Self::escape_latex(s)),
            Block::Body(s) => format!("\\bodytext{{{}}}", Self::paragraphs(s)),
            // `{}` keeps a leading `[` from being read as the optional label
            Block::Bullet(s) => format!("    \\item{{}} {}", Self::paragraphs(s)),
            Block::EntryGap => "\\entrygap".to_string(),
            Block::SectionGap => "\\sectiongap".to_string(),
        }
    }

    /// Multi-line text: single line breaks are kept, blank lines start a new paragraph.
    fn paragraphs(text: &str) -> String {
        let mut paragraphs: Vec<Vec<String>> = vec![Vec::new()];

        for line in text.trim().lines().map(str::trim) {
            if line.is_empty() {
                if paragraphs.last().is_some_and(|p| !p.is_empty()) {
                    paragraphs.push(Vec::new());
                }
            } else if let Some(current) = paragraphs.last_mut() {
                current.push(Self::escape_latex(line));
            }
        }

        paragraphs
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.join("\\newline\n"))
            .collect::<Vec<_>>()
            .join("\\par\n")
    }

    /// Escapes text for LaTeX, switching CJK runs to the CJK font and making
    /// long tokens breakable so they wrap instead of running into the margin.
    pub fn escape_latex(text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut word = String::new();

        for c in text.chars() {
            if matches!(c, ' ' | '\t' | '\n' | '\r') {
                Self::push_word(&mut result, &word);
                word.clear();
                result.push(' ');
            } else {
                word.push(c);
            }
        }
        Self::push_word(&mut result, &word);

        result
    }

    fn push_word(out: &mut String, word: &str) {
        let breakable = word.chars().count() > LONG_WORD_CHARS;
        let mut in_cjk = false;

        for (i, c) in word.chars().enumerate() {
            if breakable && i > 0 {
                out.push_str("\\allowbreak{}");
            }

            let cjk = is_cjk(c);
            if cjk && !in_cjk {
                out.push_str("\\cjktext{");
            } else if !cjk && in_cjk {
                out.push('}');
            }
            in_cjk = cjk;

            match c {
                '&' => out.push_str("\\&"),
                '%' => out.push_str("\\%"),
                '$' => out.push_str("\\$"),
                '#' => out.push_str("\\#"),
                '_' => out.push_str("\\_"),
                '{' => out.push_str("\\{"),
                '}' => out.push_str("\\}"),
                '^' => out.push_str("\\textasciicircum{}"),
                '~' => out.push_str("\\textasciitilde{}"),
                '\\' => out.push_str("\\textbackslash{}"),
                _ => out.push(c),
            }
        }

        if in_cjk {
            out.push('}');
        }
    }
}

/// Characters typeset with the CJK font instead of the main font.
fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{2E80}'..='\u{2FDF}'
        | '\u{3000}'..='\u{30FF}'
        | '\u{31F0}'..='\u{31FF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{FF00}'..='\u{FFEF}'
        | '\u{20000}'..='\u{2FA1F}')
}
