use std::time::{Duration, SystemTime};

use log::{debug, warn};
use tectonic::config::PersistentConfig;
use tectonic::driver::{OutputFormat, ProcessingSessionBuilder};
use tectonic::status::NoopStatusBackend;
use tectonic::unstable_opts::UnstableOptions;

use crate::latex::RenderError;

const INPUT_NAME: &str = "resume.tex";
const OUTPUT_NAME: &str = "resume.pdf";
const LOG_NAME: &str = "resume.log";
const MISSING_CHARACTER: &str = "Missing character: There is no ";

/// Fixed engine clock (2000-01-01T00:00:00Z) so that output bytes only depend on the input.
const BUILD_DATE_SECS: u64 = 946_684_800;

#[derive(Debug)]
pub struct Compiled {
    pub pdf: Vec<u8>,
    /// Characters the engine had no glyph for, in order of first appearance.
    pub missing_characters: Vec<char>,
}

/// Compiles a LaTeX document to PDF in memory.
///
/// Runs with a fixed build date and in deterministic mode, so compiling the
/// same source twice yields identical bytes. Nothing is written to disk apart
/// from tectonic's own bundle and format caches.
pub fn compile(latex: &str) -> Result<Compiled, RenderError> {
    let mut status = NoopStatusBackend::default();

    let config = PersistentConfig::open(false)
        .map_err(|e| RenderError::Compile(format!("failed to open tectonic config: {e}")))?;
    let bundle = config
        .default_bundle(false, &mut status)
        .map_err(|e| RenderError::Compile(format!("failed to load resource bundle: {e}")))?;
    let format_cache_path = config
        .format_cache_path()
        .map_err(|e| RenderError::Compile(format!("failed to set up format cache: {e}")))?;

    let mut builder = ProcessingSessionBuilder::default();
    builder
        .bundle(bundle)
        .primary_input_buffer(latex.as_bytes())
        .tex_input_name(INPUT_NAME)
        .format_name("latex")
        .format_cache_path(format_cache_path)
        .keep_logs(true)
        .keep_intermediates(false)
        .print_stdout(false)
        .output_format(OutputFormat::Pdf)
        .build_date(SystemTime::UNIX_EPOCH + Duration::from_secs(BUILD_DATE_SECS))
        .unstables(UnstableOptions {
            deterministic_mode: true,
            ..Default::default()
        })
        .do_not_write_output_files();

    let mut session = builder
        .create(&mut status)
        .map_err(|e| RenderError::Compile(format!("failed to start LaTeX session: {e}")))?;
    session
        .run(&mut status)
        .map_err(|e| RenderError::Compile(format!("the LaTeX engine failed: {e}")))?;

    let mut files = session.into_file_data();
    debug!("tectonic produced {} files", files.len());

    let missing_characters = match files.remove(LOG_NAME) {
        Some(log) => missing_characters(&String::from_utf8_lossy(&log.data)),
        None => {
            warn!("tectonic produced no log; missing glyphs cannot be detected");
            Vec::new()
        }
    };

    let pdf = files
        .remove(OUTPUT_NAME)
        .map(|file| file.data)
        .ok_or_else(|| RenderError::Compile("LaTeX finished but produced no PDF".to_string()))?;

    Ok(Compiled {
        pdf,
        missing_characters,
    })
}

/// Collects the characters from XeTeX's "Missing character" log lines.
///
/// Lines look like `Missing character: There is no 한 (U+D55C) in font cmunrm!`;
/// older engines omit the code point, in which case the character itself is used.
pub fn missing_characters(log: &str) -> Vec<char> {
    let mut found = Vec::new();

    for line in log.lines() {
        let Some(start) = line.find(MISSING_CHARACTER) else {
            continue;
        };
        let rest = &line[start + MISSING_CHARACTER.len()..];
        let rest = rest.split(" in font").next().unwrap_or(rest);

        let character = code_point(rest).or_else(|| rest.chars().next());
        if let Some(c) = character
            && !found.contains(&c)
        {
            found.push(c);
        }
    }

    found
}

fn code_point(text: &str) -> Option<char> {
    let start = text.find("(U+")? + 3;
    let end = start + text[start..].find(')')?;

    u32::from_str_radix(&text[start..end], 16)
        .ok()
        .and_then(char::from_u32)
}
