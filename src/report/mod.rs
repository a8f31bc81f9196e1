//! HTML report rendering
//!
//! Builds one self-contained HTML document: an overall summary, a
//! per-file coverage table, and annotated source listings for every
//! file whose source is readable. No template engine; the document is
//! assembled by hand and styled by one of two embedded CSS blocks.

use chrono::Utc;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use crate::config::{EffectiveConfig, Theme};
use crate::filter::Filter;
use crate::gomod;
use crate::profile::{FileProfile, Profile};

const DARK_CSS: &str = "\
body{background:#1e1e1e;color:#d4d4d4;font-family:sans-serif;margin:2em}\
a{color:#6cb6ff}table{border-collapse:collapse}\
td,th{border:1px solid #3c3c3c;padding:.3em .8em;text-align:left}\
pre{background:#252526;padding:1em;overflow-x:auto}\
.cov{color:#4ec9b0}.miss{color:#f14c4c}\
.total{font-weight:bold}footer{margin-top:2em;color:#808080;font-size:.8em}";

const LIGHT_CSS: &str = "\
body{background:#ffffff;color:#1f1f1f;font-family:sans-serif;margin:2em}\
a{color:#0969da}table{border-collapse:collapse}\
td,th{border:1px solid #d0d7de;padding:.3em .8em;text-align:left}\
pre{background:#f6f8fa;padding:1em;overflow-x:auto}\
.cov{color:#1a7f37}.miss{color:#cf222e}\
.total{font-weight:bold}footer{margin-top:2em;color:#6e7781;font-size:.8em}";

/// Errors from report writing
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// HTML report writer for one run
pub struct Report<'a> {
    config: &'a EffectiveConfig,
    module: Option<String>,
    root: PathBuf,
}

impl<'a> Report<'a> {
    pub fn new(config: &'a EffectiveConfig, module: Option<String>) -> Self {
        Self {
            config,
            module,
            root: PathBuf::from("."),
        }
    }

    /// Directory source files are read from (defaults to the working
    /// directory)
    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = root;
        self
    }

    /// Render the report and write it to the configured output path.
    pub fn write(&self, profile: &Profile, filter: &Filter) -> Result<(), ReportError> {
        let html = self.render(profile, filter);
        fs::write(&self.config.output, html)?;
        Ok(())
    }

    /// Render the report for the filtered profile set.
    pub fn render(&self, profile: &Profile, filter: &Filter) -> String {
        let targets: Vec<(&str, &FileProfile)> = profile
            .files
            .iter()
            .filter_map(|file| {
                let rel = gomod::relative_name(&file.name, self.module.as_deref());
                let (dir, name) = split_dir_file(rel);
                filter
                    .is_output_target(dir, Some(name))
                    .then_some((rel, file))
            })
            .collect();

        let total = total_coverage(&targets);
        let css = match self.config.theme {
            Theme::Dark => DARK_CSS,
            Theme::Light => LIGHT_CSS,
        };

        let mut html = String::new();
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>coverage report</title>\n<style>{css}</style>\n</head>\n<body>\n"
        );
        let _ = write!(
            html,
            "<h1>Coverage report</h1>\n<p class=\"total\">total: {total:.1}%</p>\n"
        );

        html.push_str("<table>\n<tr><th>file</th><th>coverage</th></tr>\n");
        for (rel, file) in &targets {
            let _ = write!(
                html,
                "<tr><td><a href=\"#{id}\">{name}</a></td><td>{cov:.1}%</td></tr>\n",
                id = anchor(rel),
                name = escape(rel),
                cov = file.coverage(),
            );
        }
        html.push_str("</table>\n");

        for (rel, file) in &targets {
            let _ = write!(
                html,
                "<h2 id=\"{id}\">{name} ({cov:.1}%)</h2>\n",
                id = anchor(rel),
                name = escape(rel),
                cov = file.coverage(),
            );
            match fs::read_to_string(self.root.join(rel)) {
                Ok(source) => html.push_str(&annotate(&source, file)),
                Err(err) => {
                    log::debug!("source for {rel} unreadable: {err}");
                    html.push_str("<p>source not available</p>\n");
                }
            }
        }

        let _ = write!(
            html,
            "<footer>generated by covhtml at {}</footer>\n</body>\n</html>\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        );
        html
    }
}

fn total_coverage(targets: &[(&str, &FileProfile)]) -> f64 {
    let total: u64 = targets
        .iter()
        .flat_map(|(_, f)| &f.blocks)
        .map(|b| u64::from(b.num_stmt))
        .sum();
    if total == 0 {
        return 0.0;
    }
    let covered: u64 = targets
        .iter()
        .flat_map(|(_, f)| &f.blocks)
        .filter(|b| b.count > 0)
        .map(|b| u64::from(b.num_stmt))
        .sum();
    covered as f64 / total as f64 * 100.0
}

/// Render the source with per-line coverage classes.
fn annotate(source: &str, file: &FileProfile) -> String {
    let mut out = String::from("<pre>");
    for (idx, line) in source.lines().enumerate() {
        let lineno = (idx + 1) as u32;
        let blocks: Vec<_> = file
            .blocks
            .iter()
            .filter(|b| b.contains_line(lineno))
            .collect();

        let escaped = escape(line);
        if blocks.is_empty() {
            let _ = write!(out, "{escaped}\n");
        } else if blocks.iter().any(|b| b.count > 0) {
            let _ = write!(out, "<span class=\"cov\">{escaped}</span>\n");
        } else {
            let _ = write!(out, "<span class=\"miss\">{escaped}</span>\n");
        }
    }
    out.push_str("</pre>\n");
    out
}

fn split_dir_file(rel: &str) -> (&str, &str) {
    match rel.rsplit_once('/') {
        Some((dir, name)) => (dir, name),
        None => ("", rel),
    }
}

/// Fragment id for a file section. `-` is doubled before `/` maps to
/// `-`, so distinct paths never share an id.
fn anchor(rel: &str) -> String {
    rel.replace('-', "--").replace('/', "-")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
