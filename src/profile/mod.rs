//! Go cover profile parsing
//!
//! The profile is line-oriented text: a `mode: set|count|atomic`
//! header followed by one block per line,
//! `name.go:startLine.startCol,endLine.endCol numStmt count`.
//! Blocks are grouped per file in first-seen order.

use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Coverage counting mode declared in the profile header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverMode {
    Set,
    Count,
    Atomic,
}

impl FromStr for CoverMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "set" => Ok(CoverMode::Set),
            "count" => Ok(CoverMode::Count),
            "atomic" => Ok(CoverMode::Atomic),
            _ => Err(()),
        }
    }
}

/// One profiled block of statements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
    pub num_stmt: u32,
    pub count: u32,
}

impl Block {
    /// Whether a one-based source line falls inside this block
    pub fn contains_line(&self, line: u32) -> bool {
        line >= self.start_line && line <= self.end_line
    }
}

/// All blocks recorded for one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileProfile {
    /// File name as recorded in the profile, usually module-qualified
    /// (`example.com/mod/pkg/file.go`)
    pub name: String,
    pub blocks: Vec<Block>,
}

impl FileProfile {
    /// Statement coverage in percent
    pub fn coverage(&self) -> f64 {
        stmt_coverage(&self.blocks)
    }
}

/// A parsed cover profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub mode: CoverMode,
    pub files: Vec<FileProfile>,
}

impl Profile {
    /// Aggregate statement coverage across all files, in percent
    pub fn total_coverage(&self) -> f64 {
        let blocks: Vec<Block> = self
            .files
            .iter()
            .flat_map(|f| f.blocks.iter().copied())
            .collect();
        stmt_coverage(&blocks)
    }
}

fn stmt_coverage(blocks: &[Block]) -> f64 {
    let total: u64 = blocks.iter().map(|b| u64::from(b.num_stmt)).sum();
    if total == 0 {
        return 0.0;
    }
    let covered: u64 = blocks
        .iter()
        .filter(|b| b.count > 0)
        .map(|b| u64::from(b.num_stmt))
        .sum();
    covered as f64 / total as f64 * 100.0
}

/// Errors from profile reading and parsing
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing \"mode:\" header")]
    MissingMode,

    #[error("invalid cover mode {0:?}")]
    InvalidMode(String),

    #[error("line {line}: malformed block: {text:?}")]
    MalformedBlock { line: usize, text: String },
}

/// Read and parse the profile at `path`.
pub fn parse_file(path: &Path) -> Result<Profile, ProfileError> {
    parse(&fs::read_to_string(path)?)
}

/// Parse a profile from its text contents.
pub fn parse(src: &str) -> Result<Profile, ProfileError> {
    let mut lines = src.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let (_, header) = lines.next().ok_or(ProfileError::MissingMode)?;
    let mode = header
        .trim()
        .strip_prefix("mode:")
        .ok_or(ProfileError::MissingMode)?
        .trim();
    let mode = mode
        .parse()
        .map_err(|()| ProfileError::InvalidMode(mode.to_string()))?;

    let mut files: Vec<FileProfile> = Vec::new();
    for (idx, line) in lines {
        let (name, block) = parse_block(line.trim()).ok_or(ProfileError::MalformedBlock {
            line: idx + 1,
            text: line.to_string(),
        })?;

        match files.iter_mut().find(|f| f.name == name) {
            Some(file) => file.blocks.push(block),
            None => files.push(FileProfile {
                name: name.to_string(),
                blocks: vec![block],
            }),
        }
    }

    Ok(Profile { mode, files })
}

fn parse_block(line: &str) -> Option<(&str, Block)> {
    let (name, rest) = line.rsplit_once(':')?;
    let (range, counts) = rest.split_once(' ')?;
    let (start, end) = range.split_once(',')?;
    let (start_line, start_col) = start.split_once('.')?;
    let (end_line, end_col) = end.split_once('.')?;
    let (num_stmt, count) = counts.trim().split_once(' ')?;

    if name.is_empty() {
        return None;
    }

    Some((
        name,
        Block {
            start_line: start_line.parse().ok()?,
            start_col: start_col.parse().ok()?,
            end_line: end_line.parse().ok()?,
            end_col: end_col.parse().ok()?,
            num_stmt: num_stmt.parse().ok()?,
            count: count.trim().parse().ok()?,
        },
    ))
}
