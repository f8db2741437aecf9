//! Template loading and parsing.
//! A template is an INI-like file of `key = value` lines, optionally grouped
//! under `[section]` headers. Files without headers are treated as a single
//! implicit section that is never rendered back.

use crate::constants::IMPLICIT_SECTION;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(?P<name>.+)\]").expect("section header pattern"));

static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<key>.*?)\s*[=:]\s*(?P<value>.*)$").expect("key/value pattern")
});

/// One `key = value` line of a template, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub section: &'a str,
    pub key: &'a str,
    pub value: &'a str,
}

/// Parsed template: ordered sections, each an ordered map of key to raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    sectioned: bool,
    sections: IndexMap<String, IndexMap<String, String>>,
}

/// Returns true when any line starts with a `[` section marker.
pub fn has_section_headers(content: &str) -> bool {
    content.lines().any(|line| line.starts_with('['))
}

/// Quotes bare `true`/`false` tokens and doubles existing quote characters.
///
/// Content that already carries a quoted boolean, or has no boolean token
/// at all, is returned unchanged, so applying this twice is the same as
/// applying it once.
pub fn normalize_booleans(content: &str) -> String {
    let already_quoted = content.contains("\"true\"") || content.contains("\"false\"");
    let has_booleans = content.contains("true") || content.contains("false");
    if already_quoted || !has_booleans {
        return content.to_string();
    }

    content
        .replace('"', "\"\"")
        .replace("true", "\"true\"")
        .replace("false", "\"false\"")
}

impl Template {
    /// Reads a template from disk.
    ///
    /// Sectioned templates are normalized with [`normalize_booleans`] first and
    /// the result is written back to `path` when it differs from the original.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the file does not exist
    /// * `Error::ReadError` / `Error::WriteError` on other I/O failures
    /// * `Error::SyntaxError` if the content cannot be parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => Error::TemplateNotFound { path: path.to_path_buf() },
            _ => Error::ReadError { path: path.to_path_buf(), source },
        })?;

        if !has_section_headers(&content) {
            debug!("No section headers in {}, using implicit section", path.display());
            return Self::parse(&content);
        }

        let normalized = normalize_booleans(&content);
        if normalized != content {
            debug!("Quoting boolean tokens in {}", path.display());
            fs::write(path, &normalized)
                .map_err(|source| Error::WriteError { path: path.to_path_buf(), source })?;
        } else {
            debug!("Boolean tokens in {} are already normalized", path.display());
        }
        Self::parse(&normalized)
    }

    /// Parses template content without touching the filesystem.
    ///
    /// Blank lines and lines starting with `#` or `;` are skipped. Keys keep
    /// their case; keys and values are trimmed. A value may be empty.
    pub fn parse(content: &str) -> Result<Self> {
        let sectioned = has_section_headers(content);
        let mut sections: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        let mut current: Option<String> = None;

        if !sectioned {
            sections.insert(IMPLICIT_SECTION.to_string(), IndexMap::new());
            current = Some(IMPLICIT_SECTION.to_string());
        }

        for (number, line) in content.lines().enumerate() {
            let line_no = number + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            if sectioned {
                if let Some(caps) = SECTION_HEADER.captures(trimmed) {
                    let name = caps["name"].to_string();
                    if sections.contains_key(&name) {
                        return Err(Error::SyntaxError {
                            line: line_no,
                            message: format!("section '{}' is defined twice", name),
                        });
                    }
                    sections.insert(name.clone(), IndexMap::new());
                    current = Some(name);
                    continue;
                }
            }

            let caps = KEY_VALUE.captures(trimmed).ok_or_else(|| Error::SyntaxError {
                line: line_no,
                message: format!("expected 'key = value', found '{}'", trimmed),
            })?;
            let key = caps["key"].to_string();
            let value = caps["value"].to_string();

            if key.is_empty() {
                return Err(Error::SyntaxError {
                    line: line_no,
                    message: "missing key before delimiter".to_string(),
                });
            }

            let section = current.as_ref().ok_or_else(|| Error::SyntaxError {
                line: line_no,
                message: format!("'{}' appears before the first section header", key),
            })?;
            let entries = sections.entry(section.clone()).or_default();
            if entries.contains_key(&key) {
                return Err(Error::SyntaxError {
                    line: line_no,
                    message: format!("'{}' is defined twice in section '{}'", key, section),
                });
            }
            entries.insert(key, value);
        }

        Ok(Self { sectioned, sections })
    }

    /// Whether the template used explicit `[section]` headers.
    pub fn is_sectioned(&self) -> bool {
        self.sectioned
    }

    /// Sections in document order with their entries.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &IndexMap<String, String>)> {
        self.sections.iter().map(|(name, entries)| (name.as_str(), entries))
    }

    /// All `key = value` records in document order, across sections.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.sections.iter().flat_map(|(section, entries)| {
            entries.iter().map(move |(key, value)| Record {
                section: section.as_str(),
                key: key.as_str(),
                value: value.as_str(),
            })
        })
    }

    pub fn len(&self) -> usize {
        self.sections.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
