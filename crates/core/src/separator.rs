//! Field separators and line splitting.
//!
//! Lines are split as raw bytes, so input that is not valid UTF-8 passes
//! through untouched.

use log::debug;
use regex::bytes::Regex;

use crate::error::{Error, Result};

/// Pattern used by the `-t` shorthand.
pub const TAB: &str = "\t";

/// Runs of Unicode whitespace, used when no separator is given.
const WHITESPACE_RUN: &str = r"\s+";

/// How a line is split into fields.
#[derive(Debug, Clone)]
pub enum Separator {
    /// Split on runs of whitespace, ignoring leading and trailing
    /// whitespace. Never yields empty fields.
    Whitespace(Regex),

    /// Split on every match of a regular expression. Taken literally:
    /// consecutive, leading and trailing matches yield empty fields.
    Pattern(Regex),
}

impl Separator {
    /// Resolves the separator from the `-s` pattern and the `-t` flag.
    ///
    /// An empty `pattern` means no explicit separator was given. With
    /// neither option set, lines are split on whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Both a pattern and the tab flag are given ([`Error::ConflictingSeparator`])
    /// - The pattern is not a valid regular expression ([`Error::SeparatorCompile`])
    ///
    /// # Examples
    ///
    /// ```
    /// use cl_core::separator::Separator;
    ///
    /// let separator = Separator::resolve(",", false)?;
    /// assert_eq!(separator.split(b"a,,b"), [&b"a"[..], &b""[..], &b"b"[..]]);
    ///
    /// let separator = Separator::resolve("", false)?;
    /// assert_eq!(separator.split(b"  a  b "), [&b"a"[..], &b"b"[..]]);
    /// # Ok::<(), cl_core::error::Error>(())
    /// ```
    pub fn resolve(pattern: &str, use_tab: bool) -> Result<Self> {
        if !pattern.is_empty() && use_tab {
            return Err(Error::ConflictingSeparator);
        }

        let pattern = if use_tab { TAB } else { pattern };

        if pattern.is_empty() {
            debug!("Splitting on whitespace");
            return Ok(Self::Whitespace(compile(WHITESPACE_RUN)?));
        }

        debug!("Splitting on pattern {:?}", pattern);
        Ok(Self::Pattern(compile(pattern)?))
    }

    /// Splits `line` into its fields. Index 0 holds column 1.
    #[must_use]
    pub fn split<'a>(&self, line: &'a [u8]) -> Vec<&'a [u8]> {
        match self {
            Self::Whitespace(regex) => split_on(regex, line)
                .into_iter()
                .filter(|field| !field.is_empty())
                .collect(),
            Self::Pattern(regex) => split_on(regex, line),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::separator_compile(pattern.to_string(), e))
}

/// Splits around the matches of `regex`.
///
/// An empty match at the very start does not open an empty first field,
/// and a match ending the line does not leave an empty last field behind
/// unless the match itself is non-empty. An empty line is one empty field.
fn split_on<'a>(regex: &Regex, line: &'a [u8]) -> Vec<&'a [u8]> {
    if line.is_empty() {
        return vec![line];
    }

    let mut fields = Vec::new();
    let mut start = 0;
    let mut last_match_start = 0;

    for found in regex.find_iter(line) {
        last_match_start = found.start();
        if found.end() != 0 {
            fields.push(&line[start..found.start()]);
        }
        start = found.end();
    }

    if last_match_start != line.len() {
        fields.push(&line[start..]);
    }

    fields
}
