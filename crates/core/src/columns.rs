//! Column selection.
//!
//! Columns are named by their 1-based position in a line, the same way
//! they are typed on the command line.

use std::collections::BTreeSet;

use log::debug;

use crate::error::{Error, Result};

/// The set of 1-based column positions requested by the user.
///
/// Duplicates collapse and the order the columns were given in has no
/// effect: output always follows the order of the fields in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    columns: BTreeSet<u64>,
}

impl ColumnSet {
    /// Parses column tokens into a set.
    ///
    /// Tokens are checked in order and the first bad one is reported
    /// immediately, before any emptiness check.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A token is not a base-10 integer ([`Error::ArgumentParse`])
    /// - A token is less than 1 ([`Error::InvalidColumn`])
    /// - No tokens were given at all ([`Error::MissingColumns`])
    ///
    /// # Examples
    ///
    /// ```
    /// use cl_core::columns::ColumnSet;
    ///
    /// let columns = ColumnSet::parse(&["3", "1", "3"])?;
    /// assert_eq!(columns.len(), 2);
    /// assert!(columns.contains(1));
    /// assert!(!columns.contains(2));
    /// # Ok::<(), cl_core::error::Error>(())
    /// ```
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let mut columns = BTreeSet::new();

        for token in tokens {
            let token = token.as_ref();
            let column = token
                .parse::<i64>()
                .map_err(|e| Error::argument_parse(token.to_string(), e))?;

            if column < 1 {
                return Err(Error::InvalidColumn(column));
            }

            // Positive by the check above, so the cast is lossless
            columns.insert(column as u64);
        }

        if columns.is_empty() {
            return Err(Error::MissingColumns);
        }

        debug!("Selected columns: {:?}", columns);
        Ok(Self { columns })
    }

    /// Whether the 1-based `column` was requested.
    #[must_use]
    pub fn contains(&self, column: u64) -> bool {
        self.columns.contains(&column)
    }

    /// The largest requested column. Fields past it never reach the output.
    #[must_use]
    pub fn max(&self) -> u64 {
        self.columns.last().copied().unwrap_or(0)
    }

    /// Number of distinct columns. A parsed set is never empty.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_column() {
        let columns = ColumnSet::parse(&["2"]).unwrap();
        assert_eq!(columns.len(), 1);
        assert!(columns.contains(2));
        assert_eq!(columns.max(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let columns = ColumnSet::parse(&["1", "1", "4", "1"]).unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns.max(), 4);
    }

    #[test]
    fn test_argument_order_is_irrelevant() {
        let forward = ColumnSet::parse(&["1", "2"]).unwrap();
        let backward = ColumnSet::parse(&["2", "1"]).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_non_numeric_token() {
        let result = ColumnSet::parse(&["1", "abc"]);
        match result {
            Err(Error::ArgumentParse { token, .. }) => assert_eq!(token, "abc"),
            other => panic!("Expected ArgumentParse error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_is_invalid() {
        let result = ColumnSet::parse(&["0"]);
        assert!(matches!(result, Err(Error::InvalidColumn(0))));
    }

    #[test]
    fn test_negative_is_invalid() {
        let result = ColumnSet::parse(&["-3"]);
        assert!(matches!(result, Err(Error::InvalidColumn(-3))));
    }

    #[test]
    fn test_first_bad_token_wins() {
        // "x" fails to parse before "0" gets a chance to be rejected
        let result = ColumnSet::parse(&["x", "0"]);
        assert!(matches!(result, Err(Error::ArgumentParse { .. })));

        let result = ColumnSet::parse(&["0", "x"]);
        assert!(matches!(result, Err(Error::InvalidColumn(0))));
    }

    #[test]
    fn test_empty_tokens() {
        let tokens: Vec<String> = vec![];
        let result = ColumnSet::parse(&tokens);
        assert!(matches!(result, Err(Error::MissingColumns)));
    }

    #[test]
    fn test_bad_token_takes_precedence_over_missing() {
        let result = ColumnSet::parse(&[""]);
        assert!(matches!(result, Err(Error::ArgumentParse { .. })));
    }

    #[test]
    fn test_error_message_names_token() {
        let err = ColumnSet::parse(&["1.5"]).unwrap_err();
        assert!(err.to_string().contains("\"1.5\""));
    }
}
