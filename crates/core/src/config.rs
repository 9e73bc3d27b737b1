//! Run configuration.
//!
//! The configuration is built once from the command line and stays
//! read-only while input is scanned.

use log::info;

use crate::columns::ColumnSet;
use crate::error::Result;
use crate::separator::Separator;

/// Everything the scan loop needs to know about a run.
#[derive(Debug, Clone)]
pub struct Config {
    pub columns: ColumnSet,
    pub separator: Separator,
    pub skip_header: bool,
}

impl Config {
    /// Validates the command-line values and builds the configuration.
    ///
    /// Column tokens are checked first, then the separator options, so
    /// a bad column is reported even when the separator is also wrong.
    ///
    /// # Arguments
    ///
    /// * `column_tokens` - Positional column arguments, unparsed
    /// * `separator` - The `-s` pattern, empty when not given
    /// * `use_tab` - Whether `-t` was given
    /// * `skip_header` - Whether `-i` was given
    ///
    /// # Errors
    ///
    /// Returns any error from [`ColumnSet::parse`] or [`Separator::resolve`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cl_core::config::Config;
    ///
    /// let config = Config::new(&["1", "3"], ",", false, true)?;
    /// assert!(config.skip_header);
    /// assert!(config.columns.contains(3));
    /// # Ok::<(), cl_core::error::Error>(())
    /// ```
    pub fn new<S: AsRef<str>>(
        column_tokens: &[S],
        separator: &str,
        use_tab: bool,
        skip_header: bool,
    ) -> Result<Self> {
        let columns = ColumnSet::parse(column_tokens)?;
        let separator = Separator::resolve(separator, use_tab)?;

        info!(
            "Configured {} column(s), separator: {:?}, skip header: {}",
            columns.len(),
            separator,
            skip_header
        );

        Ok(Self {
            columns,
            separator,
            skip_header,
        })
    }
}
