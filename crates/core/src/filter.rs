//! The scan-split-select loop.
//!
//! Input is read one line at a time. Each line is split into fields,
//! the requested columns are kept in input order and written out joined
//! by tabs. Nothing from a line outlives its iteration.

use std::io::{BufRead, Write};

use itertools::Itertools;
use log::{debug, info, warn};

use crate::columns::ColumnSet;
use crate::config::Config;
use crate::error::{Error, Result};

/// Written between selected fields.
pub const OUTPUT_SEPARATOR: &[u8] = b"\t";

/// Counts collected over a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines read from the input, header included.
    pub lines_read: u64,
    /// Lines written to the output.
    pub lines_written: u64,
    pub header_skipped: bool,
}

/// Keeps the fields whose 1-based column is in `columns`, in input order,
/// joined by [`OUTPUT_SEPARATOR`]. Field bytes are copied unchanged.
///
/// Requested columns past the end of `fields` are ignored.
///
/// # Examples
///
/// ```
/// use cl_core::columns::ColumnSet;
/// use cl_core::filter::select_fields;
///
/// let columns = ColumnSet::parse(&["3", "1"])?;
/// assert_eq!(select_fields(&columns, &[b"a", b"b", b"c"]), b"a\tc");
/// assert_eq!(select_fields(&columns, &[b"a", b"b"]), b"a");
/// # Ok::<(), cl_core::error::Error>(())
/// ```
#[must_use]
pub fn select_fields<F: AsRef<[u8]>>(columns: &ColumnSet, fields: &[F]) -> Vec<u8> {
    let last_column = columns.max();

    let selected = fields
        .iter()
        .zip(1u64..)
        .take_while(|(_, column)| *column <= last_column)
        .filter(|(_, column)| columns.contains(*column))
        .map(|(field, _)| field.as_ref());

    Itertools::intersperse(selected, OUTPUT_SEPARATOR)
        .collect::<Vec<&[u8]>>()
        .concat()
}

/// Strips `\n` and a `\r` before it.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Filters `input` into `output` according to `config`.
///
/// Every line read after the optional header produces exactly one output
/// line, empty when none of the requested columns exist in it. A final
/// line without a trailing newline still counts as a line. Lines are
/// handled as bytes and need not be valid UTF-8.
///
/// Output is flushed before returning, also when reading fails, so lines
/// already processed are never lost.
///
/// # Errors
///
/// Returns an error if:
/// - Reading the input fails ([`Error::InputRead`])
/// - Writing or flushing the output fails ([`Error::OutputWrite`])
pub fn run<R: BufRead, W: Write>(config: &Config, mut input: R, mut output: W) -> Result<Summary> {
    let mut summary = Summary::default();
    let mut buffer: Vec<u8> = Vec::new();
    let mut first_line = true;

    loop {
        buffer.clear();

        let bytes_read = match input.read_until(b'\n', &mut buffer) {
            Ok(bytes_read) => bytes_read,
            Err(e) => {
                if let Err(flush_error) = output.flush() {
                    warn!("Could not flush output after read failure: {flush_error}");
                }
                return Err(Error::InputRead(e));
            }
        };

        if bytes_read == 0 {
            break;
        }

        summary.lines_read += 1;

        if first_line {
            first_line = false;
            if config.skip_header {
                debug!("Skipping header line");
                summary.header_skipped = true;
                continue;
            }
        }

        let fields = config.separator.split(trim_line_ending(&buffer));

        let mut selected = select_fields(&config.columns, &fields);
        selected.push(b'\n');

        output
            .write_all(&selected)
            .map_err(Error::OutputWrite)?;
        summary.lines_written += 1;
    }

    output.flush().map_err(Error::OutputWrite)?;

    info!(
        "Read {} line(s), wrote {} line(s)",
        summary.lines_read, summary.lines_written
    );
    Ok(summary)
}
