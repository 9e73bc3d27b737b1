//! cl Core Library
//!
//! This crate provides the column filter engine behind `cl`, a tool that
//! reads line-oriented text, splits each line into fields and keeps only
//! the columns the user asked for.
//!
//! # Key Features
//!
//! - **Column Selection**: 1-based column positions with set semantics
//! - **Separators**: Whitespace runs by default, a literal tab, or any regular expression
//! - **Header Skipping**: Optionally drop the first input line
//! - **Stream Injection**: The engine works on any `BufRead`/`Write` pair
//! - **Error Handling**: One error type covering every way a run can fail
//!
//! # Examples
//!
//! ```
//! use cl_core::config::Config;
//! use cl_core::filter;
//!
//! let config = Config::new(&["1", "3"], ",", false, false)?;
//! let mut output = Vec::new();
//! filter::run(&config, "a,b,c\n".as_bytes(), &mut output)?;
//! assert_eq!(output, b"a\tc\n");
//! # Ok::<(), cl_core::error::Error>(())
//! ```

pub mod columns;
pub mod config;
pub mod error;
pub mod filter;
pub mod separator;
