use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to parse argument \"{}\": {}", .token, .original)]
    ArgumentParse {
        token: String,
        original: ParseIntError,
    },

    #[error("argument \"{}\" is invalid, column indexes must be positive numbers", .0)]
    InvalidColumn(i64),

    #[error("at least one column must be given")]
    MissingColumns,

    #[error("you cannot use both -s and -t")]
    ConflictingSeparator,

    #[error("could not parse separator \"{}\" as a regular expression: {}", .pattern, .original)]
    SeparatorCompile {
        pattern: String,
        original: regex::Error,
    },

    #[error("failed to read input: {}", .0)]
    InputRead(std::io::Error),

    #[error("failed to write output: {}", .0)]
    OutputWrite(std::io::Error),
}

impl Error {
    pub fn argument_parse(token: String, original: ParseIntError) -> Self {
        Self::ArgumentParse { token, original }
    }

    pub fn separator_compile(pattern: String, original: regex::Error) -> Self {
        Self::SeparatorCompile { pattern, original }
    }
}
