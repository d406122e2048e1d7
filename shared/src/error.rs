use thiserror::Error;

use crate::validation::MAX_OPTION_LENGTH;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("No vote submitted")]
    MissingVote,
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Empty option text")]
    EmptyOption,
    #[error("Option text exceeds maximum length of {MAX_OPTION_LENGTH}")]
    OptionTooLong,
    #[error("Duplicate option: {0}")]
    DuplicateOptions(String),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IdentityError {
    #[error("System random source unavailable")]
    RandomSource,
}
