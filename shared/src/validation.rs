use crate::error::ValidationError;
use crate::models::CandidateOptions;

pub const MAX_OPTION_LENGTH: usize = 40;

pub fn validate_option_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() { return Err(ValidationError::EmptyOption); }
    if label.chars().count() > MAX_OPTION_LENGTH { return Err(ValidationError::OptionTooLong); }
    Ok(())
}

/// Checks a submitted form value against the configured options.
///
/// Matching is exact: no trimming and no case folding, so `"cats"` is not a
/// vote for `"Cats"`.
pub fn validate_vote<'a>(options: &'a CandidateOptions, vote: Option<&str>) -> Result<&'a str, ValidationError> {
    let vote = vote.ok_or(ValidationError::MissingVote)?;
    options.iter()
        .find(|option| *option == vote)
        .ok_or_else(|| ValidationError::UnknownOption(vote.to_string()))
}
