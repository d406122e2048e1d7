use serde::{Serialize, Deserialize};
use time::OffsetDateTime;

use crate::error::ValidationError;
use crate::validation::validate_option_label;
use crate::voter::VoterId;

/// The two labels a visitor can vote for. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateOptions {
    option_a: String,
    option_b: String,
}

impl CandidateOptions {
    pub fn new(option_a: impl Into<String>, option_b: impl Into<String>) -> Result<Self, ValidationError> {
        let (option_a, option_b) = (option_a.into(), option_b.into());
        validate_option_label(&option_a)?;
        validate_option_label(&option_b)?;

        if option_a.to_lowercase() == option_b.to_lowercase() {
            return Err(ValidationError::DuplicateOptions(option_b));
        }

        Ok(Self { option_a, option_b })
    }

    pub fn option_a(&self) -> &str {
        &self.option_a
    }

    pub fn option_b(&self) -> &str {
        &self.option_b
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [self.option_a.as_str(), self.option_b.as_str()].into_iter()
    }

    pub fn contains(&self, vote: &str) -> bool {
        self.iter().any(|option| option == vote)
    }
}

/// One cast vote as it is pushed onto the shared `votes` list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoteRecord {
    pub voter_id: VoterId,
    pub vote: String,
    #[serde(with = "time::serde::rfc3339")]
    pub cast_at: OffsetDateTime,
}

impl VoteRecord {
    pub fn new(voter_id: VoterId, vote: impl Into<String>) -> Self {
        Self {
            voter_id,
            vote: vote.into(),
            cast_at: OffsetDateTime::now_utc(),
        }
    }
}
