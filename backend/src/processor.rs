use std::time::Duration;

use shared::{models::*, validation::validate_vote, ValidationError, Voter};
use tokio::time::{sleep, timeout};
use tracing::{info, warn};

use crate::store::{StoreError, VoteSink};

pub const DEFAULT_APPEND_ATTEMPTS: u32 = 2;
pub const DEFAULT_APPEND_TIMEOUT: Duration = Duration::from_millis(2000);
pub const DEFAULT_APPEND_BACKOFF: Duration = Duration::from_millis(100);

/// How hard a single submission tries to reach the vote store before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendPolicy {
    pub attempts: u32,
    pub timeout: Duration,
    pub backoff: Duration,
}

impl Default for AppendPolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_APPEND_ATTEMPTS,
            timeout: DEFAULT_APPEND_TIMEOUT,
            backoff: DEFAULT_APPEND_BACKOFF,
        }
    }
}

#[derive(Debug)]
pub enum Submission {
    Recorded(VoteRecord),
    Rejected(ValidationError),
}

pub struct VoteProcessor;

impl VoteProcessor {
    pub async fn submit(
        sink: &dyn VoteSink,
        policy: &AppendPolicy,
        options: &CandidateOptions,
        voter: &Voter,
        vote: Option<&str>,
    ) -> Result<Submission, StoreError> {
        let choice = match validate_vote(options, vote) {
            Ok(choice) => choice,
            Err(e) => {
                warn!("Ignoring ballot from {}: {}", voter.id, e);
                return Ok(Submission::Rejected(e));
            }
        };

        let record = VoteRecord::new(voter.id.clone(), choice);
        Self::append(sink, policy, &record).await?;
        info!("🗳️ Received vote for {}", choice);
        Ok(Submission::Recorded(record))
    }

    pub async fn append(sink: &dyn VoteSink, policy: &AppendPolicy, record: &VoteRecord) -> Result<(), StoreError> {
        let attempts = policy.attempts.max(1);
        let mut attempt = 1;

        loop {
            let result = match timeout(policy.timeout, sink.append(record)).await {
                Ok(result) => result,
                Err(_) => Err(StoreError::Timeout(policy.timeout)),
            };

            match result {
                Ok(()) => return Ok(()),
                Err(e) if attempt < attempts => {
                    warn!("Vote store append failed (attempt {}/{}): {}", attempt, attempts, e);
                    sleep(policy.backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
