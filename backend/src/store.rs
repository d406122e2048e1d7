use std::time::Duration;

use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client};
use shared::models::VoteRecord;
use tracing::{debug, info};

pub const VOTES_LIST: &str = "votes";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Vote store connection error: {0}")]
    Connection(#[from] redis::RedisError),
    #[error("Failed to encode vote record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Vote store did not answer within {0:?}")]
    Timeout(Duration),
}

/// Append-only view of the vote log.
#[rocket::async_trait]
pub trait VoteSink: Send + Sync {
    async fn append(&self, record: &VoteRecord) -> Result<(), StoreError>;
}

/// List key and payload pushed for one vote.
pub fn list_entry(record: &VoteRecord) -> Result<(&'static str, String), StoreError> {
    Ok((VOTES_LIST, serde_json::to_string(record)?))
}

pub struct RedisVoteSink {
    conn: ConnectionManager,
}

impl RedisVoteSink {
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = Client::open(redis_url)?;
        let config = ConnectionManagerConfig::new().set_number_of_retries(1);

        let conn = tokio::time::timeout(CONNECT_TIMEOUT, client.get_connection_manager_with_config(config))
            .await
            .map_err(|_| StoreError::Timeout(CONNECT_TIMEOUT))??;

        info!("📦 Connected to vote store");
        Ok(Self { conn })
    }
}

#[rocket::async_trait]
impl VoteSink for RedisVoteSink {
    async fn append(&self, record: &VoteRecord) -> Result<(), StoreError> {
        let (list_key, payload) = list_entry(record)?;
        let mut conn = self.conn.clone();
        let len: i64 = conn.rpush(list_key, payload).await?;
        debug!("Appended vote to {} (length {})", list_key, len);
        Ok(())
    }
}
