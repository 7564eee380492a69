//! Referral codes: assignment, redemption and per-user statistics.
//!
//! The HTTP layer only talks to a [`ReferralStore`]. Two stores exist:
//! [`MemoryReferralStore`] for development and tests, and
//! [`PgReferralStore`] backed by PostgreSQL.
//!
//! Rules every store enforces:
//! - a user owns at most one code, and asking again returns the same code
//! - codes are unique across users
//! - a user can be referred at most once, and never by their own code

mod code;
mod memory;
mod postgres;

pub use code::{generate_code, normalize_code, CodeGenerator, CODE_ALPHABET, CODE_LENGTH, MAX_CODE_ATTEMPTS};
pub use memory::MemoryReferralStore;
pub use postgres::PgReferralStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures of the store itself, as opposed to rejected requests.
#[derive(Debug, Error)]
pub enum ReferralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Could not allocate a unique referral code after {0} attempts")]
    CodeSpaceExhausted(u32),

    #[error("{0}")]
    Storage(String),
}

impl ReferralError {
    /// Whether trying again later could succeed: dropped connections, pool
    /// timeouts and TLS handshakes. Bad configuration and query errors are permanent.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ReferralError::Database(
                sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::Tls(_)
            )
        )
    }
}

/// Why a referral code could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApplyRejection {
    #[error("Invalid referral code")]
    InvalidCode,

    #[error("Cannot use your own referral code")]
    OwnCode,

    #[error("Referral code already applied")]
    AlreadyApplied,
}

/// Result of applying a referral code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Rejected(ApplyRejection),
}

impl ApplyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ApplyOutcome::Applied)
    }
}

/// One user who signed up with someone's code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRecord {
    pub user_id: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralStats {
    pub user_id: String,
    pub referral_code: Option<String>,
    pub total_referrals: u64,
    pub reward_points: u64,
    /// User id of whoever referred this user
    pub referred_by: Option<String>,
    /// Newest first
    pub referrals: Vec<ReferralRecord>,
}

/// Points owed for `total_referrals`, capped at `u64::MAX`.
pub fn reward_points(total_referrals: u64, reward_per_referral: u64) -> u64 {
    total_referrals.saturating_mul(reward_per_referral)
}

impl ReferralStats {
    /// Stats for a user with no code and no referrals.
    pub fn empty(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            referral_code: None,
            total_referrals: 0,
            reward_points: 0,
            referred_by: None,
            referrals: Vec::new(),
        }
    }
}

#[async_trait]
pub trait ReferralStore: Send + Sync {
    /// Return the user's referral code, creating one on first call.
    async fn assign_referral_code(&self, user_id: &str) -> Result<String, ReferralError>;

    /// Record that `user_id` signed up with `code`.
    async fn apply_referral_code(
        &self,
        user_id: &str,
        code: &str,
    ) -> Result<ApplyOutcome, ReferralError>;

    async fn get_referral_stats(&self, user_id: &str) -> Result<ReferralStats, ReferralError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(ApplyRejection::InvalidCode.to_string(), "Invalid referral code");
        assert_eq!(ApplyRejection::OwnCode.to_string(), "Cannot use your own referral code");
        assert_eq!(ApplyRejection::AlreadyApplied.to_string(), "Referral code already applied");
    }

    #[test]
    fn test_outcome_success() {
        assert!(ApplyOutcome::Applied.is_success());
        assert!(!ApplyOutcome::Rejected(ApplyRejection::OwnCode).is_success());
    }

    #[test]
    fn test_empty_stats_serialization() {
        let json = serde_json::to_value(ReferralStats::empty("u1")).unwrap();
        assert_eq!(json["userId"], "u1");
        assert!(json["referralCode"].is_null());
        assert_eq!(json["totalReferrals"], 0);
        assert_eq!(json["rewardPoints"], 0);
        assert!(json["referredBy"].is_null());
        assert_eq!(json["referrals"], serde_json::json!([]));
    }

    #[test]
    fn test_reward_points_saturate() {
        assert_eq!(reward_points(3, 100), 300);
        assert_eq!(reward_points(0, u64::MAX), 0);
        assert_eq!(reward_points(2, u64::MAX), u64::MAX);
    }

    #[test]
    fn test_transient_errors() {
        let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(ReferralError::Database(sqlx::Error::Io(refused)).is_transient());
        assert!(ReferralError::Database(sqlx::Error::PoolTimedOut).is_transient());

        assert!(!ReferralError::Database(sqlx::Error::Configuration("bad url".into())).is_transient());
        assert!(!ReferralError::Database(sqlx::Error::RowNotFound).is_transient());
        assert!(!ReferralError::CodeSpaceExhausted(5).is_transient());
        assert!(!ReferralError::Storage("migration failed".to_string()).is_transient());
    }

    #[test]
    fn test_code_space_exhausted_message() {
        let err = ReferralError::CodeSpaceExhausted(5);
        assert!(err.to_string().contains("after 5 attempts"));
    }
}
