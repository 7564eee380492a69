use crate::referral::code::default_generator;
use crate::referral::{
    normalize_code, reward_points, ApplyOutcome, ApplyRejection, CodeGenerator, ReferralError,
    ReferralRecord, ReferralStats, ReferralStore, MAX_CODE_ATTEMPTS,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS referral_codes (
        user_id TEXT PRIMARY KEY,
        code TEXT NOT NULL UNIQUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS referrals (
        referred_user_id TEXT PRIMARY KEY,
        referrer_user_id TEXT NOT NULL,
        code TEXT NOT NULL REFERENCES referral_codes (code),
        applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_referrals_referrer
        ON referrals (referrer_user_id, applied_at DESC)
    "#,
];

/// Referral store backed by PostgreSQL.
///
/// Uniqueness of codes, one code per user and one referral per referred
/// user are all enforced by table constraints, so concurrent requests across
/// server instances cannot double-apply.
pub struct PgReferralStore {
    pool: PgPool,
    reward_per_referral: u64,
    generator: CodeGenerator,
}

impl PgReferralStore {
    /// Connect and create the schema if missing.
    pub async fn connect(database_url: &str, reward_per_referral: u64) -> Result<Self, ReferralError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let store = Self::from_pool(pool, reward_per_referral);
        store.run_migrations().await?;
        info!("✓ Connected to PostgreSQL");
        Ok(store)
    }

    pub fn from_pool(pool: PgPool, reward_per_referral: u64) -> Self {
        Self {
            pool,
            reward_per_referral,
            generator: default_generator(),
        }
    }

    async fn run_migrations(&self) -> Result<(), ReferralError> {
        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration).execute(&self.pool).await.map_err(|e| {
                ReferralError::Storage(format!("Failed to run migration {}: {}", i, e))
            })?;
        }
        Ok(())
    }

    async fn existing_code(&self, user_id: &str) -> Result<Option<String>, ReferralError> {
        let code = sqlx::query_scalar::<_, String>(
            "SELECT code FROM referral_codes WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(code)
    }
}

#[async_trait]
impl ReferralStore for PgReferralStore {
    async fn assign_referral_code(&self, user_id: &str) -> Result<String, ReferralError> {
        if let Some(code) = self.existing_code(user_id).await? {
            return Ok(code);
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let candidate = (self.generator)();
            let inserted = sqlx::query(
                "INSERT INTO referral_codes (user_id, code) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            )
            .bind(user_id)
            .bind(&candidate)
            .execute(&self.pool)
            .await?
            .rows_affected();

            if inserted == 1 {
                info!(user_id = %user_id, "Assigned referral code");
                return Ok(candidate);
            }

            // Either a concurrent request assigned this user a code, or the
            // candidate belongs to someone else.
            if let Some(code) = self.existing_code(user_id).await? {
                return Ok(code);
            }
            debug!("Referral code collision on attempt {}", attempt);
        }

        Err(ReferralError::CodeSpaceExhausted(MAX_CODE_ATTEMPTS))
    }

    async fn apply_referral_code(
        &self,
        user_id: &str,
        code: &str,
    ) -> Result<ApplyOutcome, ReferralError> {
        let code = normalize_code(code);

        let owner = sqlx::query_scalar::<_, String>(
            "SELECT user_id FROM referral_codes WHERE code = $1",
        )
        .bind(&code)
        .fetch_optional(&self.pool)
        .await?;

        let referrer = match owner {
            Some(owner) => owner,
            None => return Ok(ApplyOutcome::Rejected(ApplyRejection::InvalidCode)),
        };
        if referrer == user_id {
            return Ok(ApplyOutcome::Rejected(ApplyRejection::OwnCode));
        }

        let inserted = sqlx::query(
            "INSERT INTO referrals (referred_user_id, referrer_user_id, code)
             VALUES ($1, $2, $3)
             ON CONFLICT (referred_user_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(&referrer)
        .bind(&code)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if inserted == 0 {
            return Ok(ApplyOutcome::Rejected(ApplyRejection::AlreadyApplied));
        }

        info!(user_id = %user_id, "Applied referral code");
        Ok(ApplyOutcome::Applied)
    }

    async fn get_referral_stats(&self, user_id: &str) -> Result<ReferralStats, ReferralError> {
        let referral_code = self.existing_code(user_id).await?;

        let referred_by = sqlx::query_scalar::<_, String>(
            "SELECT referrer_user_id FROM referrals WHERE referred_user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, (String, DateTime<Utc>)>(
            "SELECT referred_user_id, applied_at FROM referrals
             WHERE referrer_user_id = $1
             ORDER BY applied_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let referrals: Vec<ReferralRecord> = rows
            .into_iter()
            .map(|(referred, applied_at)| ReferralRecord {
                user_id: referred,
                applied_at,
            })
            .collect();

        let total_referrals = referrals.len() as u64;
        Ok(ReferralStats {
            user_id: user_id.to_string(),
            referral_code,
            total_referrals,
            reward_points: reward_points(total_referrals, self.reward_per_referral),
            referred_by,
            referrals,
        })
    }
}
