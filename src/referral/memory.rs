use crate::referral::code::default_generator;
use crate::referral::{
    normalize_code, reward_points, ApplyOutcome, ApplyRejection, CodeGenerator, ReferralError,
    ReferralRecord, ReferralStats, ReferralStore, MAX_CODE_ATTEMPTS,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug)]
struct Referral {
    referred_user_id: String,
    referrer_user_id: String,
    applied_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct State {
    code_by_user: HashMap<String, String>,
    user_by_code: HashMap<String, String>,
    /// In application order
    referrals: Vec<Referral>,
    /// referred user id -> index into `referrals`
    referral_index: HashMap<String, usize>,
}

/// Referral store kept in process memory.
///
/// All tables sit behind one lock, so each operation is atomic with respect
/// to the others. Data is lost on restart.
pub struct MemoryReferralStore {
    state: Mutex<State>,
    reward_per_referral: u64,
    generator: CodeGenerator,
}

impl MemoryReferralStore {
    pub fn new(reward_per_referral: u64) -> Self {
        Self::with_generator(reward_per_referral, default_generator())
    }

    pub fn with_generator(reward_per_referral: u64, generator: CodeGenerator) -> Self {
        Self {
            state: Mutex::new(State::default()),
            reward_per_referral,
            generator,
        }
    }
}

#[async_trait]
impl ReferralStore for MemoryReferralStore {
    async fn assign_referral_code(&self, user_id: &str) -> Result<String, ReferralError> {
        let mut state = self.state.lock().await;

        if let Some(existing) = state.code_by_user.get(user_id) {
            return Ok(existing.clone());
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let candidate = (self.generator)();
            if state.user_by_code.contains_key(&candidate) {
                debug!("Referral code collision on attempt {}", attempt);
                continue;
            }

            state
                .user_by_code
                .insert(candidate.clone(), user_id.to_string());
            state
                .code_by_user
                .insert(user_id.to_string(), candidate.clone());
            info!(user_id = %user_id, "Assigned referral code");
            return Ok(candidate);
        }

        Err(ReferralError::CodeSpaceExhausted(MAX_CODE_ATTEMPTS))
    }

    async fn apply_referral_code(
        &self,
        user_id: &str,
        code: &str,
    ) -> Result<ApplyOutcome, ReferralError> {
        let code = normalize_code(code);
        let mut state = self.state.lock().await;

        let referrer = match state.user_by_code.get(&code) {
            Some(owner) => owner.clone(),
            None => return Ok(ApplyOutcome::Rejected(ApplyRejection::InvalidCode)),
        };
        if referrer == user_id {
            return Ok(ApplyOutcome::Rejected(ApplyRejection::OwnCode));
        }
        if state.referral_index.contains_key(user_id) {
            return Ok(ApplyOutcome::Rejected(ApplyRejection::AlreadyApplied));
        }

        let index = state.referrals.len();
        state.referrals.push(Referral {
            referred_user_id: user_id.to_string(),
            referrer_user_id: referrer,
            applied_at: Utc::now(),
        });
        state.referral_index.insert(user_id.to_string(), index);
        info!(user_id = %user_id, "Applied referral code");

        Ok(ApplyOutcome::Applied)
    }

    async fn get_referral_stats(&self, user_id: &str) -> Result<ReferralStats, ReferralError> {
        let state = self.state.lock().await;

        let referrals: Vec<ReferralRecord> = state
            .referrals
            .iter()
            .rev()
            .filter(|r| r.referrer_user_id == user_id)
            .map(|r| ReferralRecord {
                user_id: r.referred_user_id.clone(),
                applied_at: r.applied_at,
            })
            .collect();

        let referred_by = state
            .referral_index
            .get(user_id)
            .map(|&index| state.referrals[index].referrer_user_id.clone());

        let total_referrals = referrals.len() as u64;
        Ok(ReferralStats {
            user_id: user_id.to_string(),
            referral_code: state.code_by_user.get(user_id).cloned(),
            total_referrals,
            reward_points: reward_points(total_referrals, self.reward_per_referral),
            referred_by,
            referrals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::referral::{CODE_ALPHABET, CODE_LENGTH};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // ==================== Helper Functions ====================

    /// Generator that hands out the given codes in order, repeating the last.
    fn scripted(codes: &[&str]) -> CodeGenerator {
        let codes: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        let next = AtomicUsize::new(0);
        Arc::new(move || {
            let i = next.fetch_add(1, Ordering::SeqCst).min(codes.len() - 1);
            codes[i].clone()
        })
    }

    // ==================== assign_referral_code Tests ====================

    #[tokio::test]
    async fn test_assign_generates_well_formed_code() {
        let store = MemoryReferralStore::new(100);
        let code = store.assign_referral_code("u1").await.unwrap();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
    }

    #[tokio::test]
    async fn test_assign_is_idempotent() {
        let store = MemoryReferralStore::new(100);
        let first = store.assign_referral_code("u1").await.unwrap();
        let second = store.assign_referral_code("u1").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_assign_retries_on_collision() {
        let store = MemoryReferralStore::with_generator(100, scripted(&["AAAA2222", "AAAA2222", "BBBB3333"]));
        assert_eq!(store.assign_referral_code("u1").await.unwrap(), "AAAA2222");
        assert_eq!(store.assign_referral_code("u2").await.unwrap(), "BBBB3333");
    }

    #[tokio::test]
    async fn test_assign_gives_up_after_max_attempts() {
        let store = MemoryReferralStore::with_generator(100, scripted(&["SAME2345"]));
        store.assign_referral_code("u1").await.unwrap();

        let err = store.assign_referral_code("u2").await.unwrap_err();
        assert!(matches!(err, ReferralError::CodeSpaceExhausted(MAX_CODE_ATTEMPTS)));

        // u2 was not left with a half-assigned code
        let stats = store.get_referral_stats("u2").await.unwrap();
        assert!(stats.referral_code.is_none());
    }

    // ==================== apply_referral_code Tests ====================

    #[tokio::test]
    async fn test_apply_valid_code() {
        let store = MemoryReferralStore::new(100);
        let code = store.assign_referral_code("referrer").await.unwrap();

        let outcome = store.apply_referral_code("newbie", &code).await.unwrap();
        assert_eq!(outcome, ApplyOutcome::Applied);
    }

    #[tokio::test]
    async fn test_apply_normalizes_code() {
        let store = MemoryReferralStore::with_generator(100, scripted(&["ABCD2345"]));
        store.assign_referral_code("referrer").await.unwrap();

        let outcome = store.apply_referral_code("newbie", " abcd2345 ").await.unwrap();
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_apply_unknown_code() {
        let store = MemoryReferralStore::new(100);
        let outcome = store.apply_referral_code("u1", "NOPE2345").await.unwrap();
        assert_eq!(outcome, ApplyOutcome::Rejected(ApplyRejection::InvalidCode));
    }

    #[tokio::test]
    async fn test_apply_own_code() {
        let store = MemoryReferralStore::new(100);
        let code = store.assign_referral_code("u1").await.unwrap();
        let outcome = store.apply_referral_code("u1", &code).await.unwrap();
        assert_eq!(outcome, ApplyOutcome::Rejected(ApplyRejection::OwnCode));
    }

    #[tokio::test]
    async fn test_apply_twice() {
        let store = MemoryReferralStore::with_generator(100, scripted(&["AAAA2222", "BBBB3333"]));
        let first = store.assign_referral_code("r1").await.unwrap();
        let second = store.assign_referral_code("r2").await.unwrap();

        assert!(store.apply_referral_code("u1", &first).await.unwrap().is_success());
        let outcome = store.apply_referral_code("u1", &second).await.unwrap();
        assert_eq!(outcome, ApplyOutcome::Rejected(ApplyRejection::AlreadyApplied));

        // Only the first referrer is credited
        assert_eq!(store.get_referral_stats("r1").await.unwrap().total_referrals, 1);
        assert_eq!(store.get_referral_stats("r2").await.unwrap().total_referrals, 0);
    }

    #[tokio::test]
    async fn test_concurrent_apply_single_winner() {
        let store = Arc::new(MemoryReferralStore::new(100));
        let code = store.assign_referral_code("referrer").await.unwrap();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                let code = code.clone();
                tokio::spawn(async move { store.apply_referral_code("racer", &code).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().unwrap().is_success() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }

    // ==================== get_referral_stats Tests ====================

    #[tokio::test]
    async fn test_stats_unknown_user() {
        let store = MemoryReferralStore::new(100);
        let stats = store.get_referral_stats("ghost").await.unwrap();
        assert_eq!(stats, ReferralStats::empty("ghost"));
    }

    #[tokio::test]
    async fn test_stats_counts_rewards_and_orders_newest_first() {
        let store = MemoryReferralStore::new(250);
        let code = store.assign_referral_code("referrer").await.unwrap();
        store.apply_referral_code("first", &code).await.unwrap();
        store.apply_referral_code("second", &code).await.unwrap();

        let stats = store.get_referral_stats("referrer").await.unwrap();
        assert_eq!(stats.referral_code.as_deref(), Some(code.as_str()));
        assert_eq!(stats.total_referrals, 2);
        assert_eq!(stats.reward_points, 500);
        assert_eq!(stats.referrals[0].user_id, "second");
        assert_eq!(stats.referrals[1].user_id, "first");
        assert!(stats.referred_by.is_none());
    }

    #[tokio::test]
    async fn test_stats_reward_points_saturate() {
        let store = MemoryReferralStore::new(u64::MAX);
        let code = store.assign_referral_code("referrer").await.unwrap();
        store.apply_referral_code("first", &code).await.unwrap();
        store.apply_referral_code("second", &code).await.unwrap();

        let stats = store.get_referral_stats("referrer").await.unwrap();
        assert_eq!(stats.total_referrals, 2);
        assert_eq!(stats.reward_points, u64::MAX);
    }

    #[tokio::test]
    async fn test_stats_referred_by() {
        let store = MemoryReferralStore::new(100);
        let code = store.assign_referral_code("referrer").await.unwrap();
        store.apply_referral_code("newbie", &code).await.unwrap();

        let stats = store.get_referral_stats("newbie").await.unwrap();
        assert_eq!(stats.referred_by.as_deref(), Some("referrer"));
        assert_eq!(stats.total_referrals, 0);
    }
}
