//! `/api/referral`: validate, delegate to the store, map the result to HTTP.

use crate::referral::{ApplyOutcome, ReferralStats};
use crate::server::error::ApiError;
use crate::server::query::QueryParams;
use crate::server::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

pub const USER_ID_REQUIRED: &str = "User ID is required";
pub const REFERRAL_CODE_REQUIRED: &str = "Referral code is required";
pub const INVALID_ACTION: &str = "Invalid action";
pub const INVALID_BODY: &str = "Invalid request body";
pub const STATS_FAILED: &str = "Failed to get referral stats";
pub const ACTION_FAILED: &str = "Failed to process referral action";

/// POST body as sent by clients, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRequest {
    pub action: Option<String>,
    pub user_id: Option<String>,
    pub referral_code: Option<String>,
}

/// A validated POST request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferralAction {
    Generate { user_id: String },
    Apply { user_id: String, referral_code: String },
}

/// Blank strings count as missing.
fn present<S: Into<String>>(value: Option<S>) -> Option<String> {
    value.map(Into::into).filter(|v: &String| !v.trim().is_empty())
}

impl TryFrom<ReferralRequest> for ReferralAction {
    type Error = ApiError;

    fn try_from(request: ReferralRequest) -> Result<Self, Self::Error> {
        let user_id = present(request.user_id).ok_or_else(|| ApiError::bad_request(USER_ID_REQUIRED))?;

        match request.action.as_deref() {
            Some("generate") => Ok(ReferralAction::Generate { user_id }),
            Some("apply") => {
                let referral_code = present(request.referral_code)
                    .ok_or_else(|| ApiError::bad_request(REFERRAL_CODE_REQUIRED))?;
                Ok(ReferralAction::Apply {
                    user_id,
                    referral_code,
                })
            }
            _ => Err(ApiError::bad_request(INVALID_ACTION)),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ReferralResponse {
    #[serde(rename_all = "camelCase")]
    Generated { referral_code: String },
    Applied { success: bool },
}

/// GET `/api/referral?userId=…`
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    query: QueryParams,
) -> Result<Json<ReferralStats>, ApiError> {
    let user_id = present(query.get("userId")).ok_or_else(|| ApiError::bad_request(USER_ID_REQUIRED))?;

    match state.store.get_referral_stats(&user_id).await {
        Ok(stats) => Ok(Json(stats)),
        Err(e) => {
            error!(user_id = %user_id, "Failed to get referral stats: {}", e);
            Err(ApiError::internal(&e, STATS_FAILED))
        }
    }
}

/// POST `/api/referral` with `{action, userId, referralCode?}`
pub async fn post_action(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ReferralResponse>, ApiError> {
    let request: ReferralRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::bad_request(INVALID_BODY))?;
    let action = ReferralAction::try_from(request)?;

    match action {
        ReferralAction::Generate { user_id } => {
            let referral_code = state
                .store
                .assign_referral_code(&user_id)
                .await
                .map_err(|e| {
                    error!(user_id = %user_id, "Failed to generate referral code: {}", e);
                    ApiError::internal(&e, ACTION_FAILED)
                })?;
            Ok(Json(ReferralResponse::Generated { referral_code }))
        }
        ReferralAction::Apply {
            user_id,
            referral_code,
        } => {
            let outcome = state
                .store
                .apply_referral_code(&user_id, &referral_code)
                .await
                .map_err(|e| {
                    error!(user_id = %user_id, "Failed to apply referral code: {}", e);
                    ApiError::internal(&e, ACTION_FAILED)
                })?;
            match outcome {
                ApplyOutcome::Applied => Ok(Json(ReferralResponse::Applied { success: true })),
                ApplyOutcome::Rejected(reason) => Err(ApiError::bad_request(reason.to_string())),
            }
        }
    }
}
