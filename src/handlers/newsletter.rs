//! Newsletter subscribe and unsubscribe by email.

use crate::error::{AppError, ResultExt};
use crate::extractors::ApiJson;
use crate::model::{
    EmailBody, NewNewsletterSubscription, NewsletterSubscription, Resource, SubscriptionStatus,
};
use crate::response::{self, Reply};
use crate::service::{CrudService, RequestValidator};
use crate::sql::{Fields, ToParam};
use crate::state::AppState;
use axum::extract::State;

/// Creates a subscription (201), or reactivates the existing one for the same email (200).
pub async fn subscribe(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewNewsletterSubscription>,
) -> Result<Reply<NewsletterSubscription>, AppError> {
    RequestValidator::require(&input.email, NewNewsletterSubscription::EMAIL_REQUIRED)?;
    let (row, inserted) = CrudService::upsert::<NewsletterSubscription>(
        &state.pool,
        &input,
        "email",
        input.reactivation(),
    )
    .await
    .or_fault("Failed to subscribe to newsletter")?;
    if inserted {
        return Ok(response::created(row, "Subscribed successfully"));
    }
    tracing::debug!(email = %row.email, "newsletter subscription reactivated");
    Ok(response::ok_with_message(row, "Subscription reactivated successfully"))
}

pub async fn unsubscribe(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<EmailBody>,
) -> Result<Reply<NewsletterSubscription>, AppError> {
    RequestValidator::require(&body.email, NewNewsletterSubscription::EMAIL_REQUIRED)?;
    let changes = Fields::new()
        .value("status", &SubscriptionStatus::Unsubscribed)
        .into_assignments();
    let key = ("email", body.email.to_param());
    let row = CrudService::update_by::<NewsletterSubscription>(&state.pool, key, changes)
        .await
        .or_fault("Failed to unsubscribe from newsletter")?
        .ok_or_else(|| AppError::NotFound(NewsletterSubscription::NOUN.not_found()))?;
    Ok(response::ok_with_message(row, "Unsubscribed successfully"))
}
