//! Handlers for the contact and job application form endpoints.
//!
//! Both validate before touching anything else, persist what the system
//! persists, and log the notification email instead of dispatching it.

use axum::extract::State;
use axum::Json;
use mads_core::forms::{ApplicationForm, ContactForm};
use mads_db::repositories::ContactRepo;

use crate::error::AppResult;
use crate::mailer;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/v1/contact
///
/// Validate and persist a contact form submission, then log the
/// notification email.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> AppResult<Json<MessageResponse>> {
    form.validate()?;

    let stored = ContactRepo::create(&state.pool, &form).await?;
    mailer::send_contact_email(&form);

    tracing::info!(
        contact_id = stored.id,
        email = %form.email,
        "contact form submission processed"
    );

    Ok(Json(MessageResponse::new(
        "Your message has been sent successfully. We'll get back to you soon!",
    )))
}

/// POST /api/v1/applications
///
/// Validate a job application and log the notification email. The
/// application itself is not persisted anywhere yet — the only durable
/// record is the uploaded documents in object storage. Persisting an
/// `applications` row is the outstanding follow-up tracked in DESIGN.md.
pub async fn submit_application(
    State(_state): State<AppState>,
    Json(form): Json<ApplicationForm>,
) -> AppResult<Json<MessageResponse>> {
    form.validate()?;

    mailer::send_application_email(&form);

    tracing::info!(
        position_id = form.position_id,
        applicant = %form.applicant_email,
        "job application processed"
    );

    Ok(Json(MessageResponse::new(
        "Your application has been submitted successfully. We'll review it and get back to you soon!",
    )))
}
