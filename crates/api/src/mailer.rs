//! Logging-only stand-in for outbound email.
//!
//! Neither notification email is actually dispatched yet; the composed
//! message is logged so operators can see what would have been sent.
//! Wiring a real SMTP/API transport here is the concrete follow-up.

use mads_core::forms::{ApplicationForm, ContactForm};

/// Compose the internal notification for a contact form submission.
pub fn contact_email_body(form: &ContactForm) -> String {
    format!(
        "New Contact Form Submission\n\n\
         From: {} {}\n\
         Email: {}\n\
         Phone: {}\n\n\
         Message:\n{}\n\n\
         Submitted at: {}",
        form.first_name,
        form.last_name,
        form.email,
        form.phone,
        form.message,
        chrono::Utc::now().to_rfc3339(),
    )
}

/// Compose the internal notification for a job application.
pub fn application_email_body(form: &ApplicationForm) -> String {
    let cover_letter = form
        .cover_letter_url
        .as_deref()
        .unwrap_or("Not provided");
    format!(
        "New Job Application Received\n\n\
         Position: {}\n\
         Position ID: {}\n\n\
         Applicant Details:\n\
         Name: {}\n\
         Email: {}\n\n\
         Documents:\n\
         Resume: {}\n\
         Cover Letter: {}\n\n\
         Application submitted at: {}",
        form.position_title,
        form.position_id,
        form.applicant_name,
        form.applicant_email,
        form.resume_url,
        cover_letter,
        chrono::Utc::now().to_rfc3339(),
    )
}

/// "Send" the contact notification: log the composed body.
pub fn send_contact_email(form: &ContactForm) {
    tracing::info!(
        email = %form.email,
        body = %contact_email_body(form),
        "contact notification email (logged, not dispatched)"
    );
}

/// "Send" the application notification: log the composed body.
pub fn send_application_email(form: &ApplicationForm) {
    tracing::info!(
        applicant = %form.applicant_email,
        position_id = form.position_id,
        body = %application_email_body(form),
        "application notification email (logged, not dispatched)"
    );
}
