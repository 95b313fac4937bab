use crate::contact::models::Submission;
use crate::mailer::MailMessage;

/// Builds the notification email for one submission. Optional fields that
/// were left empty are omitted from the body entirely.
pub fn compose(submission: &Submission) -> MailMessage {
    let subject = format!(
        "[Demo Request] {} - {}",
        submission.school_name, submission.city
    );

    let mut body = format!(
        "New demo request from the website.\n\n\
         School: {}\n\
         City: {}\n\
         Contact: {}\n\
         Phone: {}\n",
        submission.school_name, submission.city, submission.contact_name, submission.phone
    );

    if !submission.email.is_empty() {
        body.push_str(&format!("Email: {}\n", submission.email));
    }
    if !submission.preferred_date.is_empty() {
        body.push_str(&format!("Preferred date: {}\n", submission.preferred_date));
    }
    if !submission.message.is_empty() {
        body.push_str(&format!("\nMessage:\n{}\n", submission.message));
    }

    let reply_to = if submission.email.is_empty() {
        None
    } else {
        Some(submission.email.clone())
    };

    MailMessage {
        subject,
        body,
        reply_to,
    }
}
