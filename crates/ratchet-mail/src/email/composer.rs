/// Raw MIME message assembly
///
/// Builds the `multipart/mixed` payload handed to the raw-send transport by
/// direct string assembly. No I/O happens here, so the exact byte layout can
/// be checked without any transport in the loop.
use crate::constants::{MIME_BOUNDARY, MIME_VERSION, SES_MAX_RAW_MESSAGE_SIZE_BYTES};
use crate::email::mime::{validate_content_type, wrap_base64};
use crate::error::MailerError;
use crate::models::{EmailAttachment, ReadyToSendEmail};
use crate::utils::validation::contains_line_break;

/// Assembles the raw message for `email`
///
/// `from` is the already-resolved sender; `None` yields a blank `From:`
/// header, which is left for the transport to accept or reject. `auto_bcc`
/// becomes a `Bcc:` header and is never merged into `To:`.
///
/// The closing delimiter is written as `--NextPart` without the trailing
/// `--`, matching what the SES raw-send endpoint has always accepted from
/// this assembler.
///
/// Header values (sender, recipients, subject, attachment filenames) must
/// not contain CR or LF, and filenames must not contain `"`.
pub fn assemble_raw_message(
    email: &ReadyToSendEmail,
    from: Option<&str>,
    auto_bcc: &[String],
) -> Result<String, MailerError> {
    if email.destination_addresses.is_empty() {
        return Err(MailerError::Composition(
            "At least one destination address required".to_string(),
        ));
    }

    check_header_value("From", from.unwrap_or_default())?;
    for address in email.destination_addresses.iter().chain(auto_bcc) {
        check_header_value("Recipient", address)?;
    }
    check_header_value("Subject", &email.subject)?;

    let mut raw = String::new();

    // Headers, in this exact order
    push_header(&mut raw, "From", from.unwrap_or_default());
    push_header(&mut raw, "To", &email.destination_addresses.join(", "));
    if !auto_bcc.is_empty() {
        push_header(&mut raw, "Bcc", &auto_bcc.join(", "));
    }
    push_header(&mut raw, "Subject", &email.subject);
    push_header(&mut raw, "MIME-Version", MIME_VERSION);
    push_header(
        &mut raw,
        "Content-Type",
        &format!("multipart/mixed; boundary=\"{}\"", MIME_BOUNDARY),
    );

    // HTML always precedes plain text
    if let Some(html) = email.html_message.as_deref().filter(|s| !s.is_empty()) {
        push_body_part(&mut raw, "text/html", html);
    }
    if let Some(txt) = email.txt_message.as_deref().filter(|s| !s.is_empty()) {
        push_body_part(&mut raw, "text/plain", txt);
    }

    for attachment in &email.attachments {
        push_attachment(&mut raw, attachment)?;
    }

    push_delimiter(&mut raw);

    if raw.len() > SES_MAX_RAW_MESSAGE_SIZE_BYTES {
        return Err(MailerError::Composition(format!(
            "Raw message size {} bytes exceeds SES limit of {} bytes",
            raw.len(),
            SES_MAX_RAW_MESSAGE_SIZE_BYTES
        )));
    }

    tracing::debug!(
        size = raw.len(),
        attachment_count = email.attachments.len(),
        "Assembled raw message"
    );

    Ok(raw)
}

fn check_header_value(field: &str, value: &str) -> Result<(), MailerError> {
    if contains_line_break(value) {
        return Err(MailerError::Composition(format!(
            "{} must not contain line breaks",
            field
        )));
    }
    Ok(())
}

fn push_header(raw: &mut String, name: &str, value: &str) {
    raw.push_str(name);
    raw.push_str(": ");
    raw.push_str(value);
    raw.push('\n');
}

fn push_delimiter(raw: &mut String) {
    raw.push_str("\n\n--");
    raw.push_str(MIME_BOUNDARY);
    raw.push('\n');
}

fn push_body_part(raw: &mut String, content_type: &str, content: &str) {
    push_delimiter(raw);
    push_header(raw, "Content-Type", content_type);
    raw.push('\n');
    raw.push_str(content);
}

fn push_attachment(raw: &mut String, attachment: &EmailAttachment) -> Result<(), MailerError> {
    validate_content_type(attachment.content_type())?;
    check_header_value("Attachment filename", attachment.filename())?;
    if attachment.filename().contains('"') {
        return Err(MailerError::Composition(
            "Attachment filename must not contain '\"'".to_string(),
        ));
    }

    push_delimiter(raw);
    push_header(
        raw,
        "Content-Type",
        &format!(
            "{}; name=\"{}\"",
            attachment.content_type(),
            attachment.filename()
        ),
    );
    push_header(raw, "Content-Transfer-Encoding", "base64");
    push_header(raw, "Content-Disposition", "attachment");
    raw.push('\n');
    raw.push_str(&wrap_base64(attachment.base64_data()));
    raw.push_str("\n\n");

    Ok(())
}
