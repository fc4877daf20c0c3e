/// MIME utilities
use crate::constants::{BASE64_LINE_LENGTH, DEFAULT_ATTACHMENT_CONTENT_TYPE};
use crate::error::MailerError;

/// Infers an attachment content type from its filename extension
pub fn detect_content_type(filename: &str) -> &'static str {
    let extension = match filename.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => return DEFAULT_ATTACHMENT_CONTENT_TYPE,
    };

    match extension.to_lowercase().as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "ics" => "text/calendar",
        "json" => "application/json",
        "xml" => "application/xml",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => DEFAULT_ATTACHMENT_CONTENT_TYPE,
    }
}

/// Checks a declared content type parses as a MIME type
///
/// Rejecting unparsable values also keeps CR/LF out of the part headers.
pub fn validate_content_type(content_type: &str) -> Result<::mime::Mime, MailerError> {
    content_type.parse::<::mime::Mime>().map_err(|e| {
        MailerError::Composition(format!("Invalid content type '{}': {}", content_type, e))
    })
}

/// Reflows a base64 payload into fixed-width lines
///
/// A newline follows every complete run of 76 characters, so a payload whose
/// length is an exact multiple of 76 ends with a newline while a trailing
/// partial line is left unterminated.
pub fn wrap_base64(data: &str) -> String {
    let mut wrapped = String::with_capacity(data.len() + data.len() / BASE64_LINE_LENGTH + 1);
    let mut line_len = 0;

    for ch in data.chars() {
        wrapped.push(ch);
        line_len += 1;
        if line_len == BASE64_LINE_LENGTH {
            wrapped.push('\n');
            line_len = 0;
        }
    }

    wrapped
}
