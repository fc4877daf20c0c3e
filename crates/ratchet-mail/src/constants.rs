/// Application constants
///
/// Wire-level values for raw message assembly plus the environment variable
/// names read by the configuration provider.
// ============================================================================
// MIME Assembly
// ============================================================================
/// Multipart boundary token used for every assembled message
pub const MIME_BOUNDARY: &str = "NextPart";

/// MIME version header value
pub const MIME_VERSION: &str = "1.0";

/// Line width for base64 attachment payloads (RFC 2045)
pub const BASE64_LINE_LENGTH: usize = 76;

/// Content type used when a filename carries no recognised extension
pub const DEFAULT_ATTACHMENT_CONTENT_TYPE: &str = "application/octet-stream";

// ============================================================================
// SES Limits
// ============================================================================

/// Maximum raw message size accepted by SES SendRawEmail (10 MB)
pub const SES_MAX_RAW_MESSAGE_SIZE_BYTES: usize = 10 * 1024 * 1024;

// ============================================================================
// Environment Variables
// ============================================================================

/// Fallback sender address
pub const ENV_DEFAULT_SENDER: &str = "MAILER_DEFAULT_SENDER";

/// Comma separated list of addresses silently copied on every send
pub const ENV_AUTO_BCC: &str = "MAILER_AUTO_BCC";
