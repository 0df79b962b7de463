//! Input validation and sanitization functions for GlassTube
//!
//! Every form in the app funnels its text through here before it reaches the
//! catalog, directory or comment threads.

/// Maximum length for titles, names and other single-line fields
pub const MAX_LINE_LEN: usize = 120;

/// Maximum length for descriptions and comment bodies
pub const MAX_BODY_LEN: usize = 5000;

/// Trims and strips control characters from a single-line field.
///
/// Truncates to [`MAX_LINE_LEN`] characters.
///
/// # Examples
///
/// ```
/// use glasstube::validators::sanitize_line;
///
/// assert_eq!(sanitize_line("  My Video\t"), "My Video");
/// assert_eq!(sanitize_line("bad\nnews"), "badnews");
/// ```
pub fn sanitize_line(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_LINE_LEN)
        .collect()
}

/// Trims a multi-line field, keeping newlines but dropping other control
/// characters. Truncates to [`MAX_BODY_LEN`] characters.
pub fn sanitize_body(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .take(MAX_BODY_LEN)
        .collect()
}

/// Requires a non-blank value.
///
/// # Errors
///
/// Returns `Err` with the field name when the trimmed value is empty.
pub fn require(field: &'static str, value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err(field)
    } else {
        Ok(())
    }
}

/// Loose email shape check: one `@`, non-empty local part, dotted domain.
///
/// # Errors
///
/// Returns `Err` describing the first problem found.
pub fn validate_email(input: &str) -> Result<String, String> {
    let email = input.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if email.chars().any(char::is_whitespace) {
        return Err("Email cannot contain spaces".to_string());
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err("Email must contain @".to_string());
    };
    if local.is_empty() || domain.contains('@') {
        return Err("Email must have exactly one @ with a name before it".to_string());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err("Email domain looks incomplete".to_string());
    }

    Ok(email.to_lowercase())
}

/// Validates an optional thumbnail URL.
///
/// Blank input is allowed and returns `Ok(None)`.
///
/// # Errors
///
/// Returns `Err` unless the URL uses http or https and has a host.
pub fn validate_thumbnail_url(input: &str) -> Result<Option<String>, String> {
    let url = input.trim();
    if url.is_empty() {
        return Ok(None);
    }

    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| "Thumbnail URL must start with http:// or https://".to_string())?;

    if rest.is_empty() || rest.starts_with('/') || url.chars().any(char::is_whitespace) {
        return Err("Thumbnail URL is missing a host".to_string());
    }

    Ok(Some(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_line() {
        assert_eq!(sanitize_line("  hello  "), "hello");
        assert_eq!(sanitize_line("a\u{0007}b"), "ab");
        assert_eq!(sanitize_line(&"x".repeat(500)).len(), MAX_LINE_LEN);
    }

    #[test]
    fn test_sanitize_body_keeps_newlines() {
        assert_eq!(sanitize_body(" line one\nline two\r "), "line one\nline two");
    }

    #[test]
    fn test_require() {
        assert_eq!(require("title", "   "), Err("title"));
        assert!(require("title", "ok").is_ok());
    }

    #[test]
    fn test_validate_email() {
        assert_eq!(
            validate_email(" Admin@Glassy.Tube ").unwrap(),
            "admin@glassy.tube"
        );
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@glassy.tube").is_err());
        assert!(validate_email("a@b@c.d").is_err());
        assert!(validate_email("a@localhost").is_err());
        assert!(validate_email("a b@c.d").is_err());
    }

    #[test]
    fn test_validate_thumbnail_url() {
        assert_eq!(validate_thumbnail_url("  ").unwrap(), None);
        assert_eq!(
            validate_thumbnail_url("https://img.example/x.jpg").unwrap(),
            Some("https://img.example/x.jpg".to_string())
        );
        assert!(validate_thumbnail_url("ftp://img.example/x.jpg").is_err());
        assert!(validate_thumbnail_url("https://").is_err());
        assert!(validate_thumbnail_url("http:///path").is_err());
    }
}
