//! Validation of redirect targets.

use url::Url;

/// Reasons a redirect target is rejected.
#[derive(Debug, thiserror::Error)]
pub enum RedirectUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP, HTTPS and FTP protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a host")]
    MissingHost,

    #[error("URL host must contain a top-level domain")]
    MissingTld,
}

/// Checks that `input` is a well-formed absolute URL suitable as a redirect target.
///
/// # Rules
///
/// 1. No whitespace or control characters anywhere, including the ends
/// 2. Must parse as an absolute URL
/// 3. Scheme must be `http`, `https` or `ftp` (rejects `javascript:`, `data:`, `file:`)
/// 4. Must have a host
/// 5. Domain hosts must contain a dot (`localhost` is rejected); IP literals are accepted
///
/// The input is stored verbatim and later sent as a `Location` header, so
/// anything the URL parser would silently strip is refused instead.
pub fn validate_redirect_url(input: &str) -> Result<(), RedirectUrlError> {
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(RedirectUrlError::InvalidFormat(
            "URL must not contain whitespace or control characters".to_string(),
        ));
    }

    let url = Url::parse(input)
        .map_err(|e| RedirectUrlError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https" | "ftp") {
        return Err(RedirectUrlError::UnsupportedProtocol);
    }

    match url.host() {
        None => Err(RedirectUrlError::MissingHost),
        Some(url::Host::Domain(domain)) => {
            let domain = domain.trim_end_matches('.');
            match domain.rsplit_once('.') {
                Some((name, tld)) if !name.is_empty() && !tld.is_empty() => Ok(()),
                _ => Err(RedirectUrlError::MissingTld),
            }
        }
        Some(_) => Ok(()),
    }
}
