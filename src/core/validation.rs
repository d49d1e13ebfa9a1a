//! Input validation.
//!
//! Site names are written verbatim before the first `:` of a credential
//! line and read back trimmed, so anything that would not survive that
//! round trip is rejected up front.

use crate::core::constants::{COMMENT_PREFIX, SEPARATOR};
use crate::error::{Result, ValidationError};

/// Validate a site identifier.
///
/// A site must:
/// - be non-empty
/// - not contain `:` or a line break
/// - not begin or end with whitespace
/// - not begin with `#`
///
/// # Errors
///
/// Returns `ValidationError` describing the first rule that fails.
pub fn validate_site(site: &str) -> Result<()> {
    if site.is_empty() {
        return Err(ValidationError::EmptySite.into());
    }

    let invalid = |reason| ValidationError::InvalidSite {
        site: site.to_string(),
        reason,
    };

    if site.contains(SEPARATOR) {
        return Err(invalid("cannot contain ':'").into());
    }
    if site.contains(['\n', '\r']) {
        return Err(invalid("cannot contain line breaks").into());
    }
    if site.trim() != site {
        return Err(invalid("cannot begin or end with whitespace").into());
    }
    if site.starts_with(COMMENT_PREFIX) {
        return Err(invalid("cannot begin with '#'").into());
    }

    Ok(())
}
