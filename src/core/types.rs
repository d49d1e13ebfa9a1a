//! Type aliases for domain concepts.

/// A site identifier (e.g. `github.com`, `email`).
///
/// Must pass `validation::validate_site` before it is written.
pub type SiteId = String;

/// The base64 token stored after the separator on a credential line.
pub type CiphertextText = String;
