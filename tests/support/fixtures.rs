//! Test fixtures and constants.

/// Key file name used by the helpers.
pub const KEY_FILE: &str = "site.key";

/// Credential file name used by the helpers.
pub const STORE_FILE: &str = "sites.txt";

/// Standard entries used across multiple tests.
pub const STANDARD_ENTRIES: &[(&str, &str)] = &[
    ("email", "1234567"),
    ("YouTube", "youtubepassword"),
    ("TikTok", "tiktokpassword"),
    ("FaceBook", "facebookpassword"),
];

/// Secrets that exercise the line format.
pub const AWKWARD_SECRETS: &[(&str, &str)] = &[
    ("colon", "pa:ss:word"),
    ("hash", "# not a comment"),
    ("spaces", "  leading and trailing  "),
    ("unicode", "pässwörd 🔑"),
    ("empty", ""),
    ("equals", "a=b=c"),
];
