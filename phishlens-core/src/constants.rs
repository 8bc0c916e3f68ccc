//! Shared constants for the phishlens classifier.
//!
//! The heuristic tables below are fixed at compile time. They are not
//! exposed through configuration.

/// phishlens version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Well-known brand and service names used to detect impersonation.
pub const BRAND_KEYWORDS: &[&str] = &[
    "paypal",
    "apple",
    "amazon",
    "bank",
    "chase",
    "facebook",
    "meta",
    "google",
    "microsoft",
    "outlook",
    "office365",
    "instagram",
    "line",
    "kbank",
    "scb",
    "krungsri",
    "kplus",
];

/// Top-level domains looked for inside URL paths (`.com`, `.ru`, ...).
pub const COMMON_TLDS: &[&str] = &[
    "com", "net", "org", "info", "biz", "co", "io", "ai", "app", "edu", "gov", "mil", "ru", "de",
    "uk", "cn", "fr", "jp", "br", "in", "it", "es", "au", "nl", "se", "no",
];

/// Anchor hrefs treated as placeholders rather than real links.
pub const VOID_LINK_TARGETS: &[&str] = &[
    "",
    "#",
    "javascript:void(0)",
    "javascript:;",
    "void(0)",
    "javascript:void(0);",
];

/// Form actions treated as placeholders rather than real endpoints.
pub const VOID_FORM_ACTIONS: &[&str] = &["", "#", "javascript:void(0)", "javascript:;"];

// ---- Feature thresholds ----

/// `hasRurl` fires when the external resource ratio is strictly above this.
pub const EXTERNAL_RESOURCE_RATIO_THRESHOLD: f64 = 0.5;

/// `hasLIdAnchor` fires when the elsewhere ratio is at least this.
pub const ANCHOR_ELSEWHERE_RATIO_THRESHOLD: f64 = 0.6;

/// Minimum number of anchors with a host before `hasLIdAnchor` can fire.
pub const MIN_HOSTED_ANCHORS: usize = 3;

// ---- Rule thresholds ----

/// Dot count at which a hostname is considered abnormally dotted.
pub const DOTS_THRESHOLD: u32 = 6;

/// Subdomain count at which a hostname is considered abnormally nested.
pub const SUBDOMAIN_THRESHOLD: u32 = 4;

/// Minimum fallback score for a Phishing label.
pub const FALLBACK_MIN_SCORE: u32 = 2;

// ---- Analysis defaults ----

/// Default output format.
pub const DEFAULT_OUTPUT_FORMAT: &str = "console";

/// Output formats understood by the reporters.
pub const OUTPUT_FORMATS: &[&str] = &["console", "json"];
