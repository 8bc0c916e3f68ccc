//! Lenient URL splitting.
//!
//! Splits on generic URI syntax only: no validation, no IDNA, no IPv4
//! normalization. `999.999.999.999` and `päypal.com` stay as written so the
//! lexical heuristics can see them.

use std::sync::LazyLock;

use regex::Regex;

/// scheme ":" "//" authority path "?" query "#" fragment, all optional.
static URL_PARTS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(?s)(?:([A-Za-z][A-Za-z0-9+.\-]*):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$",
    )
    .ok()
});

/// Schemes whose last path segment may carry `;params`.
const PARAM_SCHEMES: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// Raw components of a URL string. Absent components are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub authority: String,
    /// Path without the `;params` of its last segment.
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

/// Split `url` into its components.
///
/// Leading control characters and spaces are dropped and embedded tab, CR
/// and LF characters removed first. An authority with unbalanced IPv6
/// brackets makes the whole URL unusable and yields empty parts. For
/// hierarchical schemes such as http, a `;` in the last path segment starts
/// `params`, which is kept out of `path`.
pub fn split_url(url: &str) -> UrlParts {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let Some(re) = URL_PARTS.as_ref() else {
        return UrlParts::default();
    };
    let Some(caps) = re.captures(&cleaned) else {
        return UrlParts::default();
    };
    let group = |i: usize| caps.get(i).map_or(String::new(), |m| m.as_str().to_string());

    let authority = group(2);
    if authority.contains('[') != authority.contains(']') {
        return UrlParts::default();
    }

    let scheme = group(1);
    let raw_path = group(3);
    let (path, params) = if PARAM_SCHEMES.contains(&scheme.to_lowercase().as_str()) {
        let (path, params) = split_params(&raw_path);
        (path.to_string(), params.to_string())
    } else {
        (raw_path, String::new())
    };

    UrlParts {
        scheme,
        authority,
        path,
        params,
        query: group(4),
        fragment: group(5),
    }
}

/// Split at the first `;` at or after the last `/`.
fn split_params(path: &str) -> (&str, &str) {
    let last_segment = path.rfind('/').unwrap_or(0);
    match path[last_segment..].find(';') {
        Some(offset) => {
            let at = last_segment + offset;
            (&path[..at], &path[at + 1..])
        }
        None => (path, ""),
    }
}

/// Hostname of an authority: userinfo and port removed, IPv6 brackets
/// stripped, lowercased.
pub fn hostname_of(authority: &str) -> String {
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let host = match host_port.split_once('[') {
        Some((_, bracketed)) => bracketed.split(']').next().unwrap_or_default(),
        None => host_port.split(':').next().unwrap_or_default(),
    };
    host.to_lowercase()
}

/// Lowercased hostname of a URL, empty when it has no authority.
pub fn host_of(url: &str) -> String {
    hostname_of(&split_url(url).authority)
}

/// Per-URL signals: lowercase host and scheme plus the raw path and query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSignals {
    pub host: String,
    pub scheme: String,
    pub path: String,
    pub query: String,
}

impl HostSignals {
    pub fn parse(url: &str) -> Self {
        let parts = split_url(url);
        Self {
            host: hostname_of(&parts.authority),
            scheme: parts.scheme.to_lowercase(),
            path: parts.path,
            query: parts.query,
        }
    }
}

/// `(host, scheme)`, both lowercase and empty when missing.
pub fn parse_host_and_scheme(url: &str) -> (String, String) {
    let signals = HostSignals::parse(url);
    (signals.host, signals.scheme)
}
