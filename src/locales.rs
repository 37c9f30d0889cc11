//! Locale resolution.
//!
//! The translation catalogues themselves live outside this service; all the
//! front-end needs is the list of languages the catalogues cover and a way to
//! pick one for the current request. Resolution order: a supported language
//! stored in the session wins, then the best `Accept-Language` match, then
//! the default.

pub const DEFAULT_LOCALE: &str = "en";

/// Languages with a translation catalogue, by BCP 47 tag.
pub const LANGUAGES: &[&str] = &[
    "en", "de", "es", "fr", "it", "ja", "ko", "pt", "ru", "zh-CN",
];

pub fn get_languages() -> Vec<&'static str> {
    LANGUAGES.to_vec()
}

/// Resolve the locale for one request.
pub fn resolve(session_language: Option<&str>, accept_language: Option<&str>) -> String {
    if let Some(lang) = session_language.and_then(supported) {
        return lang.to_string();
    }
    if let Some(lang) = accept_language.and_then(negotiate) {
        return lang.to_string();
    }
    DEFAULT_LOCALE.to_string()
}

/// Pick the best supported language from an `Accept-Language` header value,
/// honouring q-values in descending order.
fn negotiate(header: &str) -> Option<&'static str> {
    let mut ranges: Vec<(&str, f32)> = header
        .split(',')
        .filter_map(|item| {
            let mut parts = item.trim().split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let q = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);
            Some((tag, q))
        })
        .collect();
    ranges.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    ranges.iter().find_map(|(tag, _)| supported(tag))
}

/// Match a language tag against the supported list: exact match first
/// (case-insensitive), then by primary subtag, so `zh` finds `zh-CN` and
/// `en-GB` finds `en`.
fn supported(tag: &str) -> Option<&'static str> {
    if tag == "*" {
        return Some(DEFAULT_LOCALE);
    }
    if let Some(exact) = LANGUAGES.iter().find(|l| l.eq_ignore_ascii_case(tag)).copied() {
        return Some(exact);
    }
    let primary = tag.split('-').next()?;
    LANGUAGES
        .iter()
        .find(|l| {
            l.split('-')
                .next()
                .is_some_and(|p| p.eq_ignore_ascii_case(primary))
        })
        .copied()
}
