mod cta;
mod features;
mod footer;
mod header;
mod hero;

pub use cta::Cta1;
pub use features::Features1;
pub use footer::Footer1;
pub use header::Header1;
pub use hero::Hero1;

use crate::registry::BlockDefinition;
use lander_model::PropMap;

/// The starter catalog, in palette order
pub fn definitions() -> Vec<BlockDefinition> {
    vec![
        Header1::definition(),
        Hero1::definition(),
        Features1::definition(),
        Cta1::definition(),
        Footer1::definition(),
    ]
}

/// Read a prop as display text, falling back when it is missing
fn text(props: &PropMap, key: &str, fallback: &str) -> String {
    props
        .get(key)
        .map(|v| v.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

fn flag(props: &PropMap, key: &str, fallback: bool) -> bool {
    props.get(key).and_then(|v| v.as_bool()).unwrap_or(fallback)
}

/// Read a prop as a link target. Only http(s), relative and fragment
/// URLs pass; anything else becomes `fallback`.
fn url(props: &PropMap, key: &str, fallback: &str) -> String {
    let raw = text(props, key, fallback);
    if is_safe_url(&raw) {
        raw
    } else {
        tracing::debug!(key, url = %raw, "Dropping URL with a disallowed scheme");
        fallback.to_string()
    }
}

fn is_safe_url(raw: &str) -> bool {
    // Browsers ignore whitespace and control characters inside a scheme
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect();

    let scheme_end = cleaned.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if cleaned[i..].starts_with(':') => {
            let scheme = cleaned[..i].to_ascii_lowercase();
            scheme == "http" || scheme == "https"
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_schemes() {
        for ok in ["#", "#signup", "/offer", "offer.html", "?ref=ad", "https://acme.test/x", "HTTP://acme.test", ""] {
            assert!(is_safe_url(ok), "{ok} should pass");
        }
        for bad in ["javascript:alert(1)", " JavaScript:alert(1)", "java\tscript:alert(1)", "data:text/html,x", "vbscript:x"] {
            assert!(!is_safe_url(bad), "{bad:?} should be dropped");
        }
    }
}
