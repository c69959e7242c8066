//! Advisory lint checks for declaration values
//!
//! Linters run just before a declaration is emitted. They only warn
//! (through `tracing`); generated CSS is never altered and a linter can
//! never fail the parse.

use lacquer_theme::TokenValue;

/// Where in the tree the declaration sits.
#[derive(Clone, Copy, Debug)]
pub struct LintContext<'a> {
    pub path: Option<&'a str>,
    pub hash_id: Option<&'a str>,
    pub parent_selectors: &'a [String],
}

/// A declaration-level check.
pub trait Linter {
    fn lint(&self, key: &str, value: &TokenValue, ctx: &LintContext<'_>);
}

/// Warns when a `content` value is neither quoted nor a keyword; an
/// unquoted string silently produces no content in the browser.
pub struct ContentQuotesLinter;

impl Linter for ContentQuotesLinter {
    fn lint(&self, key: &str, value: &TokenValue, ctx: &LintContext<'_>) {
        if key != "content" {
            return;
        }
        let Some(text) = value.as_str() else { return };
        let trimmed = text.trim();
        let quoted = trimmed.len() >= 2
            && (trimmed.starts_with('"') || trimmed.starts_with('\''))
            && trimmed.ends_with(trimmed.chars().next().unwrap_or('"'));
        if !quoted && trimmed != "none" && trimmed != "normal" {
            tracing::warn!(
                value = text,
                selectors = ?ctx.parent_selectors,
                "content value should be quoted"
            );
        }
    }
}

/// Warns when a raw `animationName` string does not carry the configured
/// hash id; un-hashed names leak across component scopes.
pub struct HashedAnimationLinter;

impl Linter for HashedAnimationLinter {
    fn lint(&self, key: &str, value: &TokenValue, ctx: &LintContext<'_>) {
        if key != "animationName" {
            return;
        }
        let (Some(text), Some(hash)) = (value.as_str(), ctx.hash_id) else {
            return;
        };
        if !hash.is_empty() && !text.contains(hash) {
            tracing::warn!(
                value = text,
                hash = hash,
                "animationName should be hashed with the configured hash id"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(hash: Option<&'a str>) -> LintContext<'a> {
        LintContext {
            path: None,
            hash_id: hash,
            parent_selectors: &[],
        }
    }

    // the linters only warn; these assert they never panic on edge inputs
    #[test]
    fn content_linter_accepts_keywords_and_quotes() {
        let linter = ContentQuotesLinter;
        for value in ["none", "normal", "\"quoted\"", "'quoted'", "bare"] {
            linter.lint("content", &TokenValue::Str(value.into()), &ctx(None));
        }
        linter.lint("content", &TokenValue::Num(0.0), &ctx(None));
        linter.lint("width", &TokenValue::Str("bare".into()), &ctx(None));
    }

    #[test]
    fn animation_linter_tolerates_missing_hash() {
        let linter = HashedAnimationLinter;
        linter.lint("animationName", &TokenValue::Str("fade".into()), &ctx(None));
        linter.lint("animationName", &TokenValue::Str("fade".into()), &ctx(Some("h1")));
        linter.lint("animationName", &TokenValue::Str("h1-fade".into()), &ctx(Some("h1")));
    }
}
