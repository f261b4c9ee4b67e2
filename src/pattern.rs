//! Lexical pattern layer.
//!
//! Regular-expression matchers for the grammar pieces used throughout the
//! crate: numeric identifiers, pre-release and build identifiers, full
//! version strings, and "partial" versions (the `X`, `X.Y`, `X.Y.Z`,
//! `x`/`X`/`*` wildcard forms used by ranges). Compiled once into
//! process-wide read-only statics, following the same "compile the
//! pattern once" idiom the teacher's regex helper crate uses, just
//! applied to `std::sync::LazyLock` instead of re-parsing a pattern on
//! every call.
//!
//! The maximum length of any input this crate will attempt to match.
pub const MAX_LENGTH: usize = 256;

use std::sync::LazyLock;

use regex::Regex;

fn build(source: String) -> Regex {
    Regex::new(&source).expect("semverix: internal pattern failed to compile")
}

const NUMERIC_IDENTIFIER: &str = r"0|[1-9]\d*";
const NUMERIC_IDENTIFIER_LOOSE: &str = r"[0-9]+";
const NON_NUMERIC_IDENTIFIER: &str = r"\d*[a-zA-Z-][a-zA-Z0-9-]*";
const BUILD_IDENTIFIER: &str = r"[0-9A-Za-z-]+";

fn prerelease_identifier(loose: bool) -> String {
    let numeric = if loose {
        NUMERIC_IDENTIFIER_LOOSE
    } else {
        NUMERIC_IDENTIFIER
    };
    format!("(?:{numeric}|{NON_NUMERIC_IDENTIFIER})")
}

fn prerelease(loose: bool) -> String {
    let ident = prerelease_identifier(loose);
    format!(r"(?:-({ident}(?:\.{ident})*))")
}

fn build_metadata() -> String {
    format!(r"(?:\+({BUILD_IDENTIFIER}(?:\.{BUILD_IDENTIFIER})*))")
}

fn main_version(loose: bool) -> String {
    let numeric = if loose {
        NUMERIC_IDENTIFIER_LOOSE
    } else {
        NUMERIC_IDENTIFIER
    };
    format!(r"({numeric})\.({numeric})\.({numeric})")
}

/// A full, anchored `major.minor.patch(-pre)?(+build)?` pattern.
fn full_version_source(loose: bool) -> String {
    let leading = if loose { r"^[v=\s]*" } else { "^" };
    format!(
        r"{leading}{main}{pre}?{build}?$",
        main = main_version(loose),
        pre = prerelease(loose),
        build = build_metadata()
    )
}

/// One `X`, `X.Y`, or `X.Y.Z[-pre][+build]` partial, where each numeric
/// slot may also be a wildcard (`x`, `X`, or `*`).
fn partial_version_source(loose: bool) -> String {
    let numeric = if loose {
        NUMERIC_IDENTIFIER_LOOSE
    } else {
        NUMERIC_IDENTIFIER
    };
    let xr = format!(r"(?:{numeric}|[xX*])");
    let leading = if loose { r"^[v=\s]*" } else { "^" };
    format!(
        r"{leading}({xr})(?:\.({xr})(?:\.({xr}){pre}?{build}?)?)?$",
        xr = xr,
        pre = prerelease(loose),
        build = build_metadata()
    )
}

pub(crate) static VERSION_STRICT: LazyLock<Regex> =
    LazyLock::new(|| build(full_version_source(false)));
pub(crate) static VERSION_LOOSE: LazyLock<Regex> =
    LazyLock::new(|| build(full_version_source(true)));

pub(crate) static PARTIAL_STRICT: LazyLock<Regex> =
    LazyLock::new(|| build(partial_version_source(false)));
pub(crate) static PARTIAL_LOOSE: LazyLock<Regex> =
    LazyLock::new(|| build(partial_version_source(true)));

/// Matches a comparator operator at the start of a string: `<=`, `>=`,
/// `<`, `>`, or `=`. Longest-match-first so `<=` isn't split into `<`
/// followed by a dangling `=`.
pub(crate) static COMPARATOR_OP: LazyLock<Regex> =
    LazyLock::new(|| build(r"^(<=|>=|<|>|=)".to_string()));

/// Matches a hyphen-range alternative: two partials joined by ` - `.
fn hyphen_source(loose: bool) -> String {
    let p = if loose {
        r"[vV]?[0-9xX*][0-9a-zA-Z-.+]*"
    } else {
        r"[0-9xX*][0-9a-zA-Z-.+]*"
    };
    format!(r"^\s*({p})\s+-\s+({p})\s*$")
}

pub(crate) static HYPHEN_STRICT: LazyLock<Regex> = LazyLock::new(|| build(hyphen_source(false)));
pub(crate) static HYPHEN_LOOSE: LazyLock<Regex> = LazyLock::new(|| build(hyphen_source(true)));

pub(crate) fn hyphen_regex(loose: bool) -> &'static Regex {
    if loose {
        &HYPHEN_LOOSE
    } else {
        &HYPHEN_STRICT
    }
}

pub(crate) fn partial_regex(loose: bool) -> &'static Regex {
    if loose {
        &PARTIAL_LOOSE
    } else {
        &PARTIAL_STRICT
    }
}

pub(crate) fn version_regex(loose: bool) -> &'static Regex {
    if loose {
        &VERSION_LOOSE
    } else {
        &VERSION_STRICT
    }
}

/// Matches the first version-like substring in arbitrary text, for
/// `ops::coerce`: up to three dot-separated runs of digits, each capped at
/// 16 digits (the upstream coercion rule that a numeral longer than that
/// cannot be a real version component).
pub(crate) static COERCE: LazyLock<Regex> =
    LazyLock::new(|| build(r"(\d{1,16})(?:\.(\d{1,16}))?(?:\.(\d{1,16}))?".to_string()));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_strict_full_versions() {
        assert!(version_regex(false).is_match("1.2.3"));
        assert!(version_regex(false).is_match("1.2.3-alpha.1"));
        assert!(version_regex(false).is_match("1.2.3-alpha.1+build.5"));
        assert!(!version_regex(false).is_match("01.2.3"));
        assert!(!version_regex(false).is_match("v1.2.3"));
    }

    #[test]
    fn loose_allows_leading_v_and_zeros() {
        assert!(version_regex(true).is_match("v1.2.3"));
        assert!(version_regex(true).is_match("01.002.3"));
    }

    #[test]
    fn matches_partial_versions() {
        assert!(partial_regex(false).is_match("1"));
        assert!(partial_regex(false).is_match("1.2"));
        assert!(partial_regex(false).is_match("1.x"));
        assert!(partial_regex(false).is_match("*"));
        assert!(!partial_regex(false).is_match("1.2.3.4"));
    }

    #[test]
    fn comparator_op_matches_longest_first() {
        let caps = COMPARATOR_OP.captures("<=1.2.3").unwrap();
        assert_eq!(&caps[1], "<=");
    }
}
