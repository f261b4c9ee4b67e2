//! The public operations surface: thin facades over [`crate::version`],
//! [`crate::comparator`], and [`crate::range`].
//!
//! Per the error policy these functions are built around, a predicate or
//! lookup that receives unparseable input answers `false`/`None` rather
//! than propagating a parse error — only the constructors in the lower
//! layers (`Version::parse`, `Range::parse`, `Version::inc`) surface
//! [`crate::error::Error`] to the caller.

use std::cmp::Ordering;

use crate::pattern;
use crate::range::{Range, Side};
use crate::version::{Options, ReleaseKind, Version, MAX_SAFE_INTEGER};

/// Parses a version string, discarding the error on failure.
pub fn parse(input: &str, options: Options) -> Option<Version> {
    Version::parse(input, options).ok()
}

/// −1/0/1 comparison of two version strings. `None` if either fails to
/// parse.
pub fn compare(a: &str, b: &str, options: Options) -> Option<Ordering> {
    Some(Version::parse(a, options).ok()?.compare(&Version::parse(b, options).ok()?))
}

pub fn eq(a: &str, b: &str, options: Options) -> bool {
    compare(a, b, options) == Some(Ordering::Equal)
}

pub fn neq(a: &str, b: &str, options: Options) -> bool {
    matches!(compare(a, b, options), Some(o) if o != Ordering::Equal)
}

pub fn gt(a: &str, b: &str, options: Options) -> bool {
    compare(a, b, options) == Some(Ordering::Greater)
}

pub fn gte(a: &str, b: &str, options: Options) -> bool {
    matches!(compare(a, b, options), Some(Ordering::Greater | Ordering::Equal))
}

pub fn lt(a: &str, b: &str, options: Options) -> bool {
    compare(a, b, options) == Some(Ordering::Less)
}

pub fn lte(a: &str, b: &str, options: Options) -> bool {
    matches!(compare(a, b, options), Some(Ordering::Less | Ordering::Equal))
}

/// The release kind that distinguishes `a` and `b`, or `None` if they
/// parse equal (or either fails to parse).
///
/// Mirrors the canonical `semver` package's `diff`: the result is
/// `pre`-prefixed whenever the *higher* of the two versions carries a
/// pre-release, with the one case — dropping a pre-release entirely —
/// needing special-casing because the low version's pre-release doesn't
/// tell you which field is about to change.
pub fn diff(a: &str, b: &str, options: Options) -> Option<ReleaseKind> {
    let va = Version::parse(a, options).ok()?;
    let vb = Version::parse(b, options).ok()?;
    let comparison = va.compare(&vb);
    if comparison == Ordering::Equal {
        return None;
    }

    let (high, low) = if comparison == Ordering::Greater { (&va, &vb) } else { (&vb, &va) };
    let high_has_pre = high.is_prerelease();
    let low_has_pre = low.is_prerelease();

    if low_has_pre && !high_has_pre {
        if low.minor == 0 && low.patch == 0 {
            return Some(ReleaseKind::Major);
        }
        if high.patch != 0 {
            return Some(ReleaseKind::Patch);
        }
        if high.minor != 0 {
            return Some(ReleaseKind::Minor);
        }
        return Some(ReleaseKind::Major);
    }

    if va.major != vb.major {
        return Some(if high_has_pre { ReleaseKind::PreMajor } else { ReleaseKind::Major });
    }
    if va.minor != vb.minor {
        return Some(if high_has_pre { ReleaseKind::PreMinor } else { ReleaseKind::Minor });
    }
    if va.patch != vb.patch {
        return Some(if high_has_pre { ReleaseKind::PrePatch } else { ReleaseKind::Patch });
    }
    Some(ReleaseKind::PreRelease)
}

/// Applies an increment and formats the result, discarding the error.
pub fn inc(
    version: &str,
    release: ReleaseKind,
    options: Options,
    identifier: Option<&str>,
    identifier_base: Option<bool>,
) -> Option<String> {
    Version::parse(version, options)
        .ok()?
        .inc(release, identifier, identifier_base)
        .ok()
        .map(|v| v.to_string())
}

/// Whether `version` satisfies `range`. `false` on any parse failure,
/// per the predicate error policy in the core design's error handling
/// section.
pub fn satisfies(version: &str, range: &str, options: Options) -> bool {
    let Ok(v) = Version::parse(version, options) else {
        return false;
    };
    let Ok(r) = Range::parse(range, options) else {
        return false;
    };
    r.test(&v)
}

/// The highest version in `versions` that satisfies `range`, or `None`
/// if none do (or `range` fails to parse). Returns the caller's original
/// string slice, not a reformatted one.
pub fn max_satisfying<'a>(versions: &[&'a str], range: &str, options: Options) -> Option<&'a str> {
    let r = Range::parse(range, options).ok()?;
    versions
        .iter()
        .filter_map(|s| Version::parse(s, options).ok().map(|v| (*s, v)))
        .filter(|(_, v)| r.test(v))
        .max_by(|(_, a), (_, b)| a.compare(b))
        .map(|(s, _)| s)
}

/// The lowest version in `versions` that satisfies `range`.
pub fn min_satisfying<'a>(versions: &[&'a str], range: &str, options: Options) -> Option<&'a str> {
    let r = Range::parse(range, options).ok()?;
    versions
        .iter()
        .filter_map(|s| Version::parse(s, options).ok().map(|v| (*s, v)))
        .filter(|(_, v)| r.test(v))
        .min_by(|(_, a), (_, b)| a.compare(b))
        .map(|(s, _)| s)
}

/// `version` is strictly greater than everything `range` admits.
pub fn gtr(version: &str, range: &str, options: Options) -> bool {
    let (Ok(v), Ok(r)) = (Version::parse(version, options), Range::parse(range, options)) else {
        return false;
    };
    r.outside(&v, Side::High)
}

/// `version` is strictly less than everything `range` admits.
pub fn ltr(version: &str, range: &str, options: Options) -> bool {
    let (Ok(v), Ok(r)) = (Version::parse(version, options), Range::parse(range, options)) else {
        return false;
    };
    r.outside(&v, Side::Low)
}

/// Whether some version satisfies both `a` and `b`. A bare comparator
/// (e.g. `>=1.2.3`) is valid range syntax — a single one-alternative
/// range — so this accepts either ranges or comparators, per the
/// operations table.
pub fn intersects(a: &str, b: &str, options: Options) -> bool {
    let (Ok(ra), Ok(rb)) = (Range::parse(a, options), Range::parse(b, options)) else {
        return false;
    };
    ra.intersects(&rb)
}

/// Whether every version satisfying `sub` also satisfies `sup`. `false`
/// on any parse failure, per §7's explicit carve-out for `subset`.
pub fn subset(sub: &str, sup: &str, options: Options) -> bool {
    let (Ok(sub_range), Ok(sup_range)) = (Range::parse(sub, options), Range::parse(sup, options)) else {
        return false;
    };
    sub_range.is_subset_of(&sup_range)
}

/// Extracts the first version-like substring from arbitrary text,
/// filling any missing minor/patch with `0`. Always parses under loose
/// rules internally, since coercion exists precisely to tolerate input
/// that isn't already a well-formed version.
pub fn coerce(input: &str, options: Options) -> Option<Version> {
    if input.len() > pattern::MAX_LENGTH {
        return None;
    }
    let caps = pattern::COERCE.captures(input)?;
    let field = |i: usize| -> Option<u64> {
        match caps.get(i) {
            None => Some(0),
            Some(m) => m.as_str().parse::<u64>().ok().filter(|n| *n <= MAX_SAFE_INTEGER),
        }
    };
    let major = field(1)?;
    let minor = field(2)?;
    let patch = field(3)?;
    Some(Version::from_parts(major, minor, patch, Vec::new(), Vec::new(), options))
}

/// Ascending sort of the subset of `versions` that parse, formatted
/// through [`Version::to_string`] (so build metadata and loose leading
/// `v`s are normalized away).
pub fn sort(versions: &[&str], options: Options) -> Vec<String> {
    let mut parsed = parse_all(versions, options);
    parsed.sort();
    parsed.into_iter().map(|v| v.to_string()).collect()
}

/// Descending sort, the mirror of [`sort`].
pub fn rsort(versions: &[&str], options: Options) -> Vec<String> {
    let mut parsed = parse_all(versions, options);
    parsed.sort_by(|a, b| b.compare(a));
    parsed.into_iter().map(|v| v.to_string()).collect()
}

fn parse_all(versions: &[&str], options: Options) -> Vec<Version> {
    versions.iter().filter_map(|s| Version::parse(s, options).ok()).collect()
}

/// One maximal contiguous run, within the sorted candidate list, of
/// versions that satisfy the range being simplified.
struct Run {
    min: Version,
    max: Option<Version>,
}

/// Finds a shorter range expression that selects the same subset of
/// `versions` as `range` does. Never produces a range that is *more*
/// permissive than the original outside of `versions`: it only
/// re-describes, over the given candidate list, which contiguous runs
/// satisfy it.
///
/// Mirrors the canonical `semver` package's `ranges/simplify`: walk the
/// sorted candidates, split them into maximal runs that do/don't satisfy
/// `range`, then describe each satisfying run with the shortest
/// comparator form available (a bare version, `>=min`, `<=max`, `*`, or a
/// hyphen range). Falls back to the original string if the rewritten
/// form isn't actually shorter.
pub fn simplify(versions: &[&str], range: &str, options: Options) -> Option<String> {
    let r = Range::parse(range, options).ok()?;
    let mut parsed = parse_all(versions, options);
    parsed.sort();

    let mut runs: Vec<Run> = Vec::new();
    let mut first: Option<Version> = None;
    let mut prev: Option<Version> = None;

    for version in &parsed {
        if r.test(version) {
            if first.is_none() {
                first = Some(version.clone());
            }
            prev = Some(version.clone());
        } else if let (Some(f), Some(p)) = (first.take(), prev.take()) {
            runs.push(Run { min: f, max: Some(p) });
        }
    }
    if let Some(f) = first {
        runs.push(Run { min: f, max: prev });
    }

    let lowest = parsed.first();
    let parts: Vec<String> = runs
        .iter()
        .map(|run| match &run.max {
            Some(max) if *max == run.min => run.min.to_string(),
            None if lowest == Some(&run.min) => "*".to_string(),
            None => format!(">={}", run.min),
            Some(max) if lowest == Some(&run.min) => format!("<={max}"),
            Some(max) => format!("{} - {max}", run.min),
        })
        .collect();

    let simplified = parts.join(" || ");
    if !simplified.is_empty() && simplified.len() < range.trim().len() {
        Some(simplified)
    } else {
        Some(range.to_string())
    }
}
