//! Range algebra: parsing the disjunction-of-conjunctions grammar
//! (hyphen ranges, `~`, `^`, partials, wildcards) into primitive
//! [`Comparator`]s, and the derived operations — satisfaction with
//! pre-release gating, minimum satisfying version, directional
//! exclusion (`gtr`/`ltr`), and subset.

use std::cmp::Ordering;
use std::fmt;

use crate::comparator::{Comparator, Operator, Semver};
use crate::error::{Error, Result};
use crate::pattern;
use crate::version::{Ident, Options, Version};

/// Direction passed to [`Range::outside`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `version` is higher than everything the range admits.
    High,
    /// `version` is lower than everything the range admits.
    Low,
}

/// A parsed range: a disjunction of conjunctions of [`Comparator`]s,
/// exactly the shape `1.2.3 || >=2.0.0 <3.0.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    set: Vec<Vec<Comparator>>,
    raw: String,
    formatted: String,
    pub(crate) options: Options,
}

impl Range {
    /// Parses a range string under the given options.
    pub fn parse(input: &str, options: Options) -> Result<Self> {
        if input.len() > pattern::MAX_LENGTH {
            return Err(Error::InputTooLong {
                max: pattern::MAX_LENGTH,
            });
        }

        let trimmed = input.trim();
        let mut set = Vec::new();
        if trimmed.is_empty() {
            set.push(vec![universal_floor(options)]);
        } else {
            for alt in trimmed.split("||") {
                set.push(parse_alternative(alt.trim(), options)?);
            }
        }

        let formatted = format_set(&set);
        Ok(Self {
            set,
            raw: input.to_string(),
            formatted,
            options,
        })
    }

    /// The original input string, unmodified.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The disjunction of conjunctions this range desugars to.
    pub fn alternatives(&self) -> &[Vec<Comparator>] {
        &self.set
    }

    /// True if `v` satisfies some alternative, honoring the pre-release
    /// gate: when the range doesn't opt into `include_prerelease`, a
    /// pre-release version only satisfies an alternative that itself
    /// names the same `(major, minor, patch)` tuple with a pre-release.
    pub fn test(&self, v: &Version) -> bool {
        self.set.iter().any(|alt| alt_satisfied(alt, v, self.options))
    }

    /// The lowest version that satisfies this range, if any alternative
    /// admits a finite minimum.
    pub fn min_version(&self) -> Option<Version> {
        let floor = Version::new(0, 0, 0);
        if self.test(&floor) {
            return Some(floor);
        }
        let floor_pre = Version::from_parts(0, 0, 0, vec![Ident::Num(0)], Vec::new(), self.options);
        if self.test(&floor_pre) {
            return Some(floor_pre);
        }

        let mut overall: Option<Version> = None;
        for alt in &self.set {
            let Some(candidate) = alt_min_version(alt) else {
                continue;
            };
            overall = match overall {
                Some(cur) if cur <= candidate => Some(cur),
                _ => Some(candidate),
            };
        }
        overall
    }

    /// True iff every alternative has some comparator that excludes
    /// `v` on the given side: the range as a whole admits nothing on
    /// that side of `v`.
    pub fn outside(&self, v: &Version, side: Side) -> bool {
        self.set
            .iter()
            .all(|alt| alt.iter().any(|c| comparator_excludes(c, v, side)))
    }

    /// `v` is strictly greater than everything this range admits.
    pub fn gtr(&self, v: &Version) -> bool {
        self.outside(v, Side::High)
    }

    /// `v` is strictly less than everything this range admits.
    pub fn ltr(&self, v: &Version) -> bool {
        self.outside(v, Side::Low)
    }

    /// Whether some version satisfies both `self` and `other`.
    pub fn intersects(&self, other: &Range) -> bool {
        self.set
            .iter()
            .any(|a| other.set.iter().any(|b| alts_intersect(a, b)))
    }

    /// Whether every version satisfying `self` also satisfies `sup`.
    pub fn is_subset_of(&self, sup: &Range) -> bool {
        self.set
            .iter()
            .all(|sub_alt| sup.set.iter().any(|sup_alt| alt_is_subset(sub_alt, sup_alt, sup.options)))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted)
    }
}

fn format_set(set: &[Vec<Comparator>]) -> String {
    set.iter()
        .map(|alt| {
            alt.iter()
                .map(Comparator::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" || ")
}

fn alt_satisfied(alt: &[Comparator], v: &Version, options: Options) -> bool {
    if !alt.iter().all(|c| c.test(v)) {
        return false;
    }
    if options.include_prerelease || !v.is_prerelease() {
        return true;
    }
    alt.iter().any(|c| {
        let Semver::Exact(sv) = &c.semver else {
            return false;
        };
        sv.is_prerelease() && sv.major == v.major && sv.minor == v.minor && sv.patch == v.patch
    })
}

fn comparator_excludes(c: &Comparator, v: &Version, side: Side) -> bool {
    if c.test(v) {
        return false;
    }
    match side {
        Side::High => matches!(c.operator, Operator::Lt | Operator::Le | Operator::Eq),
        Side::Low => matches!(c.operator, Operator::Gt | Operator::Ge | Operator::Eq),
    }
}

fn alts_intersect(a: &[Comparator], b: &[Comparator]) -> bool {
    a.iter().all(|ca| b.iter().all(|cb| ca.intersects(cb)))
}

fn alt_min_version(alt: &[Comparator]) -> Option<Version> {
    let mut set_min: Option<Version> = None;
    let mut pinned: Option<Version> = None;

    for c in alt {
        let Semver::Exact(v) = &c.semver else {
            continue;
        };
        match c.operator {
            Operator::Ge | Operator::Eq => {
                if set_min.as_ref().is_none_or(|m| v >= m) {
                    set_min = Some(v.clone());
                }
                if c.operator == Operator::Eq {
                    pinned = Some(v.clone());
                }
            }
            Operator::Gt => {
                let candidate = v.next_above();
                if set_min.as_ref().is_none_or(|m| &candidate >= m) {
                    set_min = Some(candidate);
                }
            }
            Operator::Lt | Operator::Le => {}
        }
    }

    if let Some(pin) = pinned {
        return alt.iter().all(|c| c.test(&pin)).then_some(pin);
    }

    match set_min {
        Some(m) if alt.iter().all(|c| c.test(&m)) => Some(m),
        _ => None,
    }
}

// --- subset ---------------------------------------------------------

type Bound = Option<(Operator, Version)>;

struct Interval {
    lower: Bound,
    upper: Bound,
}

fn reduce_interval(alt: &[Comparator]) -> Interval {
    let mut lower: Bound = None;
    let mut upper: Bound = None;
    for c in alt {
        let Semver::Exact(v) = &c.semver else {
            continue;
        };
        match c.operator {
            Operator::Ge => lower = tighten_lower(lower, Operator::Ge, v.clone()),
            Operator::Gt => lower = tighten_lower(lower, Operator::Gt, v.clone()),
            Operator::Le => upper = tighten_upper(upper, Operator::Le, v.clone()),
            Operator::Lt => upper = tighten_upper(upper, Operator::Lt, v.clone()),
            Operator::Eq => {
                lower = tighten_lower(lower, Operator::Ge, v.clone());
                upper = tighten_upper(upper, Operator::Le, v.clone());
            }
        }
    }
    Interval { lower, upper }
}

fn tighten_lower(cur: Bound, op: Operator, v: Version) -> Bound {
    match cur {
        None => Some((op, v)),
        Some((cur_op, cur_v)) => match v.compare(&cur_v) {
            Ordering::Greater => Some((op, v)),
            Ordering::Less => Some((cur_op, cur_v)),
            Ordering::Equal => {
                if op == Operator::Gt || cur_op == Operator::Gt {
                    Some((Operator::Gt, v))
                } else {
                    Some((cur_op, cur_v))
                }
            }
        },
    }
}

fn tighten_upper(cur: Bound, op: Operator, v: Version) -> Bound {
    match cur {
        None => Some((op, v)),
        Some((cur_op, cur_v)) => match v.compare(&cur_v) {
            Ordering::Less => Some((op, v)),
            Ordering::Greater => Some((cur_op, cur_v)),
            Ordering::Equal => {
                if op == Operator::Lt || cur_op == Operator::Lt {
                    Some((Operator::Lt, v))
                } else {
                    Some((cur_op, cur_v))
                }
            }
        },
    }
}

fn interval_is_empty(iv: &Interval) -> bool {
    match (&iv.lower, &iv.upper) {
        (Some((lop, lv)), Some((uop, uv))) => match lv.compare(uv) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => !(*lop == Operator::Ge && *uop == Operator::Le),
        },
        _ => false,
    }
}

fn lower_within(sub: &Bound, sup: &Bound) -> bool {
    match (sub, sup) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some((sop, sv)), Some((pop, pv))) => match sv.compare(pv) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => !(*pop == Operator::Gt && *sop == Operator::Ge),
        },
    }
}

fn upper_within(sub: &Bound, sup: &Bound) -> bool {
    match (sub, sup) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some((sop, sv)), Some((pop, pv))) => match sv.compare(pv) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => !(*pop == Operator::Lt && *sop == Operator::Le),
        },
    }
}

fn prerelease_reference(iv: &Interval) -> Option<&Version> {
    if let Some((_, v)) = &iv.lower {
        if v.is_prerelease() {
            return Some(v);
        }
    }
    if let Some((_, v)) = &iv.upper {
        if v.is_prerelease() {
            return Some(v);
        }
    }
    None
}

fn alt_is_subset(sub_alt: &[Comparator], sup_alt: &[Comparator], sup_options: Options) -> bool {
    if sub_alt.iter().any(Comparator::is_empty_set) {
        return true;
    }

    let sub_iv = reduce_interval(sub_alt);
    if interval_is_empty(&sub_iv) {
        return true;
    }

    let sup_iv = reduce_interval(sup_alt);
    if interval_is_empty(&sup_iv) {
        return false;
    }

    if !lower_within(&sub_iv.lower, &sup_iv.lower) {
        return false;
    }
    if !upper_within(&sub_iv.upper, &sup_iv.upper) {
        return false;
    }

    if !sup_options.include_prerelease {
        if let Some(pre_v) = prerelease_reference(&sub_iv) {
            let sup_names_tuple = sup_alt.iter().any(|c| {
                let Semver::Exact(v) = &c.semver else {
                    return false;
                };
                v.is_prerelease() && v.major == pre_v.major && v.minor == pre_v.minor && v.patch == pre_v.patch
            });
            if !sup_names_tuple {
                return false;
            }
        }
    }

    true
}

// --- grammar: partials ----------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum XPart {
    Num(u64),
    Wild,
}

struct Partial {
    major: XPart,
    minor: XPart,
    patch: XPart,
    prerelease: Vec<Ident>,
    build: Vec<String>,
}

fn parse_xpart(s: Option<&str>, part: crate::error::PartType) -> Result<XPart> {
    match s {
        None => Ok(XPart::Wild),
        Some(s) if matches!(s, "x" | "X" | "*") => Ok(XPart::Wild),
        Some(s) => {
            let n: u64 = s
                .parse()
                .map_err(|_| Error::NumericOverflow { part })?;
            if n > crate::version::MAX_SAFE_INTEGER {
                return Err(Error::NumericOverflow { part });
            }
            Ok(XPart::Num(n))
        }
    }
}

fn parse_partial(s: &str, options: Options) -> Result<Partial> {
    use crate::error::PartType;

    let trimmed = s.trim();
    let caps = pattern::partial_regex(options.loose)
        .captures(trimmed)
        .ok_or_else(|| Error::ParseFailure(trimmed.to_string()))?;

    let major = parse_xpart(caps.get(1).map(|m| m.as_str()), PartType::Major)?;
    let minor = parse_xpart(caps.get(2).map(|m| m.as_str()), PartType::Minor)?;
    let patch = parse_xpart(caps.get(3).map(|m| m.as_str()), PartType::Patch)?;

    let prerelease = match caps.get(4) {
        Some(m) if !m.as_str().is_empty() => m
            .as_str()
            .split('.')
            .map(|p| Ident::parse(p, options.loose))
            .collect::<Result<Vec<_>>>()?,
        _ => Vec::new(),
    };
    let build = match caps.get(5) {
        Some(m) if !m.as_str().is_empty() => m.as_str().split('.').map(str::to_string).collect(),
        _ => Vec::new(),
    };

    Ok(Partial {
        major,
        minor,
        patch,
        prerelease,
        build,
    })
}

fn num_or_zero(x: &XPart) -> u64 {
    match x {
        XPart::Num(n) => *n,
        XPart::Wild => 0,
    }
}

fn wildcard_level(p: &Partial) -> Option<u8> {
    if matches!(p.minor, XPart::Wild) {
        Some(1)
    } else if matches!(p.patch, XPart::Wild) {
        Some(2)
    } else {
        None
    }
}

fn floor_version(p: &Partial, options: Options, tag_zero: bool) -> Version {
    let pre = if tag_zero {
        vec![Ident::Num(0)]
    } else {
        p.prerelease.clone()
    };
    Version::from_parts(
        num_or_zero(&p.major),
        num_or_zero(&p.minor),
        num_or_zero(&p.patch),
        pre,
        Vec::new(),
        options,
    )
}

fn exact_version(p: &Partial, options: Options) -> Version {
    Version::from_parts(
        num_or_zero(&p.major),
        num_or_zero(&p.minor),
        num_or_zero(&p.patch),
        p.prerelease.clone(),
        p.build.clone(),
        options,
    )
}

fn bumped_boundary(p: &Partial, level: u8, options: Options, tag_zero: bool) -> Version {
    let pre = if tag_zero { vec![Ident::Num(0)] } else { Vec::new() };
    match level {
        1 => Version::from_parts(num_or_zero(&p.major) + 1, 0, 0, pre, Vec::new(), options),
        2 => Version::from_parts(num_or_zero(&p.major), num_or_zero(&p.minor) + 1, 0, pre, Vec::new(), options),
        _ => unreachable!("wildcard_level only returns 1 or 2"),
    }
}

fn universal_floor(options: Options) -> Comparator {
    let pre = if options.include_prerelease {
        vec![Ident::Num(0)]
    } else {
        Vec::new()
    };
    Comparator::exact(Operator::Ge, Version::from_parts(0, 0, 0, pre, Vec::new(), options))
}

/// Rule 2 and rule 5 of the grammar: an explicit operator (or none, for
/// a bare partial) applied to a partial version, desugared down to one
/// or two primitive comparators.
fn desugar_operator_partial(operator: Operator, p: &Partial, options: Options) -> Vec<Comparator> {
    if matches!(p.major, XPart::Wild) {
        return vec![universal_floor(options)];
    }

    let level = wildcard_level(p);
    match operator {
        Operator::Eq => match level {
            None => vec![Comparator::exact(Operator::Eq, exact_version(p, options))],
            Some(l) => vec![
                Comparator::exact(Operator::Ge, floor_version(p, options, false)),
                Comparator::exact(Operator::Lt, bumped_boundary(p, l, options, true)),
            ],
        },
        Operator::Ge => vec![Comparator::exact(Operator::Ge, floor_version(p, options, false))],
        Operator::Gt => match level {
            Some(l) => vec![Comparator::exact(Operator::Ge, bumped_boundary(p, l, options, false))],
            None => vec![Comparator::exact(Operator::Gt, exact_version(p, options))],
        },
        Operator::Le => match level {
            Some(l) => vec![Comparator::exact(Operator::Lt, bumped_boundary(p, l, options, true))],
            None => vec![Comparator::exact(Operator::Le, exact_version(p, options))],
        },
        Operator::Lt => match level {
            Some(_) => vec![Comparator::exact(Operator::Lt, floor_version(p, options, true))],
            None => vec![Comparator::exact(Operator::Lt, exact_version(p, options))],
        },
    }
}

fn expand_hyphen(a_str: &str, b_str: &str, options: Options) -> Result<Vec<Comparator>> {
    let a = parse_partial(a_str, options)?;
    let b = parse_partial(b_str, options)?;
    let mut comparators = desugar_operator_partial(Operator::Ge, &a, options);
    comparators.extend(desugar_operator_partial(Operator::Le, &b, options));
    Ok(comparators)
}

fn expand_tilde(rest: &str, options: Options) -> Result<Vec<Comparator>> {
    let p = parse_partial(rest, options)?;
    if matches!(p.major, XPart::Wild) {
        return Ok(vec![universal_floor(options)]);
    }

    let lower = Comparator::exact(Operator::Ge, floor_version(&p, options, false));
    let upper_version = match wildcard_level(&p) {
        Some(1) => Version::from_parts(num_or_zero(&p.major) + 1, 0, 0, vec![Ident::Num(0)], Vec::new(), options),
        _ => Version::from_parts(
            num_or_zero(&p.major),
            num_or_zero(&p.minor) + 1,
            0,
            vec![Ident::Num(0)],
            Vec::new(),
            options,
        ),
    };
    Ok(vec![lower, Comparator::exact(Operator::Lt, upper_version)])
}

fn expand_caret(rest: &str, options: Options) -> Result<Vec<Comparator>> {
    let p = parse_partial(rest, options)?;
    if matches!(p.major, XPart::Wild) {
        return Ok(vec![universal_floor(options)]);
    }

    let major = num_or_zero(&p.major);
    let level = wildcard_level(&p);
    let (minor, patch, prerelease) = match level {
        Some(1) => (0, 0, Vec::new()),
        Some(2) => (num_or_zero(&p.minor), 0, Vec::new()),
        None => (num_or_zero(&p.minor), num_or_zero(&p.patch), p.prerelease.clone()),
        Some(_) => unreachable!("wildcard_level only returns 1 or 2"),
    };

    let lower = Comparator::exact(
        Operator::Ge,
        Version::from_parts(major, minor, patch, prerelease, Vec::new(), options),
    );

    let upper_version = if major > 0 {
        Version::from_parts(major + 1, 0, 0, vec![Ident::Num(0)], Vec::new(), options)
    } else if minor > 0 {
        Version::from_parts(major, minor + 1, 0, vec![Ident::Num(0)], Vec::new(), options)
    } else if level == Some(1) {
        Version::from_parts(1, 0, 0, vec![Ident::Num(0)], Vec::new(), options)
    } else {
        Version::from_parts(major, minor, patch + 1, vec![Ident::Num(0)], Vec::new(), options)
    };

    Ok(vec![lower, Comparator::exact(Operator::Lt, upper_version)])
}

fn expand_bare_partial(s: &str, options: Options) -> Result<Vec<Comparator>> {
    let p = parse_partial(s, options)?;
    Ok(desugar_operator_partial(Operator::Eq, &p, options))
}

fn expand_comparator_partial(operator: Operator, rest: &str, options: Options) -> Result<Vec<Comparator>> {
    let p = parse_partial(rest, options)?;
    Ok(desugar_operator_partial(operator, &p, options))
}

fn op_from_str(s: &str) -> Operator {
    match s {
        "<" => Operator::Lt,
        "<=" => Operator::Le,
        "=" => Operator::Eq,
        ">=" => Operator::Ge,
        ">" => Operator::Gt,
        _ => unreachable!("match_operator only returns known operators"),
    }
}

fn match_operator(s: &str) -> Option<usize> {
    const OPS: [&str; 5] = ["<=", ">=", "<", ">", "="];
    OPS.iter().find(|op| s.starts_with(**op)).map(|op| op.len())
}

fn is_version_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'+')
}

/// Splits one `||`-alternative into its whitespace-separated tokens,
/// keeping any whitespace between a leading operator and its version
/// inside the same token (the token parsers trim that themselves).
fn tokenize_alternative(alt: &str) -> Vec<String> {
    let bytes = alt.as_bytes();
    let len = bytes.len();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < len {
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= len {
            break;
        }
        let start = i;

        if let Some(op_len) = match_operator(&alt[i..]) {
            i += op_len;
        } else if bytes[i] == b'~' || bytes[i] == b'^' {
            i += 1;
        }
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let body_start = i;
        while i < len && is_version_char(bytes[i]) {
            i += 1;
        }
        if i == body_start && i == start {
            // Stray character neither operator nor version body; consume
            // it so the loop makes progress, the token parser below will
            // report the failure.
            i += 1;
        }
        tokens.push(alt[start..i].to_string());
    }

    tokens
}

fn desugar_token(token: &str, options: Options) -> Result<Vec<Comparator>> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if let Some(rest) = trimmed.strip_prefix('~') {
        return expand_tilde(rest.trim_start(), options);
    }
    if let Some(rest) = trimmed.strip_prefix('^') {
        return expand_caret(rest.trim_start(), options);
    }
    if let Some(op_len) = match_operator(trimmed) {
        let operator = op_from_str(&trimmed[..op_len]);
        let rest = trimmed[op_len..].trim_start();
        if rest.is_empty() {
            return Ok(vec![universal_floor(options)]);
        }
        return expand_comparator_partial(operator, rest, options);
    }
    expand_bare_partial(trimmed, options)
}

fn parse_alternative(alt: &str, options: Options) -> Result<Vec<Comparator>> {
    if alt.is_empty() {
        return Ok(vec![universal_floor(options)]);
    }
    if let Some(caps) = pattern::hyphen_regex(options.loose).captures(alt) {
        let a = caps.get(1).unwrap().as_str();
        let b = caps.get(2).unwrap().as_str();
        return expand_hyphen(a, b, options);
    }

    let tokens = tokenize_alternative(alt);
    if tokens.is_empty() {
        return Err(Error::ParseFailure(alt.to_string()));
    }
    let mut comparators = Vec::new();
    for tok in tokens {
        comparators.extend(desugar_token(&tok, options)?);
    }
    Ok(comparators)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(s: &str) -> Range {
        Range::parse(s, Options::default()).unwrap()
    }

    fn v(s: &str) -> Version {
        Version::parse(s, Options::default()).unwrap()
    }

    #[test]
    fn caret_full_version_same_major() {
        let range = r("^1.2.3");
        assert!(range.test(&v("1.2.3")));
        assert!(range.test(&v("1.9.0")));
        assert!(!range.test(&v("2.0.0")));
        assert!(!range.test(&v("1.2.2")));
    }

    #[test]
    fn caret_zero_major_pins_minor() {
        let range = r("^0.2.3");
        assert!(range.test(&v("0.2.4")));
        assert!(!range.test(&v("0.3.0")));
    }

    #[test]
    fn caret_zero_zero_pins_patch() {
        let range = r("^0.0.3");
        assert!(range.test(&v("0.0.3")));
        assert!(!range.test(&v("0.0.4")));
    }

    #[test]
    fn tilde_pins_minor() {
        let range = r("~1.2.3");
        assert!(range.test(&v("1.2.4")));
        assert!(range.test(&v("1.2.99")));
        assert!(!range.test(&v("1.3.0")));
    }

    #[test]
    fn hyphen_range_inclusive_bounds() {
        let range = r("1.2.3 - 2.3.4");
        assert_eq!(range.to_string(), ">=1.2.3 <=2.3.4");
        assert!(range.test(&v("2.3.4")));
        assert!(!range.test(&v("2.3.5")));
    }

    #[test]
    fn hyphen_range_partial_upper_bumps() {
        let range = r("1.2.3 - 2.3");
        assert_eq!(range.to_string(), ">=1.2.3 <2.4.0-0");
        assert!(range.test(&v("2.3.99")));
        assert!(!range.test(&v("2.4.0")));
    }

    #[test]
    fn bare_major_wildcard_expands() {
        let range = r("1.x");
        assert_eq!(range.to_string(), ">=1.0.0 <2.0.0-0");
    }

    #[test]
    fn disjunction_picks_either_alternative() {
        let range = r("1.x || 2.x");
        assert!(range.test(&v("1.9.0")));
        assert!(range.test(&v("2.3.1")));
        assert!(!range.test(&v("3.0.0")));
    }

    #[test]
    fn prerelease_gate_requires_matching_tuple() {
        let range = r("^1.2.3");
        assert!(!range.test(&v("1.2.3-alpha")));
        assert!(!range.test(&v("1.9.0-alpha")));
    }

    #[test]
    fn include_prerelease_admits_tuple() {
        let range = Range::parse("^1.2.3", Options::new(false, true)).unwrap();
        assert!(range.test(&v("1.9.0-alpha")));
    }

    #[test]
    fn min_version_of_caret_range() {
        let range = r("^1.2.3");
        assert_eq!(range.min_version(), Some(v("1.2.3")));
    }

    #[test]
    fn min_version_of_open_range_is_zero() {
        let range = r("*");
        assert_eq!(range.min_version(), Some(Version::new(0, 0, 0)));
    }

    #[test]
    fn min_version_picks_lowest_alternative() {
        let range = r(">=2.0.0 || >=1.0.0");
        assert_eq!(range.min_version(), Some(v("1.0.0")));
    }

    #[test]
    fn gtr_and_ltr() {
        let range = r("1.2.3 - 2.3.4");
        assert!(range.gtr(&v("3.0.0")));
        assert!(range.ltr(&v("1.0.0")));
        assert!(!range.gtr(&v("2.0.0")));
    }

    #[test]
    fn intersects_overlapping_caret_ranges() {
        assert!(r("^1.2.3").intersects(&r("^1.5.0")));
        assert!(!r("^1.0.0").intersects(&r("^2.0.0")));
    }

    #[test]
    fn subset_of_union() {
        assert!(r("1.2.7 || 1.2.8").is_subset_of(&r(">=1.2.7")));
        assert!(!r(">=1.0.0").is_subset_of(&r(">=2.0.0")));
    }

    #[test]
    fn empty_range_is_universal() {
        let range = r("");
        assert!(range.test(&v("0.0.0")));
        assert!(range.test(&v("999.0.0")));
    }
}
