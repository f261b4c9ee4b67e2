//! The `Version` value type and the pre-release identifier comparison
//! rules (SemVer 2.0.0 §11).

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, PartType, Result};
use crate::pattern::{self, MAX_LENGTH};

/// A safe-integer style cap on numeric fields, matching the distilled
/// spec's "< 2^53" requirement rather than `u64::MAX`.
pub const MAX_SAFE_INTEGER: u64 = (1u64 << 53) - 1;

/// Parsing and comparison options shared by `Version`, `Comparator`, and
/// `Range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Accept the permissive grammar: a leading `v`/`=`, surrounding
    /// whitespace, and leading zeros in numeric fields.
    pub loose: bool,
    /// Let pre-release versions satisfy ranges that don't explicitly
    /// name a matching pre-release tuple.
    pub include_prerelease: bool,
}

impl Options {
    pub fn new(loose: bool, include_prerelease: bool) -> Self {
        Self {
            loose,
            include_prerelease,
        }
    }
}

/// One element of a dotted pre-release identifier list.
///
/// Per SemVer 2.0.0 §11.4, an identifier that matches `[0-9]+` compares
/// numerically; anything else compares as an opaque ASCII string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ident {
    Num(u64),
    Str(String),
}

impl Ident {
    pub(crate) fn parse(s: &str, loose: bool) -> Result<Self> {
        if s.chars().all(|c| c.is_ascii_digit()) && !s.is_empty() {
            if !loose && s.len() > 1 && s.starts_with('0') {
                return Err(Error::ParseFailure(s.to_string()));
            }
            let n: u64 = s
                .parse()
                .map_err(|_| Error::NumericOverflow { part: PartType::Prerelease })?;
            if n > MAX_SAFE_INTEGER {
                return Err(Error::NumericOverflow { part: PartType::Prerelease });
            }
            Ok(Ident::Num(n))
        } else {
            Ok(Ident::Str(s.to_string()))
        }
    }

    fn cmp_ident(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Ident::Num(a), Ident::Num(b)) => a.cmp(b),
            (Ident::Str(a), Ident::Str(b)) => a.as_bytes().cmp(b.as_bytes()),
            (Ident::Num(_), Ident::Str(_)) => Ordering::Less,
            (Ident::Str(_), Ident::Num(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ident::Num(n) => write!(f, "{n}"),
            Ident::Str(s) => write!(f, "{s}"),
        }
    }
}

/// The release kind passed to [`Version::inc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    Major,
    Minor,
    Patch,
    PreMajor,
    PreMinor,
    PrePatch,
    PreRelease,
    Release,
    Pre,
}

/// A parsed semantic version: `major.minor.patch` plus optional
/// pre-release and build identifier lists.
///
/// Immutable once constructed; [`Version::inc`] returns a new value
/// rather than mutating in place.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<Ident>,
    pub build: Vec<String>,
    raw: String,
    pub(crate) options: Options,
}

impl Version {
    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Vec<Ident>,
        build: Vec<String>,
        options: Options,
    ) -> Self {
        let mut v = Self {
            major,
            minor,
            patch,
            prerelease,
            build,
            raw: String::new(),
            options,
        };
        v.raw = v.to_string();
        v
    }

    /// A plain `major.minor.patch` version with no pre-release or build
    /// metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self::from_parts(major, minor, patch, Vec::new(), Vec::new(), Options::default())
    }

    /// Parses a version string under the given options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputTooLong`] if the trimmed input exceeds
    /// [`pattern::MAX_LENGTH`], [`Error::ParseFailure`] if it doesn't
    /// match the grammar, or [`Error::NumericOverflow`] if a numeric
    /// field (including a numeric pre-release identifier) exceeds
    /// [`MAX_SAFE_INTEGER`].
    pub fn parse(input: &str, options: Options) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.len() > MAX_LENGTH {
            return Err(Error::InputTooLong { max: MAX_LENGTH });
        }

        let re = pattern::version_regex(options.loose);
        let caps = re
            .captures(trimmed)
            .ok_or_else(|| Error::ParseFailure(trimmed.to_string()))?;

        let major = parse_numeric_field(&caps[1], PartType::Major)?;
        let minor = parse_numeric_field(&caps[2], PartType::Minor)?;
        let patch = parse_numeric_field(&caps[3], PartType::Patch)?;

        let prerelease = match caps.get(4) {
            Some(m) if !m.as_str().is_empty() => m
                .as_str()
                .split('.')
                .map(|part| Ident::parse(part, options.loose))
                .collect::<Result<Vec<_>>>()?,
            _ => Vec::new(),
        };

        let build = match caps.get(5) {
            Some(m) if !m.as_str().is_empty() => {
                m.as_str().split('.').map(str::to_string).collect()
            }
            _ => Vec::new(),
        };

        Ok(Self::from_parts(major, minor, patch, prerelease, build, options))
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lexicographic comparison of the numeric `(major, minor, patch)`
    /// triple only.
    pub fn compare_main(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
    }

    /// Compares pre-release identifier lists per SemVer 2.0.0 §11.4.
    pub fn compare_pre(&self, other: &Self) -> Ordering {
        match (self.prerelease.is_empty(), other.prerelease.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                for i in 0.. {
                    match (self.prerelease.get(i), other.prerelease.get(i)) {
                        (Some(a), Some(b)) => {
                            let ord = a.cmp_ident(b);
                            if ord != Ordering::Equal {
                                return ord;
                            }
                        }
                        (Some(_), None) => return Ordering::Greater,
                        (None, Some(_)) => return Ordering::Less,
                        (None, None) => return Ordering::Equal,
                    }
                }
                unreachable!("identifier lists are finite")
            }
        }
    }

    /// Full precedence comparison: `compare_main` then `compare_pre`.
    /// Build metadata never participates.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.compare_main(other).then_with(|| self.compare_pre(other))
    }

    /// Compares build identifier lists. Shaped like `compare_pre` but
    /// every identifier is compared as a plain ASCII string, never
    /// promoted to numeric comparison.
    pub fn compare_build(&self, other: &Self) -> Ordering {
        match (self.build.is_empty(), other.build.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                for i in 0.. {
                    match (self.build.get(i), other.build.get(i)) {
                        (Some(a), Some(b)) => {
                            let ord = a.as_bytes().cmp(b.as_bytes());
                            if ord != Ordering::Equal {
                                return ord;
                            }
                        }
                        (Some(_), None) => return Ordering::Greater,
                        (None, Some(_)) => return Ordering::Less,
                        (None, None) => return Ordering::Equal,
                    }
                }
                unreachable!("identifier lists are finite")
            }
        }
    }

    /// Returns the next-higher release boundary used by `>`-comparator
    /// handling in range min-version computation: bump patch by one,
    /// and if `self` had no pre-release, pin the result's pre-release to
    /// `[0]` so the floor still excludes `self` itself while admitting
    /// pre-releases of the bumped patch under the pre-release gate.
    pub(crate) fn next_above(&self) -> Self {
        let prerelease = if self.is_prerelease() {
            Vec::new()
        } else {
            vec![Ident::Num(0)]
        };
        Self::from_parts(
            self.major,
            self.minor,
            self.patch + 1,
            prerelease,
            Vec::new(),
            self.options,
        )
    }

    fn apply_pre(
        current: &[Ident],
        identifier: Option<&str>,
        identifier_base: Option<bool>,
    ) -> Result<Vec<Ident>> {
        let truthy = identifier_base == Some(true);
        let base = if truthy { 1 } else { 0 };

        let mut pre = if current.is_empty() {
            vec![Ident::Num(base)]
        } else {
            let mut p = current.to_vec();
            match p.iter().rposition(|i| matches!(i, Ident::Num(_))) {
                Some(pos) => {
                    if let Ident::Num(n) = p[pos] {
                        p[pos] = Ident::Num(n + 1);
                    }
                }
                None => {
                    if let (Some(id), Some(false)) = (identifier, identifier_base) {
                        let joined = p.iter().map(Ident::to_string).collect::<Vec<_>>().join(".");
                        if joined == id {
                            return Err(Error::InvalidArgument(
                                "identifier already exists".to_string(),
                            ));
                        }
                    }
                    p.push(Ident::Num(base))
                }
            }
            p
        };

        if let Some(id) = identifier {
            let candidate = if identifier_base == Some(false) {
                vec![Ident::Str(id.to_string())]
            } else {
                vec![Ident::Str(id.to_string()), Ident::Num(base)]
            };

            let first_matches = matches!(&pre[0], Ident::Str(s) if s == id);
            let second_numeric = matches!(pre.get(1), Some(Ident::Num(_)));

            if !(first_matches && second_numeric) {
                pre = candidate;
            }
        }

        Ok(pre)
    }

    /// Applies a release increment, returning a new `Version`. Build
    /// metadata is always dropped: a bumped version shouldn't carry
    /// forward the previous build's metadata.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for `release: Release` on a version
    /// with no pre-release, or for `identifier_base: Some(false)` paired
    /// with an `identifier` that already equals the current pre-release.
    pub fn inc(
        &self,
        release: ReleaseKind,
        identifier: Option<&str>,
        identifier_base: Option<bool>,
    ) -> Result<Self> {
        let (mut major, mut minor, mut patch) = (self.major, self.minor, self.patch);
        let mut pre = self.prerelease.clone();

        match release {
            ReleaseKind::Major => {
                if minor != 0 || patch != 0 || pre.is_empty() {
                    major += 1;
                    minor = 0;
                    patch = 0;
                }
                pre.clear();
            }
            ReleaseKind::Minor => {
                if patch != 0 || pre.is_empty() {
                    minor += 1;
                    patch = 0;
                }
                pre.clear();
            }
            ReleaseKind::Patch => {
                if pre.is_empty() {
                    patch += 1;
                }
                pre.clear();
            }
            ReleaseKind::PreMajor => {
                major += 1;
                minor = 0;
                patch = 0;
                pre.clear();
                pre = Self::apply_pre(&pre, identifier, identifier_base)?;
            }
            ReleaseKind::PreMinor => {
                minor += 1;
                patch = 0;
                pre.clear();
                pre = Self::apply_pre(&pre, identifier, identifier_base)?;
            }
            ReleaseKind::PrePatch => {
                pre.clear();
                patch += 1;
                pre = Self::apply_pre(&pre, identifier, identifier_base)?;
            }
            ReleaseKind::PreRelease => {
                if pre.is_empty() {
                    patch += 1;
                }
                pre = Self::apply_pre(&pre, identifier, identifier_base)?;
            }
            ReleaseKind::Release => {
                if pre.is_empty() {
                    return Err(Error::InvalidArgument(
                        "cannot drop pre-release from a release version".to_string(),
                    ));
                }
                pre.clear();
            }
            ReleaseKind::Pre => {
                pre = Self::apply_pre(&pre, identifier, identifier_base)?;
            }
        }

        Ok(Self::from_parts(major, minor, patch, pre, Vec::new(), self.options))
    }
}

fn parse_numeric_field(s: &str, part: PartType) -> Result<u64> {
    let n: u64 = s.parse().map_err(|_| Error::NumericOverflow { part })?;
    if n > MAX_SAFE_INTEGER {
        return Err(Error::NumericOverflow { part });
    }
    Ok(n)
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-")?;
            for (i, id) in self.prerelease.iter().enumerate() {
                if i > 0 {
                    write!(f, ".")?;
                }
                write!(f, "{id}")?;
            }
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s, Options::default()).unwrap()
    }

    #[test]
    fn parses_plain_version() {
        let version = v("1.2.3");
        assert_eq!((version.major, version.minor, version.patch), (1, 2, 3));
        assert!(version.prerelease.is_empty());
        assert!(version.build.is_empty());
    }

    #[test]
    fn rejects_leading_zero_in_strict_mode() {
        assert!(Version::parse("01.2.3", Options::default()).is_err());
    }

    #[test]
    fn loose_mode_accepts_leading_v_and_zeros() {
        let opts = Options::new(true, false);
        let version = Version::parse("v01.2.3", opts).unwrap();
        assert_eq!((version.major, version.minor, version.patch), (1, 2, 3));
    }

    #[test]
    fn parses_prerelease_and_build() {
        let version = v("1.2.3-alpha.1+build.5");
        assert_eq!(version.prerelease, vec![Ident::Str("alpha".into()), Ident::Num(1)]);
        assert_eq!(version.build, vec!["build".to_string(), "5".to_string()]);
    }

    #[test]
    fn round_trips_through_display() {
        let version = v("1.2.3-alpha.1+build.5");
        assert_eq!(version.to_string(), "1.2.3-alpha.1+build.5");
    }

    #[test]
    fn prerelease_orders_below_release() {
        assert!(v("1.0.0-alpha") < v("1.0.0"));
    }

    #[test]
    fn numeric_prerelease_identifiers_compare_numerically() {
        assert!(v("1.2.3-beta.2") < v("1.2.3-beta.11"));
    }

    #[test]
    fn string_prerelease_identifiers_compare_lexically() {
        assert!(v("1.0.0-alpha") < v("1.0.0-beta"));
    }

    #[test]
    fn numeric_identifier_sorts_below_string_identifier() {
        assert!(v("1.0.0-1") < v("1.0.0-alpha"));
    }

    #[test]
    fn longer_identifier_list_is_greater_when_prefix_matches() {
        assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
    }

    #[test]
    fn build_metadata_does_not_affect_ordering() {
        assert_eq!(v("1.2.3+build1").compare(&v("1.2.3+build2")), Ordering::Equal);
        assert_eq!(v("1.2.3+build1"), v("1.2.3+build2"));
    }

    #[test]
    fn compare_is_antisymmetric_and_reflexive() {
        let a = v("1.2.3-beta.11");
        let b = v("1.2.3-beta.2");
        assert_eq!(a.compare(&b), Ordering::Greater);
        assert_eq!(b.compare(&a), Ordering::Less);
        assert_eq!(a.compare(&a), Ordering::Equal);
    }

    #[test]
    fn inc_prerelease_bumps_rightmost_numeric() {
        let version = v("1.2.3-beta.4").inc(ReleaseKind::PreRelease, None, None).unwrap();
        assert_eq!(version.to_string(), "1.2.3-beta.5");
    }

    #[test]
    fn inc_premajor_with_identifier_seeds_zero() {
        let version = v("1.2.3").inc(ReleaseKind::PreMajor, Some("rc"), None).unwrap();
        assert_eq!(version.to_string(), "2.0.0-rc.0");
    }

    #[test]
    fn inc_patch_drops_prerelease_without_bumping() {
        let version = v("1.2.3-beta").inc(ReleaseKind::Patch, None, None).unwrap();
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn inc_release_requires_existing_prerelease() {
        assert!(v("1.2.3").inc(ReleaseKind::Release, None, None).is_err());
        let version = v("1.2.3-beta").inc(ReleaseKind::Release, None, None).unwrap();
        assert_eq!(version.to_string(), "1.2.3");
    }

    #[test]
    fn inc_drops_build_metadata() {
        let version = v("1.2.3+build.5").inc(ReleaseKind::Patch, None, None).unwrap();
        assert_eq!(version.to_string(), "1.2.4");
    }

    #[test]
    fn inc_pre_identifier_base_false_errors_on_exact_match() {
        let version = v("1.2.3-rc");
        let err = version.inc(ReleaseKind::Pre, Some("rc"), Some(false));
        assert!(err.is_err());
    }

    #[test]
    fn inc_pre_with_a_numeric_identifier_bumps_instead_of_erroring() {
        // A rightmost numeric identifier is found ("4"), so the bump
        // happens and the "identifier already exists" error never
        // applies — that error is reserved for when no numeric
        // identifier exists to bump in the first place.
        let version = v("1.2.3-4").inc(ReleaseKind::Pre, Some("4"), Some(false)).unwrap();
        assert_eq!(version.prerelease, vec![Ident::Str("4".to_string())]);
    }

    #[test]
    fn rejects_input_over_max_length() {
        let long = format!("1.2.3-{}", "a".repeat(MAX_LENGTH));
        assert!(Version::parse(&long, Options::default()).is_err());
    }
}
