//! The concrete satisfaction/comparison/inc/subset scenarios from the
//! core design's testable-properties table, exercised end to end through
//! the public `ops` facade rather than the internal types.

use std::cmp::Ordering;

use semverix::{Options, ReleaseKind};

const STRICT: Options = Options { loose: false, include_prerelease: false };

#[test]
fn tilde_admits_patch_bump_but_not_minor_bump() {
    assert!(semverix::satisfies("1.2.4", "~1.2.3", STRICT));
    assert!(!semverix::satisfies("1.3.0", "~1.2.3", STRICT));
}

#[test]
fn caret_on_zero_major_pins_minor() {
    assert!(!semverix::satisfies("0.3.0", "^0.2.3", STRICT));
    assert!(semverix::satisfies("0.2.4", "^0.2.3", STRICT));
}

// The design document's scenario table pairs `>=1.0.0-alpha <2.0.0` with
// `satisfies("1.5.0-beta", r)` and calls for `true`, but the gate it
// defines requires a bound sharing the exact (major, minor, patch) tuple
// of the tested pre-release, and `1.0.0-alpha` doesn't share `1.5.0`'s
// tuple — under that rule the literal scenario is `false`, not `true`.
// See DESIGN.md's "Open Question decisions" for the resolution; this
// test exercises the gate with a bound that does share the tuple instead
// of silently reusing the scenario's unsatisfiable inputs.
#[test]
fn prerelease_gate_excludes_by_default_but_admits_with_matching_bound() {
    assert!(!semverix::satisfies("1.5.0-beta", ">=1.0.0 <2.0.0", STRICT));
    assert!(!semverix::satisfies("1.5.0-beta", ">=1.0.0-alpha <2.0.0", STRICT));
    assert!(semverix::satisfies("1.5.0-beta", ">=1.5.0-alpha <2.0.0", STRICT));
}

#[test]
fn hyphen_range_formats_to_inclusive_comparators() {
    let range = semverix::Range::parse("1.2.3 - 2.3.4", STRICT).unwrap();
    assert_eq!(range.to_string(), ">=1.2.3 <=2.3.4");
}

#[test]
fn max_satisfying_across_a_union() {
    let versions = ["1.9.0", "2.3.1", "3.0.0"];
    assert_eq!(semverix::max_satisfying(&versions, "1.x || 2.x", STRICT), Some("2.3.1"));
}

#[test]
fn numeric_prerelease_identifiers_compare_as_integers() {
    assert_eq!(semverix::compare("1.2.3-beta.11", "1.2.3-beta.2", STRICT), Some(Ordering::Greater));
}

#[test]
fn inc_prerelease_bumps_the_rightmost_numeral() {
    assert_eq!(
        semverix::inc("1.2.3-beta.4", ReleaseKind::PreRelease, STRICT, None, None),
        Some("1.2.3-beta.5".to_string())
    );
}

#[test]
fn inc_premajor_seeds_a_named_identifier_at_zero() {
    assert_eq!(
        semverix::inc("1.2.3", ReleaseKind::PreMajor, STRICT, Some("rc"), None),
        Some("2.0.0-rc.0".to_string())
    );
}

#[test]
fn subset_of_a_two_member_union() {
    assert!(semverix::subset("1.2.7 || 1.2.8", ">=1.2.7", STRICT));
}

#[test]
fn a_wider_floor_is_not_a_subset_of_a_narrower_one() {
    assert!(!semverix::subset(">=1.0.0", ">=2.0.0", STRICT));
}
