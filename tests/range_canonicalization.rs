//! Snapshot coverage of `Range`'s canonical string rendering across the
//! desugaring rules: tilde, caret, hyphen, and wildcard partials each
//! reduce to a predictable comparator form, which is exactly the kind of
//! output `insta` is for — eyeball once, then let future changes show up
//! as a diff instead of a silent behavior change.

use semverix::{Options, Range};

const STRICT: Options = Options { loose: false, include_prerelease: false };

fn canonical(s: &str) -> String {
    Range::parse(s, STRICT).unwrap().to_string()
}

#[test]
fn tilde_forms() {
    insta::assert_snapshot!(canonical("~1.2.3"), @">=1.2.3 <1.3.0-0");
    insta::assert_snapshot!(canonical("~1.2"), @">=1.2.0 <1.3.0-0");
    insta::assert_snapshot!(canonical("~1"), @">=1.0.0 <2.0.0-0");
}

#[test]
fn caret_forms() {
    insta::assert_snapshot!(canonical("^1.2.3"), @">=1.2.3 <2.0.0-0");
    insta::assert_snapshot!(canonical("^0.2.3"), @">=0.2.3 <0.3.0-0");
    insta::assert_snapshot!(canonical("^0.0.3"), @">=0.0.3 <0.0.4-0");
    insta::assert_snapshot!(canonical("^1.x"), @">=1.0.0 <2.0.0-0");
    insta::assert_snapshot!(canonical("^0.x"), @">=0.0.0 <1.0.0-0");
}

#[test]
fn hyphen_forms() {
    insta::assert_snapshot!(canonical("1.2.3 - 2.3.4"), @">=1.2.3 <=2.3.4");
    insta::assert_snapshot!(canonical("1.2.3 - 2.3"), @">=1.2.3 <2.4.0-0");
    insta::assert_snapshot!(canonical("1.2.3 - 2"), @">=1.2.3 <3.0.0-0");
}

#[test]
fn wildcard_forms() {
    insta::assert_snapshot!(canonical("1.x"), @">=1.0.0 <2.0.0-0");
    insta::assert_snapshot!(canonical("1.2.x"), @">=1.2.0 <1.3.0-0");
    insta::assert_snapshot!(canonical("*"), @">=0.0.0");
    insta::assert_snapshot!(canonical(""), @">=0.0.0");
}

#[test]
fn comparator_partial_edge_cases() {
    insta::assert_snapshot!(canonical(">1.x"), @">=2.0.0");
    insta::assert_snapshot!(canonical("<=1.x"), @"<2.0.0-0");
    insta::assert_snapshot!(canonical("<1.2.x"), @"<1.2.0-0");
}

#[test]
fn idempotent_under_reparsing() {
    for s in ["~1.2.3", "^0.2.3", "1.2.3 - 2.3.4", "1.x || 2.x", ">1.0.0 <=2.0.0"] {
        let once = canonical(s);
        let twice = canonical(&once);
        assert_eq!(once, twice, "re-parsing the canonical form of {s:?} changed it");
    }
}
