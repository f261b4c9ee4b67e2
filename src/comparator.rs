//! A single primitive `operator ∘ version` predicate.

use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;
use crate::pattern;
use crate::version::{Options, Version};

/// One of the five comparator operators. The empty string in the
/// distilled grammar (exact equality, e.g. bare `1.2.3`) is [`Operator::Eq`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Lt,
    Le,
    Eq,
    Ge,
    Gt,
}

impl Operator {
    fn as_str(self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Eq => "",
            Operator::Ge => ">=",
            Operator::Gt => ">",
        }
    }

    fn includes_eq(self) -> bool {
        matches!(self, Operator::Le | Operator::Eq | Operator::Ge)
    }

    fn is_gt_family(self) -> bool {
        matches!(self, Operator::Ge | Operator::Gt)
    }

    fn is_lt_family(self) -> bool {
        matches!(self, Operator::Le | Operator::Lt)
    }
}

/// Either a parsed [`Version`] or the sentinel that matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Semver {
    Any,
    Exact(Version),
}

/// A primitive comparator: an operator applied to a version, or the
/// wildcard `*`/empty-string comparator that matches any version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparator {
    pub operator: Operator,
    pub semver: Semver,
}

impl Comparator {
    pub(crate) fn any() -> Self {
        Self {
            operator: Operator::Ge,
            semver: Semver::Any,
        }
    }

    pub(crate) fn exact(operator: Operator, version: Version) -> Self {
        Self {
            operator,
            semver: Semver::Exact(version),
        }
    }

    /// Parses one comparator token, e.g. `>=1.2.3`, `1.2.3`, or `*`.
    pub fn parse(input: &str, options: Options) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == "*" {
            return Ok(Self::any());
        }

        let (operator, rest) = match pattern::COMPARATOR_OP.captures(trimmed) {
            Some(caps) => {
                let op_str = caps.get(1).unwrap().as_str();
                let operator = match op_str {
                    "<" => Operator::Lt,
                    "<=" => Operator::Le,
                    "=" => Operator::Eq,
                    ">=" => Operator::Ge,
                    ">" => Operator::Gt,
                    _ => unreachable!("pattern only captures known operators"),
                };
                (operator, trimmed[op_str.len()..].trim_start())
            }
            None => (Operator::Eq, trimmed),
        };

        if rest.is_empty() {
            return Ok(Self::any());
        }

        let version = Version::parse(rest, options)?;
        Ok(Self::exact(operator, version))
    }

    /// True if `v` satisfies this comparator.
    pub fn test(&self, v: &Version) -> bool {
        let Semver::Exact(semver) = &self.semver else {
            return true;
        };
        match v.compare(semver) {
            Ordering::Less => self.operator.is_lt_family(),
            Ordering::Equal => self.operator.includes_eq(),
            Ordering::Greater => self.operator.is_gt_family(),
        }
    }

    /// The comparator for `<0.0.0-0`, the absolute floor of the
    /// precedence order, which no version can satisfy.
    pub(crate) fn is_empty_set(&self) -> bool {
        let Semver::Exact(v) = &self.semver else {
            return false;
        };
        self.operator == Operator::Lt
            && v.major == 0
            && v.minor == 0
            && v.patch == 0
            && v.prerelease == vec![crate::version::Ident::Num(0)]
    }

    /// Whether there exists some version satisfying both comparators.
    pub fn intersects(&self, other: &Self) -> bool {
        let (Semver::Exact(a), Semver::Exact(b)) = (&self.semver, &other.semver) else {
            return true;
        };

        if self.operator == Operator::Eq {
            return other.test(a);
        }
        if other.operator == Operator::Eq {
            return self.test(b);
        }

        if self.is_empty_set() || other.is_empty_set() {
            return false;
        }

        if (self.operator.is_gt_family() && other.operator.is_gt_family())
            || (self.operator.is_lt_family() && other.operator.is_lt_family())
        {
            return true;
        }

        if a == b && self.operator.includes_eq() && other.operator.includes_eq() {
            return true;
        }

        match a.compare(b) {
            Ordering::Less => self.operator.is_gt_family() && other.operator.is_lt_family(),
            Ordering::Greater => self.operator.is_lt_family() && other.operator.is_gt_family(),
            Ordering::Equal => false,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.semver {
            Semver::Any => write!(f, "*"),
            Semver::Exact(v) => write!(f, "{}{}", self.operator.as_str(), v),
        }
    }
}
