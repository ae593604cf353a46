//! Integer range notation (`int4range` text form).
//!
//! Ranges are written as `<open><lower>,<upper><close>`, where `[`/`]`
//! include an endpoint, `(`/`)` exclude it, and an omitted endpoint means
//! unbounded on that side. The token `empty` denotes the range that
//! contains no values; it is kept distinct from the fully unbounded range
//! `(,)`, which contains every value.
//!
//! # Example
//!
//! ```rust
//! use oxide_pgwriter::range::{BoundType, IntRange, format_range, parse_range};
//!
//! let range = parse_range("[1,10)").unwrap();
//! assert_eq!(range, IntRange::closed_open(1, 10));
//! assert_eq!(range.lower().unwrap().bound_type, BoundType::Closed);
//! assert_eq!(format_range(Some(&range)), "[1,10)");
//! assert_eq!(format_range(None), "(,)");
//! ```

use std::fmt::{self, Write as _};
use std::ops::Bound;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PgWriterError, Result};

/// Whether a range endpoint is excluded (`Open`) or included (`Closed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundType {
    Open,
    Closed,
}

impl BoundType {
    const fn lower_char(self) -> char {
        match self {
            Self::Open => '(',
            Self::Closed => '[',
        }
    }

    const fn upper_char(self) -> char {
        match self {
            Self::Open => ')',
            Self::Closed => ']',
        }
    }
}

/// One end of a bounded range side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    /// The endpoint value.
    pub value: i32,
    /// Whether `value` itself belongs to the range.
    pub bound_type: BoundType,
}

impl Endpoint {
    /// An endpoint that excludes `value`.
    #[must_use]
    pub const fn open(value: i32) -> Self {
        Self {
            value,
            bound_type: BoundType::Open,
        }
    }

    /// An endpoint that includes `value`.
    #[must_use]
    pub const fn closed(value: i32) -> Self {
        Self {
            value,
            bound_type: BoundType::Closed,
        }
    }

    /// Converts to a [`std::ops::Bound`].
    #[must_use]
    pub const fn bound(self) -> Bound<i32> {
        match self.bound_type {
            BoundType::Open => Bound::Excluded(self.value),
            BoundType::Closed => Bound::Included(self.value),
        }
    }
}

/// An integer range as transcoded to and from range notation.
///
/// No ordering is enforced between the endpoints; the server rejects
/// inverted ranges itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IntRange {
    /// The `empty` range: no value is contained.
    Empty,
    /// A range with optional endpoints; `None` means unbounded.
    Span {
        lower: Option<Endpoint>,
        upper: Option<Endpoint>,
    },
}

impl IntRange {
    /// Creates a range from optional endpoints.
    #[must_use]
    pub const fn new(lower: Option<Endpoint>, upper: Option<Endpoint>) -> Self {
        Self::Span { lower, upper }
    }

    /// The range unbounded on both sides, `(,)`.
    #[must_use]
    pub const fn all() -> Self {
        Self::new(None, None)
    }

    /// The `empty` range.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// `[lower,upper)`
    #[must_use]
    pub const fn closed_open(lower: i32, upper: i32) -> Self {
        Self::new(Some(Endpoint::closed(lower)), Some(Endpoint::open(upper)))
    }

    /// `[lower,upper]`
    #[must_use]
    pub const fn closed(lower: i32, upper: i32) -> Self {
        Self::new(Some(Endpoint::closed(lower)), Some(Endpoint::closed(upper)))
    }

    /// `[lower,)`
    #[must_use]
    pub const fn at_least(lower: i32) -> Self {
        Self::new(Some(Endpoint::closed(lower)), None)
    }

    /// `(,upper)`
    #[must_use]
    pub const fn less_than(upper: i32) -> Self {
        Self::new(None, Some(Endpoint::open(upper)))
    }

    /// Returns the lower endpoint, if bounded below.
    #[must_use]
    pub const fn lower(&self) -> Option<Endpoint> {
        match self {
            Self::Empty => None,
            Self::Span { lower, .. } => *lower,
        }
    }

    /// Returns the upper endpoint, if bounded above.
    #[must_use]
    pub const fn upper(&self) -> Option<Endpoint> {
        match self {
            Self::Empty => None,
            Self::Span { upper, .. } => *upper,
        }
    }

    /// Returns true for the `empty` range.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true for the range unbounded on both sides.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(
            self,
            Self::Span {
                lower: None,
                upper: None
            }
        )
    }

    /// Returns true if both ends are present, lower included and upper
    /// excluded (the canonical form the server uses for discrete ranges).
    #[must_use]
    pub const fn is_closed_open(&self) -> bool {
        matches!(
            self,
            Self::Span {
                lower: Some(Endpoint {
                    bound_type: BoundType::Closed,
                    ..
                }),
                upper: Some(Endpoint {
                    bound_type: BoundType::Open,
                    ..
                }),
            }
        )
    }

    /// Returns the bracket pair, e.g. `"[)"`.
    ///
    /// An unbounded side is reported as open.
    #[must_use]
    pub fn exclusivity(&self) -> String {
        let lower = self.lower().map_or('(', |e| e.bound_type.lower_char());
        let upper = self.upper().map_or(')', |e| e.bound_type.upper_char());
        [lower, upper].iter().collect()
    }

    /// Returns the endpoints as [`std::ops::Bound`]s, or `None` for `empty`.
    #[must_use]
    pub fn bounds(&self) -> Option<(Bound<i32>, Bound<i32>)> {
        match self {
            Self::Empty => None,
            Self::Span { lower, upper } => Some((
                lower.map_or(Bound::Unbounded, Endpoint::bound),
                upper.map_or(Bound::Unbounded, Endpoint::bound),
            )),
        }
    }
}

impl Default for IntRange {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lower, upper) = match self {
            Self::Empty => return f.write_str("empty"),
            Self::Span { lower, upper } => (lower, upper),
        };

        f.write_char(lower.map_or('(', |e| e.bound_type.lower_char()))?;
        if let Some(e) = lower {
            write!(f, "{}", e.value)?;
        }
        f.write_char(',')?;
        if let Some(e) = upper {
            write!(f, "{}", e.value)?;
        }
        f.write_char(upper.map_or(')', |e| e.bound_type.upper_char()))
    }
}

impl FromStr for IntRange {
    type Err = PgWriterError;

    fn from_str(s: &str) -> Result<Self> {
        parse_range(s)
    }
}

fn malformed(input: &str, reason: impl Into<String>) -> PgWriterError {
    let err = PgWriterError::malformed_range(input, reason);
    debug!(error = %err, "rejected range literal");
    err
}

fn parse_endpoint(
    input: &str,
    raw: &str,
    bound_type: BoundType,
    side: &str,
) -> Result<Option<Endpoint>> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i32>()
        .map(|value| Some(Endpoint { value, bound_type }))
        .map_err(|e| malformed(input, format!("invalid {side} bound '{raw}': {e}")))
}

/// Parses range notation such as `[1,10)`, `(,5]` or `empty`.
///
/// # Errors
///
/// Returns [`PgWriterError::MalformedRange`] if the brackets are missing or
/// unknown, there is no `,`, or a present endpoint is not an `i32`.
pub fn parse_range(text: &str) -> Result<IntRange> {
    if text.eq_ignore_ascii_case("empty") {
        return Ok(IntRange::Empty);
    }

    let bytes = text.as_bytes();
    let lower_type = match bytes.first() {
        Some(b'(') => BoundType::Open,
        Some(b'[') => BoundType::Closed,
        _ => return Err(malformed(text, "invalid lower bound type")),
    };
    let upper_type = match bytes.last() {
        Some(b')') if bytes.len() > 1 => BoundType::Open,
        Some(b']') if bytes.len() > 1 => BoundType::Closed,
        _ => return Err(malformed(text, "invalid upper bound type")),
    };

    let inner = &text[1..text.len() - 1];
    let Some((lower, upper)) = inner.split_once(',') else {
        return Err(malformed(text, "missing ',' between bounds"));
    };

    Ok(IntRange::Span {
        lower: parse_endpoint(text, lower, lower_type, "lower")?,
        upper: parse_endpoint(text, upper, upper_type, "upper")?,
    })
}

/// Formats a range in range notation.
///
/// An absent range formats as `(,)`, the fully unbounded range.
#[must_use]
pub fn format_range(range: Option<&IntRange>) -> String {
    range.map_or_else(|| String::from("(,)"), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_closed_open() {
        let range = parse_range("[1,10)").unwrap();
        assert_eq!(range.lower(), Some(Endpoint::closed(1)));
        assert_eq!(range.upper(), Some(Endpoint::open(10)));
    }

    #[test]
    fn test_parse_unbounded_below() {
        let range = parse_range("(,5]").unwrap();
        assert_eq!(range.lower(), None);
        assert_eq!(range.upper(), Some(Endpoint::closed(5)));
    }

    #[test]
    fn test_parse_empty_token() {
        assert_eq!(parse_range("empty").unwrap(), IntRange::Empty);
        assert_eq!(parse_range("EMPTY").unwrap(), IntRange::Empty);
        assert_ne!(parse_range("empty").unwrap(), parse_range("(,)").unwrap());
    }

    #[test]
    fn test_parse_signed() {
        assert_eq!(
            parse_range("[-5,+5]").unwrap(),
            IntRange::closed(-5, 5)
        );
    }

    #[test]
    fn test_parse_rejects_short_input() {
        assert!(parse_range("").is_err());
        assert!(parse_range("[").is_err());
        assert!(parse_range("(").is_err());
        assert!(parse_range("()").is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(parse_range("[0,2147483648)").is_err());
        assert!(parse_range("[-2147483648,2147483647)").is_ok());
    }

    #[test]
    fn test_format() {
        assert_eq!(format_range(Some(&IntRange::at_least(1))), "[1,)");
        assert_eq!(format_range(Some(&IntRange::less_than(3))), "(,3)");
        assert_eq!(format_range(Some(&IntRange::all())), "(,)");
        assert_eq!(format_range(Some(&IntRange::Empty)), "empty");
        assert_eq!(format_range(None), "(,)");
    }

    #[test]
    fn test_exclusivity() {
        assert_eq!(IntRange::closed_open(1, 2).exclusivity(), "[)");
        assert_eq!(IntRange::closed(1, 2).exclusivity(), "[]");
        assert_eq!(IntRange::less_than(2).exclusivity(), "()");
        assert_eq!(IntRange::Empty.exclusivity(), "()");
    }

    #[test]
    fn test_is_closed_open() {
        assert!(IntRange::closed_open(1, 2).is_closed_open());
        assert!(!IntRange::closed(1, 2).is_closed_open());
        assert!(!IntRange::at_least(1).is_closed_open());
        assert!(!IntRange::Empty.is_closed_open());
    }

    #[test]
    fn test_bounds() {
        assert_eq!(
            IntRange::closed_open(1, 10).bounds(),
            Some((Bound::Included(1), Bound::Excluded(10)))
        );
        assert_eq!(
            IntRange::all().bounds(),
            Some((Bound::Unbounded, Bound::Unbounded))
        );
        assert_eq!(IntRange::Empty.bounds(), None);
    }
}
