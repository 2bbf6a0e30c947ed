use std::{fmt::{self, Display, Formatter}, num::ParseFloatError, str::FromStr};

use thiserror::Error;

use super::{Mat22, index::LEN};

/// Default width of each printed element
const FIELD_WIDTH: usize = 8;

/// Error generated when parsing a [Mat22] from text
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseMatError {
    #[error("Too few values for a 2x2 matrix (found: {found}, expected: 4)")]
    TooFewValues {
        found: usize,
    },
    #[error("Too many values for a 2x2 matrix (expected: 4)")]
    TooManyValues,
    #[error("Invalid value at position {index}")]
    InvalidValue {
        index: usize,
        #[source]
        source: ParseFloatError,
    },
}

fn write_field(f: &mut Formatter<'_>, value: f32) -> fmt::Result {
    let width = f.width().unwrap_or(FIELD_WIDTH);
    match f.precision() {
        Some(precision) => write!(f, "{:>width$.precision$}", value),
        None => write!(f, "{:>width$}", value),
    }
}

/// Writes one row per line, elements right-aligned:
///
/// ```text
///        1,        2
///        3,        4
/// ```
///
/// The formatter's width and precision apply to every element.
impl Display for Mat22 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write_field(f, row.x)?;
            f.write_str(", ")?;
            write_field(f, row.y)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl Mat22 {
    /// Parse four numbers in row-major order, separated by commas and/or whitespace.
    ///
    /// Anything printed by the [Display] impl is accepted.
    pub fn parse(text: &str) -> Result<Self, ParseMatError> {
        let mut values = [0f32; LEN];
        let mut found = 0;

        let tokens = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty());

        for (index, token) in tokens.enumerate() {
            if index >= LEN {
                return Err(ParseMatError::TooManyValues);
            }
            values[index] = token.parse()
                .map_err(|source| ParseMatError::InvalidValue { index, source })?;
            found += 1;
        }

        if found < LEN {
            log::trace!("Matrix text had {found} values: {text:?}");
            return Err(ParseMatError::TooFewValues { found });
        }

        Ok(Self::from(values))
    }
}

impl FromStr for Mat22 {
    type Err = ParseMatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod test {
    use super::{Mat22, ParseMatError};

    #[test]
    fn display_layout() {
        let m = Mat22::new(1., 2., 3., 4.);
        assert_eq!(m.to_string(), "       1,        2\n       3,        4\n");
    }

    #[test]
    fn display_precision() {
        let m = Mat22::new(0.5, -0.25, 3., 4.);
        assert_eq!(format!("{:.2}", m), "    0.50,    -0.25\n    3.00,     4.00\n");
        assert_eq!(format!("{:4}", m), " 0.5, -0.25\n   3,    4\n");
    }

    #[test]
    fn round_trip() {
        let m = Mat22::new(1., 2., 3., 4.);
        let parsed: Mat22 = m.to_string().parse().unwrap();
        assert_eq!(parsed, m);

        let m = Mat22::new(0.6, -0.7, -1e-7, 12345.678);
        assert_eq!(Mat22::parse(&m.to_string()), Ok(m));
    }

    #[test]
    fn round_trip_non_finite() {
        let m = Mat22::new(f32::INFINITY, f32::NEG_INFINITY, 0., -0.);
        assert_eq!(Mat22::parse(&m.to_string()), Ok(m));

        let nan = Mat22::parse(&Mat22::new(f32::NAN, 1., 2., 3.).to_string()).unwrap();
        assert!(nan.a.is_nan());
    }

    #[test]
    fn parse_loose_separators() {
        assert_eq!(Mat22::parse("1 2 3 4"), Ok(Mat22::new(1., 2., 3., 4.)));
        assert_eq!(Mat22::parse("1,2,\n3,4"), Ok(Mat22::new(1., 2., 3., 4.)));
        assert_eq!(Mat22::parse("  1.5, -2\t3e2 ,, 4  "), Ok(Mat22::new(1.5, -2., 300., 4.)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Mat22::parse(""), Err(ParseMatError::TooFewValues { found: 0 }));
        assert_eq!(Mat22::parse("1, 2, 3"), Err(ParseMatError::TooFewValues { found: 3 }));
        assert_eq!(Mat22::parse("1 2 3 4 5"), Err(ParseMatError::TooManyValues));
        assert!(matches!(Mat22::parse("1 2 x 4"), Err(ParseMatError::InvalidValue { index: 2, .. })));
    }
}
