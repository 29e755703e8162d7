#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::error::ParseFieldError;

/// Represents segment orientation/strand
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum Orientation {
    Forward,
    Backward,
}

impl Orientation {
    /// Parse an orientation from a print_graph strand token, where
    /// "0" is Forward and any other token is Backward. Only "0" and
    /// "1" are emitted in practice.
    #[inline]
    pub fn from_strand_flag<T: AsRef<[u8]>>(bs: T) -> Option<Self> {
        match bs.as_ref() {
            b"" => None,
            b"0" => Some(Orientation::Forward),
            _ => Some(Orientation::Backward),
        }
    }

    #[inline]
    pub fn parse_error(opt: Option<Self>) -> Result<Self, ParseFieldError> {
        opt.ok_or(ParseFieldError::OrientationError)
    }

    #[inline]
    pub fn plus_minus_as_byte(&self) -> u8 {
        match self {
            Self::Forward => b'+',
            Self::Backward => b'-',
        }
    }

    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    #[inline]
    pub fn is_reverse(&self) -> bool {
        !bool::from(*self)
    }
}

/// Forward is true, backward is false
impl From<Orientation> for bool {
    #[inline]
    fn from(o: Orientation) -> bool {
        match o {
            Orientation::Forward => true,
            Orientation::Backward => false,
        }
    }
}

/// Display uses the GFA link strand symbols, mapping `Forward` to
/// "+" and `Backward` to "-".
///
/// # Examples
///
/// ```
/// use idba_gfa::gfa::Orientation as O;
///
/// assert_eq!(&format!("{}", O::Forward), "+");
/// assert_eq!(&format!("{}", O::Backward), "-");
/// ```
impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(self.plus_minus_as_byte()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strand_flags() {
        use Orientation::*;
        assert_eq!(Orientation::from_strand_flag(b"0"), Some(Forward));
        assert_eq!(Orientation::from_strand_flag(b"1"), Some(Backward));
        assert_eq!(Orientation::from_strand_flag(b"7"), Some(Backward));
        assert_eq!(Orientation::from_strand_flag(b""), None);
    }

    #[test]
    fn flip_and_errors() {
        use Orientation::*;
        assert_eq!(Forward.flip(), Backward);
        assert_eq!(Backward.flip().flip(), Backward);
        assert!(Backward.is_reverse());
        assert!(Orientation::parse_error(None).is_err());
    }
}
