use std::{error, fmt};

use bstr::ByteSlice;

pub type FieldResult<T> = Result<T, ParseFieldError>;
pub type ParseResult<T> = Result<T, ParseError>;

/// How the FASTA loader treats records whose header does not carry a
/// segment ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserTolerance {
    /// Skip the malformed record and keep loading.
    Safe,
    /// Abort on the first malformed record.
    Pedantic,
}

impl Default for ParserTolerance {
    fn default() -> Self {
        Self::Pedantic
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFieldError {
    /// A segment ID couldn't be parsed as a u64.
    UintIdError,
    /// A bytestring couldn't be parsed as a bytestring, can happen
    /// when the contents aren't UTF8.
    Utf8Error,
    /// Segment IDs start at 1; 0 has no signed form.
    ZeroId,
    /// A strand token was missing or empty.
    OrientationError,
    MissingFields,
}

macro_rules! impl_many_from {
    ($to:ty, ($from:ty, $out:expr)) => (
        impl From<$from> for $to {
            fn from(_: $from) -> Self {
                $out
            }
        }
    );
    ($to:ty, ($from:ty, $out:expr), $(($f:ty, $o:expr)),* $(,)?) => (
        impl_many_from!($to, ($from, $out));
        impl_many_from!($to, $(($f, $o)),*);
    );
}

impl_many_from!(
    ParseFieldError,
    (bstr::Utf8Error, ParseFieldError::Utf8Error),
    (std::num::ParseIntError, ParseFieldError::UintIdError),
);

impl fmt::Display for ParseFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseFieldError as PFE;
        match self {
            PFE::UintIdError => {
                write!(f, "Failed to parse a segment ID as an unsigned integer")
            }
            PFE::Utf8Error => {
                write!(f, "Failed to parse a bytestring as a UTF-8 string")
            }
            PFE::ZeroId => write!(f, "Segment ID 0 is not allowed"),
            PFE::OrientationError => {
                write!(f, "Failed to parse a strand flag")
            }
            PFE::MissingFields => write!(f, "Line is missing required fields"),
        }
    }
}

impl error::Error for ParseFieldError {}

/// Errors raised while loading FASTA records
#[derive(Debug)]
pub enum ParseError {
    /// A line couldn't be parsed. Includes the problem line and a
    /// variant describing the error.
    InvalidLine(ParseFieldError, String),
    /// Wrapper for an IO error.
    IOError(std::io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseError as PE;
        match self {
            PE::InvalidLine(field_err, line) => {
                write!(f, "Failed to parse line {}, error: {}", line, field_err)
            }
            PE::IOError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl From<std::io::Error> for ParseError {
    #[inline]
    fn from(err: std::io::Error) -> Self {
        Self::IOError(err)
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ParseError::InvalidLine(err, _) => Some(err),
            ParseError::IOError(err) => Some(err),
        }
    }
}

impl ParseError {
    #[inline]
    pub(crate) fn invalid_line(error: ParseFieldError, line: &[u8]) -> Self {
        let mut dest = String::new();
        line.to_str_lossy_into(&mut dest);
        Self::InvalidLine(error, dest)
    }

    /// Whether the loader may skip the offending record and continue.
    #[inline]
    pub fn can_safely_continue(&self, tol: &ParserTolerance) -> bool {
        match tol {
            ParserTolerance::Safe => {
                matches!(self, ParseError::InvalidLine(..))
            }
            ParserTolerance::Pedantic => false,
        }
    }
}

/// Errors raised while turning connection hints into links
#[derive(Debug)]
pub enum ResolveError {
    /// A line passed the hint filter but one of its fields couldn't
    /// be parsed.
    InvalidHint(ParseFieldError, String),
    /// A hint referred to a segment ID with no sequence.
    UnknownSegment(u64),
    /// The k-mer size leaves no overlap to compare.
    InvalidKmer(usize),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::InvalidHint(field_err, line) => write!(
                f,
                "Failed to parse connection line {}, error: {}",
                line, field_err
            ),
            ResolveError::UnknownSegment(id) => {
                write!(f, "Connection refers to unknown segment {}", id)
            }
            ResolveError::InvalidKmer(k) => {
                write!(f, "k-mer size must be at least 2, got {}", k)
            }
        }
    }
}

impl error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ResolveError::InvalidHint(err, _) => Some(err),
            ResolveError::UnknownSegment(_) | ResolveError::InvalidKmer(_) => {
                None
            }
        }
    }
}

impl ResolveError {
    #[inline]
    pub(crate) fn invalid_hint(error: ParseFieldError, line: &[u8]) -> Self {
        let mut dest = String::new();
        line.to_str_lossy_into(&mut dest);
        Self::InvalidHint(error, dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_decides_continuation() {
        let err = ParseError::invalid_line(
            ParseFieldError::MissingFields,
            b">contig",
        );
        assert!(err.can_safely_continue(&ParserTolerance::Safe));
        assert!(!err.can_safely_continue(&ParserTolerance::Pedantic));

        let io_err: ParseError =
            std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(!io_err.can_safely_continue(&ParserTolerance::Safe));
    }

    #[test]
    fn messages_name_the_line() {
        let err = ParseError::invalid_line(
            ParseFieldError::UintIdError,
            b">contig_x",
        );
        assert_eq!(
            err.to_string(),
            "Failed to parse line >contig_x, error: Failed to parse a segment ID as an unsigned integer"
        );
        let err = ResolveError::UnknownSegment(12);
        assert_eq!(err.to_string(), "Connection refers to unknown segment 12");
    }

    #[test]
    fn parse_int_errors_convert() {
        let err: ParseFieldError = "x1".parse::<u64>().unwrap_err().into();
        assert_eq!(err, ParseFieldError::UintIdError);
    }
}
