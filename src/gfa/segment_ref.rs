use std::cmp::Ordering;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use bstr::ByteSlice;

use super::Orientation;
use crate::error::{FieldResult, ParseFieldError};

/// Parse a segment ID field. IDs are positive, so that every oriented
/// reference has a distinct signed form.
pub fn parse_segment_id(field: &[u8]) -> FieldResult<u64> {
    match field.to_str()?.parse::<u64>()? {
        0 => Err(ParseFieldError::ZeroId),
        id => Ok(id),
    }
}

/// An oriented reference to a segment, i.e. a node side in the
/// bidirected graph. Equivalent to a signed segment ID where the sign
/// carries the strand, but keeps segment 0 distinct from its reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct SignedSegment {
    pub id: u64,
    pub orient: Orientation,
}

impl SignedSegment {
    #[inline]
    pub fn new(id: u64, orient: Orientation) -> Self {
        SignedSegment { id, orient }
    }

    #[inline]
    pub fn forward(id: u64) -> Self {
        Self::new(id, Orientation::Forward)
    }

    #[inline]
    pub fn backward(id: u64) -> Self {
        Self::new(id, Orientation::Backward)
    }

    /// The same segment on the opposite strand.
    #[inline]
    pub fn flip(self) -> Self {
        Self::new(self.id, self.orient.flip())
    }

    #[inline]
    pub fn is_reverse(&self) -> bool {
        self.orient.is_reverse()
    }

    /// Sort key for link sources: by ID, with the forward strand
    /// before the reverse strand.
    #[inline]
    pub fn source_key(&self) -> (u64, Orientation) {
        (self.id, self.orient)
    }
}

/// Orders as the equivalent signed integers would: reverse strands
/// first by descending ID, then forward strands by ascending ID.
impl Ord for SignedSegment {
    fn cmp(&self, other: &Self) -> Ordering {
        use Orientation::*;
        match (self.orient, other.orient) {
            (Backward, Forward) => Ordering::Less,
            (Forward, Backward) => Ordering::Greater,
            (Forward, Forward) => self.id.cmp(&other.id),
            (Backward, Backward) => other.id.cmp(&self.id),
        }
    }
}

impl PartialOrd for SignedSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Displays as a signed integer, e.g. "12" or "-12"
impl std::fmt::Display for SignedSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_reverse() {
            write!(f, "-{}", self.id)
        } else {
            write!(f, "{}", self.id)
        }
    }
}
