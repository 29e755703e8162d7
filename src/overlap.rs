#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// The overlap between two linked segments, as a number of matched
/// positions. Adjacent contigs of a de Bruijn graph always share
/// k-1 bases, so the overlap is the same for every link in a graph.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Overlap(pub usize);

impl Overlap {
    /// The overlap implied by a k-mer size, i.e. k-1 positions.
    /// Returns None for k = 0.
    #[inline]
    pub fn from_kmer(kmer: usize) -> Option<Self> {
        kmer.checked_sub(1).map(Overlap)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Displays as a single CIGAR match operation, e.g. "99M"
impl std::fmt::Display for Overlap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}M", self.0)
    }
}
