//! The GFA line types produced from an IDBA assembly, and the GFA
//! object tying them together in output order.

pub mod orientation;
pub mod segment_ref;

pub use self::orientation::*;
pub use self::segment_ref::*;

use bstr::BStr;

use crate::{
    connections::AdjacencyMap,
    fasta::{DepthMap, SequenceStore},
    overlap::Overlap,
};

/// A segment in the graph, borrowing its sequence and read depth
/// from the stores it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub id: u64,
    pub sequence: &'a BStr,
    pub depth: Option<&'a BStr>,
}

impl<'a> Segment<'a> {
    pub fn new(id: u64, sequence: &'a BStr) -> Self {
        Segment {
            id,
            sequence,
            depth: None,
        }
    }

    pub fn with_depth(mut self, depth: &'a BStr) -> Self {
        self.depth = Some(depth);
        self
    }
}

/// A link between two oriented segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub from: SignedSegment,
    pub to: SignedSegment,
    pub overlap: Overlap,
}

impl Link {
    pub fn new(from: SignedSegment, to: SignedSegment, overlap: Overlap) -> Self {
        Link { from, to, overlap }
    }
}

/// Enum containing the different kinds of GFA lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Segment(Segment<'a>),
    Link(Link),
}

/// A GFA graph with its segments ordered by ID and its links ordered
/// by source (ID, then forward before reverse) and then by target in
/// signed numeric order.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GFA<'a> {
    pub segments: Vec<Segment<'a>>,
    pub links: Vec<Link>,
}

impl<'a> GFA<'a> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Assemble the graph from loaded sequences and depths and the
    /// resolved links. Every link gets the same overlap.
    pub fn from_parts(
        sequences: &'a SequenceStore,
        depths: &'a DepthMap,
        adjacency: &AdjacencyMap,
        overlap: Overlap,
    ) -> Self {
        let segments = sequences
            .ids()
            .into_iter()
            .filter_map(|id| {
                let segment = Segment::new(id, sequences.get(id)?);
                Some(match depths.get(id) {
                    Some(depth) => segment.with_depth(depth),
                    None => segment,
                })
            })
            .collect();

        let links = adjacency
            .links()
            .map(|(from, to)| Link::new(from, to, overlap))
            .collect();

        GFA { segments, links }
    }

    /// Return an iterator over the lines in the GFA, segments first.
    pub fn lines_iter(&self) -> impl Iterator<Item = Line<'a>> + '_ {
        let segs = self.segments.iter().copied().map(Line::Segment);
        let links = self.links.iter().copied().map(Line::Link);
        segs.chain(links)
    }
}
