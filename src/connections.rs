use std::borrow::Cow;
use std::collections::BTreeSet;

use bstr::ByteSlice;
use fnv::FnvHashMap;
use nom::{
    bytes::complete::take_till, character::complete::char,
    sequence::separated_pair, IResult,
};
use tracing::debug;

use crate::error::{FieldResult, ParseFieldError, ResolveError};
use crate::fasta::SequenceStore;
use crate::gfa::{parse_segment_id, Orientation, SignedSegment};
use crate::overlap::Overlap;
use crate::seq::reverse_complement;

/// print_graph prints each connection as two `<id>_<strand>_...`
/// fields separated by a single space, with six underscores in
/// total. Anything else in its output is not a connection.
pub fn is_hint_line(line: &[u8]) -> bool {
    let spaces = line.iter().filter(|&&b| b == b' ').count();
    let underscores = line.iter().filter(|&&b| b == b'_').count();
    spaces == 1 && underscores == 6 && line.fields().count() == 2
}

/// Lazily yields the lines of print_graph output that have the shape
/// of a connection hint.
pub fn hint_lines(text: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    text.lines().filter(|line| is_hint_line(line))
}

/// Lazily parses the connection hints in print_graph output. Lines
/// that don't look like hints are skipped; lines that do but fail
/// to parse produce an error.
pub fn connection_hints(
    text: &[u8],
) -> impl Iterator<Item = Result<ConnectionHint, ResolveError>> + '_ {
    hint_lines(text).map(|line| {
        ConnectionHint::parse(line)
            .map_err(|err| ResolveError::invalid_hint(err, line))
    })
}

fn hint_side(input: &[u8]) -> IResult<&[u8], (&[u8], &[u8])> {
    separated_pair(
        take_till(|c: u8| c == b'_'),
        char('_'),
        take_till(|c: u8| c == b'_'),
    )(input)
}

fn parse_side(input: &[u8]) -> FieldResult<SignedSegment> {
    let (_, (id, strand)) =
        hint_side(input).map_err(|_| ParseFieldError::MissingFields)?;
    let id = parse_segment_id(id)?;
    let orient =
        Orientation::parse_error(Orientation::from_strand_flag(strand))?;
    Ok(SignedSegment::new(id, orient))
}

/// A candidate adjacency between two oriented segments, as printed
/// by print_graph. The direction of the link is not known until the
/// sequences are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionHint {
    pub first: SignedSegment,
    pub second: SignedSegment,
}

impl ConnectionHint {
    pub fn parse(line: &[u8]) -> FieldResult<Self> {
        let mut fields = line.fields();
        let (first, second) =
            match (fields.next(), fields.next(), fields.next()) {
                (Some(a), Some(b), None) => (a, b),
                _ => return Err(ParseFieldError::MissingFields),
            };
        Ok(ConnectionHint {
            first: parse_side(first)?,
            second: parse_side(second)?,
        })
    }
}

#[inline]
fn prefix(seq: &[u8], len: usize) -> &[u8] {
    &seq[..len.min(seq.len())]
}

#[inline]
fn suffix(seq: &[u8], len: usize) -> &[u8] {
    &seq[seq.len().saturating_sub(len)..]
}

fn oriented_sequence(
    sequences: &SequenceStore,
    seg: SignedSegment,
) -> Result<Cow<'_, [u8]>, ResolveError> {
    let seq = sequences
        .get(seg.id)
        .ok_or(ResolveError::UnknownSegment(seg.id))?;
    if seg.is_reverse() {
        Ok(Cow::Owned(reverse_complement(seq)))
    } else {
        Ok(Cow::Borrowed(seq.as_bytes()))
    }
}

/// Links of a bidirected graph, from each oriented segment to the
/// set of oriented segments that follow it. Every link `a -> b` is
/// stored together with its mirror `-b -> -a`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMap {
    edges: FnvHashMap<SignedSegment, BTreeSet<SignedSegment>>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Default::default()
    }

    fn insert_edge(&mut self, from: SignedSegment, to: SignedSegment) {
        self.edges.entry(from).or_insert_with(BTreeSet::new).insert(to);
    }

    /// Add the link `from -> to` and its mirror.
    pub fn add_link(&mut self, from: SignedSegment, to: SignedSegment) {
        self.insert_edge(from, to);
        self.insert_edge(to.flip(), from.flip());
    }

    pub fn contains(&self, from: SignedSegment, to: SignedSegment) -> bool {
        self.edges.get(&from).map_or(false, |tos| tos.contains(&to))
    }

    /// The segments `from` links to, in signed numeric order.
    pub fn targets(
        &self,
        from: SignedSegment,
    ) -> impl Iterator<Item = SignedSegment> + '_ {
        self.edges.get(&from).into_iter().flat_map(|tos| tos.iter().copied())
    }

    /// Segments with outgoing links, ordered by ID with the forward
    /// strand first.
    pub fn sources(&self) -> Vec<SignedSegment> {
        let mut sources: Vec<_> = self.edges.keys().copied().collect();
        sources.sort_unstable_by_key(|s| s.source_key());
        sources
    }

    /// All links in output order.
    pub fn links(
        &self,
    ) -> impl Iterator<Item = (SignedSegment, SignedSegment)> + '_ {
        self.sources()
            .into_iter()
            .flat_map(move |from| self.targets(from).map(move |to| (from, to)))
    }

    pub fn link_count(&self) -> usize {
        self.edges.values().map(|tos| tos.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether every link's mirror is also present.
    pub fn is_mirror_closed(&self) -> bool {
        self.edges.iter().all(|(&from, tos)| {
            tos.iter().all(|&to| self.contains(to.flip(), from.flip()))
        })
    }

    /// Compare the oriented sequences of a hint and record the links
    /// they support. The last `overlap` bases of one side must equal
    /// the first `overlap` bases of the other; both directions are
    /// checked independently and may both hold. Sequences shorter
    /// than the overlap are compared whole.
    pub fn add_hint(
        &mut self,
        hint: &ConnectionHint,
        sequences: &SequenceStore,
        overlap: Overlap,
    ) -> Result<(), ResolveError> {
        let k_1 = overlap.len();
        let first_seq = oriented_sequence(sequences, hint.first)?;
        let second_seq = oriented_sequence(sequences, hint.second)?;

        let one_to_two = suffix(&first_seq, k_1) == prefix(&second_seq, k_1);
        let two_to_one = suffix(&second_seq, k_1) == prefix(&first_seq, k_1);

        if one_to_two {
            self.add_link(hint.first, hint.second);
        }
        if two_to_one {
            self.add_link(hint.second, hint.first);
        }
        Ok(())
    }
}

/// Build the adjacency map from print_graph's output.
pub fn resolve_connections(
    text: &[u8],
    sequences: &SequenceStore,
    kmer: usize,
) -> Result<AdjacencyMap, ResolveError> {
    let overlap = match Overlap::from_kmer(kmer) {
        Some(o) if !o.is_empty() => o,
        _ => return Err(ResolveError::InvalidKmer(kmer)),
    };

    let mut adjacency = AdjacencyMap::new();
    let mut hint_count = 0;
    for hint in connection_hints(text) {
        adjacency.add_hint(&hint?, sequences, overlap)?;
        hint_count += 1;
    }

    debug!(
        "Resolved {} connection hints into {} links",
        hint_count,
        adjacency.link_count()
    );
    Ok(adjacency)
}
