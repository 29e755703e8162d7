use std::fs::File;
use std::path::Path;

use bstr::{BStr, BString, ByteSlice};
use fnv::FnvHashMap;
use lazy_static::lazy_static;
use memmap::Mmap;
use regex::bytes::Regex;
use tracing::{debug, warn};

use crate::error::{
    FieldResult, ParseError, ParseFieldError, ParseResult, ParserTolerance,
};
use crate::gfa::parse_segment_id;

/// Extract the segment ID from a FASTA header, i.e. the second
/// `_`-separated field of the text following `>`. The whole line is
/// split, so `>contig_1 length_6` has no valid ID.
pub fn parse_header_id(header: &[u8]) -> FieldResult<u64> {
    let text = header.strip_prefix(b">").unwrap_or(header);
    let field = text
        .split_str("_")
        .nth(1)
        .ok_or(ParseFieldError::MissingFields)?;
    parse_segment_id(field)
}

/// Forward-strand sequences keyed by segment ID.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SequenceStore {
    sequences: FnvHashMap<u64, BString>,
}

impl SequenceStore {
    pub fn new() -> Self {
        Default::default()
    }

    /// Insert a sequence, returning the one it replaced.
    pub fn insert(&mut self, id: u64, sequence: BString) -> Option<BString> {
        self.sequences.insert(id, sequence)
    }

    pub fn get(&self, id: u64) -> Option<&BStr> {
        self.sequences.get(&id).map(|s| s.as_bstr())
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Segment IDs in ascending order.
    pub fn ids(&self) -> Vec<u64> {
        let mut ids: Vec<_> = self.sequences.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Load records from FASTA text. Blank lines are ignored, and a
    /// record's sequence is the concatenation of its trimmed lines.
    pub fn from_bytes(
        input: &[u8],
        tolerance: ParserTolerance,
    ) -> ParseResult<Self> {
        let mut store = SequenceStore::new();
        let mut current: Option<(u64, BString)> = None;
        let mut skipping = false;

        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with(b">") {
                if let Some((id, seq)) = current.take() {
                    store.finish_record(id, seq);
                }
                skipping = false;

                match parse_header_id(line) {
                    Ok(id) => current = Some((id, BString::from(Vec::new()))),
                    Err(field_err) => {
                        let err = ParseError::invalid_line(field_err, line);
                        if !err.can_safely_continue(&tolerance) {
                            return Err(err);
                        }
                        warn!("Skipping FASTA record: {}", err);
                        skipping = true;
                    }
                }
            } else if let Some((_, seq)) = current.as_mut() {
                seq.extend_from_slice(line);
            } else if !skipping {
                debug!("Ignoring sequence line before the first header");
            }
        }

        if let Some((id, seq)) = current.take() {
            store.finish_record(id, seq);
        }

        debug!("Loaded {} sequences", store.len());
        Ok(store)
    }

    /// Load records from a FASTA file on disk.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        tolerance: ParserTolerance,
    ) -> ParseResult<Self> {
        with_mapped_file(path.as_ref(), |bytes| {
            Self::from_bytes(bytes, tolerance)
        })
    }

    fn finish_record(&mut self, id: u64, seq: BString) {
        if self.insert(id, seq).is_some() {
            warn!("Segment {} appears more than once, keeping the last", id);
        }
    }
}

/// Read depths, as raw strings, keyed by segment ID.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct DepthMap {
    depths: FnvHashMap<u64, BString>,
}

/// Depth from the last whitespace-separated token of a header, if
/// that token looks like `<x>_<...count...>_<depth>`.
pub fn parse_depth_token(header: &[u8]) -> Option<&[u8]> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"(?-u)^[^_]*_[^_]*count[^_]*_([^_]*)").unwrap();
    }
    let token = header.fields().last()?;
    RE.captures(token)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_bytes())
}

impl DepthMap {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert(&mut self, id: u64, depth: BString) -> Option<BString> {
        self.depths.insert(id, depth)
    }

    pub fn get(&self, id: u64) -> Option<&BStr> {
        self.depths.get(&id).map(|d| d.as_bstr())
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Collect depth tags from the headers of an IDBA assembly.
    /// Headers without a depth token are skipped silently; a header
    /// with a depth token but no segment ID is an error.
    pub fn from_bytes(input: &[u8]) -> ParseResult<Self> {
        let mut map = DepthMap::new();

        for line in input.lines() {
            if !line.starts_with(b">") {
                continue;
            }
            if let Some(depth) = parse_depth_token(line) {
                let name = line[1..].fields().next().unwrap_or(&b""[..]);
                let id = parse_header_id(name)
                    .map_err(|e| ParseError::invalid_line(e, line))?;
                map.insert(id, BString::from(depth));
            }
        }

        debug!("Loaded {} depths", map.len());
        Ok(map)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> ParseResult<Self> {
        with_mapped_file(path.as_ref(), Self::from_bytes)
    }
}

fn with_mapped_file<T, F>(path: &Path, f: F) -> ParseResult<T>
where
    F: FnOnce(&[u8]) -> ParseResult<T>,
{
    let file = File::open(path)?;
    // zero-length files can't be mapped
    if file.metadata()?.len() == 0 {
        let empty: &[u8] = &[];
        return f(empty);
    }
    let mmap = unsafe { Mmap::map(&file)? };
    f(&mmap[..])
}
