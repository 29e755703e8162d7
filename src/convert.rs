use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::{
    connections::{resolve_connections, AdjacencyMap},
    error::{ParserTolerance, ResolveError},
    fasta::{DepthMap, SequenceStore},
    gfa::GFA,
    overlap::Overlap,
    print_graph::{PrintGraph, DEFAULT_PROGRAM},
    writer::write_gfa,
};

/// Settings for converting one IDBA assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub assembly: PathBuf,
    pub kmer: usize,
    pub print_graph: PathBuf,
    pub max_length: u64,
    pub temp_dir: Option<PathBuf>,
    pub tolerance: ParserTolerance,
}

impl ConvertConfig {
    /// print_graph only prints contigs up to this length
    pub const DEFAULT_MAX_LENGTH: u64 = 1_000_000_000;

    pub fn new<P: Into<PathBuf>>(assembly: P, kmer: usize) -> Self {
        ConvertConfig {
            assembly: assembly.into(),
            kmer,
            print_graph: PathBuf::from(DEFAULT_PROGRAM),
            max_length: Self::DEFAULT_MAX_LENGTH,
            temp_dir: None,
            tolerance: ParserTolerance::default(),
        }
    }
}

/// A fully resolved graph, ready to be written.
#[derive(Debug, Clone)]
pub struct Conversion {
    sequences: SequenceStore,
    depths: DepthMap,
    adjacency: AdjacencyMap,
    overlap: Overlap,
}

impl Conversion {
    /// Resolve print_graph's connection output against the loaded
    /// sequences.
    pub fn from_parts(
        connections: &[u8],
        sequences: SequenceStore,
        depths: DepthMap,
        kmer: usize,
    ) -> Result<Self, ResolveError> {
        let adjacency = resolve_connections(connections, &sequences, kmer)?;
        let overlap =
            Overlap::from_kmer(kmer).ok_or(ResolveError::InvalidKmer(kmer))?;
        Ok(Conversion {
            sequences,
            depths,
            adjacency,
            overlap,
        })
    }

    pub fn sequences(&self) -> &SequenceStore {
        &self.sequences
    }

    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    pub fn gfa(&self) -> GFA<'_> {
        GFA::from_parts(
            &self.sequences,
            &self.depths,
            &self.adjacency,
            self.overlap,
        )
    }

    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_gfa(&self.gfa(), out)?;
        out.flush()
    }
}

/// Run print_graph on the assembly and resolve its output. Nothing is
/// written until the caller writes the returned conversion, so a
/// failure never leaves partial output behind.
pub fn convert(config: &ConvertConfig) -> Result<Conversion> {
    if config.kmer < 2 {
        bail!("k-mer size must be at least 2, got {}", config.kmer);
    }
    if !config.assembly.is_file() {
        bail!("assembly file {} not found", config.assembly.display());
    }

    let print_graph = PrintGraph::locate(&config.print_graph)?
        .with_temp_dir(config.temp_dir.clone());
    let output =
        print_graph.run(config.kmer, config.max_length, &config.assembly)?;

    let depths = DepthMap::from_path(&config.assembly).with_context(|| {
        format!("Failed to read depths from {}", config.assembly.display())
    })?;
    let sequences =
        SequenceStore::from_path(output.sequences_path(), config.tolerance)
            .context("Failed to read print_graph sequences")?;
    info!(
        "Loaded {} sequences, {} with depths",
        sequences.len(),
        depths.len()
    );

    let conversion =
        Conversion::from_parts(&output.connections, sequences, depths, config.kmer)
            .context("Failed to resolve print_graph connections")?;
    info!(
        "Resolved {} links between {} segments",
        conversion.adjacency.link_count(),
        conversion.sequences.len()
    );
    Ok(conversion)
}
