use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::Parser;

use idba_gfa::convert::ConvertConfig;
use idba_gfa::error::ParserTolerance;
use idba_gfa::print_graph::DEFAULT_PROGRAM;

/// IDBA to GFA: a tool for converting IDBA assemblies to GFA graphs
#[derive(Parser, Debug)]
#[command(author, version, about, after_help = "output: GFA to stdout")]
pub struct CliArgs {
    /// Assembly from IDBA, e.g. scaffold.fa
    pub assembly: PathBuf,

    /// Assembly k-mer size (e.g. 100)
    #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(2..))]
    pub kmer: usize,

    /// Location of IDBA's print_graph tool (required if print_graph is not in PATH)
    #[arg(long = "print_graph", visible_alias = "print-graph", default_value = DEFAULT_PROGRAM)]
    pub print_graph: PathBuf,

    /// Maximum contig length passed to print_graph
    #[arg(long, default_value_t = ConvertConfig::DEFAULT_MAX_LENGTH)]
    pub max_length: u64,

    /// Directory for print_graph's intermediate FASTA file
    #[arg(long)]
    pub temp_dir: Option<PathBuf>,

    /// Skip FASTA records whose header has no segment ID instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Write the GFA to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    pub fn convert_config(&self) -> ConvertConfig {
        let mut config =
            ConvertConfig::new(self.assembly.clone(), self.kmer);
        config.print_graph = self.print_graph.clone();
        config.max_length = self.max_length;
        config.temp_dir = self.temp_dir.clone();
        config.tolerance = if self.skip_malformed {
            ParserTolerance::Safe
        } else {
            ParserTolerance::Pedantic
        };
        config
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
