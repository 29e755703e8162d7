//! Convert IDBA assemblies to GFA.
//!
//! IDBA's `print_graph` tool reports which contigs are connected but
//! not how; the direction and strands of each link are recovered by
//! matching the (k-1)-mer at the end of one contig against the start
//! of the other.

pub mod connections;
pub mod convert;
pub mod error;
pub mod fasta;
pub mod gfa;
pub mod overlap;
pub mod print_graph;
pub mod seq;
pub mod writer;
