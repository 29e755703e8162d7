//! Running IDBA's `print_graph` tool, which prints the connections
//! between contigs to stdout and writes the contig sequences to a
//! FASTA file.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{anyhow, bail, Context, Result};
use bstr::ByteSlice;
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub const DEFAULT_PROGRAM: &str = "print_graph";

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Resolve a program name the way a shell would. A name with more
/// than one path component is checked as given, a bare name is
/// looked up in each `PATH` directory.
pub fn find_executable<P: AsRef<Path>>(program: P) -> Option<PathBuf> {
    let program = program.as_ref();
    if program.components().count() > 1 {
        return is_executable(program).then(|| program.to_path_buf());
    }

    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

/// A located print_graph executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintGraph {
    executable: PathBuf,
    temp_dir: Option<PathBuf>,
}

impl PrintGraph {
    pub fn locate<P: AsRef<Path>>(program: P) -> Result<Self> {
        let program = program.as_ref();
        let executable = find_executable(program).ok_or_else(|| {
            anyhow!("could not find print_graph ({})", program.display())
        })?;
        debug!("Using print_graph at {}", executable.display());
        Ok(PrintGraph {
            executable,
            temp_dir: None,
        })
    }

    /// Directory for the intermediate FASTA file, instead of the
    /// system default.
    pub fn with_temp_dir(mut self, temp_dir: Option<PathBuf>) -> Self {
        self.temp_dir = temp_dir;
        self
    }

    fn temp_file(&self) -> Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("idba_gfa_").suffix(".fasta");
        let file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        };
        file.context("Failed to create temporary FASTA file")
    }

    /// Run `print_graph -k <kmer> --max_length <max_length> <assembly> <temp>`
    /// and capture its output. The temporary FASTA file lives as long
    /// as the returned value.
    pub fn run(
        &self,
        kmer: usize,
        max_length: u64,
        assembly: &Path,
    ) -> Result<PrintGraphOutput> {
        let sequences = self.temp_file()?;

        info!("Running print_graph on {}", assembly.display());
        let output = Command::new(&self.executable)
            .arg("-k")
            .arg(kmer.to_string())
            .arg("--max_length")
            .arg(max_length.to_string())
            .arg(assembly)
            .arg(sequences.path())
            .stdin(Stdio::null())
            .output()
            .with_context(|| {
                format!("Failed to run {}", self.executable.display())
            })?;

        if !output.status.success() {
            let stderr = output.stderr.trim();
            let last_line = stderr.lines().last().unwrap_or(&b""[..]);
            bail!(
                "{} failed ({}): {}",
                self.executable.display(),
                output.status,
                last_line.to_str_lossy()
            );
        }

        debug!("print_graph wrote {} bytes of connections", output.stdout.len());
        Ok(PrintGraphOutput {
            connections: output.stdout,
            sequences,
        })
    }
}

/// Output of a print_graph run. Dropping it removes the intermediate
/// FASTA file.
#[derive(Debug)]
pub struct PrintGraphOutput {
    pub connections: Vec<u8>,
    sequences: NamedTempFile,
}

impl PrintGraphOutput {
    pub fn sequences_path(&self) -> &Path {
        self.sequences.path()
    }
}
