use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::common::io_error_msg;
use crate::hash::{ChecksumAlgorithm, digest_file, format_result};
use crate::resolve;

/// Per-run configuration. Built once from CLI input, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ChecksumRequest {
    /// File or directory whose checksums are generated.
    pub target: PathBuf,
    pub algorithm: ChecksumAlgorithm,
    /// Optional `.txt` file receiving one result line per processed file.
    pub output_file: Option<PathBuf>,
    /// Truncate the output file at run start instead of appending.
    pub overwrite: bool,
    pub verbose: bool,
}

impl ChecksumRequest {
    /// Verbose is implied whenever there is no output file to receive the
    /// results; otherwise nothing would be observable at all.
    pub fn effective_verbose(&self) -> bool {
        self.verbose || self.output_file.is_none()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Output file must be a .txt file")]
    OutputNotTxt,

    #[error("Path {0:?} does not exist")]
    TargetNotFound(PathBuf),

    #[error("{0:?} is a directory and cannot be opened as a file")]
    IsADirectory(PathBuf),

    #[error("Error getting file name for {0:?}")]
    FileName(PathBuf),

    // Strip the "(os error N)" noise from user-facing messages
    #[error("{}", io_error_msg(.0))]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Reject output paths whose name does not end in `.txt`.
/// Runs before anything touches the filesystem, so a validation failure can
/// never create or truncate the output file.
pub fn check_output_file_type(path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("txt") => Ok(()),
        _ => Err(GenerateError::OutputNotTxt),
    }
}

/// Destination for formatted result lines.
///
/// With overwrite, the file is truncated exactly once when the sink is
/// opened at run start; every write after that, including the first line,
/// appends. Without overwrite, lines accumulate across runs.
pub struct OutputSink {
    path: Option<PathBuf>,
}

impl OutputSink {
    pub fn open(path: Option<&Path>, overwrite: bool) -> Result<Self> {
        if let Some(p) = path {
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            if overwrite {
                // The single destructive open of the run.
                File::create(p)?;
            }
        }
        Ok(OutputSink {
            path: path.map(Path::to_path_buf),
        })
    }

    /// Append one line, newline-terminated. No-op for a console-only run.
    pub fn write_line(&self, line: &str) -> Result<()> {
        if let Some(p) = &self.path {
            let mut file = OpenOptions::new().create(true).append(true).open(p)?;
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }
}

/// Checksum one file and route the formatted line to the configured sinks.
///
/// A directory reaching this point is fatal for the whole run, not a
/// per-file skip. Prior lines already appended stay on disk.
pub fn process(
    file_path: &Path,
    algorithm: ChecksumAlgorithm,
    sink: &OutputSink,
    verbose: bool,
    out: &mut impl Write,
) -> Result<()> {
    if file_path.is_dir() {
        return Err(GenerateError::IsADirectory(file_path.to_path_buf()));
    }

    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| GenerateError::FileName(file_path.to_path_buf()))?;

    let digest = digest_file(algorithm, file_path)?;
    let line = format_result(algorithm, &digest, file_name);

    sink.write_line(&line)?;
    if verbose {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

/// Run one checksum generation batch.
///
/// Validates the request, resolves the target into its file sequence, then
/// processes each file with the same algorithm, sink and verbosity. Ends
/// with a summary confirmation on the console writer only — never the
/// output file. Errors bubble up for the caller to present; nothing is
/// printed to stderr from here.
pub fn run(request: &ChecksumRequest, out: &mut impl Write) -> Result<()> {
    if let Some(output) = &request.output_file {
        check_output_file_type(output)?;
    }
    if !request.target.exists() {
        return Err(GenerateError::TargetNotFound(request.target.clone()));
    }

    let verbose = request.effective_verbose();
    let files = resolve::resolve(&request.target)?;
    let sink = OutputSink::open(request.output_file.as_deref(), request.overwrite)?;

    for file in &files {
        process(file, request.algorithm, &sink, verbose, out)?;
    }

    if verbose {
        // Blank separator between per-file output and the final message
        writeln!(out)?;
    }
    writeln!(out, "Checksums successfully generated")?;

    Ok(())
}
