//! Subprocess execution with live output relay
//!
//! Both pipes are drained on their own thread so a child that fills its
//! stderr buffer while stdout is being read can never stall.

use crate::args::ArgumentList;
use crate::common::EXECUTABLE;
use crate::error::{JPackageError, JPackageResult};
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Arc;

/// Which pipe a relayed line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Standard output
    Stdout,
    /// Standard error
    Stderr,
}

/// Destination for lines produced by the child process
///
/// Called from two threads at once, one per stream.
pub trait OutputSink: Send + Sync {
    /// Relay one line, without its trailing newline
    fn line(&self, stream: Stream, line: &str);

    /// Print a status message that is not child output
    fn status(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Relays every line verbatim to the process's stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn line(&self, _stream: Stream, line: &str) {
        println!("{}", line);
    }

    fn status(&self, message: &str) {
        println!("{}", message);
    }
}

/// Relays lines to `tracing`: stdout at info, stderr at warn
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn line(&self, stream: Stream, line: &str) {
        match stream {
            Stream::Stdout => tracing::info!(target: "jpackage", "{}", line),
            Stream::Stderr => tracing::warn!(target: "jpackage", "{}", line),
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessResult {
    /// Exit code of the child
    pub exit_code: i32,
    /// Lines relayed from stdout
    pub stdout_lines: usize,
    /// Lines relayed from stderr
    pub stderr_lines: usize,
}

/// Runs a command line to completion, relaying its output
pub struct ProcessRunner {
    sink: Arc<dyn OutputSink>,
    working_dir: Option<PathBuf>,
}

impl ProcessRunner {
    /// Create a runner relaying to stdout
    pub fn new() -> Self {
        Self {
            sink: Arc::new(StdoutSink),
            working_dir: None,
        }
    }

    /// Relay output to `sink`
    pub fn with_sink(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Run the child in `dir` instead of the inherited working directory
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Sink lines are relayed to
    pub fn sink(&self) -> &Arc<dyn OutputSink> {
        &self.sink
    }

    /// Spawn `argv`, relay its output and wait for it to exit
    pub fn run(&self, argv: &ArgumentList) -> JPackageResult<ProcessResult> {
        let program = argv
            .program()
            .ok_or_else(|| JPackageError::Config("empty command line".to_string()))?;

        tracing::debug!("Running: {}", argv);

        let mut cmd = Command::new(program);
        cmd.args(argv.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn()?;
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let sink = self.sink.as_ref();

        let (stdout_lines, stderr_lines) = std::thread::scope(|scope| {
            let out = scope.spawn(move || relay(stdout, Stream::Stdout, sink));
            let err = scope.spawn(move || relay(stderr, Stream::Stderr, sink));
            (join(out), join(err))
        });

        let status = child.wait()?;
        let (stdout_lines, stderr_lines) = (stdout_lines?, stderr_lines?);

        let exit_code = status.code().unwrap_or(-1);
        if !status.success() {
            return Err(JPackageError::Execution {
                executable: EXECUTABLE.to_string(),
                code: exit_code,
            });
        }

        tracing::debug!(
            "{} exited with {} ({} stdout lines, {} stderr lines)",
            program,
            exit_code,
            stdout_lines,
            stderr_lines
        );

        Ok(ProcessResult {
            exit_code,
            stdout_lines,
            stderr_lines,
        })
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn relay<R: Read>(
    pipe: Option<R>,
    stream: Stream,
    sink: &dyn OutputSink,
) -> std::io::Result<usize> {
    let Some(pipe) = pipe else {
        return Ok(0);
    };

    let mut reader = BufReader::new(pipe);
    let mut buf = Vec::new();
    let mut count = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        sink.line(stream, strip_terminator(&line));
        count += 1;
    }
    Ok(count)
}

/// Drop one `\n` and at most one `\r` before it
fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn join(
    handle: std::thread::ScopedJoinHandle<'_, std::io::Result<usize>>,
) -> std::io::Result<usize> {
    handle
        .join()
        .map_err(|_| std::io::Error::other("output relay thread panicked"))?
}
