//! The external solving oracle.
//!
//! The two-phase solver is an opaque collaborator: it takes a 54-character
//! facelet string and answers with a token sequence (or an in-band error
//! marker, which the adapter handles). The [`Oracle`] trait is the narrow
//! seam between the engine and that collaborator, so a subprocess can be
//! swapped for an in-process library without touching anything else.
//!
//! [`CommandOracle`] is the subprocess implementation: it runs a configured
//! executable with the facelet string as the final argument, captures
//! stdout, and enforces an explicit timeout; a solver that hangs is killed
//! and reported as an invocation error.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Invoking the oracle failed before any solution was produced.
///
/// Distinct from an in-band error marker in well-formed output, which the
/// adapter reports as [`SolveError::Reported`](super::adapter::SolveError::Reported).
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("failed to launch solver {program:?}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("solver did not answer within {0:?}")]
    Timeout(Duration),
    #[error("solver exited with {status}: {stderr}")]
    Exit { status: ExitStatus, stderr: String },
    #[error("failed to read solver output: {0}")]
    Output(#[from] std::io::Error),
}

/// The external solving oracle.
///
/// Takes the canonical facelet encoding, returns the raw solution text.
/// Implementations decide how the solver actually runs.
pub trait Oracle {
    fn solve(&self, facelets: &str) -> Result<String, OracleError>;
}

/// Configuration for a subprocess oracle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments placed before the facelet string.
    #[serde(default)]
    pub args: Vec<String>,
    /// How long to wait before killing the solver. `None` waits forever.
    #[serde(default = "OracleConfig::default_timeout")]
    pub timeout: Option<Duration>,
}

impl OracleConfig {
    fn default_timeout() -> Option<Duration> {
        Some(Duration::from_secs(30))
    }

    /// Config for the given program with default arguments and timeout.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: Self::default_timeout(),
        }
    }
}

/// Subprocess oracle: `program [args...] <facelets>`, solution on stdout.
#[derive(Clone, Debug)]
pub struct CommandOracle {
    config: OracleConfig,
}

impl CommandOracle {
    const POLL_INTERVAL: Duration = Duration::from_millis(10);

    #[must_use]
    pub fn new(config: OracleConfig) -> Self {
        Self { config }
    }

    fn wait_with_timeout(
        &self,
        child: &mut std::process::Child,
    ) -> Result<ExitStatus, OracleError> {
        let deadline = self.config.timeout.map(|t| Instant::now() + t);
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(OracleError::Timeout(
                        self.config.timeout.unwrap_or_default(),
                    ));
                }
            }
            std::thread::sleep(Self::POLL_INTERVAL);
        }
    }
}

impl Oracle for CommandOracle {
    fn solve(&self, facelets: &str) -> Result<String, OracleError> {
        debug!(program = ?self.config.program, "invoking external solver");

        let mut child = Command::new(&self.config.program)
            .args(&self.config.args)
            .arg(facelets)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| OracleError::Spawn {
                program: self.config.program.clone(),
                source,
            })?;

        let status = self.wait_with_timeout(&mut child)?;

        // Solver output is tiny (a few dozen tokens), so reading after exit
        // cannot deadlock on a full pipe.
        let mut stdout = String::new();
        if let Some(mut pipe) = child.stdout.take() {
            pipe.read_to_string(&mut stdout)?;
        }

        if !status.success() {
            let mut stderr = String::new();
            if let Some(mut pipe) = child.stderr.take() {
                pipe.read_to_string(&mut stderr)?;
            }
            return Err(OracleError::Exit {
                status,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(stdout.trim().to_string())
    }
}
