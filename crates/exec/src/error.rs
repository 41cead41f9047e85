// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error taxonomy.

use std::time::Duration;

/// Ways a single external invocation can fail.
///
/// Exactly one invocation produces exactly one of these (or a success). The
/// variants distinguish the abort reasons callers care about: a deadline that
/// was dead on arrival, a launch that never happened, a tool that ran and
/// said no, and the two flavors of forced termination.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The deadline had already passed (or the token was already cancelled)
    /// before the process could be spawned. Nothing was started.
    #[error("`{program}` not started: deadline already passed")]
    AlreadyCancelled { program: String },

    /// The program could not be found or spawned.
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran to completion and exited non-zero.
    #[error("`{program}` exited with code {code}")]
    ExitCode { program: String, code: i32 },

    /// The deadline elapsed while the process was running; it was killed.
    #[error("`{program}` timed out after {elapsed:?} and was killed")]
    Timeout { program: String, elapsed: Duration },

    /// The caller cancelled while the process was running; it was killed.
    #[error("`{program}` cancelled and killed")]
    Cancelled { program: String },

    /// Waiting on the child failed at the OS level.
    #[error("failed waiting for `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl ExecError {
    /// The program this error is about.
    pub fn program(&self) -> &str {
        match self {
            ExecError::AlreadyCancelled { program }
            | ExecError::Spawn { program, .. }
            | ExecError::ExitCode { program, .. }
            | ExecError::Timeout { program, .. }
            | ExecError::Cancelled { program }
            | ExecError::Wait { program, .. } => program,
        }
    }
}
