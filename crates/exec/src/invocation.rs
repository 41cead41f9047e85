// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single external command invocation.

use std::path::PathBuf;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// One external command: program, arguments, environment overrides, working
/// directory, and the abort controls that travel with it.
///
/// Built fresh for every call and consumed by [`crate::run`]. Has no identity
/// beyond its fields and is never persisted.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub(crate) program: String,
    pub(crate) args: Vec<String>,
    pub(crate) env: Vec<(String, String)>,
    pub(crate) cwd: Option<PathBuf>,
    pub(crate) deadline: Option<Instant>,
    pub(crate) cancel: CancellationToken,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
            cwd: None,
            deadline: None,
            cancel: CancellationToken::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Absolute point in time after which the process is killed.
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Convenience for `deadline(now + timeout)`.
    pub fn timeout(self, timeout: std::time::Duration) -> Self {
        let deadline = Instant::now() + timeout;
        self.deadline(deadline)
    }

    /// Token the caller can cancel to kill the process early.
    pub fn cancel_token(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
