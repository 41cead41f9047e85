// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bp-engine: the build-and-benchmark pipeline.
//!
//! Sequences the external, long-running, failure-prone operations of one run:
//! source acquisition, the baseline and patched builds with their output
//! isolation, and the benchmark invocation. Everything external goes through
//! [`bp_exec::run`]; nothing here is retried: the first failure aborts the
//! run and propagates to the caller.

pub mod bench;
pub mod build;
pub mod git;
pub mod orchestrate;
pub mod phase;

pub use bench::{BenchArtifacts, BenchError};
pub use build::{BuildError, Platform};
pub use git::GitError;
pub use orchestrate::{DualBuild, OrchestrateError};
pub use phase::Phase;
