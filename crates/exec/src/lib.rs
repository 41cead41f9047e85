// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bp-exec: the process execution chokepoint.
//!
//! Every external tool the pipeline touches (git, the runtime build
//! scripts, the benchmark harness) runs through [`run`]. The executor
//! streams child output into the log as it arrives, buffers stdout for the
//! caller, races process exit against the invocation's deadline and
//! cancellation token, and guarantees the child is not left running on any
//! exit path.

pub mod error;
pub mod invocation;
pub mod run;

pub use error::ExecError;
pub use invocation::Invocation;
pub use run::run;
