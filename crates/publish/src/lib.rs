// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bp-publish: getting results in front of people.
//!
//! Packages a benchmark run's artifact directory, uploads it and any
//! profiling side-artifacts to object storage, pastes oversized text, and
//! posts the formatted comparison to the issue tracker. Unlike the build
//! pipeline, this layer is lenient: a missing or unuploadable optional
//! artifact becomes a placeholder, and a failure to post the comment itself
//! is logged, never retried and never raised.

pub mod archive;
pub mod artifacts;
pub mod comment;
pub mod publisher;
pub mod store;
pub mod tracker;

#[cfg(any(test, feature = "test-support"))]
pub mod fakes;

pub use comment::{CommentInput, SideLinks, MISSING_MARKER};
pub use publisher::Publisher;
pub use store::{BlobContainerStore, ObjectStore, StoreError};
pub use tracker::{GithubTracker, IssueTracker, TrackerError};

#[cfg(any(test, feature = "test-support"))]
pub use fakes::{FakeStore, FakeTracker};
