// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Temp-directory project fixture for pipeline specs.

use std::path::{Path, PathBuf};

use bp_core::Config;
use bp_exec::Invocation;

/// Build script the stub repository carries: every stage "succeeds" and the
/// relevant ones fabricate the canonical output the orchestrator looks for.
const BUILD_SH: &str = "\
mkdir -p artifacts/tests/coreclr/stub.x64.Release/Tests/Core_Root
printf 'stub-runner' > artifacts/tests/coreclr/stub.x64.Release/Tests/Core_Root/corerun
";

/// Test-layout stage stub (runs from `src/tests`).
const TESTS_BUILD_SH: &str = "exit 0\n";

/// Patch that cleanly adds one file to the stub repository.
pub const ADD_FILE_PATCH: &str = "\
diff --git a/added.txt b/added.txt
new file mode 100644
--- /dev/null
+++ b/added.txt
@@ -0,0 +1 @@
+added
";

/// A local "runtime" repository plus a config pointing a fresh work dir at
/// it. Holds its temp dir alive for the duration of the spec.
pub struct StubProject {
    #[allow(dead_code)]
    temp: tempfile::TempDir,
    pub config: Config,
}

impl StubProject {
    pub async fn new() -> Self {
        Self::with_build_script(BUILD_SH).await
    }

    /// Fixture with a custom root build script at the origin.
    pub async fn with_build_script(build_sh: &str) -> Self {
        let temp = tempfile::tempdir().unwrap();

        // Seed the origin repository with stub build tooling.
        let origin = temp.path().join("origin").join("runtime");
        std::fs::create_dir_all(origin.join("src").join("tests")).unwrap();
        std::fs::write(origin.join("build.sh"), build_sh).unwrap();
        std::fs::write(origin.join("src").join("tests").join("build.sh"), TESTS_BUILD_SH)
            .unwrap();
        git(&origin, &["init", "-b", "main"]).await;
        git(&origin, &["add", "."]).await;
        git(
            &origin,
            &[
                "-c",
                "user.name=bp-specs",
                "-c",
                "user.email=bp@example.invalid",
                "commit",
                "-m",
                "stub tooling",
            ],
        )
        .await;

        let config = Config::new(
            origin.to_str().unwrap(),
            temp.path().join("work"),
            temp.path().join("bench"),
            temp.path().join("logs"),
        );

        Self { temp, config }
    }

    /// The tree the orchestrator clones into.
    pub fn tree(&self) -> PathBuf {
        self.config.tree_path()
    }
}

pub async fn git(dir: &Path, args: &[&str]) {
    bp_exec::run(Invocation::new("git").args(args.iter().copied()).current_dir(dir))
        .await
        .unwrap();
}

/// No-op progress sink for orchestrator calls.
pub fn quiet(_: &str) {}
