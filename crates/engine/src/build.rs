// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The project build driver.
//!
//! Produces a runnable artifact from a source tree by shelling out to the
//! tree's own build tooling. The platform family is picked once per
//! invocation; its stages run strictly sequentially (the library build needs
//! the runtime build, the test layout needs both) and the first failure
//! aborts the rest. Per-stage wall-clock time is reported through a
//! caller-supplied progress callback, a side channel separate from the
//! return value.

use std::path::Path;
use std::time::Duration;

use bp_exec::{ExecError, Invocation};
use tokio::time::Instant;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("build stage `{stage}` failed: {source}")]
    Stage {
        stage: &'static str,
        #[source]
        source: ExecError,
    },

    #[error("visual studio installation not found")]
    VisualStudioNotFound,
}

/// Host platform family, fixed at invocation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Executable file name for this platform.
    pub fn exe(self, name: &str) -> String {
        match self {
            Platform::Unix => name.to_string(),
            Platform::Windows => format!("{name}.exe"),
        }
    }
}

/// Build the tree: runtime, then libraries, then the test layout.
///
/// `stage_timeout` bounds each stage individually; `None` leaves the build
/// unbounded, which is the long-standing default for this tool (a full
/// runtime build legitimately takes a large fraction of an hour).
pub async fn build<F>(
    tree: &Path,
    platform: Platform,
    stage_timeout: Option<Duration>,
    progress: &F,
) -> Result<(), BuildError>
where
    F: Fn(&str) + Sync,
{
    build_server_shutdown().await;

    let stages = match platform {
        Platform::Unix => unix_stages(tree),
        Platform::Windows => windows_stages(tree).await?,
    };

    for (stage, invocation) in stages {
        let invocation = match stage_timeout {
            Some(timeout) => invocation.timeout(timeout),
            None => invocation,
        };
        let start = Instant::now();
        bp_exec::run(invocation).await.map_err(|source| BuildError::Stage { stage, source })?;
        progress(&format!("{stage} built in {} min", start.elapsed().as_secs() / 60));
    }

    build_server_shutdown().await;
    Ok(())
}

fn unix_stages(tree: &Path) -> Vec<(&'static str, Invocation)> {
    vec![
        (
            "clr",
            Invocation::new("bash").args(["build.sh", "Clr", "-c", "Release"]).current_dir(tree),
        ),
        (
            "libs",
            Invocation::new("bash").args(["build.sh", "Libs", "-c", "Release"]).current_dir(tree),
        ),
        (
            "tests layout",
            Invocation::new("bash")
                .args(["build.sh", "Release", "generatelayoutonly"])
                .current_dir(tree.join("src").join("tests")),
        ),
    ]
}

async fn windows_stages(tree: &Path) -> Result<Vec<(&'static str, Invocation)>, BuildError> {
    let vc_dir = visual_studio_vc_dir().await?;
    let cmd = |args: &[&str], dir: &Path| {
        Invocation::new("cmd.exe")
            .args(args.iter().copied())
            .env("VCINSTALLDIR", vc_dir.as_str())
            .current_dir(dir)
    };
    Ok(vec![
        ("clr", cmd(&["/C", "build.cmd", "Clr", "-c", "Release"], tree)),
        ("libs", cmd(&["/C", "build.cmd", "Libs", "-c", "Release"], tree)),
        (
            "tests layout",
            cmd(&["/C", "build.cmd", "Release", "generatelayoutonly"], &tree.join("src").join("tests")),
        ),
    ])
}

/// Locate the Visual Studio VC tools directory via `vswhere`.
async fn visual_studio_vc_dir() -> Result<String, BuildError> {
    let program_files = std::env::var("ProgramFiles(x86)")
        .unwrap_or_else(|_| r"C:\Program Files (x86)".to_string());
    let vswhere = Path::new(&program_files)
        .join(r"Microsoft Visual Studio\Installer\vswhere.exe");

    let install_path = bp_exec::run(Invocation::new(vswhere.to_string_lossy()).args([
        "-latest",
        "-prerelease",
        "-products",
        "*",
        "-requires",
        "Microsoft.VisualStudio.Component.VC.Tools.x86.x64",
        "-property",
        "installationPath",
    ]))
    .await
    .map_err(|source| BuildError::Stage { stage: "vswhere", source })?;

    if !Path::new(&install_path).is_dir() {
        return Err(BuildError::VisualStudioNotFound);
    }

    // VCINSTALLDIR must end with a trailing backslash.
    Ok(format!("{install_path}\\VC\\"))
}

/// Best-effort `dotnet build-server shutdown` bracketing the stage sequence.
/// A failure here never fails the build.
async fn build_server_shutdown() {
    let result = bp_exec::run(Invocation::new("dotnet").args(["build-server", "shutdown"])).await;
    if let Err(err) = result {
        tracing::debug!(error = %err, "build-server shutdown skipped");
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
