// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawn-and-stream execution of a single [`Invocation`].

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{ChildStderr, ChildStdout, Command};
use tokio::time::Instant;

use crate::error::ExecError;
use crate::invocation::Invocation;

/// Run one external command to completion.
///
/// Stdout and stderr are streamed line by line into the log as they arrive;
/// stdout is additionally buffered for the caller. The process exit is raced
/// against the invocation's deadline and cancellation token; losing the race
/// kills the child. On success the buffered stdout is returned with trailing
/// newlines trimmed. On non-zero exit only the exit code is returned; the
/// output was already logged, line by line, as it streamed.
///
/// The child is never left running: abort paths kill it explicitly, and the
/// process handle is spawned with kill-on-drop so an early return or panic
/// between spawn and wait reaps it too.
pub async fn run(inv: Invocation) -> Result<String, ExecError> {
    let program = inv.program.clone();
    tracing::debug!(
        program = %program,
        args = ?inv.args,
        cwd = ?inv.cwd,
        env = ?inv.env,
        "executing external command"
    );

    // A dead-on-arrival deadline (or pre-cancelled token) never spawns.
    if inv.cancel.is_cancelled() || inv.deadline.is_some_and(|d| d <= Instant::now()) {
        return Err(ExecError::AlreadyCancelled { program });
    }

    let mut command = Command::new(&inv.program);
    command
        .args(&inv.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(dir) = &inv.cwd {
        command.current_dir(dir);
    }
    for (key, value) in &inv.env {
        command.env(key, value);
    }

    let start = Instant::now();
    let mut child = command
        .spawn()
        .map_err(|source| ExecError::Spawn { program: program.clone(), source })?;

    // Independent stream listeners. They only log and accumulate; they never
    // touch any state the control flow below depends on.
    let out_task = tokio::spawn(drain_stdout(child.stdout.take()));
    let err_task = tokio::spawn(drain_stderr(child.stderr.take()));

    let outcome = tokio::select! {
        status = child.wait() => WaitOutcome::Exited(status),
        () = sleep_until_deadline(inv.deadline) => WaitOutcome::DeadlineElapsed,
        () = inv.cancel.cancelled() => WaitOutcome::Cancelled,
    };

    let status = match outcome {
        WaitOutcome::Exited(result) => {
            result.map_err(|source| ExecError::Wait { program: program.clone(), source })?
        }
        WaitOutcome::DeadlineElapsed => {
            let _ = child.kill().await;
            return Err(ExecError::Timeout { program, elapsed: start.elapsed() });
        }
        WaitOutcome::Cancelled => {
            let _ = child.kill().await;
            return Err(ExecError::Cancelled { program });
        }
    };

    // Let the listeners drain to EOF so the log holds the full output even
    // when the exit code makes us discard it.
    let _ = err_task.await;
    let output = out_task.await.unwrap_or_default();

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        return Err(ExecError::ExitCode { program, code });
    }

    Ok(output.trim_end_matches(['\r', '\n']).to_string())
}

/// How the race between process exit, deadline, and cancellation resolved.
enum WaitOutcome {
    Exited(std::io::Result<std::process::ExitStatus>),
    DeadlineElapsed,
    Cancelled,
}

/// Sleep until the deadline, or forever when there is none.
async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

async fn drain_stdout(stdout: Option<ChildStdout>) -> String {
    let mut buffered = String::new();
    let Some(stdout) = stdout else {
        return buffered;
    };
    let mut lines = BufReader::new(stdout).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        tracing::info!("{line}");
        buffered.push_str(&line);
        buffered.push('\n');
    }
    buffered
}

async fn drain_stderr(stderr: Option<ChildStderr>) {
    let Some(stderr) = stderr else {
        return;
    };
    let mut lines = BufReader::new(stderr).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        tracing::error!("{line}");
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
