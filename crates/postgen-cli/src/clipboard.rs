//! Best-effort clipboard access for generated posts.
//!
//! On Linux (X11 and Wayland) the clipboard contents are served by the process that set
//! them, so they vanish when `postgen` exits. There the text is handed to a
//! detached copy of this binary running the hidden [`SERVE_COMMAND`], which
//! keeps ownership until another application takes the clipboard over. The
//! helper reports back on its stdout with a single status line before it starts
//! serving: [`READY`], or [`ERROR_PREFIX`] followed by the reason.
//!
//! Other platforms keep clipboard contents after the writer exits, so the text
//! is set in process.

use std::io::{self, Read, Write};
#[cfg(target_os = "linux")]
use std::{
  io::{BufRead, BufReader},
  process::{Command, Stdio},
};

#[cfg(target_os = "linux")]
use arboard::SetExtLinux;
use tracing::{debug, error};

/// Hidden subcommand that serves clipboard contents after `generate --copy` exits.
pub const SERVE_COMMAND: &str = "clipboard-serve";

/// Status line the helper prints once it holds the clipboard.
pub const READY: &str = "ready";

/// Prefix of the status line the helper prints when the clipboard is unavailable.
pub const ERROR_PREFIX: &str = "error: ";

/// Outcome of trying to copy a post to the system clipboard.
#[derive(Debug, PartialEq, Eq)]
pub enum CopyOutcome {
  /// The exact post text is now on the clipboard
  Copied,
  /// The clipboard couldn't be reached or written; carries the reason
  Failed(String),
}

/// Copies `text` to the system clipboard.
///
/// Never fails the caller: headless sessions and missing clipboard services are
/// common, so any error is logged and handed back as [`CopyOutcome::Failed`].
pub fn copy_text(text: &str) -> CopyOutcome {
  let outcome = set_clipboard(text);
  match &outcome {
    CopyOutcome::Copied => debug!("Copied {} bytes to the clipboard", text.len()),
    CopyOutcome::Failed(reason) => error!("Failed to copy text: {reason}"),
  }
  outcome
}

/// Hands `text` to a detached helper process that keeps serving it.
#[cfg(target_os = "linux")]
fn set_clipboard(text: &str) -> CopyOutcome {
  let spawn_helper = || -> io::Result<String> {
    let mut child = Command::new(std::env::current_exe()?)
      .arg(SERVE_COMMAND)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::null())
      .spawn()?;

    // Dropping stdin closes it so the helper sees the end of the text
    if let Some(mut stdin) = child.stdin.take() {
      stdin.write_all(text.as_bytes())?;
    }

    let mut status = String::new();
    if let Some(stdout) = child.stdout.take() {
      BufReader::new(stdout).read_line(&mut status)?;
    }
    Ok(status)
  };

  match spawn_helper() {
    Ok(status) => outcome_from_status(&status),
    Err(e) => CopyOutcome::Failed(format!("could not start clipboard helper: {e}")),
  }
}

/// Sets the clipboard in process.
#[cfg(not(target_os = "linux"))]
fn set_clipboard(text: &str) -> CopyOutcome {
  match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
    Ok(()) => CopyOutcome::Copied,
    Err(e) => CopyOutcome::Failed(e.to_string()),
  }
}

/// Interprets the status line printed by the clipboard helper.
pub fn outcome_from_status(status: &str) -> CopyOutcome {
  let status = status.trim_end_matches(['\r', '\n']);
  if status == READY {
    return CopyOutcome::Copied;
  }
  match status.strip_prefix(ERROR_PREFIX) {
    Some(reason) => CopyOutcome::Failed(reason.to_owned()),
    None if status.is_empty() =>
      CopyOutcome::Failed("clipboard helper exited without reporting a status".to_owned()),
    None => CopyOutcome::Failed(format!("unexpected clipboard helper status `{status}`")),
  }
}

/// Runs the helper side: reads the text from `input`, takes the clipboard,
/// reports on `status` and then serves the text until another application
/// replaces it.
pub fn serve(mut input: impl Read, mut status: impl Write) -> io::Result<()> {
  let mut text = String::new();
  input.read_to_string(&mut text)?;

  let mut clipboard = match arboard::Clipboard::new() {
    Ok(clipboard) => clipboard,
    Err(e) => {
      writeln!(status, "{ERROR_PREFIX}{e}")?;
      return Ok(());
    },
  };
  writeln!(status, "{READY}")?;
  status.flush()?;
  drop(status);

  #[cfg(target_os = "linux")]
  let result = clipboard.set().wait().text(text);
  #[cfg(not(target_os = "linux"))]
  let result = clipboard.set_text(text);

  if let Err(e) = result {
    error!("Clipboard helper failed to serve text: {e}");
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ready_status_is_copied() {
    assert_eq!(outcome_from_status("ready\n"), CopyOutcome::Copied);
    assert_eq!(outcome_from_status("ready\r\n"), CopyOutcome::Copied);
    assert_eq!(outcome_from_status(READY), CopyOutcome::Copied);
  }

  #[test]
  fn test_error_status_carries_reason() {
    assert_eq!(
      outcome_from_status("error: X11 server connection timed out\n"),
      CopyOutcome::Failed("X11 server connection timed out".to_owned())
    );
  }

  #[test]
  fn test_missing_status_is_a_failure() {
    // The helper died before taking the clipboard
    match outcome_from_status("") {
      CopyOutcome::Failed(reason) => assert!(reason.contains("without reporting")),
      CopyOutcome::Copied => panic!("empty status reported as copied"),
    }
    assert!(matches!(outcome_from_status("readyish\n"), CopyOutcome::Failed(_)));
    assert!(matches!(outcome_from_status("Ready\n"), CopyOutcome::Failed(_)));
  }
}
