//! Clipboard access through the platform copy utilities.

use crate::core::error::{Error, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Fire-and-forget clipboard sink.
pub trait Clipboard {
    fn copy_to(&self, text: &str);
}

/// A copy utility reading the clipboard text from stdin.
#[derive(Debug, Clone, Copy)]
struct CopyCommand {
    program: &'static str,
    args: &'static [&'static str],
}

const fn copy_command(program: &'static str, args: &'static [&'static str]) -> CopyCommand {
    CopyCommand { program, args }
}

/// Clipboard that pipes text into the first available copy utility.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    candidates: Vec<CopyCommand>,
}

impl CommandClipboard {
    pub fn new() -> Self {
        let candidates = if cfg!(windows) {
            vec![copy_command("clip", &[])]
        } else if cfg!(target_os = "macos") {
            vec![copy_command("pbcopy", &[])]
        } else {
            vec![
                copy_command("wl-copy", &[]),
                copy_command("xclip", &["-selection", "clipboard"]),
                copy_command("xsel", &["--clipboard", "--input"]),
            ]
        };

        Self { candidates }
    }

    fn pipe(program: &str, args: &[&str], text: &str) -> Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Clipboard(format!("{}: {}", program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| Error::Clipboard(format!("{}: {}", program, e)))?;
        }

        let status = child
            .wait()
            .map_err(|e| Error::Clipboard(format!("{}: {}", program, e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::Clipboard(format!("{} exited with {}", program, status)))
        }
    }

    /// Try each candidate in order until one accepts the text.
    pub fn try_copy(&self, text: &str) -> Result<()> {
        let mut last_error = Error::Clipboard("no clipboard utility available".to_string());

        for command in &self.candidates {
            match Self::pipe(command.program, command.args, text) {
                Ok(()) => {
                    log::debug!(
                        "Copied {} bytes to clipboard via {}",
                        text.len(),
                        command.program
                    );
                    return Ok(());
                }
                Err(e) => {
                    log::trace!("Clipboard candidate failed: {}", e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for CommandClipboard {
    fn copy_to(&self, text: &str) {
        if let Err(e) = self.try_copy(text) {
            log::warn!("Failed to copy report to clipboard: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_utilities_report_error() {
        let clipboard = CommandClipboard {
            candidates: vec![copy_command("definitely-not-a-clipboard-tool", &[])],
        };
        assert!(matches!(
            clipboard.try_copy("report"),
            Err(Error::Clipboard(_))
        ));

        // The trait method never fails.
        clipboard.copy_to("report");
    }
}
