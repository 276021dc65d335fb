//! Launching external handlers (mail client, browser) by URI.

use crate::core::error::{Error, Result};
use std::process::{Command, Stdio};

/// Opens a URI or URL with whatever handler the system has registered.
pub trait Launcher {
    fn launch(&self, target: &str) -> Result<()>;
}

/// Launcher using the platform opener command.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }

    fn command(target: &str) -> Command {
        let (program, args) = opener(std::env::consts::OS, target);
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd
    }
}

/// Opener program and arguments for `target` on the named OS.
///
/// The target must reach the handler as one argument: `cmd /C start` splits
/// it at `&`, so Windows hands it to `url.dll` directly.
fn opener<'a>(os: &str, target: &'a str) -> (&'static str, Vec<&'a str>) {
    match os {
        "windows" => ("rundll32", vec!["url.dll,FileProtocolHandler", target]),
        "macos" => ("open", vec![target]),
        _ => ("xdg-open", vec![target]),
    }
}

impl Launcher for SystemLauncher {
    fn launch(&self, target: &str) -> Result<()> {
        if target.trim().is_empty() {
            return Err(Error::launch(target, "nothing to launch"));
        }

        log::debug!("Launching external handler for {}", target);

        let status = Self::command(target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| Error::launch(target, e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::launch(
                target,
                format!("opener exited with {}", status),
            ))
        }
    }
}
