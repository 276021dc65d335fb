//! Platform primitives the presenter calls out to.

pub mod clipboard;
pub mod launcher;

pub use clipboard::{Clipboard, CommandClipboard};
pub use launcher::{Launcher, SystemLauncher};
