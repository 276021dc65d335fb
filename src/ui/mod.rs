//! User interface components.
//!
//! This module provides:
//! - The display surface trait and report presenter
//! - A terminal display surface
//! - CLI interface

pub mod cli;
pub mod console;
pub mod presenter;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use cli::Cli;
pub use console::ConsoleView;
pub use presenter::{PresenterServices, ReportPresenter};
pub use view::ReportView;
