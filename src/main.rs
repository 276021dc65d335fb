//! Exception reporter command-line entry point.

use exception_reporter::core::config::Config;
use exception_reporter::core::error::{Error, Result};
use exception_reporter::core::reporting::format_error_for_log;
use exception_reporter::core::types::{ExceptionInfo, ReportInfo};
use exception_reporter::ui::cli::{Cli, Commands, ConfigAction};
use exception_reporter::ui::{ConsoleView, PresenterServices, ReportPresenter, ReportView};
use exception_reporter::utils::logging::{init_logging, LogConfig};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse_args();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };

    let log_config = if cli.verbose {
        LogConfig::verbose()
    } else if cli.quiet {
        LogConfig::quiet()
    } else {
        LogConfig::from_config(&config.logging)
    };
    init_logging(log_config)?;

    log::debug!("exception-reporter v{}", env!("CARGO_PKG_VERSION"));

    let command = match cli.command {
        Some(Commands::Config { action }) => {
            return run_config(action, cli.config.as_deref(), &config);
        }
        Some(command) => command,
        None => {
            println!("exception-reporter - build and deliver exception reports");
            println!();
            println!("Use --help for usage information");
            println!();
            println!("Quick start:");
            println!("  exception-reporter -m \"disk full\" show       Print the report");
            println!("  exception-reporter -m \"disk full\" save r.txt Save the report");
            println!("  exception-reporter -m \"disk full\" send       Send the report");
            return Ok(ExitCode::SUCCESS);
        }
    };

    if let Err(e) = config.validate() {
        log::warn!("{}", format_error_for_log(&e));
    }

    let mut exception = ExceptionInfo::new(cli.message);
    exception.chain = cli.caused_by;
    let info = ReportInfo::new(config.reporter.clone(), vec![exception]);

    let view = ConsoleView::new(cli.explanation, config.reporter.show_full_detail);
    let mut presenter = ReportPresenter::new(view, info, PresenterServices::system(&config.reporter));

    let succeeded = run_report(&mut presenter, command);
    let failed = !succeeded || presenter.view().error_count() > 0;
    presenter.close();

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Run one report command. Returns false when the command did not achieve its goal.
fn run_report(presenter: &mut ReportPresenter<ConsoleView>, command: Commands) -> bool {
    match command {
        Commands::Show { full } => {
            if full != presenter.view().show_full_detail() {
                presenter.toggle_detail();
            }
            presenter.populate_report();

            let report = presenter.create_exception_report();
            if presenter.view().show_full_detail() {
                print!("{}", report);
            } else {
                println!("{}", report.title());
                if let Some(exception) = presenter.report_info().main_exception() {
                    println!("{}", exception.message);
                }
            }
            true
        }
        Commands::Save { path } => presenter.save_report_to_file(Some(&path)),
        Commands::Send => match presenter.send_report() {
            Some(channel) => {
                log::debug!("Send attempt routed to {}", channel);
                presenter.view().outcome().unwrap_or(false)
            }
            None => {
                println!("No send method is configured.");
                false
            }
        },
        Commands::Copy => {
            presenter.copy_report_to_clipboard();
            true
        }
        Commands::Sysinfo => {
            let results = presenter.get_sys_info_results();
            if results.is_empty() {
                println!("No system information available.");
            }
            for result in results.iter() {
                println!("{}", result.name);
                for entry in &result.entries {
                    println!("  {}: {}", entry.key, entry.value);
                }
            }
            true
        }
        Commands::Contact => {
            presenter.send_contact_email();
            true
        }
        Commands::Website => {
            presenter.navigate_to_website();
            true
        }
        // Handled in run() before a report session starts.
        Commands::Config { .. } => false,
    }
}

/// Handle configuration subcommands.
fn run_config(action: ConfigAction, explicit: Option<&Path>, config: &Config) -> Result<ExitCode> {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::default_config_path);

    match action {
        ConfigAction::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(Error::ConfigSave(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save(&path)?;
            log::info!("Wrote default configuration to {}", path.display());
            println!("{}", path.display());
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}
