//! Application entry point and dispatch.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use quickcalc_cli::output::{primary_line, write_to_file};
use quickcalc_cli::presenter::CliPresenter;
use quickcalc_core::observers::{LoggingObserver, RecordingObserver};
use quickcalc_core::{Action, Controller, Field, Mode};

use crate::config::AppConfig;
use crate::version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    debug!(version = %version::full_version(), "starting");

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        quickcalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let mode = config.initial_mode()?;

    if config.is_batch() {
        return run_cli(config);
    }

    run_tui(mode)
}

/// Run a key script or a percent computation and print the outcome.
fn run_cli(config: &AppConfig) -> Result<()> {
    let mode = if config.is_percent_run() {
        Mode::Percent
    } else {
        Mode::Standard
    };
    let mut controller = Controller::with_mode(mode);
    let recorder = Arc::new(RecordingObserver::new());
    controller.register(recorder.clone());
    controller.register(Arc::new(LoggingObserver::new()));

    if let Some(keys) = &config.keys {
        controller
            .run_script(keys)
            .with_context(|| format!("running key script {keys:?}"))?;
    } else {
        if let Some(base) = &config.base {
            controller.dispatch(Action::FieldInput(Field::Base, base.clone()));
        }
        if let Some(rate) = &config.rate {
            controller.dispatch(Action::FieldInput(Field::Rate, rate.clone()));
        }
        controller.dispatch(Action::ComputePercent);
    }

    let snapshot = controller.display();
    let tape = recorder.records();
    info!(value = %snapshot.value, computations = tape.len(), "batch run complete");

    let presenter = CliPresenter::new(config.verbose, config.quiet, config.json);
    let mut stdout = io::stdout().lock();
    presenter.present(snapshot, &tape, &mut stdout)?;
    stdout.flush()?;

    if let Some(path) = &config.output {
        write_to_file(path, primary_line(snapshot))
            .with_context(|| format!("writing result to {}", path.display()))?;
    }

    Ok(())
}

/// Run the interactive TUI.
fn run_tui(mode: Mode) -> Result<()> {
    let (tx, rx) = crossbeam_channel::unbounded::<quickcalc_tui::TuiMessage>();

    let controller = Controller::with_mode(mode);
    controller.register(Arc::new(quickcalc_tui::TuiBridgeObserver::new(tx)));
    controller.register(Arc::new(LoggingObserver::new()));

    let mut app = quickcalc_tui::TuiApp::new(controller, rx);
    app.run().context("terminal UI failed")?;
    Ok(())
}
