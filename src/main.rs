//! datatable - browse a CSV, JSON or YAML file as an interactive table
//!
//! It uses the Component Architecture pattern from ratatui.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use datatable_tui::action::Action;
use datatable_tui::app::App;
use datatable_tui::component::Component;
use datatable_tui::config::{Cli, Config};
use datatable_tui::services::{init_logging, load_rows};
use datatable_tui::tui::Tui;
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A broken user config falls back to defaults
    let mut config_warning = None;
    let config = match &cli.config {
        Some(path) => Some(Config::load_from(path)?),
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: ignoring config: {:#}", e);
            config_warning = Some(format!("{:#}", e));
            None
        }),
    }
    .unwrap_or_default()
    .apply_cli(&cli);

    init_logging(&config.log_path(), &config.log_level)?;
    if let Some(warning) = config_warning {
        log::warn!("Ignoring config: {}", warning);
    }

    if cli.save_config {
        config.save()?;
    }

    // Load before touching the terminal so errors print normally
    let rows = load_rows(&cli.file)
        .with_context(|| format!("Could not load {}", cli.file.display()))?;
    let mut app = App::new(config, cli.file.clone(), rows)?;
    app.init()?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        log::error!("Exiting after error: {:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            draw_result = app.draw(frame, frame.area());
        })?;
        draw_result?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
