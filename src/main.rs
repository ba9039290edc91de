use crate::config::BrowserConfig;
use crate::host::{export_page, parse_command, BrowserController, HandleRegistry, HostEvent, HtmlDocument};
use crate::snapshot::SnapshotLoader;
use std::io::BufRead;
use std::sync::mpsc::{self, Sender};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod domain;
mod errors;
mod host;
mod render;
mod snapshot;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("listings_browser=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1️⃣ Configuration
    let config = BrowserConfig::from_env();
    config.log_summary();

    let (tx, rx) = mpsc::channel::<HostEvent>();

    // 2️⃣ Kick off the one snapshot fetch; its continuation is the first full render
    {
        let tx = tx.clone();
        SnapshotLoader::new(config.data_source.clone(), config.fetch_timeout).spawn(move |result| {
            let _ = tx.send(HostEvent::Intent(app::Intent::SnapshotLoaded(result)));
        });
    }

    // 3️⃣ Controls come in as typed commands on stdin
    spawn_command_reader(tx.clone());

    let mut controller: BrowserController = app::Controller::new(
        HandleRegistry::new(),
        HandleRegistry::new(),
        HtmlDocument::new(tx),
        config.view,
    );
    controller.start();
    export(&controller, &config);

    // 4️⃣ Event loop: one intent at a time, re-export after each
    let mut input_closed = false;
    for event in rx {
        match event {
            HostEvent::Intent(intent) => {
                controller.dispatch(intent);
                export(&controller, &config);
            }
            HostEvent::InputClosed => input_closed = true,
            HostEvent::Quit => break,
        }

        if input_closed && controller.state().store.is_loaded() {
            break;
        }
    }

    tracing::info!("Browser session ended.");
}

fn spawn_command_reader(tx: Sender<HostEvent>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("stdin read failed: {e}");
                    break;
                }
            };

            match parse_command(&line) {
                Ok(event) => {
                    let quit = matches!(event, HostEvent::Quit);
                    if tx.send(event).is_err() || quit {
                        return;
                    }
                }
                Err(errors::CommandError::Empty) => {}
                Err(e) => tracing::warn!("{e}"),
            }
        }
        let _ = tx.send(HostEvent::InputClosed);
    });
}

fn export(controller: &BrowserController, config: &BrowserConfig) {
    match export_page(controller, config, &config.output_path) {
        Ok(()) => tracing::info!(
            results = controller.state().filtered.len(),
            page = controller.state().pagination.current,
            marker_layers = controller.map().live_count(),
            charts = controller.chart().live_count(),
            released = controller.map().released_count() + controller.chart().released_count(),
            "Wrote {}",
            config.output_path.display()
        ),
        Err(e) => tracing::error!("Could not write {}: {e}", config.output_path.display()),
    }
}
