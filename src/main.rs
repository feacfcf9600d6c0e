use courtside::api::PlayersClient;
use courtside::cli::Args;
use courtside::core::query::{QueryClient, QueryConfig, QueryStatus};
use courtside::paths;
use courtside::status_bar::StatusBar;
use courtside::widgets;
use courtside::widgets::roster::{RosterAction, RosterState};

use clap::Parser;
use eframe::egui;
use log::{debug, info};

/// Main application state
struct CourtsideApp {
    server: String,
    roster: RosterState,
    queries: QueryClient,
    /// Player whose career panel is open
    selected: Option<String>,
    status_bar: StatusBar,
    was_focused: bool,
}

impl CourtsideApp {
    fn new(server: String, roster: RosterState, queries: QueryClient) -> Self {
        Self {
            server,
            roster,
            queries,
            selected: None,
            status_bar: StatusBar::new(),
            was_focused: true,
        }
    }

    /// Refetch the current page when the window regains focus.
    /// Off by default (`QueryConfig::refetch_on_focus`).
    fn handle_focus(&mut self, ctx: &egui::Context) {
        let focused = ctx.input(|i| i.raw.focused);
        if self.queries.config().refetch_on_focus && focused && !self.was_focused {
            debug!("window refocused, invalidating current page");
            self.queries.invalidate(self.roster.key());
        }
        self.was_focused = focused;
    }
}

impl eframe::App for CourtsideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply completed fetches before reading any status
        self.queries.pump();

        self.handle_focus(ctx);

        let status = self.queries.page(self.roster.key());

        // A response can reveal that the collection shrank past the current
        // offset; re-clamp and let the next frame fetch the valid page.
        if let QueryStatus::Ready(page) = &status {
            self.roster.reconcile(page.total);
        }

        self.status_bar
            .render(ctx, &self.server, &self.roster, &status, self.queries.stats());

        if let Some(name) = self.selected.clone() {
            let career = self.queries.career(&name);
            let mut closed = false;
            egui::SidePanel::right("career_panel")
                .default_width(280.0)
                .show(ctx, |ui| {
                    closed = widgets::career::render(ui, &name, &career);
                });
            if closed {
                self.selected = None;
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let actions =
                widgets::roster::render(ui, &self.roster, &status, self.selected.as_deref());

            let page = status.as_ready();
            for action in actions.actions {
                match action {
                    RosterAction::PrevPage => self.roster.prev_page(),
                    RosterAction::NextPage => self.roster.next_page(page),
                    RosterAction::Select(name) => {
                        // Clicking the open player's row closes the panel
                        if self.selected.as_deref() == Some(name.as_str()) {
                            self.selected = None;
                        } else {
                            self.selected = Some(name);
                        }
                    }
                }
            }
        });
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Create path configuration from CLI args and environment
    let path_config = paths::PathConfig::from_env_and_cli(args.config_dir.clone());

    if let Err(e) = paths::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {}", e);
    }

    // Determine log level based on verbosity flags
    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let log_level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // Initialize logger based on --log flag
    if let Some(log_path_opt) = &args.log_file {
        let log_path = log_path_opt
            .as_ref()
            .cloned()
            .unwrap_or_else(|| paths::data_file("courtside.log", &path_config));

        let file = std::fs::File::create(&log_path)?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!(
            "Logging to file: {} (level: {:?})",
            log_path.display(),
            log_level
        );
    } else {
        // Console logging with specified verbosity level (respects RUST_LOG if set)
        let default_level = match args.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .init();
    }

    info!("Courtside roster browser starting...");
    debug!("Command-line args: {:?}", args);

    let page_size = args.page_size.max(1);
    let roster = RosterState::new(page_size, args.offset);

    let client = PlayersClient::new(&args.server);
    let server = client.base_url().to_string();
    let queries = QueryClient::new(
        client,
        QueryConfig {
            order: Some(args.order),
            ..QueryConfig::default()
        },
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "Courtside v{} • {}",
                env!("CARGO_PKG_VERSION"),
                server
            ))
            .with_inner_size([460.0, 640.0])
            .with_resizable(true),
        persist_window: true,
        #[cfg(not(target_arch = "wasm32"))]
        persistence_path: Some(paths::config_file("courtside.json", &path_config)),
        ..Default::default()
    };

    eframe::run_native(
        "Courtside",
        native_options,
        Box::new(move |cc| {
            // Wake the UI whenever a background fetch completes
            let ctx = cc.egui_ctx.clone();
            queries.set_waker(move || ctx.request_repaint());

            Ok(Box::new(CourtsideApp::new(server, roster, queries)))
        }),
    )?;

    info!("Application exiting");
    Ok(())
}
