use std::sync::Arc;
use std::time::Instant;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

use marsdeck::adapters::ReqwestHttpClient;
use marsdeck::app::{App, AppMessage};
use marsdeck::cli::{parse_args, CliCommand, RunOptions, USAGE, VERSION};
use marsdeck::config::DeckConfig;
use marsdeck::provider::ApiPhotoSource;
use marsdeck::terminal::{setup_panic_hook, TerminalManager};
use marsdeck::{logging, ui};

fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("marsdeck {}", VERSION);
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Invalid(reason) => {
            eprintln!("marsdeck: {}\n\n{}", reason, USAGE);
            std::process::exit(2);
        }
        CliCommand::Run(options) => options,
    };

    color_eyre::install()?;
    logging::init();

    let config = build_config(&options)?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

fn build_config(options: &RunOptions) -> Result<DeckConfig> {
    let config = options.apply(DeckConfig::from_env());
    config.validate()?;
    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}

async fn run(config: DeckConfig) -> Result<()> {
    let http = Arc::new(ReqwestHttpClient::with_timeout(config.fetch_timeout));
    let source = Arc::new(ApiPhotoSource::new(Arc::clone(&http), &config));
    let mut app = App::new(config, source, http);

    let mut manager = TerminalManager::new()?;
    let (width, height) = manager.size()?;
    app.update_terminal_dimensions(width, height);
    app.start();

    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore();

    tracing::info!(
        favorites = app.state.favorites.len(),
        swipes = app.engine.outcomes_emitted(),
        "Exiting"
    );
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    let mut frames = tokio::time::interval(app.config.frame_interval);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = frames.tick() => {
                let now = Instant::now();
                app.tick(now - last_frame);
                last_frame = now;
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "Terminal event stream failed");
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
