use std::io;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use typeahead::app::App;
use typeahead::cli::{Cli, Command};
use typeahead::config::{Config, load_config};
use typeahead::fetch::{Backend, spawn_worker};
use typeahead::logging;
use typeahead::query::QueryService;
use typeahead::server;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    if matches!(cli.command, Command::Pick { .. }) {
        logging::init_file();
    } else {
        logging::init_stderr();
    }

    let config = load_config(cli.config.as_deref())?;
    let service = QueryService::new(config.source_list()?);

    match cli.command {
        Command::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| config.server.addr.clone());
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::run(&addr, service))?;
        }
        Command::Query { text } => {
            let results = service.search(text.as_deref());
            println!("{}", serde_json::to_string(&results)?);
        }
        Command::Pick { endpoint } => pick(&config, service, endpoint)?,
    }

    Ok(())
}

fn pick(config: &Config, service: QueryService, endpoint: Option<String>) -> Result<()> {
    let backend = match endpoint.or_else(|| config.widget.endpoint.clone()) {
        Some(url) => Backend::http(url)?,
        None => Backend::local(service),
    };
    let worker = spawn_worker(backend)?;
    let mut app = App::new(config, Some(worker));

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(terminal, &mut app);

    // Restore terminal before printing anything
    execute!(io::stdout(), DisableMouseCapture, DisableBracketedPaste)?;
    ratatui::restore();
    app.shutdown();
    result?;

    if let Some(selected) = app.selection() {
        println!("{}", serde_json::to_string(&selected)?);
    }
    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            app.handle_event(event::read()?, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
