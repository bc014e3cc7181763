use std::io;
use std::process::ExitCode;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use monthgrid::app::App;
use monthgrid::config::{self, Config};
use monthgrid::{Result, handlers, logging, ui};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("init") => {
            let path = config::get_config_path();
            if Config::init()? {
                println!("Created config file at: {}", path.display());
            } else {
                println!("Config file already exists at: {}", path.display());
            }
            return Ok(());
        }
        Some("config") => {
            print!("{}", Config::load()?.to_toml()?);
            return Ok(());
        }
        _ => {}
    }

    let config = Config::load()?;
    logging::init(&config.log_path())?;

    // Must run before raw mode is enabled for the session
    let appearance = config.appearance.resolve();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config, appearance));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(%err, "exited with error");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    tracing::info!(month = %app.month, layout_mode = ?app.layout_mode, "starting");

    while !app.should_quit {
        terminal.draw(|f| ui::render_app(f, &mut app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handlers::handle_key(&mut app, key);
        }
    }

    Ok(())
}
