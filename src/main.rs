//! GHOST - don't be the one who spells the word
//!
//! Hot-seat terminal game against friends or the computer.

use clap::Parser;
use ghost::config::{self, Config, PauseConfig};
use ghost::console::ConsoleReporter;
use ghost::game::{Dictionary, GameState};
use ghost::player::{build_players, console::SharedInput, ConsoleHuman, Player, PlayerSpec};
use ghost::tui::{TuiHuman, TuiReporter, TuiSession};
use ghost::{GhostError, Result};
use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, BufReader, Stdin};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ghost")]
#[command(about = "The word game where nobody wants to finish the word")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Word list, one word per line
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Seat a player: NAME, NAME:human, NAME:cpu or NAME:cpu-easy (repeatable)
    #[arg(short, long = "player", value_name = "NAME[:KIND]")]
    players: Vec<PlayerSpec>,

    /// Seed for computer players
    #[arg(long)]
    seed: Option<u64>,

    /// Plain line-by-line output instead of the terminal UI
    #[arg(long)]
    plain: bool,

    /// Do not pause after standings and results
    #[arg(long)]
    no_pause: bool,
}

/// Config file merged with command-line flags.
struct Settings {
    /// Config file that was read, if any
    config_path: Option<PathBuf>,
    dictionary: Option<PathBuf>,
    players: Vec<PlayerSpec>,
    seed: Option<u64>,
    plain: bool,
    clear_screen: bool,
    pause: PauseConfig,
}

impl Settings {
    fn resolve(cli: Cli) -> Result<Self> {
        let (config, config_path) = match (cli.config.clone(), config::default_path()) {
            (Some(path), _) => (Config::load(&path)?, Some(path)),
            (None, Some(path)) => {
                let config = Config::load_or_default(&path)?;
                (config, path.is_file().then_some(path))
            }
            (None, None) => (Config::default(), None),
        };

        let players = if cli.players.is_empty() {
            config.player_specs()?
        } else {
            cli.players
        };

        Ok(Self {
            config_path,
            dictionary: cli.dictionary.or(config.dictionary),
            players,
            seed: cli.seed.or(config.seed),
            plain: cli.plain || config.plain,
            clear_screen: config.clear_screen,
            pause: if cli.no_pause { PauseConfig::none() } else { config.pause },
        })
    }

    /// Settings are resolved before a subscriber exists, so they are
    /// logged once logging is up.
    fn log(&self) {
        match &self.config_path {
            Some(path) => tracing::info!(path = %path.display(), "loaded config"),
            None => tracing::debug!("no config file, using defaults"),
        }
        let players: Vec<&str> = self.players.iter().map(|p| p.name.as_str()).collect();
        tracing::debug!(
            ?players,
            seed = ?self.seed,
            dictionary = ?self.dictionary,
            plain = self.plain,
            "settings resolved"
        );
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let plain = cli.plain;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(GhostError::Aborted { player }) => {
            tracing::info!(%player, "game aborted");
            eprintln!("Game abandoned by {}.", player);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, plain, "ghost exited with error");
            eprintln!("ghost: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(cli)?;
    init_logging(settings.plain);
    settings.log();

    let dictionary = match &settings.dictionary {
        Some(path) => Arc::new(Dictionary::from_file(path)?),
        None => Dictionary::embedded(),
    };
    tracing::info!(words = dictionary.len(), players = settings.players.len(), "starting game");

    if settings.plain {
        run_plain(&settings, dictionary)
    } else {
        run_tui(&settings, dictionary)
    }
}

fn run_plain(settings: &Settings, dictionary: Arc<Dictionary>) -> Result<()> {
    let input: SharedInput<BufReader<Stdin>> = Rc::new(RefCell::new(BufReader::new(io::stdin())));
    let players = build_players(&settings.players, &dictionary, settings.seed, |name| {
        Box::new(ConsoleHuman::new(name, Rc::clone(&input), io::stdout())) as Box<dyn Player>
    });

    let mut game = GameState::new(players, dictionary)?;
    let mut reporter = ConsoleReporter::new(io::stdout(), settings.clear_screen, settings.pause);
    game.run(&mut reporter)?;
    Ok(())
}

fn run_tui(settings: &Settings, dictionary: Arc<Dictionary>) -> Result<()> {
    let session = TuiSession::new(settings.pause).shared();
    let players = build_players(&settings.players, &dictionary, settings.seed, |name| {
        Box::new(TuiHuman::new(name, Rc::clone(&session))) as Box<dyn Player>
    });

    // setup errors are reported before the terminal is taken over
    let mut game = GameState::new(players, dictionary)?;
    let mut reporter = TuiReporter::new(Rc::clone(&session));

    session.borrow_mut().enter()?;
    let result = game.run(&mut reporter);
    if result.is_ok() {
        session.borrow_mut().wait_for_key()?;
    }
    session.borrow_mut().exit()?;

    let winner = result?;
    println!("{} wins!", winner);
    Ok(())
}

/// Log to stderr in plain mode. The terminal UI owns stdout and stderr, so
/// there logs go to `ghost.log` in the data directory, or nowhere if that
/// cannot be created.
fn init_logging(plain: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if plain {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
        return;
    }

    let Some(path) = log_path() else {
        return;
    };
    match File::create(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
            tracing::debug!(path = %path.display(), "logging to file");
        }
        Err(e) => eprintln!("ghost: cannot write log {}: {}", path.display(), e),
    }
}

fn log_path() -> Option<PathBuf> {
    let dir = config::project_dirs()?.data_dir().to_path_buf();
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join("ghost.log"))
}
