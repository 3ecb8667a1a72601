use clap::Parser;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tokenguess::app::App;
use tokenguess::engine::config::{AssetConfig, Config, GameConfig};
use tokenguess::engine::error::GameError;
use tokenguess::input::AssetStore;
use tokenguess::ui::TuiManager;

#[derive(Parser, Debug)]
#[command(name = "tokenguess")]
#[command(about = "You are an LLM: guess the next token of a text")]
struct Args {
    /// Directory holding texts/, predictions/ and the vocabulary
    #[arg(short, long, default_value = "assets")]
    assets: PathBuf,

    /// Vocabulary file, relative to the assets directory unless absolute
    #[arg(short, long)]
    vocab: Option<PathBuf>,

    /// Open this text immediately instead of showing the picker
    #[arg(short, long)]
    text: Option<String>,

    /// Number of vocabulary suggestions to show
    #[arg(short, long)]
    limit: Option<usize>,

    /// Start in casual (multiple choice) mode
    #[arg(long)]
    casual: bool,

    /// Word-boundary marker used by the tokenizer
    #[arg(long)]
    marker: Option<String>,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn to_config(&self) -> Config {
        let mut game = GameConfig::default();
        if let Some(limit) = self.limit {
            game.suggestion_limit = limit;
        }
        if let Some(marker) = &self.marker {
            game.marker = marker.clone();
        }
        game.hardcore = !self.casual;

        let mut assets = AssetConfig::with_root(&self.assets);
        if let Some(vocab) = &self.vocab {
            assets.vocabulary_file = vocab.clone();
        }

        Config { game, assets }
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let env = env_logger::Env::default().filter_or("TOKENGUESS_LOG", "info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_timestamp_millis();

    // The TUI owns the terminal, so logs only go to a file.
    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.try_init()?;
    Ok(())
}

fn run(args: Args) -> Result<(), GameError> {
    let config = args.to_config();
    let store = AssetStore::open(config.assets.clone(), &config.game.marker)?;
    let mut app = App::new(config.game, store);

    if let Some(id) = &args.text {
        app.open_text(id);
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    if let Err(e) = run(args) {
        log::error!("{}", e);
        return Err(e.into());
    }
    Ok(())
}
