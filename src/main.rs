//! Binary entrypoint for the Questhall console.
//!
//! Commands:
//! - `titles` - list the playable titles
//! - `play --title <id>` - start a title and read commands from stdin
//! - `init` - create a starter `config.toml`
//!
//! The console is a thin driver: it calls the engine's two operations
//! and prints what comes back. All game logic lives in the library.
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::io::{BufRead, Write};

use questhall::config::Config;
use questhall::engine::contract::{PlayRequest, INVALID_SESSION};
use questhall::engine::GameEngine;

#[derive(Parser)]
#[command(name = "questhall")]
#[command(about = "A multi-title text adventure engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the playable titles
    Titles,
    /// Play a title interactively on stdin/stdout
    Play {
        /// Title id (see `titles`)
        #[arg(short, long, default_value_t = 1)]
        title: u32,
        /// Player name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Create a starter configuration file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Titles => {
            let engine = GameEngine::new(config);
            for title in engine.list_titles() {
                println!("{:>3}  {} v{}\n     {}", title.id, title.name, title.version, title.description);
            }
            Ok(())
        }
        Commands::Play { title, name } => play_loop(config, title, name),
        Commands::Init => {
            Config::create_default(&cli.config)?;
            println!("Wrote {}", cli.config);
            Ok(())
        }
    }
}

fn play_loop(config: Config, title: u32, name: Option<String>) -> Result<()> {
    let engine = GameEngine::new(config);

    let mut request = PlayRequest::new_session(title);
    if let Some(name) = name {
        request.player_name = name;
    }
    let opening = engine.play(request);
    if opening.session_id == INVALID_SESSION {
        anyhow::bail!("{}", opening.response_text);
    }
    let session_id = opening.session_id.clone();
    info!("console session {} started", session_id);

    if let Some(welcome) = &opening.welcome_text {
        println!("{}\n", welcome);
    }
    println!("{}", opening.response_text);
    print_map(&opening.map_text);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        let response = engine.play(PlayRequest::command(&session_id, line));
        if response.session_id == INVALID_SESSION {
            println!("{}", response.response_text);
            break;
        }
        println!("{}", response.response_text);
        if !response.items_in_room.is_empty() {
            println!("{}", response.items_in_room);
        }
        print_map(&response.map_text);
        println!("[{} | health: {}]", response.current_room_name, response.health);
        if response.game_completed {
            println!("You made it out. Well played.");
            break;
        }
        if response.player_dead {
            println!("This is where your story ends.");
            break;
        }
    }
    Ok(())
}

fn print_map(map_text: &str) {
    if !map_text.is_empty() {
        println!("\n{}\n", map_text);
    }
}

fn init_logging(config: &Config, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    let base_level = match verbosity {
        0 => config
            .logging
            .level
            .parse()
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    if let Some(ref file) = config.logging.file {
        if let Ok(f) = std::fs::OpenOptions::new().create(true).append(true).open(file) {
            let mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
            let is_tty = atty::is(atty::Stream::Stdout);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut guard) = mutex.lock() {
                    let _ = writeln!(guard, "{}", line);
                }
                // In a pipeline or under a supervisor, stdout is not a
                // TTY and the file is the only sink.
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
