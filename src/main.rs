use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::thread;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lan_chess::chess_errors::{SessionError, SessionResult};
use lan_chess::config::{prompt_role, Cli, LogTarget};
use lan_chess::net::peer_link::{spawn_peer_reader, PeerWriter};
use lan_chess::net::transport::{accept_opponent, join, listen, PeerRole};
use lan_chess::session::session_top::Session;
use lan_chess::ui::display::DisplayConfig;
use lan_chess::ui::input_controller::run_input_loop;
use lan_chess::ui::terminal::{AnsiTerminal, LineInput};
use lan_chess::utils::game_record::save_game_record;

fn main() -> SessionResult<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    println!("Welcome to LAN Chess!");
    let role = match cli.role.clone() {
        Some(command) => PeerRole::from(command),
        None => prompt_role(io::stdin().lock(), io::stdout())?,
    };
    let local_color = role.local_color();

    let stream = match &role {
        PeerRole::Host { bind } => {
            let listener = listen(*bind, cli.port)?;
            println!(
                "Hosting on {}. Waiting for an opponent...",
                listener.local_addr()?
            );
            accept_opponent(&listener)?
        }
        PeerRole::Join { address } => join(address, cli.port)?,
    };
    info!(%local_color, "session starting");

    let (events_tx, events_rx) = crossbeam_channel::unbounded();
    spawn_peer_reader(stream.try_clone()?, events_tx.clone())?;

    let session = Session::new(
        local_color,
        PeerWriter::new(stream),
        AnsiTerminal::stdout(),
        DisplayConfig::new(cli.theme),
    );
    let session_thread = thread::Builder::new()
        .name("session".to_owned())
        .spawn(move || session.run(&events_rx))?;

    // An input failure ends the process right here, without waiting on the session.
    run_input_loop(&mut LineInput::new(io::stdin().lock()), &events_tx)?;
    drop(events_tx);

    let final_state = match session_thread.join() {
        Ok(state) => state,
        Err(_) => {
            warn!("session thread panicked");
            return Ok(());
        }
    };

    if let Some(path) = &cli.record {
        save_game_record(path, &final_state, local_color)?;
    }
    println!("{}", final_state.message());
    Ok(())
}

fn init_tracing(cli: &Cli) -> Result<(), SessionError> {
    // Stdout carries the board frame; stray stderr lines would tear it.
    let LogTarget::File(path) = cli.log_target() else {
        return Ok(());
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .with_ansi(false)
        .with_writer(Mutex::new(File::create(path)?))
        .init();
    Ok(())
}
