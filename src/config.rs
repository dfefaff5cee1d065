//! Command-line configuration.
//!
//! The role can be given as a subcommand; without one the program falls
//! back to asking on the terminal.

use std::io::{BufRead, Write};
use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::chess_errors::{SessionError, SessionResult};
use crate::net::transport::{PeerRole, DEFAULT_PORT};
use crate::ui::display::Theme;

#[derive(Debug, Parser)]
#[command(name = "lan_chess", version, about = "Two-player chess over a LAN connection")]
pub struct Cli {
    #[command(subcommand)]
    pub role: Option<RoleCommand>,

    /// Port the host listens on and the joiner dials.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Initial board colour theme.
    #[arg(long, value_enum, default_value_t = Theme::Classic)]
    pub theme: Theme,

    /// Write a game record here when the session ends.
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Write logs to this file. Without it logs are discarded, since the
    /// terminal is busy showing the board.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Discard,
}

impl Cli {
    pub fn log_target(&self) -> LogTarget {
        match &self.log_file {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Discard,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum RoleCommand {
    /// Host a game and play white.
    Host {
        /// Listen on this address instead of the detected LAN address.
        #[arg(long)]
        bind: Option<IpAddr>,
    },
    /// Join a hosted game and play black.
    Join {
        /// Host address, optionally with a port.
        address: String,
    },
}

impl From<RoleCommand> for PeerRole {
    fn from(command: RoleCommand) -> Self {
        match command {
            RoleCommand::Host { bind } => PeerRole::Host { bind },
            RoleCommand::Join { address } => PeerRole::Join { address },
        }
    }
}

/// Ask for the role interactively: `h` hosts, `j` joins and asks for the
/// host address.
pub fn prompt_role<R: BufRead, W: Write>(mut input: R, mut output: W) -> SessionResult<PeerRole> {
    write!(output, "Do you want to (h)ost or (j)oin a game? ")?;
    output.flush()?;
    let mut choice = String::new();
    input.read_line(&mut choice)?;

    match choice.trim() {
        "h" => Ok(PeerRole::Host { bind: None }),
        "j" => {
            write!(output, "Enter host IP address: ")?;
            output.flush()?;
            let mut address = String::new();
            input.read_line(&mut address)?;
            Ok(PeerRole::Join {
                address: address.trim().to_owned(),
            })
        }
        other => Err(SessionError::InvalidRoleChoice(other.to_owned())),
    }
}
