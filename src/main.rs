//! Interactive Quoridor client.
//!
//! Plays a game against the remote game-session service, or locally
//! against the built-in shortest-path selector with `--local`. Moves are
//! typed at the prompt as a kind token plus a coordinate pair, e.g.
//! `D 5 2` or `MH 4 4`.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quoridor::client::{submit_and_sync, RemoteSession, SyncOutcome, DEFAULT_BASE_URL};
use quoridor::core::{MoveKind, Position};
use quoridor::rules::select_auto_move;
use quoridor::{Credentials, Game, GameClient};

#[derive(Parser, Debug)]
#[command(name = "quoridor", about = "Play Quoridor against the hosted service")]
struct Cli {
    /// Player login on the game-session service.
    idul: String,

    /// Secret token for the service (env: QUORIDOR_SECRET).
    #[arg(long, env = "QUORIDOR_SECRET", default_value = "")]
    secret: String,

    /// Base URL of the service.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Play locally against the auto-move selector instead of the service.
    #[arg(long)]
    local: bool,

    /// Let the auto-move selector play the online game.
    #[arg(long)]
    auto: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = if cli.local {
        run_local(&cli.idul)
    } else {
        run_online(&cli)
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Prompt until the user enters a parsable move.
fn prompt_move(stdin: &mut impl BufRead) -> io::Result<(MoveKind, Position)> {
    loop {
        print!("Your move (D|MH|MV x y): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }

        let mut parts = line.split_whitespace();
        let parsed = (|| {
            let kind: MoveKind = parts.next()?.parse().ok()?;
            let x: u8 = parts.next()?.parse().ok()?;
            let y: u8 = parts.next()?.parse().ok()?;
            Some((kind, Position::new(x, y)))
        })();

        match parsed {
            Some(mv) => return Ok(mv),
            None => println!("Could not read that move, try e.g. 'D 5 2' or 'MH 4 4'."),
        }
    }
}

fn run_online(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = GameClient::with_base_url(
        cli.url.clone(),
        Credentials::new(cli.idul.clone(), cli.secret.clone()),
    );

    let (mut session, mut state) = RemoteSession::create(client)?;
    println!("{state}");

    let mut stdin = io::stdin().lock();
    loop {
        let (kind, target) = if cli.auto {
            let proposal = select_auto_move(&state, &cli.idul)?;
            println!("Auto move: {} {}", proposal.kind, proposal.target);
            (proposal.kind, proposal.target)
        } else {
            prompt_move(&mut stdin)?
        };

        // Both outcomes resync `state`, so the next proposal is computed
        // from what the server actually holds.
        match submit_and_sync(&mut session, kind, target)? {
            SyncOutcome::Finished { winner } => {
                println!("Game over, the winner is {winner}");
                return Ok(());
            }
            SyncOutcome::Advanced(next) => {
                state = next;
                println!("{state}");
            }
            SyncOutcome::Rejected { reason, state: next } => {
                println!("Move rejected: {reason}");
                state = next;
            }
        }
    }
}

fn run_local(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    const OPPONENT: &str = "automate";
    let mut game = Game::new(name, OPPONENT);
    println!("{game}");

    let mut stdin = io::stdin().lock();
    loop {
        let (kind, target) = prompt_move(&mut stdin)?;
        if let Err(err) = game.apply_move(name, kind, target) {
            println!("{err}");
            continue;
        }
        if let Some(winner) = game.winner() {
            println!("Game over, the winner is {winner}");
            return Ok(());
        }

        game.play_auto(OPPONENT)?;
        println!("{game}");
        if let Some(winner) = game.winner() {
            println!("Game over, the winner is {winner}");
            return Ok(());
        }
    }
}
