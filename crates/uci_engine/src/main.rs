use chess_core::{move_to_uci, parse_go_budget, set_position_from_uci, Clock, Engine, Position};
use one_ply_engine::{EngineConfig, OnePlyEngine};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// One UCI conversation: the engine plus the current game position.
struct Session<E: Engine> {
    engine: E,
    pos: Position,
}

impl<E: Engine> Session<E> {
    fn new(engine: E) -> Self {
        Self {
            engine,
            pos: Position::startpos(),
        }
    }

    /// Handles one input line. Returns the reply lines and whether to quit.
    fn handle(&mut self, line: &str) -> (Vec<String>, bool) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            return (Vec::new(), false);
        };

        let mut out = Vec::new();
        match cmd {
            "uci" => {
                out.push(format!("id name {}", self.engine.name()));
                out.push(format!("id author {}", self.engine.author()));
                out.push("option name Seed type string default random".to_string());
                out.push("option name Jitter type spin default 50 min 0 max 1000".to_string());
                out.push("uciok".to_string());
            }
            "isready" => out.push("readyok".to_string()),
            "setoption" => {
                // setoption name <name> value <value>
                let name_at = args.iter().position(|&a| a == "name");
                let value_at = args.iter().position(|&a| a == "value");
                if let Some(n) = name_at {
                    let name_end = value_at.unwrap_or(args.len());
                    let name = args[n + 1..name_end.max(n + 1)].join(" ");
                    let value = value_at.map(|v| args[v + 1..].join(" ")).unwrap_or_default();
                    if !self.engine.set_option(&name, &value) {
                        debug!(option = %name, "unknown option");
                    }
                }
            }
            "ucinewgame" => {
                self.pos = Position::startpos();
                self.engine.new_game();
            }
            "position" => {
                if let Err(e) = set_position_from_uci(&mut self.pos, args) {
                    warn!(error = %e, "ignoring position command");
                }
            }
            "go" => {
                let clock = Clock::new(parse_go_budget(args, self.pos.side_to_move()));
                let result = self.engine.search(&self.pos, &clock);
                match result.best_move {
                    Some(mv) => {
                        out.push(format!(
                            "info score cp {} nodes {}",
                            result.score, result.nodes
                        ));
                        out.push(format!("bestmove {}", move_to_uci(mv)));
                    }
                    None => out.push("bestmove 0000".to_string()), // no moves
                }
            }
            "quit" => return (out, true),
            _ => debug!(command = cmd, "ignoring unknown command"),
        }
        (out, false)
    }
}

fn load_config() -> EngineConfig {
    let Some(path) = std::env::args().nth(1) else {
        return EngineConfig::default();
    };
    match EngineConfig::load(Path::new(&path)) {
        Ok(config) => {
            info!(path = %path, ?config, "loaded engine config");
            config
        }
        Err(e) => {
            error!(error = %e, "falling back to default config");
            EngineConfig::default()
        }
    }
}

fn main() {
    // stdout carries the UCI protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new(OnePlyEngine::from_config(load_config()));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!(error = %e, "failed to read stdin");
                break;
            }
        };
        let (replies, quit) = session.handle(&line);
        for reply in replies {
            writeln!(stdout, "{reply}").ok();
        }
        stdout.flush().ok();
        if quit {
            break;
        }
    }
}
