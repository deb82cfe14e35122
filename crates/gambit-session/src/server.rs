//! Line-oriented command loop over a [`SessionStore`].

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use tracing::{debug, info, warn};

use gambit_core::{MoveStatus, Phase, Piece, RuleError};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::ProtocolError;
use crate::store::{SessionConfig, SessionStore};

/// The protocol server, holding the session registry and its configuration.
///
/// Reads one command per line and writes one response block per command.
/// Rejected commands produce an `error <kind>: <message>` line and never end
/// the loop; only `quit`, end of input, or an I/O failure do.
pub struct GameServer {
    store: SessionStore,
    config: SessionConfig,
}

impl GameServer {
    /// Create a server with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            store: SessionStore::new(config.max_sessions),
            config,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), ProtocolError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let command = match parse_command(trimmed) {
                Ok(command) => command,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    report(&mut output, &e)?;
                    continue;
                }
            };

            match self.execute(command, &mut output) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => break,
                Err(ProtocolError::Io { source }) => return Err(source.into()),
                Err(e @ ProtocolError::Rule(_)) => {
                    debug!(error = %e, "request rejected");
                    report(&mut output, &e)?;
                }
                Err(e) => {
                    warn!(error = %e, "command failed");
                    report(&mut output, &e)?;
                }
            }
            output.flush()?;
        }

        info!("gambit shutting down");
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<ControlFlow<()>, ProtocolError> {
        match command {
            Command::Board { game } => {
                let id = game.unwrap_or_else(|| self.config.default_session.clone());
                self.handle_board(&id, out)?;
            }
            Command::Steps { game, from } => {
                let steps = self
                    .store
                    .with_game(&game, |engine| engine.legal_destinations(from))?;
                write!(out, "steps")?;
                for sq in &steps {
                    write!(out, " {sq}")?;
                }
                writeln!(out)?;
            }
            Command::Move { game, mv } => {
                let outcome = self.store.with_game(&game, |engine| engine.apply_move(mv))??;
                if outcome.status == MoveStatus::Checkmate {
                    info!(session = %game, winner = %outcome.side_to_move.flip(), "game over");
                }
                writeln!(out, "ok {} {}", outcome.status, outcome.side_to_move)?;
            }
            Command::New { game } => {
                self.store.reset(&game)?;
                writeln!(out, "ok new {game}")?;
            }
            Command::Drop { game } => {
                if !self.store.remove(&game) {
                    return Err(ProtocolError::UnknownGame { id: game });
                }
                writeln!(out, "ok drop {game}")?;
            }
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Quit => return Ok(ControlFlow::Break(())),
            Command::Unknown(word) => {
                debug!(word = %word, "ignoring unknown command");
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn handle_board<W: Write>(&self, id: &str, out: &mut W) -> Result<(), ProtocolError> {
        let (snapshot, status) = self
            .store
            .with_game(id, |engine| (engine.snapshot(), engine.status()))?;
        let turn = if snapshot.white_to_move { "white" } else { "black" };
        writeln!(out, "turn {turn}")?;
        match snapshot.phase {
            Phase::GameOver { winner } => writeln!(out, "status {status} {winner}")?,
            Phase::WhiteToMove | Phase::BlackToMove => writeln!(out, "status {status}")?,
        }
        for row in &snapshot.cells {
            let text: String = row
                .iter()
                .map(|cell| cell.map_or('.', Piece::char_code))
                .collect();
            writeln!(out, "{text}")?;
        }
        Ok(())
    }

    fn handle_setoption(&mut self, option: SessionOption) {
        match option {
            SessionOption::DefaultSession(id) => {
                debug!(session = %id, "default session changed");
                self.config.default_session = id;
            }
            SessionOption::MaxSessions(limit) => {
                debug!(limit, "session limit changed");
                self.config.max_sessions = limit;
                self.store.set_max_sessions(limit);
            }
        }
    }
}

impl Default for GameServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Write an `error <kind>: <message>` line.
fn report<W: Write>(out: &mut W, error: &ProtocolError) -> Result<(), ProtocolError> {
    writeln!(out, "error {}: {error}", error.kind())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(server: &mut GameServer, script: &str) -> String {
        let mut output = Vec::new();
        server.run(script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn board_prints_turn_status_and_rows() {
        let mut server = GameServer::new();
        let out = run_script(&mut server, "board\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "turn white");
        assert_eq!(lines[1], "status normal");
        assert_eq!(lines[2], "rnbqkbnr");
        assert_eq!(lines[5], "........");
        assert_eq!(lines[9], "RNBQKBNR");
        assert_eq!(lines.len(), 10);
        assert!(server.store().contains("default"));
    }

    #[test]
    fn steps_lists_destinations() {
        let mut server = GameServer::new();
        let out = run_script(&mut server, "steps g 6,4\nsteps g e4\n");
        assert_eq!(out, "steps e3 e4\nsteps\n");
    }

    #[test]
    fn move_reports_status_and_next_side() {
        let mut server = GameServer::new();
        let out = run_script(&mut server, "move g e2 e4\nmove g e7 e5\n");
        assert_eq!(out, "ok normal black\nok normal white\n");
    }

    #[test]
    fn rule_rejections_become_error_lines() {
        let mut server = GameServer::new();
        let out = run_script(&mut server, "move g e7 e5\nmove g e2 e5\nmove g 9,0 e4\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "error wrong-turn: it is not black's turn");
        assert_eq!(lines[1], "error illegal-move: illegal move e2e5");
        assert_eq!(lines[2], "error out-of-bounds: square (9, 0) is off the board");
    }

    #[test]
    fn unknown_commands_are_ignored() {
        let mut server = GameServer::new();
        let out = run_script(&mut server, "hello there\n\nboard\n");
        assert!(out.starts_with("turn white\n"));
    }

    #[test]
    fn quit_stops_processing() {
        let mut server = GameServer::new();
        let out = run_script(&mut server, "quit\nboard\n");
        assert!(out.is_empty());
        assert!(server.store().is_empty());
    }

    #[test]
    fn quit_mid_session_keeps_earlier_responses() {
        let mut server = GameServer::new();
        let out = run_script(&mut server, "move g e2 e4\nquit\nmove g e7 e5\n");
        assert_eq!(out, "ok normal black\n");
        let white = server.store().with_game("g", |engine| engine.white_to_move()).unwrap();
        assert!(!white);
    }

    #[test]
    fn new_and_drop() {
        let mut server = GameServer::new();
        let out = run_script(&mut server, "move g e2 e4\nnew g\nboard g\ndrop g\ndrop g\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ok normal black");
        assert_eq!(lines[1], "ok new g");
        assert_eq!(lines[2], "turn white");
        assert_eq!(lines[12], "ok drop g");
        assert_eq!(lines[13], "error unknown-game: no game named g");
    }

    #[test]
    fn setoption_changes_default_session_and_limit() {
        let mut server = GameServer::new();
        let out = run_script(
            &mut server,
            "setoption name DefaultSession value lobby\nsetoption name MaxSessions value 1\nboard\nboard other\n",
        );
        assert_eq!(server.config().default_session, "lobby");
        assert_eq!(server.store().max_sessions(), 1);
        assert!(server.store().contains("lobby"));
        assert!(out.ends_with("error too-many-sessions: session limit of 1 reached\n"));
    }

    #[test]
    fn malformed_command_reports_error() {
        let mut server = GameServer::new();
        let out = run_script(&mut server, "move g e2\n");
        assert_eq!(out, "error missing-argument: `move` is missing its destination argument\n");
    }

    #[test]
    fn rule_error_passes_through_protocol_error() {
        let err: ProtocolError = RuleError::GameAlreadyOver.into();
        assert_eq!(err.kind(), "game-over");
        assert_eq!(err.to_string(), "the game is already over");
    }
}
