//! Protocol command parsing.

use gambit_core::{Move, Square};

use crate::error::ProtocolError;

/// A runtime option set through `setoption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOption {
    /// Session used by `board` when no game is named.
    DefaultSession(String),
    /// Upper bound on live sessions.
    MaxSessions(usize),
}

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `board [game]` -- print the board, turn, and status.
    Board {
        /// Session id; `None` means the configured default session.
        game: Option<String>,
    },
    /// `steps <game> <square>` -- list the legal destinations from a square.
    Steps { game: String, from: Square },
    /// `move <game> <from> <to>` -- submit a move.
    Move { game: String, mv: Move },
    /// `new <game>` -- start the session over from the initial position.
    New { game: String },
    /// `drop <game>` -- discard the session.
    Drop { game: String },
    /// `setoption name <Name> value <v>` -- adjust configuration.
    SetOption(SessionOption),
    /// `quit` -- end the session loop.
    Quit,
    /// Unrecognized command (silently ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "board" => Ok(Command::Board {
            game: tokens.get(1).map(|s| s.to_string()),
        }),
        "steps" => {
            let game = required(&tokens, 1, "steps", "game")?;
            let from = parse_square(required(&tokens, 2, "steps", "square")?)?;
            Ok(Command::Steps {
                game: game.to_string(),
                from,
            })
        }
        "move" => {
            let game = required(&tokens, 1, "move", "game")?;
            let from = parse_square(required(&tokens, 2, "move", "origin")?)?;
            let to = parse_square(required(&tokens, 3, "move", "destination")?)?;
            Ok(Command::Move {
                game: game.to_string(),
                mv: Move::new(from, to),
            })
        }
        "new" => Ok(Command::New {
            game: required(&tokens, 1, "new", "game")?.to_string(),
        }),
        "drop" => Ok(Command::Drop {
            game: required(&tokens, 1, "drop", "game")?.to_string(),
        }),
        "setoption" => parse_setoption(&tokens[1..]),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Return token `index`, or a `MissingArgument` error naming what was expected.
fn required<'a>(
    tokens: &[&'a str],
    index: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, ProtocolError> {
    tokens
        .get(index)
        .copied()
        .ok_or(ProtocolError::MissingArgument { command, argument })
}

/// Parse a square as algebraic (`e2`) or as `row,col` (`6,4`).
///
/// Numeric coordinates outside `0..8` are reported as
/// [`RuleError::OutOfBounds`](gambit_core::RuleError::OutOfBounds).
pub fn parse_square(text: &str) -> Result<Square, ProtocolError> {
    if let Some((row, col)) = text.split_once(',') {
        let invalid = || ProtocolError::InvalidSquare {
            text: text.to_string(),
        };
        let row: i32 = row.trim().parse().map_err(|_| invalid())?;
        let col: i32 = col.trim().parse().map_err(|_| invalid())?;
        return Ok(Square::new(row, col)?);
    }
    Square::from_algebraic(text).ok_or_else(|| ProtocolError::InvalidSquare {
        text: text.to_string(),
    })
}

/// Parse the `setoption` arguments.
///
/// Supports `name <Name> value <v>` where the name may span several tokens.
/// Option names are matched case-insensitively.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ProtocolError> {
    if tokens.first() != Some(&"name") {
        return Err(ProtocolError::MissingArgument {
            command: "setoption",
            argument: "name",
        });
    }
    let value_pos = tokens.iter().position(|&t| t == "value");
    let name_tokens = &tokens[1..value_pos.unwrap_or(tokens.len())];
    if name_tokens.is_empty() {
        return Err(ProtocolError::MissingArgument {
            command: "setoption",
            argument: "name",
        });
    }
    let name = name_tokens.join(" ");
    let value = match value_pos {
        Some(pos) if pos + 1 < tokens.len() => tokens[pos + 1..].join(" "),
        _ => {
            return Err(ProtocolError::MissingArgument {
                command: "setoption",
                argument: "value",
            });
        }
    };

    match name.to_ascii_lowercase().as_str() {
        "defaultsession" => {
            if value.contains(char::is_whitespace) {
                return Err(ProtocolError::InvalidOptionValue { name, value });
            }
            Ok(Command::SetOption(SessionOption::DefaultSession(value)))
        }
        "maxsessions" => match value.parse::<usize>() {
            Ok(limit) if limit > 0 => Ok(Command::SetOption(SessionOption::MaxSessions(limit))),
            _ => Err(ProtocolError::InvalidOptionValue { name, value }),
        },
        _ => Err(ProtocolError::UnknownOption { name }),
    }
}
