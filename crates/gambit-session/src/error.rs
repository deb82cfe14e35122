//! Protocol and session errors.

use gambit_core::RuleError;

/// Errors that can occur while handling a protocol command.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// A command is missing a required argument.
    #[error("`{command}` is missing its {argument} argument")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// A square token is neither algebraic (`e2`) nor `row,col`.
    #[error("invalid square: {text}")]
    InvalidSquare {
        /// The token that failed to parse.
        text: String,
    },

    /// `setoption` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// `setoption` value could not be parsed for the named option.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The value that failed to parse.
        value: String,
    },

    /// The named game session does not exist.
    #[error("no game named {id}")]
    UnknownGame {
        /// The session id.
        id: String,
    },

    /// Creating another session would exceed the configured limit.
    #[error("session limit of {limit} reached")]
    TooManySessions {
        /// The configured maximum.
        limit: usize,
    },

    /// The rule engine rejected the request.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// An I/O error occurred while reading commands or writing responses.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl ProtocolError {
    /// Short machine-readable tag used in `error <kind>: <message>` responses.
    pub fn kind(&self) -> &'static str {
        match self {
            ProtocolError::MissingArgument { .. } => "missing-argument",
            ProtocolError::InvalidSquare { .. } => "invalid-square",
            ProtocolError::UnknownOption { .. } => "unknown-option",
            ProtocolError::InvalidOptionValue { .. } => "invalid-option",
            ProtocolError::UnknownGame { .. } => "unknown-game",
            ProtocolError::TooManySessions { .. } => "too-many-sessions",
            ProtocolError::Rule(RuleError::OutOfBounds { .. }) => "out-of-bounds",
            ProtocolError::Rule(RuleError::WrongTurn { .. }) => "wrong-turn",
            ProtocolError::Rule(RuleError::IllegalMove { .. }) => "illegal-move",
            ProtocolError::Rule(RuleError::GameAlreadyOver) => "game-over",
            ProtocolError::Io { .. } => "io",
        }
    }
}
