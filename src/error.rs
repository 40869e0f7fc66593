//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while submitting strategies or playing a game.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// Strategy submitted for a player index outside the table.
    #[error("player {player} out of range (game has {num_players} players)")]
    PlayerOutOfRange { player: usize, num_players: usize },

    /// A strategy value could not be coerced to the type the game needs.
    #[error("cannot coerce {found} to {expected}")]
    Coercion {
        expected: &'static str,
        found: String,
    },

    /// An explicit strategy list covered fewer players than the game reads.
    #[error("strategy list has {found} entries, game reads {required}")]
    ShortStrategyList { required: usize, found: usize },

    /// A Monte Carlo strategy space offered no candidates for a player.
    #[error("strategy space for player {player} is empty")]
    EmptyStrategySpace { player: usize },

    /// A payoff matrix was built without its mutual-defection fallback entry.
    #[error("payoff matrix is missing the (\"D\", \"D\") fallback entry")]
    IncompleteMatrix,
}
