//! Strategy values, resolvers, and the shared normalization rule.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A resolved strategy value: what a player actually decided.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StrategyValue {
    /// Monetary amount or fraction (dictator offers, contributions, thresholds).
    Number(f64),
    /// Yes/no decision (volunteering, acceptance).
    Flag(bool),
    /// Categorical action such as "C" or "D".
    Token(String),
}

impl StrategyValue {
    /// Coerce to a number.
    ///
    /// Flags count as 0/1 and numeric text tokens parse; anything else is a
    /// coercion error.
    pub fn as_number(&self) -> Result<f64, GameError> {
        match self {
            StrategyValue::Number(v) => Ok(*v),
            StrategyValue::Flag(b) => Ok(if *b { 1.0 } else { 0.0 }),
            StrategyValue::Token(s) => {
                s.trim().parse::<f64>().map_err(|_| GameError::Coercion {
                    expected: "number",
                    found: self.describe(),
                })
            }
        }
    }

    /// Coerce to a yes/no decision.
    ///
    /// Numbers are true when nonzero; only "true"/"false" tokens qualify.
    pub fn as_flag(&self) -> Result<bool, GameError> {
        match self {
            StrategyValue::Flag(b) => Ok(*b),
            StrategyValue::Number(v) => Ok(*v != 0.0),
            StrategyValue::Token(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(GameError::Coercion {
                    expected: "flag",
                    found: self.describe(),
                }),
            },
        }
    }

    /// Coerce to an uppercase action token.
    pub fn as_token(&self) -> Result<String, GameError> {
        match self {
            StrategyValue::Token(s) => Ok(s.trim().to_uppercase()),
            _ => Err(GameError::Coercion {
                expected: "action token",
                found: self.describe(),
            }),
        }
    }

    fn describe(&self) -> String {
        match self {
            StrategyValue::Number(v) => format!("number {}", v),
            StrategyValue::Flag(b) => format!("flag {}", b),
            StrategyValue::Token(s) => format!("token \"{}\"", s),
        }
    }
}

impl From<f64> for StrategyValue {
    fn from(v: f64) -> Self {
        StrategyValue::Number(v)
    }
}

impl From<bool> for StrategyValue {
    fn from(b: bool) -> Self {
        StrategyValue::Flag(b)
    }
}

impl From<&str> for StrategyValue {
    fn from(s: &str) -> Self {
        StrategyValue::Token(s.to_string())
    }
}

impl From<String> for StrategyValue {
    fn from(s: String) -> Self {
        StrategyValue::Token(s)
    }
}

/// Information handed to a resolver when its player's strategy is needed.
///
/// The optional fields are filled in by the variant that computes them:
/// `offer` by the ultimatum game for the responder, `sent`/`received` by the
/// trust game for the trustee.
#[derive(Clone, Copy, Debug, Default)]
pub struct Context {
    pub player: usize,
    pub num_players: usize,
    pub endowment: f64,
    pub offer: Option<f64>,
    pub sent: Option<f64>,
    pub received: Option<f64>,
}

/// A resolver computes a player's decision at play time.
pub type Resolver = Arc<dyn Fn(&Context) -> StrategyValue + Send + Sync>;

/// A per-player decision input: a constant value, or a resolver invoked
/// lazily with the game context when the payoff rule needs it.
#[derive(Clone)]
pub enum Strategy {
    Value(StrategyValue),
    Resolver(Resolver),
}

impl Strategy {
    /// Constant numeric strategy.
    pub fn number(v: f64) -> Self {
        Strategy::Value(StrategyValue::Number(v))
    }

    /// Constant yes/no strategy.
    pub fn flag(b: bool) -> Self {
        Strategy::Value(StrategyValue::Flag(b))
    }

    /// Constant categorical strategy.
    pub fn token(s: impl Into<String>) -> Self {
        Strategy::Value(StrategyValue::Token(s.into()))
    }

    /// Strategy computed at play time from the game context.
    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn(&Context) -> StrategyValue + Send + Sync + 'static,
    {
        Strategy::Resolver(Arc::new(f))
    }

    /// Produce the concrete value, invoking the resolver if there is one.
    pub fn resolve(&self, ctx: &Context) -> StrategyValue {
        match self {
            Strategy::Value(v) => v.clone(),
            Strategy::Resolver(f) => f(ctx),
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Strategy::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl From<StrategyValue> for Strategy {
    fn from(v: StrategyValue) -> Self {
        Strategy::Value(v)
    }
}

impl From<f64> for Strategy {
    fn from(v: f64) -> Self {
        Strategy::number(v)
    }
}

impl From<bool> for Strategy {
    fn from(b: bool) -> Self {
        Strategy::flag(b)
    }
}

impl From<&str> for Strategy {
    fn from(s: &str) -> Self {
        Strategy::token(s)
    }
}

/// Turn a resolved value into a spendable amount against `base`.
///
/// Absent values spend nothing. Values above 1.0 are absolute amounts;
/// values at or below 1.0 are fractions of the base, so exactly 1.0 means
/// the full base, not one unit. The result is clamped into [0, base].
pub fn normalize_amount(raw: Option<StrategyValue>, base: f64) -> Result<f64, GameError> {
    let Some(value) = raw else {
        return Ok(0.0);
    };
    let v = value.as_number()?;
    let amount = if v > 1.0 { v } else { v * base };
    Ok(amount.min(base).max(0.0))
}
