//! Shared game state and the `Game` contract.

use std::collections::HashMap;

use crate::error::GameError;
use crate::monte_carlo::{estimate, MonteCarloEstimate};
use crate::random::SampleRng;
use crate::strategy::{Context, Strategy, StrategyValue};

/// Shared per-variant state: the table the players sit at.
///
/// Holds the player count, the endowment each relevant player starts with
/// (0 for endowment-less games), strategies submitted ahead of play, and the
/// payoff vector the last play produced. The payoff vector always has one
/// entry per player and is overwritten in full on every play.
#[derive(Clone, Debug)]
pub struct Table {
    num_players: usize,
    pub endowment: f64,
    pending: HashMap<usize, Strategy>,
    payoffs: Vec<f64>,
}

impl Table {
    pub fn new(num_players: usize, endowment: f64) -> Self {
        Self {
            num_players,
            endowment,
            pending: HashMap::new(),
            payoffs: vec![0.0; num_players],
        }
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    /// Store or overwrite the pending strategy for `player`.
    pub fn submit(&mut self, player: usize, strategy: Strategy) -> Result<(), GameError> {
        if player >= self.num_players {
            return Err(GameError::PlayerOutOfRange {
                player,
                num_players: self.num_players,
            });
        }
        self.pending.insert(player, strategy);
        Ok(())
    }

    /// The pending strategy for `player`, if any.
    pub fn pending(&self, player: usize) -> Option<&Strategy> {
        self.pending.get(&player)
    }

    /// Base resolver context for `player`.
    pub fn context(&self, player: usize) -> Context {
        Context {
            player,
            num_players: self.num_players,
            endowment: self.endowment,
            ..Context::default()
        }
    }

    /// Resolve the pending submission for `player`, invoking a resolver if
    /// one was submitted. Absent submissions resolve to `None`.
    pub fn resolve_pending(&self, player: usize, ctx: &Context) -> Option<StrategyValue> {
        self.pending.get(&player).map(|s| s.resolve(ctx))
    }

    /// Resolve `player`'s strategy from the explicit list when one is given,
    /// falling back to the pending submission otherwise. An explicit list
    /// must cover every seat resolved through here.
    pub fn resolve_at(
        &self,
        explicit: Option<&[Strategy]>,
        player: usize,
        ctx: &Context,
    ) -> Result<Option<StrategyValue>, GameError> {
        match explicit {
            Some(list) => match list.get(player) {
                Some(s) => Ok(Some(s.resolve(ctx))),
                None => Err(GameError::ShortStrategyList {
                    required: player + 1,
                    found: list.len(),
                }),
            },
            None => Ok(self.resolve_pending(player, ctx)),
        }
    }

    /// The raw strategy occupying a seat: the explicit entry when the list
    /// reaches that seat, else the pending submission. Used where the payoff
    /// rule must distinguish a constant from a resolver (ultimatum), and for
    /// the second seat in two-stage games, which tolerates a length-1
    /// explicit list.
    pub fn strategy_at<'a>(
        &'a self,
        explicit: Option<&'a [Strategy]>,
        player: usize,
    ) -> Option<&'a Strategy> {
        match explicit {
            Some(list) if list.len() > player => list.get(player),
            _ => self.pending.get(&player),
        }
    }

    /// Payoffs from the most recent play (zeros before the first).
    pub fn payoffs(&self) -> &[f64] {
        &self.payoffs
    }

    /// Mutable payoff storage for the variant's payoff rule.
    pub fn payoffs_mut(&mut self) -> &mut [f64] {
        &mut self.payoffs
    }
}

/// Common contract for the one-shot games.
///
/// Variants implement `play`; submission, accessors, and Monte Carlo
/// estimation are provided on top of the shared [`Table`].
pub trait Game {
    /// Shared table state.
    fn table(&self) -> &Table;
    fn table_mut(&mut self) -> &mut Table;

    /// Short identifier, e.g. `"dictator"`.
    fn name(&self) -> &'static str;

    /// Natural-language rules for the given seat, parameters filled in.
    /// This is the text handed to an external decision source.
    fn rules(&self, player: usize) -> String;

    /// Execute one round.
    ///
    /// With `Some(strategies)`, the explicit values override any pending
    /// submissions; with `None`, each player's pending submission is
    /// resolved, and absent players fall back to the variant's default
    /// (spend nothing, defect, stay home). Resolvers are invoked with the
    /// seat's context. Returns the payoff vector, one entry per player.
    fn play(&mut self, strategies: Option<&[Strategy]>) -> Result<&[f64], GameError>;

    fn num_players(&self) -> usize {
        self.table().num_players()
    }

    fn endowment(&self) -> f64 {
        self.table().endowment
    }

    /// Store or overwrite the pending strategy for `player`.
    fn submit_strategy(&mut self, player: usize, strategy: Strategy) -> Result<(), GameError> {
        self.table_mut().submit(player, strategy)
    }

    /// Payoffs from the most recent play (zeros before the first).
    fn payoffs(&self) -> &[f64] {
        self.table().payoffs()
    }

    /// Seeded Monte Carlo estimate of expected payoffs over a strategy
    /// space; see [`crate::estimate`] for the sampling contract.
    fn monte_carlo(
        &mut self,
        space: &[Vec<Strategy>],
        n_rounds: u32,
        seed: u64,
    ) -> Result<MonteCarloEstimate, GameError>
    where
        Self: Sized,
    {
        let mut rng = SampleRng::new(seed);
        estimate(self, space, n_rounds, &mut rng)
    }
}
