//! Monte Carlo estimation of expected payoffs over strategy spaces.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game::Game;
use crate::random::SampleRng;
use crate::strategy::Strategy;

/// Elementwise mean payoffs from a sampling run, and the rounds it used.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloEstimate {
    pub avg_payoffs: Vec<f64>,
    pub n_rounds: u32,
}

/// Estimate expected payoffs by sampling the product strategy space.
///
/// Each round draws one candidate per list independently and uniformly
/// (with replacement), plays the game on the drawn vector, and accumulates
/// the returned payoffs; the estimate is the elementwise mean. The space
/// needs one candidate list per seat the variant reads (the same tolerance
/// as `play` — the dictator only reads seat 0); every list must be
/// non-empty. `n_rounds` must be at least 1.
///
/// This is a pure expectation estimator: it reuses one game instance, which
/// is sound because every variant overwrites its payoff vector in full and
/// carries no other state between plays.
pub fn estimate(
    game: &mut dyn Game,
    space: &[Vec<Strategy>],
    n_rounds: u32,
    rng: &mut SampleRng,
) -> Result<MonteCarloEstimate, GameError> {
    for (player, options) in space.iter().enumerate() {
        if options.is_empty() {
            return Err(GameError::EmptyStrategySpace { player });
        }
    }

    let num_players = game.num_players();
    let mut totals = vec![0.0; num_players];
    let mut drawn: Vec<Strategy> = Vec::with_capacity(space.len());

    for round in 0..n_rounds {
        drawn.clear();
        for options in space {
            drawn.push(options[rng.pick(options.len())].clone());
        }

        let payoffs = game.play(Some(&drawn))?;
        trace!("round {round}: payoffs {payoffs:?}");
        for (total, payoff) in totals.iter_mut().zip(payoffs) {
            *total += payoff;
        }
    }

    let avg_payoffs: Vec<f64> = totals.iter().map(|t| t / f64::from(n_rounds)).collect();
    debug!(
        "monte carlo for {}: {} rounds, avg payoffs {:?}",
        game.name(),
        n_rounds,
        avg_payoffs
    );

    Ok(MonteCarloEstimate {
        avg_payoffs,
        n_rounds,
    })
}
