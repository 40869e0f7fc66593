//! Public goods game: pooled contributions, multiplied and shared.

use crate::error::GameError;
use crate::game::{Game, Table};
use crate::strategy::{normalize_amount, Strategy};

/// Each of N players contributes part of their endowment to a common pot.
/// The pot is multiplied and split equally; everyone keeps what they did not
/// contribute plus their share.
#[derive(Clone, Debug)]
pub struct PublicGoodsGame {
    table: Table,
    pub multiplier: f64,
}

impl PublicGoodsGame {
    pub fn new(n_players: usize, endowment: f64, multiplier: f64) -> Self {
        Self {
            table: Table::new(n_players, endowment),
            multiplier,
        }
    }
}

impl Default for PublicGoodsGame {
    fn default() -> Self {
        Self::new(4, 100.0, 1.5)
    }
}

impl Game for PublicGoodsGame {
    fn table(&self) -> &Table {
        &self.table
    }

    fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    fn name(&self) -> &'static str {
        "public_good"
    }

    fn rules(&self, _player: usize) -> String {
        format!(
            "You have ${}. Decide how much to contribute to a public pool. \
             Total contributions are multiplied by {} and split equally among \
             {} players. You keep what you don't contribute plus your share. \
             Respond with contribution (absolute or fraction 0-1).",
            self.table.endowment,
            self.multiplier,
            self.table.num_players()
        )
    }

    fn play(&mut self, strategies: Option<&[Strategy]>) -> Result<&[f64], GameError> {
        let n = self.table.num_players();
        let mut contributions = Vec::with_capacity(n);
        for player in 0..n {
            let ctx = self.table.context(player);
            let raw = self.table.resolve_at(strategies, player, &ctx)?;
            contributions.push(normalize_amount(raw, self.table.endowment)?);
        }

        let total: f64 = contributions.iter().sum();
        let share = total * self.multiplier / n as f64;

        let endowment = self.table.endowment;
        let payoffs = self.table.payoffs_mut();
        for (player, contribution) in contributions.iter().enumerate() {
            payoffs[player] = (endowment - contribution) + share;
        }
        Ok(self.table.payoffs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::strategy::Strategy;

    #[test]
    fn test_full_contribution_worked_example() {
        // 4 players, endowment 100, multiplier 1.5, everyone contributes
        // everything: pot 600, share 150, payoff 150 each.
        let mut game = PublicGoodsGame::new(4, 100.0, 1.5);
        let all_in: Vec<Strategy> = (0..4).map(|_| Strategy::number(1.0)).collect();
        let payoffs = game.play(Some(&all_in)).unwrap();
        assert_eq!(payoffs, &[150.0, 150.0, 150.0, 150.0]);
    }

    #[test]
    fn test_free_rider_comes_out_ahead() {
        let mut game = PublicGoodsGame::new(4, 100.0, 1.5);
        let strategies = [
            Strategy::number(1.0),
            Strategy::number(1.0),
            Strategy::number(1.0),
            Strategy::number(0.0),
        ];
        let payoffs = game.play(Some(&strategies)).unwrap();
        // Pot 450, share 112.5.
        assert_eq!(payoffs, &[112.5, 112.5, 112.5, 212.5]);
    }

    #[test]
    fn test_no_submissions_keeps_endowments() {
        let mut game = PublicGoodsGame::new(4, 100.0, 1.5);
        let payoffs = game.play(None).unwrap();
        assert_eq!(payoffs, &[100.0, 100.0, 100.0, 100.0]);
    }

    #[test]
    fn test_absolute_contributions() {
        let mut game = PublicGoodsGame::new(2, 100.0, 2.0);
        let payoffs = game
            .play(Some(&[Strategy::number(40.0), Strategy::number(60.0)]))
            .unwrap();
        // Pot 200, share 100 each.
        assert_eq!(payoffs, &[160.0, 140.0]);
    }

    #[test]
    fn test_contributions_clamped_to_endowment() {
        let mut game = PublicGoodsGame::new(2, 100.0, 1.0);
        let payoffs = game
            .play(Some(&[Strategy::number(500.0), Strategy::number(0.0)]))
            .unwrap();
        // Clamped to 100: pot 100, share 50.
        assert_eq!(payoffs, &[50.0, 150.0]);
    }

    #[test]
    fn test_multiplier_recalibration() {
        let mut game = PublicGoodsGame::new(4, 100.0, 1.5);
        game.multiplier = 2.0;
        let all_in: Vec<Strategy> = (0..4).map(|_| Strategy::number(1.0)).collect();
        let payoffs = game.play(Some(&all_in)).unwrap();
        assert_eq!(payoffs, &[200.0, 200.0, 200.0, 200.0]);
    }

    #[test]
    fn test_short_explicit_list_errors() {
        let mut game = PublicGoodsGame::new(4, 100.0, 1.5);
        let strategies = [Strategy::number(0.5), Strategy::number(0.5)];
        let err = game.play(Some(&strategies)).unwrap_err();
        assert_eq!(
            err,
            GameError::ShortStrategyList {
                required: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_submit_out_of_range() {
        let mut game = PublicGoodsGame::new(4, 100.0, 1.5);
        let err = game.submit_strategy(4, Strategy::number(0.5)).unwrap_err();
        assert!(matches!(err, GameError::PlayerOutOfRange { player: 4, .. }));
    }

    proptest! {
        #[test]
        fn prop_total_payoff_scales_with_pot(
            c0 in 0.0..=1.0f64,
            c1 in 0.0..=1.0f64,
            c2 in 0.0..=1.0f64,
        ) {
            let mut game = PublicGoodsGame::new(3, 100.0, 1.5);
            let strategies = [
                Strategy::number(c0),
                Strategy::number(c1),
                Strategy::number(c2),
            ];
            let payoffs = game.play(Some(&strategies)).unwrap().to_vec();

            let contributed = 100.0 * (c0 + c1 + c2);
            let expected_total = 3.0 * 100.0 - contributed + 1.5 * contributed;
            let total: f64 = payoffs.iter().sum();
            prop_assert!((total - expected_total).abs() < 1e-6);
        }
    }
}
