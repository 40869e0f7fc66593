//! One-shot behavioral-economics games
//!
//! Models six classic games (Dictator, Ultimatum, Prisoner's Dilemma,
//! Public Goods, Trust, Volunteer's Dilemma), computes payoffs from
//! submitted player strategies, and estimates expected payoffs over
//! strategy spaces by seeded Monte Carlo sampling.
//!
//! Strategies are constants (numbers, flags, action tokens) or resolvers
//! invoked at play time with the game context. Money-like numbers at or
//! below 1.0 read as fractions of the relevant base amount; larger numbers
//! are absolute and everything is clamped into range. How a decision is
//! produced — a person, a script, a language model — is the caller's
//! business; the games only see the resulting value.

mod error;
mod game;
mod games;
mod monte_carlo;
mod random;
mod strategy;

pub use error::GameError;
pub use game::{Game, Table};
pub use games::{
    DictatorGame, PayoffMatrix, PrisonerDilemma, PublicGoodsGame, TrustGame, UltimatumGame,
    VolunteerDilemma,
};
pub use monte_carlo::{estimate, MonteCarloEstimate};
pub use random::SampleRng;
pub use strategy::{normalize_amount, Context, Resolver, Strategy, StrategyValue};

#[cfg(test)]
mod tests {
    use super::*;

    fn all_games() -> Vec<Box<dyn Game>> {
        vec![
            Box::new(DictatorGame::default()),
            Box::new(UltimatumGame::default()),
            Box::new(PrisonerDilemma::default()),
            Box::new(PublicGoodsGame::default()),
            Box::new(TrustGame::default()),
            Box::new(VolunteerDilemma::default()),
        ]
    }

    #[test]
    fn test_every_game_fills_one_payoff_per_player() {
        for mut game in all_games() {
            let n = game.num_players();
            let payoffs = game.play(None).unwrap().to_vec();
            assert_eq!(payoffs.len(), n, "{}", game.name());
            for p in &payoffs {
                assert!(p.is_finite(), "{}: non-finite payoff {}", game.name(), p);
            }
        }
    }

    #[test]
    fn test_every_game_rejects_out_of_range_submission() {
        for mut game in all_games() {
            let n = game.num_players();
            let err = game.submit_strategy(n, Strategy::number(0.0)).unwrap_err();
            assert!(
                matches!(err, GameError::PlayerOutOfRange { player, .. } if player == n),
                "{}",
                game.name()
            );
        }
    }

    #[test]
    fn test_names_are_distinct() {
        let names: Vec<_> = all_games().iter().map(|g| g.name()).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn test_rules_mention_parameters() {
        let game = DictatorGame::new(250.0);
        assert!(game.rules(0).contains("$250"));

        let game = PublicGoodsGame::new(5, 100.0, 2.5);
        assert!(game.rules(0).contains("2.5"));
        assert!(game.rules(0).contains("5 players"));

        // Two-stage games describe the seats differently.
        let game = TrustGame::default();
        assert_ne!(game.rules(0), game.rules(1));
        let game = UltimatumGame::default();
        assert_ne!(game.rules(0), game.rules(1));
    }

    #[test]
    fn test_strategy_value_serde_round_trip() {
        for value in [
            StrategyValue::Number(0.5),
            StrategyValue::Flag(true),
            StrategyValue::Token("C".into()),
        ] {
            let json = serde_json::to_string(&value).unwrap();
            let back: StrategyValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn test_estimate_serializes_for_downstream_tooling() {
        let mut game = DictatorGame::new(100.0);
        let space = vec![vec![Strategy::number(0.3)]];
        let est = game.monte_carlo(&space, 10, 1).unwrap();

        let json = serde_json::to_string(&est).unwrap();
        assert!(json.contains("avg_payoffs"));
        let back: MonteCarloEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, est);
    }
}
