//! Trust game: investment multiplied in transit, return at the trustee's
//! discretion.

use crate::error::GameError;
use crate::game::{Game, Table};
use crate::strategy::{normalize_amount, Strategy};

/// Player 0 (investor) sends part of the endowment; the amount is multiplied
/// on the way to player 1 (trustee), who decides how much of the received
/// amount to send back. The trustee's number is normalized against the
/// received amount, not the endowment.
#[derive(Clone, Debug)]
pub struct TrustGame {
    table: Table,
    pub multiplier: f64,
}

impl TrustGame {
    pub fn new(endowment: f64, multiplier: f64) -> Self {
        Self {
            table: Table::new(2, endowment),
            multiplier,
        }
    }
}

impl Default for TrustGame {
    fn default() -> Self {
        Self::new(100.0, 3.0)
    }
}

impl Game for TrustGame {
    fn table(&self) -> &Table {
        &self.table
    }

    fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    fn name(&self) -> &'static str {
        "trust"
    }

    fn rules(&self, player: usize) -> String {
        if player == 0 {
            format!(
                "You have ${}. Decide how much to send to the trustee. It \
                 will be multiplied by {}. The trustee then decides how much \
                 to return. Respond with amount to send (absolute or fraction \
                 0-1).",
                self.table.endowment, self.multiplier
            )
        } else {
            format!(
                "The investor will send you some amount, which gets \
                 multiplied by {}. Decide what fraction to return to the \
                 investor. Respond with fraction to return (0-1).",
                self.multiplier
            )
        }
    }

    fn play(&mut self, strategies: Option<&[Strategy]>) -> Result<&[f64], GameError> {
        let ctx0 = self.table.context(0);
        let raw_sent = self.table.resolve_at(strategies, 0, &ctx0)?;
        let sent = normalize_amount(raw_sent, self.table.endowment)?;
        let received = sent * self.multiplier;

        let mut ctx1 = self.table.context(1);
        ctx1.sent = Some(sent);
        ctx1.received = Some(received);

        let raw_returned = self
            .table
            .strategy_at(strategies, 1)
            .map(|s| s.resolve(&ctx1));
        let returned = normalize_amount(raw_returned, received)?;

        let endowment = self.table.endowment;
        let payoffs = self.table.payoffs_mut();
        payoffs[0] = endowment - sent + returned;
        payoffs[1] = received - returned;
        Ok(self.table.payoffs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyValue;

    #[test]
    fn test_worked_example() {
        // Send 50 of 100, tripled to 150; return half.
        let mut game = TrustGame::new(100.0, 3.0);
        let payoffs = game
            .play(Some(&[Strategy::number(0.5), Strategy::number(0.5)]))
            .unwrap();
        assert_eq!(payoffs, &[125.0, 75.0]);
    }

    #[test]
    fn test_return_is_normalized_against_received() {
        // 75 > 1 reads as an absolute amount of the 150 received.
        let mut game = TrustGame::new(100.0, 3.0);
        let payoffs = game
            .play(Some(&[Strategy::number(0.5), Strategy::number(75.0)]))
            .unwrap();
        assert_eq!(payoffs, &[125.0, 75.0]);
    }

    #[test]
    fn test_return_clamped_to_received() {
        let mut game = TrustGame::new(100.0, 3.0);
        let payoffs = game
            .play(Some(&[Strategy::number(0.5), Strategy::number(400.0)]))
            .unwrap();
        // Trustee cannot return more than the 150 received.
        assert_eq!(payoffs, &[200.0, 0.0]);
    }

    #[test]
    fn test_full_send_full_fraction_boundary() {
        // 1.0 sends the whole endowment; trustee keeps everything.
        let mut game = TrustGame::new(100.0, 3.0);
        let payoffs = game
            .play(Some(&[Strategy::number(1.0), Strategy::number(0.0)]))
            .unwrap();
        assert_eq!(payoffs, &[0.0, 300.0]);
    }

    #[test]
    fn test_missing_trustee_returns_nothing() {
        let mut game = TrustGame::new(100.0, 3.0);
        let payoffs = game.play(Some(&[Strategy::number(0.5)])).unwrap();
        assert_eq!(payoffs, &[50.0, 150.0]);
    }

    #[test]
    fn test_short_list_falls_back_to_pending_trustee() {
        let mut game = TrustGame::new(100.0, 3.0);
        game.submit_strategy(1, Strategy::number(0.5)).unwrap();
        let payoffs = game.play(Some(&[Strategy::number(0.5)])).unwrap();
        assert_eq!(payoffs, &[125.0, 75.0]);
    }

    #[test]
    fn test_trustee_resolver_sees_received_amount() {
        let mut game = TrustGame::new(100.0, 3.0);
        game.submit_strategy(
            1,
            Strategy::resolver(|ctx| {
                // Return a third of whatever arrived.
                StrategyValue::Number(ctx.received.unwrap_or(0.0) / 3.0)
            }),
        )
        .unwrap();

        let payoffs = game.play(Some(&[Strategy::number(0.6)])).unwrap();
        // Sent 60, received 180, returned 60.
        assert_eq!(payoffs, &[100.0, 120.0]);
    }

    #[test]
    fn test_no_investment_is_status_quo() {
        let mut game = TrustGame::new(100.0, 3.0);
        let payoffs = game.play(None).unwrap();
        assert_eq!(payoffs, &[100.0, 0.0]);
    }

    #[test]
    fn test_multiplier_recalibration() {
        let mut game = TrustGame::new(100.0, 3.0);
        game.multiplier = 2.0;
        let payoffs = game
            .play(Some(&[Strategy::number(0.5), Strategy::number(0.5)]))
            .unwrap();
        // Sent 50, received 100, returned 50.
        assert_eq!(payoffs, &[100.0, 50.0]);
    }

    #[test]
    fn test_empty_explicit_list_errors() {
        let mut game = TrustGame::new(100.0, 3.0);
        let err = game.play(Some(&[])).unwrap_err();
        assert_eq!(
            err,
            GameError::ShortStrategyList {
                required: 1,
                found: 0
            }
        );
    }

    #[test]
    fn test_submit_out_of_range() {
        let mut game = TrustGame::new(100.0, 3.0);
        let err = game.submit_strategy(2, Strategy::number(0.5)).unwrap_err();
        assert!(matches!(err, GameError::PlayerOutOfRange { player: 2, .. }));
    }
}
