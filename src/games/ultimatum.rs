//! Ultimatum game: proposer offers a split, responder can reject it.

use crate::error::GameError;
use crate::game::{Game, Table};
use crate::strategy::{normalize_amount, Strategy};

/// Player 0 proposes a split of the endowment; player 1 accepts or rejects.
/// A rejection leaves both players with exactly nothing, whatever the
/// endowment was.
///
/// The responder seat takes either a minimum-acceptable-offer constant
/// (fraction or absolute, scaled against the endowment but never clamped)
/// or a resolver acting as an acceptance function of the offer.
#[derive(Clone, Debug)]
pub struct UltimatumGame {
    table: Table,
}

impl UltimatumGame {
    pub fn new(endowment: f64) -> Self {
        Self {
            table: Table::new(2, endowment),
        }
    }
}

impl Default for UltimatumGame {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl Game for UltimatumGame {
    fn table(&self) -> &Table {
        &self.table
    }

    fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    fn name(&self) -> &'static str {
        "ultimatum"
    }

    fn rules(&self, player: usize) -> String {
        if player == 0 {
            format!(
                "You have ${}. Propose how much to offer the other player. \
                 They can accept or reject. If rejected, both get 0. Respond \
                 with your offer (absolute or fraction 0-1).",
                self.table.endowment
            )
        } else {
            format!(
                "The proposer will offer you part of ${}. You can accept or \
                 reject. If you reject, both get 0. Respond with your minimum \
                 acceptable offer (absolute or fraction).",
                self.table.endowment
            )
        }
    }

    fn play(&mut self, strategies: Option<&[Strategy]>) -> Result<&[f64], GameError> {
        let ctx0 = self.table.context(0);
        let raw_offer = self.table.resolve_at(strategies, 0, &ctx0)?;
        let offer = normalize_amount(raw_offer, self.table.endowment)?;

        let mut ctx1 = self.table.context(1);
        ctx1.offer = Some(offer);

        let accepted = match self.table.strategy_at(strategies, 1) {
            // No responder: any offer on the table is accepted.
            None => offer >= 0.0,
            // An acceptance function decides directly.
            Some(Strategy::Resolver(f)) => f(&ctx1).as_flag()?,
            // A constant is a threshold. Scaled like an amount, not clamped.
            Some(Strategy::Value(v)) => {
                let t = v.as_number()?;
                let threshold = if t > 1.0 { t } else { t * self.table.endowment };
                offer >= threshold
            }
        };

        let endowment = self.table.endowment;
        let payoffs = self.table.payoffs_mut();
        if accepted {
            payoffs[0] = endowment - offer;
            payoffs[1] = offer;
        } else {
            payoffs[0] = 0.0;
            payoffs[1] = 0.0;
        }
        Ok(self.table.payoffs())
    }
}
