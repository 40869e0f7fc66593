//! Dictator game: one player splits the endowment unilaterally.

use crate::error::GameError;
use crate::game::{Game, Table};
use crate::strategy::{normalize_amount, Strategy};

/// Player 0 (the dictator) decides how much of the endowment to hand to a
/// passive recipient. The recipient has no move.
#[derive(Clone, Debug)]
pub struct DictatorGame {
    table: Table,
}

impl DictatorGame {
    pub fn new(endowment: f64) -> Self {
        Self {
            table: Table::new(2, endowment),
        }
    }
}

impl Default for DictatorGame {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl Game for DictatorGame {
    fn table(&self) -> &Table {
        &self.table
    }

    fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    fn name(&self) -> &'static str {
        "dictator"
    }

    fn rules(&self, _player: usize) -> String {
        format!(
            "You have ${}. Decide how much to give to the other player. \
             Respond with a number: absolute amount (e.g., 30) or fraction \
             (e.g., 0.3 for 30%).",
            self.table.endowment
        )
    }

    fn play(&mut self, strategies: Option<&[Strategy]>) -> Result<&[f64], GameError> {
        let ctx = self.table.context(0);
        let raw = self.table.resolve_at(strategies, 0, &ctx)?;
        let give = normalize_amount(raw, self.table.endowment)?;

        let endowment = self.table.endowment;
        let payoffs = self.table.payoffs_mut();
        payoffs[0] = endowment - give;
        payoffs[1] = give;
        Ok(self.table.payoffs())
    }
}
