//! Volunteer's dilemma: someone has to step up, or nobody gets anything.

use crate::error::GameError;
use crate::game::{Game, Table};
use crate::strategy::Strategy;

/// Each of N players decides whether to volunteer. If anyone does, the whole
/// group receives the benefit and each volunteer pays the cost; if nobody
/// does, everyone gets 0. There is no endowment.
#[derive(Clone, Debug)]
pub struct VolunteerDilemma {
    table: Table,
    pub cost: f64,
    pub benefit: f64,
}

impl VolunteerDilemma {
    pub fn new(n_players: usize, cost: f64, benefit: f64) -> Self {
        Self {
            table: Table::new(n_players, 0.0),
            cost,
            benefit,
        }
    }
}

impl Default for VolunteerDilemma {
    fn default() -> Self {
        Self::new(3, 20.0, 100.0)
    }
}

impl Game for VolunteerDilemma {
    fn table(&self) -> &Table {
        &self.table
    }

    fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    fn name(&self) -> &'static str {
        "volunteer"
    }

    fn rules(&self, _player: usize) -> String {
        format!(
            "There are {} players. If at least one volunteers, everyone gets \
             ${}. Volunteers pay ${}. If no one volunteers, everyone gets 0. \
             Respond with: volunteer (true) or not (false).",
            self.table.num_players(),
            self.benefit,
            self.cost
        )
    }

    fn play(&mut self, strategies: Option<&[Strategy]>) -> Result<&[f64], GameError> {
        let n = self.table.num_players();
        let mut volunteers = Vec::with_capacity(n);
        for player in 0..n {
            let ctx = self.table.context(player);
            let raw = self.table.resolve_at(strategies, player, &ctx)?;
            let volunteered = match raw {
                Some(value) => value.as_flag()?,
                None => false,
            };
            volunteers.push(volunteered);
        }

        let anyone = volunteers.iter().any(|v| *v);
        let cost = self.cost;
        let benefit = self.benefit;
        let payoffs = self.table.payoffs_mut();
        for (player, volunteered) in volunteers.iter().enumerate() {
            payoffs[player] = if anyone {
                benefit - if *volunteered { cost } else { 0.0 }
            } else {
                0.0
            };
        }
        Ok(self.table.payoffs())
    }
}
