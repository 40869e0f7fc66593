//! Prisoner's Dilemma: cooperate or defect against a payoff matrix.

use std::collections::HashMap;

use crate::error::GameError;
use crate::game::{Game, Table};
use crate::strategy::Strategy;

/// Payoff lookup over ordered pairs of uppercase action tokens.
///
/// Must carry the ("D", "D") entry, which doubles as the fallback for any
/// pair the matrix does not map. Built per instance, never shared.
#[derive(Clone, Debug, PartialEq)]
pub struct PayoffMatrix {
    entries: HashMap<(String, String), (f64, f64)>,
}

impl PayoffMatrix {
    /// Classic matrix: R=3 (reward), T=5 (temptation), S=0 (sucker),
    /// P=1 (punishment).
    pub fn standard() -> Self {
        let mut entries = HashMap::new();
        entries.insert(("C".to_string(), "C".to_string()), (3.0, 3.0));
        entries.insert(("C".to_string(), "D".to_string()), (0.0, 5.0));
        entries.insert(("D".to_string(), "C".to_string()), (5.0, 0.0));
        entries.insert(("D".to_string(), "D".to_string()), (1.0, 1.0));
        Self { entries }
    }

    /// Build from explicit entries. Action tokens are uppercased; the
    /// mutual-defection entry is required because it backs the fallback.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = ((&'a str, &'a str), (f64, f64))>,
    {
        let mut map = HashMap::new();
        for ((a, b), payoffs) in entries {
            map.insert((a.trim().to_uppercase(), b.trim().to_uppercase()), payoffs);
        }
        if !map.contains_key(&("D".to_string(), "D".to_string())) {
            return Err(GameError::IncompleteMatrix);
        }
        Ok(Self { entries: map })
    }

    /// Set or overwrite one entry.
    pub fn set(&mut self, a: &str, b: &str, payoffs: (f64, f64)) {
        self.entries
            .insert((a.trim().to_uppercase(), b.trim().to_uppercase()), payoffs);
    }

    /// Look up an ordered action pair, falling back to mutual defection for
    /// unmapped pairs.
    pub fn get(&self, a: &str, b: &str) -> (f64, f64) {
        let key = (a.to_uppercase(), b.to_uppercase());
        match self.entries.get(&key) {
            Some(p) => *p,
            None => self
                .entries
                .get(&("D".to_string(), "D".to_string()))
                .copied()
                .unwrap_or((0.0, 0.0)),
        }
    }
}

impl Default for PayoffMatrix {
    fn default() -> Self {
        Self::standard()
    }
}

/// Two players simultaneously choose "C" or "D"; the matrix scores the pair.
/// A missing submission defects.
#[derive(Clone, Debug)]
pub struct PrisonerDilemma {
    table: Table,
    pub matrix: PayoffMatrix,
}

impl PrisonerDilemma {
    pub fn new(matrix: PayoffMatrix) -> Self {
        Self {
            table: Table::new(2, 0.0),
            matrix,
        }
    }
}

impl Default for PrisonerDilemma {
    fn default() -> Self {
        Self::new(PayoffMatrix::standard())
    }
}

impl Game for PrisonerDilemma {
    fn table(&self) -> &Table {
        &self.table
    }

    fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    fn name(&self) -> &'static str {
        "prisoner"
    }

    fn rules(&self, _player: usize) -> String {
        let (r, _) = self.matrix.get("C", "C");
        let (p, _) = self.matrix.get("D", "D");
        let (s, t) = self.matrix.get("C", "D");
        format!(
            "Choose: Cooperate (C) or Defect (D). Payoffs: Both C = {r} each, \
             Both D = {p} each, One defects = Defector gets {t}, Cooperator \
             gets {s}. Respond with C or D."
        )
    }

    fn play(&mut self, strategies: Option<&[Strategy]>) -> Result<&[f64], GameError> {
        let ctx0 = self.table.context(0);
        let ctx1 = self.table.context(1);
        let raw0 = self.table.resolve_at(strategies, 0, &ctx0)?;
        let raw1 = self.table.resolve_at(strategies, 1, &ctx1)?;

        let action0 = match raw0 {
            Some(v) => v.as_token()?,
            None => "D".to_string(),
        };
        let action1 = match raw1 {
            Some(v) => v.as_token()?,
            None => "D".to_string(),
        };

        let (p0, p1) = self.matrix.get(&action0, &action1);
        let payoffs = self.table.payoffs_mut();
        payoffs[0] = p0;
        payoffs[1] = p1;
        Ok(self.table.payoffs())
    }
}
