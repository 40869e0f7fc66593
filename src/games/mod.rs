//! The six one-shot game variants.
//!
//! - [`DictatorGame`]: one player decides how to split an endowment
//! - [`UltimatumGame`]: proposer offers a split, responder can reject
//! - [`PrisonerDilemma`]: cooperate/defect against a payoff matrix
//! - [`PublicGoodsGame`]: N-player contribution game with a multiplier
//! - [`TrustGame`]: investor sends money, trustee decides the return
//! - [`VolunteerDilemma`]: the group benefits if at least one volunteers

mod dictator;
mod prisoner;
mod public_goods;
mod trust;
mod ultimatum;
mod volunteer;

pub use dictator::DictatorGame;
pub use prisoner::{PayoffMatrix, PrisonerDilemma};
pub use public_goods::PublicGoodsGame;
pub use trust::TrustGame;
pub use ultimatum::UltimatumGame;
pub use volunteer::VolunteerDilemma;
