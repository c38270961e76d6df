use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Logical operator joining every clause of one column filter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Combinator {
    #[default]
    And,
    Or,
}

impl Combinator {
    pub fn toggled(self) -> Self {
        match self {
            Combinator::And => Combinator::Or,
            Combinator::Or => Combinator::And,
        }
    }
}
