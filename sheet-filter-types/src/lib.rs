pub mod column_kind;
pub mod combinator;
pub mod filter_condition;

pub use column_kind::ColumnKind;
pub use combinator::Combinator;
pub use filter_condition::{FilterCondition, Relation};
