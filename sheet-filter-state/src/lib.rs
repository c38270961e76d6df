pub mod clause_value;
pub mod error;
pub mod filter_clause;
pub mod filter_state;

pub use clause_value::ClauseValue;
pub use error::FilterStateError;
pub use filter_clause::FilterClause;
pub use filter_state::FilterState;

#[cfg(test)]
mod tests;
