//! Banking module (bank statement document lifecycle).
//!
//! A statement generates journal entries from its lines; those entries can
//! only be changed through the statement itself.

pub mod statement;

pub use ledgerguard_accounting::StatementId;
pub use statement::{BankStatement, StatementLine, StatementState};
