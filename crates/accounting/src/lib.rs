//! Accounting module (fiscal calendar, journal records, integrity rules).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod calendar;
pub mod company;
pub mod journal;
pub mod origin;
pub mod rules;

pub use calendar::{FiscalYear, FiscalYearId, Period, PeriodId};
pub use company::{Company, CompanyId, CurrencyCode};
pub use journal::{
    Account, EntryUpdate, JournalEntry, JournalEntryId, JournalLine, JournalLineId, LineUpdate,
};
pub use origin::{DocumentOrigin, InvoiceId, StatementId};
pub use rules::{LINE_RULES, LineRule, validate_entry_date, validate_entry_lines, validate_line};
