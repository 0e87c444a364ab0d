//! Invoicing module (invoice document lifecycle).
//!
//! An invoice generates its journal entry on posting; from then on those
//! lines can only be changed through the invoice itself.

pub mod invoice;

pub use invoice::{Invoice, InvoiceState};
pub use ledgerguard_accounting::InvoiceId;
