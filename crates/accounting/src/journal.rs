use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ledgerguard_core::{DomainError, DomainResult, Record, record_id};

use crate::calendar::PeriodId;
use crate::company::{CompanyId, CurrencyCode};
use crate::origin::DocumentOrigin;

record_id!(
    /// Journal entry identifier.
    JournalEntryId
);

record_id!(
    /// Journal line identifier.
    JournalLineId
);

/// Ledger account reference carried on journal lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub code: String, // e.g. "1100"
    pub name: String, // e.g. "Accounts receivable"
}

/// Journal entry: a dated, balanced set of debit/credit lines recorded in a
/// period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: JournalEntryId,
    pub name: String,
    pub date: NaiveDate,
    pub period_id: PeriodId,
    pub company_id: CompanyId,
}

impl Record for JournalEntry {
    type Id = JournalEntryId;

    fn id(&self) -> JournalEntryId {
        self.id
    }
}

/// One debit or credit row within a journal entry.
///
/// `debit`/`credit` are company-currency amounts in minor units (e.g. cents).
/// `currency`/`amount_currency` express the same movement in a secondary
/// currency; `amount_currency == 0` means no secondary amount is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    pub id: JournalLineId,
    pub entry_id: JournalEntryId,
    pub name: String,
    pub account: Account,
    pub company_id: CompanyId,
    pub debit: i64,
    pub credit: i64,
    pub currency: Option<CurrencyCode>,
    /// Signed amount in `currency` minor units; positive on debit lines,
    /// negative on credit lines.
    pub amount_currency: i64,
    pub origin: Option<DocumentOrigin>,
}

impl JournalLine {
    /// Guard for direct mutation: a line generated by a document may only be
    /// written or unlinked by that document's own lifecycle operations.
    pub fn ensure_directly_editable(&self) -> DomainResult<()> {
        match &self.origin {
            Some(origin) => Err(DomainError::document_generated(origin.describe())),
            None => Ok(()),
        }
    }
}

impl Record for JournalLine {
    type Id = JournalLineId;

    fn id(&self) -> JournalLineId {
        self.id
    }
}

/// Field patch for a journal entry write.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryUpdate {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub period_id: Option<PeriodId>,
}

impl EntryUpdate {
    pub fn apply_to(&self, entry: &mut JournalEntry) {
        if let Some(name) = &self.name {
            entry.name = name.clone();
        }
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(period_id) = self.period_id {
            entry.period_id = period_id;
        }
    }
}

/// Field patch for a journal line write.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineUpdate {
    pub name: Option<String>,
    pub account: Option<Account>,
    pub debit: Option<i64>,
    pub credit: Option<i64>,
    /// `Some(None)` clears the secondary currency.
    pub currency: Option<Option<CurrencyCode>>,
    pub amount_currency: Option<i64>,
}

impl LineUpdate {
    pub fn apply_to(&self, line: &mut JournalLine) {
        if let Some(name) = &self.name {
            line.name = name.clone();
        }
        if let Some(account) = &self.account {
            line.account = account.clone();
        }
        if let Some(debit) = self.debit {
            line.debit = debit;
        }
        if let Some(credit) = self.credit {
            line.credit = credit;
        }
        if let Some(currency) = &self.currency {
            line.currency = currency.clone();
        }
        if let Some(amount_currency) = self.amount_currency {
            line.amount_currency = amount_currency;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::origin::InvoiceId;
    use ledgerguard_core::{DomainError, RecordId};

    fn bare_line() -> JournalLine {
        JournalLine {
            id: JournalLineId::new(RecordId::new()),
            entry_id: JournalEntryId::new(RecordId::new()),
            name: "line".to_string(),
            account: Account {
                code: "1100".to_string(),
                name: "Accounts receivable".to_string(),
            },
            company_id: CompanyId::new(RecordId::new()),
            debit: 100,
            credit: 0,
            currency: None,
            amount_currency: 0,
            origin: None,
        }
    }

    #[test]
    fn plain_lines_are_directly_editable() {
        assert!(bare_line().ensure_directly_editable().is_ok());
    }

    #[test]
    fn guard_error_names_the_generating_document() {
        let invoice_id = InvoiceId::new(RecordId::new());
        let mut line = bare_line();
        line.origin = Some(DocumentOrigin::Invoice {
            id: invoice_id,
            name: "INV/2024/0001".to_string(),
        });

        let err = line.ensure_directly_editable().unwrap_err();
        match err {
            DomainError::DocumentGenerated(source) => {
                assert!(source.contains("INV/2024/0001"));
                assert!(source.contains(&invoice_id.to_string()));
            }
            other => panic!("expected DocumentGenerated, got {other:?}"),
        }
    }

    #[test]
    fn line_update_only_touches_set_fields() {
        let mut line = bare_line();
        let original_name = line.name.clone();

        let update = LineUpdate {
            debit: Some(250),
            ..Default::default()
        };
        update.apply_to(&mut line);

        assert_eq!(line.debit, 250);
        assert_eq!(line.credit, 0);
        assert_eq!(line.name, original_name);
    }

    #[test]
    fn line_update_can_clear_the_secondary_currency() {
        let mut line = bare_line();
        line.currency = Some(CurrencyCode::new("EUR").unwrap());
        line.amount_currency = 100;

        let update = LineUpdate {
            currency: Some(None),
            amount_currency: Some(0),
            ..Default::default()
        };
        update.apply_to(&mut line);

        assert_eq!(line.currency, None);
        assert_eq!(line.amount_currency, 0);
    }
}
