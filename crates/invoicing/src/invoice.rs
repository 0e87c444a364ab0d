use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ledgerguard_accounting::{
    Account, CompanyId, DocumentOrigin, InvoiceId, JournalEntry, JournalEntryId, JournalLine,
    JournalLineId, PeriodId,
};
use ledgerguard_core::{DomainError, DomainResult, RecordId};
use ledgerguard_store::{Context, JournalStore};

/// Invoice lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceState {
    Draft,
    Open,
    Cancelled,
}

/// Customer invoice.
///
/// Posting generates the invoice's journal entry; cancelling removes it
/// again. Both run under the parent-document context, so the generated lines
/// stay untouchable for everyone else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub name: String,
    pub company_id: CompanyId,
    pub period_id: PeriodId,
    pub date: NaiveDate,
    /// Total in company currency, minor units.
    pub amount: i64,
    state: InvoiceState,
    entry_id: Option<JournalEntryId>,
}

impl Invoice {
    pub fn new(
        id: InvoiceId,
        name: impl Into<String>,
        company_id: CompanyId,
        period_id: PeriodId,
        date: NaiveDate,
        amount: i64,
    ) -> DomainResult<Self> {
        if amount <= 0 {
            return Err(DomainError::validation("invoice amount must be positive"));
        }
        Ok(Self {
            id,
            name: name.into(),
            company_id,
            period_id,
            date,
            amount,
            state: InvoiceState::Draft,
            entry_id: None,
        })
    }

    pub fn state(&self) -> InvoiceState {
        self.state
    }

    /// The generated journal entry, once posted.
    pub fn entry_id(&self) -> Option<JournalEntryId> {
        self.entry_id
    }

    /// Post the invoice: Draft -> Open, generating the journal entry
    /// (receivable debit against income credit) with this invoice as origin.
    pub fn post(
        &mut self,
        store: &mut JournalStore,
        receivable: &Account,
        income: &Account,
    ) -> DomainResult<JournalEntryId> {
        if self.state != InvoiceState::Draft {
            return Err(DomainError::conflict("only draft invoices can be posted"));
        }

        let entry_id = JournalEntryId::new(RecordId::new());
        let entry = JournalEntry {
            id: entry_id,
            name: self.name.clone(),
            date: self.date,
            period_id: self.period_id,
            company_id: self.company_id,
        };
        let origin = DocumentOrigin::Invoice {
            id: self.id,
            name: self.name.clone(),
        };
        let lines = vec![
            JournalLine {
                id: JournalLineId::new(RecordId::new()),
                entry_id,
                name: self.name.clone(),
                account: receivable.clone(),
                company_id: self.company_id,
                debit: self.amount,
                credit: 0,
                currency: None,
                amount_currency: 0,
                origin: Some(origin.clone()),
            },
            JournalLine {
                id: JournalLineId::new(RecordId::new()),
                entry_id,
                name: self.name.clone(),
                account: income.clone(),
                company_id: self.company_id,
                debit: 0,
                credit: self.amount,
                currency: None,
                amount_currency: 0,
                origin: Some(origin),
            },
        ];

        store.create_entry(entry, lines)?;
        self.entry_id = Some(entry_id);
        self.state = InvoiceState::Open;
        tracing::info!(invoice = %self.id, entry = %entry_id, "invoice posted");
        Ok(entry_id)
    }

    /// Cancel the invoice: Open -> Cancelled, removing the generated entry
    /// and its lines under the parent-document context.
    pub fn cancel(&mut self, store: &mut JournalStore) -> DomainResult<()> {
        if self.state != InvoiceState::Open {
            return Err(DomainError::conflict("only open invoices can be cancelled"));
        }

        if let Some(entry_id) = self.entry_id {
            store.unlink_entry(&Context::from_parent_document(), entry_id)?;
            self.entry_id = None;
        }
        self.state = InvoiceState::Cancelled;
        tracing::info!(invoice = %self.id, "invoice cancelled");
        Ok(())
    }
}
