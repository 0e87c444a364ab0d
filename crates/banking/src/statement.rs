use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ledgerguard_accounting::{
    Account, CompanyId, DocumentOrigin, JournalEntry, JournalEntryId, JournalLine, JournalLineId,
    LineUpdate, PeriodId, StatementId,
};
use ledgerguard_core::{DomainError, DomainResult, RecordId};
use ledgerguard_store::{Context, JournalStore};

/// Bank statement lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementState {
    Open,
    Cancelled,
}

/// One transaction on a bank statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub name: String,
    pub date: NaiveDate,
    /// Signed amount in minor units: positive for money in, negative for
    /// money out.
    pub amount: i64,
    entry_id: Option<JournalEntryId>,
}

impl StatementLine {
    /// The journal entry generated from this line, if any.
    pub fn entry_id(&self) -> Option<JournalEntryId> {
        self.entry_id
    }
}

/// Bank statement.
///
/// Each statement line can generate one journal entry; the statement's own
/// lifecycle operations run under the parent-document context so they can
/// maintain those entries while everyone else is locked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankStatement {
    pub id: StatementId,
    pub name: String,
    pub company_id: CompanyId,
    pub period_id: PeriodId,
    state: StatementState,
    lines: Vec<StatementLine>,
}

impl BankStatement {
    pub fn new(
        id: StatementId,
        name: impl Into<String>,
        company_id: CompanyId,
        period_id: PeriodId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            company_id,
            period_id,
            state: StatementState::Open,
            lines: Vec::new(),
        }
    }

    pub fn state(&self) -> StatementState {
        self.state
    }

    pub fn lines(&self) -> &[StatementLine] {
        &self.lines
    }

    /// Append a transaction line; returns its index.
    pub fn push_line(
        &mut self,
        name: impl Into<String>,
        date: NaiveDate,
        amount: i64,
    ) -> DomainResult<usize> {
        if self.state != StatementState::Open {
            return Err(DomainError::conflict(
                "cannot add lines to a cancelled statement",
            ));
        }
        if amount == 0 || amount == i64::MIN {
            return Err(DomainError::validation(
                "statement line amount must be a non-zero representable value",
            ));
        }
        self.lines.push(StatementLine {
            name: name.into(),
            date,
            amount,
            entry_id: None,
        });
        Ok(self.lines.len() - 1)
    }

    /// Generate the journal entry for one statement line: bank account
    /// against `counterpart`, direction taken from the amount's sign.
    ///
    /// The generated lines are stamped with the statement line's label
    /// through the guarded write path, under the parent-document context.
    pub fn create_entry_from_line(
        &mut self,
        store: &mut JournalStore,
        index: usize,
        bank: &Account,
        counterpart: &Account,
    ) -> DomainResult<JournalEntryId> {
        if self.state != StatementState::Open {
            return Err(DomainError::conflict(
                "cannot create entries from a cancelled statement",
            ));
        }
        let line = self.lines.get(index).ok_or(DomainError::NotFound)?;
        if line.entry_id.is_some() {
            return Err(DomainError::conflict(
                "statement line already has a journal entry",
            ));
        }
        let label = line.name.clone();
        let line_date = line.date;
        let amount = line.amount.abs();
        let money_in = line.amount > 0;

        let entry_id = JournalEntryId::new(RecordId::new());
        let entry = JournalEntry {
            id: entry_id,
            name: format!("{}/{}", self.name, index + 1),
            date: line_date,
            period_id: self.period_id,
            company_id: self.company_id,
        };
        let origin = DocumentOrigin::Statement {
            id: self.id,
            name: self.name.clone(),
        };
        let (debit_account, credit_account) = if money_in {
            (bank, counterpart)
        } else {
            (counterpart, bank)
        };
        let debit_id = JournalLineId::new(RecordId::new());
        let credit_id = JournalLineId::new(RecordId::new());
        let lines = vec![
            JournalLine {
                id: debit_id,
                entry_id,
                name: entry.name.clone(),
                account: debit_account.clone(),
                company_id: self.company_id,
                debit: amount,
                credit: 0,
                currency: None,
                amount_currency: 0,
                origin: Some(origin.clone()),
            },
            JournalLine {
                id: credit_id,
                entry_id,
                name: entry.name.clone(),
                account: credit_account.clone(),
                company_id: self.company_id,
                debit: 0,
                credit: amount,
                currency: None,
                amount_currency: 0,
                origin: Some(origin),
            },
        ];

        store.create_entry(entry, lines)?;

        // Renaming the generated lines after the fact hits the origin guard,
        // hence the parent-document context.
        let ctx = Context::from_parent_document();
        for line_id in [debit_id, credit_id] {
            store.write_line(
                &ctx,
                line_id,
                &LineUpdate {
                    name: Some(label.clone()),
                    ..Default::default()
                },
            )?;
        }

        self.lines[index].entry_id = Some(entry_id);
        tracing::info!(statement = %self.id, entry = %entry_id, "entry created from statement line");
        Ok(entry_id)
    }

    /// Cancel the statement: Open -> Cancelled, removing every generated
    /// entry under the parent-document context.
    pub fn cancel(&mut self, store: &mut JournalStore) -> DomainResult<()> {
        if self.state != StatementState::Open {
            return Err(DomainError::conflict("statement is already cancelled"));
        }

        let ctx = Context::from_parent_document();
        for line in &mut self.lines {
            if let Some(entry_id) = line.entry_id {
                store.unlink_entry(&ctx, entry_id)?;
                line.entry_id = None;
            }
        }
        self.state = StatementState::Cancelled;
        tracing::info!(statement = %self.id, "statement cancelled");
        Ok(())
    }
}
