use std::collections::{HashMap, HashSet};

use ledgerguard_accounting::{
    Company, CompanyId, EntryUpdate, FiscalYear, FiscalYearId, JournalEntry, JournalEntryId,
    JournalLine, JournalLineId, LineUpdate, Period, PeriodId, validate_entry_date,
    validate_entry_lines, validate_line,
};
use ledgerguard_core::{DomainError, DomainResult, Record};

use crate::context::Context;

/// In-memory journal store.
///
/// Intended for tests/dev and as the reference semantics of the rule set.
/// Every mutating operation validates before it touches any map, so a
/// rejected call leaves the store unchanged.
#[derive(Debug, Default)]
pub struct JournalStore {
    companies: HashMap<CompanyId, Company>,
    fiscal_years: HashMap<FiscalYearId, FiscalYear>,
    periods: HashMap<PeriodId, Period>,
    entries: HashMap<JournalEntryId, JournalEntry>,
    lines: HashMap<JournalLineId, JournalLine>,
}

fn insert_unique<R: Record>(
    map: &mut HashMap<R::Id, R>,
    record: R,
    what: &str,
) -> DomainResult<()> {
    if map.contains_key(&record.id()) {
        return Err(DomainError::conflict(format!(
            "{what} {:?} already exists",
            record.id()
        )));
    }
    map.insert(record.id(), record);
    Ok(())
}

impl JournalStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- registration -----------------------------------------------------

    pub fn register_company(&mut self, company: Company) -> DomainResult<()> {
        insert_unique(&mut self.companies, company, "company")
    }

    pub fn register_fiscal_year(&mut self, fiscal_year: FiscalYear) -> DomainResult<()> {
        insert_unique(&mut self.fiscal_years, fiscal_year, "fiscal year")
    }

    /// Registers a period; its fiscal year must already be known.
    pub fn register_period(&mut self, period: Period) -> DomainResult<()> {
        if !self.fiscal_years.contains_key(&period.fiscal_year_id) {
            return Err(DomainError::NotFound);
        }
        insert_unique(&mut self.periods, period, "period")
    }

    // --- browse -----------------------------------------------------------

    pub fn company(&self, id: CompanyId) -> DomainResult<&Company> {
        self.companies.get(&id).ok_or(DomainError::NotFound)
    }

    pub fn fiscal_year(&self, id: FiscalYearId) -> DomainResult<&FiscalYear> {
        self.fiscal_years.get(&id).ok_or(DomainError::NotFound)
    }

    pub fn period(&self, id: PeriodId) -> DomainResult<&Period> {
        self.periods.get(&id).ok_or(DomainError::NotFound)
    }

    pub fn entry(&self, id: JournalEntryId) -> DomainResult<&JournalEntry> {
        self.entries.get(&id).ok_or(DomainError::NotFound)
    }

    pub fn line(&self, id: JournalLineId) -> DomainResult<&JournalLine> {
        self.lines.get(&id).ok_or(DomainError::NotFound)
    }

    /// Lines of one entry, in id order (ids are time-ordered UUIDv7).
    pub fn entry_lines(&self, id: JournalEntryId) -> Vec<&JournalLine> {
        let mut lines: Vec<&JournalLine> = self
            .lines
            .values()
            .filter(|line| line.entry_id == id)
            .collect();
        lines.sort_by_key(|line| line.id);
        lines
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    // --- create/write/unlink ---------------------------------------------

    /// Create an entry together with its lines, all-or-nothing.
    ///
    /// Runs the fiscal-year bound, the structural entry checks and the full
    /// line rule table before anything is stored.
    pub fn create_entry(
        &mut self,
        entry: JournalEntry,
        lines: Vec<JournalLine>,
    ) -> DomainResult<JournalEntryId> {
        if self.entries.contains_key(&entry.id) {
            return Err(DomainError::conflict(format!(
                "journal entry {} already exists",
                entry.id
            )));
        }

        let mut batch_ids: HashSet<JournalLineId> = HashSet::with_capacity(lines.len());
        for line in &lines {
            if line.entry_id != entry.id {
                return Err(DomainError::invariant(format!(
                    "line {} does not belong to entry {}",
                    line.id, entry.id
                )));
            }
            if self.lines.contains_key(&line.id) || !batch_ids.insert(line.id) {
                return Err(DomainError::conflict(format!(
                    "journal line {} already exists",
                    line.id
                )));
            }
        }

        self.company(entry.company_id)?;
        let period = self.period(entry.period_id)?;
        let fiscal_year = self.fiscal_year(period.fiscal_year_id)?;
        validate_entry_date(&entry, fiscal_year)?;

        validate_entry_lines(&lines)?;
        for line in &lines {
            let company = self.company(line.company_id)?;
            validate_line(line, company)?;
        }

        let id = entry.id;
        tracing::debug!(entry = %id, lines = lines.len(), "journal entry created");
        self.entries.insert(id, entry);
        for line in lines {
            self.lines.insert(line.id, line);
        }
        Ok(id)
    }

    /// Apply a field patch to an entry; the fiscal-year bound is re-checked
    /// against the patched date and period.
    pub fn write_entry(&mut self, id: JournalEntryId, update: &EntryUpdate) -> DomainResult<()> {
        let mut updated = self.entry(id)?.clone();
        update.apply_to(&mut updated);

        let period = self.period(updated.period_id)?;
        let fiscal_year = self.fiscal_year(period.fiscal_year_id)?;
        validate_entry_date(&updated, fiscal_year)?;

        self.entries.insert(id, updated);
        Ok(())
    }

    /// Apply a field patch to a line.
    ///
    /// Rejected when the line was generated by a document, unless `ctx` is
    /// the parent-document context. The patched line is re-validated against
    /// the full rule table.
    pub fn write_line(
        &mut self,
        ctx: &Context,
        id: JournalLineId,
        update: &LineUpdate,
    ) -> DomainResult<()> {
        let line = self.line(id)?;
        if !ctx.is_from_parent_document() {
            if let Err(err) = line.ensure_directly_editable() {
                tracing::warn!(line = %id, %err, "rejected direct write of a generated line");
                return Err(err);
            }
        }

        let mut updated = line.clone();
        update.apply_to(&mut updated);

        let company = self.company(updated.company_id)?;
        validate_line(&updated, company)?;

        self.lines.insert(id, updated);
        Ok(())
    }

    /// Remove a line.
    ///
    /// Rejected when the line was generated by a document, unless `ctx` is
    /// the parent-document context.
    pub fn unlink_line(&mut self, ctx: &Context, id: JournalLineId) -> DomainResult<()> {
        let line = self.line(id)?;
        if !ctx.is_from_parent_document() {
            if let Err(err) = line.ensure_directly_editable() {
                tracing::warn!(line = %id, %err, "rejected direct unlink of a generated line");
                return Err(err);
            }
        }

        self.lines.remove(&id);
        tracing::debug!(line = %id, "journal line unlinked");
        Ok(())
    }

    /// Remove an entry and all of its lines.
    ///
    /// The origin guard applies to every line first, so either the whole
    /// entry goes or nothing does.
    pub fn unlink_entry(&mut self, ctx: &Context, id: JournalEntryId) -> DomainResult<()> {
        self.entry(id)?;

        let line_ids: Vec<JournalLineId> = self.entry_lines(id).iter().map(|l| l.id).collect();
        if !ctx.is_from_parent_document() {
            for line_id in &line_ids {
                self.lines[line_id].ensure_directly_editable()?;
            }
        }

        for line_id in line_ids {
            self.lines.remove(&line_id);
        }
        self.entries.remove(&id);
        tracing::debug!(entry = %id, "journal entry unlinked");
        Ok(())
    }
}
