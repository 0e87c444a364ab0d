//! Accounting integrity rules.
//!
//! Line rules are a declarative table of named pure predicates; the store runs
//! the whole table on every line save and rejects on the first failure. The
//! entry-level checks have their own signatures because they need the fiscal
//! calendar or the full line set.

use ledgerguard_core::{DomainError, DomainResult};

use crate::calendar::FiscalYear;
use crate::company::Company;
use crate::journal::{JournalEntry, JournalLine};

/// One registered integrity rule over a journal line.
pub struct LineRule {
    pub name: &'static str,
    /// User-facing message when the predicate fails.
    pub message: &'static str,
    /// Pure predicate; `true` means the line is acceptable.
    pub check: fn(&JournalLine, &Company) -> bool,
}

/// The registered line rules, evaluated in order on every line save.
pub const LINE_RULES: &[LineRule] = &[
    LineRule {
        name: "currency_amount_pairing",
        message: "a secondary currency requires recording both the currency \
                  and the currency amount",
        check: |line, _| line.currency.is_some() == (line.amount_currency != 0),
    },
    LineRule {
        name: "currency_amount_sign",
        message: "the currency amount must be positive on debit lines and \
                  negative on credit lines",
        check: |line, _| {
            if line.amount_currency > 0 {
                line.debit > 0
            } else if line.amount_currency < 0 {
                line.credit > 0
            } else {
                true
            }
        },
    },
    LineRule {
        name: "currency_differs_from_company",
        message: "the secondary currency must differ from the company currency",
        check: |line, company| match &line.currency {
            Some(currency) => *currency != company.currency,
            None => true,
        },
    },
    LineRule {
        name: "non_negative_sides",
        message: "debit and credit amounts cannot be negative",
        check: |line, _| line.debit >= 0 && line.credit >= 0,
    },
];

/// Run every registered line rule; first failure aborts with its message.
pub fn validate_line(line: &JournalLine, company: &Company) -> DomainResult<()> {
    for rule in LINE_RULES {
        if !(rule.check)(line, company) {
            return Err(DomainError::validation(rule.message));
        }
    }
    Ok(())
}

/// The entry date must fall inside the fiscal year of the entry's period.
pub fn validate_entry_date(entry: &JournalEntry, fiscal_year: &FiscalYear) -> DomainResult<()> {
    if !fiscal_year.contains(entry.date) {
        return Err(DomainError::validation(format!(
            "entry {} is dated {}, outside fiscal year {} ({} to {})",
            entry.name,
            entry.date,
            fiscal_year.name,
            fiscal_year.date_start(),
            fiscal_year.date_stop(),
        )));
    }
    Ok(())
}

/// Structural checks on an entry's line set: non-empty and balanced.
pub fn validate_entry_lines(lines: &[JournalLine]) -> DomainResult<()> {
    if lines.is_empty() {
        return Err(DomainError::validation(
            "journal entry must have at least one line",
        ));
    }

    let mut debit_total: i128 = 0;
    let mut credit_total: i128 = 0;
    for line in lines {
        debit_total += line.debit as i128;
        credit_total += line.credit as i128;
    }

    if debit_total != credit_total {
        return Err(DomainError::invariant(format!(
            "journal entry is unbalanced (debit {debit_total}, credit {credit_total})"
        )));
    }
    Ok(())
}
