use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ledgerguard_core::{DomainError, DomainResult, Record, record_id};

record_id!(
    /// Fiscal year identifier.
    FiscalYearId
);

record_id!(
    /// Accounting period identifier.
    PeriodId
);

/// Fiscal year: the accounting span [`date_start`, `date_stop`], inclusive on
/// both ends, subdivided into periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYear {
    pub id: FiscalYearId,
    pub name: String,
    date_start: NaiveDate,
    date_stop: NaiveDate,
}

impl FiscalYear {
    pub fn new(
        id: FiscalYearId,
        name: impl Into<String>,
        date_start: NaiveDate,
        date_stop: NaiveDate,
    ) -> DomainResult<Self> {
        if date_start > date_stop {
            return Err(DomainError::validation(format!(
                "fiscal year cannot start ({date_start}) after it stops ({date_stop})"
            )));
        }
        Ok(Self {
            id,
            name: name.into(),
            date_start,
            date_stop,
        })
    }

    pub fn date_start(&self) -> NaiveDate {
        self.date_start
    }

    pub fn date_stop(&self) -> NaiveDate {
        self.date_stop
    }

    /// Whether `date` falls inside the fiscal year (bounds included).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.date_start <= date && date <= self.date_stop
    }
}

impl Record for FiscalYear {
    type Id = FiscalYearId;

    fn id(&self) -> FiscalYearId {
        self.id
    }
}

/// Accounting period within a fiscal year (e.g. a month or a quarter).
///
/// Period boundaries themselves are not tracked here; the integrity rules
/// only need the period as the entry's link to its fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub id: PeriodId,
    pub name: String,
    pub fiscal_year_id: FiscalYearId,
}

impl Record for Period {
    type Id = PeriodId;

    fn id(&self) -> PeriodId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerguard_core::RecordId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fiscal_year_bounds_are_inclusive() {
        let fy = FiscalYear::new(
            FiscalYearId::new(RecordId::new()),
            "FY2024",
            date(2024, 1, 1),
            date(2024, 12, 31),
        )
        .unwrap();

        assert!(fy.contains(date(2024, 1, 1)));
        assert!(fy.contains(date(2024, 12, 31)));
        assert!(fy.contains(date(2024, 6, 15)));
        assert!(!fy.contains(date(2023, 12, 31)));
        assert!(!fy.contains(date(2025, 1, 1)));
    }

    #[test]
    fn inverted_fiscal_year_is_rejected() {
        let err = FiscalYear::new(
            FiscalYearId::new(RecordId::new()),
            "FY-bad",
            date(2024, 12, 31),
            date(2024, 1, 1),
        )
        .unwrap_err();

        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
