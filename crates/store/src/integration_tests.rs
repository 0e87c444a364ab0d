//! Whole-store scenarios: calendar registration through guarded cleanup.

use chrono::NaiveDate;
use ledgerguard_accounting::{
    Account, Company, CompanyId, CurrencyCode, DocumentOrigin, FiscalYear, FiscalYearId,
    JournalEntry, JournalEntryId, JournalLine, JournalLineId, LineUpdate, Period, PeriodId,
    StatementId,
};
use ledgerguard_core::{DomainError, RecordId};
use proptest::prelude::*;

use crate::context::Context;
use crate::journal_store::JournalStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct World {
    store: JournalStore,
    company_id: CompanyId,
    period_id: PeriodId,
}

fn world() -> World {
    let mut store = JournalStore::new();

    let company_id = CompanyId::new(RecordId::new());
    store
        .register_company(Company {
            id: company_id,
            name: "Acme SA".to_string(),
            currency: CurrencyCode::new("CHF").unwrap(),
        })
        .unwrap();

    let fiscal_year_id = FiscalYearId::new(RecordId::new());
    store
        .register_fiscal_year(
            FiscalYear::new(
                fiscal_year_id,
                "FY2024",
                date(2024, 1, 1),
                date(2024, 12, 31),
            )
            .unwrap(),
        )
        .unwrap();

    let period_id = PeriodId::new(RecordId::new());
    store
        .register_period(Period {
            id: period_id,
            name: "2024-Q1".to_string(),
            fiscal_year_id,
        })
        .unwrap();

    World {
        store,
        company_id,
        period_id,
    }
}

fn statement_entry(world: &World, amount: i64) -> (JournalEntry, Vec<JournalLine>) {
    let entry_id = JournalEntryId::new(RecordId::new());
    let entry = JournalEntry {
        id: entry_id,
        name: "BNK/2024/0001".to_string(),
        date: date(2024, 2, 2),
        period_id: world.period_id,
        company_id: world.company_id,
    };
    let origin = DocumentOrigin::Statement {
        id: StatementId::new(RecordId::new()),
        name: "BNK/2024".to_string(),
    };
    let bank = Account {
        code: "1020".to_string(),
        name: "Bank".to_string(),
    };
    let income = Account {
        code: "3200".to_string(),
        name: "Sales".to_string(),
    };
    let lines = vec![
        JournalLine {
            id: JournalLineId::new(RecordId::new()),
            entry_id,
            name: "deposit".to_string(),
            account: bank,
            company_id: world.company_id,
            debit: amount,
            credit: 0,
            currency: None,
            amount_currency: 0,
            origin: Some(origin.clone()),
        },
        JournalLine {
            id: JournalLineId::new(RecordId::new()),
            entry_id,
            name: "deposit".to_string(),
            account: income,
            company_id: world.company_id,
            debit: 0,
            credit: amount,
            currency: None,
            amount_currency: 0,
            origin: Some(origin),
        },
    ];
    (entry, lines)
}

#[test]
fn generated_entry_survives_direct_mutation_and_yields_to_its_document() {
    let mut w = world();
    let (entry, lines) = statement_entry(&w, 5_000);
    let entry_id = w.store.create_entry(entry, lines).unwrap();

    // Direct attempts, one per operation, all rejected with the statement named.
    let ctx = Context::new();
    let line_id = w.store.entry_lines(entry_id)[0].id;

    let err = w.store.unlink_line(&ctx, line_id).unwrap_err();
    assert!(err.to_string().contains("bank statement BNK/2024"));

    let err = w
        .store
        .write_line(
            &ctx,
            line_id,
            &LineUpdate {
                debit: Some(1),
                credit: Some(1),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, DomainError::DocumentGenerated(_)));

    let err = w.store.unlink_entry(&ctx, entry_id).unwrap_err();
    assert!(matches!(err, DomainError::DocumentGenerated(_)));

    // Nothing moved.
    assert_eq!(w.store.entry_count(), 1);
    assert_eq!(w.store.line_count(), 2);
    assert_eq!(w.store.line(line_id).unwrap().debit, 5_000);

    // The owning document's context cleans up in one call.
    w.store
        .unlink_entry(&Context::from_parent_document(), entry_id)
        .unwrap();
    assert_eq!(w.store.entry_count(), 0);
    assert_eq!(w.store.line_count(), 0);
    assert!(matches!(
        w.store.entry(entry_id).unwrap_err(),
        DomainError::NotFound
    ));
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Property: no standard-context write, whatever the patch, can touch a
    /// generated line; the stored line is bit-for-bit unchanged afterwards.
    #[test]
    fn generated_lines_are_immutable_under_standard_context(
        debit in proptest::option::of(0i64..1_000_000i64),
        credit in proptest::option::of(0i64..1_000_000i64),
        amount_currency in proptest::option::of(-1_000i64..1_000i64),
        rename in proptest::option::of("[a-z]{1,12}"),
    ) {
        let mut w = world();
        let (entry, lines) = statement_entry(&w, 700);
        let entry_id = w.store.create_entry(entry, lines).unwrap();
        let line_id = w.store.entry_lines(entry_id)[0].id;
        let before = w.store.line(line_id).unwrap().clone();

        let update = LineUpdate {
            name: rename,
            debit,
            credit,
            amount_currency,
            ..Default::default()
        };
        let err = w.store.write_line(&Context::new(), line_id, &update).unwrap_err();
        prop_assert!(matches!(err, DomainError::DocumentGenerated(_)));
        prop_assert_eq!(w.store.line(line_id).unwrap(), &before);
    }
}
