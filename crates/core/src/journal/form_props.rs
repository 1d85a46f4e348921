//! Property-based tests for the journal entry form.
//!
//! Random sequences of user edits are applied and the form's structural
//! invariants are checked after every single step.

use std::collections::HashSet;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::amount::cents_equal;
use super::form::JournalEntryForm;
use super::line::{LineField, LineId};

/// A single user edit. Line positions are taken modulo the current length.
#[derive(Debug, Clone)]
enum Edit {
    Add,
    Remove(usize),
    Debit(usize, i64),
    Credit(usize, i64),
    ClearDebit(usize),
    Text(usize, String),
}

/// Strategy to generate an amount in cents (0.00 to 10,000.00).
fn cents() -> impl Strategy<Value = i64> {
    0i64..1_000_000i64
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        Just(Edit::Add),
        (0usize..8).prop_map(Edit::Remove),
        (0usize..8, cents()).prop_map(|(i, c)| Edit::Debit(i, c)),
        (0usize..8, cents()).prop_map(|(i, c)| Edit::Credit(i, c)),
        (0usize..8).prop_map(Edit::ClearDebit),
        (0usize..8, "[a-z0-9 ]{0,6}").prop_map(|(i, s)| Edit::Text(i, s)),
    ]
}

fn id_at(form: &JournalEntryForm, index: usize) -> LineId {
    form.lines()[index % form.lines().len()].id
}

fn apply(form: &mut JournalEntryForm, edit: &Edit) {
    match edit {
        Edit::Add => {
            form.add_line();
        }
        Edit::Remove(i) => {
            form.remove_line(id_at(form, *i));
        }
        Edit::Debit(i, c) => {
            let id = id_at(form, *i);
            form.set_field(id, LineField::Debit, Decimal::new(*c, 2).to_string())
                .unwrap();
        }
        Edit::Credit(i, c) => {
            let id = id_at(form, *i);
            form.set_field(id, LineField::Credit, Decimal::new(*c, 2).to_string())
                .unwrap();
        }
        Edit::ClearDebit(i) => {
            let id = id_at(form, *i);
            form.set_field(id, LineField::Debit, "").unwrap();
        }
        Edit::Text(i, s) => {
            let id = id_at(form, *i);
            form.set_field(id, LineField::Vendor, s.clone()).unwrap();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Line numbers stay contiguous from 1 and at least one line remains.
    #[test]
    fn prop_line_numbers_contiguous(edits in prop::collection::vec(edit_strategy(), 0..40)) {
        let mut form = JournalEntryForm::new();
        for edit in &edits {
            apply(&mut form, edit);
            let numbers: Vec<u32> = form.lines().iter().map(|l| l.line_no).collect();
            let expected: Vec<u32> = (1..=u32::try_from(numbers.len()).unwrap()).collect();
            prop_assert_eq!(numbers, expected);
            prop_assert!(!form.lines().is_empty());
        }
    }

    /// Ids are unique and a new id is one past the largest existing id.
    #[test]
    fn prop_add_line_ids(edits in prop::collection::vec(edit_strategy(), 0..40)) {
        let mut form = JournalEntryForm::new();
        for edit in &edits {
            apply(&mut form, edit);
        }
        let max = form.lines().iter().map(|l| l.id.0).max().unwrap();
        let id = form.add_line();
        prop_assert_eq!(id, LineId(max + 1));

        let unique: HashSet<LineId> = form.lines().iter().map(|l| l.id).collect();
        prop_assert_eq!(unique.len(), form.lines().len());
    }

    /// No line ever carries both a debit and a credit.
    #[test]
    fn prop_debit_credit_exclusive(edits in prop::collection::vec(edit_strategy(), 0..40)) {
        let mut form = JournalEntryForm::new();
        for edit in &edits {
            apply(&mut form, edit);
            for line in form.lines() {
                prop_assert!(line.debit.is_empty() || line.credit.is_empty());
            }
        }
    }

    /// Totals always equal the sums of the parsed cells, and the balance
    /// flag agrees with them.
    #[test]
    fn prop_totals_track_lines(edits in prop::collection::vec(edit_strategy(), 0..40)) {
        let mut form = JournalEntryForm::new();
        for edit in &edits {
            apply(&mut form, edit);
            let debit: Decimal = form.lines().iter().map(|l| l.debit_amount()).sum();
            let credit: Decimal = form.lines().iter().map(|l| l.credit_amount()).sum();
            let totals = form.totals();
            prop_assert_eq!(totals.debit, debit);
            prop_assert_eq!(totals.credit, credit);
            prop_assert_eq!(
                totals.is_balanced,
                cents_equal(debit, credit) && debit > Decimal::ZERO
            );
        }
    }

    /// Removing the only remaining line changes nothing.
    #[test]
    fn prop_single_line_not_removable(c in cents()) {
        let mut form = JournalEntryForm::new();
        form.remove_line(LineId(2));
        form.set_field(LineId(1), LineField::Debit, Decimal::new(c, 2).to_string()).unwrap();
        let before = form.clone();
        prop_assert!(!form.remove_line(LineId(1)));
        prop_assert_eq!(form, before);
    }
}
