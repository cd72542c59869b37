//! Property-based tests for csvfill.
//!
//! These tests use proptest to generate random inputs and verify that
//! classification, tokenizing, aggregates and imputation keep their
//! invariants.

use proptest::prelude::*;

use csvfill::input::{read_rows, tokenize_line};
use csvfill::{classify, CellType, ImputationEngine, Instruction, Operation, Reduction, Table};

// =============================================================================
// Test Strategies
// =============================================================================

/// Cells that are mostly numeric with the occasional word.
fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => any::<i32>().prop_map(|v| v.to_string()),
        2 => any::<i64>().prop_map(|v| v.to_string()),
        2 => (-1.0e6f64..1.0e6).prop_map(|v| format!("{:.3}", v)),
        1 => "[a-z]{1,6}",
    ]
}

fn numeric_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i32>().prop_map(|v| v.to_string()),
        any::<i64>().prop_map(|v| v.to_string()),
        (-1.0e6f64..1.0e6).prop_map(|v| format!("{:.2}", v)),
    ]
}

fn ragged_rows() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(numeric_cell(), 1..6), 1..8)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn classify_never_panics(s in "\\PC{0,40}") {
        let _ = classify(&s);
    }

    #[test]
    fn integers_classify_by_width(v in any::<i64>()) {
        let expected = if i32::try_from(v).is_ok() { CellType::Integer } else { CellType::Long };
        prop_assert_eq!(classify(&v.to_string()), expected);
    }

    #[test]
    fn tokenize_round_trips(cells in prop::collection::vec("[^,\\r\\n]{0,8}", 1..10)) {
        let line = cells.join(",");
        prop_assert_eq!(tokenize_line(&line), cells);
    }

    #[test]
    fn blank_line_ends_table(
        before in prop::collection::vec("[0-9]{1,3}(,[0-9]{1,3}){0,3}", 0..5),
        after in prop::collection::vec("[0-9]{1,3}", 1..5),
    ) {
        let text = format!("{}\n\n{}", before.join("\n"), after.join("\n"));
        let rows = read_rows(text.as_bytes()).unwrap();
        prop_assert_eq!(rows.len(), before.len());
    }

    #[test]
    fn aggregates_are_repeatable(rows in prop::collection::vec(prop::collection::vec(cell(), 1..5), 2..6)) {
        let table = Table::new(rows, false);
        let before = table.clone();

        for reduction in [Reduction::Sum, Reduction::Average, Reduction::Min, Reduction::Max] {
            let first = table.aggregate_column(0, reduction).map_err(|e| e.to_string());
            let second = table.aggregate_column(0, reduction).map_err(|e| e.to_string());
            prop_assert_eq!(first, second);

            let first = table.aggregate_row(1, reduction).map_err(|e| e.to_string());
            let second = table.aggregate_row(1, reduction).map_err(|e| e.to_string());
            prop_assert_eq!(first, second);
        }
        prop_assert_eq!(table, before);
    }

    #[test]
    fn imputation_adds_at_most_one_cell(rows in ragged_rows(), constant in "[a-z]{1,4}") {
        let mut table = Table::new(rows, false);
        let before = table.clone();
        let width = before.max_row_len();

        let engine = ImputationEngine::new(Some(Instruction::new(0, Operation::Constant(constant))));
        let summary = engine.apply(&mut table).unwrap();

        for (old, new) in before.rows().iter().zip(table.rows()) {
            if old.len() < width {
                prop_assert_eq!(new.len(), old.len() + 1);
            } else {
                prop_assert_eq!(new, old);
            }
        }
        prop_assert_eq!(summary.imputed_rows, summary.ragged_rows);
    }
}
