//! Property-based tests for History Manager operations.
//!
//! Any sequence of appends and removals keeps the list within capacity,
//! most-recent-first, and consistent with a simple model.

use std::sync::Arc;

use proptest::prelude::*;
use securegen::database::MemoryStore;
use securegen::managers::history_manager::{HistoryManager, HistoryManagerTrait, HISTORY_CAPACITY};
use securegen::services::strength_scorer::score_password;
use securegen::types::generation::{GeneratedPassword, GenerationConfig};

#[derive(Debug, Clone)]
enum Op {
    Append(String),
    Remove(usize),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => "[A-Za-z0-9!#]{4,16}".prop_map(Op::Append),
        3 => (0usize..12).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

fn generated(password: &str) -> GeneratedPassword {
    GeneratedPassword::new(
        password.to_string(),
        score_password(password),
        GenerationConfig::default(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn history_matches_model(ops in proptest::collection::vec(arb_op(), 0..40)) {
        let history = HistoryManager::new(Arc::new(MemoryStore::new()));
        let mut model: Vec<String> = Vec::new();

        for op in ops {
            match op {
                Op::Append(password) => {
                    history.record(&generated(&password)).unwrap();
                    model.insert(0, password);
                    model.truncate(HISTORY_CAPACITY);
                }
                Op::Remove(index) => {
                    let result = history.remove(index);
                    if index < model.len() {
                        let removed = result.unwrap();
                        let expected = model.remove(index);
                        prop_assert_eq!(removed.generated.password(), expected.as_str());
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::Clear => {
                    history.clear().unwrap();
                    model.clear();
                }
            }

            let listed: Vec<String> = history
                .list()
                .iter()
                .map(|e| e.generated.password().to_string())
                .collect();
            prop_assert!(listed.len() <= HISTORY_CAPACITY);
            prop_assert_eq!(&listed, &model);
        }
    }

    #[test]
    fn entries_keep_their_scores(passwords in proptest::collection::vec("[ -~]{4,20}", 1..15)) {
        let history = HistoryManager::new(Arc::new(MemoryStore::new()));
        for password in &passwords {
            history.record(&generated(password)).unwrap();
        }
        for entry in history.list() {
            prop_assert_eq!(entry.generated.report(), score_password(entry.generated.password()));
        }
    }
}
