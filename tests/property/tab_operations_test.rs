//! Property-based tests for tab registry operations.
//!
//! For any sequence of opens, closes and switches the registry keeps at least
//! one tab, keeps exactly one active tab in range, and never reorders the
//! tabs that remain.

use proptest::prelude::*;
use quantum_browser::engine::headless::{EventQueue, HeadlessFactory};
use quantum_browser::managers::tab_manager::{CloseOutcome, TabManager, TabManagerTrait};

#[derive(Debug, Clone)]
enum TabOp {
    Open,
    Close(usize),
    Switch(usize),
}

fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(TabOp::Open),
            2 => (0..12usize).prop_map(TabOp::Close),
            1 => (0..12usize).prop_map(TabOp::Switch),
        ],
        1..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    #[test]
    fn registry_invariants_hold(ops in arb_tab_ops()) {
        let mut manager = TabManager::new(
            HeadlessFactory::new(EventQueue::new()),
            "https://home.test",
        );
        manager.open_tab().unwrap();
        let mut model: Vec<String> = vec![manager.get_tab(0).unwrap().id.clone()];

        for op in &ops {
            match op {
                TabOp::Open => {
                    let index = manager.open_tab().unwrap();
                    prop_assert_eq!(index, model.len());
                    model.push(manager.get_tab(index).unwrap().id.clone());
                }
                TabOp::Close(index) => match manager.close_tab(*index) {
                    Ok(CloseOutcome::Closed(tab)) => {
                        prop_assert_eq!(&tab.id, &model[*index]);
                        model.remove(*index);
                    }
                    Ok(CloseOutcome::ExitRequested) => prop_assert_eq!(model.len(), 1),
                    Err(_) => prop_assert!(*index >= model.len()),
                },
                TabOp::Switch(index) => {
                    let result = manager.set_active(*index);
                    prop_assert_eq!(result.is_ok(), *index < model.len());
                }
            }

            let ids: Vec<String> = manager.get_all_tabs().iter().map(|t| t.id.clone()).collect();
            prop_assert_eq!(&ids, &model);
            prop_assert!(manager.tab_count() >= 1);

            let active = manager.active_index().unwrap();
            prop_assert!(active < manager.tab_count());
            let labels = manager.tab_labels();
            prop_assert_eq!(labels.iter().filter(|l| l.active).count(), 1);
            prop_assert!(labels[active].active);
        }
    }

    #[test]
    fn closing_active_tab_moves_to_right_neighbour(count in 2..8usize, pick in 0..8usize) {
        let mut manager = TabManager::new(
            HeadlessFactory::new(EventQueue::new()),
            "https://home.test",
        );
        for _ in 0..count {
            manager.open_tab().unwrap();
        }
        let target = pick % count;
        manager.set_active(target).unwrap();
        let ids: Vec<String> = manager.get_all_tabs().iter().map(|t| t.id.clone()).collect();

        manager.close_tab(target).unwrap();

        let expected = if target + 1 < count { &ids[target + 1] } else { &ids[target - 1] };
        prop_assert_eq!(&manager.active_tab().unwrap().id, expected);
    }
}
