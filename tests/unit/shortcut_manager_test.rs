use rstest::rstest;

use quantum_browser::managers::shortcut_manager::{
    ModifierMatch, ShortcutManager, ShortcutManagerTrait,
};
use quantum_browser::types::event::ShellAction;
use quantum_browser::types::shortcut::{Key, KeyCombo, Modifiers};

fn press(keys: &str) -> KeyCombo {
    KeyCombo::parse(keys).unwrap()
}

#[test]
fn test_default_table_parses() {
    let bindings = ShortcutManager::default_bindings().unwrap();
    assert_eq!(bindings.len(), 7);
    assert_eq!(ShortcutManager::new().bindings(), bindings.as_slice());
}

#[rstest]
#[case("Ctrl+T", ShellAction::NewTab)]
#[case("Ctrl+t", ShellAction::NewTab)]
#[case("Ctrl+W", ShellAction::CloseActiveTab)]
#[case("Ctrl+L", ShellAction::FocusAddressBar)]
#[case("Ctrl+R", ShellAction::Reload)]
#[case("F5", ShellAction::Reload)]
#[case("Alt+Left", ShellAction::Back)]
#[case("Alt+Right", ShellAction::Forward)]
fn test_default_bindings_resolve(#[case] keys: &str, #[case] expected: ShellAction) {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.resolve(&press(keys)), Some(expected));
}

#[rstest]
#[case("T")]
#[case("Ctrl+Shift+T")]
#[case("Alt+T")]
#[case("Ctrl+Left")]
#[case("Left")]
#[case("Ctrl+Q")]
fn test_unbound_combinations_resolve_to_nothing(#[case] keys: &str) {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.resolve(&press(keys)), None);
}

#[test]
fn test_f5_ignores_modifiers() {
    let mgr = ShortcutManager::new();
    let with_shift = KeyCombo::new(
        Key::Function(5),
        Modifiers {
            shift: true,
            ..Modifiers::NONE
        },
    );
    assert_eq!(mgr.resolve(&with_shift), Some(ShellAction::Reload));
    assert_eq!(mgr.resolve(&press("Ctrl+F5")), Some(ShellAction::Reload));
}

#[test]
fn test_f5_is_the_only_loose_binding() {
    let mgr = ShortcutManager::new();
    let loose: Vec<String> = mgr
        .bindings()
        .iter()
        .filter(|b| b.modifiers == ModifierMatch::Any)
        .map(|b| b.combo.to_string())
        .collect();
    assert_eq!(loose, vec!["F5".to_string()]);
}

#[test]
fn test_keys_for_reload_lists_both_bindings() {
    let mgr = ShortcutManager::new();
    assert_eq!(
        mgr.keys_for(ShellAction::Reload),
        vec!["Ctrl+R".to_string(), "F5".to_string()]
    );
    assert!(mgr.keys_for(ShellAction::Bookmark).is_empty());
}
