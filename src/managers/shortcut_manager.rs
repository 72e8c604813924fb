//! Shortcut Manager for Quantum Browser.
//!
//! Maps key combinations to shell actions. The table is fixed:
//!
//! | Keys | Action |
//! |---|---|
//! | Ctrl+T | new tab |
//! | Ctrl+W | close active tab |
//! | Ctrl+L | focus address bar |
//! | Ctrl+R, F5 | reload |
//! | Alt+Left | back |
//! | Alt+Right | forward |
//!
//! Modifier bindings match only the exact modifier set, so Ctrl+Shift+T does
//! not open a tab. F5 reloads whatever modifiers are held.

use crate::types::errors::ShortcutError;
use crate::types::event::ShellAction;
use crate::types::shortcut::KeyCombo;

/// How strictly a binding compares modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierMatch {
    Exact,
    Any,
}

/// One row of the shortcut table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub combo: KeyCombo,
    pub action: ShellAction,
    pub modifiers: ModifierMatch,
}

impl Binding {
    pub fn matches(&self, pressed: &KeyCombo) -> bool {
        if self.combo.key != pressed.key {
            return false;
        }
        match self.modifiers {
            ModifierMatch::Exact => self.combo.modifiers == pressed.modifiers,
            ModifierMatch::Any => true,
        }
    }
}

/// Trait defining shortcut lookup operations.
pub trait ShortcutManagerTrait {
    fn resolve(&self, pressed: &KeyCombo) -> Option<ShellAction>;
    fn bindings(&self) -> &[Binding];
    fn keys_for(&self, action: ShellAction) -> Vec<String>;
}

/// Shortcut manager holding the default binding table.
pub struct ShortcutManager {
    bindings: Vec<Binding>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        // The default table is static and known to parse.
        let bindings = Self::default_bindings().unwrap_or_default();
        Self { bindings }
    }

    /// Builds the default table from its textual form.
    pub fn default_bindings() -> Result<Vec<Binding>, ShortcutError> {
        let defaults = [
            ("Ctrl+T", ShellAction::NewTab, ModifierMatch::Exact),
            ("Ctrl+W", ShellAction::CloseActiveTab, ModifierMatch::Exact),
            ("Ctrl+L", ShellAction::FocusAddressBar, ModifierMatch::Exact),
            ("Ctrl+R", ShellAction::Reload, ModifierMatch::Exact),
            ("F5", ShellAction::Reload, ModifierMatch::Any),
            ("Alt+Left", ShellAction::Back, ModifierMatch::Exact),
            ("Alt+Right", ShellAction::Forward, ModifierMatch::Exact),
        ];

        defaults
            .into_iter()
            .map(|(keys, action, modifiers)| -> Result<Binding, ShortcutError> {
                Ok(Binding {
                    combo: KeyCombo::parse(keys)?,
                    action,
                    modifiers,
                })
            })
            .collect()
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutManagerTrait for ShortcutManager {
    fn resolve(&self, pressed: &KeyCombo) -> Option<ShellAction> {
        self.bindings
            .iter()
            .find(|b| b.matches(pressed))
            .map(|b| b.action)
    }

    fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Display strings of every combination bound to `action`.
    fn keys_for(&self, action: ShellAction) -> Vec<String> {
        self.bindings
            .iter()
            .filter(|b| b.action == action)
            .map(|b| b.combo.to_string())
            .collect()
    }
}
