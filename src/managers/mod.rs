// Quantum Browser state managers
// Managers hold the shell's mutable state: tabs, history, bookmarks, shortcuts.

pub mod bookmark_manager;
pub mod history_manager;
pub mod shortcut_manager;
pub mod tab_manager;
