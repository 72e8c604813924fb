//! Capability seam between the shell and the embedded rendering engine.
//!
//! The shell only ever talks to an engine view through [`EngineView`]; page
//! rendering, scripting, networking and per-view navigation history stay on
//! the engine side. Engine notifications come back as
//! [`EngineEvent`](crate::types::event::EngineEvent)s through whatever queue
//! the host event loop provides.

pub mod headless;

/// One embedded engine view, owned by exactly one tab.
pub trait EngineView {
    fn load(&mut self, url: &str);
    fn back(&mut self);
    fn forward(&mut self);
    fn reload(&mut self);
    fn current_url(&self) -> String;
    fn current_title(&self) -> String;

    /// Shows or hides the view when its tab becomes (in)active.
    fn set_visible(&mut self, _visible: bool) {}
}

/// Creates engine views for newly opened tabs.
pub trait ViewFactory {
    type View: EngineView;

    /// Creates a view for `tab_id` that starts loading `url`.
    fn create_view(&mut self, tab_id: &str, url: &str) -> Result<Self::View, String>;
}
