//! `wry`-backed engine views.
//!
//! Each tab gets its own child WebView. Engine callbacks never touch shell
//! state directly: they post [`UserEvent`]s through the tao event-loop proxy,
//! and the loop thread feeds them to the app core.

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use tracing::{debug, warn};
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use super::webview_app::{protocol_response, SharedHomepage, UserEvent, PAGE_HOOKS_JS};
use crate::engine::{EngineView, ViewFactory};
use crate::types::event::EngineEvent;

/// A content WebView owned by one tab.
pub struct WryView {
    webview: WebView,
    tab_id: String,
    last_url: String,
    title: Arc<Mutex<String>>,
}

impl WryView {
    pub fn set_bounds(&self, bounds: Rect) {
        if let Err(e) = self.webview.set_bounds(bounds) {
            warn!(tab = %self.tab_id, error = %e, "set_bounds failed");
        }
    }

    pub fn focus(&self) {
        let _ = self.webview.focus();
    }

    fn run_script(&self, js: &str) {
        if let Err(e) = self.webview.evaluate_script(js) {
            warn!(tab = %self.tab_id, error = %e, "script failed");
        }
    }
}

impl EngineView for WryView {
    fn load(&mut self, url: &str) {
        debug!(tab = %self.tab_id, url, "load");
        self.last_url = url.to_string();
        if let Err(e) = self.webview.load_url(url) {
            warn!(tab = %self.tab_id, url, error = %e, "load failed");
        }
    }

    fn back(&mut self) {
        self.run_script("history.back()");
    }

    fn forward(&mut self) {
        self.run_script("history.forward()");
    }

    fn reload(&mut self) {
        self.run_script("location.reload()");
    }

    fn current_url(&self) -> String {
        self.webview.url().unwrap_or_else(|_| self.last_url.clone())
    }

    fn current_title(&self) -> String {
        self.title.lock().map(|t| t.clone()).unwrap_or_default()
    }

    fn set_visible(&mut self, visible: bool) {
        if let Err(e) = self.webview.set_visible(visible) {
            warn!(tab = %self.tab_id, error = %e, "set_visible failed");
        }
        if visible {
            self.focus();
        }
    }
}

/// Builds child WebViews inside the main window, below the chrome strip.
pub struct WryViewFactory {
    window: Rc<Window>,
    proxy: EventLoopProxy<UserEvent>,
    homepage: SharedHomepage,
    bounds: Rect,
}

impl WryViewFactory {
    pub fn new(
        window: Rc<Window>,
        proxy: EventLoopProxy<UserEvent>,
        homepage: SharedHomepage,
        bounds: Rect,
    ) -> Self {
        Self {
            window,
            proxy,
            homepage,
            bounds,
        }
    }

    /// Bounds used for views created from now on.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

impl ViewFactory for WryViewFactory {
    type View = WryView;

    fn create_view(&mut self, tab_id: &str, url: &str) -> Result<WryView, String> {
        let title = Arc::new(Mutex::new(String::new()));

        let load_proxy = self.proxy.clone();
        let load_tab = tab_id.to_string();
        let title_proxy = self.proxy.clone();
        let title_tab = tab_id.to_string();
        let title_slot = Arc::clone(&title);
        let ipc_proxy = self.proxy.clone();
        let ipc_tab = tab_id.to_string();
        let homepage = Arc::clone(&self.homepage);

        let webview = WebViewBuilder::new()
            .with_bounds(self.bounds.clone())
            .with_url(url)
            .with_initialization_script(PAGE_HOOKS_JS)
            .with_custom_protocol("qb".into(), move |_wv_id, request| {
                protocol_response(request.uri().path(), &homepage)
            })
            .with_on_page_load_handler(move |event, url| {
                let tab_id = load_tab.clone();
                let _ = load_proxy.send_event(UserEvent::Engine(EngineEvent::UrlChanged {
                    tab_id: tab_id.clone(),
                    url,
                }));
                let finished = matches!(event, PageLoadEvent::Finished);
                let _ = load_proxy.send_event(UserEvent::Engine(EngineEvent::LoadProgress {
                    tab_id: tab_id.clone(),
                    percent: if finished { 100 } else { 0 },
                }));
                if finished {
                    let _ = load_proxy.send_event(UserEvent::Engine(EngineEvent::LoadFinished {
                        tab_id,
                    }));
                }
            })
            .with_document_title_changed_handler(move |new_title| {
                if let Ok(mut slot) = title_slot.lock() {
                    *slot = new_title.clone();
                }
                let _ = title_proxy.send_event(UserEvent::Engine(EngineEvent::TitleChanged {
                    tab_id: title_tab.clone(),
                    title: new_title,
                }));
            })
            .with_ipc_handler(move |request: wry::http::Request<String>| {
                let _ = ipc_proxy.send_event(UserEvent::PageIpc {
                    tab_id: ipc_tab.clone(),
                    body: request.body().clone(),
                });
            })
            .with_devtools(cfg!(debug_assertions))
            .build_as_child(self.window.as_ref())
            .map_err(|e| e.to_string())?;

        debug!(tab = tab_id, url, "content view created");
        Ok(WryView {
            webview,
            tab_id: tab_id.to_string(),
            last_url: url.to_string(),
            title,
        })
    }
}
