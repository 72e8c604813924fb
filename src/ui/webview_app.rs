//! Browser window built on `tao` + `wry`.
//!
//! Layout:
//! - one chrome WebView across the top (tab strip, toolbar, address field,
//!   status line), served from the `qb://` custom protocol;
//! - one content WebView per tab below it, only the active one visible.
//!
//! Every callback (chrome IPC, page IPC, page load, title change) is turned
//! into a [`UserEvent`] and posted through the event-loop proxy, so the app
//! core is only ever touched from the loop thread.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use tao::dpi::{LogicalPosition, LogicalSize};
use tao::event::{ElementState, Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::keyboard::{Key as TaoKey, ModifiersState};
use tao::window::{Window, WindowBuilder};
use tracing::{debug, info, warn};
use wry::{Rect, WebView, WebViewBuilder};

use super::wry_view::WryViewFactory;
use crate::app::App;
use crate::ipc::{parse_ipc, IpcRequest};
use crate::managers::tab_manager::TabManagerTrait;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::event::{EngineEvent, ShellMessage, UiUpdate};
use crate::types::shortcut::{Key, KeyCombo, Modifiers};

/// Height of the chrome strip in logical pixels.
const CHROME_HEIGHT: f64 = 92.0;

const CHROME_URL: &str = "qb://localhost/chrome";
const CHROME_CSS: &str = include_str!("../../resources/ui/chrome.css");
const CHROME_BODY: &str = include_str!("../../resources/ui/chrome.html");
const CHROME_JS: &str = include_str!("../../resources/ui/chrome.js");

/// Injected into every content page: forwards shortcut keys over IPC.
pub const PAGE_HOOKS_JS: &str = include_str!("../../resources/ui/page_hooks.js");

/// Home URL snapshot read by the settings page.
pub type SharedHomepage = Arc<Mutex<String>>;

#[derive(Debug)]
pub enum UserEvent {
    Engine(EngineEvent),
    ChromeIpc(String),
    PageIpc { tab_id: String, body: String },
}

// ─── Internal pages ───

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn internal_page(body: &str, extra_css: &str, js: &str) -> String {
    let mut html = String::with_capacity(body.len() + CHROME_CSS.len() + extra_css.len() + js.len() + 256);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(CHROME_CSS);
    html.push_str(extra_css);
    html.push_str("</style></head><body>");
    html.push_str(body);
    html.push_str("<script>");
    html.push_str(js);
    html.push_str("</script></body></html>");
    html
}

fn chrome_html() -> String {
    internal_page(CHROME_BODY, "", CHROME_JS)
}

fn settings_html(homepage: &str) -> String {
    let body = format!(
        r#"<div class="settings-page">
<h1>Quantum Browser v{version}</h1>
<h2>Settings</h2>
<label class="settings-row">Home Page:
<input id="s-home" type="text" value="{home}" spellcheck="false" /></label>
<div class="settings-buttons"><button id="s-save">Save</button><button id="s-cancel">Cancel</button></div>
<div id="s-saved" class="settings-saved"></div>
</div>"#,
        version = env!("CARGO_PKG_VERSION"),
        home = html_escape(homepage),
    );

    let js = r#"
var home=document.getElementById('s-home');
var initial=home.value;
document.getElementById('s-save').addEventListener('click',function(){
  if(window.ipc)window.ipc.postMessage(JSON.stringify({cmd:'set_homepage',url:home.value}));
  document.getElementById('s-saved').textContent='Saved';
});
document.getElementById('s-cancel').addEventListener('click',function(){
  home.value=initial;
  document.getElementById('s-saved').textContent='';
});
"#;

    let css = ".settings-page{padding:32px 48px;max-width:640px}\
.settings-page h1{font-size:18px;color:var(--accent)}\
.settings-page h2{font-size:14px;margin:16px 0;color:var(--fg-muted)}\
.settings-row{display:flex;gap:12px;align-items:center}\
.settings-row input{flex:1}\
.settings-buttons{margin-top:24px;display:flex;gap:8px}\
.settings-saved{margin-top:12px;color:var(--fg-muted)}\
body{overflow:auto}";

    internal_page(&body, css, js)
}

/// Serves `qb://localhost/<path>`.
pub fn protocol_response(
    path: &str,
    homepage: &SharedHomepage,
) -> wry::http::Response<Cow<'static, [u8]>> {
    let html = match path {
        "/chrome" => chrome_html(),
        "/settings" => {
            let home = homepage.lock().map(|h| h.clone()).unwrap_or_default();
            settings_html(&home)
        }
        other => {
            warn!(path = other, "unknown internal page");
            return wry::http::Response::builder()
                .status(404)
                .body(Cow::from(b"Not Found".to_vec()))
                .unwrap_or_default();
        }
    };
    wry::http::Response::builder()
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Cow::from(html.into_bytes()))
        .unwrap_or_default()
}

fn is_internal_url(url: &str) -> bool {
    url.starts_with("qb://") || url.starts_with("http://qb.localhost")
}

// ─── Layout ───

fn chrome_bounds(width: f64) -> Rect {
    Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, CHROME_HEIGHT)),
    }
}

fn content_bounds(width: f64, height: f64) -> Rect {
    Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, CHROME_HEIGHT)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            width,
            (height - CHROME_HEIGHT).max(0.0),
        )),
    }
}

// ─── Keyboard ───

fn convert_key(key: &TaoKey<'_>) -> Option<Key> {
    match key {
        TaoKey::Character(s) => s.parse().ok(),
        TaoKey::F5 => Some(Key::Function(5)),
        TaoKey::ArrowLeft => Some(Key::Left),
        TaoKey::ArrowRight => Some(Key::Right),
        TaoKey::ArrowUp => Some(Key::Up),
        TaoKey::ArrowDown => Some(Key::Down),
        TaoKey::Enter => Some(Key::Enter),
        TaoKey::Escape => Some(Key::Escape),
        _ => None,
    }
}

fn convert_modifiers(state: ModifiersState) -> Modifiers {
    Modifiers::from_platform(
        state.control_key(),
        state.alt_key(),
        state.shift_key(),
        state.super_key(),
    )
}

// ─── Shell ───

struct Shell {
    app: App<WryViewFactory>,
    chrome: WebView,
    window: Rc<Window>,
    homepage: SharedHomepage,
    modifiers: ModifiersState,
}

impl Shell {
    /// Runs one message through the app core. Returns true when the app must exit.
    fn dispatch(&mut self, message: ShellMessage) -> bool {
        let saves_homepage = matches!(message, ShellMessage::SetHomepage(_));
        let updates = self.app.handle(message);
        if saves_homepage {
            let home = self.app.tab_manager.home_url().to_string();
            if let Ok(mut shared) = self.homepage.lock() {
                *shared = home;
            }
        }
        self.apply(&updates)
    }

    fn apply(&mut self, updates: &[UiUpdate]) -> bool {
        if updates.is_empty() {
            return false;
        }

        let mut exit = false;
        for update in updates {
            match update {
                UiUpdate::WindowTitle { title } => self.window.set_title(title),
                UiUpdate::FocusAddressBar => {
                    let _ = self.chrome.focus();
                }
                UiUpdate::Exit => exit = true,
                _ => {}
            }
        }

        match serde_json::to_string(updates) {
            Ok(json) => {
                if let Err(e) = self
                    .chrome
                    .evaluate_script(&format!("if(window.__qb_apply)__qb_apply({})", json))
                {
                    warn!(error = %e, "chrome update failed");
                }
            }
            Err(e) => warn!(error = %e, "could not serialize UI updates"),
        }
        exit
    }

    fn on_chrome_ipc(&mut self, body: &str) -> bool {
        match parse_ipc(body) {
            Some(IpcRequest::Ready) => {
                let snapshot = self.app.snapshot();
                self.apply(&snapshot)
            }
            Some(IpcRequest::Message(message)) => self.dispatch(message),
            None => false,
        }
    }

    /// Pages may only send shortcut keys; the settings page may also save
    /// the home page.
    fn on_page_ipc(&mut self, tab_id: &str, body: &str) -> bool {
        let message = match parse_ipc(body) {
            Some(IpcRequest::Message(message)) => message,
            _ => return false,
        };

        let allowed = match &message {
            ShellMessage::Key(_) => true,
            ShellMessage::SetHomepage(_) => self
                .app
                .tab_manager
                .tab_index(tab_id)
                .and_then(|i| self.app.tab_manager.get_tab(i))
                .is_some_and(|tab| is_internal_url(&tab.url)),
            _ => false,
        };

        if !allowed {
            warn!(tab = tab_id, ?message, "page IPC rejected");
            return false;
        }
        self.dispatch(message)
    }

    fn on_key(&mut self, key: &TaoKey<'_>) -> bool {
        let Some(key) = convert_key(key) else {
            return false;
        };
        let combo = KeyCombo::new(key, convert_modifiers(self.modifiers));
        self.dispatch(ShellMessage::Key(combo))
    }

    fn relayout(&mut self) {
        let size = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        if let Err(e) = self.chrome.set_bounds(chrome_bounds(size.width)) {
            warn!(error = %e, "chrome set_bounds failed");
        }
        let content = content_bounds(size.width, size.height);
        for view in self.app.tab_manager.views_mut() {
            view.set_bounds(content.clone());
        }
        self.app.tab_manager.factory_mut().set_bounds(content);
    }
}

// ─── Main entry point ───

pub fn run(settings_engine: SettingsEngine) {
    let settings = settings_engine.get_settings().clone();

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&settings.window.title)
        .with_inner_size(LogicalSize::new(
            settings.window.width as f64,
            settings.window.height as f64,
        ))
        .with_position(LogicalPosition::new(settings.window.x, settings.window.y))
        .build(&event_loop)
        .expect("Failed to create window");
    let window = Rc::new(window);

    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    let homepage: SharedHomepage = Arc::new(Mutex::new(settings.general.homepage.clone()));

    let chrome_proxy = proxy.clone();
    let chrome_home = Arc::clone(&homepage);
    let chrome = WebViewBuilder::new()
        .with_bounds(chrome_bounds(size.width))
        .with_custom_protocol("qb".into(), move |_wv_id, request| {
            protocol_response(request.uri().path(), &chrome_home)
        })
        .with_url(CHROME_URL)
        .with_ipc_handler(move |request: wry::http::Request<String>| {
            let body = request.body();
            debug!(body_len = body.len(), "chrome IPC");
            let _ = chrome_proxy.send_event(UserEvent::ChromeIpc(body.clone()));
        })
        .with_devtools(cfg!(debug_assertions))
        .build_as_child(window.as_ref())
        .expect("Failed to create chrome WebView");

    let factory = WryViewFactory::new(
        Rc::clone(&window),
        proxy,
        Arc::clone(&homepage),
        content_bounds(size.width, size.height),
    );
    let app = App::new(factory, settings_engine).expect("Failed to initialize Quantum Browser");

    let mut shell = Shell {
        app,
        chrome,
        window,
        homepage,
        modifiers: ModifiersState::empty(),
    };
    info!("browser window ready");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        let exit = match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => true,

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                shell.relayout();
                false
            }

            Event::WindowEvent {
                event: WindowEvent::ModifiersChanged(state),
                ..
            } => {
                shell.modifiers = state;
                false
            }

            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } if event.state == ElementState::Pressed => shell.on_key(&event.logical_key),

            Event::UserEvent(UserEvent::Engine(engine_event)) => {
                shell.dispatch(ShellMessage::Engine(engine_event))
            }
            Event::UserEvent(UserEvent::ChromeIpc(body)) => shell.on_chrome_ipc(&body),
            Event::UserEvent(UserEvent::PageIpc { tab_id, body }) => {
                shell.on_page_ipc(&tab_id, &body)
            }

            _ => false,
        };

        if exit {
            info!("exiting");
            *control_flow = ControlFlow::Exit;
        }
    });
}
