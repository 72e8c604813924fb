//! Desktop UI layer.
//!
//! Uses `wry` for WebView rendering and `tao` for the native window:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The chrome (tabs, toolbar, address field) is HTML/CSS/JS in its own
//! WebView; page content lives in one child WebView per tab.

pub mod webview_app;
pub mod wry_view;
