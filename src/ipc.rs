//! JSON messages posted by the browser chrome and by pages over `window.ipc`.
//!
//! Every message is an object with a `cmd` field. Anything malformed or
//! unknown is dropped with a warning; pages cannot crash the shell.

use serde::Deserialize;
use tracing::warn;

use crate::types::event::{ShellAction, ShellMessage};
use crate::types::shortcut::{Key, KeyCombo, Modifiers};

#[derive(Debug, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum IpcCommand {
    UiReady,
    Navigate { url: String },
    NewTab,
    CloseTab { index: usize },
    SwitchTab { index: usize },
    Back,
    Forward,
    Reload,
    Home,
    Bookmark,
    Downloads,
    Settings,
    SetHomepage { url: String },
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        meta: bool,
    },
}

/// A decoded IPC message.
#[derive(Debug, Clone, PartialEq)]
pub enum IpcRequest {
    /// The chrome finished loading and wants the full UI state.
    Ready,
    Message(ShellMessage),
}

/// Decodes one IPC body.
pub fn parse_ipc(body: &str) -> Option<IpcRequest> {
    let command: IpcCommand = match serde_json::from_str(body) {
        Ok(command) => command,
        Err(e) => {
            warn!(error = %e, body_len = body.len(), "IPC message rejected");
            return None;
        }
    };

    let action = |a| Some(IpcRequest::Message(ShellMessage::Action(a)));

    match command {
        IpcCommand::UiReady => Some(IpcRequest::Ready),
        IpcCommand::Navigate { url } => Some(IpcRequest::Message(ShellMessage::Navigate(url))),
        IpcCommand::NewTab => action(ShellAction::NewTab),
        IpcCommand::CloseTab { index } => Some(IpcRequest::Message(ShellMessage::CloseTab(index))),
        IpcCommand::SwitchTab { index } => {
            Some(IpcRequest::Message(ShellMessage::SwitchTab(index)))
        }
        IpcCommand::Back => action(ShellAction::Back),
        IpcCommand::Forward => action(ShellAction::Forward),
        IpcCommand::Reload => action(ShellAction::Reload),
        IpcCommand::Home => action(ShellAction::Home),
        IpcCommand::Bookmark => action(ShellAction::Bookmark),
        IpcCommand::Downloads => action(ShellAction::ShowDownloads),
        IpcCommand::Settings => action(ShellAction::OpenSettings),
        IpcCommand::SetHomepage { url } => {
            Some(IpcRequest::Message(ShellMessage::SetHomepage(url)))
        }
        IpcCommand::Key { key, ctrl, alt, shift, meta } => {
            let key: Key = key.parse().ok()?;
            let combo = KeyCombo::new(key, Modifiers::from_platform(ctrl, alt, shift, meta));
            Some(IpcRequest::Message(ShellMessage::Key(combo)))
        }
    }
}
