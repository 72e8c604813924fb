//! Quantum Browser: a tabbed desktop browser shell over the platform WebView.
//!
//! Entry point: loads settings, starts logging, then opens the browser window.
//! When built without the `gui` feature, runs a line-driven console shell on
//! the headless engine.

use quantum_browser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use tracing_subscriber::EnvFilter;

fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("quantum_browser=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let mut settings_engine = SettingsEngine::new(None);
    let loaded = settings_engine.load();
    init_logging(&settings_engine.get_settings().logging.level);

    tracing::info!("Quantum Browser v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Err(e) = loaded {
        tracing::warn!("Settings load failed, using defaults: {}", e);
    }

    #[cfg(feature = "gui")]
    quantum_browser::ui::webview_app::run(settings_engine);

    #[cfg(not(feature = "gui"))]
    console::run(settings_engine);
}

#[cfg(not(feature = "gui"))]
mod console {
    use std::io::{self, BufRead, Write};

    use quantum_browser::app::App;
    use quantum_browser::engine::headless::{EventQueue, HeadlessFactory};
    use quantum_browser::managers::bookmark_manager::BookmarkManagerTrait;
    use quantum_browser::managers::history_manager::HistoryManagerTrait;
    use quantum_browser::services::settings_engine::SettingsEngine;
    use quantum_browser::types::event::{ShellAction, ShellMessage, UiUpdate};
    use quantum_browser::types::shortcut::KeyCombo;

    const HELP: &str = "\
Type an address or search terms, or one of:
  :new  :close [index]  :tab <index>  :back  :forward  :reload  :home
  :bookmark  :bookmarks  :history  :downloads  :settings
  :home-url <url>  :key <combo, e.g. Ctrl+T>  :help  :quit";

    pub fn run(settings_engine: SettingsEngine) {
        let queue = EventQueue::new();
        let mut app = match App::new(HeadlessFactory::new(queue.clone()), settings_engine) {
            Ok(app) => app,
            Err(e) => {
                eprintln!("Failed to start: {}", e);
                return;
            }
        };

        println!("Quantum Browser v{} (headless)", env!("CARGO_PKG_VERSION"));
        println!("{}", HELP);
        print_updates(&app.snapshot());
        if pump(&mut app, &queue) {
            return;
        }

        let stdin = io::stdin();
        loop {
            print!("> ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let line = line.trim_end_matches(['\r', '\n']);

            let message = match parse_command(line) {
                Command::Message(message) => message,
                Command::ListHistory => {
                    for (i, url) in app.history_manager.entries().iter().enumerate() {
                        println!("  {:>3}  {}", i + 1, url);
                    }
                    continue;
                }
                Command::ListBookmarks => {
                    for url in app.bookmark_manager.list_bookmarks() {
                        println!("  ★ {}", url);
                    }
                    continue;
                }
                Command::Help => {
                    println!("{}", HELP);
                    continue;
                }
                Command::Quit => break,
                Command::Invalid(reason) => {
                    println!("  ! {}", reason);
                    continue;
                }
            };

            let updates = app.handle(message);
            print_updates(&updates);
            if updates.contains(&UiUpdate::Exit) || pump(&mut app, &queue) {
                break;
            }
        }
    }

    enum Command {
        Message(ShellMessage),
        ListHistory,
        ListBookmarks,
        Help,
        Quit,
        Invalid(String),
    }

    fn parse_command(line: &str) -> Command {
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Message(ShellMessage::Navigate(line.to_string()));
        };
        let (name, arg) = match rest.split_once(' ') {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let action = |a| Command::Message(ShellMessage::Action(a));
        let index = |arg: &str| arg.parse::<usize>().map_err(|_| format!("bad tab index: {}", arg));

        match name {
            "new" => action(ShellAction::NewTab),
            "close" if arg.is_empty() => action(ShellAction::CloseActiveTab),
            "close" => match index(arg) {
                Ok(i) => Command::Message(ShellMessage::CloseTab(i)),
                Err(e) => Command::Invalid(e),
            },
            "tab" => match index(arg) {
                Ok(i) => Command::Message(ShellMessage::SwitchTab(i)),
                Err(e) => Command::Invalid(e),
            },
            "back" => action(ShellAction::Back),
            "forward" => action(ShellAction::Forward),
            "reload" => action(ShellAction::Reload),
            "home" => action(ShellAction::Home),
            "bookmark" => action(ShellAction::Bookmark),
            "downloads" => action(ShellAction::ShowDownloads),
            "settings" => action(ShellAction::OpenSettings),
            "home-url" => Command::Message(ShellMessage::SetHomepage(arg.to_string())),
            "key" => match KeyCombo::parse(arg) {
                Ok(combo) => Command::Message(ShellMessage::Key(combo)),
                Err(e) => Command::Invalid(e.to_string()),
            },
            "bookmarks" => Command::ListBookmarks,
            "history" => Command::ListHistory,
            "help" => Command::Help,
            "quit" | "q" => Command::Quit,
            other => Command::Invalid(format!("unknown command :{}", other)),
        }
    }

    /// Feeds queued engine events back through the app. Returns true on exit.
    fn pump<F: quantum_browser::engine::ViewFactory>(app: &mut App<F>, queue: &EventQueue) -> bool {
        loop {
            let events = queue.drain();
            if events.is_empty() {
                return false;
            }
            for event in events {
                let updates = app.handle(ShellMessage::Engine(event));
                print_updates(&updates);
                if updates.contains(&UiUpdate::Exit) {
                    return true;
                }
            }
        }
    }

    fn print_updates(updates: &[UiUpdate]) {
        for update in updates {
            match update {
                UiUpdate::AddressBar { text } => println!("  [address] {}", text),
                UiUpdate::WindowTitle { title } => println!("  [title]   {}", title),
                UiUpdate::Status { message } => println!("  [status]  {}", message),
                UiUpdate::TabStrip { tabs } => {
                    let strip: Vec<String> = tabs
                        .iter()
                        .enumerate()
                        .map(|(i, t)| {
                            if t.active {
                                format!("*{}:{}*", i, t.title)
                            } else {
                                format!("{}:{}", i, t.title)
                            }
                        })
                        .collect();
                    println!("  [tabs]    {}", strip.join(" | "));
                }
                UiUpdate::FocusAddressBar => println!("  [address] (focused)"),
                UiUpdate::Notice { heading, body } => {
                    println!("  [{}]", heading);
                    for line in body.lines() {
                        println!("    {}", line);
                    }
                }
                UiUpdate::Exit => println!("  [exit]"),
            }
        }
    }
}
