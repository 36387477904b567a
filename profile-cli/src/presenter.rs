//! Terminal adapters for the view-model's navigation, notice and URL ports.

use std::process::{Command, Stdio};

use log::{error, info};
use profile_core::{Navigator, Notice, NoticeKind, Notifier, Route, UrlOpener};

pub(crate) struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => println!("{}: {}", notice.title, notice.message),
            NoticeKind::Error => eprintln!("{}: {}", notice.title, notice.message),
        }
    }
}

pub(crate) struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        match route {
            Route::Login => println!("Signed out. Sign in with `profile login --email <email>`."),
        }
    }
}

/// Hands URLs to the desktop's default handler.
pub(crate) struct SystemUrlOpener;

/// Program and arguments that open `url` on this platform.
pub(crate) fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "windows") {
        // `start` treats the first quoted argument as the window title
        (
            "cmd",
            vec![
                String::from("/C"),
                String::from("start"),
                String::new(),
                url.to_string(),
            ],
        )
    } else if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) {
        let (program, args) = opener_command(url);

        let spawned = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(_) => info!("Opened {url} with {program}"),
            Err(e) => error!("Failed to open {url} with {program}: {e}"),
        }
    }
}
