use std::path::Path;

use mimalloc::MiMalloc;

use bus::Bus;
use navbar::NavbarShell;
use omnibox::OmniboxConfig;
use runtime_history::{InMemoryHistory, start_history_runtime};

mod demo_page;

use demo_page::DemoPage;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const SEED_HISTORY: &[(&str, &str)] = &[
    ("https://www.rust-lang.org/", "Rust Programming Language"),
    ("https://doc.rust-lang.org/book/", "The Rust Programming Language - The Book"),
    ("https://crates.io/", "crates.io: Rust Package Registry"),
    ("https://docs.rs/egui/latest/egui/", "egui - Rust"),
    ("https://github.com/rust-windowing/winit", "rust-windowing/winit: Window handling library"),
    ("https://duckduckgo.com/", "DuckDuckGo - Protecting your privacy"),
    ("https://beakerbrowser.com/", "Beaker Browser"),
    ("https://datproject.org/", "Dat Project - A distributed data community"),
    ("http://localhost:3000/", "Local dev server"),
];

fn load_config(path: Option<&Path>) -> OmniboxConfig {
    let Some(path) = path else {
        return OmniboxConfig::default();
    };
    let loaded = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|source| OmniboxConfig::from_toml_str(&source).map_err(|e| e.to_string()));
    match loaded {
        Ok(config) => {
            log::debug!("loaded config from {}", path.display());
            config
        }
        Err(err) => {
            log::warn!("ignoring config {}: {err}; using defaults", path.display());
            OmniboxConfig::default()
        }
    }
}

fn seeded_history() -> InMemoryHistory {
    let mut history = InMemoryHistory::new();
    // visit() moves to the front, so the first entry ends up most recent
    for (url, title) in SEED_HISTORY.iter().rev() {
        history.visit(*url, *title);
    }
    history
}

fn main() {
    env_logger::init();

    let config_path = std::env::args_os().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new));

    let (bus, cmd_rx) = Bus::channel();
    let _history = start_history_runtime(seeded_history(), cmd_rx, bus.evt_tx.clone());

    let shell = NavbarShell::new(config.search, DemoPage::new);

    if let Err(err) = platform::run(Box::new(shell), bus, "Omnibar") {
        log::error!("{err}");
        std::process::exit(1);
    }
}
