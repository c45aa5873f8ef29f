//! A stand-in page for the demo binary: keeps a history stack and simulates
//! loads the user completes or fails by hand, so the scheme-guess retry can
//! be exercised without a network stack.

use std::collections::HashSet;

use core_types::PageId;
use egui::Ui;
use navbar::{
    DatView, FindOptions, LoadOptions, PageContent, PageHandle, PendingLoad, ProtocolInfo,
    SiteInfo, ZoomLevel,
};

// regular sites known to also serve a dat version
const DAT_MIRRORED_HOSTS: &[&str] = &["beakerbrowser.com", "datproject.org"];

pub struct DemoPage {
    id: PageId,
    url: String,
    intended_url: String,
    loading: bool,
    pending: Option<PendingLoad>,
    last_status: Option<String>,

    history: Vec<String>,
    history_index: usize,

    bookmarks: HashSet<String>,
    zoom: ZoomLevel,
    find_query: Option<String>,

    site: Option<SiteInfo>,
    protocol: Option<ProtocolInfo>,
    live_reloading: bool,
}

impl DemoPage {
    pub fn new(id: PageId) -> Self {
        Self {
            id,
            url: String::new(),
            intended_url: String::new(),
            loading: false,
            pending: None,
            last_status: None,
            history: Vec::new(),
            history_index: 0,
            bookmarks: HashSet::new(),
            zoom: ZoomLevel::DEFAULT,
            find_query: None,
            site: None,
            protocol: None,
            live_reloading: false,
        }
    }

    // -- Simulated Network ---
    fn start_load(&mut self, url: String, options: LoadOptions) {
        log::debug!(target: "demo", "page {}: loading {url}", self.id);
        self.loading = true;
        self.last_status = Some(format!("Loading {url} …"));
        self.pending = Some(PendingLoad::new(url.clone(), options));
        self.intended_url = url;
    }

    fn finish_load(&mut self) {
        let Some(load) = self.pending.take() else {
            return;
        };
        self.loading = false;
        self.url = load.url().to_string();
        self.intended_url = self.url.clone();
        self.last_status = None;
        self.update_site_details();
    }

    fn fail_load(&mut self) {
        let Some(mut load) = self.pending.take() else {
            return;
        };
        match load.retry_after_failure() {
            Some(retry) => {
                // the retried address replaces the failed entry
                if let Some(entry) = self.history.get_mut(self.history_index) {
                    *entry = retry.clone();
                }
                self.start_load(retry, LoadOptions::default());
            }
            None => {
                self.loading = false;
                self.last_status = Some(format!("Failed to load {}", load.url()));
                self.intended_url = self.url.clone();
            }
        }
    }

    fn update_site_details(&mut self) {
        let host = url_host(&self.url);
        self.site = match (self.url.starts_with("dat://"), host) {
            (true, Some(host)) => Some(SiteInfo {
                key: host.to_string(),
                is_saved: false,
            }),
            _ => None,
        };
        self.protocol = match (self.url.starts_with("http"), host) {
            (true, Some(host)) => Some(ProtocolInfo {
                hostname: host.to_string(),
            }),
            _ => None,
        };
        self.live_reloading = false;
    }

    fn load_current(&mut self, url: String) {
        // history is left alone
        self.start_load(url, LoadOptions::default());
    }
}

fn url_host(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let host = rest.split(['/', '?', '#']).next()?;
    (!host.is_empty()).then_some(host)
}

impl PageHandle for DemoPage {
    fn id(&self) -> PageId {
        self.id
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn intended_url(&self) -> &str {
        &self.intended_url
    }

    fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    fn go_back(&mut self) {
        if self.history_index > 0 {
            self.history_index -= 1;
            let url = self.history[self.history_index].clone();
            self.load_current(url);
        }
    }

    fn go_forward(&mut self) {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
            let url = self.history[self.history_index].clone();
            self.load_current(url);
        }
    }

    fn reload(&mut self) {
        if let Some(url) = self.history.get(self.history_index).cloned() {
            self.load_current(url);
        }
    }

    fn stop(&mut self) {
        self.pending = None;
        self.loading = false;
        self.last_status = None;
        self.intended_url = self.url.clone();
    }

    fn load_url(&mut self, url: &str, options: LoadOptions) {
        // record to history (truncate forward branch)
        if !self.history.is_empty() {
            self.history.truncate(self.history_index + 1);
        }
        self.history.push(url.to_string());
        self.history_index = self.history.len() - 1;
        self.start_load(url.to_string(), options);
    }

    fn is_bookmarked(&self) -> bool {
        self.bookmarks.contains(&self.url)
    }

    fn toggle_bookmark(&mut self) {
        if self.url.is_empty() {
            return;
        }
        if !self.bookmarks.remove(&self.url) {
            self.bookmarks.insert(self.url.clone());
        }
    }

    fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    fn set_zoom(&mut self, level: ZoomLevel) {
        self.zoom = level;
    }

    fn find_in_page(&mut self, text: &str, options: FindOptions) {
        log::trace!(target: "demo", "find {text:?} next={} forward={}", options.find_next, options.forward);
        self.find_query = Some(text.to_string());
    }

    fn stop_find_in_page(&mut self) {
        self.find_query = None;
    }

    fn site_info(&self) -> Option<&SiteInfo> {
        self.site.as_ref()
    }

    fn set_site_saved(&mut self, saved: bool) {
        if let Some(site) = self.site.as_mut() {
            site.is_saved = saved;
        }
    }

    fn protocol_info(&self) -> Option<&ProtocolInfo> {
        self.protocol.as_ref()
    }

    fn site_has_dat_alternative(&self) -> bool {
        self.protocol
            .as_ref()
            .is_some_and(|p| DAT_MIRRORED_HOSTS.contains(&p.hostname.as_str()))
    }

    fn is_live_reloading(&self) -> bool {
        self.live_reloading
    }

    fn toggle_live_reloading(&mut self) {
        self.live_reloading = !self.live_reloading;
    }

    fn view_files_url(&self, view: DatView) -> Option<String> {
        let key = url_host(&self.url)?;
        Some(match view {
            DatView::Files => format!("beaker:library/{key}"),
            DatView::Fork => format!("beaker:library/{key}#fork"),
        })
    }
}

impl PageContent for DemoPage {
    fn ui_content(&mut self, ui: &mut Ui) {
        if self.url.is_empty() && !self.loading {
            ui.heading("New Page");
            ui.label("Type an address or a search into the bar above.");
            return;
        }

        ui.heading(self.url.as_str());
        if let Some(status) = &self.last_status {
            ui.label(status.as_str());
        }
        if self.loading {
            ui.horizontal(|ui| {
                if ui.button("Finish loading").clicked() {
                    self.finish_load();
                }
                if ui.button("Fail loading").clicked() {
                    self.fail_load();
                }
            });
        }
        if let Some(query) = &self.find_query {
            ui.label(format!("Finding {query:?}"));
        }
        if !self.zoom.is_default() {
            ui.label(format!("Zoom {}%", self.zoom.percent()));
        }
    }
}
