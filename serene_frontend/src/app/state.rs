use std::collections::{HashMap, HashSet, VecDeque};

use eframe::egui::{self, TextureHandle};

use crate::models::{Event, QuickAction};

// Keeps slow image hosts from starving the API requests.
pub const MAX_CONCURRENT_DOWNLOADS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    Catalog,
    Settings,
}

/// What the shared modal is currently showing.
#[derive(Debug, Clone)]
pub enum ModalContent {
    EventDetails(Event),
    QuickAction(&'static QuickAction),
}

#[derive(Clone)]
pub struct LoadedImage {
    pub size: [usize; 2],
    pub pixels: Vec<u8>,
}

/// Remote images keyed by URL, from queued download to uploaded texture.
#[derive(Default)]
pub struct ImageState {
    textures: HashMap<String, TextureHandle>,
    pending: HashMap<String, LoadedImage>,
    loading: HashSet<String>,
    failed: HashSet<String>,
    queue: VecDeque<String>,
    active: usize,
}

impl ImageState {
    pub fn texture(&self, url: &str) -> Option<&TextureHandle> {
        self.textures.get(url)
    }

    pub fn is_failed(&self, url: &str) -> bool {
        self.failed.contains(url)
    }

    /// Queues `url` unless it is already known. Returns true when newly queued.
    pub fn request(&mut self, url: &str) -> bool {
        if url.is_empty()
            || self.textures.contains_key(url)
            || self.pending.contains_key(url)
            || self.loading.contains(url)
            || self.failed.contains(url)
        {
            return false;
        }
        self.loading.insert(url.to_string());
        self.queue.push_back(url.to_string());
        true
    }

    /// Next queued URL allowed to start under the concurrency cap.
    pub fn next_ready(&mut self) -> Option<String> {
        if self.active >= MAX_CONCURRENT_DOWNLOADS {
            return None;
        }
        let url = self.queue.pop_front()?;
        self.active += 1;
        Some(url)
    }

    pub fn on_loaded(&mut self, url: String, result: Result<LoadedImage, String>) {
        self.active = self.active.saturating_sub(1);
        self.loading.remove(&url);
        match result {
            Ok(image) => {
                self.pending.insert(url, image);
            }
            Err(err) => {
                log::warn!("image {url} failed: {err}");
                self.failed.insert(url);
            }
        }
    }

    /// Turns decoded pixels into textures. Needs the UI context.
    pub fn upload_pending(&mut self, ctx: &egui::Context) {
        for (url, image) in self.pending.drain() {
            let color = egui::ColorImage::from_rgba_unmultiplied(image.size, &image.pixels);
            let texture = ctx.load_texture(url.as_str(), color, egui::TextureOptions::LINEAR);
            self.textures.insert(url, texture);
        }
    }
}
