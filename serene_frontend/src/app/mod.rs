use std::sync::mpsc::{self, Receiver, Sender};

use chrono::{DateTime, Local};
use eframe::egui::{self, Context};
use log::{error, info, warn};

use crate::activities::ActivitiesPanel;
use crate::api::ApiClient;
use crate::carousel::CarouselController;
use crate::config::AppConfig;
use crate::events::EventStore;
use crate::feed::{CommunityFeed, HomeTab};
use crate::mood::MoodPanel;
use crate::session::Session;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::theme;

mod messages;
mod spawners;
mod state;
mod tasks;
mod ui;

use messages::AppMessage;
use state::{ImageState, ModalContent, ViewState};

pub struct SereneApp {
    api: ApiClient,
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,
    config: AppConfig,
    session: Session,
    events: EventStore,
    carousel: CarouselController,
    mood: MoodPanel,
    activities: ActivitiesPanel,
    feed: CommunityFeed,
    tab: HomeTab,
    view: ViewState,
    modal: Option<ModalContent>,
    base_url_input: String,
    info_banner: Option<String>,
    images: ImageState,
}

fn open_storage(config: &AppConfig) -> Box<dyn KeyValueStore> {
    let Some(dir) = config.resolved_data_dir() else {
        warn!("no data directory available; upcoming events will not survive a restart");
        return Box::new(MemoryStore::new());
    };
    match FileStore::new(&dir) {
        Ok(store) => {
            info!("storing local data in {}", dir.display());
            Box::new(store)
        }
        Err(err) => {
            warn!("falling back to in-memory storage: {err}");
            Box::new(MemoryStore::new())
        }
    }
}

fn build_client(config: &AppConfig) -> anyhow::Result<ApiClient> {
    ApiClient::new(config.api_url.clone()).or_else(|err| {
        error!("failed to initialise API client for {}: {err}", config.api_url);
        ApiClient::new(AppConfig::default().api_url)
    })
}

pub(crate) fn format_timestamp(ts: &str) -> String {
    DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.with_timezone(&Local).format("%b %d, %H:%M").to_string())
        .unwrap_or_else(|_| ts.to_string())
}

impl SereneApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> anyhow::Result<Self> {
        theme::apply(&cc.egui_ctx);

        let session = Session::from_config(&config);
        let mut api = build_client(&config)?;
        api.set_token(session.token().map(str::to_string));
        let (tx, rx) = mpsc::channel();
        let events = EventStore::open(open_storage(&config));
        let carousel = CarouselController::new(config.carousel_interval());

        let mut app = Self {
            base_url_input: api.base_url().to_string(),
            api,
            tx,
            rx,
            session,
            events,
            carousel,
            mood: MoodPanel::default(),
            activities: ActivitiesPanel::default(),
            feed: CommunityFeed::default(),
            tab: HomeTab::default(),
            view: ViewState::Home,
            modal: None,
            info_banner: None,
            images: ImageState::default(),
            config,
        };
        app.mount_home();
        Ok(app)
    }

    fn set_view(&mut self, view: ViewState) {
        if self.view == view {
            return;
        }
        self.view = view;
        if view == ViewState::Home {
            self.mount_home();
        }
    }

    fn sign_out(&mut self) {
        self.session.sign_out();
        self.api.set_token(None);
        self.mood.reset();
        self.activities.reset();
        self.modal = None;
        self.info_banner = Some("Signed out".into());
    }

    fn process_messages(&mut self) {
        messages::process_messages(self);
    }
}

impl eframe::App for SereneApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.process_messages();
        self.images.upload_pending(ctx);

        egui::TopBottomPanel::top("top_nav").show(ctx, |ui| {
            self.render_top_nav(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            ViewState::Home => self.render_home(ui),
            ViewState::Catalog => self.render_catalog(ui),
            ViewState::Settings => self.render_settings(ui),
        });

        self.render_mood_prompt(ctx);
        self.render_modal(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_fall_back_to_raw_text() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert!(!format_timestamp("2026-10-15T20:00:00Z").contains('T'));
    }
}
