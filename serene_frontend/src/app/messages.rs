use log::debug;

use crate::models::{Activity, MoodResponse, Profile};

use super::state::LoadedImage;
use super::SereneApp;

pub enum AppMessage {
    ProfileLoaded {
        user_id: String,
        result: Result<Profile, anyhow::Error>,
    },
    ActivitiesLoaded {
        user_id: String,
        result: Result<Vec<Activity>, anyhow::Error>,
    },
    MoodLoaded {
        user_id: String,
        date_key: String,
        result: Result<Option<MoodResponse>, anyhow::Error>,
    },
    MoodSubmitted {
        user_id: String,
        seq: u64,
        result: Result<(), anyhow::Error>,
    },
    ImageLoaded {
        url: String,
        result: Result<LoadedImage, String>,
    },
}

impl AppMessage {
    fn user_id(&self) -> Option<&str> {
        match self {
            AppMessage::ProfileLoaded { user_id, .. }
            | AppMessage::ActivitiesLoaded { user_id, .. }
            | AppMessage::MoodLoaded { user_id, .. }
            | AppMessage::MoodSubmitted { user_id, .. } => Some(user_id),
            AppMessage::ImageLoaded { .. } => None,
        }
    }
}

pub(super) fn process_messages(app: &mut SereneApp) {
    while let Ok(message) = app.rx.try_recv() {
        if let Some(owner) = message.user_id() {
            if app.session.user_id() != Some(owner) {
                debug!("dropping response for signed-out user {owner}");
                continue;
            }
        }

        match message {
            AppMessage::ProfileLoaded { user_id, result } => {
                app.session.on_profile_loaded(&user_id, result);
            }
            AppMessage::ActivitiesLoaded { user_id, result } => {
                app.activities.on_fetched(&user_id, result);
            }
            AppMessage::MoodLoaded {
                date_key, result, ..
            } => {
                app.mood.on_fetched(&date_key, result);
            }
            AppMessage::MoodSubmitted { seq, result, .. } => {
                app.mood.on_submitted(seq, result);
            }
            AppMessage::ImageLoaded { url, result } => {
                app.images.on_loaded(url, result);
                app.process_download_queue();
            }
        }
    }
}
