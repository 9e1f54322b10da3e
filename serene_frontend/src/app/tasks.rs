use std::sync::mpsc::Sender;
use std::thread;

use log::error;

use crate::api::ApiClient;

use super::messages::AppMessage;
use super::state::LoadedImage;

pub fn load_profile(client: ApiClient, tx: Sender<AppMessage>, user_id: String) {
    thread::spawn(move || {
        let result = client.get_profile();
        if tx.send(AppMessage::ProfileLoaded { user_id, result }).is_err() {
            error!("failed to send ProfileLoaded message");
        }
    });
}

pub fn load_recent_activities(client: ApiClient, tx: Sender<AppMessage>, user_id: String) {
    thread::spawn(move || {
        let result = client.get_recent_activities();
        if tx
            .send(AppMessage::ActivitiesLoaded { user_id, result })
            .is_err()
        {
            error!("failed to send ActivitiesLoaded message");
        }
    });
}

pub fn load_mood(client: ApiClient, tx: Sender<AppMessage>, user_id: String, date_key: String) {
    thread::spawn(move || {
        let result = client.get_user_mood(&date_key);
        let message = AppMessage::MoodLoaded {
            user_id,
            date_key,
            result,
        };
        if tx.send(message).is_err() {
            error!("failed to send MoodLoaded message");
        }
    });
}

pub fn submit_mood(
    client: ApiClient,
    tx: Sender<AppMessage>,
    user_id: String,
    date_key: String,
    value: u8,
    seq: u64,
) {
    thread::spawn(move || {
        let result = client.set_user_mood(&date_key, value);
        let message = AppMessage::MoodSubmitted {
            user_id,
            seq,
            result,
        };
        if tx.send(message).is_err() {
            error!("failed to send MoodSubmitted message");
        }
    });
}

pub fn download_image(client: ApiClient, tx: Sender<AppMessage>, url: String) {
    thread::spawn(move || {
        log::debug!("downloading image {url}");

        let result = (|| -> Result<LoadedImage, String> {
            let bytes = client
                .fetch_bytes(&url)
                .map_err(|e| format!("Download error: {e}"))?;
            let dyn_img =
                image::load_from_memory(&bytes).map_err(|e| format!("Image decode error: {e}"))?;
            let rgba = dyn_img.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            Ok(LoadedImage {
                size,
                pixels: rgba.into_raw(),
            })
        })();

        if tx.send(AppMessage::ImageLoaded { url, result }).is_err() {
            error!("failed to send ImageLoaded message");
        }
    });
}
