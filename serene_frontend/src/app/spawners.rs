use log::info;

use crate::mood;

use super::tasks;
use super::SereneApp;

impl SereneApp {
    /// Runs every time the home view becomes visible.
    pub(super) fn mount_home(&mut self) {
        let Some(user_id) = self.session.user_id().map(str::to_string) else {
            return;
        };
        info!("home mounted for {user_id}");

        if self.session.needs_profile() {
            self.session.begin_profile_load();
            tasks::load_profile(self.api.clone(), self.tx.clone(), user_id.clone());
        }
        self.spawn_load_mood(&user_id);
        if self.activities.needs_fetch(&user_id) {
            self.activities.begin_fetch(&user_id);
            tasks::load_recent_activities(self.api.clone(), self.tx.clone(), user_id);
        }
    }

    fn spawn_load_mood(&mut self, user_id: &str) {
        let date_key = mood::today_key();
        self.mood.begin_fetch(date_key.clone());
        tasks::load_mood(
            self.api.clone(),
            self.tx.clone(),
            user_id.to_string(),
            date_key,
        );
    }

    pub(super) fn spawn_submit_mood(&mut self, value: u8) {
        let Some(user_id) = self.session.user_id().map(str::to_string) else {
            return;
        };
        let Some(seq) = self.mood.select(value) else {
            return;
        };
        let date_key = self
            .mood
            .date_key()
            .map(str::to_string)
            .unwrap_or_else(mood::today_key);
        tasks::submit_mood(
            self.api.clone(),
            self.tx.clone(),
            user_id,
            date_key,
            value,
            seq,
        );
    }

    pub(super) fn spawn_load_image(&mut self, url: &str) {
        if self.images.request(url) {
            self.process_download_queue();
        }
    }

    pub(super) fn process_download_queue(&mut self) {
        while let Some(url) = self.images.next_ready() {
            tasks::download_image(self.api.clone(), self.tx.clone(), url);
        }
    }
}
