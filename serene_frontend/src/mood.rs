use chrono::{Local, NaiveDate};
use log::{info, warn};

use crate::models::MoodResponse;

pub const MIN_MOOD: u8 = 1;
pub const MAX_MOOD: u8 = 10;

const MOOD_EMOJIS: [&str; 10] = ["😢", "😞", "😔", "😕", "😐", "🙂", "😊", "😄", "😁", "🤩"];

const MOOD_MESSAGES: [&str; 10] = [
    "It's okay to have hard days. You're not alone, and reaching out is a sign of strength.",
    "Be gentle with yourself today. Small steps still count.",
    "Feelings pass like weather. Try a short breathing exercise to ground yourself.",
    "Thanks for checking in. A quick walk or a glass of water can help a little.",
    "A steady day is a good day. Notice one thing you're grateful for.",
    "You're doing alright. Keep the momentum with something you enjoy.",
    "Glad you're feeling good! Share a bit of that warmth with someone today.",
    "Great energy! This is a good moment to set an intention for the week.",
    "Wonderful! Celebrate what's going well and remember how it feels.",
    "Amazing! Hold on to this feeling and let it carry you forward.",
];

/// Day-granularity key the API stores mood records under.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

pub fn is_valid(value: u8) -> bool {
    (MIN_MOOD..=MAX_MOOD).contains(&value)
}

pub fn emoji_for(value: u8) -> &'static str {
    if is_valid(value) {
        MOOD_EMOJIS[usize::from(value - 1)]
    } else {
        "❔"
    }
}

pub fn message_for(value: u8) -> Option<&'static str> {
    is_valid(value).then(|| MOOD_MESSAGES[usize::from(value - 1)])
}

/// Accepts only whole numbers inside the 1–10 scale.
fn parse_record(record: &MoodResponse) -> Option<u8> {
    let value = record.mood;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < f64::from(MIN_MOOD) || value > f64::from(MAX_MOOD) {
        return None;
    }
    Some(value as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Pending,
    Confirmed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodayMood {
    pub value: u8,
    pub message: &'static str,
    /// `None` when the value came from the server rather than a local submission.
    pub sync: Option<SyncState>,
}

#[derive(Debug, Default)]
pub struct MoodPanel {
    today: Option<TodayMood>,
    date_key: Option<String>,
    prompt_visible: bool,
    loading: bool,
    submissions: u64,
}

impl MoodPanel {
    pub fn today(&self) -> Option<&TodayMood> {
        self.today.as_ref()
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn date_key(&self) -> Option<&str> {
        self.date_key.as_deref()
    }

    /// Marks a fetch for `date_key` as in flight. Only a pick whose save is still
    /// outstanding survives; anything else is re-read from the server.
    pub fn begin_fetch(&mut self, date_key: String) {
        let same_day = self.date_key.as_deref() == Some(date_key.as_str());
        if !same_day || !self.has_pending_pick() {
            self.today = None;
        }
        self.date_key = Some(date_key);
        self.loading = true;
    }

    /// Applies the result of `get_user_mood`. Anything other than a valid record
    /// opens the prompt, including a failed request.
    pub fn on_fetched(&mut self, date_key: &str, result: anyhow::Result<Option<MoodResponse>>) {
        if self.date_key.as_deref() != Some(date_key) {
            return;
        }
        self.loading = false;

        let value = match result {
            Ok(Some(record)) => {
                let parsed = parse_record(&record);
                if parsed.is_none() {
                    warn!("ignoring malformed mood record for {date_key}: {}", record.mood);
                }
                parsed
            }
            Ok(None) => None,
            Err(err) => {
                warn!("failed to fetch mood for {date_key}: {err}");
                None
            }
        };

        if self.has_pending_pick() {
            return;
        }
        match value.and_then(|v| message_for(v).map(|message| (v, message))) {
            Some((value, message)) => {
                self.today = Some(TodayMood {
                    value,
                    message,
                    sync: None,
                });
                self.prompt_visible = false;
            }
            None => {
                self.today = None;
                self.prompt_visible = true;
            }
        }
    }

    pub fn open_prompt(&mut self) {
        self.prompt_visible = true;
    }

    pub fn dismiss_prompt(&mut self) {
        self.prompt_visible = false;
    }

    fn has_pending_pick(&self) -> bool {
        self.today
            .is_some_and(|today| today.sync == Some(SyncState::Pending))
    }

    /// Records a pick locally and closes the prompt. Returns the sequence number
    /// the save must be reported back with, or `None` when it is off the scale.
    pub fn select(&mut self, value: u8) -> Option<u64> {
        let message = message_for(value)?;
        self.today = Some(TodayMood {
            value,
            message,
            sync: Some(SyncState::Pending),
        });
        self.prompt_visible = false;
        self.submissions += 1;
        Some(self.submissions)
    }

    /// Applies the outcome of `set_user_mood` for submission `seq`. Results of
    /// superseded submissions are ignored. The local value is kept either way.
    pub fn on_submitted(&mut self, seq: u64, result: anyhow::Result<()>) {
        if seq != self.submissions {
            return;
        }
        let Some(today) = self.today.as_mut() else {
            return;
        };
        if today.sync != Some(SyncState::Pending) {
            return;
        }
        let value = today.value;
        match result {
            Ok(()) => {
                info!("mood {value} saved");
                today.sync = Some(SyncState::Confirmed);
            }
            Err(err) => {
                warn!("mood {value} was not saved: {err}");
                today.sync = Some(SyncState::Failed);
            }
        }
    }

    pub fn reset(&mut self) {
        // Keep numbering monotonic so saves from before a sign-out stay stale.
        let submissions = self.submissions;
        *self = Self::default();
        self.submissions = submissions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    fn fetched(panel: &mut MoodPanel, result: anyhow::Result<Option<MoodResponse>>) {
        panel.begin_fetch("2026-10-16".into());
        panel.on_fetched("2026-10-16", result);
    }

    #[test]
    fn present_record_hides_prompt_and_picks_message() {
        let mut panel = MoodPanel::default();
        fetched(&mut panel, Ok(Some(MoodResponse { mood: 7.0 })));
        assert!(!panel.prompt_visible());
        let today = panel.today().expect("mood cached");
        assert_eq!(today.value, 7);
        assert_eq!(today.message, MOOD_MESSAGES[6]);
        assert_eq!(today.sync, None);
    }

    #[test]
    fn failed_fetch_shows_prompt() {
        let mut panel = MoodPanel::default();
        fetched(&mut panel, Err(anyhow!("connection refused")));
        assert!(panel.prompt_visible());
        assert!(panel.today().is_none());
        assert!(!panel.is_loading());
    }

    #[test]
    fn missing_or_malformed_record_shows_prompt() {
        let cases = [
            None,
            Some(MoodResponse { mood: 0.0 }),
            Some(MoodResponse { mood: 11.0 }),
            Some(MoodResponse { mood: 6.5 }),
        ];
        for result in cases {
            let mut panel = MoodPanel::default();
            fetched(&mut panel, Ok(result));
            assert!(panel.prompt_visible());
        }
    }

    #[test]
    fn selection_is_optimistic_and_survives_failure() {
        let mut panel = MoodPanel::default();
        fetched(&mut panel, Ok(None));
        let seq = panel.select(3).expect("on the scale");
        assert!(!panel.prompt_visible());
        assert_eq!(panel.today().map(|t| t.sync), Some(Some(SyncState::Pending)));

        panel.on_submitted(seq, Err(anyhow!("500")));
        let today = panel.today().expect("still cached");
        assert_eq!(today.value, 3);
        assert_eq!(today.sync, Some(SyncState::Failed));
    }

    #[test]
    fn stale_submission_result_is_ignored() {
        let mut panel = MoodPanel::default();
        let first = panel.select(4).expect("on the scale");
        let second = panel.select(8).expect("on the scale");
        panel.on_submitted(first, Ok(()));
        assert_eq!(panel.today().map(|t| t.sync), Some(Some(SyncState::Pending)));
        panel.on_submitted(second, Ok(()));
        assert_eq!(panel.today().map(|t| t.sync), Some(Some(SyncState::Confirmed)));
    }

    #[test]
    fn repeated_pick_is_not_failed_by_earlier_save() {
        let mut panel = MoodPanel::default();
        let first = panel.select(5).expect("on the scale");
        let second = panel.select(5).expect("on the scale");
        assert_ne!(first, second);

        panel.on_submitted(first, Err(anyhow!("timeout")));
        assert_eq!(panel.today().map(|t| t.sync), Some(Some(SyncState::Pending)));
        panel.on_submitted(second, Ok(()));
        assert_eq!(panel.today().map(|t| t.sync), Some(Some(SyncState::Confirmed)));
    }

    #[test]
    fn save_from_before_reset_is_ignored() {
        let mut panel = MoodPanel::default();
        let before = panel.select(6).expect("on the scale");
        panel.reset();
        let after = panel.select(6).expect("on the scale");
        assert_ne!(before, after);
        panel.on_submitted(before, Ok(()));
        assert_eq!(panel.today().map(|t| t.sync), Some(Some(SyncState::Pending)));
    }

    #[test]
    fn remount_with_failed_fetch_prompts_again() {
        let mut panel = MoodPanel::default();
        fetched(&mut panel, Ok(Some(MoodResponse { mood: 7.0 })));
        assert!(!panel.prompt_visible());

        fetched(&mut panel, Err(anyhow!("offline")));
        assert!(panel.prompt_visible());
        assert!(panel.today().is_none());
    }

    #[test]
    fn remount_after_failed_save_prompts_when_server_has_nothing() {
        let mut panel = MoodPanel::default();
        fetched(&mut panel, Ok(None));
        let seq = panel.select(4).expect("on the scale");
        panel.on_submitted(seq, Err(anyhow!("500")));
        assert_eq!(panel.today().map(|t| t.sync), Some(Some(SyncState::Failed)));

        fetched(&mut panel, Ok(None));
        assert!(panel.prompt_visible());
        assert!(panel.today().is_none());
    }

    #[test]
    fn remount_replaces_confirmed_value_with_server_record() {
        let mut panel = MoodPanel::default();
        fetched(&mut panel, Ok(None));
        let seq = panel.select(2).expect("on the scale");
        panel.on_submitted(seq, Ok(()));

        panel.begin_fetch("2026-10-16".into());
        assert!(panel.today().is_none());
        panel.on_fetched("2026-10-16", Ok(Some(MoodResponse { mood: 2.0 })));
        let today = panel.today().expect("server record");
        assert_eq!(today.value, 2);
        assert_eq!(today.sync, None);
    }

    #[test]
    fn pick_during_fetch_survives_the_response() {
        for result in [
            Ok(None),
            Err(anyhow!("offline")),
            Ok(Some(MoodResponse { mood: 9.0 })),
        ] {
            let mut panel = MoodPanel::default();
            panel.begin_fetch("2026-10-16".into());
            let seq = panel.select(3).expect("on the scale");
            panel.on_fetched("2026-10-16", result);

            assert!(!panel.prompt_visible());
            assert!(!panel.is_loading());
            let today = panel.today().expect("local pick kept");
            assert_eq!(today.value, 3);
            assert_eq!(today.sync, Some(SyncState::Pending));

            panel.on_submitted(seq, Ok(()));
            assert_eq!(panel.today().map(|t| t.sync), Some(Some(SyncState::Confirmed)));
        }
    }

    #[test]
    fn pending_pick_survives_remount() {
        let mut panel = MoodPanel::default();
        fetched(&mut panel, Ok(None));
        panel.select(8);

        fetched(&mut panel, Ok(None));
        assert!(!panel.prompt_visible());
        assert_eq!(panel.today().map(|t| t.value), Some(8));
    }

    #[test]
    fn off_scale_selection_is_rejected() {
        let mut panel = MoodPanel::default();
        panel.open_prompt();
        assert_eq!(panel.select(0), None);
        assert_eq!(panel.select(11), None);
        assert!(panel.prompt_visible());
    }

    #[test]
    fn result_for_another_day_is_dropped() {
        let mut panel = MoodPanel::default();
        panel.begin_fetch("2026-10-16".into());
        panel.on_fetched("2026-10-15", Ok(Some(MoodResponse { mood: 9.0 })));
        assert!(panel.is_loading());
        assert!(panel.today().is_none());
    }

    #[test]
    fn tables_cover_the_scale() {
        for value in MIN_MOOD..=MAX_MOOD {
            assert!(message_for(value).is_some());
            assert_ne!(emoji_for(value), "❔");
        }
        assert_eq!(message_for(0), None);
        assert_eq!(
            date_key(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()),
            "2026-03-07"
        );
    }
}
