use log::warn;

use crate::models::Activity;

#[derive(Debug, Clone, PartialEq)]
pub enum ActivitiesState {
    Loading,
    Empty,
    Populated(Vec<Activity>),
}

/// Recent activity feed, fetched once per signed-in user.
///
/// A failed fetch lands in `Empty` just like a user with no activity.
#[derive(Debug)]
pub struct ActivitiesPanel {
    state: ActivitiesState,
    loaded_for: Option<String>,
}

impl Default for ActivitiesPanel {
    fn default() -> Self {
        Self {
            state: ActivitiesState::Empty,
            loaded_for: None,
        }
    }
}

impl ActivitiesPanel {
    pub fn state(&self) -> &ActivitiesState {
        &self.state
    }

    /// True when no fetch has been started for `user_id` yet.
    pub fn needs_fetch(&self, user_id: &str) -> bool {
        self.loaded_for.as_deref() != Some(user_id)
    }

    pub fn begin_fetch(&mut self, user_id: &str) {
        self.loaded_for = Some(user_id.to_string());
        self.state = ActivitiesState::Loading;
    }

    pub fn on_fetched(&mut self, user_id: &str, result: anyhow::Result<Vec<Activity>>) {
        if self.loaded_for.as_deref() != Some(user_id) {
            return;
        }
        self.state = match result {
            Ok(activities) if activities.is_empty() => ActivitiesState::Empty,
            Ok(activities) => ActivitiesState::Populated(activities),
            Err(err) => {
                warn!("failed to load recent activities: {err}");
                ActivitiesState::Empty
            }
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn activity_icon(kind: &str) -> &'static str {
    match kind {
        "mood" | "mood_log" => "🙂",
        "journal" => "📓",
        "meditation" => "🧘",
        "event" => "📅",
        "exercise" => "🏃",
        "post" | "community" => "💬",
        _ => "✨",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    fn activity(id: &str) -> Activity {
        Activity {
            id: id.into(),
            kind: "journal".into(),
            description: "Wrote in the journal".into(),
            created_at: "2026-10-15T20:00:00Z".into(),
        }
    }

    #[test]
    fn fetch_runs_once_per_user() {
        let mut panel = ActivitiesPanel::default();
        assert!(panel.needs_fetch("u1"));
        panel.begin_fetch("u1");
        assert_eq!(panel.state(), &ActivitiesState::Loading);
        panel.on_fetched("u1", Ok(vec![activity("a1")]));
        assert!(!panel.needs_fetch("u1"));
        assert!(panel.needs_fetch("u2"));
    }

    #[test]
    fn failure_looks_like_empty() {
        let mut failed = ActivitiesPanel::default();
        failed.begin_fetch("u1");
        failed.on_fetched("u1", Err(anyhow!("timeout")));

        let mut empty = ActivitiesPanel::default();
        empty.begin_fetch("u1");
        empty.on_fetched("u1", Ok(Vec::new()));

        assert_eq!(failed.state(), empty.state());
        assert_eq!(failed.state(), &ActivitiesState::Empty);
    }

    #[test]
    fn populated_keeps_server_order() {
        let mut panel = ActivitiesPanel::default();
        panel.begin_fetch("u1");
        panel.on_fetched("u1", Ok(vec![activity("a2"), activity("a1")]));
        match panel.state() {
            ActivitiesState::Populated(list) => {
                let ids: Vec<_> = list.iter().map(|a| a.id.as_str()).collect();
                assert_eq!(ids, vec!["a2", "a1"]);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn response_for_previous_user_is_dropped() {
        let mut panel = ActivitiesPanel::default();
        panel.begin_fetch("u1");
        panel.reset();
        panel.begin_fetch("u2");
        panel.on_fetched("u1", Ok(vec![activity("a1")]));
        assert_eq!(panel.state(), &ActivitiesState::Loading);
    }
}
