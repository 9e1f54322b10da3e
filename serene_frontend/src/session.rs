use log::{info, warn};

use crate::config::AppConfig;
use crate::models::{Profile, User};

/// Who is signed in. Created at startup from configuration and cleared on sign-out;
/// components receive it explicitly instead of reaching for global state.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
    profile: Option<Profile>,
    profile_loading: bool,
}

impl Session {
    pub fn from_config(config: &AppConfig) -> Self {
        let user = config.user_id.as_ref().map(|id| User {
            id: id.clone(),
            email: config.user_email.clone(),
        });
        Self {
            user,
            token: config.api_token.clone(),
            profile: None,
            profile_loading: false,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id.as_str())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Authenticated, nothing cached and no load underway.
    pub fn needs_profile(&self) -> bool {
        self.is_authenticated() && self.profile.is_none() && !self.profile_loading
    }

    pub fn begin_profile_load(&mut self) {
        self.profile_loading = true;
    }

    pub fn on_profile_loaded(&mut self, user_id: &str, result: anyhow::Result<Profile>) {
        if self.user_id() != Some(user_id) {
            return;
        }
        self.profile_loading = false;
        match result {
            Ok(profile) => self.profile = Some(profile),
            Err(err) => {
                // Left uncached; the next home mount asks again.
                warn!("failed to load profile: {err}");
            }
        }
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = &self.user {
            info!("signing out {}", user.id);
        }
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn signed_in() -> Session {
        let config = AppConfig {
            user_id: Some("u1".into()),
            api_token: Some("secret".into()),
            ..AppConfig::default()
        };
        Session::from_config(&config)
    }

    #[test]
    fn anonymous_session_never_loads_profile() {
        let session = Session::from_config(&AppConfig::default());
        assert!(!session.is_authenticated());
        assert!(!session.needs_profile());
    }

    #[test]
    fn profile_is_requested_once() {
        let mut session = signed_in();
        assert!(session.needs_profile());
        session.begin_profile_load();
        assert!(!session.needs_profile());
        session.on_profile_loaded(
            "u1",
            Ok(Profile {
                id: "u1".into(),
                display_name: Some("Robin".into()),
                avatar_url: None,
            }),
        );
        assert!(!session.needs_profile());
        assert_eq!(session.profile().map(|p| p.greeting_name()), Some("Robin"));
    }

    #[test]
    fn failed_profile_load_can_retry() {
        let mut session = signed_in();
        session.begin_profile_load();
        session.on_profile_loaded("u1", Err(anyhow!("401")));
        assert!(session.needs_profile());
    }

    #[test]
    fn sign_out_clears_everything() {
        let mut session = signed_in();
        session.sign_out();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        session.on_profile_loaded(
            "u1",
            Ok(Profile {
                id: "u1".into(),
                display_name: None,
                avatar_url: None,
            }),
        );
        assert!(session.profile().is_none());
    }
}
