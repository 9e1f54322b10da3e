use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{StatusCode, Url};

use crate::models::{Activity, MoodResponse, Profile, SetMoodInput};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base = sanitize_base_url(base_url.into())?;
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            base_url: base,
            token: None,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> Result<()> {
        self.base_url = sanitize_base_url(base_url.into())?;
        Ok(())
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn get_profile(&self) -> Result<Profile> {
        let url = self.url("/profile")?;
        let response = self.authorized(self.client.get(url)).send()?.error_for_status()?;
        Ok(response.json()?)
    }

    pub fn get_recent_activities(&self) -> Result<Vec<Activity>> {
        let url = self.url("/activities/recent")?;
        let response = self.authorized(self.client.get(url)).send()?.error_for_status()?;
        Ok(response.json()?)
    }

    /// `None` when no mood has been logged for `date_key`.
    pub fn get_user_mood(&self, date_key: &str) -> Result<Option<MoodResponse>> {
        let url = self.url(&format!("/mood/{date_key}"))?;
        let response = self.authorized(self.client.get(url)).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.error_for_status()?;
        Ok(response.json()?)
    }

    pub fn set_user_mood(&self, date_key: &str, value: u8) -> Result<()> {
        let url = self.url(&format!("/mood/{date_key}"))?;
        self.authorized(self.client.put(url))
            .json(&SetMoodInput { mood: value })
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// Plain GET for assets such as event images.
    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn url(&self, path: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).context("invalid base URL")?;
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{prefix}/{}", path.trim_start_matches('/')));
        Ok(url)
    }
}

fn sanitize_base_url(mut base: String) -> Result<String> {
    base = base.trim().to_string();
    if !base.starts_with("http://") && !base.starts_with("https://") {
        base = format!("http://{base}");
    }
    while base.ends_with('/') {
        base.pop();
    }
    let _ = Url::parse(&base).context("invalid base URL")?;
    Ok(base)
}
