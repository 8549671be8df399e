use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, header};
use serde::de::DeserializeOwned;
use tracing::debug;
use zenith_core::ApiError;
use zenith_core::config::{ApiPaths, join_url};
use zenith_core::csrf::{self, CsrfToken};
use zenith_core::interactions::InteractionApi;
use zenith_core::models::{LikeResponse, PostId, ShareResponse};
use zenith_core::theme::ThemeSync;

use crate::error::{ClientError, ClientResult, api_error};
use crate::settings::Settings;

const SESSION_COOKIE: &str = "sessionid";

#[derive(Debug, Clone)]
/// HTTP-реализация серверного API страницы.
pub struct HttpApi {
    base_url: String,
    paths: ApiPaths,
    session_id: Option<String>,
    client: Client,
}

impl HttpApi {
    /// Клиент с таймаутами по умолчанию (5 с на соединение, 15 с на запрос).
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::build(base_url.into(), None, Duration::from_secs(5), Duration::from_secs(15))
    }

    /// Клиент по настройкам окружения.
    pub fn from_settings(settings: &Settings) -> ClientResult<Self> {
        Self::build(
            settings.base_url.clone(),
            settings.session_id.clone(),
            Duration::from_secs(settings.connect_timeout_secs),
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    fn build(
        base_url: String,
        session_id: Option<String>,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> ClientResult<Self> {
        if base_url.trim().is_empty() {
            return Err(ClientError::InvalidConfig("base url must not be empty".into()));
        }

        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url,
            paths: ApiPaths::default(),
            session_id,
            client,
        })
    }

    /// Заменяет шаблоны путей API.
    pub fn with_paths(mut self, paths: ApiPaths) -> Self {
        self.paths = paths;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Cookie, которые браузер отправил бы сам при `same-origin`.
    fn cookie_header(&self, csrf: Option<&CsrfToken>) -> Option<String> {
        let mut pairs = Vec::new();
        if let Some(token) = csrf {
            pairs.push(format!("{}={}", csrf::COOKIE_NAME, token.as_str()));
        }
        if let Some(session) = &self.session_id {
            pairs.push(format!("{SESSION_COOKIE}={session}"));
        }
        if pairs.is_empty() {
            return None;
        }
        Some(pairs.join("; "))
    }

    fn with_credentials(&self, request: RequestBuilder, csrf: Option<&CsrfToken>) -> RequestBuilder {
        let request = match csrf {
            Some(token) => request.header(csrf::HEADER_NAME, token.as_str()),
            None => request,
        };
        match self.cookie_header(csrf) {
            Some(cookies) => request.header(header::COOKIE, cookies),
            None => request,
        }
    }

    /// Тело разбирается при любом статусе: ошибки сервер тоже отдаёт JSON.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(api_error)?;
        serde_json::from_str::<T>(&body).map_err(|err| {
            debug!(%status, error = %err, "response body is not the expected JSON");
            ApiError::Decode(format!("http status {status}: {err}"))
        })
    }
}

#[async_trait(?Send)]
impl InteractionApi for HttpApi {
    async fn like(
        &self,
        post_id: &PostId,
        csrf: Option<&CsrfToken>,
    ) -> Result<LikeResponse, ApiError> {
        let url = self.endpoint(&self.paths.like_path(post_id));
        debug!(%url, "sending like");

        let request = self
            .client
            .post(&url)
            .header(csrf::REQUESTED_WITH_HEADER, csrf::REQUESTED_WITH_VALUE);
        let response = self
            .with_credentials(request, csrf)
            .send()
            .await
            .map_err(api_error)?;

        Self::decode(response).await
    }

    async fn share(&self, post_id: &PostId) -> Result<ShareResponse, ApiError> {
        let url = self.endpoint(&self.paths.share_path(post_id));
        debug!(%url, "requesting share link");

        let response = self.client.get(&url).send().await.map_err(api_error)?;
        Self::decode(response).await
    }
}

#[async_trait(?Send)]
impl ThemeSync for HttpApi {
    async fn sync_theme(&self, csrf: Option<&CsrfToken>) -> Result<(), ApiError> {
        let url = self.endpoint(&self.paths.toggle_theme);
        let request = self.client.get(&url);
        let response = self
            .with_credentials(request, csrf)
            .send()
            .await
            .map_err(api_error)?;

        debug!(status = %response.status(), "theme sync sent");
        Ok(())
    }
}
