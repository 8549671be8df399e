use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;
use zenith_core::ApiError;
use zenith_core::config::{ApiPaths, join_url};
use zenith_core::csrf::{self, CsrfToken};
use zenith_core::interactions::InteractionApi;
use zenith_core::models::{LikeResponse, PostId, ShareResponse};
use zenith_core::theme::ThemeSync;

/// Пустая база означает запросы к тому же origin, с которого отдана страница.
const API_BASE_URL: &str = match option_env!("ZENITH_API_BASE_URL") {
    Some(value) => value,
    None => "",
};

#[derive(Debug, Clone)]
/// Серверное API страницы через `fetch`.
pub(crate) struct BrowserApi {
    paths: ApiPaths,
}

impl BrowserApi {
    pub(crate) fn new(paths: ApiPaths) -> Self {
        Self { paths }
    }

    fn endpoint(path: &str) -> String {
        join_url(API_BASE_URL, path)
    }
}

fn with_csrf(request: RequestBuilder, csrf: Option<&CsrfToken>) -> RequestBuilder {
    let request = request.credentials(RequestCredentials::SameOrigin);
    match csrf {
        Some(token) => request.header(csrf::HEADER_NAME, token.as_str()),
        None => request,
    }
}

/// Тело разбирается при любом HTTP-статусе: ошибки сервер тоже отдаёт JSON.
async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(format!("http status {status}: {err}")))
}

#[async_trait(?Send)]
impl InteractionApi for BrowserApi {
    async fn like(
        &self,
        post_id: &PostId,
        csrf: Option<&CsrfToken>,
    ) -> Result<LikeResponse, ApiError> {
        let url = Self::endpoint(&self.paths.like_path(post_id));
        let request = Request::post(&url).header(csrf::REQUESTED_WITH_HEADER, csrf::REQUESTED_WITH_VALUE);

        let response = with_csrf(request, csrf)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        parse_json(response).await
    }

    async fn share(&self, post_id: &PostId) -> Result<ShareResponse, ApiError> {
        let url = Self::endpoint(&self.paths.share_path(post_id));

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        parse_json(response).await
    }
}

#[async_trait(?Send)]
impl ThemeSync for BrowserApi {
    async fn sync_theme(&self, csrf: Option<&CsrfToken>) -> Result<(), ApiError> {
        let url = Self::endpoint(&self.paths.toggle_theme);

        with_csrf(Request::get(&url), csrf)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(())
    }
}
