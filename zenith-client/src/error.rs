use thiserror::Error;
use zenith_core::ApiError;

#[derive(Debug, Error)]
/// Ошибки построения клиента `zenith-client`.
pub enum ClientError {
    /// Ошибка HTTP-стека (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Некорректные настройки.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Результат операций `zenith-client`.
pub type ClientResult<T> = Result<T, ClientError>;

/// Переводит ошибку `reqwest` в ошибку вызова API.
///
/// Ошибки декодирования тела отделяются от сетевых, хотя в интерфейсе
/// обе показываются одинаково.
pub(crate) fn api_error(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }
    ApiError::Network(err.to_string())
}
