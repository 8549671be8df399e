use anyhow::{Context, Result, anyhow};
use zenith_core::csrf::CsrfToken;

#[derive(Debug, Clone)]
/// Настройки клиента из переменных окружения.
pub struct Settings {
    /// Базовый URL сайта, например `http://127.0.0.1:8000`.
    pub base_url: String,
    /// CSRF-токен (`ZENITH_CSRF_TOKEN`), если нужен доступ к защищённым вызовам.
    pub csrf_token: Option<CsrfToken>,
    /// Значение cookie `sessionid` вошедшего пользователя.
    pub session_id: Option<String>,
    /// Таймаут установки соединения.
    pub connect_timeout_secs: u64,
    /// Таймаут всего запроса.
    pub request_timeout_secs: u64,
    /// Уровень журнала по умолчанию.
    pub log_level: String,
}

impl Settings {
    /// Читает настройки. Обязателен только `ZENITH_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let base_url = env_value("ZENITH_BASE_URL").context("ZENITH_BASE_URL is required")?;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(anyhow!("ZENITH_BASE_URL must start with http:// or https://"));
        }

        let csrf_token = env_value("ZENITH_CSRF_TOKEN").and_then(CsrfToken::new);
        let session_id = env_value("ZENITH_SESSION_ID");
        let connect_timeout_secs = timeout_secs("ZENITH_CONNECT_TIMEOUT_SECS", 5)?;
        let request_timeout_secs = timeout_secs("ZENITH_HTTP_TIMEOUT_SECS", 15)?;
        let log_level = env_value("ZENITH_LOG_LEVEL")
            .or_else(|| env_value("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());

        Ok(Self {
            base_url,
            csrf_token,
            session_id,
            connect_timeout_secs,
            request_timeout_secs,
            log_level,
        })
    }
}

/// Значение переменной без пробелов по краям; пустое считается незаданным.
fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn timeout_secs(key: &str, default: u64) -> Result<u64> {
    parse_timeout(env_value(key).as_deref(), default).with_context(|| format!("invalid {key}"))
}

/// Таймаут в секундах: незаданный берётся по умолчанию, ноль запрещён.
fn parse_timeout(raw: Option<&str>, default: u64) -> Result<u64> {
    let secs = match raw {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|err| anyhow!("expected whole seconds, got {raw:?}: {err}"))?,
        None => default,
    };
    if secs == 0 {
        return Err(anyhow!("timeout must be at least one second"));
    }
    Ok(secs)
}
