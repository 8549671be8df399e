//! Нативный HTTP-клиент к API взаимодействий zenithPixels.
//!
//! Реализует трейты `zenith-core` (`InteractionApi`, `ThemeSync`) поверх
//! `reqwest`, поэтому те же контроллеры, что работают в браузере, можно
//! прогнать против живого сервера из тестов или скриптов.
//!
//! Клиент повторяет поведение страницы: CSRF-токен уходит и в заголовке
//! `X-CSRFToken`, и в cookie `csrftoken`; cookie сессии подставляется, если
//! задана (аналог `credentials: 'same-origin'`).
#![warn(missing_docs)]

mod error;
mod http_client;
mod logging;
mod settings;

pub use error::{ClientError, ClientResult};
pub use http_client::HttpApi;
pub use logging::init_logging;
pub use settings::Settings;

use std::time::Duration;

use async_trait::async_trait;
use zenith_core::timing::Delay;

#[derive(Debug, Clone, Copy, Default)]
/// Таймер интерфейсных пауз на `tokio`.
pub struct TokioDelay;

#[async_trait(?Send)]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
