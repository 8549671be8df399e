//! Платформенно-независимое ядро клиентской части zenithPixels.
//!
//! Здесь живут контроллеры страницы (тема, мобильное меню, лайки и шаринг,
//! форма обратной связи, эффекты прокрутки) и модели ответов сервера.
//! Всё, что касается браузера (DOM, `localStorage`, `fetch`, таймеры),
//! подставляется через трейты, поэтому логика проверяется обычными тестами
//! на хосте, а `zenith-wasm` лишь реализует эти трейты поверх `web-sys`.
#![warn(missing_docs)]

pub mod config;
pub mod contact;
pub mod csrf;
pub mod error;
pub mod interactions;
pub mod models;
pub mod navigation;
pub mod notify;
pub mod scroll;
pub mod storage;
pub mod theme;
pub mod timing;

pub use config::ZenithConfig;
pub use error::{ApiError, InteractionError, StorageError};
pub use models::{LikeResponse, PostId, Severity, ShareResponse, Theme};
pub use notify::Notifier;
