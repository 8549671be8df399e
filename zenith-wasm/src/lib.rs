//! Браузерная часть zenithPixels: привязка контроллеров `zenith-core` к
//! серверной разметке страницы.
//!
//! Модуль собирается только под `wasm32`; на хосте крейт пустой, чтобы
//! `cargo build --workspace` проходил без браузерных зависимостей.

#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod csrf;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod lazy;
#[cfg(target_arch = "wasm32")]
mod notify;
#[cfg(target_arch = "wasm32")]
mod platform;
#[cfg(target_arch = "wasm32")]
mod scroll;
#[cfg(target_arch = "wasm32")]
mod state;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod timing;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod toast;

/// Точка входа модуля: запускается браузером сразу после инициализации wasm.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // повторная инициализация (hot reload) не ошибка
    let _ = console_log::init_with_level(level);

    app::start_when_ready();
}
