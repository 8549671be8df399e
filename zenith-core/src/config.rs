//! Настройки клиентской части: пути API, идентификаторы элементов, ключи
//! хранилища и задержки интерфейса.
//!
//! Значения по умолчанию совпадают с разметкой, которую отдаёт сервер.

use std::time::Duration;

use crate::models::PostId;

#[derive(Debug, Clone, Default)]
/// Полный набор настроек страницы.
pub struct ZenithConfig {
    /// Пути серверного API.
    pub api: ApiPaths,
    /// Тема.
    pub theme: ThemeConfig,
    /// Лайки, шаринг, уведомления.
    pub interactions: InteractionConfig,
    /// Мобильное меню.
    pub navigation: NavigationConfig,
    /// Прокрутка, параллакс, ленивые изображения.
    pub scroll: ScrollConfig,
    /// Форма обратной связи.
    pub contact: ContactConfig,
}

#[derive(Debug, Clone)]
/// Шаблоны путей серверного API. `{id}` заменяется идентификатором поста.
pub struct ApiPaths {
    /// Лайк/анлайк поста.
    pub like: String,
    /// Получение ссылки для шаринга.
    pub share: String,
    /// Синхронизация темы с сервером.
    pub toggle_theme: String,
}

impl Default for ApiPaths {
    fn default() -> Self {
        Self {
            like: "/api/post/{id}/like/".to_string(),
            share: "/api/post/{id}/share/".to_string(),
            toggle_theme: "/toggle-theme/".to_string(),
        }
    }
}

impl ApiPaths {
    /// Путь лайка для поста.
    pub fn like_path(&self, post_id: &PostId) -> String {
        self.like.replace("{id}", post_id.as_str())
    }

    /// Путь шаринга для поста.
    pub fn share_path(&self, post_id: &PostId) -> String {
        self.share.replace("{id}", post_id.as_str())
    }
}

/// Склеивает базовый URL и путь без двойных слэшей. Пустая база даёт
/// относительный путь того же origin.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Debug, Clone)]
/// Настройки темы.
pub struct ThemeConfig {
    /// Канонический ключ `localStorage`.
    pub storage_key: String,
    /// Старые ключи, которые читаются, если канонического значения нет.
    pub legacy_storage_keys: Vec<String>,
    /// `id` кнопки переключения.
    pub toggle_id: String,
    /// `id` иконки, видимой в светлой теме.
    pub dark_icon_id: String,
    /// `id` иконки, видимой в тёмной теме.
    pub light_icon_id: String,
    /// Класс на `<html>`, включающий тёмную тему.
    pub document_class: String,
    /// Имя cookie, которое читает сервер при первой отрисовке.
    pub cookie_name: String,
    /// Время жизни cookie.
    pub cookie_max_age: Duration,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "color-theme".to_string(),
            legacy_storage_keys: vec!["theme".to_string()],
            toggle_id: "theme-toggle".to_string(),
            dark_icon_id: "theme-toggle-dark-icon".to_string(),
            light_icon_id: "theme-toggle-light-icon".to_string(),
            document_class: "dark".to_string(),
            cookie_name: "color-theme".to_string(),
            cookie_max_age: Duration::from_secs(60 * 60 * 24 * 30),
        }
    }
}

#[derive(Debug, Clone)]
/// Настройки кнопок взаимодействия.
pub struct InteractionConfig {
    /// Селектор кнопок лайка.
    pub like_selector: String,
    /// Селектор кнопок шаринга.
    pub share_selector: String,
    /// Селектор кнопок комментариев.
    pub comment_selector: String,
    /// Через сколько снимается класс пульсации с кнопки лайка.
    pub pulse_duration: Duration,
    /// Сколько висит запасной баннер уведомления.
    pub banner_duration: Duration,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            like_selector: ".like-btn".to_string(),
            share_selector: ".share-btn".to_string(),
            comment_selector: ".comment-btn".to_string(),
            pulse_duration: Duration::from_millis(300),
            banner_duration: Duration::from_secs(3),
        }
    }
}

#[derive(Debug, Clone)]
/// Настройки мобильного меню.
pub struct NavigationConfig {
    /// `id` кнопки меню.
    pub button_id: String,
    /// `id` контейнера меню.
    pub menu_id: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            button_id: "mobile-menu-button".to_string(),
            menu_id: "mobile-menu".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
/// Настройки эффектов прокрутки.
pub struct ScrollConfig {
    /// Пути, на которых работает автопрокрутка к приветствию.
    pub auto_scroll_paths: Vec<String>,
    /// `id` первой секции домашней страницы.
    pub home_section_id: String,
    /// `id` секции, к которой прокручиваем.
    pub welcome_section_id: String,
    /// Задержка перед автопрокруткой.
    pub auto_scroll_delay: Duration,
    /// Доля видимости `#home`, после которой запускается автопрокрутка.
    pub auto_scroll_threshold: f64,
    /// `rootMargin` наблюдателя автопрокрутки.
    pub auto_scroll_root_margin: String,
    /// Доля видимости для анимации появления.
    pub reveal_threshold: f64,
    /// `rootMargin` наблюдателя анимации появления.
    pub reveal_root_margin: String,
    /// Скорость параллакса, если атрибут не задан.
    pub default_parallax_speed: f64,
    /// `rootMargin` ленивой загрузки изображений.
    pub lazy_root_margin: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            auto_scroll_paths: vec!["/".to_string(), "/home".to_string()],
            home_section_id: "home".to_string(),
            welcome_section_id: "welcome".to_string(),
            auto_scroll_delay: Duration::from_millis(1200),
            auto_scroll_threshold: 0.7,
            auto_scroll_root_margin: "0px 0px -50px 0px".to_string(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -100px 0px".to_string(),
            default_parallax_speed: 0.3,
            lazy_root_margin: "200px 0px".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
/// Настройки формы обратной связи.
pub struct ContactConfig {
    /// `id` формы.
    pub form_id: String,
    /// Имитация времени отправки.
    pub simulated_latency: Duration,
    /// Сколько висит баннер успеха.
    pub success_banner_duration: Duration,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contact-form".to_string(),
            simulated_latency: Duration::from_millis(1500),
            success_banner_duration: Duration::from_secs(5),
        }
    }
}
