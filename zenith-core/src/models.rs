use std::fmt;

use serde::{Deserialize, Serialize};

/// Значение поля `status`, которым сервер помечает успешный ответ.
pub const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Непрозрачный идентификатор поста из атрибута `data-post-id`.
pub struct PostId(String);

impl PostId {
    /// Разбирает сырое значение атрибута. Пустое значение считается отсутствующим.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let value = raw?.trim();
        if value.is_empty() {
            return None;
        }
        Some(Self(value.to_string()))
    }

    /// Строковое представление для подстановки в путь запроса.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Ответ `POST /api/post/{id}/like/`.
///
/// Ответ с ошибкой содержит только `status` и `message`, поэтому все поля
/// имеют значения по умолчанию.
pub struct LikeResponse {
    /// `"success"` либо любое другое значение.
    #[serde(default)]
    pub status: String,
    /// Поставлен ли лайк после операции.
    #[serde(default)]
    pub liked: bool,
    /// Актуальное число лайков.
    #[serde(default)]
    pub likes_count: i64,
    /// Текст для пользователя.
    #[serde(default)]
    pub message: Option<String>,
}

impl LikeResponse {
    /// Сервер подтвердил операцию.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Ответ `GET /api/post/{id}/share/`.
pub struct ShareResponse {
    /// `"success"` либо любое другое значение.
    #[serde(default)]
    pub status: String,
    /// Заголовок поста.
    #[serde(default)]
    pub title: Option<String>,
    /// Текст для пользователя (он же текст для нативного шаринга).
    #[serde(default)]
    pub message: Option<String>,
    /// Абсолютный URL поста.
    #[serde(default)]
    pub url: Option<String>,
}

impl ShareResponse {
    /// Сервер подтвердил операцию.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Данные для нативного шаринга (`navigator.share`).
pub struct SharePayload {
    /// Заголовок.
    pub title: String,
    /// Сопроводительный текст.
    pub text: String,
    /// Ссылка.
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Цветовая тема страницы.
pub enum Theme {
    /// Светлая тема, используется по умолчанию.
    #[default]
    Light,
    /// Тёмная тема.
    Dark,
}

impl Theme {
    /// Значение, которое хранится в `localStorage` и cookie.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Разбирает сохранённое значение; всё, кроме `"dark"`/`"light"`, отбрасывается.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Противоположная тема.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Тема по системной настройке `prefers-color-scheme`.
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Включён ли флаг тёмной темы на документе.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Уровень важности уведомления.
pub enum Severity {
    /// Нейтральное сообщение.
    Info,
    /// Успешная операция.
    Success,
    /// Ошибка.
    Error,
}

impl Severity {
    /// Имя уровня, которое ожидает глобальная `showNotification(message, type)`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}
