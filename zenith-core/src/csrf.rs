//! CSRF-токен Django.
//!
//! Токен ищется один раз при загрузке страницы в трёх местах по порядку:
//! `<meta name="csrf-token">`, скрытое поле `csrfmiddlewaretoken`, cookie
//! `csrftoken`. Если токена нет, запросы всё равно уходят (сервер их отклонит).

use std::fmt;

/// Имя meta-тега с токеном.
pub const META_NAME: &str = "csrf-token";
/// Имя скрытого поля формы с токеном.
pub const FORM_FIELD: &str = "csrfmiddlewaretoken";
/// Имя cookie с токеном.
pub const COOKIE_NAME: &str = "csrftoken";
/// Заголовок, в котором сервер ждёт токен.
pub const HEADER_NAME: &str = "X-CSRFToken";
/// Заголовок, по которому сервер отличает AJAX-запрос.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
/// Значение [`REQUESTED_WITH_HEADER`].
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

#[derive(Clone, PartialEq, Eq)]
/// CSRF-токен. `Debug` не раскрывает значение.
pub struct CsrfToken(String);

impl CsrfToken {
    /// Оборачивает непустое значение.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Значение для заголовка.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Откуда был взят токен.
pub enum CsrfSource {
    /// `<meta name="csrf-token">`.
    MetaTag,
    /// Скрытое поле формы.
    FormField,
    /// Cookie `csrftoken`.
    Cookie,
}

/// Источники токена на странице.
///
/// Декодирование значения cookie (`decodeURIComponent`) остаётся за
/// платформой, см. [`cookie_value`].
pub trait CsrfLookup {
    /// `content` meta-тега, если тег есть.
    fn meta_tag(&self) -> Option<String>;
    /// `value` скрытого поля, если поле есть.
    fn form_field(&self) -> Option<String>;
    /// Значение cookie `csrftoken`, уже декодированное.
    fn cookie(&self) -> Option<String>;
}

/// Находит токен с учётом приоритета источников.
///
/// Присутствующий источник выигрывает даже с пустым значением: так ведёт
/// себя страница, если meta-тег отрендерен без токена.
pub fn resolve(lookup: &impl CsrfLookup) -> Option<(CsrfToken, CsrfSource)> {
    if let Some(value) = lookup.meta_tag() {
        return CsrfToken::new(value).map(|token| (token, CsrfSource::MetaTag));
    }
    if let Some(value) = lookup.form_field() {
        return CsrfToken::new(value).map(|token| (token, CsrfSource::FormField));
    }
    lookup
        .cookie()
        .and_then(CsrfToken::new)
        .map(|token| (token, CsrfSource::Cookie))
}

/// Достаёт сырое значение cookie `name` из строки `document.cookie`.
///
/// Если cookie повторяется, берётся последнее вхождение.
pub fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .last()
}
