//! Тема страницы: выбор начального значения, переключение, сохранение и
//! синхронизация с сервером.
//!
//! Источник истины на клиенте это хранилище (`localStorage`). Сервер
//! получает лишь уведомление «best effort»: его ошибки не влияют на уже
//! применённую тему и не показываются пользователю.

use std::cell::Cell;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ThemeConfig;
use crate::csrf::CsrfToken;
use crate::error::{ApiError, StorageError};
use crate::models::Theme;
use crate::storage::KeyValueStore;

/// Сохранённая настройка темы поверх одного хранилища.
pub struct ThemePreferences<S> {
    store: S,
    key: String,
    legacy_keys: Vec<String>,
}

impl<S: KeyValueStore> ThemePreferences<S> {
    /// Сервис с ключами из настроек.
    pub fn new(store: S, config: &ThemeConfig) -> Self {
        Self {
            store,
            key: config.storage_key.clone(),
            legacy_keys: config.legacy_storage_keys.clone(),
        }
    }

    /// Значение под каноническим ключом. Мусор считается отсутствием значения.
    pub fn get(&self) -> Option<Theme> {
        self.store
            .get_item(&self.key)
            .as_deref()
            .and_then(Theme::parse)
    }

    /// Значение под одним из старых ключей.
    pub fn get_legacy(&self) -> Option<Theme> {
        self.legacy_keys
            .iter()
            .filter_map(|key| self.store.get_item(key))
            .find_map(|raw| Theme::parse(&raw))
    }

    /// Записывает значение под канонический ключ.
    pub fn set(&self, theme: Theme) -> Result<(), StorageError> {
        self.store.set_item(&self.key, theme.as_str())
    }
}

/// Отображение темы на документе: флаг на `<html>`, иконки кнопки, cookie.
pub trait ThemeSurface {
    /// Приводит документ к состоянию `theme`.
    fn apply(&self, theme: Theme);
}

/// Серверная сторона переключения темы (`GET /toggle-theme/`).
#[async_trait(?Send)]
pub trait ThemeSync {
    /// Сообщает серверу о переключении. Ответ не анализируется.
    async fn sync_theme(&self, csrf: Option<&CsrfToken>) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Откуда взялась начальная тема.
pub enum ThemeOrigin {
    /// Канонический ключ хранилища.
    Stored,
    /// Старый ключ хранилища.
    Legacy,
    /// Системная настройка `prefers-color-scheme`.
    System,
}

/// Начальная тема: сохранённая, затем старый ключ, затем системная (по
/// умолчанию светлая).
pub fn resolve_initial<S: KeyValueStore>(
    prefs: &ThemePreferences<S>,
    system_prefers_dark: bool,
) -> (Theme, ThemeOrigin) {
    if let Some(theme) = prefs.get() {
        return (theme, ThemeOrigin::Stored);
    }
    if let Some(theme) = prefs.get_legacy() {
        return (theme, ThemeOrigin::Legacy);
    }
    (Theme::from_system(system_prefers_dark), ThemeOrigin::System)
}

/// Строка для `document.cookie`, чтобы сервер отрисовал следующую страницу
/// в той же теме.
pub fn theme_cookie(config: &ThemeConfig, theme: Theme) -> String {
    format!(
        "{}={}; path=/; max-age={}; SameSite=Lax",
        config.cookie_name,
        theme.as_str(),
        config.cookie_max_age.as_secs()
    )
}

/// Контроллер темы: два состояния, переход только по клику.
pub struct ThemeController<S, V, A> {
    prefs: ThemePreferences<S>,
    surface: V,
    sync: A,
    csrf: Option<CsrfToken>,
    current: Cell<Theme>,
}

impl<S, V, A> ThemeController<S, V, A>
where
    S: KeyValueStore,
    V: ThemeSurface,
    A: ThemeSync,
{
    /// Определяет начальную тему, применяет её и, если канонического
    /// значения не было, записывает его.
    pub fn init(
        prefs: ThemePreferences<S>,
        surface: V,
        sync: A,
        csrf: Option<CsrfToken>,
        system_prefers_dark: bool,
    ) -> Self {
        let (theme, origin) = resolve_initial(&prefs, system_prefers_dark);
        surface.apply(theme);

        if origin != ThemeOrigin::Stored {
            if let Err(err) = prefs.set(theme) {
                warn!(error = %err, "failed to persist initial theme");
            }
        }
        debug!(theme = %theme, ?origin, "theme initialised");

        Self {
            prefs,
            surface,
            sync,
            csrf,
            current: Cell::new(theme),
        }
    }

    /// Текущая тема.
    pub fn current(&self) -> Theme {
        self.current.get()
    }

    /// Локальная часть переключения: документ и хранилище. Синхронно, чтобы
    /// состояние менялось раньше любого сетевого вызова.
    pub fn toggle_local(&self) -> Theme {
        let next = self.current.get().toggled();
        self.current.set(next);
        self.surface.apply(next);

        if let Err(err) = self.prefs.set(next) {
            warn!(error = %err, "failed to persist theme");
        }
        next
    }

    /// Переключает тему и уведомляет сервер. Ошибка сервера только пишется
    /// в журнал.
    pub async fn toggle(&self) -> Theme {
        let next = self.toggle_local();

        if let Err(err) = self.sync.sync_theme(self.csrf.as_ref()).await {
            debug!(error = %err, theme = %next, "theme sync failed, ignoring");
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::storage::MemoryStore;

    #[derive(Default)]
    struct Document {
        dark: Cell<bool>,
    }

    #[derive(Clone, Default)]
    struct FakeSurface(Rc<Document>);

    impl ThemeSurface for FakeSurface {
        fn apply(&self, theme: Theme) {
            self.0.dark.set(theme.is_dark());
        }
    }

    /// Запоминает флаг документа и токен на момент каждого вызова.
    #[derive(Clone)]
    struct FakeSync {
        fail: bool,
        document: Rc<Document>,
        calls: Rc<RefCell<Vec<(bool, Option<String>)>>>,
    }

    impl FakeSync {
        fn new(fail: bool, surface: &FakeSurface) -> Self {
            Self {
                fail,
                document: Rc::clone(&surface.0),
                calls: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    #[async_trait(?Send)]
    impl ThemeSync for FakeSync {
        async fn sync_theme(&self, csrf: Option<&CsrfToken>) -> Result<(), ApiError> {
            self.calls.borrow_mut().push((
                self.document.dark.get(),
                csrf.map(|token| token.as_str().to_string()),
            ));
            if self.fail {
                return Err(ApiError::Network("offline".into()));
            }
            Ok(())
        }
    }

    type Controller = ThemeController<Rc<MemoryStore>, FakeSurface, FakeSync>;

    fn setup(
        store: &Rc<MemoryStore>,
        surface: &FakeSurface,
        sync: &FakeSync,
        system_dark: bool,
    ) -> Controller {
        let prefs = ThemePreferences::new(Rc::clone(store), &ThemeConfig::default());
        ThemeController::init(
            prefs,
            surface.clone(),
            sync.clone(),
            CsrfToken::new("tok"),
            system_dark,
        )
    }

    #[test]
    fn absent_preference_with_dark_os_applies_and_stores_dark() {
        let store = Rc::new(MemoryStore::new());
        let surface = FakeSurface::default();
        let sync = FakeSync::new(false, &surface);
        let controller = setup(&store, &surface, &sync, true);

        assert_eq!(controller.current(), Theme::Dark);
        assert!(surface.0.dark.get());
        assert_eq!(store.get_item("color-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn absent_preference_with_light_os_defaults_to_light() {
        let store = Rc::new(MemoryStore::new());
        let surface = FakeSurface::default();
        let sync = FakeSync::new(false, &surface);
        let controller = setup(&store, &surface, &sync, false);

        assert_eq!(controller.current(), Theme::Light);
        assert_eq!(store.get_item("color-theme").as_deref(), Some("light"));
    }

    #[test]
    fn stored_preference_beats_system_setting() {
        let store = Rc::new(MemoryStore::with_items([("color-theme", "light")]));
        let surface = FakeSurface::default();
        let sync = FakeSync::new(false, &surface);
        let controller = setup(&store, &surface, &sync, true);

        assert_eq!(controller.current(), Theme::Light);
        assert!(!surface.0.dark.get());
    }

    #[test]
    fn legacy_key_is_adopted_into_canonical_key() {
        let store = Rc::new(MemoryStore::with_items([("theme", "dark")]));
        let surface = FakeSurface::default();
        let sync = FakeSync::new(false, &surface);
        let controller = setup(&store, &surface, &sync, false);

        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(store.get_item("color-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn garbage_in_storage_is_replaced_by_system_theme() {
        let store = Rc::new(MemoryStore::with_items([("color-theme", "true")]));
        let surface = FakeSurface::default();
        let sync = FakeSync::new(false, &surface);
        let controller = setup(&store, &surface, &sync, true);

        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(store.get_item("color-theme").as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn double_toggle_restores_flag_and_stored_value() {
        let store = Rc::new(MemoryStore::with_items([("color-theme", "light")]));
        let surface = FakeSurface::default();
        let sync = FakeSync::new(false, &surface);
        let controller = setup(&store, &surface, &sync, false);

        assert_eq!(controller.toggle().await, Theme::Dark);
        assert_eq!(controller.toggle().await, Theme::Light);

        assert!(!surface.0.dark.get());
        assert_eq!(store.get_item("color-theme").as_deref(), Some("light"));

        let calls = sync.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn sync_failure_keeps_local_state_and_runs_after_local_change() {
        let store = Rc::new(MemoryStore::with_items([("color-theme", "light")]));
        let surface = FakeSurface::default();
        let sync = FakeSync::new(true, &surface);
        let controller = setup(&store, &surface, &sync, false);

        let next = controller.toggle().await;

        assert_eq!(next, Theme::Dark);
        assert_eq!(controller.current(), Theme::Dark);
        assert!(surface.0.dark.get());
        assert_eq!(store.get_item("color-theme").as_deref(), Some("dark"));
        // флаг документа уже был тёмным в момент запроса
        assert!(sync.calls.borrow()[0].0);
    }

    #[test]
    fn cookie_string_carries_theme_and_lifetime() {
        let cookie = theme_cookie(&ThemeConfig::default(), Theme::Dark);
        assert_eq!(cookie, "color-theme=dark; path=/; max-age=2592000; SameSite=Lax");
    }
}
