//! Мобильное меню.
//!
//! Состояние не хранится в памяти: оно читается из `aria-expanded` кнопки
//! при каждом событии, чтобы не разойтись с DOM.

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Состояние меню.
pub enum MenuState {
    /// Меню свёрнуто.
    Collapsed,
    /// Меню раскрыто.
    Expanded,
}

impl MenuState {
    /// Состояние по значению `aria-expanded`. Всё, кроме `"true"`, значит «свёрнуто».
    pub fn from_aria(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Expanded,
            _ => Self::Collapsed,
        }
    }

    /// Значение для `aria-expanded`.
    pub fn as_aria(self) -> &'static str {
        match self {
            Self::Collapsed => "false",
            Self::Expanded => "true",
        }
    }

    /// Противоположное состояние.
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

/// Меню на странице.
pub trait MenuView {
    /// Текущее значение `aria-expanded` кнопки.
    fn aria_expanded(&self) -> Option<String>;
    /// Обновляет `aria-expanded`, классы раскладки и иконку кнопки.
    fn render(&self, state: MenuState);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Где был клик по документу.
pub struct ClickTarget {
    /// Внутри контейнера меню.
    pub inside_menu: bool,
    /// На самой кнопке меню.
    pub on_toggle: bool,
}

/// Контроллер меню.
pub struct NavigationMenuController<V> {
    view: V,
}

impl<V: MenuView> NavigationMenuController<V> {
    /// Создаёт контроллер над готовой разметкой.
    pub fn new(view: V) -> Self {
        Self { view }
    }

    /// Текущее состояние по DOM.
    pub fn state(&self) -> MenuState {
        MenuState::from_aria(self.view.aria_expanded().as_deref())
    }

    /// Клик по кнопке меню.
    pub fn toggle(&self) -> MenuState {
        let next = self.state().toggled();
        self.view.render(next);
        trace!(state = ?next, "menu toggled");
        next
    }

    /// Клик где угодно в документе. Клик вне меню и вне кнопки сворачивает
    /// раскрытое меню.
    pub fn on_document_click(&self, target: ClickTarget) -> MenuState {
        if target.inside_menu || target.on_toggle {
            return self.state();
        }
        self.collapse()
    }

    /// Клик по ссылке внутри меню: переход означает, что меню больше не нужно.
    pub fn on_link_click(&self) -> MenuState {
        self.collapse()
    }

    fn collapse(&self) -> MenuState {
        if self.state() == MenuState::Expanded {
            self.view.render(MenuState::Collapsed);
            trace!("menu collapsed");
        }
        MenuState::Collapsed
    }
}
