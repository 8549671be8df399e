use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlInputElement};
use zenith_core::config::ThemeConfig;
use zenith_core::models::Theme;
use zenith_core::theme::{ThemeController, ThemePreferences, ThemeSurface, theme_cookie};

use crate::api::BrowserApi;
use crate::dom;
use crate::state::PageContext;
use crate::storage::LocalStorage;

const HIDDEN_CLASS: &str = "hidden";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Тема на странице: класс на `<html>`, иконки переключателя и cookie,
/// по которой сервер рисует следующую страницу.
pub(crate) struct DocumentTheme {
    config: ThemeConfig,
}

impl ThemeSurface for DocumentTheme {
    fn apply(&self, theme: Theme) {
        let Some(document) = dom::document() else {
            return;
        };

        if let Some(root) = document.document_element() {
            dom::set_class(&root, &self.config.document_class, theme.is_dark());
        }

        // в светлой теме видна иконка «включить тёмную», и наоборот
        if let Some(icon) = dom::by_id(&self.config.dark_icon_id) {
            dom::set_class(&icon, HIDDEN_CLASS, theme.is_dark());
        }
        if let Some(icon) = dom::by_id(&self.config.light_icon_id) {
            dom::set_class(&icon, HIDDEN_CLASS, !theme.is_dark());
        }

        if let Some(checkbox) = dom::by_id(&self.config.toggle_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            checkbox.set_checked(theme.is_dark());
        }

        if let Ok(html) = document.dyn_into::<HtmlDocument>() {
            if let Err(err) = html.set_cookie(&theme_cookie(&self.config, theme)) {
                tracing::debug!(error = ?err, "failed to write theme cookie");
            }
        }
    }
}

fn system_prefers_dark() -> bool {
    dom::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Применяет тему сразу и вешает переключатель, если он есть в разметке.
pub(crate) fn bind(ctx: &PageContext) {
    let config = ctx.config.theme.clone();
    let prefs = ThemePreferences::new(LocalStorage, &config);
    let controller = Rc::new(ThemeController::init(
        prefs,
        DocumentTheme {
            config: config.clone(),
        },
        BrowserApi::new(ctx.config.api.clone()),
        ctx.csrf.clone(),
        system_prefers_dark(),
    ));

    let Some(toggle) = dom::by_id(&config.toggle_id) else {
        tracing::debug!(id = %config.toggle_id, "theme toggle not found");
        return;
    };

    // чекбокс переключается сам, у кнопки гасим действие по умолчанию
    let is_checkbox = toggle.is_instance_of::<HtmlInputElement>();
    let event = if is_checkbox { "change" } else { "click" };
    dom::listen(&toggle, event, move |event| {
        if !is_checkbox {
            event.prevent_default();
        }
        let controller = controller.clone();
        spawn_local(async move {
            controller.toggle().await;
        });
    });
}
