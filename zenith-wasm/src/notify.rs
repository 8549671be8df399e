use std::time::Duration;

use js_sys::{Function, Reflect};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use zenith_core::Notifier;
use zenith_core::models::Severity;

use crate::components::banner::{MountedBanner, Toast};
use crate::dom;
use crate::toast::{self, Delivery, GlobalNotifier};

const GLOBAL_NOTIFIER: &str = "showNotification";

/// Уведомления страницы: глобальная `showNotification(message, type)`, если
/// шаблон её определил, иначе собственный баннер.
pub(crate) struct PageNotifier {
    banner_duration: Duration,
}

impl PageNotifier {
    pub(crate) fn new(banner_duration: Duration) -> Self {
        Self { banner_duration }
    }

    fn global_notifier() -> Option<Function> {
        let window = dom::window()?;
        Reflect::get(&window, &JsValue::from_str(GLOBAL_NOTIFIER))
            .ok()?
            .dyn_into::<Function>()
            .ok()
    }

    fn call_global(message: &str, severity: Severity) -> GlobalNotifier {
        let Some(notify) = Self::global_notifier() else {
            return GlobalNotifier::Missing;
        };
        let called = notify.call2(
            &JsValue::NULL,
            &JsValue::from_str(message),
            &JsValue::from_str(severity.as_str()),
        );
        match called {
            Ok(_) => GlobalNotifier::Delivered,
            Err(err) => {
                tracing::warn!(error = ?err, "showNotification threw, using fallback");
                GlobalNotifier::Threw
            }
        }
    }

    fn show_toast(message: &str, severity: Severity, dismiss_after: Duration) {
        let Some(document) = dom::document() else {
            return;
        };
        let (Some(body), Ok(host)) = (document.body(), document.create_element("div")) else {
            tracing::warn!(%message, "cannot render notification");
            return;
        };
        let Ok(host) = host.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        if body.append_child(&host).is_err() {
            return;
        }

        let message = message.to_string();
        let banner = MountedBanner::mount(host, move || {
            view! { <Toast message=message severity=severity /> }
        });
        spawn_local(async move {
            gloo_timers::future::sleep(dismiss_after).await;
            banner.dismiss();
        });
    }
}

impl Notifier for PageNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let global = Self::call_global(message, severity);
        if let Delivery::Banner { dismiss_after } = toast::delivery(global, self.banner_duration) {
            Self::show_toast(message, severity, dismiss_after);
        }
    }
}
