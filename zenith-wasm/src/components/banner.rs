use std::any::Any;

use leptos::prelude::*;
use web_sys::HtmlElement;
use zenith_core::models::Severity;

use crate::toast::toast_class;

/// Временное уведомление в правом верхнем углу.
#[component]
pub(crate) fn Toast(message: String, severity: Severity) -> impl IntoView {
    view! {
        <div class=toast_class(severity) role="status">
            {message}
        </div>
    }
}

/// Баннер успешной отправки формы обратной связи.
#[component]
pub(crate) fn ContactSuccess() -> impl IntoView {
    view! {
        <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded relative mb-4" role="alert">
            <strong class="font-bold">"Sucesso!"</strong>
            <span class="block sm:inline">
                " Sua mensagem foi enviada. Entraremos em contato em breve."
            </span>
        </div>
    }
}

/// Смонтированный в отдельный контейнер вид. `dismiss` размонтирует вид
/// и удаляет контейнер из документа.
pub(crate) struct MountedBanner {
    host: HtmlElement,
    view: Box<dyn Any>,
}

impl MountedBanner {
    pub(crate) fn mount<F, N>(host: HtmlElement, view: F) -> Self
    where
        F: FnOnce() -> N + 'static,
        N: IntoView + 'static,
    {
        let handle = leptos::mount::mount_to(host.clone(), view);
        Self {
            host,
            view: Box::new(handle),
        }
    }

    pub(crate) fn dismiss(self) {
        drop(self.view);
        self.host.remove();
    }
}

