use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlButtonElement, HtmlElement, HtmlFormElement};
use zenith_core::contact::{
    ContactFormController, ContactFormView, ContactSubmission, SimulatedSubmitter,
};

use crate::components::banner::{ContactSuccess, MountedBanner};
use crate::dom;
use crate::state::PageContext;
use crate::timing::GlooDelay;

const SUBMIT_SELECTOR: &str = r#"button[type="submit"]"#;
const SPINNER_HTML: &str = r#"<span class="flex items-center justify-center"><svg class="animate-spin -ml-1 mr-3 h-5 w-5 text-white" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24"><circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle><path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path></svg> Enviando...</span>"#;

/// Форма `#contact-form`.
pub(crate) struct ContactForm {
    form: HtmlFormElement,
    submit: Option<HtmlButtonElement>,
    original_label: RefCell<Option<String>>,
}

impl ContactForm {
    fn new(form: HtmlFormElement) -> Self {
        let submit = form
            .query_selector(SUBMIT_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        Self {
            form,
            submit,
            original_label: RefCell::new(None),
        }
    }
}

impl ContactFormView for ContactForm {
    type Banner = Option<MountedBanner>;

    fn read(&self) -> ContactSubmission {
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return ContactSubmission::default();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return ContactSubmission::default();
        };

        let fields = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = entry.dyn_into::<js_sys::Array>().ok()?;
                // файлы в форме обратной связи не ожидаются, пропускаем
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect();
        ContactSubmission { fields }
    }

    fn set_busy(&self, busy: bool) {
        let Some(button) = &self.submit else {
            return;
        };
        button.set_disabled(busy);

        if busy {
            *self.original_label.borrow_mut() = button.text_content();
            button.set_inner_html(SPINNER_HTML);
        } else if let Some(label) = self.original_label.borrow_mut().take() {
            button.set_text_content(Some(&label));
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn show_success(&self) -> Self::Banner {
        let document = dom::document()?;
        let parent = self.form.parent_node()?;
        let host = document.create_element("div").ok()?.dyn_into::<HtmlElement>().ok()?;
        parent.insert_before(&host, Some(&self.form)).ok()?;

        Some(MountedBanner::mount(host, || view! { <ContactSuccess /> }))
    }

    fn dismiss(&self, banner: Self::Banner) {
        if let Some(banner) = banner {
            banner.dismiss();
        }
    }
}

pub(crate) fn bind(ctx: &PageContext) {
    let config = &ctx.config.contact;
    let Some(form) = dom::by_id(&config.form_id).and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    let controller = Rc::new(ContactFormController::new(
        SimulatedSubmitter::new(GlooDelay, config.simulated_latency),
        ContactForm::new(form.clone()),
        GlooDelay,
        config.success_banner_duration,
    ));

    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        let controller = controller.clone();
        spawn_local(async move {
            controller.submit().await;
        });
    });
}
