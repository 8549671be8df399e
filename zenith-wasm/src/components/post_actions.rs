//! Кнопки под постом: лайк, шаринг, комментарии.

use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlButtonElement};
use zenith_core::config::InteractionConfig;
use zenith_core::interactions::{InteractionController, LikeControl, LikeView};

use crate::api::BrowserApi;
use crate::dom;
use crate::platform::BrowserShare;
use crate::state::PageContext;
use crate::timing::GlooDelay;

const POST_ID_ATTR: &str = "data-post-id";
const PULSE_CLASS: &str = "animate-pulse-once";
const LIKED_CLASS: &str = "text-brand-yellow";
const COUNT_SELECTOR: &str = ".like-count";

type PageInteractions = InteractionController<BrowserApi, BrowserShare, GlooDelay>;

/// Кнопка лайка из серверной разметки и её порядковый номер на странице.
pub(crate) struct LikeButton(Element, u64);

impl LikeControl for LikeButton {
    fn control_id(&self) -> u64 {
        self.1
    }

    fn post_id(&self) -> Option<String> {
        self.0.get_attribute(POST_ID_ATTR)
    }

    fn is_disabled(&self) -> bool {
        self.0
            .dyn_ref::<HtmlButtonElement>()
            .map_or_else(|| self.0.has_attribute("disabled"), HtmlButtonElement::disabled)
    }

    fn set_pulsing(&self, pulsing: bool) {
        dom::set_class(&self.0, PULSE_CLASS, pulsing);
    }

    fn render(&self, view: &LikeView) {
        if let Ok(Some(icon)) = self.0.query_selector("svg") {
            let _ = icon.set_attribute("fill", view.icon_fill);
        }
        dom::set_class(&self.0, LIKED_CLASS, view.liked);

        if let Ok(Some(count)) = self.0.query_selector(COUNT_SELECTOR) {
            count.set_text_content(Some(&view.count_text));
        }
    }
}

fn swallow(event: &Event) {
    event.prevent_default();
    event.stop_propagation();
}

/// Вешает обработчики на все кнопки действий, найденные на странице.
pub(crate) fn bind(ctx: &PageContext) {
    let config: &InteractionConfig = &ctx.config.interactions;
    let controller: Rc<PageInteractions> = Rc::new(InteractionController::new(
        BrowserApi::new(ctx.config.api.clone()),
        BrowserShare,
        GlooDelay,
        ctx.notifier.clone(),
        ctx.csrf.clone(),
        config.pulse_duration,
    ));

    let likes = dom::query_all(&config.like_selector);
    let shares = dom::query_all(&config.share_selector);
    let comments = dom::query_all(&config.comment_selector);
    tracing::debug!(
        likes = likes.len(),
        shares = shares.len(),
        comments = comments.len(),
        "binding post actions"
    );

    for (index, button) in (0u64..).zip(likes) {
        let controller = controller.clone();
        let target = button.clone();
        dom::listen(&button, "click", move |event| {
            swallow(&event);
            let controller = controller.clone();
            let control = LikeButton(target.clone(), index);
            spawn_local(async move {
                // ошибки уже показаны пользователю
                let _ = controller.handle_like(&control).await;
            });
        });
    }

    for button in shares {
        let controller = controller.clone();
        let target = button.clone();
        dom::listen(&button, "click", move |event| {
            swallow(&event);
            let controller = controller.clone();
            let post_id = target.get_attribute(POST_ID_ATTR);
            spawn_local(async move {
                let _ = controller.handle_share(post_id.as_deref()).await;
            });
        });
    }

    for button in comments {
        let controller = controller.clone();
        dom::listen(&button, "click", move |event| {
            swallow(&event);
            controller.handle_comment();
        });
    }
}
