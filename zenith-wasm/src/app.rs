use zenith_core::ZenithConfig;

use crate::components::{contact_form, mobile_menu, post_actions, theme_toggle};
use crate::state::PageContext;
use crate::{dom, lazy, scroll};

/// Запускает `boot` сразу, если разметка уже разобрана, иначе по
/// `DOMContentLoaded`.
pub(crate) fn start_when_ready() {
    let Some(document) = dom::document() else {
        tracing::error!("no document, nothing to bind");
        return;
    };

    if document.ready_state() != "loading" {
        boot();
        return;
    }

    let mut booted = false;
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if !booted {
            booted = true;
            boot();
        }
    });
}

fn boot() {
    let ctx = PageContext::new(ZenithConfig::default());
    let scroll_config = ctx.config.scroll.clone();

    // тема первой, чтобы не мигал светлый фон
    theme_toggle::bind(&ctx);

    lazy::bind_lazy_images(&scroll_config.lazy_root_margin);
    scroll::bind_smooth_anchors();
    scroll::bind_reveal(&scroll_config);
    scroll::bind_parallax(&scroll_config);
    scroll::bind_auto_scroll(&scroll_config);

    mobile_menu::bind(&ctx);
    post_actions::bind(&ctx);
    contact_form::bind(&ctx);

    tracing::info!(csrf = ctx.csrf.is_some(), "page controllers bound");
}
