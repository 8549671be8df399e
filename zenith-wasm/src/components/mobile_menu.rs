use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Node};
use zenith_core::navigation::{ClickTarget, MenuState, MenuView, NavigationMenuController};

use crate::dom;
use crate::state::PageContext;

const COLLAPSED_CLASSES: [&str; 2] = ["max-h-0", "opacity-0"];
const EXPANDED_CLASSES: [&str; 2] = ["max-h-screen", "opacity-100"];

const HAMBURGER_ICON: &str = r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />"#;
const CLOSE_ICON: &str =
    r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />"#;

/// Кнопка `#mobile-menu-button` и выпадающий `#mobile-menu`.
pub(crate) struct MobileMenu {
    button: Element,
    menu: Element,
}

impl MenuView for MobileMenu {
    fn aria_expanded(&self) -> Option<String> {
        self.button.get_attribute("aria-expanded")
    }

    fn render(&self, state: MenuState) {
        let (add, remove, icon) = match state {
            MenuState::Expanded => (EXPANDED_CLASSES, COLLAPSED_CLASSES, CLOSE_ICON),
            MenuState::Collapsed => (COLLAPSED_CLASSES, EXPANDED_CLASSES, HAMBURGER_ICON),
        };
        dom::remove_classes(&self.menu, &remove);
        dom::add_classes(&self.menu, &add);

        let _ = self.button.set_attribute("aria-expanded", state.as_aria());
        if let Ok(Some(svg)) = self.button.query_selector("svg") {
            svg.set_inner_html(icon);
        }
    }
}

fn contains(container: &Element, target: Option<&Node>) -> bool {
    container.contains(target)
}

pub(crate) fn bind(ctx: &PageContext) {
    let config = &ctx.config.navigation;
    let (Some(button), Some(menu)) = (dom::by_id(&config.button_id), dom::by_id(&config.menu_id)) else {
        return;
    };

    let controller = Rc::new(NavigationMenuController::new(MobileMenu {
        button: button.clone(),
        menu: menu.clone(),
    }));

    {
        let controller = controller.clone();
        dom::listen(&button, "click", move |event| {
            event.stop_propagation();
            controller.toggle();
        });
    }

    if let Some(document) = dom::document() {
        let controller = controller.clone();
        let (button, menu) = (button.clone(), menu.clone());
        dom::listen(&document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            controller.on_document_click(ClickTarget {
                inside_menu: contains(&menu, target.as_ref()),
                on_toggle: contains(&button, target.as_ref()),
            });
        });
    }

    let link_selector = format!("#{} a", config.menu_id);
    for link in dom::query_all(&link_selector) {
        let controller = controller.clone();
        dom::listen(&link, "click", move |_| {
            controller.on_link_click();
        });
    }
}
