use std::rc::Rc;

use zenith_core::csrf::CsrfToken;
use zenith_core::{Notifier, ZenithConfig};

use crate::csrf;
use crate::notify::PageNotifier;

/// То, что определяется один раз при загрузке страницы и нужно нескольким
/// контроллерам.
#[derive(Clone)]
pub(crate) struct PageContext {
    pub(crate) config: Rc<ZenithConfig>,
    pub(crate) notifier: Rc<dyn Notifier>,
    pub(crate) csrf: Option<CsrfToken>,
}

impl PageContext {
    pub(crate) fn new(config: ZenithConfig) -> Self {
        let notifier = Rc::new(PageNotifier::new(config.interactions.banner_duration));
        Self {
            config: Rc::new(config),
            notifier,
            csrf: csrf::resolve_page_token(),
        }
    }
}
