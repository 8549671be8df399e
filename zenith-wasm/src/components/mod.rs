pub(crate) mod banner;
pub(crate) mod contact_form;
pub(crate) mod mobile_menu;
pub(crate) mod post_actions;
pub(crate) mod theme_toggle;
