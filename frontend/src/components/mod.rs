// Reusable components live here.

pub mod article_form_modal;
pub mod article_listing;
pub mod confirm_dialog;
pub mod error_banner;
pub mod icons;
pub mod loading_spinner;
pub mod photo_lightbox;
pub mod toast;
