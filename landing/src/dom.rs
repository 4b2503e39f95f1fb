//! Thin wrappers over browser APIs used by several sections.

use std::time::Duration;

use leptos::prelude::{document, window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

pub const COPIED_FLASH: Duration = Duration::from_millis(2000);

pub fn scroll_to_section(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        tracing::debug!("no section #{id} to scroll to");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Toggle `overflow: hidden` on `<body>` while a menu or modal is open.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        tracing::warn!("could not toggle body scroll: {e:?}");
    }
}

pub fn copy_to_clipboard(text: &str) {
    let clipboard = window().navigator().clipboard();
    let _ = clipboard.write_text(text);
}

pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        tracing::warn!("alert failed: {e:?}");
    }
}

/// Object URL for a local file preview; revoke with [`revoke_preview`].
pub fn preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file)
        .inspect_err(|e| tracing::warn!("no preview for {}: {e:?}", file.name()))
        .ok()
}

pub fn revoke_preview(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

pub fn is_image(file: &web_sys::File) -> bool {
    file.type_().starts_with("image/")
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_overflow() -> String {
        document()
            .body()
            .and_then(|b| b.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn file(name: &str, mime: &str) -> web_sys::File {
        let parts = js_sys::Array::of1(&"receipt".into());
        let options = web_sys::FilePropertyBag::new();
        options.set_type(mime);
        web_sys::File::new_with_str_sequence_and_options(&parts, name, &options).unwrap()
    }

    #[wasm_bindgen_test]
    fn scroll_lock_toggles_body_overflow() {
        set_body_scroll_locked(true);
        assert_eq!(body_overflow(), "hidden");
        set_body_scroll_locked(false);
        assert_eq!(body_overflow(), "");
    }

    #[wasm_bindgen_test]
    fn only_images_get_previews() {
        let png = file("check.png", "image/png");
        let pdf = file("check.pdf", "application/pdf");
        assert!(is_image(&png));
        assert!(!is_image(&pdf));

        let url = preview_url(&png).unwrap();
        assert!(url.starts_with("blob:"));
        revoke_preview(&url);
    }

    #[wasm_bindgen_test]
    fn missing_section_is_ignored() {
        scroll_to_section("no-such-section");
    }
}
