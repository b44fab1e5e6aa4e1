//! Browser checks for the mounted page. Run with `wasm-pack test --headless
//! --chrome` (or trunk's wasm test runner); compiled only for wasm32.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use preshys_place::App;
use preshys_place::scroll::{Section, scroll_to_section};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn page_mounts_with_stable_anchors_and_form() {
    // Navigating before anything is mounted must be a silent no-op.
    scroll_to_section(Section::Contact);

    leptos::mount::mount_to_body(|| view! { <App /> });

    let all = [
        Section::Hero,
        Section::About,
        Section::Collections,
        Section::Services,
        Section::Testimonials,
        Section::Contact,
    ];
    for section in all {
        assert!(
            document().get_element_by_id(section.anchor()).is_some(),
            "missing section anchor #{}",
            section.anchor(),
        );
    }

    // The enquiry form renders its four fields and stays unwired.
    for id in ["name", "email", "subject", "message"] {
        assert!(
            document().get_element_by_id(id).is_some(),
            "missing form field #{id}",
        );
    }
    let form = document().query_selector("form.contact-form").unwrap();
    assert!(form.unwrap().get_attribute("action").is_none());

    // Smooth-scroll against the live page must not panic, including when
    // invoked again before the previous scroll settles.
    scroll_to_section(Section::Collections);
    scroll_to_section(Section::About);
}
