use leptos::prelude::*;

use super::{BRAND, LOGO_PATH};
use crate::scroll::{self, MobileMenu, Section};

/// Fixed navigation header. Hidden while the hero fills the viewport,
/// revealed once the visitor scrolls past it; on narrow screens the inline
/// links collapse into a drawer behind a toggle button.
#[component]
pub fn Nav() -> impl IntoView {
    let visible = scroll::use_past_hero();
    let MobileMenu(menu_open) = expect_context::<MobileMenu>();
    let navigate = scroll::use_navigate();

    view! {
        <Show when=move || visible.get()>
            <nav class="nav">
                <div class="nav-inner">
                    <button class="nav-brand" on:click=move |_| navigate(Section::Hero)>
                        <img class="nav-logo" src=LOGO_PATH alt=BRAND />
                    </button>
                    <div class="nav-links">
                        {Section::NAV
                            .iter()
                            .map(|&section| {
                                view! {
                                    <button class="nav-link" on:click=move |_| navigate(section)>
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="nav-menu-btn"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="nav-drawer">
                        {Section::NAV
                            .iter()
                            .map(|&section| {
                                view! {
                                    <button
                                        class="nav-drawer-link"
                                        on:click=move |_| navigate(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </nav>
        </Show>
    }
}
