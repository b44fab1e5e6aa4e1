use leptos::prelude::*;

use super::TAGLINE;
use crate::scroll::{self, Section};

/// Full-viewport banner shown before any scrolling occurs.
#[component]
pub fn Hero() -> impl IntoView {
    let navigate = scroll::use_navigate();

    view! {
        <section id="hero" class="hero">
            <div class="hero-backdrop"></div>
            <div class="hero-content">
                <h1 class="hero-title">"PRESHY'S PLACE"</h1>
                <p class="hero-tagline">{TAGLINE}</p>
                <button
                    class="btn btn-primary btn-lg"
                    on:click=move |_| navigate(Section::Collections)
                >
                    "View Collection"
                </button>
            </div>
            <button
                class="hero-scroll-cue"
                aria-label="Scroll down"
                on:click=move |_| navigate(Section::About)
            >
                <i class="fa-solid fa-chevron-down"></i>
            </button>
        </section>
    }
}
