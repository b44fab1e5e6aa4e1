//! Preshy's Place — single-page marketing site for a fashion brand.
//!
//! Client-side rendered with Leptos. The page is a fixed stack of sections
//! behind a scroll-revealed navigation header; [`scroll`] holds the only
//! derived state on the page.

pub mod scroll;
pub mod sections;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use scroll::MobileMenu;
use sections::{
    About, Collections, Contact, Footer, Hero, Nav, ScrollRevealScript, Services, Testimonials,
    BRAND, TAGLINE,
};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(MobileMenu(RwSignal::new(false)));

    let title = format!("{BRAND} - Grand Fashion");

    view! {
        <Title text=title />
        <Meta name="description" content=TAGLINE />
        <Nav />
        <main class="page">
            <Hero />
            <About />
            <Collections />
            <Services />
            <Testimonials />
            <Contact />
        </main>
        <Footer />
        <ScrollRevealScript />
    }
}
