//! Scroll-position-driven UI state.
//!
//! The one piece of derived state on the page: a `scroll` listener on the
//! window turns the current offset into a "past the hero" flag, which gates
//! the fixed header. Navigation scrolls smoothly to a section anchor and
//! closes the mobile drawer on the way.

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Pixels before the hero's bottom edge at which the header reveals.
pub const HEADER_REVEAL_MARGIN: f64 = 100.0;

/// The six page regions, in document order. Anchors double as element ids
/// and stay stable for the page's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Collections,
    Services,
    Testimonials,
    Contact,
}

impl Section {
    /// Targets offered by the header links. The hero itself is reached
    /// through the brand mark instead.
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Collections,
        Section::Services,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Element id used as the scroll target.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Collections => "collections",
            Section::Services => "services",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    /// Link label shown in the header, drawer and footer.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Collections => "Collections",
            Section::Services => "Services",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }
}

/// Mobile drawer flag, provided from `App` so every navigation path can
/// close the drawer as a side effect.
#[derive(Clone, Copy)]
pub struct MobileMenu(pub RwSignal<bool>);

/// True once the viewport has scrolled past the hero section.
///
/// Strict inequality: sitting exactly on the threshold keeps the header
/// hidden. A hero that has not rendered yet reports height 0, which puts the
/// threshold above the top of the page and reveals the header immediately.
pub fn past_hero(scroll_y: f64, hero_height: f64) -> bool {
    scroll_y > hero_height - HEADER_REVEAL_MARGIN
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn hero_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(Section::Hero.anchor()))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0)
}

/// Registers a window `scroll` listener and returns the header-visibility
/// signal. The flag is computed once at mount so it is correct before any
/// scrolling, then on every scroll event with no debouncing. The listener is
/// removed when the owning scope is disposed, on every teardown path.
pub fn use_past_hero() -> ReadSignal<bool> {
    let (past, set_past) = signal(false);

    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };

        let on_scroll = SendWrapper::new(Closure::<dyn Fn()>::new(move || {
            set_past.set(past_hero(current_scroll_y(), hero_height()));
        }));
        let _ = window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());

        // Initial check, before the first scroll event arrives.
        set_past.set(past_hero(current_scroll_y(), hero_height()));

        // The closure moves into the cleanup hook, which keeps it alive for
        // exactly as long as the listener is registered.
        on_cleanup(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    on_scroll.as_ref().unchecked_ref(),
                );
            }
        });
    });

    past
}

/// Smoothly scrolls the viewport until `section` tops it. Not cancellable;
/// if called again mid-scroll the browser lets the last call win. A missing
/// element is a no-op.
pub fn scroll_to_section(section: Section) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()));
    if let Some(element) = element {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Navigation action shared by the header, drawer, hero and footer: scroll
/// to the section, then close the mobile drawer if one is open.
pub fn use_navigate() -> impl Fn(Section) + Copy {
    let menu = use_context::<MobileMenu>();
    move |section| {
        scroll_to_section(section);
        if let Some(MobileMenu(open)) = menu {
            open.set(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_hidden_while_hero_fills_viewport() {
        assert!(!past_hero(0.0, 800.0));
        assert!(!past_hero(650.0, 800.0));
        assert!(past_hero(701.0, 800.0));
        assert!(past_hero(2400.0, 800.0));
    }

    #[test]
    fn reveal_boundary_is_exclusive() {
        // Sitting exactly on hero_height - margin keeps the header hidden.
        assert!(!past_hero(700.0, 800.0));
        assert!(past_hero(700.5, 800.0));
    }

    #[test]
    fn unrendered_hero_reveals_header_immediately() {
        // Height unknown is treated as 0, so the threshold is negative.
        assert!(past_hero(0.0, 0.0));
        assert!(past_hero(1.0, 0.0));
    }

    #[test]
    fn nav_targets_exclude_the_hero() {
        assert_eq!(Section::NAV.len(), 5);
        assert!(!Section::NAV.contains(&Section::Hero));
    }

    #[test]
    fn anchors_are_unique_and_nonempty() {
        let all = [
            Section::Hero,
            Section::About,
            Section::Collections,
            Section::Services,
            Section::Testimonials,
            Section::Contact,
        ];
        for (i, a) in all.iter().enumerate() {
            assert!(!a.anchor().is_empty());
            assert!(!a.label().is_empty());
            for b in &all[i + 1..] {
                assert_ne!(a.anchor(), b.anchor());
            }
        }
    }
}
