use leptos::prelude::*;

use super::{BRAND, CONTACT_EMAIL, CONTACT_PHONES, LOGO_PATH, STUDIO_ADDRESS};
use crate::scroll::{self, Section};

static FOOTER_SERVICES: [&str; 4] = [
    "Custom Designs",
    "Ready-to-Wear",
    "Styling Services",
    "Fashion Workshops",
];

#[component]
pub fn Footer() -> impl IntoView {
    let navigate = scroll::use_navigate();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <img class="footer-logo" src=LOGO_PATH alt=BRAND />
                        <p>
                            "Celebrating African fashion through timeless designs and \
                             contemporary styles."
                        </p>
                    </div>
                    <div class="footer-col">
                        <h4>"Quick Links"</h4>
                        <ul>
                            {Section::NAV[..4]
                                .iter()
                                .map(|&section| {
                                    view! {
                                        <li>
                                            <button
                                                class="footer-link"
                                                on:click=move |_| navigate(section)
                                            >
                                                {section.label()}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="footer-col">
                        <h4>"Services"</h4>
                        <ul>
                            {FOOTER_SERVICES
                                .iter()
                                .map(|&service| {
                                    view! {
                                        <li>
                                            <a href="#" class="footer-link">{service}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="footer-col">
                        <h4>"Contact"</h4>
                        <ul class="footer-contact">
                            <li>
                                <i class="fa-solid fa-envelope"></i>
                                <span>{CONTACT_EMAIL}</span>
                            </li>
                            <li>
                                <i class="fa-solid fa-phone"></i>
                                <span>{CONTACT_PHONES}</span>
                            </li>
                            <li>
                                <i class="fa-solid fa-location-dot"></i>
                                <span>{STUDIO_ADDRESS}</span>
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="footer-legal">
                    <p>{format!("\u{a9} {year} {BRAND}. All rights reserved.")}</p>
                    <div class="footer-legal-links">
                        <a href="#">"Privacy Policy"</a>
                        <a href="#">"Terms of Service"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
