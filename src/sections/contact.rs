use leptos::prelude::*;

use super::{CONTACT_EMAIL, CONTACT_PHONES, FACEBOOK_URL, INSTAGRAM_URL, STUDIO_ADDRESS, TWITTER_URL};

static STUDIO_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">"Get In Touch"</h2>
                    <p class="section-description">
                        "Have questions or want to schedule a consultation? Reach out to us."
                    </p>
                </div>
                <div class="contact-grid">
                    <ContactForm />
                    <ContactInfo />
                </div>
            </div>
        </section>
    }
}

/// Enquiry form. Submission is intentionally unwired: there is no backend to
/// receive it yet, so the fields render but the button performs no action.
#[component]
fn ContactForm() -> impl IntoView {
    view! {
        <form class="contact-form reveal">
            <div class="form-row">
                <div class="form-field">
                    <label for="name">"Name"</label>
                    <input id="name" type="text" />
                </div>
                <div class="form-field">
                    <label for="email">"Email"</label>
                    <input id="email" type="email" />
                </div>
            </div>
            <div class="form-field">
                <label for="subject">"Subject"</label>
                <input id="subject" type="text" />
            </div>
            <div class="form-field">
                <label for="message">"Message"</label>
                <textarea id="message" rows="5"></textarea>
            </div>
            <button class="btn btn-primary btn-block">"Send Message"</button>
        </form>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="contact-info reveal">
            <div>
                <h3>"Contact Information"</h3>
                <div class="contact-rows">
                    <div class="contact-row">
                        <i class="fa-solid fa-envelope"></i>
                        <div>
                            <p class="contact-label">"Email"</p>
                            <p>{CONTACT_EMAIL}</p>
                        </div>
                    </div>
                    <div class="contact-row">
                        <i class="fa-solid fa-phone"></i>
                        <div>
                            <p class="contact-label">"Phone"</p>
                            <p>{CONTACT_PHONES}</p>
                        </div>
                    </div>
                    <div class="contact-row">
                        <i class="fa-solid fa-location-dot"></i>
                        <div>
                            <p class="contact-label">"Studio Address"</p>
                            <p>{STUDIO_ADDRESS}</p>
                        </div>
                    </div>
                </div>
            </div>
            <div>
                <h3>"Studio Hours"</h3>
                <div class="hours-rows">
                    {STUDIO_HOURS
                        .iter()
                        .map(|&(days, hours)| {
                            view! {
                                <div class="hours-row">
                                    <span>{days}</span>
                                    <span>{hours}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div>
                <h3>"Follow Us"</h3>
                <div class="social-row social-circles">
                    <a href=INSTAGRAM_URL target="_blank" aria-label="Instagram">
                        <i class="fa-brands fa-instagram"></i>
                    </a>
                    <a href=FACEBOOK_URL target="_blank" aria-label="Facebook">
                        <i class="fa-brands fa-facebook"></i>
                    </a>
                    <a href=TWITTER_URL target="_blank" aria-label="Twitter">
                        <i class="fa-brands fa-twitter"></i>
                    </a>
                </div>
            </div>
        </div>
    }
}
