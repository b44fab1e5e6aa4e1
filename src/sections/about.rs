use leptos::prelude::*;

use super::{FACEBOOK_URL, INSTAGRAM_URL, TWITTER_URL};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <div class="about-grid">
                    <div class="about-copy reveal">
                        <h2 class="section-title">"About Presh"</h2>
                        <p>
                            "With over a decade of experience in fashion design, Presh has \
                             established herself as a leading voice in contemporary African \
                             fashion. Her designs blend traditional Nigerian textiles and \
                             techniques with modern silhouettes."
                        </p>
                        <p>
                            "Preshy's mission is to celebrate the rich cultural heritage of \
                             African fashion while creating pieces that empower women to feel \
                             confident and beautiful in their everyday lives."
                        </p>
                        <div class="social-row">
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
                    <div class="about-portrait reveal">
                        <img src="assets/presh-portrait.jpg" alt="Presh, fashion designer" loading="lazy" />
                    </div>
                </div>
            </div>
        </section>
    }
}
