use leptos::prelude::*;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    avatar: &'static str,
    quote: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Amara Johnson",
        role: "Wedding Client",
        avatar: "assets/tes1.jpg",
        quote: "Presh created the most beautiful wedding dress that perfectly blended my \
                Nigerian heritage with modern elegance. I felt absolutely stunning on my \
                special day!",
    },
    Testimonial {
        name: "Adedokun Funke",
        role: "Regular Client",
        avatar: "assets/tes2.png",
        quote: "I've been wearing Presh's designs for years. Her attention to detail and \
                understanding of what flatters different body types is unmatched. Her pieces \
                always make me feel confident.",
    },
    Testimonial {
        name: "Lolade Bakare",
        role: "Styling Client",
        avatar: "assets/tes3.jpg",
        quote: "The styling session with Presh transformed my wardrobe. She helped me \
                incorporate beautiful African pieces into my everyday style in ways I never \
                would have thought of.",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">"Client Testimonials"</h2>
                    <p class="section-description">
                        "Hear what our clients have to say about their experience with \
                         Preshy's Place."
                    </p>
                </div>
                <div class="testimonials-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <article class="testimonial-card reveal">
            <div class="testimonial-client">
                <img src=testimonial.avatar alt=testimonial.name loading="lazy" />
                <div>
                    <h3>{testimonial.name}</h3>
                    <p class="testimonial-role">{testimonial.role}</p>
                </div>
            </div>
            <blockquote>{format!("\u{201c}{}\u{201d}", testimonial.quote)}</blockquote>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_testimonials_with_complete_copy() {
        assert_eq!(TESTIMONIALS.len(), 3);
        for testimonial in &TESTIMONIALS {
            assert!(!testimonial.name.is_empty());
            assert!(!testimonial.role.is_empty());
            assert!(!testimonial.avatar.is_empty());
            assert!(!testimonial.quote.is_empty());
        }
    }
}
