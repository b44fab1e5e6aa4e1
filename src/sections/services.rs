use leptos::prelude::*;

struct Service {
    title: &'static str,
    blurb: &'static str,
    points: [&'static str; 4],
    cta: &'static str,
}

static SERVICES: [Service; 3] = [
    Service {
        title: "Custom Designs",
        blurb: "Work directly with Presh to create a unique piece tailored to your style, \
                body type, and occasion.",
        points: [
            "Personal consultation",
            "Custom measurements",
            "Fabric selection",
            "Multiple fittings",
        ],
        cta: "Learn More",
    },
    Service {
        title: "Ready-to-Wear",
        blurb: "Shop our seasonal collections featuring versatile pieces that celebrate \
                African fashion.",
        points: [
            "Seasonal collections",
            "Limited editions",
            "Size-inclusive options",
            "Worldwide shipping",
        ],
        cta: "Shop Now",
    },
    Service {
        title: "Styling Services",
        blurb: "Get professional styling advice to create a wardrobe that reflects your \
                personal style.",
        points: [
            "Personal styling",
            "Wardrobe consultation",
            "Event styling",
            "Fashion workshops",
        ],
        cta: "Book Session",
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">"Our Services"</h2>
                    <p class="section-description">
                        "From custom designs to ready-to-wear collections, we offer a range of \
                         services to meet your fashion needs."
                    </p>
                </div>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|service| view! { <ServiceCard service=service /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service) -> impl IntoView {
    view! {
        <article class="service-card reveal">
            <h3>{service.title}</h3>
            <p>{service.blurb}</p>
            <ul>
                {service
                    .points
                    .iter()
                    .map(|&point| view! { <li>{point}</li> })
                    .collect_view()}
            </ul>
            <button class="btn btn-outline">{service.cta}</button>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_services_with_complete_copy() {
        assert_eq!(SERVICES.len(), 3);
        for service in &SERVICES {
            assert!(!service.title.is_empty());
            assert!(!service.blurb.is_empty());
            assert!(!service.cta.is_empty());
            assert!(service.points.iter().all(|p| !p.is_empty()));
        }
    }
}
