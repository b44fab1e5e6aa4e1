use leptos::prelude::*;

/// Image paths for the six featured collections, in display order.
const COLLECTION_IMAGES: [&str; 6] = [
    "assets/col1.jpg",
    "assets/col2.jpg",
    "assets/col3.jpg",
    "assets/col4.jpg",
    "assets/col5.jpg",
    "assets/col6.jpg",
];

#[component]
pub fn Collections() -> impl IntoView {
    view! {
        <section id="collections" class="collections">
            <div class="container">
                <div class="section-header reveal">
                    <h2 class="section-title">"Featured Collections"</h2>
                    <p class="section-description">
                        "Explore our latest designs that blend traditional African aesthetics \
                         with contemporary fashion trends."
                    </p>
                </div>
                <div class="collections-grid">
                    {COLLECTION_IMAGES
                        .iter()
                        .enumerate()
                        .map(|(index, &image)| {
                            view! { <CollectionCard number={index + 1} image=image /> }
                        })
                        .collect_view()}
                </div>
                <div class="section-footer reveal">
                    <button class="btn btn-primary">"View Full Lookbook"</button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CollectionCard(number: usize, image: &'static str) -> impl IntoView {
    view! {
        <article class="collection-card reveal">
            <img src=image alt=format!("Fashion collection {number}") loading="lazy" />
            <div class="collection-overlay">
                <h3>{format!("Collection {number}")}</h3>
                <p>"Traditional meets contemporary"</p>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_distinct_collection_images() {
        assert_eq!(COLLECTION_IMAGES.len(), 6);
        for (i, a) in COLLECTION_IMAGES.iter().enumerate() {
            for b in &COLLECTION_IMAGES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
