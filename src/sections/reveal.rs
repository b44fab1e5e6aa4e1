use leptos::prelude::*;

/// Adds `visible` to `.reveal` elements as they enter the viewport, driving
/// the fade-up animations in the stylesheet. The observer lives outside the
/// reactive graph: reveal state is write-once per element and never read
/// back by any component.
#[component]
pub fn ScrollRevealScript() -> impl IntoView {
    view! {
        <script>
            {r#"
            (function () {
                function initReveals() {
                    var targets = document.querySelectorAll('.reveal');
                    if (!('IntersectionObserver' in window)) {
                        targets.forEach(function (el) { el.classList.add('visible'); });
                        return;
                    }
                    var observer = new IntersectionObserver(function (entries) {
                        entries.forEach(function (entry) {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, { threshold: 0.1, rootMargin: '0px 0px -40px 0px' });
                    targets.forEach(function (el) { observer.observe(el); });
                }
                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initReveals);
                } else {
                    initReveals();
                }
            })();
            "#}
        </script>
    }
}
