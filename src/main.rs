// Preshy's Place landing page — Leptos 0.8, client-side rendered

use leptos::prelude::*;
use preshys_place::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}
