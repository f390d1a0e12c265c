//! Not found page

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// 404 page for unknown routes
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found | Epic Adventures by Jen" />
        <section class="not-found">
            <div class="container">
                <h1>"404"</h1>
                <h2>"Page Not Found"</h2>
                <p>"Looks like this trip isn't on the itinerary."</p>
                <A href="/" attr:class="btn btn-primary">"Back to Home"</A>
            </div>
        </section>
    }
}
