//! Not found page component

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-text">"This stage is dark. Nothing is playing here."</p>
            <A href="/" attr:class="cta-button">
                "Back to the show"
            </A>
        </div>
    }
}
