use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::CarouselConfig;
use crate::core::config::EMBEDDED_CONFIG_ID;
use crate::ui::{LandingPage, NotFoundPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // The hydrate entry point reads this back so client and server share one config
    let config = use_context::<CarouselConfig>().unwrap_or_default();
    let config_json = config.to_json().unwrap_or_else(|_| "{}".to_string());

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="application/json" id=EMBEDDED_CONFIG_ID inner_html=config_json></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Read the carousel config the server embedded in the page head
#[cfg(feature = "hydrate")]
pub fn embedded_config() -> CarouselConfig {
    let json = leptos::web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(EMBEDDED_CONFIG_ID))
        .and_then(|el| el.text_content());

    match json.as_deref().map(CarouselConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            leptos::logging::warn!("ignoring embedded carousel config: {err}");
            CarouselConfig::default()
        }
        None => CarouselConfig::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/neonstage.css"/>

        <Title text="Neon Warriors"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}
