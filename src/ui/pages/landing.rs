//! Landing page component
//!
//! Themed single-screen landing page:
//! - SEO meta tags
//! - Hero section with pointer tilt
//! - Rotating 3D roster carousel
//! - Call-to-action and footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::carousel::{CardContent, Carousel};
use crate::ui::hero::HeroBanner;

/// Cards shown on the roster ring
pub const ROSTER: [CardContent; 8] = [
    CardContent::new("Nova", "Lead vocals", "#FF00CC"),
    CardContent::new("Hex", "Main dancer", "#00FFCC"),
    CardContent::new("Vanta", "Rap line", "#a0a0ff"),
    CardContent::new("Ion", "Sub vocals", "#ffa0ff"),
    CardContent::new("Kairo", "Producer", "#00f0ff"),
    CardContent::new("Lumen", "Visual", "#FF00CC"),
    CardContent::new("Rift", "Choreography", "#00FFCC"),
    CardContent::new("Echo", "Maknae", "#a0a0ff"),
];

/// Landing page
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="landing">
            <HeroBanner
                title="NEON WARRIORS"
                subtitle="Eight voices. One signal. Drag the ring to meet the roster."
            >
                <a class="cta-button" href="#roster">"Meet the roster"</a>
            </HeroBanner>

            <section id="roster" class="roster-section">
                <h2 class="section-title">"The roster"</h2>
                <Carousel cards=ROSTER.to_vec() />
            </section>

            <section class="cta-section">
                <a class="cta-button" href="#roster">"Join the fandom"</a>
            </section>

            <footer class="landing-footer">
                <p>"© 2026 Neon Warriors"</p>
            </footer>
        </div>
    }
}

/// Page title and meta tags
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Neon Warriors" />
        <Meta name="description" content="Meet the Neon Warriors roster on an interactive 3D carousel." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Neon Warriors" />
    }
}
