//! Hero section with a pointer-following tilt

use leptos::html;
use leptos::prelude::*;

use crate::core::tilt::{Tilt, TiltConfig};

/// Full-height hero section; the banner tilts toward the pointer on desktop browsers
#[component]
pub fn HeroBanner(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    let tilt_config = TiltConfig::default();
    let (banner_transform, set_banner_transform) =
        signal(Tilt::NEUTRAL.banner_transform(&tilt_config));
    let (title_transform, set_title_transform) =
        signal(Tilt::NEUTRAL.title_transform(&tilt_config));
    let (tilt_enabled, set_tilt_enabled) = signal(false);
    let section_ref = NodeRef::<html::Section>::new();

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use crate::core::device::is_mobile_user_agent;

        let user_agent = leptos::web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();
        set_tilt_enabled.set(!is_mobile_user_agent(&user_agent));
    });

    #[cfg(feature = "ssr")]
    let _ = set_tilt_enabled;

    let on_move = move |ev: leptos::web_sys::MouseEvent| {
        if !tilt_enabled.get_untracked() {
            return;
        }
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::tilt::Rect;

            let Some(section) = section_ref.get_untracked() else {
                return;
            };
            let bounds = section.get_bounding_client_rect();
            let rect = Rect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            };
            if let Some(tilt) = Tilt::from_pointer(&rect, ev.client_x() as f64, ev.client_y() as f64)
            {
                set_banner_transform.set(tilt.banner_transform(&tilt_config));
                set_title_transform.set(tilt.title_transform(&tilt_config));
            }
        }
        #[cfg(feature = "ssr")]
        let _ = ev;
    };

    let on_leave = move |_| {
        if !tilt_enabled.get_untracked() {
            return;
        }
        set_banner_transform.set(Tilt::NEUTRAL.banner_transform(&tilt_config));
        set_title_transform.set(Tilt::NEUTRAL.title_transform(&tilt_config));
    };

    view! {
        <section
            class="hero-section"
            node_ref=section_ref
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            <div id="hero-banner" class="hero-banner" style:transform=move || banner_transform.get()>
                <h1 class="hero-title" style:transform=move || title_transform.get()>
                    {title}
                </h1>
                <p class="hero-subtitle">{subtitle}</p>
                {children()}
            </div>
        </section>
    }
}
