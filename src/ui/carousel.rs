//! Carousel component
//!
//! Renders the ring of cards on the server. After hydration the browser
//! bindings build a `CarouselController` over the live DOM, wire pointer, touch,
//! hover and resize events into it and drive it from `requestAnimationFrame`.

use leptos::html;
use leptos::prelude::*;

use crate::core::CarouselConfig;

/// Element id of the rotating container
pub const CAROUSEL_ID: &str = "cardsCarousel";

/// Selector matching every card on the ring
pub const CARD_SELECTOR: &str = "#cardsCarousel .card";

/// Content of one carousel card
#[derive(Clone, Debug, PartialEq)]
pub struct CardContent {
    pub title: &'static str,
    pub tagline: &'static str,
    /// CSS color used for the card glow
    pub accent: &'static str,
}

impl CardContent {
    pub const fn new(title: &'static str, tagline: &'static str, accent: &'static str) -> Self {
        Self {
            title,
            tagline,
            accent,
        }
    }
}

/// Rotating 3D card ring
#[component]
pub fn Carousel(
    /// Cards placed evenly around the ring
    cards: Vec<CardContent>,
) -> impl IntoView {
    let config = use_context::<CarouselConfig>().unwrap_or_default();
    let container_ref = NodeRef::<html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        let mounted = StoredValue::new_local(None::<browser::CarouselMount>);

        Effect::new(move |_| {
            let Some(container) = container_ref.get() else {
                return;
            };
            if mounted.with_value(Option::is_some) {
                return;
            }
            match browser::mount(container.into(), config) {
                Ok(handle) => mounted.set_value(Some(handle)),
                Err(err) => leptos::logging::warn!("carousel disabled: {err}"),
            }
        });

        on_cleanup(move || {
            let _ = mounted.try_with_value(|handle| {
                if let Some(handle) = handle {
                    handle.stop();
                }
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = config;
    }

    view! {
        <div class="carousel-container" node_ref=container_ref>
            <div class="carousel" id=CAROUSEL_ID>
                {cards
                    .into_iter()
                    .map(|card| {
                        view! {
                            <div class="card" style=format!("--card-accent: {}", card.accent)>
                                <h3 class="card-title">{card.title}</h3>
                                <p class="card-tagline">{card.tagline}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use leptos::web_sys;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{CARD_SELECTOR, CAROUSEL_ID};
    use crate::core::scheduler::{
        DebounceTimer, Debouncer, FrameLoop, FrameScheduler, schedule_relayout,
    };
    use crate::core::{
        CarouselConfig, CarouselController, CarouselError, CarouselInput, CarouselSurface,
    };

    type SharedController = Rc<RefCell<CarouselController<DomSurface>>>;

    /// Carousel surface backed by the live document
    pub struct DomSurface {
        document: web_sys::Document,
        /// Card elements as of the last layout
        cards: Vec<web_sys::HtmlElement>,
    }

    impl DomSurface {
        pub fn new(document: web_sys::Document) -> Self {
            Self {
                document,
                cards: Vec::new(),
            }
        }

        fn container(&self) -> Option<web_sys::HtmlElement> {
            self.document
                .get_element_by_id(CAROUSEL_ID)?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()
        }

        fn query_cards(&self) -> Vec<web_sys::HtmlElement> {
            let Ok(list) = self.document.query_selector_all(CARD_SELECTOR) else {
                return Vec::new();
            };
            (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
                .collect()
        }
    }

    impl CarouselSurface for DomSurface {
        fn refresh_cards(&mut self) {
            self.cards = self.query_cards();
        }

        fn card_count(&self) -> usize {
            self.cards.len()
        }

        fn card_width(&self) -> f64 {
            self.cards
                .first()
                .map(|card| card.offset_width() as f64)
                .unwrap_or(0.0)
        }

        fn set_card_transform(&mut self, index: usize, transform: &str) {
            if let Some(card) = self.cards.get(index) {
                let _ = card.style().set_property("transform", transform);
            }
        }

        fn set_container_transform(&mut self, transform: &str) -> Result<(), CarouselError> {
            let container = self.container().ok_or(CarouselError::ContainerMissing)?;
            let _ = container.style().set_property("transform", transform);
            Ok(())
        }
    }

    /// `requestAnimationFrame` as a frame scheduler
    #[derive(Clone, Copy, Default)]
    pub struct AnimationFrameScheduler;

    impl FrameScheduler for AnimationFrameScheduler {
        fn request_frame(&self, callback: Box<dyn FnOnce()>) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::once_into_js(move || callback());
            let _ = window.request_animation_frame(closure.unchecked_ref());
        }
    }

    /// `setTimeout` via gloo; dropping the `Timeout` clears it
    #[derive(Clone, Copy, Default)]
    pub struct GlooTimer;

    impl DebounceTimer for GlooTimer {
        type Handle = Timeout;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
            Timeout::new(delay_ms, move || callback())
        }
    }

    /// Running carousel: its frame loop and pending resize relayout
    pub struct CarouselMount {
        frame_loop: FrameLoop,
        debouncer: Rc<Debouncer<GlooTimer>>,
    }

    impl CarouselMount {
        /// Stop rendering and drop any pending relayout
        pub fn stop(&self) {
            self.frame_loop.stop();
            self.debouncer.cancel();
        }
    }

    /// Build the controller over `container`, attach listeners and start the frame loop
    pub fn mount(
        container: web_sys::HtmlElement,
        config: CarouselConfig,
    ) -> Result<CarouselMount, CarouselError> {
        let window = web_sys::window().ok_or(CarouselError::ContainerMissing)?;
        let document = window.document().ok_or(CarouselError::ContainerMissing)?;

        let mut controller = CarouselController::new(config, DomSurface::new(document));
        if let Err(err) = controller.layout() {
            leptos::logging::warn!("carousel layout skipped: {err}");
        }
        let controller: SharedController = Rc::new(RefCell::new(controller));

        let container_target: &web_sys::EventTarget = container.as_ref();
        let window_target: &web_sys::EventTarget = window.as_ref();

        on_mouse(container_target, "mousedown", &controller, |e| {
            Some(CarouselInput::PointerDown(e.client_x() as f64))
        });
        on_mouse(container_target, "mouseenter", &controller, |_| {
            Some(CarouselInput::HoverEnter)
        });
        on_mouse(container_target, "mouseleave", &controller, |_| {
            Some(CarouselInput::HoverLeave)
        });
        on_mouse(window_target, "mousemove", &controller, |e| {
            Some(CarouselInput::PointerMove(e.client_x() as f64))
        });
        on_mouse(window_target, "mouseup", &controller, |_| {
            Some(CarouselInput::PointerUp)
        });

        on_touch(container_target, "touchstart", &controller, |e| {
            first_touch_x(e).map(CarouselInput::PointerDown)
        });
        on_touch(container_target, "touchmove", &controller, |e| {
            first_touch_x(e).map(CarouselInput::PointerMove)
        });
        on_touch(container_target, "touchend", &controller, |_| {
            Some(CarouselInput::PointerUp)
        });

        leptos::logging::log!(
            "carousel mounted: radius={}px",
            controller.borrow().state().radius
        );
        let frame_loop = FrameLoop::start(controller.clone(), AnimationFrameScheduler);

        let debouncer = Rc::new(Debouncer::new(GlooTimer, config.resize_debounce_ms));
        let resize_debouncer = debouncer.clone();
        let resize_loop = frame_loop.clone();
        let resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
            schedule_relayout(&resize_debouncer, &controller, &resize_loop);
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = window_target
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        // Inert once the mount is stopped
        resize.forget();

        Ok(CarouselMount {
            frame_loop,
            debouncer,
        })
    }

    fn first_touch_x(event: &web_sys::TouchEvent) -> Option<f64> {
        event.touches().get(0).map(|touch| touch.client_x() as f64)
    }

    fn on_mouse(
        target: &web_sys::EventTarget,
        name: &str,
        controller: &SharedController,
        to_input: fn(&web_sys::MouseEvent) -> Option<CarouselInput>,
    ) {
        let controller = controller.clone();
        let handler = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            if let Some(input) = to_input(&e) {
                controller.borrow_mut().handle(input);
            }
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        let _ = target.add_event_listener_with_callback(name, handler.as_ref().unchecked_ref());
        // Listeners live as long as the page
        handler.forget();
    }

    fn on_touch(
        target: &web_sys::EventTarget,
        name: &str,
        controller: &SharedController,
        to_input: fn(&web_sys::TouchEvent) -> Option<CarouselInput>,
    ) {
        let controller = controller.clone();
        let handler = Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
            if let Some(input) = to_input(&e) {
                controller.borrow_mut().handle(input);
            }
        }) as Box<dyn FnMut(web_sys::TouchEvent)>);
        let _ = target.add_event_listener_with_callback(name, handler.as_ref().unchecked_ref());
        handler.forget();
    }
}
