#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::events::{CarouselWiring, ContactSection};
use crate::frame::{CarouselMotion, FrameContext, HeroMotion, StatsMotion};
use crate::render::{CarouselElements, HeroElements, StatCounter};
use crate::submit::LoggingSubmit;
use instant::Instant;
use landing_core::{default_floating_icons, scroll_indicator_bob, Carousel, HeroAnimator};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod feedback;
mod frame;
mod render;
mod submit;

/// Everything that must be released when the page goes away.
struct MountedPage {
    running: Rc<Cell<bool>>,
    contact: Option<ContactSection<LoggingSubmit>>,
}

impl MountedPage {
    fn teardown(self) {
        self.running.set(false);
        if let Some(contact) = &self.contact {
            contact.teardown();
        }
        log::info!("landing torn down");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("taptik-landing starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn mount_hero(document: &web::Document, reduced_motion: bool) -> anyhow::Result<HeroMotion> {
    let elements = HeroElements::find(document)?;
    let icons = default_floating_icons();
    if elements.icon_count() != icons.len() {
        log::warn!(
            "[hero] markup has {} floating icons, choreography defines {}",
            elements.icon_count(),
            icons.len()
        );
    }
    Ok(HeroMotion {
        elements,
        animator: HeroAnimator::with_defaults(reduced_motion),
        icons,
        bob: scroll_indicator_bob(),
        last_progress: None,
    })
}

fn mount_stats(document: &web::Document, reduced_motion: bool) -> anyhow::Result<StatsMotion> {
    let section = dom::html_element_by_id(document, STATS_ID)?;
    let counters: Vec<StatCounter> = dom::html_elements_by_class(&section, STAT_VALUE_CLASS)
        .into_iter()
        .filter_map(StatCounter::from_element)
        .collect();
    log::info!("[stats] mounted {} counters", counters.len());
    Ok(StatsMotion {
        section,
        counters,
        reduced_motion,
    })
}

fn mount_testimonials(
    document: &web::Document,
    reduced_motion: bool,
) -> anyhow::Result<CarouselMotion> {
    let section = dom::html_element_by_id(document, TESTIMONIALS_ID)?;
    let elements = Rc::new(CarouselElements {
        slides: dom::html_elements_by_class(&section, SLIDE_CLASS),
        dots: dom::html_elements_by_class(&section, SLIDE_DOT_CLASS),
        status: dom::html_element_by_id(document, AUTOPLAY_STATUS_ID).ok(),
        section,
    });
    let len = elements.slides.len();
    let carousel = Rc::new(RefCell::new(if reduced_motion {
        Carousel::without_autoplay(len)
    } else {
        Carousel::new(len)
    }));
    render::apply_carousel(&elements, &carousel.borrow());
    events::wire_carousel_controls(
        document,
        &CarouselWiring {
            carousel: carousel.clone(),
            elements: elements.clone(),
        },
    );
    log::info!("[testimonials] mounted {} slides", len);
    Ok(CarouselMotion { carousel, elements })
}

/// Log and skip sections whose markup is missing.
fn optional<T>(label: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[{}] not mounted: {:?}", label, e);
            None
        }
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reduced_motion = dom::prefers_reduced_motion();
    log::info!("reduced motion: {}", reduced_motion);

    let hero = optional("hero", mount_hero(&document, reduced_motion));
    let stats = optional("stats", mount_stats(&document, reduced_motion));
    let testimonials = optional("testimonials", mount_testimonials(&document, reduced_motion));
    let contact = optional("contact", events::mount_contact(&document, LoggingSubmit));

    let running = Rc::new(Cell::new(true));
    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        hero,
        stats,
        testimonials,
        mounted_at: now,
        last_instant: now,
        running: running.clone(),
    }));
    frame::start_loop(frame_ctx);

    let page = Rc::new(RefCell::new(Some(MountedPage { running, contact })));
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        // a page entering the back/forward cache comes back live; keep it mounted
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        if persisted {
            log::info!("landing kept alive for back/forward cache");
            return;
        }
        if let Some(mounted) = page.borrow_mut().take() {
            mounted.teardown();
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();

    Ok(())
}
