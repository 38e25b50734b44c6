use crate::dom;
use crate::render::{self, CarouselElements, HeroElements, StatCounter};
use instant::Instant;
use landing_core::spring::frame_dt;
use landing_core::{scroll_progress, Carousel, FloatingIcon, HeroAnimator, LoopingTween};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct HeroMotion {
    pub elements: HeroElements,
    pub animator: HeroAnimator,
    pub icons: Vec<FloatingIcon>,
    pub bob: LoopingTween,
    pub last_progress: Option<f32>,
}

pub struct StatsMotion {
    pub section: web::HtmlElement,
    pub counters: Vec<StatCounter>,
    pub reduced_motion: bool,
}

pub struct CarouselMotion {
    pub carousel: Rc<RefCell<Carousel>>,
    pub elements: Rc<CarouselElements>,
}

pub struct FrameContext {
    pub hero: Option<HeroMotion>,
    pub stats: Option<StatsMotion>,
    pub testimonials: Option<CarouselMotion>,

    pub mounted_at: Instant,
    pub last_instant: Instant,
    pub running: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = frame_dt((now - self.last_instant).as_secs_f32());
        self.last_instant = now;
        let t_sec = (now - self.mounted_at).as_secs_f32();
        let dt = Duration::from_secs_f32(dt_sec);

        // One scroll sample per frame; every hero channel derives from it.
        let scroll_y = dom::scroll_y();

        if let Some(hero) = &mut self.hero {
            let (top, height) = dom::document_box(&hero.elements.section, scroll_y);
            let p = scroll_progress(scroll_y, top, height);
            let moved = hero.last_progress != Some(p);
            if moved || !hero.animator.is_settled() {
                let hero_frame = hero.animator.sample(p, dt_sec);
                render::apply_hero_frame(&hero.elements, &hero.animator, &hero_frame);
                hero.last_progress = Some(p);
            }
            render::apply_hero_loops(
                &hero.elements,
                &hero.icons,
                &hero.bob,
                t_sec,
                hero.animator.reduced_motion(),
            );
        }

        if let Some(stats) = &mut self.stats {
            let visible = dom::is_in_viewport(&stats.section);
            for c in &mut stats.counters {
                if visible && c.count.start() {
                    if stats.reduced_motion {
                        c.count.finish();
                    }
                    log::debug!("[stats] counting to {}", c.count.target);
                }
                c.count.tick(dt);
                c.render();
            }
        }

        if let Some(t) = &self.testimonials {
            let changed = {
                let mut carousel = t.carousel.borrow_mut();
                let was_playing = carousel.is_auto_playing();
                carousel.set_in_view(dom::is_in_viewport(&t.elements.section));
                carousel.tick(dt) || was_playing != carousel.is_auto_playing()
            };
            if changed {
                render::apply_carousel(&t.elements, &t.carousel.borrow());
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let running = frame_ctx.borrow().running.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::info!("[frame] loop stopped");
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
