use crate::constants::{CAROUSEL_NEXT_ID, CAROUSEL_PREV_ID};
use crate::dom;
use crate::render::{self, CarouselElements};
use landing_core::Carousel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct CarouselWiring {
    pub carousel: Rc<RefCell<Carousel>>,
    pub elements: Rc<CarouselElements>,
}

pub fn wire_carousel_controls(document: &web::Document, w: &CarouselWiring) {
    let prev = w.clone();
    dom::add_click_listener(document, CAROUSEL_PREV_ID, move || {
        prev.carousel.borrow_mut().previous();
        render::apply_carousel(&prev.elements, &prev.carousel.borrow());
    });

    let next = w.clone();
    dom::add_click_listener(document, CAROUSEL_NEXT_ID, move || {
        next.carousel.borrow_mut().next();
        render::apply_carousel(&next.elements, &next.carousel.borrow());
    });

    for dot in &w.elements.dots {
        let Some(index) = dot
            .get_attribute("data-index")
            .and_then(|i| i.parse::<usize>().ok())
        else {
            continue;
        };
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move || {
            w.carousel.borrow_mut().go_to(index);
            render::apply_carousel(&w.elements, &w.carousel.borrow());
        }) as Box<dyn FnMut()>);
        _ = dot.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
