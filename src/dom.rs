use crate::constants::REDUCED_MOTION_QUERY;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn html_element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

pub fn html_elements_by_class(root: &web::Element, class: &str) -> Vec<web::HtmlElement> {
    let list = root.get_elements_by_class_name(class);
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach click listener", element_id);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Read once at mount; later preference changes take effect on reload.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Document-relative top offset and height of an element, given the
/// scroll sample the rect was read against.
pub fn document_box(el: &web::Element, scroll_y: f64) -> (f64, f64) {
    let rect = el.get_bounding_client_rect();
    (rect.top() + scroll_y, rect.height())
}

/// True when any part of the element intersects the viewport.
pub fn is_in_viewport(el: &web::Element) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let vh = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let rect = el.get_bounding_client_rect();
    rect.bottom() > 0.0 && rect.top() < vh
}
