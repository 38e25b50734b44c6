use crate::constants::*;
use crate::dom;
use landing_core::{
    format_thousands, Carousel, ChannelId, CountUp, FloatingIcon, HeroAnimator, HeroFrame,
    LoopingTween, Unit,
};
use web_sys as web;

// ===================== Hero =====================

pub struct HeroElements {
    pub section: web::HtmlElement,
    overlay: Option<web::HtmlElement>,
    icons_layer: Option<web::HtmlElement>,
    icons: Vec<web::HtmlElement>,
    content: web::HtmlElement,
    title: web::HtmlElement,
    subtitle: Option<web::HtmlElement>,
    buttons: Option<web::HtmlElement>,
    indicator: Option<web::HtmlElement>,
    indicator_bob: Option<web::HtmlElement>,
}

impl HeroElements {
    pub fn find(document: &web::Document) -> anyhow::Result<Self> {
        let optional = |id: &str| dom::html_element_by_id(document, id).ok();
        let icons_layer = optional(HERO_ICONS_ID);
        let icons = icons_layer
            .as_ref()
            .map(|layer| dom::html_elements_by_class(layer, FLOATING_ICON_CLASS))
            .unwrap_or_default();
        Ok(Self {
            section: dom::html_element_by_id(document, HERO_ID)?,
            overlay: optional(HERO_OVERLAY_ID),
            icons_layer,
            icons,
            content: dom::html_element_by_id(document, HERO_CONTENT_ID)?,
            title: dom::html_element_by_id(document, HERO_TITLE_ID)?,
            subtitle: optional(HERO_SUBTITLE_ID),
            buttons: optional(HERO_BUTTONS_ID),
            indicator: optional(SCROLL_INDICATOR_ID),
            indicator_bob: optional(SCROLL_INDICATOR_BOB_ID),
        })
    }

    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }
}

fn css_value(animator: &HeroAnimator, frame: &HeroFrame, id: ChannelId) -> String {
    let unit = animator.spec(id).map(|s| s.unit).unwrap_or(Unit::Scalar);
    format!("{:.4}{}", frame[id], unit.suffix())
}

fn apply_lift(el: &web::HtmlElement, y: &str, opacity: f32) {
    dom::set_style(el, "transform", &format!("translate3d(0, {}, 0)", y));
    dom::set_style(el, "opacity", &format!("{:.4}", opacity));
}

/// Write one sampled frame into the hero's inline styles.
pub fn apply_hero_frame(els: &HeroElements, animator: &HeroAnimator, frame: &HeroFrame) {
    let v = |id| css_value(animator, frame, id);

    if let Some(layer) = &els.icons_layer {
        dom::set_style(
            layer,
            "transform",
            &format!("translate3d(0, {}, 0)", v(ChannelId::IconsY)),
        );
    }
    dom::set_style(
        &els.content,
        "transform",
        &format!(
            "perspective(1000px) scale({}) rotateX({})",
            v(ChannelId::ContentScale),
            v(ChannelId::ContentRotateX)
        ),
    );
    dom::set_style(
        &els.content,
        "filter",
        &format!("blur({})", v(ChannelId::ContentBlur)),
    );

    apply_lift(&els.title, &v(ChannelId::TitleY), frame[ChannelId::TitleOpacity]);
    if let Some(el) = &els.subtitle {
        apply_lift(el, &v(ChannelId::SubtitleY), frame[ChannelId::SubtitleOpacity]);
    }
    if let Some(el) = &els.buttons {
        apply_lift(el, &v(ChannelId::ButtonsY), frame[ChannelId::ButtonsOpacity]);
    }
    if let Some(el) = &els.overlay {
        dom::set_style(el, "opacity", &v(ChannelId::OverlayOpacity));
    }
    if let Some(el) = &els.indicator {
        dom::set_style(el, "opacity", &v(ChannelId::IndicatorOpacity));
    }
}

/// Looping decorations: floating icon drift and the scroll indicator bob.
pub fn apply_hero_loops(
    els: &HeroElements,
    icons: &[FloatingIcon],
    bob: &LoopingTween,
    t_sec: f32,
    reduced_motion: bool,
) {
    for (el, icon) in els.icons.iter().zip(icons) {
        let pose = icon.pose_at(t_sec, reduced_motion);
        dom::set_style(
            el,
            "transform",
            &format!("translate3d({:.2}px, {:.2}px, 0)", pose.offset.x, pose.offset.y),
        );
        dom::set_style(el, "opacity", &format!("{:.3}", pose.opacity));
    }
    if let Some(el) = &els.indicator_bob {
        let y = if reduced_motion { 0.0 } else { bob.value_at(t_sec) };
        dom::set_style(el, "transform", &format!("translate3d(0, {:.2}px, 0)", y));
    }
}

// ===================== Stats =====================

pub struct StatCounter {
    pub el: web::HtmlElement,
    pub suffix: String,
    pub count: CountUp,
    last_shown: Option<u64>,
}

impl StatCounter {
    pub fn from_element(el: web::HtmlElement) -> Option<Self> {
        let target = el
            .get_attribute("data-target")
            .and_then(|t| t.trim().parse::<u64>().ok());
        let Some(target) = target else {
            log::warn!("[stats] counter without a numeric data-target skipped");
            return None;
        };
        let suffix = el.get_attribute("data-suffix").unwrap_or_default();
        Some(Self {
            el,
            suffix,
            count: CountUp::new(target),
            last_shown: None,
        })
    }

    pub fn render(&mut self) {
        let value = self.count.value();
        if self.last_shown == Some(value) {
            return;
        }
        self.last_shown = Some(value);
        self.el
            .set_text_content(Some(&format!("{}{}", format_thousands(value), self.suffix)));
    }
}

// ===================== Testimonials =====================

pub struct CarouselElements {
    pub section: web::HtmlElement,
    pub slides: Vec<web::HtmlElement>,
    pub dots: Vec<web::HtmlElement>,
    pub status: Option<web::HtmlElement>,
}

pub fn apply_carousel(els: &CarouselElements, carousel: &Carousel) {
    for (i, slide) in els.slides.iter().enumerate() {
        let active = i == carousel.current();
        dom::set_class(slide, ACTIVE_CLASS, active);
        dom::set_class(slide, HIDDEN_CLASS, !active);
    }
    for (i, dot) in els.dots.iter().enumerate() {
        dom::set_class(dot, ACTIVE_CLASS, i == carousel.current());
    }
    if let Some(status) = &els.status {
        let mode = if carousel.is_auto_playing() {
            "Autoplay"
        } else {
            "Manual browsing"
        };
        status.set_text_content(Some(&format!("{} • {} reviews", mode, carousel.len())));
    }
}
