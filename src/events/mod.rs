pub mod carousel;
pub mod form;

pub use carousel::{wire_carousel_controls, CarouselWiring};
pub use form::{mount_contact, ContactSection};
