// Landing page sections
// Developed by the AquaFlow Pro web team (c)2025

mod background;
mod contact;
mod footer;
mod heading;
mod hero;
mod icon;
mod nav;
mod reveal;
mod services;
mod testimonials;

pub use background::Background;
pub use contact::Contact;
pub use footer::Footer;
pub use heading::SectionHeader;
pub use hero::Hero;
pub use icon::Icon;
pub use nav::Nav;
pub use reveal::Reveal;
pub use services::Services;
pub use testimonials::Testimonials;
