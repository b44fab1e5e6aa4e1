// Page sections, one component per region

mod about;
mod collections;
mod contact;
mod footer;
mod hero;
mod nav;
mod reveal;
mod services;
mod testimonials;

pub use about::About;
pub use collections::Collections;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use reveal::ScrollRevealScript;
pub use services::Services;
pub use testimonials::Testimonials;

/// Brand copy shared across sections (single source of truth)
pub const BRAND: &str = "Preshy's Place";
pub const TAGLINE: &str = "Exquisite African fashion that celebrates heritage and modern style";
pub const LOGO_PATH: &str = "assets/presh-logo.png";

pub const CONTACT_EMAIL: &str = "preshplace1759@gmail.com";
pub const CONTACT_PHONES: &str = "0907 484 6488, 0703 293 0271";
pub const STUDIO_ADDRESS: &str = "Habibu Street, Oluseyi Eleyele, Ibadan, Nigeria";

pub const INSTAGRAM_URL: &str = "https://instagram.com";
pub const FACEBOOK_URL: &str = "https://facebook.com";
pub const TWITTER_URL: &str = "https://twitter.com";
