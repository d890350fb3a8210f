// Landing page sections

mod footer;
pub mod hero;
mod nav;

pub use footer::Footer;
pub use hero::HeroSection;
pub use nav::SiteHeader;
