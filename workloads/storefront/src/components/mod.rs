//! Page sections.

mod cart_drawer;
mod content;
mod layout;
mod shop;

pub use cart_drawer::CartDrawer;
pub use content::{Blog, Portfolio, Testimonials};
pub use layout::{About, Contact, Footer, Hero, Navbar, Services};
pub use shop::Shop;
