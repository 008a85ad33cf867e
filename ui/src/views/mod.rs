//! Placeholder page views. Page content is owned by the site team; these
//! exist so every navigation destination resolves to a route.

mod about;
mod blog;
mod career;
mod contact;
mod features;
mod home;
mod industries;
mod services;

pub use about::About;
pub use blog::Blog;
pub use career::Career;
pub use contact::Contact;
pub use features::Features;
pub use home::Home;
pub use industries::Industries;
pub use services::{ServiceDetail, Services};
