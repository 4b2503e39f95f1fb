// Landing page sections
// Developed with 💙 by The LingUp Team (c)2025

mod contact;
mod courses;
mod footer;
mod hero;
mod nav;
mod results;
mod reviews;
mod stats;

pub use contact::Contact;
pub use courses::Courses;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use results::StudentResults;
pub use reviews::Reviews;
pub use stats::Stats;
