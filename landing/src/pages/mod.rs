// Landing page views
// Developed with 💙 by The LingUp Team (c)2025

mod home;
mod order;
mod success;

pub use home::HomePage;
pub use order::OrderPage;
pub use success::SuccessPage;
