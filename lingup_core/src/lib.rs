//! # lingup-core
//!
//! Browser-independent logic behind the LingUp landing site.
//!
//! The landing crate is a thin Leptos shell; everything that can be decided
//! without a DOM lives here so it can be tested natively:
//!
//! - **api** - backend payload types, endpoint paths and lenient list decoding
//! - **courses** - aggregation of flat `/api/skill` rows into course cards
//! - **countdown** - the server-synchronized timer and its formatting
//! - **contact** / **order** - form state and validation
//! - **carousel** - looping index math shared by both carousels
//! - **content** - bundled student results and testimonials
//! - **i18n** - static translations for Uzbek, Russian and English
//! - **config** - `lingup.toml` site configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use lingup_core::{api::SkillRow, courses::build_courses, config::SiteConfig, Language};
//!
//! let rows: Vec<SkillRow> = serde_json::from_str(r#"[
//!     {"id": "1", "name": "Speaking", "status": true, "order": 1,
//!      "price_list": {"id": "A", "course": "Start", "price": "990000", "is_active": true, "order": 1}}
//! ]"#).unwrap();
//!
//! let config = SiteConfig::default();
//! let courses = build_courses(&rows, Language::En, &config.pricing, &config.course_stats);
//! assert_eq!(courses[0].title, "Start");
//! assert_eq!(courses[0].price, "990,000sum");
//! ```

pub mod api;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod countdown;
pub mod courses;
pub mod error;
pub mod format;
pub mod i18n;
pub mod locale;
pub mod order;
pub mod view;

pub use error::{ApiError, ConfigError};
pub use locale::Language;
pub use view::View;
