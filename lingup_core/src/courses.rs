//! Course cards built from `/api/skill*` rows.
//!
//! The backend sends one row per (course, feature) pair. Rows are grouped by
//! `price_list.id` into a [`Course`]; a feature name seen more than once in a
//! course is merged (status OR-ed, lowest order kept). Only active price
//! lists contribute. Courses sort by `price_list.order`, features by their own
//! order, both stable so ties keep the order rows arrived in.

use std::collections::HashMap;

use crate::api::{RecordId, SkillRow};
use crate::config::{CourseStats, PricingConfig};
use crate::format::{group_thousands, parse_decimal};
use crate::locale::{Language, non_empty, pick_localized};

/// Sort key for rows and plans without an explicit order.
pub const UNORDERED: i64 = 9999;

const NO_TITLE: &str = "No Title";
const NO_DESCRIPTION: &str = "No description available.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub name: String,
    pub status: bool,
}

/// One card in the courses section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub price: String,
    pub original_price: Option<String>,
    pub features: Vec<Feature>,
    pub duration: String,
    pub students: String,
    pub lessons: String,
    pub description: String,
}

/// Rendered current price plus the optional struck-through anchor price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTag {
    pub current: String,
    pub original: Option<String>,
}

/// Format a backend price and look up the anchor price for `order`.
pub fn format_price(price: &str, order: Option<i64>, pricing: &PricingConfig) -> PriceTag {
    let suffix = &pricing.currency_suffix;
    let current = match parse_decimal(price) {
        Some(amount) => format!("{}{suffix}", group_thousands(amount, 3)),
        None => format!("{price}{suffix}"),
    };
    let original = order
        .and_then(|o| pricing.original_price(o))
        .map(|amount| format!("{}{suffix}", group_thousands(amount as f64, 3)));
    PriceTag { current, original }
}

struct FeatureAgg {
    name: String,
    status: bool,
    order: i64,
}

struct CourseAgg {
    id: RecordId,
    title: String,
    description: String,
    price: PriceTag,
    order: i64,
    features: Vec<FeatureAgg>,
    feature_index: HashMap<String, usize>,
}

impl CourseAgg {
    fn merge_feature(&mut self, name: &str, status: bool, order: Option<i64>) {
        match self.feature_index.get(name) {
            Some(&idx) => {
                let existing = &mut self.features[idx];
                existing.status |= status;
                if let Some(order) = order {
                    existing.order = existing.order.min(order);
                }
            }
            None => {
                self.feature_index
                    .insert(name.to_owned(), self.features.len());
                self.features.push(FeatureAgg {
                    name: name.to_owned(),
                    status,
                    order: order.unwrap_or(UNORDERED),
                });
            }
        }
    }
}

fn feature_name(row: &SkillRow, lang: Language) -> Option<&str> {
    pick_localized(
        lang,
        row.name.as_deref(),
        row.name_ru.as_deref(),
        row.name_uz.as_deref(),
    )
    .or_else(|| non_empty(row.name_ru.as_deref()))
    .or_else(|| non_empty(row.name_uz.as_deref()))
}

/// Aggregate flat skill rows into ordered course cards.
pub fn build_courses(
    rows: &[SkillRow],
    lang: Language,
    pricing: &PricingConfig,
    stats: &CourseStats,
) -> Vec<Course> {
    let mut courses: Vec<CourseAgg> = Vec::new();
    let mut course_index: HashMap<RecordId, usize> = HashMap::new();

    for row in rows {
        let Some(list) = row.price_list.as_ref().filter(|l| l.is_active) else {
            continue;
        };

        let idx = *course_index.entry(list.id.clone()).or_insert_with(|| {
            let title = pick_localized(
                lang,
                list.course.as_deref(),
                list.course_ru.as_deref(),
                list.course_uz.as_deref(),
            )
            .unwrap_or(NO_TITLE);
            let description = pick_localized(
                lang,
                list.description.as_deref(),
                list.description_ru.as_deref(),
                list.description_uz.as_deref(),
            )
            .unwrap_or(NO_DESCRIPTION);
            courses.push(CourseAgg {
                id: list.id.clone(),
                title: title.to_owned(),
                description: description.to_owned(),
                price: format_price(&list.price, list.order, pricing),
                order: list.order.unwrap_or(UNORDERED),
                features: Vec::new(),
                feature_index: HashMap::new(),
            });
            courses.len() - 1
        });

        match feature_name(row, lang) {
            Some(name) => courses[idx].merge_feature(name, row.status, row.order),
            None => tracing::debug!("skill row {} has no name, skipped", row.id),
        }
    }

    // Vec::sort_by_key is stable: equal orders keep discovery order.
    courses.sort_by_key(|c| c.order);
    courses
        .into_iter()
        .map(|mut agg| {
            agg.features.sort_by_key(|f| f.order);
            Course {
                id: agg.id.to_string(),
                title: agg.title,
                price: agg.price.current,
                original_price: agg.price.original,
                features: agg
                    .features
                    .into_iter()
                    .map(|f| Feature {
                        name: f.name,
                        status: f.status,
                    })
                    .collect(),
                duration: stats.duration.clone(),
                students: stats.students.clone(),
                lessons: stats.lessons.clone(),
                description: agg.description,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PriceList;

    fn list(id: &str, order: Option<i64>, active: bool) -> PriceList {
        PriceList {
            id: RecordId::Text(id.into()),
            course: Some(format!("Course {id}")),
            course_ru: None,
            course_uz: None,
            description: None,
            description_ru: None,
            description_uz: None,
            price: "100000".into(),
            is_active: active,
            order,
        }
    }

    fn row(list: &PriceList, name: &str, status: bool, order: Option<i64>) -> SkillRow {
        SkillRow {
            id: RecordId::Int(0),
            name: Some(name.into()),
            name_ru: None,
            name_uz: None,
            status,
            order,
            price_list: Some(list.clone()),
        }
    }

    fn build(rows: &[SkillRow]) -> Vec<Course> {
        build_courses(
            rows,
            Language::En,
            &PricingConfig::default(),
            &CourseStats::default(),
        )
    }

    #[test]
    fn duplicate_feature_is_merged_with_or() {
        let a = list("A", Some(1), true);
        let courses = build(&[
            row(&a, "Speaking", true, Some(1)),
            row(&a, "Speaking", false, Some(2)),
        ]);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].id, "A");
        assert_eq!(
            courses[0].features,
            vec![Feature {
                name: "Speaking".into(),
                status: true
            }]
        );
    }

    #[test]
    fn merged_feature_keeps_lowest_order() {
        let a = list("A", Some(1), true);
        let courses = build(&[
            row(&a, "Writing", true, Some(2)),
            row(&a, "Speaking", false, Some(5)),
            row(&a, "Speaking", true, Some(1)),
        ]);
        let names: Vec<&str> = courses[0].features.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Speaking", "Writing"]);
        assert!(courses[0].features[0].status);
    }

    #[test]
    fn inactive_and_orphan_rows_are_ignored() {
        let active = list("A", Some(1), true);
        let inactive = list("B", Some(2), false);
        let mut orphan = row(&active, "Grammar", true, Some(1));
        orphan.price_list = None;
        let courses = build(&[
            row(&inactive, "Speaking", true, Some(1)),
            orphan,
            row(&active, "Listening", true, Some(1)),
        ]);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].features.len(), 1);
        assert_eq!(courses[0].features[0].name, "Listening");
    }

    #[test]
    fn nameless_row_keeps_its_course() {
        let a = list("A", Some(1), true);
        let mut nameless = row(&a, "", true, Some(1));
        nameless.name = None;
        let courses = build(&[nameless]);
        assert_eq!(courses.len(), 1);
        assert!(courses[0].features.is_empty());
    }

    #[test]
    fn unordered_courses_sort_last_and_ties_keep_arrival() {
        let none = list("N", None, true);
        let second = list("S", Some(2), true);
        let first_a = list("F1", Some(1), true);
        let first_b = list("F2", Some(1), true);
        let courses = build(&[
            row(&none, "x", true, None),
            row(&second, "x", true, None),
            row(&first_a, "x", true, None),
            row(&first_b, "x", true, None),
        ]);
        let ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["F1", "F2", "S", "N"]);
    }

    #[test]
    fn fallback_title_and_description() {
        let mut bare = list("A", Some(1), true);
        bare.course = None;
        let courses = build(&[row(&bare, "x", true, None)]);
        assert_eq!(courses[0].title, "No Title");
        assert_eq!(courses[0].description, "No description available.");
        assert_eq!(courses[0].duration, "10 weeks");
        assert_eq!(courses[0].students, "5000+");
        assert_eq!(courses[0].lessons, "40 lessons");
    }

    #[test]
    fn localized_fields_follow_language() {
        let mut a = list("A", Some(1), true);
        a.course_ru = Some("Старт".into());
        a.course_uz = Some("Boshlang'ich".into());
        let mut r = row(&a, "Speaking", true, Some(1));
        r.name_uz = Some("Gapirish".into());

        let pricing = PricingConfig::default();
        let stats = CourseStats::default();
        let uz = build_courses(std::slice::from_ref(&r), Language::Uz, &pricing, &stats);
        let ru = build_courses(std::slice::from_ref(&r), Language::Ru, &pricing, &stats);

        assert_eq!(uz[0].title, "Boshlang'ich");
        assert_eq!(uz[0].features[0].name, "Gapirish");
        assert_eq!(ru[0].title, "Старт");
        assert_eq!(ru[0].features[0].name, "Speaking");
    }

    #[test]
    fn price_tags_use_grouping_and_anchor_table() {
        let pricing = PricingConfig::default();
        assert_eq!(
            format_price("990000.00", Some(1), &pricing),
            PriceTag {
                current: "990,000sum".into(),
                original: Some("1,180,000sum".into()),
            }
        );
        assert_eq!(
            format_price("on request", Some(7), &pricing),
            PriceTag {
                current: "on requestsum".into(),
                original: None,
            }
        );
        assert_eq!(format_price("1500", None, &pricing).original, None);
    }
}
