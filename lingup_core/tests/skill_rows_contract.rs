//! Contract tests against payloads shaped like the production backend's.

use lingup_core::api::{PaymentCard, PricePlan, SkillRow, decode_list};
use lingup_core::config::SiteConfig;
use lingup_core::courses::{Course, Feature, build_courses};
use lingup_core::order::{active_plans, retain_selection};
use lingup_core::Language;
use pretty_assertions::assert_eq;
use serde_json::json;

fn courses_from(payload: serde_json::Value, lang: Language) -> Vec<Course> {
    let rows: Vec<SkillRow> = serde_json::from_value(payload).expect("valid skill rows");
    let config = SiteConfig::default();
    build_courses(&rows, lang, &config.pricing, &config.course_stats)
}

fn feature(name: &str, status: bool) -> Feature {
    Feature {
        name: name.into(),
        status,
    }
}

#[test]
fn same_feature_in_one_course_merges_to_true() {
    let courses = courses_from(
        json!([
            {"id": "r1", "name": "Speaking", "status": true, "order": 1,
             "price_list": {"id": "A", "order": 1, "is_active": true, "price": "100000"}},
            {"id": "r2", "name": "Speaking", "status": false, "order": 2,
             "price_list": {"id": "A", "order": 1, "is_active": true, "price": "100000"}}
        ]),
        Language::En,
    );

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, "A");
    assert_eq!(courses[0].features, vec![feature("Speaking", true)]);
    assert_eq!(courses[0].price, "100,000sum");
    assert_eq!(courses[0].original_price.as_deref(), Some("1,180,000sum"));
}

#[test]
fn grouping_ignores_input_order() {
    let rows = json!([
        {"id": 1, "name": "Grammar", "status": true, "order": 2,
         "price_list": {"id": 20, "course": "Standart", "order": 2, "is_active": true, "price": "1490000.00"}},
        {"id": 2, "name": "Speaking", "status": true, "order": 1,
         "price_list": {"id": 10, "course": "Start", "order": 1, "is_active": true, "price": "990000.00"}},
        {"id": 3, "name": "Speaking", "status": false, "order": 1,
         "price_list": {"id": 20, "course": "Standart", "order": 2, "is_active": true, "price": "1490000.00"}},
        {"id": 4, "name": "Grammar", "status": false, "order": 2,
         "price_list": {"id": 10, "course": "Start", "order": 1, "is_active": true, "price": "990000.00"}},
        {"id": 5, "name": "Mock exams", "status": true, "order": 3,
         "price_list": {"id": 30, "course": "Premium", "order": 3, "is_active": false, "price": "2190000.00"}}
    ]);

    let mut reversed = rows.as_array().cloned().unwrap();
    reversed.reverse();

    let forward = courses_from(rows, Language::En);
    let backward = courses_from(serde_json::Value::Array(reversed), Language::En);

    let summary = |courses: &[Course]| -> Vec<(String, Vec<Feature>)> {
        courses
            .iter()
            .map(|c| (c.title.clone(), c.features.clone()))
            .collect()
    };
    assert_eq!(summary(&forward), summary(&backward));
    assert_eq!(
        summary(&forward),
        vec![
            (
                "Start".to_string(),
                vec![feature("Speaking", true), feature("Grammar", false)]
            ),
            (
                "Standart".to_string(),
                vec![feature("Speaking", false), feature("Grammar", true)]
            ),
        ]
    );
    assert_eq!(forward[1].price, "1,490,000sum");
    assert_eq!(forward[1].original_price.as_deref(), Some("1,780,000sum"));
}

#[test]
fn russian_endpoint_rows_localize_titles() {
    let courses = courses_from(
        json!([
            {"id": "r1", "name": "Speaking", "name_ru": "Говорение", "status": true, "order": 1,
             "price_list": {"id": "A", "course": "Start", "course_ru": "Старт",
                            "description_ru": "Для начинающих", "order": 1,
                            "is_active": true, "price": "990000"}}
        ]),
        Language::from_tag("ru-RU"),
    );
    assert_eq!(courses[0].title, "Старт");
    assert_eq!(courses[0].description, "Для начинающих");
    assert_eq!(courses[0].features, vec![feature("Говорение", true)]);
}

#[test]
fn empty_payload_builds_nothing() {
    assert!(courses_from(json!([]), Language::Uz).is_empty());
}

#[test]
fn payment_cards_accept_both_envelopes_and_drop_malformed() {
    let bare = json!([
        {"id": 1, "card_number": "8600123456789012", "full_name": "LingUp LLC", "type": "UZCARD"},
        {"id": 2, "card_number": 4916, "full_name": "broken", "type": "VISA"},
        {"id": "3", "card_number": "4916338506082832", "full_name": "LingUp LLC", "type": "VISA"}
    ]);
    let paged = json!({"count": 3, "next": null, "results": bare.clone()});

    let from_bare: Vec<PaymentCard> = decode_list(bare);
    let from_paged: Vec<PaymentCard> = decode_list(paged);

    assert_eq!(from_bare, from_paged);
    assert_eq!(from_bare.len(), 2);
    assert_eq!(from_bare[1].kind, "VISA");

    let nothing: Vec<PaymentCard> = decode_list(json!({"detail": "Not found."}));
    assert!(nothing.is_empty());
}

#[test]
fn price_plans_are_filtered_sorted_and_selected() {
    let plans: Vec<PricePlan> = decode_list(json!({"results": [
        {"id": 3, "course": "Premium", "price": "2190000.00", "order": 3, "is_active": true},
        {"id": 1, "course": "Start", "price": "990000.00", "order": 1, "is_active": true},
        {"id": 2, "course": "Standart", "price": "1490000.00", "order": 2, "is_active": false},
        {"id": 4, "course": "Trial", "price": "0", "is_active": "yes"}
    ]}));
    let plans = active_plans(plans);

    let courses: Vec<&str> = plans.iter().map(|p| p.course.as_str()).collect();
    assert_eq!(courses, ["Start", "Premium"]);
    assert_eq!(retain_selection(Some("3"), &plans), Some("3".to_string()));
    assert_eq!(retain_selection(Some("2"), &plans), Some("1".to_string()));
}
