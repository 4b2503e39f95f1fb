//! Backend payloads and endpoint paths.
//!
//! The backend is a separate service; these types mirror what it sends.
//! Collections from `/api/payments/` and `/api/price_list/` may arrive either
//! as a bare array or wrapped in a paginated `{"results": [...]}` object, and
//! malformed entries are dropped instead of failing the whole list (see
//! [`decode_list`]).

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::format::parse_int_prefix;

/// Endpoint paths, relative to `api.base_url`.
pub mod endpoints {
    use crate::locale::Language;

    pub const TIMER: &str = "/api/auth/timer/timers";
    pub const CONTACT: &str = "/api/contact/";
    pub const PAYMENTS: &str = "/api/payments/";
    pub const PRICE_LIST: &str = "/api/price_list/";
    pub const CONFIRMATIONS: &str = "/api/confirmations/";

    /// Skill rows come pre-localized per language.
    pub fn skills(lang: Language) -> &'static str {
        match lang {
            Language::Ru => "/api/skill/skill_ru/",
            Language::Uz => "/api/skill/skill_uz/",
            Language::En => "/api/skill/",
        }
    }
}

/// Primary key as the backend serializes it: sometimes a number, sometimes a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// A JSON value that may be a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrString {
    pub fn as_text(&self) -> String {
        match self {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::Text(s) => s.clone(),
        }
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer).map(|v| v.as_text())
}

/// `null` flags read as `false`.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One feature row from `/api/skill*`. Several rows share a `price_list`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillRow {
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_ru: Option<String>,
    #[serde(default)]
    pub name_uz: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub status: bool,
    #[serde(default)]
    pub order: Option<i64>,
    /// Rows without a price list never contribute to a course.
    #[serde(default)]
    pub price_list: Option<PriceList>,
}

/// The course/plan a skill row belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceList {
    pub id: RecordId,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub course_ru: Option<String>,
    #[serde(default)]
    pub course_uz: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_ru: Option<String>,
    #[serde(default)]
    pub description_uz: Option<String>,
    /// Decimal string such as `"1180000.00"`.
    #[serde(deserialize_with = "number_or_string")]
    pub price: String,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_active: bool,
    #[serde(default)]
    pub order: Option<i64>,
}

/// Bank card shown on the order page for manual transfers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentCard {
    pub id: RecordId,
    pub card_number: String,
    pub full_name: String,
    /// Card network, e.g. `VISA`, `UZCARD`, `HUMO`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Plan offered in the order page dropdown (`/api/price_list/`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PricePlan {
    pub id: RecordId,
    pub course: String,
    pub price: String,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
}

/// `GET /api/auth/timer/timers`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimerPayload {
    #[serde(default)]
    pub remaining_seconds: Option<NumberOrString>,
}

impl TimerPayload {
    /// Remaining seconds, parsed from the leading integer of the value.
    pub fn seconds(&self) -> Option<i64> {
        self.remaining_seconds
            .as_ref()
            .and_then(|v| parse_int_prefix(&v.as_text()))
    }
}

/// `POST /api/contact/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub full_name: String,
    pub phone_number: String,
    pub description: String,
}

/// Text parts of the `POST /api/confirmations/` multipart body.
/// The receipt image travels next to these as `check_image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationFields {
    pub full_name: String,
    pub phone: String,
    pub telegram_username: String,
}

impl ConfirmationFields {
    pub const RECEIPT_FIELD: &'static str = "check_image";

    /// `(name, value)` pairs in submission order.
    pub fn parts(&self) -> [(&'static str, &str); 3] {
        [
            ("full_name", self.full_name.as_str()),
            ("phone", self.phone.as_str()),
            ("telegram_username", self.telegram_username.as_str()),
        ]
    }
}

/// Decode a list that may be a bare array or `{"results": [...]}`.
///
/// Entries that do not deserialize into `T` are skipped; any other shape
/// yields an empty list.
pub fn decode_list<T: DeserializeOwned>(payload: Value) -> Vec<T> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if decoded.len() < total {
        tracing::debug!(
            "dropped {} malformed entries out of {}",
            total - decoded.len(),
            total
        );
    }
    decoded
}
