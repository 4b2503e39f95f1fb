//! Order page: plan selection, payment cards and the confirmation form.
//!
//! The flow is linear (pick a plan, pay by card transfer, upload the receipt,
//! submit). Nothing here touches the DOM; the page keeps the receipt `File`
//! itself and only tells us whether one is attached.

use thiserror::Error;

use crate::api::{ConfirmationFields, PaymentCard, PricePlan};
use crate::format::{group_thousands, parse_decimal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    /// A required field is blank or no receipt is attached.
    #[error("all fields and a receipt image are required")]
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    FullName,
    Phone,
    TelegramUsername,
}

/// Text inputs of the confirmation step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmationForm {
    pub full_name: String,
    pub phone: String,
    pub telegram_username: String,
}

/// Submit is enabled only when every text field has non-whitespace content
/// and a receipt is attached.
pub fn can_submit(full_name: &str, phone: &str, telegram_username: &str, has_receipt: bool) -> bool {
    !full_name.trim().is_empty()
        && !phone.trim().is_empty()
        && !telegram_username.trim().is_empty()
        && has_receipt
}

impl ConfirmationForm {
    pub fn set(&mut self, field: OrderField, value: String) {
        match field {
            OrderField::FullName => self.full_name = value,
            OrderField::Phone => self.phone = value,
            OrderField::TelegramUsername => self.telegram_username = value,
        }
    }

    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::FullName => &self.full_name,
            OrderField::Phone => &self.phone,
            OrderField::TelegramUsername => &self.telegram_username,
        }
    }

    pub fn is_ready(&self, has_receipt: bool) -> bool {
        can_submit(
            &self.full_name,
            &self.phone,
            &self.telegram_username,
            has_receipt,
        )
    }

    /// Trimmed multipart fields, or [`OrderError::Incomplete`].
    pub fn validate(&self, has_receipt: bool) -> Result<ConfirmationFields, OrderError> {
        if !self.is_ready(has_receipt) {
            return Err(OrderError::Incomplete);
        }
        Ok(ConfirmationFields {
            full_name: self.full_name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            telegram_username: self.telegram_username.trim().to_owned(),
        })
    }
}

/// Active plans sorted by `order`; plans without one go last in arrival order.
pub fn active_plans(plans: Vec<PricePlan>) -> Vec<PricePlan> {
    let mut active: Vec<PricePlan> = plans.into_iter().filter(|p| p.is_active).collect();
    active.sort_by_key(|p| p.order.unwrap_or(i64::MAX));
    active
}

/// Keep the previous selection if it is still offered, else pick the first plan.
pub fn retain_selection(previous: Option<&str>, plans: &[PricePlan]) -> Option<String> {
    previous
        .filter(|id| plans.iter().any(|p| p.id.to_string() == *id))
        .map(str::to_owned)
        .or_else(|| plans.first().map(|p| p.id.to_string()))
}

pub fn find_plan<'a>(plans: &'a [PricePlan], id: Option<&str>) -> Option<&'a PricePlan> {
    let id = id?;
    plans.iter().find(|p| p.id.to_string() == id)
}

/// Whole-number price with `,` grouping; non-numeric prices pass through.
pub fn format_plan_price(price: &str) -> String {
    match parse_decimal(price) {
        Some(amount) => group_thousands(amount, 0),
        None => price.to_owned(),
    }
}

/// Digits only, in groups of four: `8600-1234 5678 9012` → `8600 1234 5678 9012`.
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Visual accent for a payment card, by network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAccent {
    Visa,
    Uzcard,
    Other,
}

impl CardAccent {
    pub fn from_kind(kind: &str) -> Self {
        match kind.trim().to_ascii_uppercase().as_str() {
            "VISA" => CardAccent::Visa,
            "UZCARD" => CardAccent::Uzcard,
            _ => CardAccent::Other,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CardAccent::Visa => "card-accent-visa",
            CardAccent::Uzcard => "card-accent-uzcard",
            CardAccent::Other => "card-accent-other",
        }
    }
}

/// Key for the transient "copied" indicator of a card.
pub fn copy_id(card: &PaymentCard) -> String {
    format!("payment-card-{}", card.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RecordId;

    fn plan(id: i64, order: Option<i64>, active: bool) -> PricePlan {
        PricePlan {
            id: RecordId::Int(id),
            course: format!("Plan {id}"),
            price: "990000.00".into(),
            order,
            description: None,
            is_active: active,
        }
    }

    #[test]
    fn submit_requires_all_four_inputs() {
        assert!(can_submit("Malika", "+998901234567", "@malika", true));
        assert!(!can_submit("Malika", "+998901234567", "@malika", false));
        assert!(!can_submit("  ", "+998901234567", "@malika", true));
        assert!(!can_submit("Malika", "", "@malika", true));
        assert!(!can_submit("Malika", "+998901234567", "\t", true));
    }

    #[test]
    fn validate_trims_fields() {
        let mut form = ConfirmationForm::default();
        form.set(OrderField::FullName, "  Malika ".into());
        form.set(OrderField::Phone, "+998901234567 ".into());
        form.set(OrderField::TelegramUsername, " @malika".into());
        assert_eq!(form.validate(false), Err(OrderError::Incomplete));

        let fields = form.validate(true).unwrap();
        assert_eq!(fields.full_name, "Malika");
        assert_eq!(fields.phone, "+998901234567");
        assert_eq!(fields.telegram_username, "@malika");
        assert_eq!(form.get(OrderField::FullName), "  Malika ");
    }

    #[test]
    fn plans_filtered_and_sorted() {
        let plans = active_plans(vec![
            plan(1, None, true),
            plan(2, Some(2), true),
            plan(3, Some(1), false),
            plan(4, Some(1), true),
        ]);
        let ids: Vec<String> = plans.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, ["4", "2", "1"]);
    }

    #[test]
    fn selection_survives_reload_when_still_offered() {
        let plans = vec![plan(4, Some(1), true), plan(2, Some(2), true)];
        assert_eq!(retain_selection(Some("2"), &plans), Some("2".into()));
        assert_eq!(retain_selection(Some("9"), &plans), Some("4".into()));
        assert_eq!(retain_selection(None, &plans), Some("4".into()));
        assert_eq!(retain_selection(Some("2"), &[]), None);
        assert_eq!(find_plan(&plans, Some("2")).map(|p| p.course.as_str()), Some("Plan 2"));
        assert!(find_plan(&plans, None).is_none());
    }

    #[test]
    fn plan_price_has_no_fraction() {
        assert_eq!(format_plan_price("990000.00"), "990,000");
        assert_eq!(format_plan_price("1780000"), "1,780,000");
        assert_eq!(format_plan_price("TBD"), "TBD");
    }

    #[test]
    fn card_numbers_grouped_by_four() {
        assert_eq!(format_card_number("8600123456789012"), "8600 1234 5678 9012");
        assert_eq!(format_card_number("8600-1234 5678 9012"), "8600 1234 5678 9012");
        assert_eq!(format_card_number("4916 33"), "4916 33");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn accent_by_network() {
        assert_eq!(CardAccent::from_kind("visa"), CardAccent::Visa);
        assert_eq!(CardAccent::from_kind("UZCARD"), CardAccent::Uzcard);
        assert_eq!(CardAccent::from_kind("HUMO"), CardAccent::Other);
    }

    #[test]
    fn copy_ids_are_per_card() {
        let card = PaymentCard {
            id: RecordId::Int(3),
            card_number: "8600".into(),
            full_name: "LingUp".into(),
            kind: "UZCARD".into(),
        };
        assert_eq!(copy_id(&card), "payment-card-3");
    }
}
