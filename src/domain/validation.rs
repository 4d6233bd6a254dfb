use super::payment::PaymentRequest;
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use iso_currency::Currency;

/// The outcome of running every business rule against one request.
///
/// Reasons keep rule order; an empty list means the request passed.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct ValidationResult {
    reasons: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn into_reasons(self) -> Vec<String> {
        self.reasons
    }

    fn flag(&mut self, reason: &str) {
        self.reasons.push(reason.to_string());
    }
}

/// Runs all business rules against the request.
///
/// Every failing rule contributes its own reason; nothing short-circuits.
/// Malformed input is a validation failure, never an error.
pub fn validate(request: &PaymentRequest) -> ValidationResult {
    validate_at(request, Utc::now())
}

/// Rule evaluation against an explicit clock so the expiry rules stay
/// deterministic under test.
pub fn validate_at(request: &PaymentRequest, now: DateTime<Utc>) -> ValidationResult {
    let mut result = ValidationResult::default();

    if request.card_number.is_empty() {
        result.flag("Card number is required.");
    }
    if !(14..=19).contains(&request.card_number.len()) {
        result.flag("Card number must be between 14 and 19 digits long.");
    }
    if !request.card_number.chars().all(|c| c.is_ascii_digit()) {
        result.flag("Card number must contain only digits.");
    }

    if request.expiry_month == 0 {
        result.flag("ExpiryMonth is required.");
    }
    if !(1..=12).contains(&request.expiry_month) {
        result.flag("Expiry month must be between 1 and 12.");
    }

    if request.expiry_year == 0 {
        result.flag("ExpiryYear is required.");
    }
    if request.expiry_year < now.year() {
        result.flag("Expiry year must be this year or in the future.");
    }

    // Skipped when month or year is individually out of range; the
    // field-level reasons fire alone in that case.
    if (1..=12).contains(&request.expiry_month) && request.expiry_year != 0 {
        match last_instant_of_month(request.expiry_month, request.expiry_year) {
            Some(expiry) if expiry >= now => {}
            _ => result.flag("The expiry date must be in the future."),
        }
    }

    if request.currency.is_empty() {
        result.flag("Currency is required.");
    }
    if request.currency.chars().count() != 3 {
        result.flag("Currency code must be exactly 3 characters.");
    }
    if !is_recognized_currency(&request.currency) {
        result.flag("Currency must be a valid ISO code.");
    }

    if request.amount == 0 {
        result.flag("Amount is required.");
    }

    if request.cvv.is_empty() {
        result.flag("CVV is required.");
    }
    if !matches!(request.cvv.len(), 3 | 4) || !request.cvv.chars().all(|c| c.is_ascii_digit()) {
        result.flag("CVV must be 3 or 4 digits long.");
    }

    result
}

/// Membership in the ISO 4217 registry, case-insensitive.
///
/// The registry is the `iso_currency` crate's compiled-in table, fixed for
/// the process lifetime and never rebuilt per call.
fn is_recognized_currency(code: &str) -> bool {
    Currency::from_code(&code.to_ascii_uppercase()).is_some()
}

/// The last instant (UTC) at which a card expiring in (month, year) is still
/// usable: one second before the first day of the following month.
fn last_instant_of_month(month: u32, year: i32) -> Option<DateTime<Utc>> {
    let (next_month, next_year) = if month == 12 {
        (1, year + 1)
    } else {
        (month + 1, year)
    };
    let next = Utc
        .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
        .single()?;
    Some(next - Duration::seconds(1))
}
