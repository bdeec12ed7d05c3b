// Agent listing draft
// Text as typed by the user, plus conversion into the wire payload

use crate::api::CreateAgentRequest;
use thiserror::Error;

/// Fields of the create-agent form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingField {
    /// Listing name
    Name,
    /// Listing description
    Description,
    /// Listing category
    Category,
    /// One-off price
    Price,
    /// Monthly subscription price
    SubscriptionPrice,
}

impl ListingField {
    /// All fields in form order
    pub const ALL: [ListingField; 5] = [
        ListingField::Name,
        ListingField::Description,
        ListingField::Category,
        ListingField::Price,
        ListingField::SubscriptionPrice,
    ];

    /// Human-readable field name
    pub fn title(self) -> &'static str {
        match self {
            ListingField::Name => "Name",
            ListingField::Description => "Description",
            ListingField::Category => "Category",
            ListingField::Price => "Price",
            ListingField::SubscriptionPrice => "Subscription Price",
        }
    }

    /// Form label, with a trailing marker on required fields
    pub fn label(self) -> &'static str {
        match self {
            ListingField::Name => "Name *",
            ListingField::Description => "Description *",
            ListingField::Category => "Category *",
            ListingField::Price => "Price ($) *",
            ListingField::SubscriptionPrice => "Subscription Price ($/month)",
        }
    }

    /// Placeholder shown in an empty input
    pub fn placeholder(self) -> &'static str {
        match self {
            ListingField::Name => "Enter agent name",
            ListingField::Description => "Enter agent description",
            ListingField::Category => "Enter agent category",
            ListingField::Price => "Enter price",
            ListingField::SubscriptionPrice => "Enter subscription price (optional)",
        }
    }

    /// Whether the field must be filled before submitting
    pub fn is_required(self) -> bool {
        !matches!(self, ListingField::SubscriptionPrice)
    }

    /// Whether the field takes multi-line text
    pub fn is_multiline(self) -> bool {
        matches!(self, ListingField::Description)
    }
}

/// Reasons a draft cannot be submitted
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or more required fields are empty
    #[error("Please fill in all required fields")]
    MissingRequired(Vec<ListingField>),

    /// An amount is not a finite, non-negative number
    #[error("{} must be a non-negative number", .0.title())]
    InvalidAmount(ListingField),
}

/// In-progress listing, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentListingDraft {
    /// Listing name
    pub name: String,
    /// Listing description
    pub description: String,
    /// Listing category
    pub category: String,
    /// One-off price text
    pub price: String,
    /// Subscription price text; blank means no subscription tier
    pub subscription_price: String,
}

impl AgentListingDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of `field`
    pub fn get(&self, field: ListingField) -> &str {
        match field {
            ListingField::Name => &self.name,
            ListingField::Description => &self.description,
            ListingField::Category => &self.category,
            ListingField::Price => &self.price,
            ListingField::SubscriptionPrice => &self.subscription_price,
        }
    }

    /// Mutable text of `field`, for binding to an input widget
    pub fn get_mut(&mut self, field: ListingField) -> &mut String {
        match field {
            ListingField::Name => &mut self.name,
            ListingField::Description => &mut self.description,
            ListingField::Category => &mut self.category,
            ListingField::Price => &mut self.price,
            ListingField::SubscriptionPrice => &mut self.subscription_price,
        }
    }

    /// Replace the text of `field`
    pub fn set(&mut self, field: ListingField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Required fields that are still empty
    pub fn missing_fields(&self) -> Vec<ListingField> {
        ListingField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }

    /// Validate the draft and build the request payload
    ///
    /// A blank subscription price is left out of the payload entirely,
    /// which is different from a subscription priced at zero.
    pub fn to_request(&self) -> Result<CreateAgentRequest, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingRequired(missing));
        }

        let price = parse_amount(ListingField::Price, &self.price)?;
        let subscription_price = if self.subscription_price.trim().is_empty() {
            None
        } else {
            Some(parse_amount(
                ListingField::SubscriptionPrice,
                &self.subscription_price,
            )?)
        };

        Ok(CreateAgentRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price,
            subscription_price,
        })
    }
}

fn parse_amount(field: ListingField, raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidAmount(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_draft() -> AgentListingDraft {
        AgentListingDraft {
            name: "Bot".to_string(),
            description: "desc".to_string(),
            category: "cat".to_string(),
            price: "9.99".to_string(),
            subscription_price: String::new(),
        }
    }

    #[test]
    fn test_blank_subscription_is_omitted() {
        let request = filled_draft().to_request().unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "Bot", "description": "desc", "category": "cat", "price": 9.99})
        );
    }

    #[test]
    fn test_subscription_price_is_parsed() {
        let mut draft = filled_draft();
        draft.set(ListingField::SubscriptionPrice, "4.50");

        let request = draft.to_request().unwrap();
        assert_eq!(request.subscription_price, Some(4.5));
    }

    #[test]
    fn test_zero_subscription_is_kept() {
        let mut draft = filled_draft();
        draft.set(ListingField::SubscriptionPrice, "0");

        let request = draft.to_request().unwrap();
        assert_eq!(request.subscription_price, Some(0.0));
    }

    #[test]
    fn test_each_required_field_is_checked() {
        for field in ListingField::ALL.into_iter().filter(|f| f.is_required()) {
            let mut draft = filled_draft();
            draft.set(field, "");

            assert_eq!(
                draft.to_request(),
                Err(ValidationError::MissingRequired(vec![field])),
                "{:?} should be required",
                field
            );
        }
    }

    #[test]
    fn test_empty_draft_reports_all_required_fields() {
        let err = AgentListingDraft::new().to_request().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequired(vec![
                ListingField::Name,
                ListingField::Description,
                ListingField::Category,
                ListingField::Price,
            ])
        );
        assert_eq!(err.to_string(), "Please fill in all required fields");
    }

    #[test]
    fn test_invalid_amounts() {
        for bad in ["abc", "-1", "NaN", "inf"] {
            let mut draft = filled_draft();
            draft.set(ListingField::Price, bad);
            assert_eq!(
                draft.to_request(),
                Err(ValidationError::InvalidAmount(ListingField::Price)),
                "price {:?} should be rejected",
                bad
            );
        }

        let mut draft = filled_draft();
        draft.set(ListingField::SubscriptionPrice, "monthly");
        let err = draft.to_request().unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidAmount(ListingField::SubscriptionPrice)
        );
        assert_eq!(
            err.to_string(),
            "Subscription Price must be a non-negative number"
        );
    }

    #[test]
    fn test_text_fields_are_sent_as_typed() {
        let mut draft = filled_draft();
        draft.set(ListingField::Name, "  Spaced Bot ");

        let request = draft.to_request().unwrap();
        assert_eq!(request.name, "  Spaced Bot ");
    }

    #[test]
    fn test_latest_mutation_wins() {
        let mut draft = filled_draft();
        draft.set(ListingField::Price, "1");
        draft.set(ListingField::Price, "2.25");

        assert_eq!(draft.to_request().unwrap().price, 2.25);
    }
}
