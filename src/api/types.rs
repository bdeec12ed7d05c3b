// Marketplace API request/response types

use crate::session::User;
use serde::{Deserialize, Serialize};

/// Body of `POST /agents`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAgentRequest {
    /// Listing name
    pub name: String,
    /// Listing description
    pub description: String,
    /// Listing category
    pub category: String,
    /// One-off price
    pub price: f64,
    /// Monthly subscription price; omitted when there is no subscription tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_price: Option<f64>,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Successful `POST /auth/login` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    /// Signed-in user
    pub user: User,
    /// Bearer token for subsequent requests
    pub token: String,
}

/// Error body the API may attach to non-success responses
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subscription_price_omitted_when_none() {
        let request = CreateAgentRequest {
            name: "Bot".to_string(),
            description: "desc".to_string(),
            category: "cat".to_string(),
            price: 9.99,
            subscription_price: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "Bot", "description": "desc", "category": "cat", "price": 9.99})
        );
    }

    #[test]
    fn test_zero_subscription_price_is_sent() {
        let request = CreateAgentRequest {
            name: "Bot".to_string(),
            description: "desc".to_string(),
            category: "cat".to_string(),
            price: 1.0,
            subscription_price: Some(0.0),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["subscription_price"], json!(0.0));
    }

    #[test]
    fn test_login_response_parses() {
        let response: LoginResponse = serde_json::from_value(json!({
            "user": {"id": "u-1", "name": "Ada", "email": "ada@example.com", "token_balance": 10},
            "token": "tok"
        }))
        .unwrap();

        assert_eq!(response.user.name, "Ada");
        assert_eq!(response.user.token_balance, 10.0);
        assert_eq!(response.token, "tok");
    }
}
