// Marketplace API module
// HTTP client, wire types and errors for the marketplace backend

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, AuthApi, ListingApi};
pub use error::ApiError;
pub use types::{CreateAgentRequest, LoginRequest, LoginResponse};
