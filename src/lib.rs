//! Agent Marketplace Dashboard
//!
//! Native client for the agent marketplace: sign in, browse the dashboard
//! sections and list new agents for sale. The main binary is in
//! `src/main.rs`; this library exposes the modules for testing.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod listing;
pub mod navigation;
pub mod notice;
pub mod router;
pub mod session;
pub mod storage;
pub mod ui;
