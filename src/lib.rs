//! Lead-Capture Form Relay
//!
//! This library provides the core functionality for the lead-capture relay.
//! A web form submission is forwarded to a Salesforce web-to-lead endpoint,
//! then a Telegram chat is notified in the background. The service holds no
//! state of its own.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `crm_client`: CRM web-to-lead client.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers and router.
//! - `models`: Submission, CRM record, and notification models.
//! - `notifier`: Best-effort Telegram notifier.
//! - `tables`: Static display-label and product-hashtag tables.

pub mod config;
pub mod crm_client;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notifier;
pub mod tables;
