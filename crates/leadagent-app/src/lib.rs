//! leadagent-app - Application state and orchestration for Lead Agent
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! Product → Leads → Sequences flow: state, messages, the update function,
//! background service calls, and configuration loading. It has no terminal
//! dependencies; `leadagent-tui` drives it.

pub mod actions;
pub mod analysis;
pub mod busy;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod leads;
pub mod message;
pub mod notifications;
pub mod process;
pub mod sequence;
pub mod services;
pub mod signals;
pub mod state;
pub mod text_input;
pub mod views;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{FieldId, Message};
pub use notifications::{Notification, NotificationCenter, NotificationId, NOTIFICATION_TTL};
pub use services::{ConfiguredServices, ServiceSet};
pub use state::{AppPhase, AppState};
