//! # leadagent-core - Core Domain Types
//!
//! Foundation crate for Lead Agent. Provides domain types, error handling,
//! the analysis/lead wire payloads and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`View`] - The three top-level views (Product, Leads, Sequences)
//! - [`Severity`] - Notification severity (Info, Success, Warning, Error)
//!
//! ### Payloads (`analysis`, `lead`, `envelope`)
//! - [`AnalysisResult`] - Target audience and market analysis
//! - [`Lead`], [`LeadId`], [`LeadBatch`] - Outreach contacts
//! - [`ServiceEnvelope`] - The backend's `{success, data, error}` wrapper
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure errors (IO, terminal, configuration)
//! - [`ServiceError`] - Failures reported by external collaborators
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use leadagent_core::prelude::*;
//! ```

pub mod analysis;
pub mod envelope;
pub mod error;
pub mod flags;
pub mod lead;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Lead Agent crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt, ServiceError};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use analysis::{AnalysisResult, AudienceSegment, DecisionMaker, TargetAudience, TargetCountry};
pub use envelope::ServiceEnvelope;
pub use error::{Error, Result, ResultExt, ServiceError};
pub use flags::flag_for;
pub use lead::{placeholder_leads, Lead, LeadBatch, LeadId};
pub use types::{Severity, View};
