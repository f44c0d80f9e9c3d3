//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly; this module adds
//! newtype wrappers for collections and operation results so that every
//! piece of user-facing output goes through one place.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │   (Exercise)    │───▶│ (Exercises,     │───▶│  (termimad or   │
//! │                 │    │  CreateResult)  │    │   plain text)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (Exercises, Candidates)
//! - [`results`]: Operation results (CreateResult, CompleteResult, DeleteResult)
//! - [`selection`]: Messages for selection outcomes
//! - [`datetime`]: Date formatting
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod selection;

pub use collections::{Candidates, Exercises};
pub use datetime::DayMonthYear;
pub use results::{CompleteResult, CreateResult, DeleteResult};
