//! fwlearn - Interactive Firewall Tutor
//!
//! A desktop application that teaches firewall concepts through three
//! views: a paginated explainer of firewall types, a security-level
//! slider mapped to canned traffic profiles, and a catalog of common
//! misconfigurations with example fixes. All content is builtin and
//! bilingual (English/Japanese).
//!
//! # Architecture
//!
//! - [`core`] - Catalog data, locale resolution, and the per-view
//!   selection state machines (renderer-independent)
//! - [`theme`] - Semantic color palettes for the GUI
//! - [`utils`] - XDG directory helpers (log file location)
//!
//! The iced application layer lives in the binary; everything it renders
//! is derived from [`core::state::PageState`] plus the immutable
//! [`core::catalog::ContentCatalog`].

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

pub mod core;
pub mod theme;
pub mod utils;

// Re-export commonly used types
pub use core::catalog::{CatalogEntry, ContentCatalog, Severity};
pub use core::error::{Error, Result};
pub use core::i18n::Locale;
pub use core::state::{PageState, Section};
