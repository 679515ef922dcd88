//! Core catalog and presentation state, renderer-independent
//!
//! The [`catalog`] holds the immutable bilingual teaching content,
//! [`state`] holds the per-view selection machines, and [`i18n`] resolves
//! text for the active locale. Nothing in here knows about iced.

pub mod catalog;
pub mod content;
pub mod error;
pub mod i18n;
pub mod state;
