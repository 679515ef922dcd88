//! Message handlers organized by domain
//!
//! Small, synchronous functions: every interaction completes before the
//! next render, so none of these return tasks.

pub mod display;
pub mod navigation;

#[cfg(test)]
pub mod test_utils;
