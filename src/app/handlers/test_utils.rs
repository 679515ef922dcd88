//! Shared test utilities for handler modules

#[cfg(test)]
pub fn create_test_state() -> crate::app::State {
    crate::app::State::new().0
}
