//! Shared test utilities for handler modules

use crate::app::State;
use crate::config::AppConfig;
use crate::core::notify::Notice;
use crate::core::portal::Portal;

/// Fresh state over the demo catalog, default preferences, nobody signed in
pub fn create_test_state() -> State {
    State::from_parts(Portal::seeded(), AppConfig::default())
}

/// Test state with one of the demo accounts already signed in
pub fn create_signed_in_state(email: &str, password: &str) -> State {
    let mut state = create_test_state();
    state
        .portal
        .login(email, password, &mut Vec::<Notice>::new())
        .expect("demo account should sign in");
    state
}

pub fn create_admin_state() -> State {
    create_signed_in_state("admin@glassy.tube", "admin123")
}

pub fn create_viewer_state() -> State {
    create_signed_in_state("viewer@glassy.tube", "viewer123")
}
