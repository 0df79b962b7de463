//! Preferences: theme and grid density
//!
//! Every change saves the whole `AppConfig` in the background.

use crate::app::{BannerSeverity, Message, State};
use iced::Task;

pub(crate) fn handle_cycle_theme(state: &mut State) -> Task<Message> {
    let choice = state.current_theme.next();
    state.current_theme = choice;
    state.theme = choice.to_theme();
    state.config.theme_choice = choice;
    tracing::info!("Theme changed to: {}", choice.name());
    state.save_config()
}

pub(crate) fn handle_toggle_compact_grid(state: &mut State, enabled: bool) -> Task<Message> {
    state.config.compact_grid = enabled;
    state.save_config()
}

pub(crate) fn handle_config_saved(state: &mut State, result: Result<(), String>) {
    if let Err(e) = result {
        tracing::warn!("Failed to save preferences: {e}");
        state.push_banner(
            format!("Could not save preferences: {e}"),
            BannerSeverity::Error,
            8,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::create_test_state;
    use crate::theme::ThemeChoice;

    #[test]
    fn test_cycle_theme_updates_config() {
        let mut state = create_test_state();
        let _task = handle_cycle_theme(&mut state);
        assert_eq!(state.current_theme, ThemeChoice::GlassLight);
        assert_eq!(state.config.theme_choice, ThemeChoice::GlassLight);
        assert_eq!(state.theme.name, "Glass Light");
    }

    #[test]
    fn test_compact_grid() {
        let mut state = create_test_state();
        let _task = handle_toggle_compact_grid(&mut state, true);
        assert!(state.config.compact_grid);
    }

    #[test]
    fn test_save_failure_shows_banner() {
        let mut state = create_test_state();
        handle_config_saved(&mut state, Ok(()));
        assert!(state.banners.is_empty());
        handle_config_saved(&mut state, Err("disk full".to_string()));
        assert_eq!(state.banners[0].severity, BannerSeverity::Error);
    }
}
