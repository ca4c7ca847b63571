//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::DisplayMode;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Cycle to the next display mode: Off → SizeOnly → SizeAndDate → Off
///
/// # Examples
/// ```
/// use pintui::DisplayMode;
/// use pintui::logic::ui::cycle_display_mode;
///
/// assert_eq!(cycle_display_mode(DisplayMode::Off), DisplayMode::SizeOnly);
/// assert_eq!(cycle_display_mode(DisplayMode::SizeOnly), DisplayMode::SizeAndDate);
/// assert_eq!(cycle_display_mode(DisplayMode::SizeAndDate), DisplayMode::Off);
/// ```
pub fn cycle_display_mode(current: DisplayMode) -> DisplayMode {
    match current {
        DisplayMode::Off => DisplayMode::SizeOnly,
        DisplayMode::SizeOnly => DisplayMode::SizeAndDate,
        DisplayMode::SizeAndDate => DisplayMode::Off,
    }
}

pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Move a list selection by `delta`, clamped to the list bounds
pub fn move_selection(current: Option<usize>, len: usize, delta: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.unwrap_or(0) as isize;
    let next = (current + delta).clamp(0, len as isize - 1);
    Some(next as usize)
}

/// Keep a selection valid after the list was replaced
pub fn clamp_selection(current: Option<usize>, len: usize) -> Option<usize> {
    match (current, len) {
        (_, 0) => None,
        (None, _) => Some(0),
        (Some(idx), len) => Some(idx.min(len - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_display_mode_wraps() {
        let mut mode = DisplayMode::Off;
        for _ in 0..3 {
            mode = cycle_display_mode(mode);
        }
        assert_eq!(mode, DisplayMode::Off);
    }

    #[test]
    fn test_should_dismiss_toast() {
        assert!(!should_dismiss_toast(0));
        assert!(!should_dismiss_toast(1499));
        assert!(should_dismiss_toast(1500));
    }

    #[test]
    fn test_move_selection_clamps() {
        assert_eq!(move_selection(None, 0, 1), None);
        assert_eq!(move_selection(None, 3, 1), Some(1));
        assert_eq!(move_selection(Some(2), 3, 1), Some(2));
        assert_eq!(move_selection(Some(0), 3, -1), Some(0));
        assert_eq!(move_selection(Some(1), 30, 10), Some(11));
        assert_eq!(move_selection(Some(25), 30, 10), Some(29));
    }

    #[test]
    fn test_clamp_selection_after_replace() {
        assert_eq!(clamp_selection(Some(5), 0), None);
        assert_eq!(clamp_selection(None, 4), Some(0));
        assert_eq!(clamp_selection(Some(5), 3), Some(2));
        assert_eq!(clamp_selection(Some(1), 3), Some(1));
    }
}
