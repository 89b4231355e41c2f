#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theming.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
