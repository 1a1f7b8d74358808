//! Session domain: UI state for one interactive quiz session
//!
//! [`UiState`] is the single value the front end draws from. The view
//! module maps it to display elements without side effects.

pub mod ui_state;
pub mod view;
