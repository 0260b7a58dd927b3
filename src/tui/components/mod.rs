// Reusable render components
//
// Thin presentational pieces: each takes a frame, an area and the state
// it draws, and owns nothing. Panels compose the primitives.

pub mod button;
pub mod form_panel;
pub mod list_panel;
pub mod status_bar;
pub mod text_input;
pub mod title_bar;
pub mod toast;
