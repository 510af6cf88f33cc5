//! Widget actions - what widgets report happened
//!
//! These actions define the interface between widgets and App.

/// Actions that widgets can return from key and mouse handling.
/// App dispatches these to update other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action, input was handled internally
    None,

    /// Input was not handled, pass to parent
    Ignored,

    // Navigation
    /// A nav item was chosen (bar click, drawer, or number key)
    NavItem(usize),
    /// Open or close the section drawer
    ToggleMenu,
    /// Brand was clicked, go back to the top
    BackToTop,
    /// Jump to the section after/before the active one
    NextSection,
    PrevSection,

    // Scrolling (positive is down)
    ScrollLines(i16),
    ScrollPages(i16),
    JumpTop,
    JumpBottom,

    // Global
    /// Copy the contact email to the clipboard
    YankEmail,
    /// Toggle help modal
    ToggleHelp,
    /// Quit the application
    Quit,
}
