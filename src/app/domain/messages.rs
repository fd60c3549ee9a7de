/// All messages that can be sent through the FLTK channel.
/// Widget and menu callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Form
    Calculate,
    Clear,

    // View
    ToggleDarkMode,

    // Help
    ShowAbout,

    // Lifetime
    Quit,
    WindowClose,
}
