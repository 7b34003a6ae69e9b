#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    ToggleHelp,

    // Seed input
    InputChar(char),
    Backspace,
    ClearInput,

    // Scheme selector
    SchemeNext,
    SchemePrev,

    /// Persist the form and fetch a palette.
    Submit,

    // Swatch list
    SwatchUp,
    SwatchDown,
    ActivateFocused,
    ActivateAt(usize),

    Resize,
}
