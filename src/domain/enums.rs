/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Keys act on the selected row
    Normal,
    /// Keys edit the entry field
    Entry,
}

impl UiMode {
    /// Short label shown in the status bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "LIST",
            Self::Entry => "ENTRY",
        }
    }
}
