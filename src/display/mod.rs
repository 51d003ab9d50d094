pub mod summary;
pub mod terminal;

/// Where the computed sweep goes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DisplayMode {
    /// Full-screen chart in the terminal
    #[default]
    Terminal,
    /// Plain text on stdout, no chart
    Summary,
}

impl DisplayMode {
    pub fn from_flags(no_display: bool) -> Self {
        if no_display {
            DisplayMode::Summary
        } else {
            DisplayMode::Terminal
        }
    }
}
