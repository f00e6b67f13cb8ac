use keymap::KeyMap;

#[derive(KeyMap, Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Quit the application
    #[key("q")]
    Quit,
    /// Start the puzzle over
    #[key("r")]
    Reset,
    /// Select tower 1
    #[key("1")]
    TowerOne,
    /// Select tower 2
    #[key("2")]
    TowerTwo,
    /// Select tower 3
    #[key("3")]
    TowerThree,
    /// Clear the pending source tower
    #[key("esc")]
    Cancel,
    /// Toggle help display
    #[key("h")]
    ToggleHelp,
}
