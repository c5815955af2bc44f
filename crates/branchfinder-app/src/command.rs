use serde::{Deserialize, Serialize};

/// A user action the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum Command {
    Search(String),
    SetLocation(String),
    SetCategory(String),
    ClearFilters,
    ToggleView,
    /// Open the detail panel for the branch at this dataset position.
    Select(usize),
    CloseDetail,
}

impl Command {
    /// Whether the command changes the filter criteria.
    #[must_use]
    pub fn changes_criteria(&self) -> bool {
        matches!(
            self,
            Command::Search(_)
                | Command::SetLocation(_)
                | Command::SetCategory(_)
                | Command::ClearFilters
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_round_trip_through_json() {
        let json = serde_json::to_string(&Command::Search("makati".to_string())).expect("ser");
        assert_eq!(json, r#"{"command":"search","value":"makati"}"#);
        let back: Command = serde_json::from_str(r#"{"command":"toggle_view"}"#).expect("de");
        assert_eq!(back, Command::ToggleView);
    }

    #[test]
    fn only_filter_commands_change_criteria() {
        assert!(Command::ClearFilters.changes_criteria());
        assert!(Command::SetCategory("ATM".to_string()).changes_criteria());
        assert!(!Command::ToggleView.changes_criteria());
        assert!(!Command::Select(0).changes_criteria());
    }
}
