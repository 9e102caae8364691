use indexmap::IndexSet;
use tracing::info;

use crate::error::{Error, Result};
use crate::ports::{ControlState, ControlView};

/// Names of the contacts currently added to the group, in the order they
/// were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMembership {
    members: IndexSet<String>,
}

impl GroupMembership {
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub name: String,
    pub state: ControlState,
}

/// Owns the membership set of one group-sync page.
#[derive(Debug, Default)]
pub struct GroupToggleController {
    membership: GroupMembership,
}

impl GroupToggleController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of the contact whose card reads `raw_name` and
    /// updates its control to match.
    pub fn toggle(&mut self, raw_name: &str, control: &mut impl ControlView) -> Result<ToggleOutcome> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(Error::EmptyContactName);
        }

        let state = if self.membership.members.shift_remove(name) {
            ControlState::NotAdded
        } else {
            self.membership.members.insert(name.to_string());
            ControlState::Added
        };
        control.set_control_state(state);

        info!(
            members = ?self.membership.members().collect::<Vec<_>>(),
            "Current group members"
        );

        Ok(ToggleOutcome {
            name: name.to_string(),
            state,
        })
    }

    pub const fn membership(&self) -> &GroupMembership {
        &self.membership
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingControl;

    #[test]
    fn toggle_adds_trimmed_name_then_removes_it() {
        let mut controller = GroupToggleController::new();
        let mut control = RecordingControl::default();

        let added = controller.toggle(" Jane Doe ", &mut control).expect("add");
        assert_eq!(added.name, "Jane Doe");
        assert_eq!(added.state, ControlState::Added);
        assert!(controller.membership().contains("Jane Doe"));
        assert_eq!(control.glyph(), Some("✓"));

        let removed = controller.toggle(" Jane Doe ", &mut control).expect("remove");
        assert_eq!(removed.state, ControlState::NotAdded);
        assert!(controller.membership().is_empty());
        assert_eq!(control.glyph(), Some("＋"));
    }

    #[test]
    fn membership_is_keyed_by_trimmed_text() {
        let mut controller = GroupToggleController::new();
        let mut first = RecordingControl::default();
        let mut second = RecordingControl::default();
        let mut other = RecordingControl::default();

        controller.toggle("Sam Lee", &mut first).expect("add");
        controller.toggle("Ana Ruiz", &mut other).expect("add");
        controller.toggle("\n  Sam Lee\t", &mut second).expect("remove");

        assert_eq!(controller.membership().members().collect::<Vec<_>>(), ["Ana Ruiz"]);
        assert_eq!(second.states, [ControlState::NotAdded]);
    }

    #[test]
    fn members_are_listed_in_the_order_they_were_added() {
        let mut controller = GroupToggleController::new();
        let mut control = RecordingControl::default();

        for name in ["Zoe Park", "Ana Ruiz", "Mia Chen", "Ana Ruiz", "Bo Li"] {
            controller.toggle(name, &mut control).expect("toggle");
        }

        assert_eq!(
            controller.membership().members().collect::<Vec<_>>(),
            ["Zoe Park", "Mia Chen", "Bo Li"]
        );
    }

    #[test]
    fn blank_name_is_rejected_without_touching_the_control() {
        let mut controller = GroupToggleController::new();
        let mut control = RecordingControl::default();

        let result = controller.toggle("   ", &mut control);

        assert!(matches!(result, Err(Error::EmptyContactName)));
        assert!(control.states.is_empty());
        assert_eq!(controller.membership().len(), 0);
    }
}
