//! Flow state for the scripted demo narrative.

use std::fmt;

/// The phase of the scripted demo narrative.
///
/// Within one playthrough the flow only moves forward: `Idle` → `Intro` →
/// `Projecting` → `WallUpdated`. The one exception is the tap gesture, which
/// may force the flow back to `Intro` at any time to restart the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    /// Nothing is happening; waiting for the first tap.
    #[default]
    Idle,
    /// The assistant greets the user and asks for confirmation.
    Intro,
    /// The doodle projectile is flying toward the wall.
    Projecting,
    /// The wall art has been swapped and the celebration plays.
    WallUpdated,
}

impl FlowState {
    /// Returns the next phase in playthrough order, or `None` once the
    /// narrative has finished.
    #[must_use]
    pub fn playthrough_successor(self) -> Option<FlowState> {
        match self {
            FlowState::Idle => Some(FlowState::Intro),
            FlowState::Intro => Some(FlowState::Projecting),
            FlowState::Projecting => Some(FlowState::WallUpdated),
            FlowState::WallUpdated => None,
        }
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowState::Idle => "idle",
            FlowState::Intro => "intro",
            FlowState::Projecting => "projecting",
            FlowState::WallUpdated => "wall_updated",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flow_state_is_idle() {
        assert_eq!(FlowState::default(), FlowState::Idle);
    }

    #[test]
    fn test_playthrough_order_visits_every_phase_once() {
        // Arrange
        let mut state = FlowState::Idle;
        let mut visited = vec![state];

        // Act
        while let Some(next) = state.playthrough_successor() {
            state = next;
            visited.push(state);
        }

        // Assert
        assert_eq!(
            visited,
            vec![
                FlowState::Idle,
                FlowState::Intro,
                FlowState::Projecting,
                FlowState::WallUpdated,
            ]
        );
    }

    #[test]
    fn test_wall_updated_is_terminal() {
        assert_eq!(FlowState::WallUpdated.playthrough_successor(), None);
    }
}
