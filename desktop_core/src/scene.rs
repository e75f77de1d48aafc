//! Landing page / desktop state machine

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scene {
    #[default]
    Landing,
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneAction {
    Enter,
    ReturnToLanding,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: Scene,
    pub to_state: Scene,
    pub action: Option<SceneAction>,
}

#[derive(Debug, Clone, Default)]
pub struct SceneFsm {
    state: Scene,
}

impl SceneFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Scene {
        self.state
    }

    pub fn transition(&mut self, action: SceneAction) -> TransitionResult {
        let from_state = self.state;
        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action: Some(action),
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action: Some(action),
            },
        }
    }

    fn next_state(&self, action: SceneAction) -> Option<Scene> {
        match (self.state, action) {
            (Scene::Landing, SceneAction::Enter) => Some(Scene::Desktop),
            (Scene::Desktop, SceneAction::ReturnToLanding) => Some(Scene::Landing),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_return() {
        let mut fsm = SceneFsm::new();
        assert_eq!(fsm.state(), Scene::Landing);
        assert!(fsm.transition(SceneAction::Enter).success);
        assert_eq!(fsm.state(), Scene::Desktop);
        assert!(fsm.transition(SceneAction::ReturnToLanding).success);
        assert_eq!(fsm.state(), Scene::Landing);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut fsm = SceneFsm::new();
        assert!(!fsm.transition(SceneAction::ReturnToLanding).success);
        fsm.transition(SceneAction::Enter);
        let result = fsm.transition(SceneAction::Enter);
        assert!(!result.success);
        assert_eq!(result.to_state, Scene::Desktop);
    }
}
