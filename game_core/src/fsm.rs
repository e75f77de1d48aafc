//! Pong state machine
//!
//! A game starts idle and runs once started. There is no pause and no way
//! back to idle short of building a new game.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PongState {
    #[default]
    Idle,
    Running,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongAction {
    Start,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: PongState,
    pub to_state: PongState,
    pub action: Option<PongAction>,
}

/// Pong finite state machine
#[derive(Debug, Clone, Default)]
pub struct PongFsm {
    state: PongState,
}

impl PongFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PongState {
        self.state
    }

    /// Current state as string (for JS interop)
    pub fn state_string(&self) -> &'static str {
        match self.state {
            PongState::Idle => "idle",
            PongState::Running => "running",
        }
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: PongAction) -> TransitionResult {
        let from_state = self.state;
        let to_state = self.next_state(action).unwrap_or(from_state);
        self.state = to_state;
        TransitionResult {
            success: to_state != from_state,
            from_state,
            to_state,
            action: Some(action),
        }
    }

    fn next_state(&self, action: PongAction) -> Option<PongState> {
        match (self.state, action) {
            (PongState::Idle, PongAction::Start) => Some(PongState::Running),
            // Already running
            (PongState::Running, PongAction::Start) => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == PongState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = PongFsm::new();
        assert_eq!(fsm.state(), PongState::Idle);
        assert!(!fsm.is_running());
    }

    #[test]
    fn test_start() {
        let mut fsm = PongFsm::new();
        let result = fsm.transition(PongAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, PongState::Idle);
        assert_eq!(result.to_state, PongState::Running);
        assert!(fsm.is_running());
    }

    #[test]
    fn test_start_twice_rejected() {
        let mut fsm = PongFsm::new();
        fsm.transition(PongAction::Start);
        let result = fsm.transition(PongAction::Start);
        assert!(!result.success);
        assert_eq!(fsm.state(), PongState::Running);
    }

    #[test]
    fn test_state_string() {
        let mut fsm = PongFsm::new();
        assert_eq!(fsm.state_string(), "idle");
        fsm.transition(PongAction::Start);
        assert_eq!(fsm.state_string(), "running");
    }
}
