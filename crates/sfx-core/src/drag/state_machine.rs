//! Drag session state machine.
//!
//! Defines a pure state transition function for one card's
//! hover → prefetch → drag lifecycle.

use serde::Serialize;

use super::DragTarget;
use crate::ids::SessionId;

/// Card drag state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer is over the card; hover debounce pending.
    Hovering,
    /// Debounce elapsed; prefetch scheduled or done.
    Armed,
    Dragging { session_id: SessionId },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        match self {
            DragState::Dragging { session_id } => Some(session_id),
            _ => None,
        }
    }
}

/// Events that drive a card's drag state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    PointerEnter,
    PointerLeave,
    /// Hover debounce timer fired.
    DebounceElapsed,
    /// Native drag gesture started. `session_id` is minted by the caller.
    DragStart {
        target: DragTarget,
        session_id: SessionId,
    },
    /// Drop or cancel; the two are not distinguished.
    DragEnd,
    /// Card removed from the view.
    Teardown,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragAction {
    StartDebounce,
    CancelDebounce,
    ArmPrefetch,
    CancelPrefetch,
    /// Drop the held prefetch entry and release every pending task.
    ReleaseCache,
    /// Suppress the host's default drag behavior; no payload is installed.
    PreventNativeDrag,
    /// Resolve, build and install the payload, then render the drag image.
    BeginExport { session_id: SessionId },
    EndSession { session_id: SessionId },
}

/// Pure drag state machine: no side effects.
pub struct DragStateMachine;

impl DragStateMachine {
    pub fn transition(state: DragState, event: DragEvent) -> (DragState, Vec<DragAction>) {
        match (state, event) {
            (DragState::Dragging { session_id }, DragEvent::Teardown) => (
                DragState::Idle,
                vec![
                    DragAction::CancelDebounce,
                    DragAction::EndSession { session_id },
                    DragAction::ReleaseCache,
                ],
            ),
            (_, DragEvent::Teardown) => (
                DragState::Idle,
                vec![DragAction::CancelDebounce, DragAction::ReleaseCache],
            ),
            (DragState::Idle, DragEvent::PointerEnter) => {
                (DragState::Hovering, vec![DragAction::StartDebounce])
            }
            (DragState::Hovering, DragEvent::DebounceElapsed) => {
                (DragState::Armed, vec![DragAction::ArmPrefetch])
            }
            (DragState::Hovering | DragState::Armed, DragEvent::PointerLeave) => (
                DragState::Idle,
                vec![DragAction::CancelDebounce, DragAction::CancelPrefetch],
            ),
            (state, DragEvent::DragStart { target, .. }) if target.is_interactive() => {
                (state, vec![DragAction::PreventNativeDrag])
            }
            (DragState::Dragging { session_id: stale }, DragEvent::DragStart { session_id, .. }) => (
                DragState::Dragging {
                    session_id: session_id.clone(),
                },
                vec![
                    DragAction::EndSession { session_id: stale },
                    DragAction::BeginExport { session_id },
                ],
            ),
            (_, DragEvent::DragStart { session_id, .. }) => (
                DragState::Dragging {
                    session_id: session_id.clone(),
                },
                vec![
                    DragAction::CancelDebounce,
                    DragAction::CancelPrefetch,
                    DragAction::BeginExport { session_id },
                ],
            ),
            (DragState::Dragging { session_id }, DragEvent::DragEnd) => {
                (DragState::Idle, vec![DragAction::EndSession { session_id }])
            }
            (state, _) => (state, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::ElementRole;

    fn start(target: DragTarget, id: &str) -> DragEvent {
        DragEvent::DragStart {
            target,
            session_id: SessionId::from(id),
        }
    }

    fn dragging(id: &str) -> DragState {
        DragState::Dragging {
            session_id: SessionId::from(id),
        }
    }

    #[test]
    fn test_hover_then_debounce_arms_prefetch() {
        let (state, actions) = DragStateMachine::transition(DragState::Idle, DragEvent::PointerEnter);
        assert_eq!(state, DragState::Hovering);
        assert_eq!(actions, vec![DragAction::StartDebounce]);

        let (state, actions) = DragStateMachine::transition(state, DragEvent::DebounceElapsed);
        assert_eq!(state, DragState::Armed);
        assert_eq!(actions, vec![DragAction::ArmPrefetch]);
    }

    #[test]
    fn test_pointer_leave_cancels_pending_work() {
        for from in [DragState::Hovering, DragState::Armed] {
            let (state, actions) = DragStateMachine::transition(from, DragEvent::PointerLeave);
            assert_eq!(state, DragState::Idle);
            assert_eq!(
                actions,
                vec![DragAction::CancelDebounce, DragAction::CancelPrefetch]
            );
        }
    }

    #[test]
    fn test_drag_start_from_card_begins_export() {
        for from in [DragState::Idle, DragState::Hovering, DragState::Armed] {
            let (state, actions) =
                DragStateMachine::transition(from, start(DragTarget::card(), "s1"));
            assert_eq!(state, dragging("s1"));
            assert_eq!(
                actions.last(),
                Some(&DragAction::BeginExport {
                    session_id: SessionId::from("s1")
                })
            );
        }
    }

    #[test]
    fn test_drag_start_inside_control_is_suppressed() {
        let target = DragTarget::new([ElementRole::Slider, ElementRole::Card]);
        for from in [DragState::Idle, DragState::Hovering, DragState::Armed, dragging("s0")] {
            let (state, actions) =
                DragStateMachine::transition(from.clone(), start(target.clone(), "s1"));
            assert_eq!(state, from);
            assert_eq!(actions, vec![DragAction::PreventNativeDrag]);
        }
    }

    #[test]
    fn test_drag_end_returns_to_idle() {
        let (state, actions) = DragStateMachine::transition(dragging("s1"), DragEvent::DragEnd);
        assert_eq!(state, DragState::Idle);
        assert_eq!(
            actions,
            vec![DragAction::EndSession {
                session_id: SessionId::from("s1")
            }]
        );
    }

    #[test]
    fn test_new_drag_start_supersedes_stale_session() {
        let (state, actions) =
            DragStateMachine::transition(dragging("old"), start(DragTarget::card(), "new"));
        assert_eq!(state, dragging("new"));
        assert_eq!(
            actions,
            vec![
                DragAction::EndSession {
                    session_id: SessionId::from("old")
                },
                DragAction::BeginExport {
                    session_id: SessionId::from("new")
                },
            ]
        );
    }

    #[test]
    fn test_teardown_from_any_state_goes_idle_and_releases_cache() {
        for from in [
            DragState::Idle,
            DragState::Hovering,
            DragState::Armed,
            dragging("s1"),
        ] {
            let was_dragging = from.is_dragging();
            let (state, actions) = DragStateMachine::transition(from, DragEvent::Teardown);
            assert_eq!(state, DragState::Idle);
            assert_eq!(actions.first(), Some(&DragAction::CancelDebounce));
            assert_eq!(actions.last(), Some(&DragAction::ReleaseCache));
            assert_eq!(
                actions
                    .iter()
                    .any(|a| matches!(a, DragAction::EndSession { .. })),
                was_dragging
            );
        }
    }

    #[test]
    fn test_unlisted_events_are_ignored() {
        let cases = [
            (DragState::Idle, DragEvent::DebounceElapsed),
            (DragState::Idle, DragEvent::PointerLeave),
            (DragState::Idle, DragEvent::DragEnd),
            (DragState::Hovering, DragEvent::PointerEnter),
            (DragState::Armed, DragEvent::DebounceElapsed),
            (DragState::Armed, DragEvent::DragEnd),
            (dragging("s1"), DragEvent::PointerEnter),
            (dragging("s1"), DragEvent::PointerLeave),
            (dragging("s1"), DragEvent::DebounceElapsed),
        ];
        for (from, event) in cases {
            let (state, actions) = DragStateMachine::transition(from.clone(), event.clone());
            assert_eq!(state, from, "{event:?}");
            assert!(actions.is_empty(), "{event:?}");
        }
    }
}
