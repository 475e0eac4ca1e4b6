use solpair_core::ActionPhase;

#[test]
fn only_in_flight_disables_a_button() {
    assert!(!ActionPhase::Idle.is_in_flight());
    assert!(ActionPhase::InFlight.is_in_flight());
    assert!(!ActionPhase::Succeeded.is_in_flight());
    assert!(!ActionPhase::Failed.is_in_flight());
}

#[test]
fn settled_phases_are_terminal() {
    assert!(!ActionPhase::Idle.is_settled());
    assert!(!ActionPhase::InFlight.is_settled());
    assert!(ActionPhase::Succeeded.is_settled());
    assert!(ActionPhase::Failed.is_settled());
}

#[test]
fn default_phase_is_idle() {
    assert_eq!(ActionPhase::default(), ActionPhase::Idle);
}
