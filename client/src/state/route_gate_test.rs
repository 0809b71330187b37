use super::*;

#[test]
fn starts_resolving_without_routes() {
    let gate = RouteGate::default();
    assert_eq!(gate, RouteGate::Resolving);
    assert!(!gate.shows_routes());
}

#[test]
fn initial_is_resolving_except_for_route_discovery() {
    assert_eq!(RouteGate::initial(false), RouteGate::Resolving);
    assert_eq!(RouteGate::initial(true), RouteGate::Routes);
}

#[test]
fn handoff_fragment_mounts_only_the_callback() {
    let gate = RouteGate::from_fragment("#session_id=abc123");
    assert_eq!(gate, RouteGate::Callback);
    assert!(!gate.shows_routes());
}

#[test]
fn plain_fragment_mounts_routes() {
    assert_eq!(RouteGate::from_fragment(""), RouteGate::Routes);
    assert_eq!(RouteGate::from_fragment("#reviews"), RouteGate::Routes);
    assert!(RouteGate::from_fragment("").shows_routes());
}

#[test]
fn empty_session_id_still_goes_through_callback() {
    assert_eq!(RouteGate::from_fragment("#session_id="), RouteGate::Callback);
    assert_eq!(oauth::handoff_token("#session_id="), None);
}

#[test]
fn completing_callback_resumes_routing() {
    let gate = RouteGate::from_fragment("#session_id=abc123").complete_callback();
    assert_eq!(gate, RouteGate::Routes);
    assert!(gate.shows_routes());
}

#[test]
fn completing_outside_callback_is_a_no_op() {
    assert_eq!(RouteGate::Resolving.complete_callback(), RouteGate::Resolving);
    assert_eq!(RouteGate::Routes.complete_callback(), RouteGate::Routes);
}
