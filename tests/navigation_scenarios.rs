// End-to-end navigation scenarios

use orbit_nav::focus::{
    use_ids, ActiveElementRegistry, CandidateSet, RecordingAdapter, VisibilityAdapter,
};
use orbit_nav::keyboard::{ArrowKeyNavigation, DispatchOptions, KeyHandlers, KeyboardEvent};
use orbit_nav::state::{use_sync_state, SetValue};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn nav(ids: &[&str], active: Option<&str>) -> ArrowKeyNavigation {
    ArrowKeyNavigation::new(CandidateSet::new(ids.iter().copied()).unwrap(), active)
}

fn press<A: VisibilityAdapter>(nav: &mut ArrowKeyNavigation<A>, key: &str) -> KeyboardEvent {
    let mut event = KeyboardEvent::new(key);
    nav.handle_key_down(&mut event);
    event
}

#[test]
fn test_down_down_up_up_scenario() {
    let mut nav = nav(&["r1", "r2", "r3"], None);

    press(&mut nav, "ArrowDown");
    assert_eq!(nav.active_element_id(), Some("r1"));
    press(&mut nav, "ArrowDown");
    assert_eq!(nav.active_element_id(), Some("r2"));
    press(&mut nav, "ArrowUp");
    assert_eq!(nav.active_element_id(), Some("r1"));
    press(&mut nav, "ArrowUp");
    assert_eq!(nav.active_element_id(), Some("r3"));
}

#[test]
fn test_full_cycle_returns_to_start() {
    let ids = ["a", "b", "c", "d", "e"];
    for start in ids {
        let mut nav = nav(&ids, Some(start));
        for _ in 0..ids.len() {
            assert!(press(&mut nav, "ArrowRight").is_default_prevented());
        }
        assert_eq!(nav.active_element_id(), Some(start));
    }
}

#[test]
fn test_reset_on_shrink() {
    let mut nav = nav(&["a", "b", "c"], Some("b"));
    nav.set_ids(["x", "y"]).unwrap();
    assert_eq!(nav.active_element_id(), Some("x"));
}

#[test]
fn test_empty_set_is_safe() {
    let mut nav = nav(&[], None);
    for key in ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight"] {
        let event = press(&mut nav, key);
        assert!(!event.is_default_prevented());
        assert_eq!(nav.active_element_id(), None);
    }
}

#[test]
fn test_callback_veto_and_passthrough() {
    let mut vetoing = nav(&["a", "b"], Some("a")).with_callback(|_| Some(false));
    let event = press(&mut vetoing, "ArrowDown");
    assert!(!event.is_default_prevented());
    assert_eq!(vetoing.active_element_id(), Some("a"));

    for verdict in [Some(true), None] {
        let mut allowing = nav(&["a", "b"], Some("a")).with_callback(move |_| verdict);
        let event = press(&mut allowing, "ArrowDown");
        assert!(event.is_default_prevented());
        assert_eq!(allowing.active_element_id(), Some("b"));
    }
}

#[test]
fn test_callback_can_stop_at_edges() {
    // A non-wrapping list: refuse any step that would wrap around
    let mut nav = nav(&["a", "b", "c"], Some("b")).with_callback(|params| {
        let wrapped = (params.increment > 0 && params.active_element_id == "a")
            || (params.increment < 0 && params.active_element_id == "c");
        Some(!wrapped)
    });

    press(&mut nav, "ArrowDown");
    press(&mut nav, "ArrowDown");
    assert_eq!(nav.active_element_id(), Some("c"));
}

#[test]
fn test_mirror_consistency() {
    let initial = 4;
    let (_, set_value) = use_sync_state(initial, None);
    for _ in 0..3 {
        set_value.set_value(SetValue::update(|prev: &i32| prev + 1));
    }
    assert_eq!(set_value.current(), initial + 3);
}

#[test]
fn test_id_synthesis() {
    let items = vec![json!({}), json!({ "id": "explicit" }), json!({})];
    let ids: Vec<String> = use_ids("menu", &items).into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec!["menu-item-0", "explicit", "menu-item-2"]);
}

#[test]
fn test_scroll_follows_navigation() {
    let adapter = RecordingAdapter::new();
    let mut nav = ArrowKeyNavigation::with_adapter(
        CandidateSet::new(["a", "b", "c"]).unwrap(),
        None,
        adapter.clone(),
    );
    press(&mut nav, "ArrowDown");
    press(&mut nav, "ArrowDown");
    nav.clear();
    assert_eq!(adapter.scrolled_ids(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_registry_and_key_handlers_together() {
    // A widget wiring Escape through the key map and arrows through the router
    let registry = std::rc::Rc::new(std::cell::RefCell::new(ActiveElementRegistry::new(
        CandidateSet::new(["a", "b"]).unwrap(),
        Some("a"),
    )));
    let closer = registry.clone();
    let mut handlers = KeyHandlers::new().on("Escape", move |_| closer.borrow_mut().clear());

    let mut escape = KeyboardEvent::new("Escape");
    assert!(handlers.dispatch(&mut escape, DispatchOptions::default()));
    assert!(escape.is_default_prevented());
    assert_eq!(registry.borrow().active_element_id(), None);
}

#[test]
fn test_arrow_handlers_share_a_key_map() {
    let nav = Rc::new(RefCell::new(nav(&["a", "b", "c"], None)));
    let closer = nav.clone();
    let mut handlers = ArrowKeyNavigation::bind_into(
        &nav,
        KeyHandlers::new().on("Escape", move |_| closer.borrow_mut().clear()),
    );

    for key in ["ArrowDown", "ArrowDown", "ArrowUp"] {
        let mut event = KeyboardEvent::new(key);
        assert!(handlers.dispatch(&mut event, DispatchOptions::PASSIVE));
        assert!(event.is_default_prevented());
    }
    assert_eq!(nav.borrow().active_element_id(), Some("a"));

    let mut escape = KeyboardEvent::new("Escape");
    assert!(handlers.dispatch(&mut escape, DispatchOptions::default()));
    assert_eq!(nav.borrow().active_element_id(), None);
}
