use std::cell::Cell;

use super::*;

fn unauthorized() -> ApiError {
    ApiError::Status { status: 401, message: None }
}

#[test]
fn registry_runs_handlers_in_install_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut registry = InterceptorRegistry::default();
    let first = Rc::clone(&seen);
    registry.install(move |_| first.borrow_mut().push("first"));
    let second = Rc::clone(&seen);
    registry.install(move |_| second.borrow_mut().push("second"));

    for handler in registry.snapshot() {
        handler(&unauthorized());
    }
    assert_eq!(*seen.borrow(), vec!["first", "second"]);
}

#[test]
fn registry_eject_removes_only_that_handler() {
    let mut registry = InterceptorRegistry::default();
    let a = registry.install(|_| {});
    let _b = registry.install(|_| {});
    registry.eject(a);
    assert_eq!(registry.len(), 1);
}

#[test]
fn registry_eject_unknown_id_is_noop() {
    let mut registry = InterceptorRegistry::default();
    let id = registry.install(|_| {});
    registry.eject(id);
    registry.eject(id);
    assert!(registry.is_empty());
}

#[test]
fn registry_ids_are_not_reused() {
    let mut registry = InterceptorRegistry::default();
    let a = registry.install(|_| {});
    registry.eject(a);
    let b = registry.install(|_| {});
    assert_ne!(a, b);
}

#[test]
fn dispatch_reaches_installed_handler_until_ejected() {
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    let id = install(move |err| {
        if err.status() == Some(401) {
            counter.set(counter.get() + 1);
        }
    });
    dispatch(&unauthorized());
    dispatch(&ApiError::Network("offline".to_owned()));
    assert_eq!(hits.get(), 1);

    eject(id);
    dispatch(&unauthorized());
    assert_eq!(hits.get(), 1);
}

#[test]
fn handler_may_eject_itself_during_dispatch() {
    let slot: Rc<Cell<Option<InterceptorId>>> = Rc::new(Cell::new(None));
    let hits = Rc::new(Cell::new(0));
    let slot_in = Rc::clone(&slot);
    let hits_in = Rc::clone(&hits);
    let id = install(move |_| {
        hits_in.set(hits_in.get() + 1);
        if let Some(id) = slot_in.get() {
            eject(id);
        }
    });
    slot.set(Some(id));
    dispatch(&unauthorized());
    dispatch(&unauthorized());
    assert_eq!(hits.get(), 1);
}
