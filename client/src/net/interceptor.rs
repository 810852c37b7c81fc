//! Response-error interceptors attached to the REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route layouts install handlers that observe every failed API response
//! (for example the auth interceptor that reacts to 401s) and eject them on
//! unmount. The browser runs a single thread, so the registry is
//! thread-local.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::api::ApiError;

/// Handle returned by [`install`] and accepted by [`eject`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InterceptorId(u64);

type Handler = Rc<dyn Fn(&ApiError)>;

/// Ordered set of installed handlers.
#[derive(Default)]
pub struct InterceptorRegistry {
    next_id: u64,
    handlers: Vec<(InterceptorId, Handler)>,
}

impl InterceptorRegistry {
    pub fn install(&mut self, handler: impl Fn(&ApiError) + 'static) -> InterceptorId {
        let id = InterceptorId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Rc::new(handler)));
        id
    }

    /// Remove a handler. Unknown ids are ignored.
    pub fn eject(&mut self, id: InterceptorId) {
        self.handlers.retain(|(existing, _)| *existing != id);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn snapshot(&self) -> Vec<Handler> {
        self.handlers.iter().map(|(_, h)| Rc::clone(h)).collect()
    }
}

thread_local! {
    static REGISTRY: RefCell<InterceptorRegistry> = RefCell::new(InterceptorRegistry::default());
}

/// Install a handler on the shared client.
pub fn install(handler: impl Fn(&ApiError) + 'static) -> InterceptorId {
    REGISTRY.with(|r| r.borrow_mut().install(handler))
}

pub fn eject(id: InterceptorId) {
    REGISTRY.with(|r| r.borrow_mut().eject(id));
}

/// Run every installed handler, in install order, for a failed response.
///
/// Handlers run outside the registry borrow so they may install or eject.
pub fn dispatch(error: &ApiError) {
    let handlers = REGISTRY.with(|r| r.borrow().snapshot());
    for handler in handlers {
        handler(error);
    }
}
