use std::{fmt, rc::Rc};

use crate::{Envelope, Payload};

/// Handler invoked when a participant dispatches a matching envelope.
///
/// A receiver gets mutable access to the participant that owns it together with
/// the envelope being dispatched. Handles are reference counted: keep a clone
/// around to [`unregister`](crate::Dispatcher::unregister) it later. Two handles
/// are the same receiver only if one was cloned from the other.
pub struct Receiver<T, P: Payload = ()> {
    handler: Rc<dyn Fn(&mut T, &Envelope<P>)>,
}

impl<T, P: Payload> Receiver<T, P> {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&mut T, &Envelope<P>) + 'static,
    {
        Self {
            handler: Rc::new(handler),
        }
    }

    /// Identity comparison.
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.handler, &other.handler)
    }

    #[inline]
    pub(crate) fn invoke(&self, target: &mut T, envelope: &Envelope<P>) {
        (self.handler)(target, envelope)
    }
}

impl<T, P: Payload> Clone for Receiver<T, P> {
    fn clone(&self) -> Self {
        Self {
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<T, P: Payload> fmt::Debug for Receiver<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Receiver({:p})", Rc::as_ptr(&self.handler))
    }
}
