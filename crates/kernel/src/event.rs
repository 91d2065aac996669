use std::fmt;

/// Error returned by an event listener. Propagates out of [`Event::fire`].
#[derive(Debug, thiserror::Error)]
#[error("listener failed: {0}")]
pub struct ListenerError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

impl ListenerError {
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self(message.into())
    }
}

type Listener<A> = Box<dyn FnMut(&A) -> Result<(), ListenerError>>;

/// Multicast notification: listeners run synchronously, in registration
/// order. The first failing listener stops the fire and its error is returned;
/// later listeners do not run for that call.
pub struct Event<A> {
    listeners: Vec<Listener<A>>,
}

impl<A> Event<A> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn register(&mut self, listener: impl FnMut(&A) -> Result<(), ListenerError> + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn fire(&mut self, args: &A) -> Result<(), ListenerError> {
        for listener in &mut self.listeners {
            listener(args)?;
        }
        Ok(())
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<A> Default for Event<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Event<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
