use std::fmt;

/// A completion handler that may be unset and runs at most once.
#[derive(Default)]
pub struct Completion(Option<Box<dyn FnOnce()>>);

impl Completion {
    pub fn new(handler: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(handler)))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    /// Runs the handler if it has not run yet. Returns whether it ran.
    pub fn fire(&mut self) -> bool {
        match self.0.take() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Completion")
            .field(&if self.is_pending() { "pending" } else { "spent" })
            .finish()
    }
}
