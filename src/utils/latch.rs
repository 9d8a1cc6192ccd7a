//! Counted completion
//!
//! Runs a continuation once a known number of signals have arrived. Built
//! for the single-threaded wasm event loop, so state lives in `Cell`s.

use std::cell::{Cell, RefCell};
use std::fmt;

/// Fires its continuation exactly once, after `count` arrivals
pub struct CompletionLatch {
    remaining: Cell<usize>,
    on_complete: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl CompletionLatch {
    /// Create a latch waiting for `count` signals. With `count == 0` the
    /// continuation runs before this returns.
    pub fn new(count: usize, on_complete: impl FnOnce() + 'static) -> Self {
        let latch = Self {
            remaining: Cell::new(count),
            on_complete: RefCell::new(Some(Box::new(on_complete))),
        };
        if count == 0 {
            latch.fire();
        }
        latch
    }

    /// Record one signal. Arrivals past zero are ignored.
    pub fn arrive(&self) {
        match self.remaining.get() {
            0 => {}
            1 => {
                self.remaining.set(0);
                self.fire();
            }
            n => self.remaining.set(n - 1),
        }
    }

    /// Signals still outstanding
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }

    /// True once the continuation has run
    pub fn is_released(&self) -> bool {
        self.on_complete.borrow().is_none()
    }

    fn fire(&self) {
        // Take before calling so a re-entrant arrive() finds nothing to run
        let continuation = self.on_complete.borrow_mut().take();
        if let Some(continuation) = continuation {
            continuation();
        }
    }
}

impl fmt::Debug for CompletionLatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionLatch")
            .field("remaining", &self.remaining.get())
            .field("released", &self.is_released())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<usize>>, impl FnOnce() + 'static) {
        let fired = Rc::new(Cell::new(0));
        let handle = fired.clone();
        (fired, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn test_zero_count_fires_immediately() {
        let (fired, on_complete) = counter();
        let latch = CompletionLatch::new(0, on_complete);
        assert_eq!(fired.get(), 1);
        assert!(latch.is_released());
    }

    #[test]
    fn test_fires_on_last_arrival_only() {
        let (fired, on_complete) = counter();
        let latch = CompletionLatch::new(3, on_complete);

        latch.arrive();
        latch.arrive();
        assert_eq!(fired.get(), 0);
        assert_eq!(latch.remaining(), 1);

        latch.arrive();
        assert_eq!(fired.get(), 1);
        assert!(latch.is_released());
    }

    #[test]
    fn test_extra_arrivals_do_not_refire() {
        let (fired, on_complete) = counter();
        let latch = CompletionLatch::new(1, on_complete);

        latch.arrive();
        latch.arrive();
        latch.arrive();

        assert_eq!(fired.get(), 1);
        assert_eq!(latch.remaining(), 0);
    }

    #[test]
    fn test_reentrant_arrival_is_harmless() {
        let fired = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Rc<CompletionLatch>>>> = Rc::new(RefCell::new(None));

        let (inner_fired, inner_slot) = (fired.clone(), slot.clone());
        let latch = Rc::new(CompletionLatch::new(1, move || {
            inner_fired.set(inner_fired.get() + 1);
            if let Some(latch) = inner_slot.borrow().as_ref() {
                latch.arrive();
            }
        }));
        *slot.borrow_mut() = Some(latch.clone());

        latch.arrive();
        assert_eq!(fired.get(), 1);

        // break the cycle
        slot.borrow_mut().take();
    }
}
