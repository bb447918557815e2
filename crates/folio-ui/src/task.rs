//! Single-occupancy async tasks
//!
//! Each triggering element (a form, the project container) owns one
//! [`TaskSlot`]. Spawning into an occupied slot aborts the previous future,
//! so only the latest submission can touch the UI.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, abortable};
use wasm_bindgen_futures::spawn_local;

/// Holder for at most one running local task
#[derive(Debug, Clone, Default)]
pub struct TaskSlot {
    current: Rc<RefCell<Option<AbortHandle>>>,
}

impl TaskSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort whatever is running and spawn `future` in its place.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let (task, handle) = abortable(future);
        if let Some(previous) = self.current.borrow_mut().replace(handle) {
            tracing::debug!("superseding in-flight task");
            previous.abort();
        }
        spawn_local(async move {
            // Aborted futures resolve to Err(Aborted); nothing to do either way.
            let _ = task.await;
        });
    }

    /// Abort the running task, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.current.borrow_mut().take() {
            handle.abort();
        }
    }
}
