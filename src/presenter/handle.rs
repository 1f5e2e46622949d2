// ABOUTME: Owned handles for presented toasts
// A handle can dismiss its toast early; a guard dismisses it when dropped

use tokio::task::JoinHandle;
use tracing::debug;

use crate::models::{ToastId, ToastRequest};
use crate::surface::Surface;

/// Handle to one presented toast.
///
/// Dropping the handle detaches it: the scheduled teardown still runs.
#[derive(Debug)]
pub struct ToastHandle {
    id: ToastId,
    request: ToastRequest,
    surface: Surface,
    teardown_task: JoinHandle<()>,
}

impl ToastHandle {
    pub(crate) fn new(
        id: ToastId,
        request: ToastRequest,
        surface: Surface,
        teardown_task: JoinHandle<()>,
    ) -> Self {
        Self {
            id,
            request,
            surface,
            teardown_task,
        }
    }

    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn request(&self) -> &ToastRequest {
        &self.request
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.contains(self.id)
    }

    /// Cancel the scheduled teardown and remove the toast now.
    ///
    /// Returns `false` if the toast was already gone.
    pub fn dismiss(self) -> bool {
        self.cancel()
    }

    fn cancel(&self) -> bool {
        self.teardown_task.abort();
        let removed = self.surface.teardown(self.id);
        if removed {
            debug!("Dismissed toast {} early", self.id);
        }
        removed
    }

    /// Tie the toast's lifetime to a scope.
    pub fn into_guard(self) -> ToastGuard {
        ToastGuard { handle: self }
    }
}

/// Dismisses its toast when dropped, unless the timer got there first.
#[derive(Debug)]
pub struct ToastGuard {
    handle: ToastHandle,
}

impl ToastGuard {
    pub fn id(&self) -> ToastId {
        self.handle.id()
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_mounted()
    }
}

impl Drop for ToastGuard {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}
