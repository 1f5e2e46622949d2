// ABOUTME: Toast presenter that mounts a unit per request and schedules its teardown
// Each presentation owns one container on the surface for exactly the requested duration

pub mod handle;

pub use handle::{ToastGuard, ToastHandle};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::debug;

use crate::components::{PresentationUnit, ToastComponent, DEFAULT_TOAST_WIDTH};
use crate::models::ToastRequest;
use crate::surface::{Surface, ToastError};

/// Shortest lifetime a toast can have; durations travel as whole milliseconds.
pub const MIN_DURATION: Duration = Duration::from_millis(1);

/// Builds the visual unit for a request.
pub type UnitFactory = Arc<dyn Fn(&ToastRequest) -> Box<dyn PresentationUnit> + Send + Sync>;

#[derive(Clone)]
pub struct Presenter {
    surface: Surface,
    factory: UnitFactory,
}

impl Presenter {
    /// Presenter that mounts the bundled [`ToastComponent`].
    pub fn new(surface: Surface) -> Self {
        Self::with_width(surface, DEFAULT_TOAST_WIDTH)
    }

    pub fn with_width(surface: Surface, width: u16) -> Self {
        Self::with_factory(surface, move |request: &ToastRequest| {
            Box::new(ToastComponent::with_width(request.clone(), width)) as Box<dyn PresentationUnit>
        })
    }

    pub fn with_factory<F>(surface: Surface, factory: F) -> Self
    where
        F: Fn(&ToastRequest) -> Box<dyn PresentationUnit> + Send + Sync + 'static,
    {
        Self {
            surface,
            factory: Arc::new(factory),
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mount a toast for `request` and schedule its removal after `request.duration`.
    ///
    /// The toast is mounted when this returns. Must be called from within a
    /// tokio runtime with timers enabled, which runs the teardown. A runtime
    /// without `enable_time` panics before the surface is touched.
    pub fn present(&self, request: ToastRequest) -> Result<ToastHandle, ToastError> {
        if request.duration < MIN_DURATION {
            return Err(ToastError::InvalidDuration);
        }
        let runtime = Handle::try_current().map_err(|_| ToastError::NoRuntime)?;

        // Deadline is fixed here, not when the task is first polled
        let expiry = tokio::time::sleep(request.duration);

        let id = self.surface.append_container()?;
        let unit = (self.factory)(&request);
        if let Err(e) = self.surface.mount(id, unit) {
            self.surface.teardown(id);
            return Err(e);
        }
        debug!(
            "Presented {} toast {} at {} for {:?}",
            request.kind, id, request.position, request.duration
        );

        let surface = self.surface.clone();
        let teardown_task = runtime.spawn(async move {
            expiry.await;
            surface.teardown(id);
        });

        Ok(ToastHandle::new(id, request, self.surface.clone(), teardown_task))
    }
}

impl fmt::Debug for Presenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presenter")
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}

/// Show `request` on `surface` with the bundled toast component.
pub fn show_toast(surface: &Surface, request: ToastRequest) -> Result<ToastHandle, ToastError> {
    Presenter::new(surface.clone()).present(request)
}
