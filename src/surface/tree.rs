// ABOUTME: Shared rendering surface holding one mount point per live toast
// Mount points are appended in order and drawn over the terminal frame each render pass

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ratatui::{buffer::Buffer, layout::Rect};
use tracing::debug;

use super::ToastError;
use crate::components::PresentationUnit;
use crate::models::ToastId;

struct MountPoint {
    id: ToastId,
    unit: Option<Box<dyn PresentationUnit>>,
}

#[derive(Default)]
struct SurfaceState {
    closed: bool,
    mounts: Vec<MountPoint>,
    needs_redraw: bool,
}

impl SurfaceState {
    fn position(&self, id: ToastId) -> Option<usize> {
        self.mounts.iter().position(|mount| mount.id == id)
    }
}

/// The tree toasts are mounted into.
///
/// Cloning is cheap and every clone refers to the same mount points, so a
/// scheduled teardown can own its own handle to the surface.
#[derive(Clone, Default)]
pub struct Surface {
    inner: Arc<Mutex<SurfaceState>>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, SurfaceState> {
        // Every critical section leaves the list consistent, so a poisoned lock is still usable
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Attach a new, empty container after all existing ones.
    pub fn append_container(&self) -> Result<ToastId, ToastError> {
        let mut state = self.state();
        if state.closed {
            return Err(ToastError::SurfaceClosed);
        }

        let id = ToastId::new();
        state.mounts.push(MountPoint { id, unit: None });
        debug!("Appended mount point {} ({} total)", id, state.mounts.len());
        Ok(id)
    }

    /// Bind a presentation unit to an empty container.
    pub fn mount(&self, id: ToastId, unit: Box<dyn PresentationUnit>) -> Result<(), ToastError> {
        let mut state = self.state();
        if state.closed {
            return Err(ToastError::SurfaceClosed);
        }

        let index = state
            .position(id)
            .ok_or(ToastError::MountPointNotFound(id))?;
        let mount = &mut state.mounts[index];
        if mount.unit.is_some() {
            return Err(ToastError::MountPointOccupied(id));
        }
        mount.unit = Some(unit);
        state.needs_redraw = true;
        debug!("Mounted toast {}", id);
        Ok(())
    }

    /// Destroy the unit mounted at `id`, then detach its container.
    ///
    /// Returns `false` when the container is already gone.
    pub fn teardown(&self, id: ToastId) -> bool {
        let mut state = self.state();
        let Some(index) = state.position(id) else {
            debug!("Teardown of {} skipped, mount point already removed", id);
            return false;
        };

        if let Some(mut unit) = state.mounts[index].unit.take() {
            unit.destroy();
        }
        state.mounts.remove(index);
        state.needs_redraw = true;
        debug!("Tore down toast {} ({} remaining)", id, state.mounts.len());
        true
    }

    /// Shut the surface down, destroying every mounted toast.
    ///
    /// Further `append_container` calls fail with [`ToastError::SurfaceClosed`].
    pub fn close(&self) {
        let mut state = self.state();
        state.closed = true;
        for mut mount in state.mounts.drain(..) {
            if let Some(unit) = mount.unit.as_mut() {
                unit.destroy();
            }
        }
        state.needs_redraw = true;
        debug!("Surface closed");
    }

    pub fn is_closed(&self) -> bool {
        self.state().closed
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.state().position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.state().mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().mounts.is_empty()
    }

    /// Mount point ids in insertion order.
    pub fn ids(&self) -> Vec<ToastId> {
        self.state().mounts.iter().map(|mount| mount.id).collect()
    }

    /// Whether anything was mounted or torn down since the last call.
    pub fn take_needs_redraw(&self) -> bool {
        std::mem::take(&mut self.state().needs_redraw)
    }

    /// Draw every mounted toast. Later toasts paint over earlier ones.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let state = self.state();
        for unit in state.mounts.iter().filter_map(|mount| mount.unit.as_ref()) {
            unit.render(area, buf);
        }
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("Surface")
            .field("closed", &state.closed)
            .field("mounts", &state.mounts.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::MockPresentationUnit;

    fn unit_destroyed_once() -> Box<dyn PresentationUnit> {
        let mut unit = MockPresentationUnit::new();
        unit.expect_destroy().times(1).return_const(());
        unit.expect_render().return_const(());
        Box::new(unit)
    }

    #[test]
    fn test_containers_are_appended_in_order() {
        let surface = Surface::new();
        let first = surface.append_container().unwrap();
        let second = surface.append_container().unwrap();
        assert_eq!(surface.ids(), vec![first, second]);
    }

    #[test]
    fn test_mount_requires_existing_container() {
        let surface = Surface::new();
        let missing = ToastId::new();
        let result = surface.mount(missing, Box::new(MockPresentationUnit::new()));
        assert_eq!(result, Err(ToastError::MountPointNotFound(missing)));
    }

    #[test]
    fn test_mount_rejects_occupied_container() {
        let surface = Surface::new();
        let id = surface.append_container().unwrap();
        surface.mount(id, unit_destroyed_once()).unwrap();

        let result = surface.mount(id, Box::new(MockPresentationUnit::new()));
        assert_eq!(result, Err(ToastError::MountPointOccupied(id)));

        assert!(surface.teardown(id));
    }

    #[test]
    fn test_teardown_destroys_then_detaches() {
        let surface = Surface::new();
        let id = surface.append_container().unwrap();
        surface.mount(id, unit_destroyed_once()).unwrap();
        assert!(surface.contains(id));

        assert!(surface.teardown(id));
        assert!(!surface.contains(id));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_second_teardown_is_noop() {
        let surface = Surface::new();
        let id = surface.append_container().unwrap();
        surface.mount(id, unit_destroyed_once()).unwrap();

        assert!(surface.teardown(id));
        assert!(!surface.teardown(id));
    }

    #[test]
    fn test_teardown_of_empty_container() {
        let surface = Surface::new();
        let id = surface.append_container().unwrap();
        assert!(surface.teardown(id));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_close_destroys_everything_and_rejects_new_containers() {
        let surface = Surface::new();
        for _ in 0..3 {
            let id = surface.append_container().unwrap();
            surface.mount(id, unit_destroyed_once()).unwrap();
        }

        surface.close();
        assert!(surface.is_closed());
        assert!(surface.is_empty());
        assert_eq!(surface.append_container(), Err(ToastError::SurfaceClosed));
    }

    #[test]
    fn test_redraw_flag_is_consumed() {
        let surface = Surface::new();
        assert!(!surface.take_needs_redraw());

        let id = surface.append_container().unwrap();
        surface.mount(id, unit_destroyed_once()).unwrap();
        assert!(surface.take_needs_redraw());
        assert!(!surface.take_needs_redraw());

        surface.teardown(id);
        assert!(surface.take_needs_redraw());
    }

    #[test]
    fn test_render_visits_mounted_units() {
        let surface = Surface::new();
        let id = surface.append_container().unwrap();
        let mut unit = MockPresentationUnit::new();
        unit.expect_render().times(2).return_const(());
        unit.expect_destroy().times(1).return_const(());
        surface.mount(id, Box::new(unit)).unwrap();

        // An empty container contributes nothing
        surface.append_container().unwrap();

        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        surface.render(area, &mut buf);
        surface.render(area, &mut buf);
        surface.teardown(id);
    }
}
