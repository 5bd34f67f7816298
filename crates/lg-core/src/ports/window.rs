use crate::window::WindowGeometry;

/// Windowing collaborator.
pub trait WindowPort: Send + Sync {
    /// Apply a stored geometry to the main window, verbatim.
    fn apply_geometry(&self, geometry: &WindowGeometry);
}
