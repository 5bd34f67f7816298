use std::sync::Mutex;

use lg_core::{ports::WindowPort, WindowGeometry};
use tracing::info;

/// Window stand-in for the headless shell.
///
/// 无界面窗口：记录当前几何信息，关闭时由调用方持久化。
pub struct HeadlessWindow {
    current: Mutex<Option<WindowGeometry>>,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    /// Geometry to persist on close.
    pub fn current(&self) -> Option<WindowGeometry> {
        match self.current.lock() {
            Ok(current) => *current,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl Default for HeadlessWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowPort for HeadlessWindow {
    fn apply_geometry(&self, geometry: &WindowGeometry) {
        info!(size = ?geometry.size, position = ?geometry.position, "window geometry restored");
        match self.current.lock() {
            Ok(mut current) => *current = Some(*geometry),
            Err(poisoned) => *poisoned.into_inner() = Some(*geometry),
        }
    }
}
