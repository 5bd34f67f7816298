use serde::{Deserialize, Serialize};

/// Last known window placement.
///
/// Stored as `{ "size": [w, h], "position": [x, y] }` and applied verbatim at
/// startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub size: [u32; 2],
    pub position: [i32; 2],
}

impl WindowGeometry {
    pub fn new(width: u32, height: u32, x: i32, y: i32) -> Self {
        Self {
            size: [width, height],
            position: [x, y],
        }
    }

    pub fn width(&self) -> u32 {
        self.size[0]
    }

    pub fn height(&self) -> u32 {
        self.size[1]
    }

    pub fn x(&self) -> i32 {
        self.position[0]
    }

    pub fn y(&self) -> i32 {
        self.position[1]
    }
}
