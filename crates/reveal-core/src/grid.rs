use glam::Vec2;

/// Line layout for the reactive background grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLines {
    pub size: Vec2,
    pub cell: f32,
    /// Shift applied to the whole lattice, in CSS pixels.
    pub offset: Vec2,
}

/// Shift proportional to the reference point's offset from the surface
/// center. Degenerate surfaces get no shift.
pub fn grid_offset(reference: Vec2, size: Vec2, cell: f32, reactivity: f32) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec2::ZERO;
    }
    (reference / size - Vec2::splat(0.5)) * cell * reactivity
}

fn positions(start: f32, cell: f32, end: f32) -> impl Iterator<Item = f32> {
    let count = if cell > 0.0 && end > start {
        ((end - start) / cell).ceil() as usize
    } else {
        0
    };
    (0..count).map(move |i| start + cell * i as f32)
}

impl GridLines {
    pub fn new(size: Vec2, reference: Vec2, cell: f32, reactivity: f32) -> Self {
        Self {
            size,
            cell,
            offset: grid_offset(reference, size, cell, reactivity),
        }
    }

    #[inline]
    fn phase(&self, offset: f32) -> f32 {
        if self.cell > 0.0 {
            offset.rem_euclid(self.cell)
        } else {
            0.0
        }
    }

    /// X coordinates of the vertical lines.
    pub fn columns(&self) -> impl Iterator<Item = f32> {
        positions(self.phase(self.offset.x), self.cell, self.size.x)
    }

    /// Y coordinates of the horizontal lines.
    pub fn rows(&self) -> impl Iterator<Item = f32> {
        positions(self.phase(self.offset.y), self.cell, self.size.y)
    }
}
