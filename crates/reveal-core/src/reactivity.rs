//! Proximity inversion and inverse parallax for overlaid UI elements.

use glam::Vec2;
use smallvec::SmallVec;

/// Pure threshold test, no hysteresis.
#[inline]
pub fn is_inverted(element_center: Vec2, pointer: Vec2, radius: f32, threshold: f32) -> bool {
    element_center.distance(pointer) < radius * (1.0 + threshold)
}

/// Translation that moves an element opposite to the pointer's offset from
/// the surface center. Zero on a degenerate surface.
pub fn parallax_offset(pointer: Vec2, size: Vec2, amount: f32) -> Vec2 {
    let center = size * 0.5;
    if center.x <= 0.0 || center.y <= 0.0 {
        return Vec2::ZERO;
    }
    -((pointer - center) / center) * amount
}

/// CSS transform for a parallax offset, two decimals like the stylesheet.
pub fn translate_css(offset: Vec2) -> String {
    format!("translate({:.2}px, {:.2}px)", offset.x, offset.y)
}

/// A change to apply to one element's presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InversionChange {
    pub index: usize,
    pub inverted: bool,
}

pub type InversionChanges = SmallVec<[InversionChange; 8]>;

/// Last applied inversion flag per registered element.
#[derive(Clone, Debug, Default)]
pub struct UiReactivity {
    inverted: Vec<bool>,
}

impl UiReactivity {
    pub fn new(count: usize) -> Self {
        Self {
            inverted: vec![false; count],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inverted.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inverted.is_empty()
    }

    pub fn is_element_inverted(&self, index: usize) -> bool {
        self.inverted.get(index).copied().unwrap_or(false)
    }

    pub fn any_inverted(&self) -> bool {
        self.inverted.iter().any(|&b| b)
    }

    /// Recompute flags from element centers; `None` marks an element that is
    /// no longer in the document and keeps its previous flag.
    pub fn update(
        &mut self,
        centers: &[Option<Vec2>],
        pointer: Vec2,
        radius: f32,
        threshold: f32,
    ) -> InversionChanges {
        let mut changes = InversionChanges::new();
        for (index, (flag, center)) in self.inverted.iter_mut().zip(centers).enumerate() {
            let Some(center) = center else { continue };
            let next = is_inverted(*center, pointer, radius, threshold);
            if next != *flag {
                *flag = next;
                changes.push(InversionChange {
                    index,
                    inverted: next,
                });
            }
        }
        changes
    }

    /// Turn every flag off, reporting the elements that were on.
    pub fn clear(&mut self) -> InversionChanges {
        let mut changes = InversionChanges::new();
        for (index, flag) in self.inverted.iter_mut().enumerate() {
            if *flag {
                *flag = false;
                changes.push(InversionChange {
                    index,
                    inverted: false,
                });
            }
        }
        changes
    }
}
