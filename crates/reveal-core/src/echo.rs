//! Fading trail markers left behind during fast pointer motion.

use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Echo {
    pub center: Vec2,
    pub opacity: f32,
    /// Outer radius of the echo disc.
    pub radius: f32,
}

/// Fixed-capacity ring of echoes, oldest first.
///
/// Slots are allocated once. Pushing into a full ring overwrites the oldest
/// entry regardless of its opacity.
#[derive(Clone, Debug)]
pub struct EchoRing {
    slots: Vec<Echo>,
    head: usize,
    len: usize,
}

impl EchoRing {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![Echo::default(); capacity],
            head: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn slot(&self, age: usize) -> usize {
        (self.head + age) % self.slots.len()
    }

    /// Append `echo`, returning the evicted oldest entry when full.
    pub fn push(&mut self, echo: Echo) -> Option<Echo> {
        let cap = self.capacity();
        if cap == 0 {
            return None;
        }
        if self.len == cap {
            let evicted = std::mem::replace(&mut self.slots[self.head], echo);
            self.head = (self.head + 1) % cap;
            return Some(evicted);
        }
        let idx = self.slot(self.len);
        self.slots[idx] = echo;
        self.len += 1;
        None
    }

    /// Lower every opacity by `amount` and drop the ones that hit zero.
    ///
    /// Survivors are compacted toward the head, keeping their spawn order.
    pub fn fade(&mut self, amount: f32) -> usize {
        let mut kept = 0;
        for age in 0..self.len {
            let src = self.slot(age);
            let mut echo = self.slots[src];
            echo.opacity -= amount;
            if echo.opacity > 0.0 {
                let dst = self.slot(kept);
                self.slots[dst] = echo;
                kept += 1;
            }
        }
        let retired = self.len - kept;
        self.len = kept;
        if kept == 0 {
            self.head = 0;
        }
        retired
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Live echoes, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Echo> + '_ {
        (0..self.len).map(move |age| &self.slots[self.slot(age)])
    }

    pub fn newest(&self) -> Option<&Echo> {
        self.len.checked_sub(1).map(|age| &self.slots[self.slot(age)])
    }
}
