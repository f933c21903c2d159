//! Lit-cell trail for the animated cube grid
//!
//! Every tick a few random cells light up; the trail only remembers the most
//! recent activations so older cells fade out again.

use std::collections::VecDeque;

/// Grid rows
pub const GRID_ROWS: usize = 6;

/// Grid columns
pub const GRID_COLS: usize = 8;

/// Maximum remembered activations
pub const TRAIL_LENGTH: usize = 10;

/// Tick interval of the grid animation (ms)
pub const TICK_INTERVAL_MS: u32 = 400;

/// Bounded history of activated cell indices
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityTrail {
    cells: usize,
    capacity: usize,
    active: VecDeque<usize>,
}

impl Default for ActivityTrail {
    fn default() -> Self {
        Self::new(GRID_ROWS * GRID_COLS, TRAIL_LENGTH)
    }
}

impl ActivityTrail {
    pub fn new(cells: usize, capacity: usize) -> Self {
        Self {
            cells,
            capacity,
            active: VecDeque::with_capacity(capacity),
        }
    }

    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Record newly activated cells, dropping the oldest beyond capacity
    ///
    /// Out-of-range indices are ignored.
    pub fn push(&mut self, activated: impl IntoIterator<Item = usize>) {
        for cell in activated.into_iter().filter(|c| *c < self.cells) {
            self.active.push_back(cell);
        }
        while self.active.len() > self.capacity {
            self.active.pop_front();
        }
    }

    /// Activate `1..=3` cells derived from uniform samples in `[0, 1)`
    ///
    /// `sample` is called once for the count and once per cell.
    pub fn tick(&mut self, mut sample: impl FnMut() -> f64) {
        let count = (sample() * 3.0).floor() as usize % 3 + 1;
        let cells = self.cells;
        let picked: Vec<usize> = (0..count)
            .map(|_| ((sample() * cells as f64).floor() as usize).min(cells.saturating_sub(1)))
            .collect();
        self.push(picked);
    }

    pub fn is_active(&self, cell: usize) -> bool {
        self.active.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let trail = ActivityTrail::default();
        assert_eq!(trail.cells(), 48);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_keeps_most_recent() {
        let mut trail = ActivityTrail::new(48, 10);
        trail.push(0..12);

        assert_eq!(trail.len(), 10);
        assert!(!trail.is_active(0));
        assert!(!trail.is_active(1));
        assert!(trail.is_active(2));
        assert!(trail.is_active(11));
    }

    #[test]
    fn test_ignores_out_of_range() {
        let mut trail = ActivityTrail::new(4, 10);
        trail.push([1, 4, 100]);
        assert_eq!(trail.len(), 1);
        assert!(trail.is_active(1));
    }

    #[test]
    fn test_tick_activates_one_to_three() {
        let mut trail = ActivityTrail::new(48, 10);
        let mut samples = [0.0, 0.5].into_iter().cycle();
        trail.tick(|| samples.next().unwrap_or(0.0));
        assert_eq!(trail.len(), 1);
        assert!(trail.is_active(24));

        let mut trail = ActivityTrail::new(48, 10);
        let mut samples = [0.99, 0.999, 0.0, 0.25].into_iter();
        trail.tick(|| samples.next().unwrap_or(0.0));
        assert_eq!(trail.len(), 3);
        assert!(trail.is_active(47));
        assert!(trail.is_active(0));
        assert!(trail.is_active(12));
    }

    #[test]
    fn test_tick_respects_capacity() {
        let mut trail = ActivityTrail::default();
        let mut n = 0u32;
        for _ in 0..50 {
            trail.tick(|| {
                n = n.wrapping_mul(1103515245).wrapping_add(12345);
                (n >> 8) as f64 / (1u32 << 24) as f64
            });
        }
        assert!(trail.len() <= TRAIL_LENGTH);
    }
}
