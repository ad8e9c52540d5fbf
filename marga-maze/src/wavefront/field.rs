//! Dense wavefront storage.

use crate::core::GridCoord;

/// Distance field produced by [`super::WavefrontSolver`].
///
/// Unreached cells have no value (treated as +∞ by callers). The assignment
/// order is kept so biased and unbiased fields can be compared.
#[derive(Clone, Debug, PartialEq)]
pub struct WavefrontField {
    /// Field value per cell, row-major. `f32::INFINITY` when unreached.
    values: Vec<f32>,
    /// Breadth-first layer per cell, `u32::MAX` when unreached.
    layers: Vec<u32>,
    /// Cells in the order they were first assigned
    order: Vec<GridCoord>,
    width: usize,
    height: usize,
}

impl WavefrontField {
    /// Field with no reached cells.
    pub fn empty(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            values: vec![f32::INFINITY; size],
            layers: vec![u32::MAX; size],
            order: Vec::new(),
            width,
            height,
        }
    }

    #[inline]
    fn index(&self, coord: GridCoord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        let (x, y) = (coord.x as usize, coord.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Whether `coord` has been assigned.
    #[inline]
    pub fn is_reached(&self, coord: GridCoord) -> bool {
        self.index(coord)
            .is_some_and(|i| self.layers[i] != u32::MAX)
    }

    /// Record the first assignment of a cell. Later assignments are ignored.
    pub(super) fn assign(&mut self, coord: GridCoord, layer: u32, value: f32) -> bool {
        let Some(i) = self.index(coord) else {
            return false;
        };
        if self.layers[i] != u32::MAX {
            return false;
        }
        self.layers[i] = layer;
        self.values[i] = value;
        self.order.push(coord);
        true
    }

    /// Field value of a cell, `None` when unreachable.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<f32> {
        self.index(coord)
            .filter(|i| self.layers[*i] != u32::MAX)
            .map(|i| self.values[i])
    }

    /// Unbiased breadth-first distance (hop count) to the target.
    #[inline]
    pub fn layer(&self, coord: GridCoord) -> Option<u32> {
        self.index(coord)
            .map(|i| self.layers[i])
            .filter(|l| *l != u32::MAX)
    }

    /// Cells in assignment order, target first.
    pub fn order(&self) -> &[GridCoord] {
        &self.order
    }

    /// Number of reached cells.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when nothing was reached.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Largest assigned value, if any.
    pub fn max_value(&self) -> Option<f32> {
        self.order
            .iter()
            .filter_map(|c| self.get(*c))
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f32| a.max(v))))
    }

    /// Field width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells
    pub fn height(&self) -> usize {
        self.height
    }
}
