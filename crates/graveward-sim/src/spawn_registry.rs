//! Known hostile spawn locations, filled once at scene setup.

use rand::Rng;

use graveward_core::types::Position;

#[derive(Debug, Clone, Default)]
pub struct SpawnRegistry {
    points: Vec<Position>,
}

impl SpawnRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = Position>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    pub fn register(&mut self, point: Position) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pick a spawn point uniformly at random. `None` when nothing is registered.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points[rng.gen_range(0..self.points.len())])
    }
}
