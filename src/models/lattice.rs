// src/models/lattice.rs
// A pencil of evenly spaced parallel lines

use super::line::Line2D;

/// Lines `line.with_distance(i * step + offset)` for every `i` in
/// `index_min..=index_max`. Built fresh for every frame and never mutated;
/// enumeration works on copies of `line`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    pub line: Line2D,
    pub index_min: i32,
    pub index_max: i32,
    pub step: f64,
    pub offset: f64,
}

impl Lattice {
    pub fn new(line: Line2D, index_min: i32, index_max: i32, step: f64, offset: f64) -> Self {
        Self {
            line,
            index_min,
            index_max,
            step,
            offset,
        }
    }

    /// Number of lines in the pencil (0 if the index range is empty)
    pub fn line_count(&self) -> usize {
        (i64::from(self.index_max) - i64::from(self.index_min) + 1).max(0) as usize
    }

    pub fn distance_at(&self, index: i32) -> f64 {
        index as f64 * self.step + self.offset
    }

    pub fn line_at(&self, index: i32) -> Line2D {
        self.line.with_distance(self.distance_at(index))
    }

    /// The first line of the pencil, at `index_min`
    pub fn first_line(&self) -> Line2D {
        self.line_at(self.index_min)
    }

    /// The line one step past the first, whether or not its index is in range
    pub fn second_line(&self) -> Line2D {
        self.line
            .with_distance(self.distance_at(self.index_min) + self.step)
    }

    pub fn lines(&self) -> impl Iterator<Item = Line2D> + '_ {
        (self.index_min..=self.index_max).map(move |i| self.line_at(i))
    }

    /// Fractional line index of a signed distance, integer for points on a line
    pub fn index_of_distance(&self, dist: f64) -> f64 {
        (dist - self.offset) / self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_lattice() -> Lattice {
        Lattice::new(Line2D::new(0.0, 0.4), -2, 3, 0.5, 0.1)
    }

    #[test]
    fn test_line_count() {
        assert_eq!(sample_lattice().line_count(), 6);
        let empty = Lattice::new(Line2D::new(0.0, 0.0), 2, 1, 1.0, 0.0);
        assert_eq!(empty.line_count(), 0);
        assert_eq!(empty.lines().count(), 0);
    }

    #[test]
    fn test_lines_are_evenly_spaced_copies() {
        let lattice = sample_lattice();
        let distances: Vec<f64> = lattice.lines().map(|l| l.dist_to_origin).collect();
        assert_eq!(distances.len(), 6);
        assert_relative_eq!(distances[0], -0.9);
        for pair in distances.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.5, epsilon = 1e-12);
        }
        // the base line is untouched
        assert_eq!(lattice.line.dist_to_origin, 0.0);
        assert!(lattice.lines().all(|l| l.is_parallel(&lattice.line)));
    }

    #[test]
    fn test_extreme_index_range() {
        let full = Lattice::new(Line2D::new(0.0, 0.0), i32::MIN, i32::MAX, 1.0, 0.0);
        assert_eq!(full.line_count(), 1usize << 32);
        let reversed = Lattice::new(Line2D::new(0.0, 0.0), i32::MAX, i32::MIN, 1.0, 0.0);
        assert_eq!(reversed.line_count(), 0);

        let last = Lattice::new(Line2D::new(0.0, 0.0), i32::MAX, i32::MAX, 0.5, 0.0);
        assert_eq!(last.line_count(), 1);
        assert_relative_eq!(
            last.second_line().dist_to_origin - last.first_line().dist_to_origin,
            0.5
        );
    }

    #[test]
    fn test_index_of_distance() {
        let lattice = sample_lattice();
        assert_relative_eq!(lattice.index_of_distance(lattice.distance_at(2)), 2.0);
        assert_eq!(lattice.first_line(), lattice.line_at(-2));
    }
}
