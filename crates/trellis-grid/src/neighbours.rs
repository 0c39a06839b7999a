//! 8-connected adjacency (cardinal + diagonal) with absorbing edges.

use crate::grid::Grid;
use smallvec::SmallVec;
use trellis_core::{Direction, Location};

impl<T> Grid<T> {
    /// The in-bounds locations one step from `location`, in
    /// [`Direction::ALL`] order.
    ///
    /// Edges absorb: corner cells have 3 neighbours, edge cells 5,
    /// interior cells 8. An out-of-bounds `location` may still have
    /// in-bounds neighbours.
    pub fn neighbours(&self, location: impl Into<Location>) -> SmallVec<[Location; 8]> {
        self.neighbours_in(location, &Direction::ALL)
    }

    /// Like [`neighbours`](Self::neighbours), restricted to `directions`.
    ///
    /// Pass [`Direction::CARDINAL`] for 4-connected adjacency.
    pub fn neighbours_in(
        &self,
        location: impl Into<Location>,
        directions: &[Direction],
    ) -> SmallVec<[Location; 8]> {
        let location = location.into();
        directions
            .iter()
            .map(|&d| location.step(d))
            .filter(|&nb| self.is_in_bounds(nb))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(r: i32, col: i32) -> Location {
        Location::new(r, col)
    }

    fn grid(rows: usize, cols: usize) -> Grid<()> {
        Grid::new(vec![vec![(); cols]; rows]).unwrap()
    }

    #[test]
    fn neighbours_interior() {
        let g = grid(5, 5);
        assert_eq!(g.neighbours(c(2, 2)).len(), 8);
    }

    #[test]
    fn neighbours_corner() {
        let g = grid(5, 5);
        let n = g.neighbours(c(0, 0));
        assert_eq!(n.len(), 3);
        assert!(n.contains(&c(1, 0)));
        assert!(n.contains(&c(0, 1)));
        assert!(n.contains(&c(1, 1)));
    }

    #[test]
    fn neighbours_edge() {
        let g = grid(5, 5);
        assert_eq!(g.neighbours(c(0, 2)).len(), 5);
    }

    #[test]
    fn neighbours_follow_direction_order() {
        let g = grid(3, 3);
        let n = g.neighbours(c(1, 1));
        let expected: Vec<_> = Direction::ALL.iter().map(|&d| c(1, 1).step(d)).collect();
        assert_eq!(n.to_vec(), expected);
    }

    #[test]
    fn cardinal_neighbours_of_corner() {
        let g = grid(4, 4);
        let n = g.neighbours_in(c(3, 3), &Direction::CARDINAL);
        assert_eq!(n.to_vec(), vec![c(2, 3), c(3, 2)]);
    }

    #[test]
    fn neighbours_accept_row_col_pairs() {
        let g = grid(3, 3);
        assert_eq!(g.neighbours((1, 1)), g.neighbours(c(1, 1)));
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        assert!(grid(1, 1).neighbours(c(0, 0)).is_empty());
    }

    #[test]
    fn outside_location_can_touch_grid() {
        let g = grid(3, 3);
        assert_eq!(g.neighbours(c(-1, -1)).to_vec(), vec![c(0, 0)]);
    }

    proptest! {
        #[test]
        fn neighbours_symmetric(
            rows in 1usize..10,
            cols in 1usize..10,
            r in 0i32..10,
            col in 0i32..10,
        ) {
            let g = grid(rows, cols);
            let loc = c(r % rows as i32, col % cols as i32);
            for nb in g.neighbours(loc) {
                prop_assert!(
                    g.neighbours(nb).contains(&loc),
                    "neighbour symmetry violated: {} in N({}) but {} not in N({})",
                    nb, loc, loc, nb,
                );
            }
        }
    }
}
