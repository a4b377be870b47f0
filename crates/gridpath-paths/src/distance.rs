use gridpath_core::Coord;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> usize {
    (a.x.abs_diff(b.x) + a.y.abs_diff(b.y)) as usize
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> usize {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Coord::new(1, 0);
        let b = Coord::new(2, 3);
        assert_eq!(manhattan(a, b), 4);
        assert_eq!(chebyshev(a, b), 3);
        assert_eq!(manhattan(b, a), 4);
        assert_eq!(manhattan(a, a), 0);
        assert_eq!(manhattan(Coord::new(-2, -2), Coord::new(2, 2)), 8);
    }
}
