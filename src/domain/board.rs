use crate::error::AutomatonError;

/// Fixed board dimensions and the row-major linearization of `(x, y)`.
///
/// Dimensions never change after construction; validation happens in
/// `AutomatonConfig` before a `Board` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
}

impl Board {
    pub(crate) const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn num_cells(&self) -> usize {
        self.width * self.height
    }

    /// Convert 2D coordinates to the buffer index
    pub(crate) const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Index of `(x, y)`, or `OutOfBounds` if it is off the board.
    pub(crate) fn checked_index(&self, x: usize, y: usize) -> Result<usize, AutomatonError> {
        if self.contains(x, y) {
            Ok(self.index(x, y))
        } else {
            Err(AutomatonError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_index() {
        let board = Board::new(5, 3);
        assert_eq!(board.index(0, 0), 0);
        assert_eq!(board.index(4, 0), 4);
        assert_eq!(board.index(0, 1), 5);
        assert_eq!(board.index(2, 2), 12);
    }

    #[test]
    fn test_checked_index_bounds() {
        let board = Board::new(5, 3);
        assert_eq!(board.checked_index(4, 2), Ok(14));
        assert!(matches!(
            board.checked_index(5, 0),
            Err(AutomatonError::OutOfBounds { x: 5, y: 0, .. })
        ));
        assert!(matches!(
            board.checked_index(0, 3),
            Err(AutomatonError::OutOfBounds { .. })
        ));
    }
}
