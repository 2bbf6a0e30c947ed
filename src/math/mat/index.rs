use thiserror::Error;

/// Number of rows (and columns) in a [Mat22](super::Mat22)
pub(crate) const DIM: usize = 2;
/// Number of elements in a [Mat22](super::Mat22)
pub(crate) const LEN: usize = DIM * DIM;

/// Index into matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatIndex {
	pub row: usize,
	pub col: usize,
}

impl MatIndex {
	pub const fn new(row: usize, col: usize) -> Self {
		Self { row, col }
	}

	pub const fn transposed(self) -> MatIndex {
		MatIndex { row: self.col, col: self.row }
	}

	/// Check if this index refers to an element of a 2x2 matrix
	#[inline]
	pub const fn is_valid(&self) -> bool {
		self.row < DIM && self.col < DIM
	}

	#[inline(always)]
	pub const fn offset_unchecked(&self) -> usize {
		DIM * self.row + self.col
	}

	/// Row-major offset of this index
	#[inline]
	pub fn offset(&self) -> Result<usize, OutOfBoundsError> {
		if self.is_valid() {
			Ok(self.offset_unchecked())
		} else {
			Err(OutOfBoundsError { index: *self })
		}
	}

	#[inline]
	pub const fn for_offset_unchecked(offset: usize) -> Self {
		Self {
			row: offset / DIM,
			col: offset % DIM,
		}
	}

	#[inline]
	pub fn for_offset(offset: usize) -> Result<Self, OutOfBoundsError> {
		assert_offset(offset)?;
		Ok(Self::for_offset_unchecked(offset))
	}
}

impl From<(usize, usize)> for MatIndex {
    fn from(value: (usize, usize)) -> Self {
        let (row, col) = value;
		Self {
			row,
			col,
		}
    }
}

/// Helper to return an error if `offset` is not an element offset
#[inline]
pub(super) fn assert_offset(offset: usize) -> Result<(), OutOfBoundsError> {
	if offset < LEN {
		Ok(())
	} else {
		Err(OutOfBoundsError { index: MatIndex::for_offset_unchecked(offset) })
	}
}

/// Element index was outside of a 2x2 matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Matrix index out of range (row: {}, col: {}, dims: 2x2)", .index.row, .index.col)]
pub struct OutOfBoundsError {
	/// Index that was requested
	pub index: MatIndex,
}

#[cfg(test)]
mod test {
	use super::{MatIndex, OutOfBoundsError};

	#[test]
	fn offsets_are_row_major() {
		assert_eq!(MatIndex::new(0, 0).offset(), Ok(0));
		assert_eq!(MatIndex::new(0, 1).offset(), Ok(1));
		assert_eq!(MatIndex::new(1, 0).offset(), Ok(2));
		assert_eq!(MatIndex::new(1, 1).offset(), Ok(3));
	}

	#[test]
	fn for_offset() {
		assert_eq!(MatIndex::for_offset(2), Ok(MatIndex::new(1, 0)));
		assert_eq!(MatIndex::for_offset(4), Err(OutOfBoundsError { index: MatIndex::new(2, 0) }));
	}

	#[test]
	fn invalid_index() {
		let idx = MatIndex::from((0, 2));
		assert!(!idx.is_valid());
		assert!(idx.offset().is_err());
		assert_eq!(idx.transposed(), MatIndex::new(2, 0));
	}
}
