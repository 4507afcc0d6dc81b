//! Memory-order tags for dense layouts.
//!
//! The two canonical orders are represented as zero-sized types so the
//! derivation is resolved at compile time: a tensor type fixes its order
//! once as a type parameter and never branches on it afterwards. The
//! recurrence for each order lives in its tag's [`StrideOrder`] impl.

use crate::Result;

/// A canonical dense memory order, selected at the type level.
///
/// Implemented by the two tags [`RowMajor`] and [`ColMajor`]. The set is
/// closed: dense contiguous arrays admit exactly these two orders, and
/// non-dense layouts (gapped, padded, block-sparse) are out of scope.
pub trait StrideOrder: Copy + Default + 'static {
    /// Runtime equivalent of this tag.
    const LAYOUT: Layout;

    /// Write the canonical contiguous strides for `dims` into `strides`.
    ///
    /// Both slices must have the same length; [`fill_strides`] is the
    /// checked entry point and callers should go through it.
    ///
    /// Products wrap on `isize` overflow.
    ///
    /// [`fill_strides`]: crate::fill_strides
    fn write_strides(dims: &[usize], strides: &mut [isize]);
}

/// Row-major (C) order: the last index varies fastest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMajor;

/// Column-major (Fortran) order: the first index varies fastest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColMajor;

impl StrideOrder for RowMajor {
    const LAYOUT: Layout = Layout::RowMajor;

    /// Suffix product: `strides[i] = dims[i+1] * ... * dims[rank-1]`.
    #[inline]
    fn write_strides(dims: &[usize], strides: &mut [isize]) {
        let rank = dims.len();
        // Explicit guard: `rank - 1` would underflow for rank 0.
        if rank == 0 {
            return;
        }
        strides[rank - 1] = 1;
        for i in (0..rank - 1).rev() {
            strides[i] = strides[i + 1].wrapping_mul(dims[i + 1] as isize);
        }
    }
}

impl StrideOrder for ColMajor {
    const LAYOUT: Layout = Layout::ColMajor;

    /// Prefix product: `strides[i] = dims[0] * ... * dims[i-1]`.
    #[inline]
    fn write_strides(dims: &[usize], strides: &mut [isize]) {
        let rank = dims.len();
        if rank == 0 {
            return;
        }
        strides[0] = 1;
        for i in 1..rank {
            strides[i] = strides[i - 1].wrapping_mul(dims[i - 1] as isize);
        }
    }
}

/// A memory order carried as a runtime value.
///
/// Equivalent to the [`StrideOrder`] tags for callers that hold the order
/// as data (e.g. a container configurable at construction time). Dispatch
/// happens once per call, never per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Last index contiguous (C order).
    RowMajor,
    /// First index contiguous (Fortran order).
    ColMajor,
}

impl Layout {
    /// Write the canonical contiguous strides for `dims` into `strides`.
    ///
    /// Fails with [`LayoutError::StrideLengthMismatch`] before writing
    /// anything if the slice lengths differ.
    ///
    /// [`LayoutError::StrideLengthMismatch`]: crate::LayoutError::StrideLengthMismatch
    pub fn fill_strides(self, dims: &[usize], strides: &mut [isize]) -> Result<()> {
        match self {
            Layout::RowMajor => crate::fill_strides::<RowMajor>(dims, strides),
            Layout::ColMajor => crate::fill_strides::<ColMajor>(dims, strides),
        }
    }

    /// Allocate and return the canonical contiguous strides for `dims`.
    pub fn strides(self, dims: &[usize]) -> Vec<isize> {
        match self {
            Layout::RowMajor => crate::strides_for::<RowMajor>(dims),
            Layout::ColMajor => crate::strides_for::<ColMajor>(dims),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{strides_for, LayoutError};

    #[test]
    fn test_layout_matches_tags() {
        let dims = [3usize, 5, 7, 2];
        assert_eq!(Layout::RowMajor.strides(&dims), strides_for::<RowMajor>(&dims));
        assert_eq!(Layout::ColMajor.strides(&dims), strides_for::<ColMajor>(&dims));
    }

    #[test]
    fn test_layout_const_round_trip() {
        assert_eq!(RowMajor::LAYOUT, Layout::RowMajor);
        assert_eq!(ColMajor::LAYOUT, Layout::ColMajor);
    }

    #[test]
    fn test_layout_fill_length_mismatch() {
        let mut strides = [0isize; 2];
        let err = Layout::RowMajor
            .fill_strides(&[2, 3, 4], &mut strides)
            .unwrap_err();
        assert!(matches!(err, LayoutError::StrideLengthMismatch(3, 2)));
    }

    #[test]
    fn test_rank0_is_noop() {
        let mut strides: [isize; 0] = [];
        Layout::RowMajor.fill_strides(&[], &mut strides).unwrap();
        Layout::ColMajor.fill_strides(&[], &mut strides).unwrap();
        assert_eq!(Layout::RowMajor.strides(&[]), Vec::<isize>::new());
    }
}
