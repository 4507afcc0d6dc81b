//! Stride derivation entry points and small layout utilities.

use crate::order::{ColMajor, RowMajor, StrideOrder};
use crate::{LayoutError, Result};

/// Write the canonical contiguous strides for `dims` into `strides`.
///
/// The order is fixed at compile time by the tag `O`; no runtime branch on
/// the order survives monomorphization. Fails with
/// [`LayoutError::StrideLengthMismatch`] before writing anything if the
/// slice lengths differ; on success every slot of `strides` is written.
///
/// Products wrap on `isize` overflow (see the crate docs).
///
/// ```rust
/// use strided_layout::{fill_strides, RowMajor};
///
/// let mut strides = [0isize; 3];
/// fill_strides::<RowMajor>(&[2, 3, 4], &mut strides).unwrap();
/// assert_eq!(strides, [12, 4, 1]);
/// ```
#[inline]
pub fn fill_strides<O: StrideOrder>(dims: &[usize], strides: &mut [isize]) -> Result<()> {
    if dims.len() != strides.len() {
        return Err(LayoutError::StrideLengthMismatch(
            dims.len(),
            strides.len(),
        ));
    }
    O::write_strides(dims, strides);
    Ok(())
}

/// Allocate and return the canonical contiguous strides for `dims`.
#[inline]
pub fn strides_for<O: StrideOrder>(dims: &[usize]) -> Vec<isize> {
    let mut strides = vec![0isize; dims.len()];
    O::write_strides(dims, &mut strides);
    strides
}

/// Compute row-major strides (C default: last index varies fastest).
#[inline]
pub fn row_major_strides(dims: &[usize]) -> Vec<isize> {
    strides_for::<RowMajor>(dims)
}

/// Compute column-major strides (Fortran default: first index varies fastest).
#[inline]
pub fn col_major_strides(dims: &[usize]) -> Vec<isize> {
    strides_for::<ColMajor>(dims)
}

/// Total number of elements for `dims` (empty product = 1, so a rank-0
/// shape holds a single scalar).
#[inline]
pub fn num_elements(dims: &[usize]) -> usize {
    dims.iter().product()
}

/// Linear storage offset of `indices` under `strides`.
///
/// This is the map the canonical strides exist to serve: for strides
/// produced by [`fill_strides`] it is a bijection from the index space
/// onto `[0, Π dims[i])`. The empty index maps to 0.
///
/// # Panics
///
/// Panics if `indices` is longer than `strides`.
#[inline]
pub fn linear_offset(indices: &[usize], strides: &[isize]) -> isize {
    assert!(indices.len() <= strides.len(), "more indices than strides");
    let mut offset = 0isize;
    for (i, &index) in indices.iter().enumerate() {
        offset += index as isize * strides[i];
    }
    offset
}

/// Whether `strides` is exactly the canonical contiguous stride vector for
/// `dims` under order `O`.
///
/// Dimensions of extent 1 are never actually stepped, so their stride is
/// irrelevant and matches anything. Returns `false` when the lengths
/// differ.
pub fn is_contiguous<O: StrideOrder>(dims: &[usize], strides: &[isize]) -> bool {
    if dims.len() != strides.len() {
        return false;
    }
    let canonical = strides_for::<O>(dims);
    dims.iter()
        .zip(strides.iter().zip(canonical.iter()))
        .all(|(&dim, (&got, &want))| dim == 1 || got == want)
}
