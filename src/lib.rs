//! Canonical stride derivation for dense N-dimensional arrays.
//!
//! Given a shape (per-dimension extents), this crate computes the stride
//! vector of a contiguous dense array for either of the two canonical
//! memory layouts:
//!
//! - [`RowMajor`] (C order): the last index varies fastest, so the last
//!   dimension has unit stride and each outer stride is the suffix product
//!   of the extents nested inside it.
//! - [`ColMajor`] (Fortran order): the first index varies fastest, so the
//!   first dimension has unit stride and each later stride is the prefix
//!   product of the extents before it.
//!
//! The layout is selected at the type level through zero-sized tags
//! implementing [`StrideOrder`], so a tensor type fixes its order once and
//! the derivation compiles down to a single loop with no per-call
//! branching. Callers that carry the order as data use the [`Layout`]
//! enum instead, which dispatches once per call.
//!
//! For any shape with positive extents, the produced strides make
//! `offset(idx) = Σ idx[i] * strides[i]` a bijection from the index space
//! onto `[0, Π dims[i])` — the invariant every dense container, slicing
//! operation, and kernel built on top of these strides relies on.
//!
//! # Example
//!
//! ```rust
//! use strided_layout::{fill_strides, row_major_strides, ColMajor};
//!
//! assert_eq!(row_major_strides(&[2, 3, 4]), vec![12, 4, 1]);
//!
//! // In-place form: the caller owns the buffer.
//! let mut strides = [0isize; 3];
//! fill_strides::<ColMajor>(&[2, 3, 4], &mut strides).unwrap();
//! assert_eq!(strides, [1, 2, 6]);
//! ```
//!
//! # Overflow
//!
//! Stride products are computed in `isize` with wrapping multiplication.
//! Overflow is not trapped; callers that need a guarantee must check that
//! `Π dims[i]` fits an `isize` before deriving strides.

mod order;
mod stride;

pub use order::{ColMajor, Layout, RowMajor, StrideOrder};
pub use stride::{
    col_major_strides, fill_strides, is_contiguous, linear_offset, num_elements,
    row_major_strides, strides_for,
};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur during stride derivation.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// Stride buffer length doesn't match the shape's rank.
    #[error("stride and dims length mismatch: {0} vs {1}")]
    StrideLengthMismatch(usize, usize),
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
