//! Column-major single-precision linear algebra for GPU pipelines.
//!
//! # Motivation
//!
//! Renderers that feed a GPU need a small, predictable set of math types whose
//! in-memory layout *is* the wire format: an `n`-dimensional vector is exactly
//! `n` floats, an `n`x`n` matrix is exactly `n²` floats in column-major order,
//! ready to be copied into a uniform buffer without any reshuffling. This
//! crate provides that and nothing more.
//!
//! # Goals & Non-Goals
//!
//! - Fixed-size vectors and matrices only, with dimensions encoded as const
//!   generics. No dynamically-sized objects.
//! - A single, column-major, unpadded data layout. [`bytemuck::Pod`] is
//!   implemented so values can be cast to byte slices for upload.
//! - Generic over the element type, but designed for [`f32`]; every alias
//!   ending in `f` (eg. [`Vec3f`], [`Mat4f`]) fixes the element type to
//!   single-precision floats.
//! - No input validation beyond what the type system gives for free.
//!   Numerical degeneracy (division by zero, non-convex quadrilaterals,
//!   non-normalized rotation axes) propagates through IEEE-754 arithmetic
//!   rather than panicking. The one documented exception: normalizing an
//!   exactly-zero vector or quaternion returns it unchanged instead of
//!   producing NaNs.
//! - No public dependencies other than [`bytemuck`].

pub mod approx;
mod matrix;
mod quat;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
