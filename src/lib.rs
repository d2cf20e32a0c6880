//! Fixed-size linear algebra primitives for graphics and simulation code.
//!
//! # Motivation
//!
//! Renderers and simulations need a handful of small value types in their
//! public APIs: vectors, a rotation quaternion, a transform matrix, a color.
//! This crate provides exactly that handful, with predictable semantics and
//! nothing else, so that depending on it does not pull a large general-purpose
//! math stack into a project's API surface.
//!
//! # Goals & Non-Goals
//!
//! - Every type has a fixed size: vectors have 3 elements, the matrix is 4x4.
//!   Relying on fixed dimensions keeps the API small; other sizes can be added
//!   as separate types if they are ever needed.
//! - Types are generic over the *element* type, but only [`Copy`] numeric
//!   primitives are supported (no "big decimal" style element types).
//! - A single, row-major, unpadded data layout for the matrix type.
//! - All operations are pure value transformations. There is no validation and
//!   no error reporting: numerically degenerate inputs produce degenerate
//!   values (documented per operation), and non-finite floats propagate
//!   through arithmetic unchecked.
//! - No SIMD, no serialization, no matrix inversion.

mod color;
mod matrix;
mod quat;
mod traits;
mod vector;

pub use color::*;
pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
