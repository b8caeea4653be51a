//! Arithmetic abstractions and their concrete implementations.
//!
//! This module provides trait abstractions for the primitives the splitting
//! scheme is built on, allowing backend implementations to plug in behind
//! unified interfaces:
//!
//! - **[`field`]**: Scalar field operations (Fr) - addition, multiplication, inversion
//! - **[`group`]**: Public-key group operations (G1) - addition, scalar multiplication
//!
//! # Backend Support
//!
//! Backends are selected via feature flags:
//!
//! | Feature | Backend | Curve | Status |
//! |---------|---------|-------|--------|
//! | `blst` (default) | blstrs | BLS12-381 | Stable |
//!
//! # Example
//!
//! ```rust
//! use rand::thread_rng;
//! use keysplit::{CurvePoint, FieldElement, Fr, G1};
//!
//! // Field operations
//! let mut rng = thread_rng();
//! let scalar = Fr::random(&mut rng);
//! let inv = scalar.invert().expect("non-zero scalar");
//!
//! // Curve operations
//! let point = G1::generator().mul_scalar(&scalar);
//! println!("{:?}", point.is_identity());
//! # let _ = inv;
//! ```

mod field;
pub use field::*;

mod group;
pub use group::*;
