//! # Bookchain Testkit
//!
//! Testing utilities for Bookchain.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed blocks with known digests, pinning the hash format
//! - **Generators**: Proptest strategies for checkout records and chains
//! - **Fixtures**: Helpers for building chains with fixed timestamps
//!
//! ## Golden Vectors
//!
//! ```rust
//! use bookchain_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, hex) in verify_all_vectors() {
//!     assert!(ok, "{name} produced {hex}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use bookchain_testkit::generators::checkout_record;
//!
//! proptest! {
//!     #[test]
//!     fn digest_is_deterministic(record in checkout_record()) {
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use bookchain_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::new();
//! fixture.checkout("b1", "alice");
//! fixture.checkout("b1", "bob");
//! assert_eq!(fixture.chain.len(), 3);
//! assert!(fixture.chain.verify().is_ok());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{tampered_json, TestFixture, BASE_TIMESTAMP};
pub use generators::{checkout_record, submission_json, ChainParams};
pub use vectors::{all_vectors, build_vector_chain, verify_all_vectors, GoldenVector};
