//! # boolfunc-rs: symbolic Boolean function contracts for Rust
//!
//! **`boolfunc-rs`** is the foundation layer of a Boolean-algebra toolkit.
//! It fixes the shared vocabulary --- variables, functions, cofactors,
//! unate/binate properties, vector encodings --- that every concrete function
//! representation (truth table, decision diagram, sum-of-products form,
//! SAT-style solver) must satisfy.
//!
//! ## What lives here
//!
//! - **[`Variable`][crate::var::Variable]**: immutable named/indexed identity
//!   with a total order, used as the key of restriction and composition
//!   mappings and as the element of a function's support set.
//! - **[`Function`][crate::func::Function]**: the contract for a scalar
//!   Boolean function of N variables, plus generic algorithms (cofactor
//!   enumeration, smoothing, consensus, derivative, binate classification)
//!   built entirely from the abstract `restrict` primitive.
//! - **[`BitVector`][crate::vector::BitVector]**: a mutable, index-addressable
//!   collection of function-or-constant elements representing a signal bus,
//!   with unsigned and two's-complement numeric interpretations and
//!   window-relative indexing and slicing.
//!
//! The semantics are exact and bit-for-bit reproducible: cofactor
//! enumeration order, two's-complement decoding, sign/zero extension, and
//! slice-window renormalization behave identically across every concrete
//! representation built on top of this crate.
//!
//! What deliberately does *not* live here: canonicalization strategies,
//! minimization heuristics, satisfiability search, parsers, and I/O.
//! Concrete representations implement the [`Function`][crate::func::Function]
//! trait and get the generic algorithms for free.
//!
//! ## Basic Usage
//!
//! ```rust
//! use boolfunc_rs::var::Variable;
//! use boolfunc_rs::vector::{BitVector, Bnr};
//!
//! // Variables order by name, then by index.
//! let a = Variable::new("a");
//! let v0 = Variable::indexed("v", 0);
//! assert!(a < v0);
//! assert_eq!(v0.to_string(), "v[0]");
//!
//! // A concrete 4-bit bus (the function type is unconstrained for
//! // vectors that hold no symbolic elements).
//! let mut bus: BitVector<()> = BitVector::from_bits([false, true, true, false]);
//! assert_eq!(bus.to_uint().unwrap(), 6u32.into());
//!
//! // Reinterpret as two's complement and sign-extend.
//! bus.bnr = Bnr::TwosComplement;
//! bus.set(3, true.into()).unwrap();
//! bus.ext(2);
//! assert_eq!(bus.len(), 6);
//! assert_eq!(bus.to_int().unwrap(), (-2).into());
//! ```
//!
//! ## Core Components
//!
//! - **[`var`]**: Boolean variables.
//! - **[`func`]**: the function contract and the generic cofactor algorithms.
//! - **[`vector`]**: indexed bit vectors and the vector operation contract.
//! - **[`mapping`]**: restriction mappings with vector-valued bindings.
//! - **[`errors`]**: the shared error type.

pub mod errors;
pub mod func;
pub mod mapping;
pub mod utils;
pub mod var;
pub mod vector;

#[cfg(test)]
pub(crate) mod testutil;
