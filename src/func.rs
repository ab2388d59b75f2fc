//! The scalar Boolean function contract.
//!
//! This module defines the [`Function`] trait: the interface every concrete
//! Boolean function representation (truth table, decision diagram,
//! sum-of-products form, ...) must satisfy, plus the generic algorithms that
//! are derived purely from the `restrict` primitive and therefore work for
//! any representation:
//!
//! - cofactor enumeration ([`Function::iter_cofactors`], [`Function::cofactors`])
//! - quantification ([`Function::smoothing`], [`Function::consensus`])
//! - the Boolean derivative ([`Function::derivative`])
//! - binate classification ([`Function::is_binate`])
//!
//! Functions are value-like: every operation returns a new function and
//! nothing ever mutates the receiver.
//!
//! # Cofactor enumeration order
//!
//! For a variable list `vs` of length k, [`Function::iter_cofactors`] yields
//! exactly `2^k` restrictions. Restriction `n` assigns `vs[i]` the i-th bit
//! of `n`, so `vs[0]` is the fastest-varying position:
//!
//! ```text
//! iter_cofactors([v1, v2]) yields, in order:
//!     f | {v1=0, v2=0}
//!     f | {v1=1, v2=0}
//!     f | {v1=0, v2=1}
//!     f | {v1=1, v2=1}
//! ```
//!
//! This order is part of the contract and is relied upon by every consumer
//! that decodes a cofactor sequence positionally.

use std::collections::{BTreeMap, BTreeSet};
use std::iter::FusedIterator;

use num_bigint::BigUint;

use crate::errors::Result;
use crate::mapping::VarMap;
use crate::utils::bit_on;
use crate::var::Variable;

/// An assignment of variables to constant values.
///
/// Used both as the input of `restrict` and as the output of the
/// satisfiability queries (a satisfying "input point").
pub type Point = BTreeMap<Variable, bool>;

/// A scalar Boolean function of N variables.
///
/// Concrete representations implement the required methods; the provided
/// methods are generic algorithms built entirely on top of `restrict` and
/// the operator set, and apply to any implementation.
///
/// Required methods have no default body: a representation that does not
/// supply one simply does not compile, so an unimplemented operation can
/// never silently return a default value.
pub trait Function: Sized + Clone {
    /// Returns the support set of the function.
    ///
    /// Let f(x1, x2, ..., xn) be a Boolean function of N variables.
    /// The set {x1, x2, ..., xn} is called the *support* of the function.
    fn support(&self) -> BTreeSet<Variable>;

    /// Returns the degree of the function.
    ///
    /// A function from B^N => B is called a Boolean function of *degree* N.
    /// The degree is always recomputed from the support, never cached, so it
    /// can never go stale in a representation whose support changes.
    fn degree(&self) -> usize {
        self.support().len()
    }

    /// Returns the complement of the function.
    ///
    /// ```text
    /// | f | NOT f |
    /// |---|-------|
    /// | 0 |   1   |
    /// | 1 |   0   |
    /// ```
    fn op_not(&self) -> Self;

    /// Returns the disjunction of this function with `others`.
    ///
    /// ```text
    /// | f | g | f OR g |
    /// |---|---|--------|
    /// | 0 | 0 |   0    |
    /// | 0 | 1 |   1    |
    /// | 1 | 0 |   1    |
    /// | 1 | 1 |   1    |
    /// ```
    ///
    /// Also known as: sum. The operation is n-ary; `others` may be empty.
    fn op_or(&self, others: &[Self]) -> Self;

    /// Returns the complemented disjunction (NOR) of this function with `others`.
    fn op_nor(&self, others: &[Self]) -> Self;

    /// Returns the conjunction of this function with `others`.
    ///
    /// ```text
    /// | f | g | f AND g |
    /// |---|---|---------|
    /// | 0 | 0 |    0    |
    /// | 0 | 1 |    0    |
    /// | 1 | 0 |    0    |
    /// | 1 | 1 |    1    |
    /// ```
    ///
    /// Also known as: product. The operation is n-ary; `others` may be empty.
    fn op_and(&self, others: &[Self]) -> Self;

    /// Returns the complemented conjunction (NAND) of this function with `others`.
    fn op_nand(&self, others: &[Self]) -> Self;

    /// Returns the exclusive-or of this function with `others`.
    ///
    /// ```text
    /// | f | g | f XOR g |
    /// |---|---|---------|
    /// | 0 | 0 |    0    |
    /// | 0 | 1 |    1    |
    /// | 1 | 0 |    1    |
    /// | 1 | 1 |    0    |
    /// ```
    ///
    /// Also known as: odd parity. The operation is n-ary.
    fn op_xor(&self, others: &[Self]) -> Self;

    /// Returns the complemented exclusive-or (XNOR, even parity) of this
    /// function with `others`.
    fn op_xnor(&self, others: &[Self]) -> Self;

    /// Returns the "less than or equal" function: f <= g.
    ///
    /// ```text
    /// | f | g | f <= g |
    /// |---|---|--------|
    /// | 0 | 0 |   1    |
    /// | 0 | 1 |   1    |
    /// | 1 | 0 |   0    |
    /// | 1 | 1 |   1    |
    /// ```
    ///
    /// Also known as: implies (f -> g).
    fn op_le(&self, other: &Self) -> Self;

    /// Returns the "greater than or equal" function: f >= g.
    ///
    /// ```text
    /// | f | g | f >= g |
    /// |---|---|--------|
    /// | 0 | 0 |   1    |
    /// | 0 | 1 |   0    |
    /// | 1 | 0 |   1    |
    /// | 1 | 1 |   1    |
    /// ```
    ///
    /// Also known as: reverse implies (g -> f).
    fn op_ge(&self, other: &Self) -> Self;

    /// Returns the function that results from restricting a subset of the
    /// support variables to constant values: g = f | xi=b.
    ///
    /// Variables in `point` that are not part of the support are ignored.
    fn restrict(&self, point: &Point) -> Self;

    /// Returns the function that results from substituting a subset of the
    /// support variables with other functions: g = f1 | xi=f2.
    fn compose(&self, mapping: &BTreeMap<Variable, Self>) -> Self;

    /// Returns one satisfying input point, or `None` if the function is
    /// unsatisfiable.
    fn satisfy_one(&self) -> Option<Point>;

    /// Returns the complete set of satisfying input points.
    fn satisfy_all(&self) -> Vec<Point>;

    /// Returns the exact number of satisfying input points.
    ///
    /// Always equals `satisfy_all().len()`, but a representation may compute
    /// it without materializing the points.
    fn satisfy_count(&self) -> BigUint;

    /// Returns whether the function is negative unate in every variable of `vs`.
    ///
    /// f is negative unate in xi if f[xi'] >= f[xi], the ordering being the
    /// one defined by [`Function::op_le`].
    fn is_neg_unate(&self, vs: &[Variable]) -> bool;

    /// Returns whether the function is positive unate in every variable of `vs`.
    ///
    /// f is positive unate in xi if f[xi] >= f[xi'].
    fn is_pos_unate(&self, vs: &[Variable]) -> bool;

    /// If the function is a constant, returns its value.
    ///
    /// The vector layer uses this to collapse a fully restricted element back
    /// into a concrete bit.
    fn as_const(&self) -> Option<bool>;

    /// If the function is a bare variable literal, returns that variable.
    ///
    /// The vector layer uses this to expand vector-keyed restriction
    /// mappings into per-variable scalar entries.
    fn as_var(&self) -> Option<Variable>;

    /// Returns whether the function is binate in `vs`: neither negative nor
    /// positive unate.
    ///
    /// This is a structural identity over the two unate checks, never a
    /// separate computation.
    fn is_binate(&self, vs: &[Variable]) -> bool {
        !(self.is_neg_unate(vs) || self.is_pos_unate(vs))
    }

    /// Returns an iterator over the `2^k` cofactors of the k variables `vs`.
    ///
    /// See the [module documentation](self) for the enumeration order.
    /// The iterator is lazy and finite; each call produces an independent,
    /// restartable sequence. Every yielded item is the result of a full
    /// `restrict` call, so materializing all cofactors of a large `vs` costs
    /// exponential time and space.
    ///
    /// An empty `vs` yields exactly one cofactor: the restriction under the
    /// empty assignment.
    fn iter_cofactors<'a>(&'a self, vs: &'a [Variable]) -> Cofactors<'a, Self> {
        Cofactors::new(self, vs)
    }

    /// Returns the materialized cofactor sequence of `vs`, in enumeration order.
    ///
    /// The *cofactor* of f(x1, ..., xi, ..., xn) with respect to xi is
    /// f[xi] = f(x1, ..., 1, ..., xn); with respect to xi' it is
    /// f[xi'] = f(x1, ..., 0, ..., xn).
    fn cofactors(&self, vs: &[Variable]) -> Vec<Self> {
        self.iter_cofactors(vs).collect()
    }

    /// Returns the smoothing of the function with respect to `vs`.
    ///
    /// The *smoothing* with respect to xi is S[xi](f) = f[xi] + f[xi'] ---
    /// existential quantification, here generalized to the disjunction of
    /// all `2^k` cofactors.
    fn smoothing(&self, vs: &[Variable]) -> Self {
        let cfs = self.cofactors(vs);
        let (first, rest) = cfs.split_first().expect("cofactor sequence is never empty");
        first.op_or(rest)
    }

    /// Returns the consensus of the function with respect to `vs`.
    ///
    /// The *consensus* with respect to xi is C[xi](f) = f[xi] * f[xi'] ---
    /// universal quantification, here the conjunction of all `2^k` cofactors.
    fn consensus(&self, vs: &[Variable]) -> Self {
        let cfs = self.cofactors(vs);
        let (first, rest) = cfs.split_first().expect("cofactor sequence is never empty");
        first.op_and(rest)
    }

    /// Returns the derivative of the function with respect to `vs`.
    ///
    /// The *derivative* with respect to xi is df/dxi = f[xi] (xor) f[xi'] ---
    /// the parity reduction of all `2^k` cofactors, sometimes called the
    /// boundary or sensitivity function.
    fn derivative(&self, vs: &[Variable]) -> Self {
        let cfs = self.cofactors(vs);
        let (first, rest) = cfs.split_first().expect("cofactor sequence is never empty");
        first.op_xor(rest)
    }

    /// Expands all vector bindings in `mapping` into scalar bindings, then
    /// delegates to [`Function::restrict`].
    fn vrestrict(&self, mapping: &VarMap<Self>) -> Result<Self> {
        Ok(self.restrict(&mapping.expand()?))
    }
}

/// Lazy iterator over the `2^k` cofactors of a function.
///
/// Created by [`Function::iter_cofactors`]. Holds O(1) state; each `next`
/// call performs one full `restrict`.
pub struct Cofactors<'a, F> {
    func: &'a F,
    vs: &'a [Variable],
    next: u64,
    total: u64,
}

impl<'a, F: Function> Cofactors<'a, F> {
    fn new(func: &'a F, vs: &'a [Variable]) -> Self {
        assert!(vs.len() < 64, "cofactor enumeration over {} variables would overflow", vs.len());
        Cofactors {
            func,
            vs,
            next: 0,
            total: 1u64 << vs.len(),
        }
    }
}

impl<F: Function> Iterator for Cofactors<'_, F> {
    type Item = F;

    fn next(&mut self) -> Option<F> {
        if self.next == self.total {
            return None;
        }
        let n = self.next;
        self.next += 1;
        let point: Point = self
            .vs
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), bit_on(n, i as u32)))
            .collect();
        Some(self.func.restrict(&point))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl<F: Function> ExactSizeIterator for Cofactors<'_, F> {}

impl<F: Function> FusedIterator for Cofactors<'_, F> {}
