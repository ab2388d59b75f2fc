//! Indexed vectors of Boolean functions.
//!
//! A [`BitVector`] addresses a run of Boolean signals as a single value.
//! Each element is an [`Elem`]: either a concrete bit or a still-symbolic
//! function. Storage position 0 is the least-significant bit.
//!
//! Elements are addressed through a logical *window* `[start, start+len)`.
//! The start offset may be nonzero (and even negative), which lets a
//! sub-vector keep the coordinate system of the bus it was sliced from:
//! bit 13 of a bus stays "bit 13" in every sub-slice that contains it.
//!
//! Two numeric interpretations are supported via [`Bnr`]: unsigned and
//! two's complement. The interpretation is a plain mutable field; changing
//! it affects only future [`BitVector::to_int`] calls.
//!
//! # Examples
//!
//! ```
//! use boolfunc_rs::vector::{BitVector, Bnr};
//!
//! // A purely concrete vector needs no function type; `()` will do.
//! let mut v: BitVector<()> = BitVector::from_bits([false, true, true, false]);
//! assert_eq!(v.to_uint().unwrap(), 6u32.into());
//!
//! v.bnr = Bnr::TwosComplement;
//! v.append(true.into());
//! // 0b10110 as a 5-bit two's complement value
//! assert_eq!(v.to_int().unwrap(), (-10).into());
//! ```

use std::ops::Range;

use num_bigint::{BigInt, BigUint};

use crate::errors::{Error, Result};
use crate::func::{Function, Point};
use crate::mapping::VarMap;

/// Binary number representation: how a vector's bits decode to an integer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Bnr {
    /// Plain unsigned, little-endian.
    #[default]
    Unsigned,
    /// Two's complement: the most-significant bit carries weight `-2^(len-1)`.
    TwosComplement,
}

/// One element of a [`BitVector`]: a concrete bit or a symbolic function.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Elem<F> {
    /// Constant 0.
    Zero,
    /// Constant 1.
    One,
    /// A still-symbolic function.
    Func(F),
}

impl<F> Elem<F> {
    /// Returns the concrete value of this element, or `None` if it is
    /// still symbolic.
    pub fn as_const(&self) -> Option<bool> {
        match self {
            Elem::Zero => Some(false),
            Elem::One => Some(true),
            Elem::Func(_) => None,
        }
    }

    /// Returns whether this element is a concrete bit.
    pub fn is_const(&self) -> bool {
        self.as_const().is_some()
    }
}

impl<F> From<bool> for Elem<F> {
    fn from(value: bool) -> Self {
        if value {
            Elem::One
        } else {
            Elem::Zero
        }
    }
}

impl<F: Function> Elem<F> {
    /// Applies [`Function::restrict`] to a symbolic element, collapsing the
    /// result back to a concrete bit when the restriction made it constant.
    /// Concrete elements pass through unchanged.
    pub fn restrict(&self, point: &Point) -> Self {
        match self {
            Elem::Func(f) => {
                let g = f.restrict(point);
                match g.as_const() {
                    Some(value) => Elem::from(value),
                    None => Elem::Func(g),
                }
            }
            other => other.clone(),
        }
    }
}

/// A mutable, index-addressable ordered collection of Boolean signals.
///
/// See the [module documentation](self) for the window and numeric
/// semantics. `F` is the symbolic function type of the elements; purely
/// structural operations place no bounds on it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BitVector<F> {
    elems: Vec<Elem<F>>,
    start: i64,
    /// Binary number representation used by [`BitVector::to_int`].
    pub bnr: Bnr,
}

impl<F> BitVector<F> {
    /// Creates a vector over the given elements, with `start = 0` and
    /// unsigned representation.
    pub fn new(elems: Vec<Elem<F>>) -> Self {
        BitVector {
            elems,
            start: 0,
            bnr: Bnr::Unsigned,
        }
    }

    /// Creates a vector of concrete bits, least-significant first.
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        Self::new(bits.into_iter().map(Elem::from).collect())
    }

    /// Sets the window start offset.
    pub fn with_start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    /// Sets the binary number representation.
    pub fn with_bnr(mut self, bnr: Bnr) -> Self {
        self.bnr = bnr;
        self
    }

    /// Returns the window start offset.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns whether the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Iterates over the elements, least-significant first.
    pub fn iter(&self) -> std::slice::Iter<'_, Elem<F>> {
        self.elems.iter()
    }

    /// Returns the element at logical index `i`.
    ///
    /// A nonnegative `i` must lie inside the window: positions below `start`
    /// are a range error, and `i` translates to storage position
    /// `i - start`. A negative `i` translates to storage position
    /// `i + start` --- note the asymmetry with the nonnegative case; this is
    /// long-standing behavior that callers depend on, kept verbatim. Either
    /// way, a computed storage position outside `[0, len)` is a range error.
    pub fn get(&self, i: i64) -> Result<&Elem<F>> {
        let pos = self.norm_index(i)?;
        Ok(&self.elems[pos])
    }

    /// Returns the element at zero-based window position `i`, i.e. the
    /// element at logical index `i + start`.
    pub fn get_zero_based(&self, i: usize) -> Result<&Elem<F>> {
        self.get(i as i64 + self.start)
    }

    /// Writes the element at RAW storage position `pos`.
    ///
    /// Unlike reads, single-element writes are *not* translated through the
    /// window: `pos` indexes storage directly, ignoring `start`. This
    /// asymmetry is intentional, preserved behavior. Slice assignment
    /// ([`BitVector::set_slice`]) *is* window-translated.
    pub fn set(&mut self, pos: usize, elem: Elem<F>) -> Result<()> {
        if pos >= self.elems.len() {
            return Err(Error::OutOfRange { index: pos as i64 });
        }
        self.elems[pos] = elem;
        Ok(())
    }

    /// Replaces the window-normalized range `[lo, hi)` with `values`.
    ///
    /// Bounds are normalized exactly like [`BitVector::slice`]. The
    /// replacement may have a different length than the range it replaces,
    /// in which case the vector grows or shrinks.
    pub fn set_slice(
        &mut self,
        lo: Option<i64>,
        hi: Option<i64>,
        values: impl IntoIterator<Item = Elem<F>>,
    ) -> Result<()> {
        let range = self.norm_slice(lo, hi)?;
        self.elems.splice(range, values);
        Ok(())
    }

    /// Appends one element to the high end.
    pub fn append(&mut self, elem: Elem<F>) {
        self.elems.push(elem);
    }

    /// Converts the vector to an unsigned integer.
    ///
    /// Storage position i contributes `2^i` when set (little-endian,
    /// independent of `start`). Fails with a conversion error if any element
    /// is still symbolic.
    pub fn to_uint(&self) -> Result<BigUint> {
        let mut num = BigUint::ZERO;
        for (i, elem) in self.elems.iter().enumerate() {
            match elem.as_const() {
                Some(true) => num += BigUint::from(1u8) << i,
                Some(false) => {}
                None => return Err(Error::NotConstant { position: i }),
            }
        }
        Ok(num)
    }

    /// Converts the vector to a signed integer.
    ///
    /// Equals [`BitVector::to_uint`] unless the representation is two's
    /// complement and the most-significant element is 1, in which case the
    /// result is `to_uint() - 2^len`.
    pub fn to_int(&self) -> Result<BigInt> {
        let num = BigInt::from(self.to_uint()?);
        if self.bnr == Bnr::TwosComplement && matches!(self.elems.last(), Some(Elem::One)) {
            Ok(num - (BigInt::from(1) << self.elems.len()))
        } else {
            Ok(num)
        }
    }

    /// Translates a logical index to a storage position.
    fn norm_index(&self, i: i64) -> Result<usize> {
        let pos = if i >= 0 {
            if i < self.start {
                return Err(Error::OutOfRange { index: i });
            }
            i - self.start
        } else {
            i + self.start
        };
        if pos < 0 || pos as usize >= self.elems.len() {
            return Err(Error::OutOfRange { index: i });
        }
        Ok(pos as usize)
    }

    /// Normalizes optional slice bounds against the current logical window,
    /// returning the corresponding storage range.
    ///
    /// Missing bounds default to the window's own bounds; negative bounds
    /// resolve relative to the window stop. Bounds outside the window are a
    /// range error; a normalized empty range is the distinct
    /// [`Error::ZeroSizedSlice`].
    fn norm_slice(&self, lo: Option<i64>, hi: Option<i64>) -> Result<Range<usize>> {
        let window_start = self.start;
        let window_stop = self.start + self.elems.len() as i64;
        let lo = match lo {
            Some(i) if i < 0 => window_stop + i,
            Some(i) => i,
            None => window_start,
        };
        let hi = match hi {
            Some(i) if i < 0 => window_stop + i,
            Some(i) => i,
            None => window_stop,
        };
        if lo < window_start {
            return Err(Error::OutOfRange { index: lo });
        }
        if hi > window_stop {
            return Err(Error::OutOfRange { index: hi });
        }
        if lo >= hi {
            return Err(Error::ZeroSizedSlice);
        }
        Ok((lo - self.start) as usize..(hi - self.start) as usize)
    }
}

impl<F: Clone> BitVector<F> {
    /// Returns the sub-vector selected by the window-normalized bounds
    /// `[lo, hi)`.
    ///
    /// The result keeps the same kind and representation, and its `start`
    /// is the normalized slice start plus this vector's `start`: nested
    /// sub-vectors continue the same increasing-index coordinate system
    /// rather than resetting to zero.
    pub fn slice(&self, lo: Option<i64>, hi: Option<i64>) -> Result<Self> {
        let range = self.norm_slice(lo, hi)?;
        let start = range.start as i64 + self.start;
        Ok(BitVector {
            elems: self.elems[range].to_vec(),
            start,
            bnr: self.bnr,
        })
    }

    /// Extends the vector by `n` bits at the high end.
    ///
    /// Under two's complement the extension bit is the current
    /// most-significant element (sign extension, even when that element is
    /// still symbolic); otherwise it is constant 0 (zero extension). An
    /// empty vector zero-extends. `start` is unchanged.
    pub fn ext(&mut self, n: usize) {
        let bit = match self.bnr {
            Bnr::TwosComplement => self.elems.last().cloned().unwrap_or(Elem::Zero),
            Bnr::Unsigned => Elem::Zero,
        };
        for _ in 0..n {
            self.elems.push(bit.clone());
        }
    }
}

impl<F: Function> BitVector<F> {
    /// Returns a new vector with [`Function::restrict`] applied to every
    /// element. The source vector is never mutated.
    pub fn restrict(&self, point: &Point) -> Self {
        BitVector {
            elems: self.elems.iter().map(|e| e.restrict(point)).collect(),
            start: self.start,
            bnr: self.bnr,
        }
    }

    /// Expands all vector bindings in `mapping` into scalar bindings, then
    /// delegates to [`BitVector::restrict`].
    pub fn vrestrict(&self, mapping: &VarMap<F>) -> Result<Self> {
        Ok(self.restrict(&mapping.expand()?))
    }
}

impl<'a, F> IntoIterator for &'a BitVector<F> {
    type Item = &'a Elem<F>;
    type IntoIter = std::slice::Iter<'a, Elem<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Reduction and bitwise operations on a vector of Boolean signals.
///
/// These cannot be derived generically --- producing a function for a
/// constant-bit element requires the concrete representation's own notion
/// of constants --- so each concrete vector type supplies them element-wise
/// with its own operator set. There are no default bodies: a vector type
/// without an implementation does not compile against this interface.
pub trait VectorOps<F: Function>: Sized {
    /// Unary OR reduction across all elements.
    fn uor(&self) -> F;

    /// Unary AND reduction across all elements.
    fn uand(&self) -> F;

    /// Unary XOR reduction across all elements.
    fn uxor(&self) -> F;

    /// Element-wise complement.
    fn bitwise_not(&self) -> Self;

    /// Element-wise disjunction with `other`.
    fn bitwise_or(&self, other: &Self) -> Self;

    /// Element-wise conjunction with `other`.
    fn bitwise_and(&self, other: &Self) -> Self;

    /// Element-wise exclusive-or with `other`.
    fn bitwise_xor(&self, other: &Self) -> Self;
}
