//! Restriction mappings with vector-valued bindings.
//!
//! A [`VarMap`] is a restriction mapping that may bind whole bit vectors in
//! addition to single variables: binding a vector `key` to a list of bits
//! binds each of the key's elements to the corresponding bit. Expansion
//! flattens the vector bindings into scalar ones, producing the plain
//! [`Point`] that `restrict` consumes.

use std::collections::BTreeMap;

use log::debug;

use crate::errors::{Error, Result};
use crate::func::{Function, Point};
use crate::var::Variable;
use crate::vector::{BitVector, Elem};

/// A restriction mapping mixing scalar and vector bindings.
///
/// Scalar bindings map a [`Variable`] to a constant; vector bindings map a
/// [`BitVector`] to a list of constants, one per element. [`VarMap::expand`]
/// flattens everything into a single [`Point`].
#[derive(Debug, Clone)]
pub struct VarMap<F> {
    scalars: BTreeMap<Variable, bool>,
    vectors: Vec<(BitVector<F>, Vec<bool>)>,
}

impl<F: Function> VarMap<F> {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        VarMap {
            scalars: BTreeMap::new(),
            vectors: Vec::new(),
        }
    }

    /// Binds a single variable to a constant value.
    pub fn bind(&mut self, var: Variable, value: bool) {
        self.scalars.insert(var, value);
    }

    /// Binds every element of `key` to the corresponding element of
    /// `values`, positionally.
    ///
    /// The length agreement is checked at expansion time, not here.
    pub fn bind_vector(&mut self, key: BitVector<F>, values: Vec<bool>) {
        self.vectors.push((key, values));
    }

    /// Flattens the mapping into a plain [`Point`].
    ///
    /// For each vector binding, `key.len()` must equal `values.len()`
    /// (otherwise [`Error::LengthMismatch`]), and the key's element at
    /// zero-based window position i binds to `values[i]`. A key element
    /// that is already a concrete bit carries no variable and contributes
    /// nothing; a symbolic element that is not a bare variable is
    /// [`Error::NotAVariable`].
    ///
    /// When an expanded entry and a literal scalar binding share a
    /// variable, the expanded entry wins.
    pub fn expand(&self) -> Result<Point> {
        let mut point = self.scalars.clone();
        for (key, values) in &self.vectors {
            if key.len() != values.len() {
                return Err(Error::LengthMismatch {
                    key_len: key.len(),
                    val_len: values.len(),
                });
            }
            debug!("expanding vector binding of {} elements", key.len());
            for (i, &value) in values.iter().enumerate() {
                match key.get_zero_based(i)? {
                    // A concrete bit has no variable to bind.
                    Elem::Zero | Elem::One => {}
                    Elem::Func(f) => match f.as_var() {
                        Some(var) => {
                            point.insert(var, value);
                        }
                        None => return Err(Error::NotAVariable { position: i }),
                    },
                }
            }
        }
        Ok(point)
    }
}

impl<F: Function> Default for VarMap<F> {
    fn default() -> Self {
        Self::new()
    }
}
