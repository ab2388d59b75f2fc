//! Test-only concrete implementation of the function contract.
//!
//! [`Tt`] is a miniature truth table: the simplest possible representation
//! that satisfies [`Function`], used by the unit tests to exercise the
//! generic algorithms. It is deliberately naive --- every operation tabulates
//! over the merged support --- and is not part of the public API.

use std::collections::{BTreeMap, BTreeSet};

use num_bigint::BigUint;

use crate::func::{Function, Point};
use crate::utils::bit_on;
use crate::var::Variable;
use crate::vector::{BitVector, Elem, VectorOps};

/// A truth-table Boolean function.
///
/// `vars` is the sorted support; `rows` has `2^vars.len()` entries, row `r`
/// giving the value under the assignment where `vars[i]` takes bit i of `r`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Tt {
    vars: Vec<Variable>,
    rows: Vec<bool>,
}

impl Tt {
    pub fn zero() -> Self {
        Self::constant(false)
    }

    pub fn one() -> Self {
        Self::constant(true)
    }

    pub fn constant(value: bool) -> Self {
        Tt {
            vars: Vec::new(),
            rows: vec![value],
        }
    }

    pub fn var(v: Variable) -> Self {
        Tt {
            vars: vec![v],
            rows: vec![false, true],
        }
    }

    /// Evaluates the function under `point`, which must assign every
    /// support variable.
    fn value_at(&self, point: &Point) -> bool {
        let mut row = 0usize;
        for (i, v) in self.vars.iter().enumerate() {
            if point[v] {
                row |= 1 << i;
            }
        }
        self.rows[row]
    }

    /// Builds the table over `vars` by evaluating `f` at every assignment.
    fn tabulate(vars: Vec<Variable>, f: impl Fn(&Point) -> bool) -> Self {
        let mut rows = Vec::with_capacity(1 << vars.len());
        for r in 0..(1u64 << vars.len()) {
            let point: Point = vars
                .iter()
                .enumerate()
                .map(|(i, v)| (v.clone(), bit_on(r, i as u32)))
                .collect();
            rows.push(f(&point));
        }
        Tt { vars, rows }
    }

    fn point_for_row(&self, row: usize) -> Point {
        self.vars
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), bit_on(row as u64, i as u32)))
            .collect()
    }

    /// Combines `fs` pointwise over their merged support.
    fn combine(fs: &[&Tt], op: impl Fn(&[bool]) -> bool) -> Tt {
        let mut merged = BTreeSet::new();
        for f in fs {
            merged.extend(f.vars.iter().cloned());
        }
        let vars: Vec<Variable> = merged.into_iter().collect();
        Self::tabulate(vars, |point| {
            let values: Vec<bool> = fs.iter().map(|f| f.value_at(point)).collect();
            op(&values)
        })
    }

    fn nary<'a>(&'a self, others: &'a [Tt]) -> Vec<&'a Tt> {
        std::iter::once(self).chain(others.iter()).collect()
    }

    fn is_tautology(&self) -> bool {
        self.rows.iter().all(|&b| b)
    }

    fn single(var: &Variable, value: bool) -> Point {
        let mut point = Point::new();
        point.insert(var.clone(), value);
        point
    }
}

impl Function for Tt {
    fn support(&self) -> BTreeSet<Variable> {
        self.vars.iter().cloned().collect()
    }

    fn op_not(&self) -> Self {
        Tt {
            vars: self.vars.clone(),
            rows: self.rows.iter().map(|&b| !b).collect(),
        }
    }

    fn op_or(&self, others: &[Self]) -> Self {
        Self::combine(&self.nary(others), |values| values.iter().any(|&b| b))
    }

    fn op_nor(&self, others: &[Self]) -> Self {
        self.op_or(others).op_not()
    }

    fn op_and(&self, others: &[Self]) -> Self {
        Self::combine(&self.nary(others), |values| values.iter().all(|&b| b))
    }

    fn op_nand(&self, others: &[Self]) -> Self {
        self.op_and(others).op_not()
    }

    fn op_xor(&self, others: &[Self]) -> Self {
        Self::combine(&self.nary(others), |values| {
            values.iter().fold(false, |acc, &b| acc ^ b)
        })
    }

    fn op_xnor(&self, others: &[Self]) -> Self {
        self.op_xor(others).op_not()
    }

    fn op_le(&self, other: &Self) -> Self {
        Self::combine(&[self, other], |values| !values[0] || values[1])
    }

    fn op_ge(&self, other: &Self) -> Self {
        Self::combine(&[self, other], |values| values[0] || !values[1])
    }

    fn restrict(&self, point: &Point) -> Self {
        let kept: Vec<Variable> = self
            .vars
            .iter()
            .filter(|v| !point.contains_key(v))
            .cloned()
            .collect();
        Self::tabulate(kept, |sub| {
            let mut full = sub.clone();
            for v in &self.vars {
                if let Some(&b) = point.get(v) {
                    full.insert(v.clone(), b);
                }
            }
            self.value_at(&full)
        })
    }

    fn compose(&self, mapping: &BTreeMap<Variable, Self>) -> Self {
        let mut merged = BTreeSet::new();
        for v in &self.vars {
            match mapping.get(v) {
                Some(g) => merged.extend(g.vars.iter().cloned()),
                None => {
                    merged.insert(v.clone());
                }
            }
        }
        let vars: Vec<Variable> = merged.into_iter().collect();
        Self::tabulate(vars, |point| {
            let mut full = Point::new();
            for v in &self.vars {
                let b = match mapping.get(v) {
                    Some(g) => g.value_at(point),
                    None => point[v],
                };
                full.insert(v.clone(), b);
            }
            self.value_at(&full)
        })
    }

    fn satisfy_one(&self) -> Option<Point> {
        self.rows
            .iter()
            .position(|&b| b)
            .map(|row| self.point_for_row(row))
    }

    fn satisfy_all(&self) -> Vec<Point> {
        self.rows
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(row, _)| self.point_for_row(row))
            .collect()
    }

    fn satisfy_count(&self) -> BigUint {
        BigUint::from(self.rows.iter().filter(|&&b| b).count())
    }

    fn is_neg_unate(&self, vs: &[Variable]) -> bool {
        vs.iter().all(|v| {
            let f0 = self.restrict(&Self::single(v, false));
            let f1 = self.restrict(&Self::single(v, true));
            f1.op_le(&f0).is_tautology()
        })
    }

    fn is_pos_unate(&self, vs: &[Variable]) -> bool {
        vs.iter().all(|v| {
            let f0 = self.restrict(&Self::single(v, false));
            let f1 = self.restrict(&Self::single(v, true));
            f0.op_le(&f1).is_tautology()
        })
    }

    fn as_const(&self) -> Option<bool> {
        let first = self.rows[0];
        if self.rows.iter().all(|&b| b == first) {
            Some(first)
        } else {
            None
        }
    }

    fn as_var(&self) -> Option<Variable> {
        if self.vars.len() == 1 && self.rows == [false, true] {
            Some(self.vars[0].clone())
        } else {
            None
        }
    }
}

fn elem_to_tt(elem: &Elem<Tt>) -> Tt {
    match elem {
        Elem::Zero => Tt::zero(),
        Elem::One => Tt::one(),
        Elem::Func(f) => f.clone(),
    }
}

fn collapse(f: Tt) -> Elem<Tt> {
    match f.as_const() {
        Some(value) => Elem::from(value),
        None => Elem::Func(f),
    }
}

impl VectorOps<Tt> for BitVector<Tt> {
    fn uor(&self) -> Tt {
        let fs: Vec<Tt> = self.iter().map(elem_to_tt).collect();
        match fs.split_first() {
            Some((first, rest)) => first.op_or(rest),
            None => Tt::zero(),
        }
    }

    fn uand(&self) -> Tt {
        let fs: Vec<Tt> = self.iter().map(elem_to_tt).collect();
        match fs.split_first() {
            Some((first, rest)) => first.op_and(rest),
            None => Tt::one(),
        }
    }

    fn uxor(&self) -> Tt {
        let fs: Vec<Tt> = self.iter().map(elem_to_tt).collect();
        match fs.split_first() {
            Some((first, rest)) => first.op_xor(rest),
            None => Tt::zero(),
        }
    }

    fn bitwise_not(&self) -> Self {
        let elems: Vec<Elem<Tt>> = self
            .iter()
            .map(|e| collapse(elem_to_tt(e).op_not()))
            .collect();
        BitVector::new(elems).with_start(self.start()).with_bnr(self.bnr)
    }

    fn bitwise_or(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a.op_or(&[b]))
    }

    fn bitwise_and(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a.op_and(&[b]))
    }

    fn bitwise_xor(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a.op_xor(&[b]))
    }
}

impl BitVector<Tt> {
    fn zip_with(&self, other: &Self, op: impl Fn(Tt, Tt) -> Tt) -> Self {
        assert_eq!(self.len(), other.len(), "bitwise operation on vectors of different lengths");
        let elems: Vec<Elem<Tt>> = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| collapse(op(elem_to_tt(a), elem_to_tt(b))))
            .collect();
        BitVector::new(elems).with_start(self.start()).with_bnr(self.bnr)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn v(name: &str) -> Variable {
        Variable::new(name)
    }

    #[test]
    fn test_var_table() {
        let x = v("x");
        let f = Tt::var(x.clone());
        assert_eq!(f.support(), BTreeSet::from([x.clone()]));
        assert_eq!(f.as_var(), Some(x));
        assert_eq!(f.as_const(), None);
    }

    #[test]
    fn test_operator_truth_tables() {
        let a = Tt::var(v("a"));
        let b = Tt::var(v("b"));

        // Rows are ordered with "a" as the least-significant variable:
        // (a, b) = (0,0), (1,0), (0,1), (1,1).
        assert_eq!(a.op_or(&[b.clone()]).rows, vec![false, true, true, true]);
        assert_eq!(a.op_nor(&[b.clone()]).rows, vec![true, false, false, false]);
        assert_eq!(a.op_and(&[b.clone()]).rows, vec![false, false, false, true]);
        assert_eq!(a.op_nand(&[b.clone()]).rows, vec![true, true, true, false]);
        assert_eq!(a.op_xor(&[b.clone()]).rows, vec![false, true, true, false]);
        assert_eq!(a.op_xnor(&[b.clone()]).rows, vec![true, false, false, true]);
        assert_eq!(a.op_le(&b).rows, vec![true, false, true, true]);
        assert_eq!(a.op_ge(&b).rows, vec![true, true, false, true]);
        assert_eq!(a.op_not().rows, vec![true, false]);
    }

    #[test]
    fn test_nary_parity() {
        let a = Tt::var(v("a"));
        let b = Tt::var(v("b"));
        let c = Tt::var(v("c"));
        let f = a.op_xor(&[b, c]);
        // Odd parity of three inputs.
        assert_eq!(f.satisfy_count(), BigUint::from(4u32));
        let g = f.op_not();
        assert_eq!(g, Tt::var(v("a")).op_xnor(&[Tt::var(v("b")), Tt::var(v("c"))]));
    }

    #[test]
    fn test_restrict_drops_variables() {
        let a = v("a");
        let b = v("b");
        let f = Tt::var(a.clone()).op_and(&[Tt::var(b.clone())]);

        let g = f.restrict(&Tt::single(&a, true));
        assert_eq!(g, Tt::var(b.clone()));

        let h = f.restrict(&Tt::single(&a, false));
        assert_eq!(h.as_const(), Some(false));
        assert_eq!(h.support(), BTreeSet::from([b]));
    }

    #[test]
    fn test_restrict_ignores_foreign_variables() {
        let a = v("a");
        let f = Tt::var(a.clone());
        let g = f.restrict(&Tt::single(&v("zzz"), true));
        assert_eq!(g, f);
    }

    #[test]
    fn test_compose() {
        let a = v("a");
        let b = v("b");
        let c = v("c");
        // f = a AND b; substituting a = b OR c gives (b OR c) AND b = b.
        let f = Tt::var(a.clone()).op_and(&[Tt::var(b.clone())]);
        let mut mapping = BTreeMap::new();
        mapping.insert(a, Tt::var(b.clone()).op_or(&[Tt::var(c)]));
        let g = f.compose(&mapping);

        let expected = Tt::var(b.clone());
        // Same function over a wider declared support.
        assert_eq!(g.restrict(&Point::new()), g);
        for point in g.satisfy_all() {
            assert!(point[&b]);
        }
        assert_eq!(g.satisfy_count(), BigUint::from(2u32));
        assert_eq!(g.smoothing(&[v("c")]), expected);
    }

    #[test]
    fn test_satisfy() {
        let a = v("a");
        let b = v("b");
        let f = Tt::var(a.clone()).op_and(&[Tt::var(b.clone())]);
        let one = f.satisfy_one().unwrap();
        assert!(one[&a] && one[&b]);
        assert_eq!(f.satisfy_all(), vec![one]);
        assert_eq!(f.satisfy_count(), BigUint::from(1u32));
    }

    #[test]
    fn test_vector_reductions() {
        let x = v("x");
        let y = v("y");
        let vec: BitVector<Tt> = BitVector::new(vec![
            Elem::Func(Tt::var(x.clone())),
            Elem::Func(Tt::var(y.clone())),
            Elem::Zero,
        ]);

        assert_eq!(vec.uor(), Tt::var(x.clone()).op_or(&[Tt::var(y.clone()), Tt::zero()]));
        // AND with a constant 0 element collapses.
        assert_eq!(vec.uand().as_const(), Some(false));
        assert_eq!(vec.uxor(), Tt::var(x).op_xor(&[Tt::var(y)]).op_xor(&[Tt::zero()]));
    }

    #[test]
    fn test_vector_reductions_empty() {
        let vec: BitVector<Tt> = BitVector::new(vec![]);
        assert_eq!(vec.uor().as_const(), Some(false));
        assert_eq!(vec.uand().as_const(), Some(true));
        assert_eq!(vec.uxor().as_const(), Some(false));
    }

    #[test]
    fn test_bitwise_ops() {
        let x = v("x");
        let a: BitVector<Tt> =
            BitVector::new(vec![Elem::One, Elem::Zero, Elem::Func(Tt::var(x.clone()))]).with_start(2);
        let b: BitVector<Tt> =
            BitVector::new(vec![Elem::One, Elem::One, Elem::Func(Tt::var(x.clone()))]).with_start(2);

        let not_a = a.bitwise_not();
        assert_eq!(not_a.start(), 2);
        assert_eq!(not_a.get_zero_based(0).unwrap().as_const(), Some(false));
        assert_eq!(not_a.get_zero_based(1).unwrap().as_const(), Some(true));
        assert_eq!(
            not_a.get_zero_based(2).unwrap(),
            &Elem::Func(Tt::var(x.clone()).op_not())
        );

        let or = a.bitwise_or(&b);
        assert_eq!(or.get_zero_based(0).unwrap().as_const(), Some(true));
        assert_eq!(or.get_zero_based(1).unwrap().as_const(), Some(true));
        // x OR x = x
        assert_eq!(or.get_zero_based(2).unwrap(), &Elem::Func(Tt::var(x.clone())));

        let and = a.bitwise_and(&b);
        assert_eq!(and.get_zero_based(1).unwrap().as_const(), Some(false));

        let xor = a.bitwise_xor(&b);
        assert_eq!(xor.get_zero_based(0).unwrap().as_const(), Some(false));
        assert_eq!(xor.get_zero_based(1).unwrap().as_const(), Some(true));
        // x XOR x collapses to constant 0.
        assert_eq!(xor.get_zero_based(2).unwrap().as_const(), Some(false));
    }
}
