//! Elementwise arithmetic for views and numeric matrix presets.
//!
//! Non-compound operators take a shared view and produce a fresh `Vec`
//! without touching the source; compound operators mutate through an
//! exclusive view. The right-hand side may be a scalar, a slice, a `Vec`,
//! or another view. One length rule everywhere: the left side must not be
//! longer than the right, extra right-hand elements are ignored.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::{One, Zero};
use rand::distributions::Distribution;
use rand::thread_rng;
use statrs::distribution::Normal;

use crate::capability::{Sequence, SequenceMut};
use crate::matrix::Matrix;
use crate::subset::{Subset, SubsetMut};

// -- view x scalar -----------------------------------------------------

macro_rules! scalar_ops {
    ($($t:ty)*) => {$(
        impl<'a, 'b, C> Add<$t> for &'b Subset<'a, C>
        where
            C: Sequence<Elem = $t>,
        {
            type Output = Vec<$t>;

            fn add(self, rhs: $t) -> Vec<$t> {
                self.iter().map(|&v| v + rhs).collect()
            }
        }

        impl<'a, 'b, C> Sub<$t> for &'b Subset<'a, C>
        where
            C: Sequence<Elem = $t>,
        {
            type Output = Vec<$t>;

            fn sub(self, rhs: $t) -> Vec<$t> {
                self.iter().map(|&v| v - rhs).collect()
            }
        }

        impl<'a, 'b, C> Mul<$t> for &'b Subset<'a, C>
        where
            C: Sequence<Elem = $t>,
        {
            type Output = Vec<$t>;

            fn mul(self, rhs: $t) -> Vec<$t> {
                self.iter().map(|&v| v * rhs).collect()
            }
        }

        impl<'a, 'b, C> Div<$t> for &'b Subset<'a, C>
        where
            C: Sequence<Elem = $t>,
        {
            type Output = Vec<$t>;

            fn div(self, rhs: $t) -> Vec<$t> {
                self.iter().map(|&v| v / rhs).collect()
            }
        }

        impl<'a, C> AddAssign<$t> for SubsetMut<'a, C>
        where
            C: SequenceMut<Elem = $t>,
        {
            fn add_assign(&mut self, rhs: $t) {
                self.for_each_mut(|v| *v += rhs);
            }
        }

        impl<'a, C> SubAssign<$t> for SubsetMut<'a, C>
        where
            C: SequenceMut<Elem = $t>,
        {
            fn sub_assign(&mut self, rhs: $t) {
                self.for_each_mut(|v| *v -= rhs);
            }
        }

        impl<'a, C> MulAssign<$t> for SubsetMut<'a, C>
        where
            C: SequenceMut<Elem = $t>,
        {
            fn mul_assign(&mut self, rhs: $t) {
                self.for_each_mut(|v| *v *= rhs);
            }
        }

        impl<'a, C> DivAssign<$t> for SubsetMut<'a, C>
        where
            C: SequenceMut<Elem = $t>,
        {
            fn div_assign(&mut self, rhs: $t) {
                self.for_each_mut(|v| *v /= rhs);
            }
        }
    )*};
}

scalar_ops!(f32 f64 i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

// -- view x sequence / view x view --------------------------------------

macro_rules! sequence_ops {
    ($binop:ident, $method:ident, $assign:ident, $assign_method:ident, $op:tt, $op_assign:tt) => {
        impl<'a, 'b, 's, C, T> $binop<&'s [T]> for &'b Subset<'a, C>
        where
            C: Sequence<Elem = T>,
            T: Copy + $binop<Output = T>,
        {
            type Output = Vec<T>;

            fn $method(self, rhs: &'s [T]) -> Vec<T> {
                assert!(self.len() <= rhs.len(), "right operand too short");
                self.iter().zip(rhs).map(|(&a, &b)| a $op b).collect()
            }
        }

        impl<'a, 'b, 's, C, T> $binop<&'s Vec<T>> for &'b Subset<'a, C>
        where
            C: Sequence<Elem = T>,
            T: Copy + $binop<Output = T>,
        {
            type Output = Vec<T>;

            fn $method(self, rhs: &'s Vec<T>) -> Vec<T> {
                self $op rhs.as_slice()
            }
        }

        impl<'a, 'b, 'c, 's, C, C2, T> $binop<&'s Subset<'c, C2>> for &'b Subset<'a, C>
        where
            C: Sequence<Elem = T>,
            C2: Sequence<Elem = T>,
            T: Copy + $binop<Output = T>,
        {
            type Output = Vec<T>;

            fn $method(self, rhs: &'s Subset<'c, C2>) -> Vec<T> {
                assert!(self.len() <= rhs.len(), "right operand too short");
                self.iter()
                    .enumerate()
                    .map(|(i, &a)| a $op *rhs.get(i))
                    .collect()
            }
        }

        impl<'a, 's, C, T> $assign<&'s [T]> for SubsetMut<'a, C>
        where
            C: SequenceMut<Elem = T>,
            T: Copy + $binop<Output = T>,
        {
            fn $assign_method(&mut self, rhs: &'s [T]) {
                assert!(self.len() <= rhs.len(), "right operand too short");
                for i in 0..self.len() {
                    let v = self.get_mut(i);
                    *v = *v $op rhs[i];
                }
            }
        }

        impl<'a, 's, C, T> $assign<&'s Vec<T>> for SubsetMut<'a, C>
        where
            C: SequenceMut<Elem = T>,
            T: Copy + $binop<Output = T>,
        {
            fn $assign_method(&mut self, rhs: &'s Vec<T>) {
                *self $op_assign rhs.as_slice();
            }
        }

        impl<'a, 'c, 's, C, C2, T> $assign<&'s Subset<'c, C2>> for SubsetMut<'a, C>
        where
            C: SequenceMut<Elem = T>,
            C2: Sequence<Elem = T>,
            T: Copy + $binop<Output = T>,
        {
            fn $assign_method(&mut self, rhs: &'s Subset<'c, C2>) {
                assert!(self.len() <= rhs.len(), "right operand too short");
                for i in 0..self.len() {
                    let b = *rhs.get(i);
                    let v = self.get_mut(i);
                    *v = *v $op b;
                }
            }
        }
    };
}

sequence_ops!(Add, add, AddAssign, add_assign, +, +=);
sequence_ops!(Sub, sub, SubAssign, sub_assign, -, -=);
sequence_ops!(Mul, mul, MulAssign, mul_assign, *, *=);
sequence_ops!(Div, div, DivAssign, div_assign, /, /=);

// -- elementwise comparison ----------------------------------------------

// One boolean per view position, against a scalar or a second view. Same
// length rule as the operators: the left side must not be longer.
macro_rules! cmp_ops {
    ($($scalar:ident / $view:ident => $op:tt),* $(,)?) => {
        impl<'a, C> Subset<'a, C>
        where
            C: Sequence,
            C::Elem: PartialOrd + Copy,
        {
            $(
            pub fn $scalar(&self, rhs: C::Elem) -> Vec<bool> {
                self.iter().map(|&v| v $op rhs).collect()
            }

            pub fn $view<C2>(&self, rhs: &Subset<'_, C2>) -> Vec<bool>
            where
                C2: Sequence<Elem = C::Elem>,
            {
                assert!(self.len() <= rhs.len(), "right operand too short");
                (0..self.len()).map(|i| *self.get(i) $op *rhs.get(i)).collect()
            }
            )*
        }
    };
}

cmp_ops!(
    eq_scalar / eq_view => ==,
    ne_scalar / ne_view => !=,
    lt_scalar / lt_view => <,
    le_scalar / le_view => <=,
    gt_scalar / gt_view => >,
    ge_scalar / ge_view => >=,
);

// -- presets -----------------------------------------------------------

pub fn zeros<T: Zero + Clone>(rows: usize, cols: usize) -> Matrix<T> {
    Matrix::from_elem(rows, cols, T::zero())
}

pub fn ones<T: One + Clone>(rows: usize, cols: usize) -> Matrix<T> {
    Matrix::from_elem(rows, cols, T::one())
}

pub fn square<T: Zero + Clone>(size: usize) -> Matrix<T> {
    zeros(size, size)
}

pub fn identity<T: Zero + One + Clone>(size: usize) -> Matrix<T> {
    let mut m = square(size);
    m.diag_mut().fill(T::one());
    m
}

/// Matrix of normally distributed samples. Panics when `std_dev` is not
/// positive.
pub fn random(rows: usize, cols: usize, mean: f64, std_dev: f64) -> Matrix<f64> {
    assert!(std_dev > 0.0, "standard deviation must be positive");
    let normal = Normal::new(mean, std_dev).expect("checked normal parameters");
    let mut rng = thread_rng();
    Matrix::from_vec(
        rows,
        cols,
        (0..rows * cols).map(|_| normal.sample(&mut rng)).collect(),
    )
}

/// [`random`] with its historical default parameters, N(0, 50).
pub fn random_default(rows: usize, cols: usize) -> Matrix<f64> {
    random(rows, cols, 0.0, 50.0)
}

/// Evenly spaced values over `[low, high]`, endpoints included.
pub fn linspaced(n: usize, low: f64, high: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![low],
        _ => {
            let step = (high - low) / (n - 1) as f64;
            (0..n).map(|i| low + step * i as f64).collect()
        }
    }
}

/// Matrix filled row-major with evenly spaced values over `[low, high]`.
pub fn linspace(rows: usize, cols: usize, low: f64, high: f64) -> Matrix<f64> {
    Matrix::from_vec(rows, cols, linspaced(rows * cols, low, high))
}

/// Positions that would sort `values` ascending; ties keep their order.
pub fn sort_indexes<T: PartialOrd>(values: &[T]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    idx
}
