//! Typed operator wrappers.
//!
//! Each factory captures the left operand and returns a function of the right
//! one: `sub(10)(3) == 10 - 3`. Operand types are fixed at compile time, so
//! the loose/strict equality split collapses: `eq`, `eqq`, `neq` and `neqq`
//! all go through [`PartialEq`].
//!
//! Text concatenation falls out of `String: Add<&str>`:
//!
//! ```
//! use prefix_core::ops::add;
//!
//! assert_eq!(add(String::from("See the "))("light"), "See the light");
//! assert_eq!(add(23_i32)(23), 46);
//! ```

use std::ops::{Add, Div, Mul, Rem, Sub};

/// Exponentiation, the one arithmetic operator `std::ops` lacks.
pub trait Exp<Rhs = Self> {
    type Output;

    fn raise(self, rhs: Rhs) -> Self::Output;
}

impl Exp for f64 {
    type Output = f64;

    fn raise(self, rhs: f64) -> f64 {
        self.powf(rhs)
    }
}

impl Exp<i32> for f64 {
    type Output = f64;

    fn raise(self, rhs: i32) -> f64 {
        self.powi(rhs)
    }
}

impl Exp for f32 {
    type Output = f32;

    fn raise(self, rhs: f32) -> f32 {
        self.powf(rhs)
    }
}

macro_rules! impl_exp_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            /// Two's-complement wrap on overflow.
            impl Exp<u32> for $ty {
                type Output = $ty;

                fn raise(self, rhs: u32) -> $ty {
                    self.wrapping_pow(rhs)
                }
            }
        )*
    };
}

impl_exp_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

pub fn add<L, R>(left: L) -> impl Fn(R) -> L::Output
where
    L: Add<R> + Clone,
{
    move |right| left.clone() + right
}

pub fn sub<L, R>(left: L) -> impl Fn(R) -> L::Output
where
    L: Sub<R> + Clone,
{
    move |right| left.clone() - right
}

pub fn mul<L, R>(left: L) -> impl Fn(R) -> L::Output
where
    L: Mul<R> + Clone,
{
    move |right| left.clone() * right
}

/// Floats follow IEEE-754 for a zero divisor; integers panic as `/` does.
pub fn div<L, R>(left: L) -> impl Fn(R) -> L::Output
where
    L: Div<R> + Clone,
{
    move |right| left.clone() / right
}

pub fn rem<L, R>(left: L) -> impl Fn(R) -> L::Output
where
    L: Rem<R> + Clone,
{
    move |right| left.clone() % right
}

pub fn exp<L, R>(base: L) -> impl Fn(R) -> L::Output
where
    L: Exp<R> + Clone,
{
    move |power| base.clone().raise(power)
}

pub fn lt<L, R>(left: L) -> impl Fn(R) -> bool
where
    L: PartialOrd<R>,
{
    move |right| left < right
}

pub fn lte<L, R>(left: L) -> impl Fn(R) -> bool
where
    L: PartialOrd<R>,
{
    move |right| left <= right
}

pub fn gt<L, R>(left: L) -> impl Fn(R) -> bool
where
    L: PartialOrd<R>,
{
    move |right| left > right
}

pub fn gte<L, R>(left: L) -> impl Fn(R) -> bool
where
    L: PartialOrd<R>,
{
    move |right| left >= right
}

pub fn eq<L, R>(left: L) -> impl Fn(R) -> bool
where
    L: PartialEq<R>,
{
    move |right| left == right
}

pub fn neq<L, R>(left: L) -> impl Fn(R) -> bool
where
    L: PartialEq<R>,
{
    move |right| left != right
}

pub fn eqq<L, R>(left: L) -> impl Fn(R) -> bool
where
    L: PartialEq<R>,
{
    eq(left)
}

pub fn neqq<L, R>(left: L) -> impl Fn(R) -> bool
where
    L: PartialEq<R>,
{
    neq(left)
}

/// Both operands are already evaluated; there is no short circuit.
pub fn or(left: bool) -> impl Fn(bool) -> bool {
    move |right| left || right
}

/// Both operands are already evaluated; there is no short circuit.
pub fn and(left: bool) -> impl Fn(bool) -> bool {
    move |right| left && right
}

#[must_use]
pub fn not(value: bool) -> bool {
    !value
}
