use core::cmp::Ordering;
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

#[cfg(feature = "bigint")]
use num_bigint::{BigInt, BigUint, Sign};

use crate::Int256Error;
use crate::limb::{
    add_carry, mul_full, mul_lo, shl_pair, shr_pair, significant_limbs, sub_borrow, udivrem,
};

/// 256-bit signed integer with two's-complement semantics.
///
/// Stored as four 64-bit limbs, least significant first. The sign is bit 255;
/// there is no separate sign field.
///
/// Range: −2²⁵⁵ to 2²⁵⁵ − 1
///
/// The `+`, `-`, `*` operators and unary negation wrap on overflow, matching
/// EVM/Solidity integer semantics. Use the `checked_*`, `overflowing_*` or
/// `saturating_*` forms when overflow must be detected or clamped.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct I256 {
    limbs: [u64; 4],
}

// ============================================================================
// Constants
// ============================================================================

impl I256 {
    /// The size of this type in bits.
    pub const BITS: u32 = 256;

    /// Minimum value: −2²⁵⁵ (only the sign bit set)
    pub const MIN: Self = Self::from_limbs([0, 0, 0, 0x8000000000000000]);

    /// Maximum value: 2²⁵⁵ − 1 (every bit but the sign bit set)
    pub const MAX: Self = Self::from_limbs([u64::MAX, u64::MAX, u64::MAX, 0x7fffffffffffffff]);

    /// Zero
    pub const ZERO: Self = Self::from_limbs([0, 0, 0, 0]);

    /// One
    pub const ONE: Self = Self::from_limbs([1, 0, 0, 0]);

    /// Negative one (all bits set)
    pub const MINUS_ONE: Self = Self::from_limbs([u64::MAX; 4]);

    /// Ten
    pub const TEN: Self = Self::from_limbs([10, 0, 0, 0]);
}

// ============================================================================
// Constructors and Raw Access
// ============================================================================

impl Default for I256 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl I256 {
    /// Creates an I256 from its raw limbs, least significant first.
    #[inline(always)]
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self { limbs }
    }

    /// Returns the raw limbs, least significant first.
    #[inline(always)]
    pub const fn to_limbs(self) -> [u64; 4] {
        self.limbs
    }

    /// Creates an I256 from a signed 64-bit integer, sign-extending.
    #[inline(always)]
    pub const fn from_i64(value: i64) -> Self {
        let ext = if value < 0 { u64::MAX } else { 0 };
        Self {
            limbs: [value as u64, ext, ext, ext],
        }
    }

    /// Creates an I256 from an unsigned 64-bit integer.
    #[inline(always)]
    pub const fn from_u64(value: u64) -> Self {
        Self {
            limbs: [value, 0, 0, 0],
        }
    }

    /// Creates an I256 from a signed 32-bit integer.
    #[inline(always)]
    pub const fn from_i32(value: i32) -> Self {
        Self::from_i64(value as i64)
    }

    /// Creates an I256 from a signed 128-bit integer, sign-extending.
    #[inline(always)]
    pub const fn from_i128(value: i128) -> Self {
        let bits = value as u128;
        let ext = if value < 0 { u64::MAX } else { 0 };
        Self {
            limbs: [bits as u64, (bits >> 64) as u64, ext, ext],
        }
    }

    /// Creates an I256 from an unsigned 128-bit integer.
    #[inline(always)]
    pub const fn from_u128(value: u128) -> Self {
        Self {
            limbs: [value as u64, (value >> 64) as u64, 0, 0],
        }
    }
}

// ============================================================================
// Sign Inspection
// ============================================================================

impl I256 {
    /// Returns `true` if the value is zero.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        (self.limbs[0] | self.limbs[1] | self.limbs[2] | self.limbs[3]) == 0
    }

    /// Returns `true` if the value is exactly one.
    #[inline(always)]
    pub const fn is_one(self) -> bool {
        self.limbs[0] == 1 && (self.limbs[1] | self.limbs[2] | self.limbs[3]) == 0
    }

    /// Returns `true` if the sign bit is set.
    #[inline(always)]
    pub const fn is_negative(self) -> bool {
        self.limbs[3] >> 63 != 0
    }

    /// Returns `true` if the value is strictly greater than zero.
    #[inline(always)]
    pub const fn is_positive(self) -> bool {
        self.limbs[3] >> 63 == 0 && !self.is_zero()
    }

    /// Returns `true` if the value is [`I256::MIN`].
    #[inline(always)]
    pub const fn is_min(self) -> bool {
        self.limbs[3] == 1 << 63 && (self.limbs[0] | self.limbs[1] | self.limbs[2]) == 0
    }

    /// Returns −1, 0 or 1 according to the sign of the value.
    #[inline(always)]
    pub const fn signum(self) -> i32 {
        if self.is_zero() {
            0
        } else if self.limbs[3] >> 63 == 0 {
            1
        } else {
            -1
        }
    }

    /// Position of the highest set bit plus one; zero for a zero value.
    pub const fn bit_len(self) -> u32 {
        if self.limbs[3] != 0 {
            256 - self.limbs[3].leading_zeros()
        } else if self.limbs[2] != 0 {
            192 - self.limbs[2].leading_zeros()
        } else if self.limbs[1] != 0 {
            128 - self.limbs[1].leading_zeros()
        } else {
            64 - self.limbs[0].leading_zeros()
        }
    }
}

// ============================================================================
// Native Integer Conversions
// ============================================================================

impl I256 {
    /// Returns `true` if the value fits in an `i64`.
    #[inline(always)]
    pub const fn fits_i64(self) -> bool {
        let l = &self.limbs;
        ((l[1] | l[2] | l[3]) == 0 && l[0] <= i64::MAX as u64)
            || ((l[1] & l[2] & l[3]) == u64::MAX && l[0] >= 1 << 63)
    }

    /// Returns `true` if the value fits in a `u64`.
    #[inline(always)]
    pub const fn fits_u64(self) -> bool {
        (self.limbs[1] | self.limbs[2] | self.limbs[3]) == 0
    }

    /// Returns `true` if the value fits in an `i128`.
    #[inline(always)]
    pub const fn fits_i128(self) -> bool {
        let l = &self.limbs;
        ((l[2] | l[3]) == 0 && l[1] <= i64::MAX as u64)
            || ((l[2] & l[3]) == u64::MAX && l[1] >= 1 << 63)
    }

    /// Returns `true` if the value fits in a `u128`.
    #[inline(always)]
    pub const fn fits_u128(self) -> bool {
        (self.limbs[2] | self.limbs[3]) == 0
    }

    /// The low 64 bits reinterpreted as an `i64`, truncating.
    ///
    /// Only meaningful when [`fits_i64`](Self::fits_i64) holds; use
    /// [`to_i64`](Self::to_i64) when the range has not been checked.
    #[inline(always)]
    pub const fn as_i64(self) -> i64 {
        self.limbs[0] as i64
    }

    /// The low 64 bits, truncating. See [`as_i64`](Self::as_i64).
    #[inline(always)]
    pub const fn as_u64(self) -> u64 {
        self.limbs[0]
    }

    /// The low 128 bits reinterpreted as an `i128`, truncating.
    #[inline(always)]
    pub const fn as_i128(self) -> i128 {
        self.as_u128() as i128
    }

    /// The low 128 bits, truncating.
    #[inline(always)]
    pub const fn as_u128(self) -> u128 {
        (self.limbs[1] as u128) << 64 | self.limbs[0] as u128
    }

    /// Converts to an `i64` if the value fits.
    #[inline(always)]
    pub const fn to_i64(self) -> Option<i64> {
        if self.fits_i64() {
            Some(self.as_i64())
        } else {
            None
        }
    }

    /// Converts to a `u64` if the value fits.
    #[inline(always)]
    pub const fn to_u64(self) -> Option<u64> {
        if self.fits_u64() {
            Some(self.as_u64())
        } else {
            None
        }
    }

    /// Converts to an `i128` if the value fits.
    #[inline(always)]
    pub const fn to_i128(self) -> Option<i128> {
        if self.fits_i128() {
            Some(self.as_i128())
        } else {
            None
        }
    }

    /// Converts to a `u128` if the value fits.
    #[inline(always)]
    pub const fn to_u128(self) -> Option<u128> {
        if self.fits_u128() {
            Some(self.as_u128())
        } else {
            None
        }
    }
}

// ============================================================================
// Arithmetic Operations - Negation and Absolute Value
// ============================================================================

impl I256 {
    /// Two's-complement negation. Negating [`I256::MIN`] wraps to itself.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn wrapping_neg(self) -> Self {
        let l = &self.limbs;
        let (r0, carry) = add_carry(!l[0], 1, 0);
        let (r1, carry) = add_carry(!l[1], 0, carry);
        let (r2, carry) = add_carry(!l[2], 0, carry);
        let r3 = (!l[3]).wrapping_add(carry);
        Self {
            limbs: [r0, r1, r2, r3],
        }
    }

    /// Checked negation. Returns `None` for [`I256::MIN`].
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_neg(self) -> Option<Self> {
        if self.is_min() {
            None
        } else {
            Some(self.wrapping_neg())
        }
    }

    /// Negation with an overflow flag; overflows only for [`I256::MIN`].
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn overflowing_neg(self) -> (Self, bool) {
        (self.wrapping_neg(), self.is_min())
    }

    /// Saturating negation. [`I256::MIN`] clamps to [`I256::MAX`].
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn saturating_neg(self) -> Self {
        if self.is_min() {
            Self::MAX
        } else {
            self.wrapping_neg()
        }
    }

    /// Checked negation. Returns an error for [`I256::MIN`].
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_neg(self) -> crate::Result<Self> {
        match self.checked_neg() {
            Some(v) => Ok(v),
            None => Err(Int256Error::Overflow),
        }
    }

    /// Absolute value. `I256::MIN.abs()` wraps to [`I256::MIN`].
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// Checked absolute value. Returns `None` for [`I256::MIN`].
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_abs(self) -> Option<Self> {
        if self.is_min() {
            None
        } else {
            Some(self.abs())
        }
    }

    /// Saturating absolute value. [`I256::MIN`] clamps to [`I256::MAX`].
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn saturating_abs(self) -> Self {
        if self.is_min() {
            Self::MAX
        } else {
            self.abs()
        }
    }

    /// Checked absolute value. Returns an error for [`I256::MIN`].
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_abs(self) -> crate::Result<Self> {
        match self.checked_abs() {
            Some(v) => Ok(v),
            None => Err(Int256Error::Overflow),
        }
    }
}

// ============================================================================
// Arithmetic Operations - Addition
// ============================================================================

impl I256 {
    /// Wrapping addition: a carry chain across the four limbs, discarding
    /// any carry out of the top limb.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let x = &self.limbs;
        let y = &rhs.limbs;
        let (r0, carry) = add_carry(x[0], y[0], 0);
        let (r1, carry) = add_carry(x[1], y[1], carry);
        let (r2, carry) = add_carry(x[2], y[2], carry);
        let r3 = x[3].wrapping_add(y[3]).wrapping_add(carry);
        Self {
            limbs: [r0, r1, r2, r3],
        }
    }

    /// Addition with an overflow flag. Overflow occurred when both operands
    /// share a sign and the result's sign differs from it.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let sum = self.wrapping_add(rhs);
        let overflow = self.signum() == rhs.signum() && self.signum() != sum.signum();
        (sum, overflow)
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            _ => None,
        }
    }

    /// Saturating addition. Clamps on overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        match self.overflowing_add(rhs) {
            (sum, false) => sum,
            _ => {
                if self.is_negative() {
                    Self::MIN
                } else {
                    Self::MAX
                }
            }
        }
    }

    /// Checked addition. Returns an error on overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_add(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_add(rhs) {
            Some(sum) => Ok(sum),
            None => Err(Int256Error::Overflow),
        }
    }
}

// ============================================================================
// Arithmetic Operations - Subtraction
// ============================================================================

impl I256 {
    /// Wrapping subtraction: a borrow chain across the four limbs,
    /// discarding any borrow out of the top limb.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        let x = &self.limbs;
        let y = &rhs.limbs;
        let (r0, borrow) = sub_borrow(x[0], y[0], 0);
        let (r1, borrow) = sub_borrow(x[1], y[1], borrow);
        let (r2, borrow) = sub_borrow(x[2], y[2], borrow);
        let r3 = x[3].wrapping_sub(y[3]).wrapping_sub(borrow);
        Self {
            limbs: [r0, r1, r2, r3],
        }
    }

    /// Subtraction with an overflow flag.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let diff = self.wrapping_sub(rhs);
        let overflow = (self.is_zero() && rhs.is_min())
            || (!self.is_zero()
                && self.signum() != rhs.signum()
                && self.signum() != diff.signum());
        (diff, overflow)
    }

    /// Checked subtraction. Returns `None` on overflow.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            _ => None,
        }
    }

    /// Saturating subtraction. Clamps on overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        match self.overflowing_sub(rhs) {
            (diff, false) => diff,
            _ => {
                if self.is_negative() {
                    Self::MIN
                } else {
                    Self::MAX
                }
            }
        }
    }

    /// Checked subtraction. Returns an error on overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_sub(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_sub(rhs) {
            Some(diff) => Ok(diff),
            None => Err(Int256Error::Overflow),
        }
    }
}

// ============================================================================
// Arithmetic Operations - Multiplication
// ============================================================================

impl I256 {
    /// Wrapping multiplication: the low 256 bits of the schoolbook product.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self {
            limbs: mul_lo(&self.limbs, &rhs.limbs),
        }
    }

    /// Multiplication with an overflow flag.
    ///
    /// `MIN * 1` is special-cased up front: the general path works on
    /// magnitudes, and MIN's magnitude does not fit in 256 unsigned bits
    /// alongside a sign flip. Everything else records the result sign,
    /// multiplies the magnitudes out to 512 bits, and flags overflow when
    /// the high half is nonzero or the low half runs into the sign bit.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        if (self.is_min() && rhs.is_one()) || (self.is_one() && rhs.is_min()) {
            return (Self::MIN, false);
        }

        let flip_sign = self.signum() * rhs.signum() == -1;
        let x = self.abs();
        let y = rhs.abs();

        let p = mul_full(&x.limbs, &y.limbs);
        let z = Self {
            limbs: [p[0], p[1], p[2], p[3]],
        };
        let overflow = (p[4] | p[5] | p[6] | p[7]) != 0 || z.is_negative();

        if flip_sign {
            (z.wrapping_neg(), overflow)
        } else {
            (z, overflow)
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        match self.overflowing_mul(rhs) {
            (product, false) => Some(product),
            _ => None,
        }
    }

    /// Saturating multiplication. Clamps on overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn saturating_mul(self, rhs: Self) -> Self {
        match self.overflowing_mul(rhs) {
            (product, false) => product,
            _ => {
                if self.signum() * rhs.signum() < 0 {
                    Self::MIN
                } else {
                    Self::MAX
                }
            }
        }
    }

    /// Checked multiplication. Returns an error on overflow.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn try_mul(self, rhs: Self) -> crate::Result<Self> {
        match self.checked_mul(rhs) {
            Some(product) => Ok(product),
            None => Err(Int256Error::Overflow),
        }
    }
}

// ============================================================================
// Arithmetic Operations - Division and Remainder
// ============================================================================

impl I256 {
    /// Checked division, truncating toward zero. Returns `None` when the
    /// divisor is zero. `MIN / -1` wraps to `MIN`.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        let negative = self.is_negative() != rhs.is_negative();
        let quot = Self::udiv(self.abs(), rhs.abs());
        Some(if negative { quot.wrapping_neg() } else { quot })
    }

    /// Checked remainder. Returns `None` when the divisor is zero. A nonzero
    /// result takes the sign of the dividend.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        let rem = Self::urem(self.abs(), rhs.abs());
        Some(if self.is_negative() {
            rem.wrapping_neg()
        } else {
            rem
        })
    }

    /// Division, truncating toward zero; `MIN / -1` wraps to `MIN`.
    ///
    /// # Panics
    /// Panics when the divisor is zero.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn wrapping_div(self, rhs: Self) -> Self {
        self.checked_div(rhs).expect("division by zero")
    }

    /// Remainder; `MIN % -1` is zero.
    ///
    /// # Panics
    /// Panics when the divisor is zero.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn wrapping_rem(self, rhs: Self) -> Self {
        self.checked_rem(rhs).expect("division by zero")
    }

    // Unsigned quotient of two magnitudes. MIN's bit pattern reads as the
    // 2^255 magnitude here.
    fn udiv(x: Self, y: Self) -> Self {
        if x.is_zero() {
            return Self::ZERO;
        }
        if x == y {
            return Self::ONE;
        }
        if x.fits_u64() && y.fits_u64() {
            return Self::from_u64(x.limbs[0] / y.limbs[0]);
        }
        let (quot, _) = udivrem(&x.limbs, &y.limbs);
        Self { limbs: quot }
    }

    // Unsigned remainder of two magnitudes.
    fn urem(x: Self, y: Self) -> Self {
        if x.is_zero() || x == y {
            return Self::ZERO;
        }
        if x.fits_u64() && y.fits_u64() {
            return Self::from_u64(x.limbs[0] % y.limbs[0]);
        }
        let (_, rem) = udivrem(&x.limbs, &y.limbs);
        Self { limbs: rem }
    }
}

// ============================================================================
// Exponentiation and Square Root
// ============================================================================

impl I256 {
    /// Exponentiation by squaring. Wraps on overflow like repeated
    /// [`wrapping_mul`](Self::wrapping_mul).
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut acc = Self::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc.wrapping_mul(base);
            }
            exp >>= 1;
            base = base.wrapping_mul(base);
        }
        acc
    }

    /// Integer square root.
    ///
    /// # Panics
    /// Panics when the value is negative.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn sqrt(self) -> Self {
        self.checked_sqrt().expect("square root of negative number")
    }

    /// Integer square root. Returns `None` when the value is negative.
    ///
    /// Values fitting 128 bits take a binary-search fast path; wider values
    /// iterate Newton's method from `1 << ((bit_len + 1) / 2)`, which starts
    /// above the root and decreases monotonically until it crosses it.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_sqrt(self) -> Option<Self> {
        if self.is_negative() {
            return None;
        }
        if self.fits_u128() {
            return Some(Self::from_u128(isqrt_u128(self.as_u128())));
        }
        let mut z1 = Self::ONE.shift_left((self.bit_len() + 1) >> 1);
        loop {
            let z2 = self.wrapping_div(z1).wrapping_add(z1).shift_right(1);
            if z2 >= z1 {
                return Some(z1);
            }
            z1 = z2;
        }
    }
}

// ============================================================================
// Shifts
// ============================================================================

impl I256 {
    /// Logical left shift, filling with zeros. Shifts of 256 or more
    /// produce zero.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn shift_left(self, n: u32) -> Self {
        if n == 0 {
            return self;
        }
        if n >= 256 {
            return Self::ZERO;
        }
        let x = &self.limbs;
        let mut z = [0u64; 4];
        if n >= 192 {
            z[3] = x[0] << (n - 192);
        } else if n >= 128 {
            let s = n - 128;
            z[3] = shl_pair(x[1], x[0], s);
            z[2] = x[0] << s;
        } else if n >= 64 {
            let s = n - 64;
            z[3] = shl_pair(x[2], x[1], s);
            z[2] = shl_pair(x[1], x[0], s);
            z[1] = x[0] << s;
        } else {
            z[3] = shl_pair(x[3], x[2], n);
            z[2] = shl_pair(x[2], x[1], n);
            z[1] = shl_pair(x[1], x[0], n);
            z[0] = x[0] << n;
        }
        Self { limbs: z }
    }

    /// Arithmetic right shift: sign-extending for negative values, logical
    /// otherwise. Shifts of 255 or more produce 0 (non-negative) or −1
    /// (negative).
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn shift_right(self, n: u32) -> Self {
        if n == 0 {
            return self;
        }
        if self.is_negative() {
            self.shift_right_negative(n)
        } else {
            self.shift_right_logical(n)
        }
    }

    const fn shift_right_logical(self, n: u32) -> Self {
        if n >= 255 {
            return Self::ZERO;
        }
        let x = &self.limbs;
        let mut z = [0u64; 4];
        if n >= 192 {
            z[0] = x[3] >> (n - 192);
        } else if n >= 128 {
            let s = n - 128;
            z[1] = x[3] >> s;
            z[0] = shr_pair(x[3], x[2], s);
        } else if n >= 64 {
            let s = n - 64;
            z[2] = x[3] >> s;
            z[1] = shr_pair(x[3], x[2], s);
            z[0] = shr_pair(x[2], x[1], s);
        } else {
            z[3] = x[3] >> n;
            z[2] = shr_pair(x[3], x[2], n);
            z[1] = shr_pair(x[2], x[1], n);
            z[0] = shr_pair(x[1], x[0], n);
        }
        Self { limbs: z }
    }

    const fn shift_right_negative(self, n: u32) -> Self {
        if n >= 255 {
            return Self::MINUS_ONE;
        }
        const F: u64 = u64::MAX;
        let x = &self.limbs;
        let mut z = [F; 4];
        if n >= 192 {
            z[0] = shr_pair(F, x[3], n - 192);
        } else if n >= 128 {
            let s = n - 128;
            z[1] = shr_pair(F, x[3], s);
            z[0] = shr_pair(x[3], x[2], s);
        } else if n >= 64 {
            let s = n - 64;
            z[2] = shr_pair(F, x[3], s);
            z[1] = shr_pair(x[3], x[2], s);
            z[0] = shr_pair(x[2], x[1], s);
        } else {
            z[3] = shr_pair(F, x[3], n);
            z[2] = shr_pair(x[3], x[2], n);
            z[1] = shr_pair(x[2], x[1], n);
            z[0] = shr_pair(x[1], x[0], n);
        }
        Self { limbs: z }
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl Ord for I256 {
    /// Sign-aware comparison: a differing sign bit decides immediately,
    /// otherwise a borrow chain across the limbs decides by magnitude.
    fn cmp(&self, other: &Self) -> Ordering {
        let self_neg = self.limbs[3] >> 63;
        let other_neg = other.limbs[3] >> 63;
        if self_neg != other_neg {
            return if self_neg == 0 {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        let (d0, borrow) = sub_borrow(self.limbs[0], other.limbs[0], 0);
        let (d1, borrow) = sub_borrow(self.limbs[1], other.limbs[1], borrow);
        let (d2, borrow) = sub_borrow(self.limbs[2], other.limbs[2], borrow);
        let (d3, borrow) = sub_borrow(self.limbs[3], other.limbs[3], borrow);
        if borrow == 1 {
            Ordering::Less
        } else if d0 | d1 | d2 | d3 == 0 {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

impl PartialOrd for I256 {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Decimal Codec
// ============================================================================

/// Decimal digits of 2²⁵⁵, the largest representable magnitude (77 digits).
const MAX_ABS_DEC: &str =
    "57896044618658097711785492504343953926634992332820282019728792003956564819968";

/// 10^19 as limbs, the chunk radix for decimal conversion.
const POW_10_19: I256 = I256::from_limbs([0x8ac7230489e80000, 0, 0, 0]);

/// Multipliers for decimal chunks 1–4: 10^19, 10^38, 10^57, 10^76.
const MULTIPLIERS: [I256; 4] = [
    POW_10_19,
    I256::from_limbs([0x098a224000000000, 0x4b3b4ca85a86c47a, 0, 0]),
    I256::from_limbs([0x4a00000000000000, 0xebfdcb54864ada83, 0x28c87cb5c89a2571, 0]),
    I256::from_limbs([0, 0x7775a5f171951000, 0x0764b4abe8652979, 0x161bcca7119915b5]),
];

impl I256 {
    /// Parses a decimal string: an optional leading `-` followed by one or
    /// more ASCII digits. Leading zeros are accepted and stripped. No `+`,
    /// whitespace, underscores or exponent notation.
    ///
    /// Digits are consumed 19 at a time from the least-significant end, each
    /// chunk scaled by a precomputed power of 10^19 — 19 digits is the most
    /// that always fits in a `u64`.
    pub fn from_dec_str(s: &str) -> crate::Result<Self> {
        let (is_negative, mut digits) = match s.as_bytes().first() {
            Some(&b'-') => (true, &s[1..]),
            _ => (false, s),
        };

        if digits.as_bytes().first() == Some(&b'0') {
            let first_nonzero = digits.find(|c: char| c != '0').unwrap_or(digits.len() - 1);
            digits = &digits[first_nonzero..];
        }

        // Lexicographic range check against the maximum magnitude; the exact
        // minimum-value string is the one permitted use of 2^255's digits.
        if digits.len() > MAX_ABS_DEC.len()
            || (digits.len() == MAX_ABS_DEC.len() && digits > MAX_ABS_DEC)
            || (digits == MAX_ABS_DEC && !is_negative)
        {
            return Err(Int256Error::Overflow);
        }

        let bytes = digits.as_bytes();
        if bytes.is_empty() {
            return Err(Int256Error::InvalidFormat);
        }

        let mut z = Self::ZERO;
        let mut remaining = bytes.len();
        let mut chunk = 0;
        while remaining > 0 {
            let start = remaining.saturating_sub(19);
            let num = parse_digits(&bytes[start..remaining])?;
            if chunk == 0 {
                z = Self::from_u64(num);
            } else {
                z = z.wrapping_add(Self::from_u64(num).wrapping_mul(MULTIPLIERS[chunk - 1]));
            }
            remaining = start;
            chunk += 1;
        }

        Ok(if is_negative { z.wrapping_neg() } else { z })
    }
}

impl FromStr for I256 {
    type Err = Int256Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dec_str(s)
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fast path for zero
        if self.is_zero() {
            return f.write_str("0");
        }

        let negative = self.is_negative();
        // MIN's magnitude is 2^255; the wrapped bit pattern reads correctly
        // as an unsigned magnitude below.
        let magnitude = if negative { self.wrapping_neg() } else { *self };

        // Stack buffer: 77 digits plus sign
        let mut buffer = [0u8; 78];
        let mut pos = buffer.len();

        if magnitude.fits_u64() {
            let mut n = magnitude.limbs[0];
            while n > 0 {
                pos -= 1;
                buffer[pos] = b'0' + (n % 10) as u8;
                n /= 10;
            }
        } else {
            // Peel 19-digit groups off the low end, least significant first.
            let mut limbs = magnitude.limbs;
            loop {
                let (quot, rem) = udivrem(&limbs, &POW_10_19.limbs);
                let mut n = rem[0];
                if significant_limbs(&quot) == 0 {
                    while n > 0 {
                        pos -= 1;
                        buffer[pos] = b'0' + (n % 10) as u8;
                        n /= 10;
                    }
                    break;
                }
                for _ in 0..19 {
                    pos -= 1;
                    buffer[pos] = b'0' + (n % 10) as u8;
                    n /= 10;
                }
                limbs = quot;
            }
        }

        if negative {
            pos -= 1;
            buffer[pos] = b'-';
        }

        let s = core::str::from_utf8(&buffer[pos..]).unwrap();
        f.write_str(s)
    }
}

impl fmt::Debug for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("I256").field("limbs", &self.limbs).finish()
        } else {
            write!(f, "I256({})", self)
        }
    }
}

// ============================================================================
// Bytes Operations
// ============================================================================

impl I256 {
    /// The size of this type in bytes.
    pub const BYTES: usize = core::mem::size_of::<Self>();

    /// Creates an I256 from its two's-complement representation as a byte
    /// array in big endian.
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            let mut word = 0u64;
            let mut j = 0;
            while j < 8 {
                word = word << 8 | bytes[(3 - i) * 8 + j] as u64;
                j += 1;
            }
            limbs[i] = word;
            i += 1;
        }
        Self { limbs }
    }

    /// Creates an I256 from its two's-complement representation as a byte
    /// array in little endian.
    pub const fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            let mut word = 0u64;
            let mut j = 8;
            while j > 0 {
                j -= 1;
                word = word << 8 | bytes[i * 8 + j] as u64;
            }
            limbs[i] = word;
            i += 1;
        }
        Self { limbs }
    }

    /// Returns the two's-complement representation as a byte array in
    /// big-endian byte order.
    pub const fn to_be_bytes(self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        let mut i = 0;
        while i < 4 {
            let word = self.limbs[3 - i];
            let mut j = 0;
            while j < 8 {
                bytes[i * 8 + j] = (word >> (56 - 8 * j)) as u8;
                j += 1;
            }
            i += 1;
        }
        bytes
    }

    /// Returns the two's-complement representation as a byte array in
    /// little-endian byte order.
    pub const fn to_le_bytes(self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        let mut i = 0;
        while i < 4 {
            let word = self.limbs[i];
            let mut j = 0;
            while j < 8 {
                bytes[i * 8 + j] = (word >> (8 * j)) as u8;
                j += 1;
            }
            i += 1;
        }
        bytes
    }

    /// Writes all 32 big-endian bytes into the front of `buf`.
    #[inline(always)]
    pub fn write_be_bytes(&self, buf: &mut [u8]) {
        buf[..32].copy_from_slice(&self.to_be_bytes());
    }

    /// Writes all 32 little-endian bytes into the front of `buf`.
    #[inline(always)]
    pub fn write_le_bytes(&self, buf: &mut [u8]) {
        buf[..32].copy_from_slice(&self.to_le_bytes());
    }

    /// Reads an I256 from 32 big-endian bytes at the front of `buf`.
    #[inline(always)]
    pub fn read_be_bytes(buf: &[u8]) -> Self {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&buf[..32]);
        Self::from_be_bytes(bytes)
    }

    /// Reads an I256 from 32 little-endian bytes at the front of `buf`.
    #[inline(always)]
    pub fn read_le_bytes(buf: &[u8]) -> Self {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&buf[..32]);
        Self::from_le_bytes(bytes)
    }

    /// Tries to write the 32 big-endian bytes into `buf`.
    #[inline(always)]
    pub fn try_write_be_bytes(&self, buf: &mut [u8]) -> Option<()> {
        if buf.len() < 32 {
            return None;
        }
        buf[..32].copy_from_slice(&self.to_be_bytes());
        Some(())
    }

    /// Tries to write the 32 little-endian bytes into `buf`.
    #[inline(always)]
    pub fn try_write_le_bytes(&self, buf: &mut [u8]) -> Option<()> {
        if buf.len() < 32 {
            return None;
        }
        buf[..32].copy_from_slice(&self.to_le_bytes());
        Some(())
    }

    /// Tries to read an I256 from 32 big-endian bytes.
    #[inline(always)]
    pub fn try_read_be_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() < 32 {
            return None;
        }
        Some(Self::read_be_bytes(buf))
    }

    /// Tries to read an I256 from 32 little-endian bytes.
    #[inline(always)]
    pub fn try_read_le_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() < 32 {
            return None;
        }
        Some(Self::read_le_bytes(buf))
    }
}

// ============================================================================
// Operator Overloading
// ============================================================================

impl Add for I256 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl Sub for I256 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl Mul for I256 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.wrapping_mul(rhs)
    }
}

impl Div for I256 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Rem for I256 {
    type Output = Self;

    #[inline(always)]
    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs).expect("division by zero")
    }
}

impl Neg for I256 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl AddAssign for I256 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for I256 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for I256 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for I256 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for I256 {
    #[inline(always)]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl BitAnd for I256 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            limbs: [
                self.limbs[0] & rhs.limbs[0],
                self.limbs[1] & rhs.limbs[1],
                self.limbs[2] & rhs.limbs[2],
                self.limbs[3] & rhs.limbs[3],
            ],
        }
    }
}

impl BitOr for I256 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            limbs: [
                self.limbs[0] | rhs.limbs[0],
                self.limbs[1] | rhs.limbs[1],
                self.limbs[2] | rhs.limbs[2],
                self.limbs[3] | rhs.limbs[3],
            ],
        }
    }
}

impl BitXor for I256 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self {
            limbs: [
                self.limbs[0] ^ rhs.limbs[0],
                self.limbs[1] ^ rhs.limbs[1],
                self.limbs[2] ^ rhs.limbs[2],
                self.limbs[3] ^ rhs.limbs[3],
            ],
        }
    }
}

impl Not for I256 {
    type Output = Self;

    /// Per-limb complement; for two's complement this equals `-x - 1`.
    #[inline(always)]
    fn not(self) -> Self::Output {
        Self {
            limbs: [
                !self.limbs[0],
                !self.limbs[1],
                !self.limbs[2],
                !self.limbs[3],
            ],
        }
    }
}

impl BitAndAssign for I256 {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for I256 {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl BitXorAssign for I256 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl Shl<u32> for I256 {
    type Output = Self;

    #[inline(always)]
    fn shl(self, rhs: u32) -> Self::Output {
        self.shift_left(rhs)
    }
}

impl Shr<u32> for I256 {
    type Output = Self;

    #[inline(always)]
    fn shr(self, rhs: u32) -> Self::Output {
        self.shift_right(rhs)
    }
}

impl ShlAssign<u32> for I256 {
    #[inline(always)]
    fn shl_assign(&mut self, rhs: u32) {
        *self = self.shift_left(rhs);
    }
}

impl ShrAssign<u32> for I256 {
    #[inline(always)]
    fn shr_assign(&mut self, rhs: u32) {
        *self = self.shift_right(rhs);
    }
}

// ============================================================================
// Standard Library Trait Implementations
// ============================================================================

impl From<i64> for I256 {
    #[inline(always)]
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for I256 {
    #[inline(always)]
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i128> for I256 {
    #[inline(always)]
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}

impl From<u128> for I256 {
    #[inline(always)]
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<i32> for I256 {
    #[inline(always)]
    fn from(value: i32) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<u32> for I256 {
    #[inline(always)]
    fn from(value: u32) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<i16> for I256 {
    #[inline(always)]
    fn from(value: i16) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<u16> for I256 {
    #[inline(always)]
    fn from(value: u16) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<i8> for I256 {
    #[inline(always)]
    fn from(value: i8) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<u8> for I256 {
    #[inline(always)]
    fn from(value: u8) -> Self {
        Self::from_u64(value as u64)
    }
}

impl TryFrom<I256> for i64 {
    type Error = Int256Error;

    #[inline(always)]
    fn try_from(value: I256) -> crate::Result<Self> {
        value.to_i64().ok_or(Int256Error::Overflow)
    }
}

impl TryFrom<I256> for u64 {
    type Error = Int256Error;

    #[inline(always)]
    fn try_from(value: I256) -> crate::Result<Self> {
        value.to_u64().ok_or(Int256Error::Overflow)
    }
}

impl TryFrom<I256> for i128 {
    type Error = Int256Error;

    #[inline(always)]
    fn try_from(value: I256) -> crate::Result<Self> {
        value.to_i128().ok_or(Int256Error::Overflow)
    }
}

impl TryFrom<I256> for u128 {
    type Error = Int256Error;

    #[inline(always)]
    fn try_from(value: I256) -> crate::Result<Self> {
        value.to_u128().ok_or(Int256Error::Overflow)
    }
}

// ============================================================================
// Iterator Trait Implementations
// ============================================================================

impl Sum for I256 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a I256> for I256 {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + *x)
    }
}

impl Product for I256 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a I256> for I256 {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * *x)
    }
}

// ============================================================================
// Serde Support
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for I256 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            // JSON, TOML, etc. - use the decimal representation
            serializer.collect_str(self)
        } else {
            // Bincode, MessagePack, etc. - raw little-endian bytes
            self.to_le_bytes().serialize(serializer)
        }
    }
}

#[cfg(feature = "serde")]
struct I256Visitor;

#[cfg(feature = "serde")]
impl<'de> de::Visitor<'de> for I256Visitor {
    type Value = I256;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a decimal string or integer")
    }

    fn visit_str<E>(self, v: &str) -> core::result::Result<I256, E>
    where
        E: de::Error,
    {
        I256::from_dec_str(v).map_err(E::custom)
    }

    fn visit_i64<E>(self, v: i64) -> core::result::Result<I256, E>
    where
        E: de::Error,
    {
        Ok(I256::from_i64(v))
    }

    fn visit_u64<E>(self, v: u64) -> core::result::Result<I256, E>
    where
        E: de::Error,
    {
        Ok(I256::from_u64(v))
    }

    fn visit_i128<E>(self, v: i128) -> core::result::Result<I256, E>
    where
        E: de::Error,
    {
        Ok(I256::from_i128(v))
    }

    fn visit_u128<E>(self, v: u128) -> core::result::Result<I256, E>
    where
        E: de::Error,
    {
        Ok(I256::from_u128(v))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for I256 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            // Accepts both a quoted decimal string and a bare integer token
            deserializer.deserialize_any(I256Visitor)
        } else {
            let bytes = <[u8; 32]>::deserialize(deserializer)?;
            Ok(Self::from_le_bytes(bytes))
        }
    }
}

// ============================================================================
// Big-Integer Bridge
// ============================================================================

#[cfg(feature = "bigint")]
impl I256 {
    /// Imports an arbitrary-precision integer.
    ///
    /// Fails with an overflow error when the magnitude needs more than four
    /// limbs, or when it runs into the sign bit — unless the source is
    /// exactly −2²⁵⁵, whose magnitude shares [`I256::MIN`]'s bit pattern.
    pub fn from_bigint(b: &BigInt) -> crate::Result<Self> {
        let (sign, digits) = b.to_u64_digits();
        if digits.len() > 4 {
            return Err(Int256Error::Overflow);
        }

        let mut limbs = [0u64; 4];
        limbs[..digits.len()].copy_from_slice(&digits);
        let magnitude = Self { limbs };

        let negative = sign == Sign::Minus;
        if magnitude.is_negative() && !(negative && magnitude.is_min()) {
            return Err(Int256Error::Overflow);
        }

        Ok(if negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        })
    }

    /// Converts to an arbitrary-precision integer. Lossless; the receiver is
    /// never mutated (the sign split works on a copy).
    pub fn to_bigint(&self) -> BigInt {
        let negative = self.is_negative();
        let magnitude = if negative { self.wrapping_neg() } else { *self };

        let mut words = [0u32; 8];
        let mut i = 0;
        while i < 4 {
            words[2 * i] = magnitude.limbs[i] as u32;
            words[2 * i + 1] = (magnitude.limbs[i] >> 32) as u32;
            i += 1;
        }

        let sign = if negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, BigUint::from_slice(&words))
    }
}

#[cfg(feature = "bigint")]
impl TryFrom<&BigInt> for I256 {
    type Error = Int256Error;

    fn try_from(value: &BigInt) -> crate::Result<Self> {
        Self::from_bigint(value)
    }
}

#[cfg(feature = "bigint")]
impl From<I256> for BigInt {
    fn from(value: I256) -> Self {
        value.to_bigint()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parses up to 19 ASCII digits; 19 digits always fit in a u64.
fn parse_digits(bytes: &[u8]) -> crate::Result<u64> {
    let mut n = 0u64;
    for &byte in bytes {
        let digit = byte.wrapping_sub(b'0');
        if digit > 9 {
            return Err(Int256Error::InvalidFormat);
        }
        n = n * 10 + digit as u64;
    }
    Ok(n)
}

/// Integer square root for u128 using binary search
const fn isqrt_u128(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    let mut left = 1u128;
    let mut right = n;

    while left <= right {
        let mid = left + (right - left) / 2;

        if mid <= n / mid {
            let next_mid = mid + 1;
            if next_mid > n / next_mid {
                return mid;
            }
            left = mid + 1;
        } else {
            right = mid - 1;
        }
    }

    right
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(I256::MIN.to_limbs(), [0, 0, 0, 0x8000000000000000]);
        assert_eq!(
            I256::MAX.to_limbs(),
            [u64::MAX, u64::MAX, u64::MAX, 0x7fffffffffffffff]
        );
        assert_eq!(I256::MINUS_ONE.to_limbs(), [u64::MAX; 4]);
        assert_eq!(I256::ZERO, I256::default());
        assert_eq!(I256::ONE, I256::from_i64(1));
        assert_eq!(I256::TEN, I256::from_i64(10));
        assert_eq!(I256::MAX.wrapping_add(I256::ONE), I256::MIN);
    }

    #[test]
    fn test_sign_checks() {
        assert!(I256::ONE.is_positive());
        assert!(!I256::ONE.is_negative());
        assert!(!I256::ONE.is_zero());
        assert!(I256::ONE.is_one());

        assert!(I256::ZERO.is_zero());
        assert!(!I256::ZERO.is_positive());
        assert!(!I256::ZERO.is_negative());

        assert!(I256::MINUS_ONE.is_negative());
        assert!(!I256::MINUS_ONE.is_positive());

        assert!(I256::MIN.is_min());
        assert!(I256::MIN.is_negative());
        assert!(!I256::MAX.is_min());
        assert!(I256::MAX.is_positive());
    }

    #[test]
    fn test_signum() {
        assert_eq!(I256::from_i64(42).signum(), 1);
        assert_eq!(I256::ZERO.signum(), 0);
        assert_eq!(I256::from_i64(-42).signum(), -1);
        assert_eq!(I256::MIN.signum(), -1);
        assert_eq!(I256::MAX.signum(), 1);
    }

    #[test]
    fn test_addition() {
        let a = I256::from_i64(2);
        let b = I256::from_i64(3);
        assert_eq!(a.wrapping_add(b), I256::from_i64(5));
        assert_eq!(a.checked_add(b), Some(I256::from_i64(5)));

        let c = I256::from_i64(-5);
        assert_eq!(c.wrapping_add(b), I256::from_i64(-2));

        // carry propagation across limbs
        let d = I256::from_u64(u64::MAX);
        assert_eq!(d.wrapping_add(I256::ONE).to_limbs(), [0, 1, 0, 0]);
    }

    #[test]
    fn test_subtraction() {
        let a = I256::from_i64(3);
        let b = I256::from_i64(5);
        assert_eq!(a.wrapping_sub(b), I256::from_i64(-2));
        assert_eq!(b.wrapping_sub(a), I256::from_i64(2));
        assert_eq!(I256::MIN.wrapping_sub(I256::ONE), I256::MAX);

        // borrow propagation across limbs
        let c = I256::from_limbs([0, 1, 0, 0]);
        assert_eq!(
            c.wrapping_sub(I256::ONE),
            I256::from_u64(u64::MAX)
        );
    }

    #[test]
    fn test_negation() {
        assert_eq!(I256::from_i64(5).wrapping_neg(), I256::from_i64(-5));
        assert_eq!(I256::from_i64(-5).wrapping_neg(), I256::from_i64(5));
        assert_eq!(I256::ZERO.wrapping_neg(), I256::ZERO);
        assert_eq!(I256::MIN.wrapping_neg(), I256::MIN);

        assert_eq!(I256::MIN.checked_neg(), None);
        assert_eq!(I256::MIN.overflowing_neg(), (I256::MIN, true));
        assert_eq!(I256::MIN.saturating_neg(), I256::MAX);
        assert_eq!(I256::MIN.try_neg(), Err(Int256Error::Overflow));
        assert_eq!(I256::MAX.checked_neg(), Some(I256::MIN.wrapping_add(I256::ONE)));
    }

    #[test]
    fn test_double_negation_is_identity() {
        for v in [
            I256::ZERO,
            I256::ONE,
            I256::MINUS_ONE,
            I256::MIN,
            I256::MAX,
            I256::from_i64(12345),
            I256::from_i64(-98765),
        ] {
            assert_eq!(v.wrapping_neg().wrapping_neg(), v);
        }
    }

    #[test]
    fn test_abs() {
        assert_eq!(I256::from_i64(-7).abs(), I256::from_i64(7));
        assert_eq!(I256::from_i64(7).abs(), I256::from_i64(7));
        assert_eq!(I256::MIN.abs(), I256::MIN);
        assert_eq!(I256::MIN.checked_abs(), None);
        assert_eq!(I256::MIN.saturating_abs(), I256::MAX);
        assert_eq!(I256::MIN.try_abs(), Err(Int256Error::Overflow));
    }
}

#[cfg(test)]
mod overflow_tests {
    use super::*;

    #[test]
    fn test_overflowing_add() {
        assert_eq!(
            I256::from_i64(1).overflowing_add(I256::from_i64(2)),
            (I256::from_i64(3), false)
        );
        assert_eq!(I256::MAX.overflowing_add(I256::ONE), (I256::MIN, true));
        assert_eq!(
            I256::MIN.overflowing_add(I256::MINUS_ONE),
            (I256::MAX, true)
        );
        assert_eq!(I256::MIN.overflowing_add(I256::MIN), (I256::ZERO, true));
        assert_eq!(
            I256::MAX.overflowing_add(I256::MINUS_ONE),
            (I256::MAX.wrapping_sub(I256::ONE), false)
        );
    }

    #[test]
    fn test_checked_and_saturating_add() {
        assert_eq!(I256::MAX.checked_add(I256::ONE), None);
        assert_eq!(I256::MAX.saturating_add(I256::ONE), I256::MAX);
        assert_eq!(I256::MIN.saturating_add(I256::MINUS_ONE), I256::MIN);
        assert_eq!(I256::MAX.try_add(I256::ONE), Err(Int256Error::Overflow));
    }

    #[test]
    fn test_overflowing_sub() {
        assert_eq!(
            I256::from_i64(3).overflowing_sub(I256::from_i64(5)),
            (I256::from_i64(-2), false)
        );
        assert_eq!(I256::MIN.overflowing_sub(I256::ONE), (I256::MAX, true));
        assert_eq!(I256::ZERO.overflowing_sub(I256::MIN), (I256::MIN, true));
        assert_eq!(
            I256::ZERO.overflowing_sub(I256::MAX),
            (I256::MIN.wrapping_add(I256::ONE), false)
        );
        assert_eq!(
            I256::MAX.overflowing_sub(I256::MINUS_ONE),
            (I256::MIN, true)
        );
    }

    #[test]
    fn test_overflowing_mul_min_special_cases() {
        assert_eq!(I256::MIN.overflowing_mul(I256::ONE), (I256::MIN, false));
        assert_eq!(I256::ONE.overflowing_mul(I256::MIN), (I256::MIN, false));
        assert_eq!(I256::MIN.overflowing_mul(I256::MINUS_ONE), (I256::MIN, true));
        assert_eq!(I256::MINUS_ONE.overflowing_mul(I256::MIN), (I256::MIN, true));
    }

    #[test]
    fn test_overflowing_mul() {
        assert_eq!(
            I256::from_i64(100).overflowing_mul(I256::from_i64(-200)),
            (I256::from_i64(-20000), false)
        );
        assert_eq!(
            I256::MAX.overflowing_mul(I256::MINUS_ONE),
            (I256::MIN.wrapping_add(I256::ONE), false)
        );

        // 2^128 * 2^128 = 2^256 wraps to zero
        let big = I256::ONE.shift_left(128);
        assert_eq!(big.overflowing_mul(big), (I256::ZERO, true));

        // 2^127 * 2^127 = 2^254 fits
        let half = I256::ONE.shift_left(127);
        assert_eq!(
            half.overflowing_mul(half),
            (I256::ONE.shift_left(254), false)
        );

        // 2^127 * 2^128 = 2^255 runs into the sign bit
        assert_eq!(half.overflowing_mul(big), (I256::MIN, true));
    }

    #[test]
    fn test_checked_and_saturating_mul() {
        assert_eq!(
            I256::from_i64(100).checked_mul(I256::from_i64(200)),
            Some(I256::from_i64(20000))
        );
        assert_eq!(I256::MAX.checked_mul(I256::TEN), None);
        assert_eq!(I256::MAX.saturating_mul(I256::TEN), I256::MAX);
        assert_eq!(I256::MAX.saturating_mul(I256::from_i64(-10)), I256::MIN);
        assert_eq!(I256::MAX.try_mul(I256::TEN), Err(Int256Error::Overflow));
    }
}



#[cfg(test)]
mod shift_tests {
    use super::*;

    #[test]
    fn test_shift_left() {
        assert_eq!(I256::ONE.shift_left(0), I256::ONE);
        assert_eq!(I256::ONE.shift_left(1), I256::from_i64(2));
        assert_eq!(I256::ONE.shift_left(64), I256::from_limbs([0, 1, 0, 0]));
        assert_eq!(I256::ONE.shift_left(128), I256::from_limbs([0, 0, 1, 0]));
        assert_eq!(I256::ONE.shift_left(192), I256::from_limbs([0, 0, 0, 1]));
        assert_eq!(I256::ONE.shift_left(255), I256::MIN);
        assert_eq!(
            I256::from_i64(3).shift_left(254),
            I256::from_limbs([0, 0, 0, 0xc000000000000000])
        );
    }

    #[test]
    fn test_shift_left_past_width_is_zero() {
        assert_eq!(I256::MINUS_ONE.shift_left(256), I256::ZERO);
        assert_eq!(I256::MAX.shift_left(256), I256::ZERO);
        assert_eq!(I256::ONE.shift_left(1000), I256::ZERO);
    }

    #[test]
    fn test_shift_left_crosses_limbs() {
        let v = I256::from_limbs([u64::MAX, 0, 0, 0]);
        assert_eq!(
            v.shift_left(32),
            I256::from_limbs([0xffffffff00000000, 0xffffffff, 0, 0])
        );
    }

    #[test]
    fn test_shift_right_logical() {
        assert_eq!(I256::from_i64(1024).shift_right(3), I256::from_i64(128));
        assert_eq!(I256::ONE.shift_left(200).shift_right(100), I256::ONE.shift_left(100));
        assert_eq!(I256::MAX.shift_right(254), I256::ONE);
        assert_eq!(I256::MAX.shift_right(255), I256::ZERO);
        assert_eq!(I256::MAX.shift_right(1000), I256::ZERO);
    }

    #[test]
    fn test_shift_right_arithmetic() {
        assert_eq!(I256::from_i64(-1024).shift_right(3), I256::from_i64(-128));
        assert_eq!(I256::from_i64(-7).shift_right(1), I256::from_i64(-4));
        assert_eq!(I256::MINUS_ONE.shift_right(10), I256::MINUS_ONE);
        assert_eq!(I256::from_i64(-11111).shift_right(255), I256::MINUS_ONE);
        assert_eq!(I256::from_i64(-11111).shift_right(1000), I256::MINUS_ONE);
        assert_eq!(
            I256::ONE.shift_left(200).wrapping_neg().shift_right(100),
            I256::ONE.shift_left(100).wrapping_neg()
        );
        assert_eq!(I256::MIN.shift_right(255), I256::MINUS_ONE);
        assert_eq!(I256::MIN.shift_right(254), I256::from_i64(-2));
    }

    #[test]
    fn test_shift_zero_is_copy() {
        for v in [I256::MIN, I256::MAX, I256::from_i64(-5), I256::ZERO] {
            assert_eq!(v.shift_left(0), v);
            assert_eq!(v.shift_right(0), v);
        }
    }
}
