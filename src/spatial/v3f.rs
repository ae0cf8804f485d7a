use std::convert::TryFrom;
use std::iter::FusedIterator;

use super::SliceLengthError;


/// Three-component single-precision vector.
///
/// A plain `Copy` value. NaN and infinite components are allowed; the
/// operations that could blow up on them (see [`V3f::unitize`]) settle on
/// zero instead.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct V3f {
	pub x: f32,
	pub y: f32,
	pub z: f32
}

impl V3f {
	pub const ZERO: Self = Self::splat(0.0);
	pub const ONE: Self = Self::splat(1.0);
	pub const MAX: Self = Self::splat(f32::MAX);

	#[inline]
	pub const fn new(x: f32, y: f32, z: f32) -> Self {
		Self {x, y, z}
	}

	#[inline]
	pub const fn splat(n: f32) -> Self {
		Self {x: n, y: n, z: n}
	}

	/// Builds a vector from the first three elements of `slice`.
	///
	/// Panics if `slice` holds fewer than three elements. Use
	/// `V3f::try_from` when the length is not known to be valid.
	pub fn from_slice(slice: &[f32]) -> Self {
		Self {x: slice[0], y: slice[1], z: slice[2]}
	}

	#[inline]
	pub fn to_array(&self) -> [f32; 3] {
		[self.x, self.y, self.z]
	}

	pub fn to_vec(&self) -> Vec<f32> {
		self.to_array().to_vec()
	}

	/// Iterates over x, y and z, in that order.
	pub fn iter(&self) -> ComponentIter {
		ComponentIter {vec: *self, pos: 0}
	}

	/// Returns x, y or z for index 0, 1 or 2.
	///
	/// Any other index is a bug in the caller and panics.
	pub fn component(&self, i: usize) -> f32 {
		match i {
			0 => self.x,
			1 => self.y,
			2 => self.z,
			_ => panic!("illegal index number")
		}
	}

	pub fn map<F>(&self, func: F) -> Self
		where F: Fn(f32) -> f32
	{
		Self {
			x: func(self.x),
			y: func(self.y),
			z: func(self.z)
		}
	}

	/// Flips the sign of every component in place.
	pub fn negate(&mut self) {
		self.x *= -1.0;
		self.y *= -1.0;
		self.z *= -1.0;
	}

	#[inline]
	pub fn dot(&self, other: Self) -> f32 {
		self.x * other.x + self.y * other.y + self.z * other.z
	}

	/// Right-handed cross product.
	pub fn cross(&self, other: Self) -> Self {
		Self {
			x: (self.y * other.z) - (self.z * other.y),
			y: (self.z * other.x) - (self.x * other.z),
			z: (self.x * other.y) - (self.y * other.x)
		}
	}

	pub fn is_zero(&self) -> bool {
		self.x == 0.0 && self.y == 0.0 && self.z == 0.0
	}

	pub fn mag(&self) -> f32 {
		(self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
	}

	/// Scales the vector to unit length in place.
	///
	/// A zero (or underflowing) length uses an inverse length of 0, and an
	/// overflowing length gives 1 / inf = 0, so both end up as the zero
	/// vector rather than NaN or infinity.
	pub fn unitize(&mut self) {
		let length = self.mag();
		let length_inv = if length != 0.0 {
			1.0 / length
		} else {
			0.0
		};
		self.x *= length_inv;
		self.y *= length_inv;
		self.z *= length_inv;
	}

	pub fn unitized(self) -> Self {
		let mut v = self;
		v.unitize();
		v
	}

	/// Clamps each component to `lo` and then `hi`.
	///
	/// The lower bound is applied first, so on an axis where `lo > hi` the
	/// result is `hi`. A NaN component or bound yields NaN, except that an
	/// infinite bound pointing the right way still wins.
	pub fn clamped(&self, lo: Self, hi: Self) -> Self {
		Self {
			x: min_f32(max_f32(self.x, lo.x), hi.x),
			y: min_f32(max_f32(self.y, lo.y), hi.y),
			z: min_f32(max_f32(self.z, lo.z), hi.z)
		}
	}
}


/// Larger of `a` and `b`. +inf beats NaN, NaN beats everything else, and
/// +0 is larger than -0.
fn max_f32(a: f32, b: f32) -> f32 {
	if a == f32::INFINITY || b == f32::INFINITY {
		f32::INFINITY
	} else if a.is_nan() || b.is_nan() {
		f32::NAN
	} else if a == 0.0 && a == b {
		if a.is_sign_negative() { b } else { a }
	} else if a > b {
		a
	} else {
		b
	}
}


/// Smaller of `a` and `b`. -inf beats NaN, NaN beats everything else, and
/// -0 is smaller than +0.
fn min_f32(a: f32, b: f32) -> f32 {
	if a == f32::NEG_INFINITY || b == f32::NEG_INFINITY {
		f32::NEG_INFINITY
	} else if a.is_nan() || b.is_nan() {
		f32::NAN
	} else if a == 0.0 && a == b {
		if a.is_sign_negative() { a } else { b }
	} else if a < b {
		a
	} else {
		b
	}
}

impl From<[f32; 3]> for V3f {
	fn from(a: [f32; 3]) -> Self {
		Self {x: a[0], y: a[1], z: a[2]}
	}
}

impl From<V3f> for [f32; 3] {
	fn from(v: V3f) -> Self {
		v.to_array()
	}
}

impl TryFrom<&[f32]> for V3f {
	type Error = SliceLengthError;

	fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
		if slice.len() < 3 {
			return Err(SliceLengthError {len: slice.len()});
		}
		Ok(Self::from_slice(slice))
	}
}

impl std::ops::Index<usize> for V3f {
	type Output = f32;

	fn index(&self, i: usize) -> &f32 {
		match i {
			0 => &self.x,
			1 => &self.y,
			2 => &self.z,
			_ => panic!("illegal index number")
		}
	}
}

impl std::ops::IndexMut<usize> for V3f {
	fn index_mut(&mut self, i: usize) -> &mut f32 {
		match i {
			0 => &mut self.x,
			1 => &mut self.y,
			2 => &mut self.z,
			_ => panic!("illegal index number")
		}
	}
}

impl std::ops::Add<Self> for V3f {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self {
			x: self.x + rhs.x,
			y: self.y + rhs.y,
			z: self.z + rhs.z
		}
	}
}

impl std::ops::Sub<Self> for V3f {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self {
			x: self.x - rhs.x,
			y: self.y - rhs.y,
			z: self.z - rhs.z
		}
	}
}

impl std::ops::Mul<Self> for V3f {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		Self {
			x: self.x * rhs.x,
			y: self.y * rhs.y,
			z: self.z * rhs.z
		}
	}
}

impl std::ops::Mul<f32> for V3f {
	type Output = Self;

	fn mul(self, rhs: f32) -> Self {
		Self {
			x: self.x * rhs,
			y: self.y * rhs,
			z: self.z * rhs
		}
	}
}

impl std::ops::Neg for V3f {
	type Output = Self;

	fn neg(self) -> Self {
		let mut v = self;
		v.negate();
		v
	}
}

impl std::fmt::Display for V3f {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "({}, {}, {})", self.x, self.y, self.z)
	}
}

impl IntoIterator for V3f {
	type Item = f32;
	type IntoIter = ComponentIter;

	fn into_iter(self) -> ComponentIter {
		self.iter()
	}
}


/// Yields the components of a [`V3f`] once each: x, then y, then z.
#[derive(Clone, Debug)]
pub struct ComponentIter {
	vec: V3f,
	pos: usize
}

impl Iterator for ComponentIter {
	type Item = f32;

	fn next(&mut self) -> Option<Self::Item> {
		if self.pos > 2 {
			None
		} else {
			let n = self.vec.component(self.pos);
			self.pos += 1;
			Some(n)
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let left = 3 - self.pos;
		(left, Some(left))
	}
}

impl ExactSizeIterator for ComponentIter {}

impl FusedIterator for ComponentIter {}
