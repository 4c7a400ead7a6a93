// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Validation errors for cover problem instances.
//!
//! Each violation of the input contract has its own error type carrying the
//! offending index and endpoint values, combined into
//! [`ProblemValidationError`].

use std::fmt::{Debug, Display};

/// The left endpoints are not strictly increasing at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeftNotIncreasingError<T> {
    index: usize,
    left: T,
    next_left: T,
}

impl<T> LeftNotIncreasingError<T> {
    #[inline]
    pub fn new(index: usize, left: T, next_left: T) -> Self {
        Self {
            index,
            left,
            next_left,
        }
    }

    /// Index `i` such that `L(i) >= L(i + 1)`.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn left(&self) -> T
    where
        T: Copy,
    {
        self.left
    }

    #[inline]
    pub fn next_left(&self) -> T
    where
        T: Copy,
    {
        self.next_left
    }
}

impl<T: Debug> Display for LeftNotIncreasingError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "left endpoints not strictly increasing at index {}: {:?} then {:?}",
            self.index, self.left, self.next_left
        )
    }
}

impl<T: Debug> std::error::Error for LeftNotIncreasingError<T> {}

/// The right endpoints are not strictly increasing at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RightNotIncreasingError<T> {
    index: usize,
    right: T,
    next_right: T,
}

impl<T> RightNotIncreasingError<T> {
    #[inline]
    pub fn new(index: usize, right: T, next_right: T) -> Self {
        Self {
            index,
            right,
            next_right,
        }
    }

    /// Index `i` such that `R(i) >= R(i + 1)`.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn right(&self) -> T
    where
        T: Copy,
    {
        self.right
    }

    #[inline]
    pub fn next_right(&self) -> T
    where
        T: Copy,
    {
        self.next_right
    }
}

impl<T: Debug> Display for RightNotIncreasingError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "right endpoints not strictly increasing at index {}: {:?} then {:?}",
            self.index, self.right, self.next_right
        )
    }
}

impl<T: Debug> std::error::Error for RightNotIncreasingError<T> {}

/// Interval `index` has `L(index) >= R(index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegenerateIntervalError<T> {
    index: usize,
    left: T,
    right: T,
}

impl<T> DegenerateIntervalError<T> {
    #[inline]
    pub fn new(index: usize, left: T, right: T) -> Self {
        Self { index, left, right }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn left(&self) -> T
    where
        T: Copy,
    {
        self.left
    }

    #[inline]
    pub fn right(&self) -> T
    where
        T: Copy,
    {
        self.right
    }
}

impl<T: Debug> Display for DegenerateIntervalError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "interval {} is degenerate: left {:?} is not strictly below right {:?}",
            self.index, self.left, self.right
        )
    }
}

impl<T: Debug> std::error::Error for DegenerateIntervalError<T> {}

/// Intervals `index` and `index + 1` do not overlap, leaving a gap in the
/// union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageGapError<T> {
    index: usize,
    right: T,
    next_left: T,
}

impl<T> CoverageGapError<T> {
    #[inline]
    pub fn new(index: usize, right: T, next_left: T) -> Self {
        Self {
            index,
            right,
            next_left,
        }
    }

    /// Index `i` such that `L(i + 1) > R(i)`.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn right(&self) -> T
    where
        T: Copy,
    {
        self.right
    }

    #[inline]
    pub fn next_left(&self) -> T
    where
        T: Copy,
    {
        self.next_left
    }
}

impl<T: Debug> Display for CoverageGapError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "gap after interval {}: next left {:?} exceeds right {:?}",
            self.index, self.next_left, self.right
        )
    }
}

impl<T: Debug> std::error::Error for CoverageGapError<T> {}

/// Any violation of the cover problem input contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemValidationError<T> {
    LeftNotIncreasing(LeftNotIncreasingError<T>),
    RightNotIncreasing(RightNotIncreasingError<T>),
    DegenerateInterval(DegenerateIntervalError<T>),
    CoverageGap(CoverageGapError<T>),
}

impl<T: Debug> Display for ProblemValidationError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemValidationError::LeftNotIncreasing(e) => write!(f, "{}", e),
            ProblemValidationError::RightNotIncreasing(e) => write!(f, "{}", e),
            ProblemValidationError::DegenerateInterval(e) => write!(f, "{}", e),
            ProblemValidationError::CoverageGap(e) => write!(f, "{}", e),
        }
    }
}

impl<T: Debug> std::error::Error for ProblemValidationError<T> {}

impl<T> From<LeftNotIncreasingError<T>> for ProblemValidationError<T> {
    fn from(err: LeftNotIncreasingError<T>) -> Self {
        Self::LeftNotIncreasing(err)
    }
}

impl<T> From<RightNotIncreasingError<T>> for ProblemValidationError<T> {
    fn from(err: RightNotIncreasingError<T>) -> Self {
        Self::RightNotIncreasing(err)
    }
}

impl<T> From<DegenerateIntervalError<T>> for ProblemValidationError<T> {
    fn from(err: DegenerateIntervalError<T>) -> Self {
        Self::DegenerateInterval(err)
    }
}

impl<T> From<CoverageGapError<T>> for ProblemValidationError<T> {
    fn from(err: CoverageGapError<T>) -> Self {
        Self::CoverageGap(err)
    }
}
