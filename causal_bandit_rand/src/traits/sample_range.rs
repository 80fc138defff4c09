/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::ops::Range;

use crate::errors::RngError;
use crate::traits::rng_core::RngCore;

/// A type that can produce a single sample of `T` from within itself.
///
/// Implemented directly on `Range<T>` so that `Rng::random_range` can accept
/// plain `low..high` literals.
pub trait SampleRange<T> {
    fn sample_single<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<T, RngError>;
    fn is_empty(&self) -> bool;
}

impl SampleRange<f32> for Range<f32> {
    fn sample_single<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<f32, RngError> {
        if self.start >= self.end {
            return Err(RngError::InvalidRange(
                "Invalid range: low must be less than high".to_string(),
            ));
        }
        let frac = rng.next_u32() as f32 / u32::MAX as f32;
        Ok(self.start + frac * (self.end - self.start))
    }

    fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl SampleRange<f64> for Range<f64> {
    fn sample_single<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<f64, RngError> {
        if self.start >= self.end {
            return Err(RngError::InvalidRange(
                "Invalid range: low must be less than high".to_string(),
            ));
        }
        let frac = rng.next_u64() as f64 / u64::MAX as f64;
        Ok(self.start + frac * (self.end - self.start))
    }

    fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl SampleRange<u32> for Range<u32> {
    fn sample_single<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<u32, RngError> {
        if self.start >= self.end {
            return Err(RngError::InvalidRange(
                "Invalid range: low must be less than high".to_string(),
            ));
        }
        let span = (self.end - self.start) as u64;
        let offset = rng.next_u32() as u64 % span;
        Ok(self.start + offset as u32)
    }

    fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl SampleRange<u64> for Range<u64> {
    fn sample_single<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<u64, RngError> {
        if self.start >= self.end {
            return Err(RngError::InvalidRange(
                "Invalid range: low must be less than high".to_string(),
            ));
        }
        let span = self.end - self.start;
        let offset = rng.next_u64() % span;
        Ok(self.start + offset)
    }

    fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl SampleRange<usize> for Range<usize> {
    fn sample_single<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<usize, RngError> {
        if self.start >= self.end {
            return Err(RngError::InvalidRange(
                "Invalid range: low must be less than high".to_string(),
            ));
        }
        let span = (self.end - self.start) as u64;
        let offset = rng.next_u64() % span;
        Ok(self.start + offset as usize)
    }

    fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
