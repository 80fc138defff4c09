/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::marker::PhantomData;

use crate::traits::rng::Rng;

/// Types that can produce values of `T` given a source of randomness.
pub trait Distribution<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T;

    fn sample_iter<R>(&self, rng: R) -> DistIter<'_, Self, R, T>
    where
        R: Rng,
        Self: Sized,
    {
        DistIter {
            distr: self,
            rng,
            phantom: PhantomData,
        }
    }

    fn map<F, S>(self, func: F) -> DistMap<Self, F, T>
    where
        Self: Sized,
        F: Fn(T) -> S,
    {
        DistMap {
            distr: self,
            func,
            phantom: PhantomData,
        }
    }
}

pub struct DistIter<'a, D: ?Sized, R, T> {
    distr: &'a D,
    rng: R,
    phantom: PhantomData<T>,
}

impl<'a, D, R, T> Iterator for DistIter<'a, D, R, T>
where
    D: Distribution<T> + ?Sized,
    R: Rng,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.distr.sample(&mut self.rng))
    }
}

pub struct DistMap<D, F, T> {
    distr: D,
    func: F,
    phantom: PhantomData<T>,
}

impl<D, F, T, S> Distribution<S> for DistMap<D, F, T>
where
    D: Distribution<T>,
    F: Fn(T) -> S,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> S {
        (self.func)(self.distr.sample(rng))
    }
}
