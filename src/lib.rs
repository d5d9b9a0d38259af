/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
mod butterflies;
mod complex_fma;
mod dft;
mod err;
mod mixed_radix;
mod mla;
mod traits;
mod util;

pub use err::TukeyError;

use crate::butterflies::{Butterfly2, Butterfly3, Butterfly4, Butterfly5};
use crate::dft::Dft;
use crate::err::try_vec;
use crate::mixed_radix::MixedRadix;
use crate::traits::FftSample;
use crate::util::smallest_divisor;
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a complex sample buffer.
///
/// A plan keeps a handle to its bound input and output for its whole
/// lifetime; the recursion also uses handles to hand scratch buffers down
/// to sub-transforms without copying. `Rc` keeps plans on a single thread,
/// and `RefCell` turns a re-entrant execute into a panic instead of
/// silently corrupted scratch.
pub type SharedBuffer<T> = Rc<RefCell<Vec<Complex<T>>>>;

/// Allocates a zeroed shared buffer of `len` complex samples.
pub fn shared_buffer<T: Default + Clone>(len: usize) -> Result<SharedBuffer<T>, TukeyError> {
    Ok(Rc::new(RefCell::new(try_vec![Complex::<T>::default(); len])))
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum FftDirection {
    Forward,
    Inverse,
}

/// Reserved plan configuration. Carries no recognized flags yet; it is
/// forwarded through the recursion so future options reach every level.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Default)]
pub struct PlanOptions {}

/// A built transform bound to its input and output buffers.
///
/// `execute` reads the current contents of the bound input and writes the
/// bound output; it may be called any number of times. No normalization is
/// applied in either direction, so an inverse transform returns the input
/// scaled by the transform length.
pub trait FftExecutor<T> {
    fn execute(&self) -> Result<(), TukeyError>;
    fn direction(&self) -> FftDirection;
    fn length(&self) -> usize;
}

pub struct Tukey {}

impl Tukey {
    pub(crate) fn strategy<T: FftSample>(
        n: usize,
        input: SharedBuffer<T>,
        output: SharedBuffer<T>,
        fft_direction: FftDirection,
        options: PlanOptions,
    ) -> Result<Box<dyn FftExecutor<T>>, TukeyError>
    where
        f64: AsPrimitive<T>,
    {
        match n {
            0 | 1 => Err(TukeyError::InvalidSize(n)),
            2 => Ok(Box::new(Butterfly2::new(fft_direction, input, output))),
            3 => Ok(Box::new(Butterfly3::new(fft_direction, input, output))),
            4 => Ok(Box::new(Butterfly4::new(fft_direction, input, output))),
            5 => Ok(Box::new(Butterfly5::new(fft_direction, input, output))),
            _ => {
                if smallest_divisor(n).is_some() {
                    MixedRadix::new(n, fft_direction, input, output, options)
                        .map(|x| Box::new(x) as Box<dyn FftExecutor<T>>)
                } else {
                    // prime length with no dedicated kernel
                    Dft::new(n, fft_direction, input, output)
                        .map(|x| Box::new(x) as Box<dyn FftExecutor<T>>)
                }
            }
        }
    }

    pub fn make_forward_fft_f32(
        n: usize,
        input: SharedBuffer<f32>,
        output: SharedBuffer<f32>,
        options: PlanOptions,
    ) -> Result<Box<dyn FftExecutor<f32>>, TukeyError> {
        Tukey::strategy(n, input, output, FftDirection::Forward, options)
    }

    pub fn make_inverse_fft_f32(
        n: usize,
        input: SharedBuffer<f32>,
        output: SharedBuffer<f32>,
        options: PlanOptions,
    ) -> Result<Box<dyn FftExecutor<f32>>, TukeyError> {
        Tukey::strategy(n, input, output, FftDirection::Inverse, options)
    }

    pub fn make_forward_fft_f64(
        n: usize,
        input: SharedBuffer<f64>,
        output: SharedBuffer<f64>,
        options: PlanOptions,
    ) -> Result<Box<dyn FftExecutor<f64>>, TukeyError> {
        Tukey::strategy(n, input, output, FftDirection::Forward, options)
    }

    pub fn make_inverse_fft_f64(
        n: usize,
        input: SharedBuffer<f64>,
        output: SharedBuffer<f64>,
        options: PlanOptions,
    ) -> Result<Box<dyn FftExecutor<f64>>, TukeyError> {
        Tukey::strategy(n, input, output, FftDirection::Inverse, options)
    }
}
