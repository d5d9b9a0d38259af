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
use crate::complex_fma::c_mul_add_fast;
use crate::err::try_vec;
use crate::traits::FftSample;
use crate::util::compute_twiddle;
use crate::{FftDirection, FftExecutor, SharedBuffer, TukeyError};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::cell::RefCell;

/// Naive O(N²) DFT over the bound buffers. Serves any size, including
/// primes that no other strategy decomposes.
pub(crate) struct Dft<T> {
    execution_length: usize,
    twiddles: Vec<Complex<T>>,
    direction: FftDirection,
    input: SharedBuffer<T>,
    output: SharedBuffer<T>,
    work: RefCell<Vec<Complex<T>>>,
}

impl<T: FftSample> Dft<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(
        size: usize,
        fft_direction: FftDirection,
        input: SharedBuffer<T>,
        output: SharedBuffer<T>,
    ) -> Result<Dft<T>, TukeyError> {
        let mut twiddles = try_vec![Complex::<T>::default(); size];
        for (k, dst) in twiddles.iter_mut().enumerate() {
            *dst = compute_twiddle(k, size, fft_direction);
        }
        Ok(Dft {
            execution_length: size,
            twiddles,
            direction: fft_direction,
            input,
            output,
            work: RefCell::new(try_vec![Complex::<T>::default(); size]),
        })
    }
}

impl<T: FftSample> FftExecutor<T> for Dft<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self) -> Result<(), TukeyError> {
        {
            let input = self.input.borrow();
            if input.len() < self.execution_length {
                return Err(TukeyError::BufferIsTooSmall(
                    input.len(),
                    self.execution_length,
                ));
            }
            let mut work = self.work.borrow_mut();
            for (k, dst) in work.iter_mut().enumerate() {
                let mut sum = Complex::<T>::new(0f64.as_(), 0f64.as_());
                let mut twiddle_idx = 0usize;
                for src in input[..self.execution_length].iter() {
                    let w = unsafe { *self.twiddles.get_unchecked(twiddle_idx) };
                    sum = c_mul_add_fast(*src, w, sum);
                    twiddle_idx += k;
                    if twiddle_idx >= self.twiddles.len() {
                        twiddle_idx -= self.twiddles.len();
                    }
                }
                *dst = sum;
            }
        }

        let mut output = self.output.borrow_mut();
        if output.len() < self.execution_length {
            return Err(TukeyError::BufferIsTooSmall(
                output.len(),
                self.execution_length,
            ));
        }
        let work = self.work.borrow();
        output[..self.execution_length].copy_from_slice(&work);
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        self.execution_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_buffer;
    use rand::Rng;

    #[test]
    fn test_dft_impulse() {
        let size = 7usize;
        let input = shared_buffer::<f64>(size).unwrap();
        let output = shared_buffer::<f64>(size).unwrap();
        input.borrow_mut()[0] = Complex::new(1.0, 0.0);
        let dft = Dft::new(size, FftDirection::Forward, input.clone(), output.clone()).unwrap();
        dft.execute().unwrap();
        for (idx, z) in output.borrow().iter().enumerate() {
            assert!(
                (z.re - 1.0).abs() < 1e-12 && z.im.abs() < 1e-12,
                "unexpected {z} at {idx}"
            );
        }
    }

    #[test]
    fn test_dft_roundtrip() {
        for size in [2usize, 7, 11, 13, 17] {
            let input = shared_buffer::<f64>(size).unwrap();
            let spectrum = shared_buffer::<f64>(size).unwrap();
            let restored = shared_buffer::<f64>(size).unwrap();
            for z in input.borrow_mut().iter_mut() {
                *z = Complex {
                    re: rand::rng().random(),
                    im: rand::rng().random(),
                };
            }
            let forward =
                Dft::new(size, FftDirection::Forward, input.clone(), spectrum.clone()).unwrap();
            let inverse = Dft::new(
                size,
                FftDirection::Inverse,
                spectrum.clone(),
                restored.clone(),
            )
            .unwrap();
            forward.execute().unwrap();
            inverse.execute().unwrap();

            let scale = 1.0 / size as f64;
            let src = input.borrow();
            for (a, b) in restored.borrow().iter().zip(src.iter()) {
                assert!(
                    (a.re * scale - b.re).abs() < 1e-9,
                    "a_re {} != b_re {} for size {}",
                    a.re * scale,
                    b.re,
                    size
                );
                assert!(
                    (a.im * scale - b.im).abs() < 1e-9,
                    "a_im {} != b_im {} for size {}",
                    a.im * scale,
                    b.im,
                    size
                );
            }
        }
    }

    #[test]
    fn test_dft_in_place_binding() {
        let size = 11usize;
        let data = shared_buffer::<f64>(size).unwrap();
        let reference_in = shared_buffer::<f64>(size).unwrap();
        let reference_out = shared_buffer::<f64>(size).unwrap();
        {
            let mut dst = data.borrow_mut();
            let mut src = reference_in.borrow_mut();
            for (a, b) in dst.iter_mut().zip(src.iter_mut()) {
                let z = Complex {
                    re: rand::rng().random(),
                    im: rand::rng().random(),
                };
                *a = z;
                *b = z;
            }
        }
        let in_place = Dft::new(size, FftDirection::Forward, data.clone(), data.clone()).unwrap();
        let reference = Dft::new(
            size,
            FftDirection::Forward,
            reference_in.clone(),
            reference_out.clone(),
        )
        .unwrap();
        in_place.execute().unwrap();
        reference.execute().unwrap();
        for (a, b) in data.borrow().iter().zip(reference_out.borrow().iter()) {
            assert!((a.re - b.re).abs() < 1e-12);
            assert!((a.im - b.im).abs() < 1e-12);
        }
    }

    #[test]
    fn test_dft_rejects_short_buffers() {
        let input = shared_buffer::<f32>(3).unwrap();
        let output = shared_buffer::<f32>(8).unwrap();
        let dft = Dft::new(8, FftDirection::Forward, input, output).unwrap();
        assert!(matches!(
            dft.execute(),
            Err(TukeyError::BufferIsTooSmall(3, 8))
        ));
    }
}
