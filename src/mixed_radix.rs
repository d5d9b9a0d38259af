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
use crate::complex_fma::c_mul_fast;
use crate::err::try_vec;
use crate::traits::FftSample;
use crate::util::{compute_twiddle, smallest_divisor};
use crate::{
    FftDirection, FftExecutor, PlanOptions, SharedBuffer, Tukey, TukeyError, shared_buffer,
};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use std::cell::RefCell;

/// Cooley-Tukey plan for a composite length split as `height * width`,
/// where `width` is the smallest divisor of the length.
///
/// The samples are treated as a `height x width` grid in row-major order.
/// The first pass runs the height-sized sub-transform down each column and
/// corrects phases with the twiddle table; the second pass runs the
/// width-sized sub-transform along each row and transposes into the output,
/// which lands in natural frequency order without a reordering pass.
///
/// Both sub-transforms read `scratch_a` and write `scratch_b`, so the
/// recursion shares two buffers of length `max(height, width)` per level
/// instead of copying.
pub(crate) struct MixedRadix<T> {
    execution_length: usize,
    direction: FftDirection,
    twiddles: Vec<Complex<T>>,
    height_executor: Box<dyn FftExecutor<T>>,
    height: usize,
    width_executor: Box<dyn FftExecutor<T>>,
    width: usize,
    scratch_a: SharedBuffer<T>,
    scratch_b: SharedBuffer<T>,
    work: RefCell<Vec<Complex<T>>>,
    input: SharedBuffer<T>,
    output: SharedBuffer<T>,
}

impl<T: FftSample> MixedRadix<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(
        size: usize,
        fft_direction: FftDirection,
        input: SharedBuffer<T>,
        output: SharedBuffer<T>,
        options: PlanOptions,
    ) -> Result<MixedRadix<T>, TukeyError> {
        if size < 2 {
            return Err(TukeyError::InvalidSize(size));
        }
        let width = match smallest_divisor(size) {
            Some(divisor) => divisor,
            None => return Err(TukeyError::NotDecomposable(size)),
        };
        let height = size / width;

        let scratch_a = shared_buffer::<T>(height.max(width))?;
        let scratch_b = shared_buffer::<T>(height.max(width))?;
        let work = RefCell::new(try_vec![Complex::zero(); size]);

        let height_executor = Tukey::strategy(
            height,
            scratch_a.clone(),
            scratch_b.clone(),
            fft_direction,
            options,
        )?;
        let width_executor = Tukey::strategy(
            width,
            scratch_a.clone(),
            scratch_b.clone(),
            fft_direction,
            options,
        )?;

        let mut twiddles = try_vec![Complex::zero(); size];
        for (i, dst) in twiddles.iter_mut().enumerate() {
            *dst = compute_twiddle(i, size, fft_direction);
        }

        Ok(MixedRadix {
            execution_length: size,
            direction: fft_direction,
            twiddles,
            height_executor,
            height,
            width_executor,
            width,
            scratch_a,
            scratch_b,
            work,
            input,
            output,
        })
    }
}

impl<T: FftSample> FftExecutor<T> for MixedRadix<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self) -> Result<(), TukeyError> {
        let mut work = self.work.borrow_mut();
        {
            let input = self.input.borrow();
            if input.len() < self.execution_length {
                return Err(TukeyError::BufferIsTooSmall(
                    input.len(),
                    self.execution_length,
                ));
            }
            let output = self.output.borrow();
            if output.len() < self.execution_length {
                return Err(TukeyError::BufferIsTooSmall(
                    output.len(),
                    self.execution_length,
                ));
            }
            work.copy_from_slice(&input[..self.execution_length]);
        }

        // `width` sub-transforms of size `height`, one per column, phases
        // corrected by the twiddle table. `col * row` never reaches the
        // table length since col <= width - 1 and row <= height - 1.
        for col in 0..self.width {
            {
                let mut t0 = self.scratch_a.borrow_mut();
                for row in 0..self.height {
                    t0[row] = work[self.width * row + col];
                }
            }
            self.height_executor.execute()?;
            {
                let t1 = self.scratch_b.borrow();
                for row in 0..self.height {
                    work[self.width * row + col] = c_mul_fast(t1[row], self.twiddles[col * row]);
                }
            }
        }

        // `height` sub-transforms of size `width`, one per row, transposed
        // into the output.
        let mut output = self.output.borrow_mut();
        for row in 0..self.height {
            {
                let mut t0 = self.scratch_a.borrow_mut();
                for col in 0..self.width {
                    t0[col] = work[self.width * row + col];
                }
            }
            self.width_executor.execute()?;
            let t1 = self.scratch_b.borrow();
            for col in 0..self.width {
                output[col * self.height + row] = t1[col];
            }
        }
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
