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
use crate::mla::fmla;
use crate::traits::FftSample;
use crate::util::compute_twiddle;
use crate::{FftDirection, FftExecutor, SharedBuffer, TukeyError};
use num_complex::Complex;
use num_traits::AsPrimitive;
use std::ops::Neg;

pub(crate) struct Butterfly2<T> {
    direction: FftDirection,
    input: SharedBuffer<T>,
    output: SharedBuffer<T>,
}

impl<T> Butterfly2<T> {
    pub(crate) fn new(
        fft_direction: FftDirection,
        input: SharedBuffer<T>,
        output: SharedBuffer<T>,
    ) -> Self {
        Self {
            direction: fft_direction,
            input,
            output,
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly2<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self) -> Result<(), TukeyError> {
        let (u0, u1) = {
            let input = self.input.borrow();
            if input.len() < 2 {
                return Err(TukeyError::BufferIsTooSmall(input.len(), self.length()));
            }
            (input[0], input[1])
        };

        let mut output = self.output.borrow_mut();
        if output.len() < 2 {
            return Err(TukeyError::BufferIsTooSmall(output.len(), self.length()));
        }

        output[0] = u0 + u1;
        output[1] = u0 - u1;
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        2
    }
}

pub(crate) struct Butterfly3<T> {
    direction: FftDirection,
    twiddle: Complex<T>,
    input: SharedBuffer<T>,
    output: SharedBuffer<T>,
}

impl<T: FftSample> Butterfly3<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(
        fft_direction: FftDirection,
        input: SharedBuffer<T>,
        output: SharedBuffer<T>,
    ) -> Self {
        Self {
            direction: fft_direction,
            twiddle: compute_twiddle(1, 3, fft_direction),
            input,
            output,
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly3<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self) -> Result<(), TukeyError> {
        let (u0, u1, u2) = {
            let input = self.input.borrow();
            if input.len() < 3 {
                return Err(TukeyError::BufferIsTooSmall(input.len(), self.length()));
            }
            (input[0], input[1], input[2])
        };

        let xp = u1 + u2;
        let xn = u1 - u2;
        let sum = u0 + xp;

        let w_1 = Complex {
            re: fmla(self.twiddle.re, xp.re, u0.re),
            im: fmla(self.twiddle.re, xp.im, u0.im),
        };

        let y0 = sum;
        let y1 = Complex {
            re: fmla(-self.twiddle.im, xn.im, w_1.re),
            im: fmla(self.twiddle.im, xn.re, w_1.im),
        };
        let y2 = Complex {
            re: fmla(self.twiddle.im, xn.im, w_1.re),
            im: fmla(-self.twiddle.im, xn.re, w_1.im),
        };

        let mut output = self.output.borrow_mut();
        if output.len() < 3 {
            return Err(TukeyError::BufferIsTooSmall(output.len(), self.length()));
        }

        output[0] = y0;
        output[1] = y1;
        output[2] = y2;
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        3
    }
}

pub(crate) fn rotate_90<T: Copy + Neg<Output = T>>(
    value: Complex<T>,
    direction: FftDirection,
) -> Complex<T> {
    match direction {
        FftDirection::Forward => Complex {
            re: value.im,
            im: -value.re,
        },
        FftDirection::Inverse => Complex {
            re: -value.im,
            im: value.re,
        },
    }
}

pub(crate) struct Butterfly4<T> {
    direction: FftDirection,
    input: SharedBuffer<T>,
    output: SharedBuffer<T>,
}

impl<T> Butterfly4<T> {
    pub(crate) fn new(
        fft_direction: FftDirection,
        input: SharedBuffer<T>,
        output: SharedBuffer<T>,
    ) -> Self {
        Self {
            direction: fft_direction,
            input,
            output,
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly4<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self) -> Result<(), TukeyError> {
        let (a, b, c, d) = {
            let input = self.input.borrow();
            if input.len() < 4 {
                return Err(TukeyError::BufferIsTooSmall(input.len(), self.length()));
            }
            (input[0], input[1], input[2], input[3])
        };

        let t0 = a + c;
        let t1 = a - c;
        let t2 = b + d;
        let z3 = b - d;
        let t3 = rotate_90(z3, self.direction);

        let mut output = self.output.borrow_mut();
        if output.len() < 4 {
            return Err(TukeyError::BufferIsTooSmall(output.len(), self.length()));
        }

        output[0] = t0 + t2;
        output[1] = t1 + t3;
        output[2] = t0 - t2;
        output[3] = t1 - t3;
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        4
    }
}

pub(crate) struct Butterfly5<T> {
    direction: FftDirection,
    twiddle1: Complex<T>,
    twiddle2: Complex<T>,
    input: SharedBuffer<T>,
    output: SharedBuffer<T>,
}

impl<T: FftSample> Butterfly5<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(
        fft_direction: FftDirection,
        input: SharedBuffer<T>,
        output: SharedBuffer<T>,
    ) -> Self {
        Self {
            direction: fft_direction,
            twiddle1: compute_twiddle(1, 5, fft_direction),
            twiddle2: compute_twiddle(2, 5, fft_direction),
            input,
            output,
        }
    }
}

impl<T: FftSample> FftExecutor<T> for Butterfly5<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self) -> Result<(), TukeyError> {
        let (u0, u1, u2, u3, u4) = {
            let input = self.input.borrow();
            if input.len() < 5 {
                return Err(TukeyError::BufferIsTooSmall(input.len(), self.length()));
            }
            (input[0], input[1], input[2], input[3], input[4])
        };

        let x14p = u1 + u4;
        let x14n = u1 - u4;
        let x23p = u2 + u3;
        let x23n = u2 - u3;
        let y0 = u0 + x14p + x23p;

        let b14re_a = fmla(
            self.twiddle2.re,
            x23p.re,
            fmla(self.twiddle1.re, x14p.re, u0.re),
        );
        let b14re_b = fmla(self.twiddle1.im, x14n.im, self.twiddle2.im * x23n.im);
        let b23re_a = fmla(
            self.twiddle1.re,
            x23p.re,
            fmla(self.twiddle2.re, x14p.re, u0.re),
        );
        let b23re_b = fmla(self.twiddle2.im, x14n.im, -self.twiddle1.im * x23n.im);

        let b14im_a = fmla(
            self.twiddle2.re,
            x23p.im,
            fmla(self.twiddle1.re, x14p.im, u0.im),
        );
        let b14im_b = fmla(self.twiddle1.im, x14n.re, self.twiddle2.im * x23n.re);
        let b23im_a = fmla(
            self.twiddle1.re,
            x23p.im,
            fmla(self.twiddle2.re, x14p.im, u0.im),
        );
        let b23im_b = fmla(self.twiddle2.im, x14n.re, -self.twiddle1.im * x23n.re);

        let y1 = Complex {
            re: b14re_a - b14re_b,
            im: b14im_a + b14im_b,
        };
        let y2 = Complex {
            re: b23re_a - b23re_b,
            im: b23im_a + b23im_b,
        };
        let y3 = Complex {
            re: b23re_a + b23re_b,
            im: b23im_a - b23im_b,
        };
        let y4 = Complex {
            re: b14re_a + b14re_b,
            im: b14im_a - b14im_b,
        };

        let mut output = self.output.borrow_mut();
        if output.len() < 5 {
            return Err(TukeyError::BufferIsTooSmall(output.len(), self.length()));
        }

        output[0] = y0;
        output[1] = y1;
        output[2] = y2;
        output[3] = y3;
        output[4] = y4;
        Ok(())
    }

    fn direction(&self) -> FftDirection {
        self.direction
    }

    #[inline]
    fn length(&self) -> usize {
        5
    }
}

#[cfg(test)]
mod tests {
    use crate::dft::Dft;
    use crate::{FftDirection, FftExecutor, PlanOptions, Tukey, shared_buffer};
    use num_complex::Complex;
    use rand::Rng;

    #[test]
    fn test_butterflies_match_dft() {
        for direction in [FftDirection::Forward, FftDirection::Inverse] {
            for size in 2..=5usize {
                let input = shared_buffer::<f64>(size).unwrap();
                for z in input.borrow_mut().iter_mut() {
                    *z = Complex {
                        re: rand::rng().random(),
                        im: rand::rng().random(),
                    };
                }
                let butterfly_out = shared_buffer::<f64>(size).unwrap();
                let dft_out = shared_buffer::<f64>(size).unwrap();

                let butterfly = Tukey::strategy(
                    size,
                    input.clone(),
                    butterfly_out.clone(),
                    direction,
                    PlanOptions::default(),
                )
                .unwrap();
                let reference =
                    Dft::new(size, direction, input.clone(), dft_out.clone()).unwrap();

                butterfly.execute().unwrap();
                reference.execute().unwrap();

                for (idx, (a, b)) in butterfly_out
                    .borrow()
                    .iter()
                    .zip(dft_out.borrow().iter())
                    .enumerate()
                {
                    assert!(
                        (a.re - b.re).abs() < 1e-9,
                        "a_re {} != b_re {} for size {} at {idx}",
                        a.re,
                        b.re,
                        size
                    );
                    assert!(
                        (a.im - b.im).abs() < 1e-9,
                        "a_im {} != b_im {} for size {} at {idx}",
                        a.im,
                        b.im,
                        size
                    );
                }
            }
        }
    }

    #[test]
    fn test_butterflies_in_place_binding() {
        for size in 2..=5usize {
            let data = shared_buffer::<f64>(size).unwrap();
            let reference_out = shared_buffer::<f64>(size).unwrap();
            for z in data.borrow_mut().iter_mut() {
                *z = Complex {
                    re: rand::rng().random(),
                    im: rand::rng().random(),
                };
            }
            let reference = Dft::new(
                size,
                FftDirection::Forward,
                data.clone(),
                reference_out.clone(),
            )
            .unwrap();
            reference.execute().unwrap();

            let in_place = Tukey::strategy(
                size,
                data.clone(),
                data.clone(),
                FftDirection::Forward,
                PlanOptions::default(),
            )
            .unwrap();
            in_place.execute().unwrap();

            for (a, b) in data.borrow().iter().zip(reference_out.borrow().iter()) {
                assert!((a.re - b.re).abs() < 1e-12);
                assert!((a.im - b.im).abs() < 1e-12);
            }
        }
    }
}
