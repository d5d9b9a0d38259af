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
use crate::FftDirection;
use crate::traits::FftTrigonometry;
use num_complex::Complex;
use num_traits::{AsPrimitive, Float};

/// Smallest divisor of `n` in `[2, n)`, scanning ascending.
///
/// A composite `n` always has a divisor not exceeding `√n`, so the scan
/// stops there; the result is the same as a full `[2, n)` scan. Returns
/// `None` when `n` is prime (or smaller than 4).
pub(crate) fn smallest_divisor(n: usize) -> Option<usize> {
    let mut q = 2usize;
    while q * q <= n {
        if n % q == 0 {
            return Some(q);
        }
        q += 1;
    }
    None
}

pub(crate) fn compute_twiddle<T: Float + FftTrigonometry + 'static>(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let angle = (-2. * index as f64 / fft_len as f64).as_();
    let (v_sin, v_cos) = angle.sincos_pi();

    let result = Complex {
        re: v_cos,
        im: v_sin,
    };

    match direction {
        FftDirection::Forward => result,
        FftDirection::Inverse => result.conj(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smallest_divisor() {
        assert_eq!(smallest_divisor(4), Some(2));
        assert_eq!(smallest_divisor(6), Some(2));
        assert_eq!(smallest_divisor(9), Some(3));
        assert_eq!(smallest_divisor(35), Some(5));
        assert_eq!(smallest_divisor(143), Some(11));
        assert_eq!(smallest_divisor(2), None);
        assert_eq!(smallest_divisor(13), None);
        assert_eq!(smallest_divisor(97), None);
    }

    #[test]
    fn test_twiddle_directions_conjugate() {
        for k in 0..12 {
            let fwd = compute_twiddle::<f64>(k, 12, FftDirection::Forward);
            let inv = compute_twiddle::<f64>(k, 12, FftDirection::Inverse);
            assert!((fwd.re - inv.re).abs() < 1e-12);
            assert!((fwd.im + inv.im).abs() < 1e-12);
            assert!((fwd.norm() - 1.0).abs() < 1e-12);
        }
    }
}
