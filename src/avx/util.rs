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
use num_complex::Complex;
use std::arch::x86_64::*;

#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn _mm256_set_complexd(v: Complex<f64>) -> __m256d {
    unsafe { _mm256_setr_pd(v.re, v.im, v.re, v.im) }
}

/// Narrows 8 packed doubles (`lo` holding lanes 0..4, `hi` lanes 4..8) to
/// 8 packed floats, element-wise equal to an `as f32` cast.
#[inline]
#[target_feature(enable = "avx")]
pub(crate) unsafe fn _mm256_cvt2pd_ps(lo: __m256d, hi: __m256d) -> __m256 {
    unsafe { _mm256_set_m128(_mm256_cvtpd_ps(hi), _mm256_cvtpd_ps(lo)) }
}

/// 4 independent complex products `a[k] * b[k]` over packed f32 lanes.
#[inline]
#[target_feature(enable = "avx", enable = "fma")]
pub(crate) unsafe fn _mm256_fcmul_ps(a: __m256, b: __m256) -> __m256 {
    unsafe {
        // Duplicate real and imaginary parts of 'a'
        let a_re = _mm256_moveldup_ps(a);
        let a_im = _mm256_movehdup_ps(a);

        // Swap real/imag of 'b' for the cross terms
        let b_swap = _mm256_permute_ps::<0b10110001>(b);

        // re = a_re*b_re - a_im*b_im
        // im = a_re*b_im + a_im*b_re
        _mm256_fmaddsub_ps(a_re, b, _mm256_mul_ps(a_im, b_swap))
    }
}

/// 2 independent complex products `a[k] * b[k]` over packed f64 lanes.
#[inline]
#[target_feature(enable = "avx", enable = "fma")]
pub(crate) unsafe fn _mm256_fcmul_pd(a: __m256d, b: __m256d) -> __m256d {
    unsafe {
        // Swap real and imaginary parts of 'a' for FMA
        let a_yx = _mm256_permute_pd::<0b0101>(a);

        // Duplicate real and imaginary parts of 'b'
        let b_xx = _mm256_permute_pd::<0b0000>(b);
        let b_yy = _mm256_permute_pd::<0b1111>(b);

        _mm256_fmaddsub_pd(a, b_xx, _mm256_mul_pd(a_yx, b_yy))
    }
}

/// Broadcasts one complex double into both 128-bit lanes and multiplies it
/// into 2 packed complex doubles. Used only to advance the master tones.
#[inline]
#[target_feature(enable = "avx", enable = "fma")]
pub(crate) unsafe fn _mm256_scmul_pd(x: Complex<f64>, z: __m256d) -> __m256d {
    unsafe { _mm256_fcmul_pd(z, _mm256_set_complexd(x)) }
}
