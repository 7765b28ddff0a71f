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
use crate::ShiftExecutor;
use crate::avx::util::{_mm256_cvt2pd_ps, _mm256_fcmul_pd, _mm256_fcmul_ps, _mm256_scmul_pd};
use crate::err::ShiftError;
use crate::util::{check_frequency, init_tones};
use num_complex::Complex;
use std::arch::x86_64::*;
use std::marker::PhantomData;

/// Vector kernel for 256-bit lanes.
///
/// Master tones and the step always live in double precision, whatever the
/// sample type; almost all drift comes from the advancing recurrence, not
/// from the one narrowing cast per block, so the `f32` path narrows a copy
/// of the tones right before multiplying them into the buffer.
pub(crate) struct AvxShift<T> {
    pub(crate) phantom_data: PhantomData<T>,
}

impl AvxShift<f32> {
    #[target_feature(enable = "avx2", enable = "fma")]
    unsafe fn shift_f32_avx(&self, in_place: &mut [Complex<f32>], freq: f64, start_phase: f64) {
        unsafe {
            let (mut tones, step) = init_tones::<4>(freq, start_phase);

            let mut chunks = in_place.chunks_exact_mut(4);
            let mut first = true;
            for chunk in &mut chunks {
                if !first {
                    let t_lo = _mm256_loadu_pd(tones.as_ptr().cast());
                    let t_hi = _mm256_loadu_pd(tones.as_ptr().add(2).cast());
                    _mm256_storeu_pd(tones.as_mut_ptr().cast(), _mm256_scmul_pd(step, t_lo));
                    _mm256_storeu_pd(
                        tones.as_mut_ptr().add(2).cast(),
                        _mm256_scmul_pd(step, t_hi),
                    );
                }
                first = false;

                let t_lo = _mm256_loadu_pd(tones.as_ptr().cast());
                let t_hi = _mm256_loadu_pd(tones.as_ptr().add(2).cast());
                let tones32 = _mm256_cvt2pd_ps(t_lo, t_hi);

                let z0 = _mm256_loadu_ps(chunk.as_ptr().cast());
                _mm256_storeu_ps(chunk.as_mut_ptr().cast(), _mm256_fcmul_ps(z0, tones32));
            }

            let remainder = chunks.into_remainder();
            if !remainder.is_empty() {
                if !first {
                    let t_lo = _mm256_loadu_pd(tones.as_ptr().cast());
                    let t_hi = _mm256_loadu_pd(tones.as_ptr().add(2).cast());
                    _mm256_storeu_pd(tones.as_mut_ptr().cast(), _mm256_scmul_pd(step, t_lo));
                    _mm256_storeu_pd(
                        tones.as_mut_ptr().add(2).cast(),
                        _mm256_scmul_pd(step, t_hi),
                    );
                }
                for (dst, tone) in remainder.iter_mut().zip(tones.iter()) {
                    let tone32 = Complex::new(tone.re as f32, tone.im as f32);
                    *dst = *dst * tone32;
                }
            }
        }
    }
}

impl ShiftExecutor<f32> for AvxShift<f32> {
    fn shift(
        &self,
        in_place: &mut [Complex<f32>],
        freq: f64,
        start_phase: f64,
    ) -> Result<(), ShiftError> {
        check_frequency(freq)?;
        unsafe {
            self.shift_f32_avx(in_place, freq, start_phase);
        }
        Ok(())
    }
}

impl AvxShift<f64> {
    #[target_feature(enable = "avx2", enable = "fma")]
    unsafe fn shift_f64_avx(&self, in_place: &mut [Complex<f64>], freq: f64, start_phase: f64) {
        unsafe {
            let (mut tones, step) = init_tones::<4>(freq, start_phase);

            // A 256-bit lane holds 2 complex doubles, so each 4-wide block
            // splits into two vector multiplies and two advances.
            let mut chunks = in_place.chunks_exact_mut(4);
            let mut first = true;
            for chunk in &mut chunks {
                if !first {
                    let t_lo = _mm256_loadu_pd(tones.as_ptr().cast());
                    let t_hi = _mm256_loadu_pd(tones.as_ptr().add(2).cast());
                    _mm256_storeu_pd(tones.as_mut_ptr().cast(), _mm256_scmul_pd(step, t_lo));
                    _mm256_storeu_pd(
                        tones.as_mut_ptr().add(2).cast(),
                        _mm256_scmul_pd(step, t_hi),
                    );
                }
                first = false;

                let t_lo = _mm256_loadu_pd(tones.as_ptr().cast());
                let t_hi = _mm256_loadu_pd(tones.as_ptr().add(2).cast());

                let z_lo = _mm256_loadu_pd(chunk.as_ptr().cast());
                let z_hi = _mm256_loadu_pd(chunk.as_ptr().add(2).cast());
                _mm256_storeu_pd(chunk.as_mut_ptr().cast(), _mm256_fcmul_pd(z_lo, t_lo));
                _mm256_storeu_pd(
                    chunk.as_mut_ptr().add(2).cast(),
                    _mm256_fcmul_pd(z_hi, t_hi),
                );
            }

            let remainder = chunks.into_remainder();
            if !remainder.is_empty() {
                if !first {
                    let t_lo = _mm256_loadu_pd(tones.as_ptr().cast());
                    let t_hi = _mm256_loadu_pd(tones.as_ptr().add(2).cast());
                    _mm256_storeu_pd(tones.as_mut_ptr().cast(), _mm256_scmul_pd(step, t_lo));
                    _mm256_storeu_pd(
                        tones.as_mut_ptr().add(2).cast(),
                        _mm256_scmul_pd(step, t_hi),
                    );
                }
                for (dst, tone) in remainder.iter_mut().zip(tones.iter()) {
                    *dst = *dst * *tone;
                }
            }
        }
    }
}

impl ShiftExecutor<f64> for AvxShift<f64> {
    fn shift(
        &self,
        in_place: &mut [Complex<f64>],
        freq: f64,
        start_phase: f64,
    ) -> Result<(), ShiftError> {
        check_frequency(freq)?;
        unsafe {
            self.shift_f64_avx(in_place, freq, start_phase);
        }
        Ok(())
    }
}
