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
use crate::err::ShiftError;
use num_complex::Complex;
use std::f64::consts::PI;

/// Validates the normalized frequency precondition. Runs once per call,
/// before any element is touched; NaN is rejected along with out-of-range
/// values.
pub(crate) fn check_frequency(freq: f64) -> Result<(), ShiftError> {
    if !(freq >= 0.0 && freq < 1.0) {
        return Err(ShiftError::InvalidFrequency(freq));
    }
    Ok(())
}

/// Unit phasor `(cos theta, sin theta)` for an angle in radians.
#[inline]
pub(crate) fn phasor(theta: f64) -> Complex<f64> {
    let (t_sin, t_cos) = theta.sin_cos();
    Complex::new(t_cos, t_sin)
}

/// Synthesizes the `UNROLL` starting tones and the per-block step.
///
/// This is the only place trigonometric functions run; every later tone
/// value comes from multiplying by the step.
pub(crate) fn init_tones<const UNROLL: usize>(
    freq: f64,
    start_phase: f64,
) -> ([Complex<f64>; UNROLL], Complex<f64>) {
    let mut tones = [Complex::new(0.0, 0.0); UNROLL];
    for (k, tone) in tones.iter_mut().enumerate() {
        *tone = phasor(start_phase + k as f64 * 2.0 * PI * freq);
    }
    let step = phasor(2.0 * PI * freq * UNROLL as f64);
    (tones, step)
}
