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
use crate::util::{check_frequency, init_tones};
use crate::ShiftExecutor;
use num_complex::Complex;
use num_traits::{AsPrimitive, Float, Num};
use std::marker::PhantomData;

/// Portable shift kernel.
///
/// `T` is the stored sample type, `U` the tone accumulator type and `UNROLL`
/// the block width. Tones advance in `U` precision and are narrowed to `T`
/// only at the point of multiplication into the buffer, so `U = f64` over
/// `f32` samples bounds phase drift independently of the sample width. The
/// `UNROLL` tones carry no data dependency within a block, which leaves the
/// inner loop open to auto-vectorization.
pub struct ScalarShift<T, U = T, const UNROLL: usize = 4> {
    phantom_data: PhantomData<(T, U)>,
}

impl<T, U, const UNROLL: usize> ScalarShift<T, U, UNROLL> {
    pub fn new() -> ScalarShift<T, U, UNROLL> {
        assert!(UNROLL > 0, "Block width must be at least 1");
        ScalarShift {
            phantom_data: PhantomData,
        }
    }
}

impl<T, U, const UNROLL: usize> Default for ScalarShift<T, U, UNROLL> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U, const UNROLL: usize> ShiftExecutor<T> for ScalarShift<T, U, UNROLL>
where
    T: Copy + Num + 'static,
    U: Float + 'static + AsPrimitive<T>,
    f64: AsPrimitive<U>,
{
    fn shift(
        &self,
        in_place: &mut [Complex<T>],
        freq: f64,
        start_phase: f64,
    ) -> Result<(), ShiftError> {
        check_frequency(freq)?;

        let (master, step64) = init_tones::<UNROLL>(freq, start_phase);
        let mut tones = [Complex::new(0.0f64.as_(), 0.0f64.as_()); UNROLL];
        for (tone, m) in tones.iter_mut().zip(master.iter()) {
            *tone = Complex::new(m.re.as_(), m.im.as_());
        }
        let step = Complex::new(step64.re.as_(), step64.im.as_());

        let mut chunks = in_place.chunks_exact_mut(UNROLL);
        let mut first = true;
        for chunk in &mut chunks {
            if !first {
                for tone in tones.iter_mut() {
                    *tone = *tone * step;
                }
            }
            first = false;
            for (dst, tone) in chunk.iter_mut().zip(tones.iter()) {
                *dst = *dst * Complex::new(tone.re.as_(), tone.im.as_());
            }
        }

        // The tail reuses the already-advanced tones for its block.
        let remainder = chunks.into_remainder();
        if !remainder.is_empty() {
            if !first {
                for tone in tones.iter_mut() {
                    *tone = *tone * step;
                }
            }
            for (dst, tone) in remainder.iter_mut().zip(tones.iter()) {
                *dst = *dst * Complex::new(tone.re.as_(), tone.im.as_());
            }
        }
        Ok(())
    }
}
