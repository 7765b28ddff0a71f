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
#![cfg_attr(docsrs, feature(doc_cfg))]
#[cfg(all(target_arch = "x86_64", feature = "avx"))]
mod avx;
mod err;
mod shift;
mod util;

pub use err::ShiftError;
pub use shift::ScalarShift;

use num_complex::Complex;
use std::sync::{Arc, OnceLock};

/// In-place frequency shift over one complex buffer.
pub trait ShiftExecutor<T> {
    /// Multiplies `in_place[i]` by `exp(j(2*pi*freq*i + start_phase))`.
    ///
    /// `freq` is normalized to cycles per sample and must be in `[0, 1)`;
    /// `start_phase` is radians, unconstrained. On failure nothing is
    /// mutated.
    fn shift(
        &self,
        in_place: &mut [Complex<T>],
        freq: f64,
        start_phase: f64,
    ) -> Result<(), ShiftError>;
}

macro_rules! default_shift_module {
    ($t:ty) => {{
        #[cfg(all(target_arch = "x86_64", feature = "avx"))]
        {
            if std::arch::is_x86_feature_detected!("avx2")
                && std::arch::is_x86_feature_detected!("fma")
            {
                use crate::avx::AvxShift;
                return Arc::new(AvxShift::<$t> {
                    phantom_data: Default::default(),
                });
            }
        }
        Arc::new(ScalarShift::<$t, f64, 4>::new())
    }};
}

pub(crate) trait ShifterFactory<T> {
    fn make_shifter() -> Arc<dyn ShiftExecutor<T> + Send + Sync>;
}

impl ShifterFactory<f32> for f32 {
    fn make_shifter() -> Arc<dyn ShiftExecutor<f32> + Send + Sync> {
        static SHIFT_MODULE_SINGLE: OnceLock<Arc<dyn ShiftExecutor<f32> + Send + Sync>> =
            OnceLock::new();
        SHIFT_MODULE_SINGLE
            .get_or_init(|| default_shift_module!(f32))
            .clone()
    }
}

impl ShifterFactory<f64> for f64 {
    fn make_shifter() -> Arc<dyn ShiftExecutor<f64> + Send + Sync> {
        static SHIFT_MODULE_DOUBLE: OnceLock<Arc<dyn ShiftExecutor<f64> + Send + Sync>> =
            OnceLock::new();
        SHIFT_MODULE_DOUBLE
            .get_or_init(|| default_shift_module!(f64))
            .clone()
    }
}

pub struct Fshift {}

impl Fshift {
    /// Picks the fastest available `f32` kernel for the running CPU.
    pub fn make_shifter_f32() -> Arc<dyn ShiftExecutor<f32> + Send + Sync> {
        f32::make_shifter()
    }

    /// Picks the fastest available `f64` kernel for the running CPU.
    pub fn make_shifter_f64() -> Arc<dyn ShiftExecutor<f64> + Send + Sync> {
        f64::make_shifter()
    }
}

/// Shifts `in_place` by `freq` cycles per sample, starting at `start_phase`
/// radians.
pub fn shift_f32(
    in_place: &mut [Complex<f32>],
    freq: f64,
    start_phase: f64,
) -> Result<(), ShiftError> {
    f32::make_shifter().shift(in_place, freq, start_phase)
}

/// Shifts `in_place` by `freq` cycles per sample, starting at `start_phase`
/// radians.
pub fn shift_f64(
    in_place: &mut [Complex<f64>],
    freq: f64,
    start_phase: f64,
) -> Result<(), ShiftError> {
    f64::make_shifter().shift(in_place, freq, start_phase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::f64::consts::PI;

    #[test]
    fn test_dispatched_matches_reference() {
        let size = 99_999usize;
        let freq = 0.43;
        let start_phase = -1.1;
        let mut input = vec![Complex::<f64>::default(); size];
        for z in input.iter_mut() {
            *z = Complex {
                re: rand::rng().random::<f64>() + 0.5,
                im: rand::rng().random::<f64>() + 0.5,
            };
        }
        let src = input.to_vec();
        shift_f64(&mut input, freq, start_phase).unwrap();

        input
            .iter()
            .zip(src.iter())
            .enumerate()
            .for_each(|(i, (a, b))| {
                let (t_sin, t_cos) = (2.0 * PI * freq * i as f64 + start_phase).sin_cos();
                let r = b * Complex::new(t_cos, t_sin);
                assert!(
                    (a - r).norm() < 1e-9 * r.norm(),
                    "a {} != r {} at index {}",
                    a,
                    r,
                    i
                );
            });
    }

    #[test]
    fn test_precondition() {
        let mut input = vec![Complex::new(2.0f32, -3.0)];
        let src = input.to_vec();
        assert_eq!(
            shift_f32(&mut input, -0.1, 0.0),
            Err(ShiftError::InvalidFrequency(-0.1))
        );
        assert_eq!(
            shift_f32(&mut input, 1.0, 0.0),
            Err(ShiftError::InvalidFrequency(1.0))
        );
        assert_eq!(input, src);
        assert!(shift_f32(&mut input, 0.0, 0.0).is_ok());
        assert!(shift_f32(&mut input, 0.9999999999, 0.0).is_ok());
    }

    #[test]
    fn test_zero_shift_identity() {
        let mut input = (0..1000)
            .map(|i| Complex::new(i as f64 * 0.125, -(i as f64) * 0.25))
            .collect::<Vec<_>>();
        let src = input.to_vec();
        shift_f64(&mut input, 0.0, 0.0).unwrap();
        assert_eq!(input, src);
    }

    #[test]
    fn test_shifts_compose() {
        let size = 1000usize;
        let f1 = 0.31;
        let f2 = 0.47;
        let mut twice = (0..size)
            .map(|i| Complex::new((i + 1) as f64, (i + 1) as f64))
            .collect::<Vec<_>>();
        let mut once = twice.to_vec();

        shift_f64(&mut twice, f1, 0.2).unwrap();
        shift_f64(&mut twice, f2, 0.3).unwrap();
        shift_f64(&mut once, (f1 + f2) % 1.0, 0.5).unwrap();

        twice.iter().zip(once.iter()).for_each(|(a, b)| {
            assert!((a - b).norm() < 1e-9 * b.norm(), "a {} != b {}", a, b);
        });
    }

    #[test]
    fn test_factory_is_cached() {
        let a = Fshift::make_shifter_f32();
        let b = Fshift::make_shifter_f32();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
