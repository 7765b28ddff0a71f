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
use criterion::{Criterion, criterion_group, criterion_main};
use fshift::{Fshift, ScalarShift, ShiftExecutor};
use num_complex::Complex;
use std::f64::consts::PI;
use std::hint::black_box;

fn naive_shift_f64(data: &mut [Complex<f64>], freq: f64, start_phase: f64) {
    for (i, z) in data.iter_mut().enumerate() {
        let (t_sin, t_cos) = (2.0 * PI * freq * i as f64 + start_phase).sin_cos();
        *z = *z * Complex::new(t_cos, t_sin);
    }
}

fn naive_shift_f32(data: &mut [Complex<f32>], freq: f64, start_phase: f64) {
    for (i, z) in data.iter_mut().enumerate() {
        let (t_sin, t_cos) = (2.0 * PI * freq * i as f64 + start_phase).sin_cos();
        *z = *z * Complex::new(t_cos as f32, t_sin as f32);
    }
}

pub fn bench_shift_f64(c: &mut Criterion) {
    let src = (0..100_000)
        .map(|i| Complex::new((i + 1) as f64, (i + 1) as f64))
        .collect::<Vec<_>>();

    c.bench_function("naive f64 100k", |b| {
        let mut data = src.to_vec();
        b.iter(|| naive_shift_f64(black_box(&mut data), 1e-9, 0.1));
    });

    c.bench_function("scalar unroll 1 f64 100k", |b| {
        let shifter = ScalarShift::<f64, f64, 1>::new();
        let mut data = src.to_vec();
        b.iter(|| shifter.shift(black_box(&mut data), 1e-9, 0.1).unwrap());
    });

    c.bench_function("scalar unroll 4 f64 100k", |b| {
        let shifter = ScalarShift::<f64, f64, 4>::new();
        let mut data = src.to_vec();
        b.iter(|| shifter.shift(black_box(&mut data), 1e-9, 0.1).unwrap());
    });

    c.bench_function("dispatched f64 100k", |b| {
        let shifter = Fshift::make_shifter_f64();
        let mut data = src.to_vec();
        b.iter(|| shifter.shift(black_box(&mut data), 1e-9, 0.1).unwrap());
    });
}

pub fn bench_shift_f32(c: &mut Criterion) {
    let src = (0..100_000)
        .map(|i| Complex::new((i + 1) as f32, (i + 1) as f32))
        .collect::<Vec<_>>();

    c.bench_function("naive f32 100k", |b| {
        let mut data = src.to_vec();
        b.iter(|| naive_shift_f32(black_box(&mut data), 1e-9, 0.1));
    });

    c.bench_function("scalar unroll 4 f32 100k", |b| {
        let shifter = ScalarShift::<f32, f64, 4>::new();
        let mut data = src.to_vec();
        b.iter(|| shifter.shift(black_box(&mut data), 1e-9, 0.1).unwrap());
    });

    c.bench_function("dispatched f32 100k", |b| {
        let shifter = Fshift::make_shifter_f32();
        let mut data = src.to_vec();
        b.iter(|| shifter.shift(black_box(&mut data), 1e-9, 0.1).unwrap());
    });
}

criterion_group!(benches, bench_shift_f64, bench_shift_f32);
criterion_main!(benches);
