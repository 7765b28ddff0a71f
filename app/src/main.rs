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
use fshift::{Fshift, ShiftExecutor};
use num_complex::Complex;
use std::time::Instant;

fn main() {
    // Shift a small ramp and print it.
    let mut v = (0..4)
        .map(|i| Complex::new(i as f32, i as f32))
        .collect::<Vec<_>>();
    let shifter = Fshift::make_shifter_f32();
    shifter.shift(&mut v, 0.2, 0.0).unwrap();
    for z in v.iter() {
        println!("{} {}", z.re, z.im);
    }

    // Timing sample on a longer buffer.
    let mut long = (0..10_000_000)
        .map(|i| Complex::new((i + 1) as f64, (i + 1) as f64))
        .collect::<Vec<_>>();
    let shifter = Fshift::make_shifter_f64();
    let start = Instant::now();
    shifter.shift(&mut long, 1e-9, 0.1).unwrap();
    println!("shifted {} samples in {:?}", long.len(), start.elapsed());
}
