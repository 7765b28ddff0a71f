#![no_main]

use fshift::{Fshift, ShiftExecutor};
use libfuzzer_sys::fuzz_target;
use num_complex::Complex;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    size: u16,
    freq: u16,
    phase: f32,
    re: f32,
    im: f32,
}

fuzz_target!(|data: Target| {
    if data.size == 0
        || !data.phase.is_finite()
        || !data.re.is_finite()
        || !data.im.is_finite()
        || data.re.abs() > 1e30
        || data.im.abs() > 1e30
    {
        return;
    }
    let freq = data.freq as f64 / 65536.0;
    let phase = data.phase as f64;

    let shifter = Fshift::make_shifter_f32();
    let mut chunk = vec![Complex::new(data.re, data.im); data.size as usize];
    shifter.shift(&mut chunk, freq, phase).unwrap();
    // Undo with the complementary frequency; tones stay unit magnitude so
    // nothing may blow up.
    shifter.shift(&mut chunk, (1.0 - freq) % 1.0, -phase).unwrap();
    for z in chunk.iter() {
        assert!(z.re.is_finite() && z.im.is_finite());
    }

    let shifter = Fshift::make_shifter_f64();
    let mut chunk = vec![Complex::new(data.re as f64, data.im as f64); data.size as usize];
    shifter.shift(&mut chunk, freq, phase).unwrap();
    shifter.shift(&mut chunk, (1.0 - freq) % 1.0, -phase).unwrap();
    for z in chunk.iter() {
        assert!(z.re.is_finite() && z.im.is_finite());
    }
});
