//! Benchmarks for the sound-effect voices and their building blocks.
//!
//! Run with: cargo bench
//!
//! Every voice is built on the UI thread and rendered inside the audio
//! callback, so two costs matter: how expensive a fresh build is, and
//! how expensive a block render is against the callback deadline.
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use pling_sfx::dsp::curve::Curve;
use pling_sfx::engine::{MessageReceiver, SfxMessage, SfxMixer};
use pling_sfx::voices::{self, SoundKind};

const SAMPLE_RATE: f32 = 48_000.0;

/// Common buffer sizes used in audio applications.
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

fn bench_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/curve");

    // The hover gain shape: step, linear ramp, exponential ramp
    let curve = Curve::new(0.0)
        .linear_to(0.3, 0.03)
        .exp_to(0.001, 0.12);

    group.bench_function("value_at", |b| {
        let mut t = 0.0f32;
        b.iter(|| {
            t = (t + 1.0 / SAMPLE_RATE) % 0.12;
            black_box(curve.value_at(black_box(t)))
        })
    });

    group.finish();
}

fn bench_voice_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("voices/build");

    for kind in SoundKind::ALL {
        group.bench_function(format!("{:?}", kind), |b| {
            b.iter(|| {
                black_box(voices::build(
                    black_box(kind),
                    kind.default_volume(),
                    SAMPLE_RATE,
                ))
            })
        });
    }

    group.finish();
}

fn bench_voice_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("voices/render");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for kind in SoundKind::ALL {
            // A fresh voice per iteration so the measurement stays in the
            // sounding region instead of the silent tail.
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", kind), size),
                &size,
                |b, _| {
                    b.iter_batched_ref(
                        || voices::build(kind, kind.default_volume(), SAMPLE_RATE),
                        |voice| {
                            voice.render_block(black_box(&mut buffer), black_box(SAMPLE_RATE))
                        },
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }

    group.finish();
}

/// A pre-filled inbox the mixer drains on its first block.
struct Inbox(Vec<SfxMessage>);

impl MessageReceiver for Inbox {
    fn pop(&mut self) -> Option<SfxMessage> {
        self.0.pop()
    }
}

fn bench_mixer(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/mixer");

    // Worst case: the pool full of the longest-lived voice. A fresh mixer
    // per iteration keeps voices from finishing mid-measurement.
    let full_mixer = || {
        let plays = (0..16)
            .map(|_| {
                SfxMessage::Play(voices::build(
                    SoundKind::Ambient,
                    SoundKind::Ambient.default_volume(),
                    SAMPLE_RATE,
                ))
            })
            .collect();
        SfxMixer::new(Inbox(plays))
    };

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("full_pool", size), &size, |b, _| {
            b.iter_batched_ref(
                full_mixer,
                |mixer| mixer.render_block(black_box(&mut buffer), black_box(SAMPLE_RATE)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_curve,
    bench_voice_build,
    bench_voice_render,
    bench_mixer,
);
criterion_main!(benches);
