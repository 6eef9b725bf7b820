use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use micro_tuner::spectrum::{harmonic_product_spectrum, SpectralFrontEnd};
use micro_tuner::{FrameLength, Tuner, TunerConfig};

fn generate_tone(config: &TunerConfig, frequency: f32) -> Vec<f32> {
    let sample_rate = config.capture_rate as f32;
    (0..config.raw_frame_len())
        .map(|i| {
            let t = i as f32 / sample_rate;
            (1..=4)
                .map(|k| 8000.0 / k as f32 * (2.0 * std::f32::consts::PI * k as f32 * frequency * t).sin())
                .sum::<f32>()
        })
        .collect()
}

fn run_front_end_benchmark(id: &str, c: &mut Criterion, frame_length: FrameLength, oversampling_factor: usize) {
    let config = TunerConfig {
        frame_length,
        oversampling_factor,
        ..TunerConfig::default()
    };
    let mut front_end = SpectralFrontEnd::new(frame_length, oversampling_factor);
    let input = generate_tone(&config, 110.0);

    c.bench_function(id, |b| {
        b.iter_batched(
            || input.clone(),
            |mut frame| {
                front_end.process(black_box(&mut frame[..]));
            },
            BatchSize::LargeInput,
        )
    });
}
fn front_end_benchmarks(c: &mut Criterion) {
    run_front_end_benchmark("Front end, frame 1024, oversampling 4", c, FrameLength::Len1024, 4);
    run_front_end_benchmark("Front end, frame 2048, oversampling 4", c, FrameLength::Len2048, 4);
    run_front_end_benchmark("Front end, frame 4096, oversampling 1", c, FrameLength::Len4096, 1);
    run_front_end_benchmark("Front end, frame 4096, oversampling 2", c, FrameLength::Len4096, 2);
    run_front_end_benchmark("Front end, frame 4096, oversampling 4", c, FrameLength::Len4096, 4);
}

fn hps_benchmarks(c: &mut Criterion) {
    let config = TunerConfig::default();
    let mut front_end = SpectralFrontEnd::new(config.frame_length, config.oversampling_factor);
    let mut frame = generate_tone(&config, 110.0);
    let magnitudes = front_end.process(&mut frame[..]).to_vec();

    c.bench_function("HPS, 2048 bins", |b| {
        b.iter_batched(
            || magnitudes.clone(),
            |mut magnitudes| {
                harmonic_product_spectrum(black_box(&mut magnitudes[..]), 55, config.harmonic_floor);
            },
            BatchSize::SmallInput,
        )
    });
}

fn tuner_benchmarks(c: &mut Criterion) {
    let config = TunerConfig::default();
    let mut tuner = Tuner::from_config(config).unwrap();
    let input = generate_tone(&config, 110.0);

    c.bench_function("Tuner, default config", |b| {
        b.iter_batched(
            || input.clone(),
            |mut frame| tuner.process_frame(black_box(&mut frame[..])),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, front_end_benchmarks, hps_benchmarks, tuner_benchmarks);
criterion_main!(benches);
