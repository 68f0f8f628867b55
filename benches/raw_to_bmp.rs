use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use raw2bmp::image_pipeline::{
    raw::unpack, CfaPattern, ConversionConfig, EdgePolicy, MissingBytePolicy, NearestDebayer, RawFrame,
    RawToBmpPipeline, SamplePlane,
};
use std::io::Cursor;

fn generate_packed_frame(width: usize, height: usize, bit_depth: u32) -> Vec<u8> {
    let len = (width * height * bit_depth as usize).div_ceil(8);
    (0..len).map(|i| (i * 37 % 256) as u8).collect()
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (640, 480, "640x480"),
        (1920, 1080, "1920x1080"),
    ];

    for (width, height, label) in sizes {
        let packed = generate_packed_frame(width, height, 10);

        group.bench_with_input(BenchmarkId::from_parameter(label), &packed, |b, data| {
            let config = ConversionConfig::builder().width(width).height(height).build();
            let pipeline = RawToBmpPipeline::new(config);

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(&mut Cursor::new(black_box(data)), &mut output);
            });
        });
    }

    group.finish();
}

fn benchmark_unpack_depths(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack_by_depth");

    for bit_depth in [8u32, 10, 12] {
        let frame = RawFrame {
            width: 640,
            height: 480,
            bit_depth,
            data: generate_packed_frame(640, 480, bit_depth),
        };

        group.bench_with_input(BenchmarkId::from_parameter(bit_depth), &frame, |b, frame| {
            b.iter(|| unpack(black_box(frame), MissingBytePolicy::ZeroFill));
        });
    }

    group.finish();
}

fn benchmark_edge_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("debayer_edge_policy");
    let plane = SamplePlane {
        width: 640,
        height: 480,
        data: vec![128; 640 * 480],
    };

    group.bench_function("replicate", |b| {
        let debayer = NearestDebayer::new(CfaPattern::Bggr, EdgePolicy::Replicate);
        b.iter(|| debayer.process(black_box(&plane)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_conversion_sizes,
    benchmark_unpack_depths,
    benchmark_edge_policy
);
criterion_main!(benches);
