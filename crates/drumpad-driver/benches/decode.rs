use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use drumpad_driver::{map_buttons, DeviceSession, RawReport};

fn build_frames() -> Vec<[u8; 20]> {
    // a don, a rim hit, its release, then idle
    [(0x0040u16, 0u8, 0u8), (0, 180, 0), (0, 0, 0), (0, 0, 0)]
        .into_iter()
        .map(|(buttons, left_hit, right_hit)| {
            RawReport {
                buttons,
                left_hit,
                right_hit,
                ..RawReport::idle()
            }
            .to_bytes()
        })
        .collect()
}

pub fn bench_decode_path(c: &mut Criterion) {
    let frames = build_frames();
    let mut session = DeviceSession::new();

    c.bench_function("decode_and_apply_report", |b| {
        b.iter(|| {
            for frame in &frames {
                if let Some(report) = RawReport::parse(black_box(frame)) {
                    black_box(session.apply(&report));
                }
            }
        })
    });

    c.bench_function("map_buttons_all_set", |b| {
        b.iter(|| black_box(map_buttons(black_box(0xffff))))
    });
}

criterion_group!(benches, bench_decode_path);
criterion_main!(benches);
