use criterion::{black_box, criterion_group, criterion_main, Criterion};

use handpose_playback_core::{sample, Frame, Joint, Recording};

const JOINT_NAMES: [&str; 21] = [
    "wrist",
    "thumb_cmc",
    "thumb_mcp",
    "thumb_ip",
    "thumb_tip",
    "index_mcp",
    "index_pip",
    "index_dip",
    "index_tip",
    "middle_mcp",
    "middle_pip",
    "middle_dip",
    "middle_tip",
    "ring_mcp",
    "ring_pip",
    "ring_dip",
    "ring_tip",
    "pinky_mcp",
    "pinky_pip",
    "pinky_dip",
    "pinky_tip",
];

fn mk_recording(frame_count: usize) -> Recording {
    let frames = (0..frame_count)
        .map(|i| {
            let t = i as f32 / 60.0;
            let joints = JOINT_NAMES
                .iter()
                .enumerate()
                .map(|(k, name)| {
                    let phase = t + k as f32 * 0.1;
                    Joint::new(*name, phase.sin(), phase.cos(), k as f32 * 0.01)
                })
                .collect();
            Frame::new(t, joints)
        })
        .collect();
    Recording::new(frames)
}

fn bench_sample(c: &mut Criterion) {
    // 10s of a 21-joint hand at 60 Hz.
    let rec = mk_recording(600);
    let duration = rec.duration();

    c.bench_function("sample_mid_recording", |b| {
        b.iter(|| sample(black_box(&rec), black_box(duration * 0.37)))
    });

    c.bench_function("sample_sweep_64", |b| {
        b.iter(|| {
            for i in 0..64 {
                let t = duration * (i as f32 / 63.0);
                black_box(sample(black_box(&rec), t));
            }
        })
    });
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
