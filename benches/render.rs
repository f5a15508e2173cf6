use criterion::{Criterion, black_box, criterion_group, criterion_main};
use totuzen::{display_width, render_art, sanitize_message};

fn render_short_ascii(c: &mut Criterion) {
    c.bench_function("render_short_ascii", |b| {
        b.iter(|| render_art(black_box("hello world"), black_box(40)))
    });
}

fn render_wide_cjk(c: &mut Criterion) {
    let message = "突然の死".repeat(8);
    c.bench_function("render_wide_cjk", |b| {
        b.iter(|| render_art(black_box(&message), black_box(40)))
    });
}

fn render_truncated_mentions(c: &mut Criterion) {
    let message = "ping @everyone and @here ".repeat(16);
    c.bench_function("render_truncated_mentions", |b| {
        b.iter(|| render_art(black_box(&message), black_box(40)))
    });
}

fn measure_mixed_width(c: &mut Criterion) {
    let text = "abc あいう ＡＢＣ　@everyone".repeat(32);
    c.bench_function("measure_mixed_width", |b| {
        b.iter(|| display_width(black_box(&text)))
    });
}

fn sanitize_mention_heavy(c: &mut Criterion) {
    let text = "a@b @everyone c@d @here ".repeat(32);
    c.bench_function("sanitize_mention_heavy", |b| {
        b.iter(|| sanitize_message(black_box(&text)))
    });
}

criterion_group!(
    benches,
    render_short_ascii,
    render_wide_cjk,
    render_truncated_mentions,
    measure_mixed_width,
    sanitize_mention_heavy
);
criterion_main!(benches);
