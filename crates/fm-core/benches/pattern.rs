use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fm_core::PatternCompiler;

const PATTERNS: &[&str] = &[
    "h ads.example.com",
    "||tracker.example.net/pixel?id=#",
    "banner_*_728x90.jpg",
    "a\\*b\\?c\\\\d",
    "video/+/preroll.?",
    "https?://cdn.example.org/(a|b)/{1}.js",
];

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_compile");

    group.bench_function("reused_compiler", |b| {
        let mut compiler = PatternCompiler::new();
        b.iter(|| {
            for pattern in PATTERNS {
                black_box(compiler.compile(black_box(pattern)));
            }
        });
    });

    group.bench_function("fresh_compiler", |b| {
        b.iter(|| {
            for pattern in PATTERNS {
                black_box(PatternCompiler::new().compile(black_box(pattern)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
