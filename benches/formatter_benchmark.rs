use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stylelog::log::{tokenize, HtmlFormatter, LogFormatter, TextFormatter, TextFormatterConfig};
use stylelog::{log_args, style, Message};

fn benchmark_formatter(c: &mut Criterion) {
    let formatter_colored = TextFormatter::new(TextFormatterConfig { colored: true });
    let formatter_plain = TextFormatter::new(TextFormatterConfig { colored: false });
    let formatter_html = HtmlFormatter::new();

    // 基础消息
    let basic_message = Message::new(log_args!["This is a test message"]);

    // 带指令与前缀的消息
    let styled_message = Message::new(log_args![
        "Successfully read config file:",
        style!("@path"),
        "/etc/app/config.json",
        style!("_red white b"),
        42,
    ])
    .with_prefix(Some("cfg"));

    // 带对象的消息
    let object_message = Message::new(log_args![
        "request:",
        serde_json::json!({ "method": "GET", "path": "/index.html", "headers": { "accept": "*/*" } }),
    ]);

    // 长消息
    let long_message = Message::new(log_args!["A".repeat(1000)]);

    let mut group = c.benchmark_group("formatter");

    // Baseline: 什么都不做的基准测试
    group.bench_function("baseline", |b| {
        b.iter(|| {
            black_box(());
        })
    });

    let cases: [(&str, &Message); 4] = [
        ("basic", &basic_message),
        ("styled", &styled_message),
        ("object", &object_message),
        ("long_message", &long_message),
    ];

    for (name, message) in cases {
        group.bench_with_input(
            BenchmarkId::new("plain", name),
            message,
            |b, message: &Message| {
                b.iter(|| black_box(formatter_plain.format(black_box(message)).unwrap()))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("colored", name),
            message,
            |b, message: &Message| {
                b.iter(|| black_box(formatter_colored.format(black_box(message)).unwrap()))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("html", name),
            message,
            |b, message: &Message| {
                b.iter(|| black_box(formatter_html.format(black_box(message)).unwrap()))
            },
        );
    }

    group.finish();
}

fn benchmark_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    group.throughput(criterion::Throughput::Elements(1));

    for directives in [0usize, 1, 4, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(directives),
            &directives,
            |b, &directives| {
                b.iter(|| {
                    let mut args = log_args!["listening on"];
                    for i in 0..directives {
                        args.push(style!("@ip"));
                        args.push(i.into());
                    }
                    black_box(tokenize(black_box(args)))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_formatter, benchmark_tokenize);
criterion_main!(benches);
