#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: packed_url vs url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use packed_url::Url;

// Rust url crate
use url::Url as UrlCrate;

/// Mixed inputs that both parsers accept
const CORPUS: &[&str] = &[
    "http://example.com/",
    "https://www.google.com/search?q=rust+url+parser&hl=en",
    "https://en.wikipedia.org/wiki/Uniform_Resource_Identifier#Syntax",
    "https://github.com/rust-lang/rust/issues?q=is%3Aopen+label%3AC-bug",
    "https://alihudson@taylorswift.com:1989/events/past%20tours/?new-user=true#dates",
    "ftp://ftp.example.org/pub/files/archive.tar.gz",
    "http://192.168.1.1:3000/api/v1/status",
    "http://[2001:db8::1]:8080/path",
    "https://docs.rs/percent-encoding/latest/percent_encoding/",
    "https://cdn.example.net/assets/img/logo.png?v=20240101",
];

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");
    let input = "http://example.com/";

    group.bench_function("packed_url", |b| {
        b.iter(|| Url::parse(black_box(input)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_parse_complex_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_complex");
    let input =
        "https://user@secure.example.com:8080/path/to/past%20tours/?query=value&key=data#section";

    group.bench_function("packed_url", |b| {
        b.iter(|| Url::parse(black_box(input)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_parse_ipv4_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_ipv4");
    let input = "http://192.168.1.1:3000/api";

    group.bench_function("packed_url", |b| {
        b.iter(|| Url::parse(black_box(input)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_parse_ipv6_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_ipv6");
    let input = "http://[CA:FE::BABE:13.22.189.15]:1989/path";

    group.bench_function("packed_url", |b| {
        b.iter(|| Url::parse(black_box(input)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_getters_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("getters");
    let input = "https://user@example.com:8080/past%20tours/list?query=value#hash";

    let packed = Url::parse(input).unwrap();
    let url_crate_url = UrlCrate::parse(input).unwrap();

    // decoding happens here, on read
    group.bench_function("packed_url", |b| {
        b.iter(|| {
            black_box(packed.scheme());
            black_box(packed.user());
            black_box(packed.host());
            black_box(packed.port());
            black_box(packed.path_segments());
            black_box(packed.query());
            black_box(packed.fragment());
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            black_box(url_crate_url.scheme());
            black_box(url_crate_url.username());
            black_box(url_crate_url.host());
            black_box(url_crate_url.port());
            black_box(url_crate_url.path_segments().map(Iterator::count));
            black_box(url_crate_url.query());
            black_box(url_crate_url.fragment());
        });
    });

    group.finish();
}

fn bench_relative_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_relative");
    let input = "/relative/path?query=1";
    let base = "http://example.com/base/";

    // relative references stand alone here; the url crate needs a base
    group.bench_function("packed_url", |b| {
        b.iter(|| Url::parse(black_box(input)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            let base_url = UrlCrate::parse(base).unwrap();
            base_url.join(black_box(input)).unwrap()
        });
    });

    group.finish();
}

fn bench_parse_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_corpus");

    group.bench_function("packed_url", |b| {
        b.iter(|| {
            for url in CORPUS {
                let _ = Url::parse(black_box(url));
            }
        });
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            for url in CORPUS {
                let _ = UrlCrate::parse(black_box(url));
            }
        });
    });

    group.finish();
}

fn bench_can_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("can_parse");

    let valid_simple = "http://example.com/";
    let valid_complex =
        "https://user@secure.example.com:8080/path/to/resource?query=value&key=data#section";

    let invalid_simple = "not a url";
    let invalid_escape = "http://example.com/50%2";

    group.bench_function("valid_simple", |b| {
        b.iter(|| Url::can_parse(black_box(valid_simple)));
    });

    group.bench_function("valid_complex", |b| {
        b.iter(|| Url::can_parse(black_box(valid_complex)));
    });

    group.bench_function("invalid_simple", |b| {
        b.iter(|| Url::can_parse(black_box(invalid_simple)));
    });

    group.bench_function("invalid_escape", |b| {
        b.iter(|| Url::can_parse(black_box(invalid_escape)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_complex_all,
    bench_parse_ipv4_all,
    bench_parse_ipv6_all,
    bench_getters_all,
    bench_relative_all,
    bench_parse_corpus,
    bench_can_parse
);

criterion_main!(benches);
