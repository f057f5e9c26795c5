//! Search and statistics benchmarks

use bookstore_core::{search, Book, BookId, Statistics};
use criterion::{criterion_group, criterion_main, Criterion};

fn inventory(size: usize) -> Vec<Book> {
    (0..size)
        .map(|i| Book {
            id: BookId::generate(),
            title: format!("Title {}", i),
            author: format!("Author {}", i % 97),
            year: 1900 + (i % 120) as i32,
            isbn: format!("978-0-{:06}-{:02}-{}", i, i % 100, i % 10),
            price: (i % 5000) as f64 / 100.0,
        })
        .collect()
}

fn search_benchmark(c: &mut Criterion) {
    let books = inventory(10_000);

    c.bench_function("search_10k_title", |b| {
        b.iter(|| search(std::hint::black_box(&books), "title 99"))
    });

    c.bench_function("search_10k_no_match", |b| {
        b.iter(|| search(std::hint::black_box(&books), "tolkien"))
    });

    c.bench_function("statistics_10k", |b| {
        b.iter(|| Statistics::from_books(std::hint::black_box(&books)))
    });
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
