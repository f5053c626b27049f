//! Criterion benchmarks for the Textcat library.
//!
//! Covers the two hot paths: document vectorization and classifier
//! fit/predict.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use textcat::analysis::StopFilter;
use textcat::classify::{Estimator, NaiveBayes, NaiveBayesConfig, Spode, SpodeConfig};
use textcat::vectorize::{CountVectorizer, TfidfVectorizer};

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> (Vec<String>, Vec<i64>) {
    let positive = [
        "good", "great", "excellent", "quality", "value", "works", "fast", "reliable",
    ];
    let negative = [
        "bad", "terrible", "poor", "broken", "slow", "useless", "faulty", "noisy",
    ];
    let neutral = [
        "product", "service", "order", "delivery", "price", "support", "item", "store",
    ];

    let mut documents = Vec::with_capacity(count);
    let mut labels = Vec::with_capacity(count);
    for i in 0..count {
        let sentiment = if i % 2 == 0 { &positive } else { &negative };
        let doc_length = 10 + (i % 20);
        let mut words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            if j % 2 == 0 {
                words.push(sentiment[(i + j) % sentiment.len()]);
            } else {
                words.push(neutral[(i * 3 + j) % neutral.len()]);
            }
        }
        documents.push(words.join(" "));
        labels.push((i % 2 == 0) as i64);
    }
    (documents, labels)
}

fn bench_vectorizers(c: &mut Criterion) {
    let (documents, _) = generate_test_documents(500);

    let mut group = c.benchmark_group("vectorize");
    group.throughput(Throughput::Elements(documents.len() as u64));

    group.bench_function("count_fit_transform", |b| {
        b.iter(|| {
            let mut vectorizer = CountVectorizer::new(StopFilter::empty());
            black_box(vectorizer.fit_transform(black_box(&documents)).unwrap())
        })
    });

    group.bench_function("tfidf_fit_transform", |b| {
        b.iter(|| {
            let mut vectorizer = TfidfVectorizer::new(StopFilter::empty());
            black_box(vectorizer.fit_transform(black_box(&documents)).unwrap())
        })
    });

    group.finish();
}

fn bench_classifiers(c: &mut Criterion) {
    let (documents, labels) = generate_test_documents(500);
    let mut vectorizer = CountVectorizer::new(StopFilter::empty());
    let x = vectorizer.fit_transform(&documents).unwrap();

    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(x.rows() as u64));

    group.bench_function("naive_bayes_fit", |b| {
        b.iter(|| {
            let mut model = NaiveBayes::new(NaiveBayesConfig::default()).unwrap();
            model.fit(black_box(&x), black_box(&labels)).unwrap();
            black_box(model)
        })
    });

    group.bench_function("spode_fit", |b| {
        b.iter(|| {
            let mut model = Spode::new(SpodeConfig::default()).unwrap();
            model.fit(black_box(&x), black_box(&labels)).unwrap();
            black_box(model)
        })
    });

    let mut fitted = NaiveBayes::new(NaiveBayesConfig::default()).unwrap();
    fitted.fit(&x, &labels).unwrap();
    group.bench_function("naive_bayes_predict", |b| {
        b.iter(|| black_box(fitted.predict(black_box(&x)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_vectorizers, bench_classifiers);
criterion_main!(benches);
