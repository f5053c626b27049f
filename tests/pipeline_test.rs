//! Integration tests for the full vectorize -> search -> predict pipeline.

use textcat::analysis::StopFilter;
use textcat::classify::{Estimator, NaiveBayes, NaiveBayesConfig, ParamValue, Spode};
use textcat::error::Result;
use textcat::search::{GridSearchCV, HalvingGridSearchCV, ParamGrid, accuracy};
use textcat::vectorize::{CountVectorizer, TfidfConfig, TfidfVectorizer};

fn docs(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

/// A synthetic two-class corpus with interleaved labels.
fn review_corpus(count: usize) -> (Vec<String>, Vec<i64>) {
    let positive = [
        "good product works great",
        "great service very good",
        "excellent quality good value",
        "great product excellent service",
    ];
    let negative = [
        "bad product broke fast",
        "terrible service very bad",
        "poor quality bad value",
        "terrible product poor service",
    ];

    let mut documents = Vec::with_capacity(count);
    let mut labels = Vec::with_capacity(count);
    for i in 0..count {
        if i % 2 == 0 {
            documents.push(positive[i % positive.len()].to_string());
            labels.push(1);
        } else {
            documents.push(negative[i % negative.len()].to_string());
            labels.push(0);
        }
    }
    (documents, labels)
}

#[test]
fn test_count_vectorizer_naive_bayes_scenario() -> Result<()> {
    let documents = docs(&["good product", "bad product", "good service"]);
    let labels = vec![1i64, 0, 1];

    let mut vectorizer = CountVectorizer::new(StopFilter::empty());
    let x_train = vectorizer.fit_transform(&documents)?;

    let mut model = NaiveBayes::new(NaiveBayesConfig { alpha: 1.0 })?;
    model.fit(&x_train, &labels)?;

    let x_test = vectorizer.transform(&docs(&["good product"]))?;
    for _ in 0..3 {
        assert_eq!(model.predict(&x_test)?, vec![1]);
    }

    Ok(())
}

#[test]
fn test_grid_search_over_count_features() -> Result<()> {
    let (documents, labels) = review_corpus(12);

    let mut vectorizer = CountVectorizer::new(StopFilter::from_words(vec!["very"]));
    let x_train = vectorizer.fit_transform(&documents)?;

    let grid = ParamGrid::new().add(
        "alpha",
        vec![ParamValue::Float(0.3), ParamValue::Float(0.5)],
    );
    let mut search: GridSearchCV<NaiveBayes<i64>, i64> = GridSearchCV::new(grid, 3)?;
    search.fit(&x_train, &labels)?;

    let best = search.best_result().expect("search was fitted");
    assert!(best.score > 0.5, "score was {}", best.score);

    // Refit with the winning parameters and classify held-out text.
    let mut model = NaiveBayes::with_params(&best.params)?;
    model.fit(&x_train, &labels)?;

    let x_test = vectorizer.transform(&docs(&["good excellent product", "bad terrible product"]))?;
    let predicted = model.predict(&x_test)?;
    assert_eq!(predicted, vec![1, 0]);

    Ok(())
}

#[test]
fn test_tfidf_spode_pipeline() -> Result<()> {
    let (documents, labels) = review_corpus(16);

    let config = TfidfConfig {
        max_df: 0.9,
        min_df: 0.0,
    };
    let mut vectorizer = TfidfVectorizer::with_config(StopFilter::empty(), config)?;
    let x_train = vectorizer.fit_transform(&documents)?;

    let grid = ParamGrid::new()
        .add(
            "alpha",
            vec![ParamValue::Float(0.1), ParamValue::Float(0.3)],
        )
        .add("buckets", vec![ParamValue::Int(1), ParamValue::Int(2)]);
    let mut search: GridSearchCV<Spode<i64>, i64> = GridSearchCV::new(grid, 4)?;
    search.fit(&x_train, &labels)?;

    let best = search.best_result().expect("search was fitted");
    let mut model = Spode::with_params(&best.params)?;
    model.fit(&x_train, &labels)?;

    let predicted = model.predict(&x_train)?;
    assert!(accuracy(&labels, &predicted) > 0.9);

    Ok(())
}

#[test]
fn test_halving_search_end_to_end() -> Result<()> {
    let (documents, labels) = review_corpus(32);

    let mut vectorizer = CountVectorizer::new(StopFilter::empty());
    let x_train = vectorizer.fit_transform(&documents)?;

    let grid = ParamGrid::new().add(
        "alpha",
        vec![
            ParamValue::Float(0.1),
            ParamValue::Float(0.3),
            ParamValue::Float(0.5),
            ParamValue::Float(1.0),
        ],
    );
    let candidates = grid.candidates();

    let mut search: HalvingGridSearchCV<NaiveBayes<i64>, i64> =
        HalvingGridSearchCV::new(grid, 2)?;
    search.fit(&x_train, &labels)?;
    assert!(search.is_fitted());

    let best = search.best_result().expect("fit names a winner");
    assert!(candidates.contains(&best.params));

    let mut model = NaiveBayes::with_params(&best.params)?;
    model.fit(&x_train, &labels)?;
    let predicted = model.predict(&x_train)?;
    assert!(accuracy(&labels, &predicted) > 0.9);

    Ok(())
}

#[test]
fn test_stop_words_thread_through_pipeline() -> Result<()> {
    let stop = StopFilter::from_words(vec!["the", "a", "is"]);
    let documents = docs(&["the product is a good one", "the service is a bad one"]);

    let mut vectorizer = CountVectorizer::new(stop);
    let x = vectorizer.fit_transform(&documents)?;

    // "the", "a", "is" never reach the vocabulary.
    assert!(vectorizer.vocabulary().get("the").is_none());
    assert!(vectorizer.vocabulary().get("is").is_none());
    assert_eq!(x.rows(), 2);

    // A stop-word-only document maps to an all-zero row without error.
    let zero = vectorizer.transform(&docs(&["the a is the"]))?;
    assert!(zero.row(0).iter().all(|&v| v == 0.0));

    Ok(())
}
