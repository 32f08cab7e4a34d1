//! End-to-end benchmark runs over CSV fixtures

use sortbench::{
    BenchmarkConfig, BenchmarkRunner, Config, ContainerKind, RatingField, RatingsReader,
    ReaderConfig, SortAlgorithm, SortBenchError,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn ratings_fixture(rows: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "userId,movieId,rating,timestamp").unwrap();
    for i in 0..rows {
        let rating = ((i * 37) % 10 + 1) as f64 / 2.0;
        writeln!(file, "{},{},{:.1},{}", i / 20 + 1, (i * 13) % 500, rating, 1_100_000_000 + i).unwrap();
    }
    file.flush().unwrap();
    file
}

fn config_for(file: &NamedTempFile, volumes: Vec<usize>) -> BenchmarkConfig {
    BenchmarkConfig {
        input_path: file.path().to_path_buf(),
        volumes,
        repetitions: 2,
        ..BenchmarkConfig::default()
    }
}

#[test]
fn test_full_run_over_all_kinds() {
    let file = ratings_fixture(300);
    let mut runner = BenchmarkRunner::new(config_for(&file, vec![50, 300])).unwrap();
    let report = runner.run().unwrap();

    assert_eq!(report.summaries().len(), 2 * ContainerKind::ALL.len());
    assert!(report.summaries().iter().all(|s| s.verified == Some(true)));
    assert_eq!(report.for_volume(50).count(), 6);
    assert_eq!(report.for_volume(300).count(), 6);
    assert!(report.fastest(300).is_some());
    assert_eq!(report.input(), Some(file.path().display().to_string().as_str()));

    let table = report.to_string();
    for kind in ContainerKind::ALL {
        assert!(table.contains(kind.name()));
    }
}

#[test]
fn test_linear_memory_reflects_headroom() {
    let file = ratings_fixture(100);
    let mut config = config_for(&file, vec![100]);
    config.kinds = vec![ContainerKind::LinearList];
    config.repetitions = 1;

    let mut runner = BenchmarkRunner::new(config).unwrap();
    let report = runner.run().unwrap();
    let pass = &report.summaries()[0].passes[0];
    assert!(pass.memory.container >= 200 * std::mem::size_of::<u32>());
}

#[test]
fn test_movie_ids_with_radix_sort() {
    let file = ratings_fixture(200);
    let mut config = config_for(&file, vec![200]);
    config.algorithm = SortAlgorithm::Radix;
    config.reader.field = RatingField::MovieId;

    let report = BenchmarkRunner::new(config).unwrap().run().unwrap();
    assert_eq!(report.algorithm(), "radix");
    assert!(report.summaries().iter().all(|s| s.verified == Some(true)));
}

#[test]
fn test_timestamps_exceed_counting_domain() {
    let file = ratings_fixture(20);
    let mut config = config_for(&file, vec![20]);
    config.reader.field = RatingField::Timestamp;

    let result = BenchmarkRunner::new(config).unwrap().run();
    assert!(matches!(result, Err(SortBenchError::DomainTooLarge { .. })));
}

#[test]
fn test_missing_input_is_io_error() {
    let config = BenchmarkConfig {
        input_path: "/nonexistent/ratings.csv".into(),
        volumes: vec![10],
        ..BenchmarkConfig::default()
    };
    let result = BenchmarkRunner::new(config).unwrap().run();
    assert!(matches!(result, Err(SortBenchError::Io(_))));
}

#[test]
fn test_reader_limit_and_populate_path() {
    let file = ratings_fixture(50);
    let reader = RatingsReader::new(ReaderConfig { limit: Some(10), ..ReaderConfig::default() }).unwrap();
    let values = reader.read_path(file.path()).unwrap();
    assert_eq!(values.len(), 10);
    assert!(values.iter().all(|&v| (1..=10).contains(&v)));

    let mut container = ContainerKind::LinearStack.create(10).unwrap();
    let summary = reader.populate_path(file.path(), container.as_mut()).unwrap();
    assert_eq!(summary.accepted, 10);
    assert_eq!(container.to_sequence(), values);
}

#[test]
fn test_config_file_drives_runner() {
    let file = ratings_fixture(40);
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("bench.json");

    let config = BenchmarkConfig {
        kinds: vec![ContainerKind::LinearQueue, ContainerKind::DynamicQueue],
        ..config_for(&file, vec![40])
    };
    config.save_to_file(&config_path).unwrap();

    let loaded = BenchmarkConfig::load_from_file(&config_path).unwrap();
    assert_eq!(loaded, config);

    let report = BenchmarkRunner::new(loaded).unwrap().run().unwrap();
    assert_eq!(report.summaries().len(), 2);

    let json_path = dir.path().join("report.json");
    report.save_json(&json_path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["summaries"][0]["kind"], "linear-queue");
    assert_eq!(json["summaries"][1]["repetitions"], 2);
}
