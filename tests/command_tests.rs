use mood_stamps::aggregator::ReactionPolicy;
use mood_stamps::commands::{execute_aggregate, validate_args, AggregateArgs};
use mood_stamps::output::{read_report, validate_report};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const STAMPS: &str = r#"{
  "result": {
    "data": [
      { "id": "1", "type": "love", "native": "🥰", "anonymousId": "user1" },
      { "id": "2", "type": "love", "native": "🥰", "anonymousId": "user1" },
      { "id": "3", "type": "shock", "native": "😱", "anonymousId": "user2" }
    ]
  }
}"#;

fn stamp_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(STAMPS.as_bytes()).unwrap();
    file
}

#[test]
fn test_validate_args_with_input() {
    let args = AggregateArgs {
        input: Some(PathBuf::from("stamps.json")),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_with_url() {
    let args = AggregateArgs {
        url: Some("https://example.com/api/posts/1/stamps".to_string()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_no_source() {
    assert!(validate_args(&AggregateArgs::default()).is_err());
}

#[test]
fn test_validate_args_invalid_url_scheme() {
    let args = AggregateArgs {
        url: Some("ftp://example.com/stamps".to_string()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_blank_post_id() {
    let args = AggregateArgs {
        input: Some(PathBuf::from("stamps.json")),
        post_id: Some("  ".to_string()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_top_zero() {
    let args = AggregateArgs {
        input: Some(PathBuf::from("stamps.json")),
        top_groups: 0,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_top_too_large() {
    let args = AggregateArgs {
        input: Some(PathBuf::from("stamps.json")),
        top_groups: 2000,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_aggregate_from_file() {
    let input = stamp_file();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("report.json");

    let args = AggregateArgs {
        input: Some(input.path().to_path_buf()),
        post_id: Some("post-1".to_string()),
        output_json: output.clone(),
        print_summary: true,
        ..Default::default()
    };

    let report = execute_aggregate(args).unwrap();

    assert_eq!(report.total_stamps, 3);
    assert_eq!(report.distinct_reactors, 2);
    assert_eq!(report.groups.len(), 2);
    assert_eq!(report.groups[0].count, 2);

    let loaded = read_report(&output).unwrap();
    assert_eq!(loaded, report);
    assert!(validate_report(&loaded).is_ok());
}

#[test]
fn test_execute_aggregate_with_policy() {
    let input = stamp_file();
    let out_dir = tempfile::tempdir().unwrap();

    let args = AggregateArgs {
        input: Some(input.path().to_path_buf()),
        output_json: out_dir.path().join("report.json"),
        policy: ReactionPolicy::OnePerReactorPerKind,
        ..Default::default()
    };

    let report = execute_aggregate(args).unwrap();

    assert_eq!(report.policy, "one-per-reactor-per-kind");
    assert_eq!(report.total_stamps, 2);
    assert_eq!(report.groups[0].count, 1);
}

#[test]
fn test_execute_aggregate_missing_catalog() {
    let input = stamp_file();
    let out_dir = tempfile::tempdir().unwrap();

    let args = AggregateArgs {
        input: Some(input.path().to_path_buf()),
        output_json: out_dir.path().join("report.json"),
        catalog: Some(out_dir.path().join("missing.toml")),
        ..Default::default()
    };

    assert!(execute_aggregate(args).is_err());
}

#[test]
fn test_execute_aggregate_missing_input() {
    let out_dir = tempfile::tempdir().unwrap();

    let args = AggregateArgs {
        input: Some(out_dir.path().join("missing.json")),
        output_json: out_dir.path().join("report.json"),
        ..Default::default()
    };

    assert!(execute_aggregate(args).is_err());
}
