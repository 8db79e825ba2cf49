//! Focused unit tests covering recommend CLI configuration and output.

use super::helpers::{ExportFiles, write_utf8};
use super::*;
use crate::recommend::{
    RecipientSelection, RecommendConfig, config_from_layers_for_test, run_recommend_with,
};
use camino::Utf8PathBuf;
use giftwise_core::{DEFAULT_LIMIT, RecommendResponse};
use giftwise_data::Recipient;
use rstest::{fixture, rstest};

#[fixture]
fn exports() -> ExportFiles {
    ExportFiles::new()
}

fn args_for(exports: &ExportFiles) -> RecommendArgs {
    RecommendArgs {
        gifts_path: Some(exports.gifts().to_path_buf()),
        ..RecommendArgs::default()
    }
}

#[rstest]
fn converting_without_gifts_path_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default())
        .expect_err("missing gifts path should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_GIFTS);
            assert_eq!(env, ENV_GIFTS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn recipient_id_requires_recipient_export(exports: ExportFiles) {
    let args = RecommendArgs {
        recipient_id: Some(7),
        ..args_for(&exports)
    };
    let err = RecommendConfig::try_from(args).expect_err("recipient export should be required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RECIPIENTS);
            assert_eq!(env, ENV_RECIPIENTS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn conversion_applies_defaults(exports: ExportFiles) {
    let config = RecommendConfig::try_from(args_for(&exports)).expect("config should build");
    assert_eq!(config.gifts_path, exports.gifts());
    assert_eq!(config.limit, DEFAULT_LIMIT);
    assert!(config.personalise);
    assert_eq!(config.interests, None);
    assert_eq!(config.recipient, None);
    assert_eq!(config.budget, None);
}

#[rstest]
fn conversion_splits_interests_and_selects_recipient(exports: ExportFiles) {
    let args = RecommendArgs {
        recipients: Some(exports.recipients().to_path_buf()),
        recipient_id: Some(7),
        interests: Some(" hiking, ,coffee ".to_owned()),
        limit: Some(3),
        personalise: Some(false),
        ..args_for(&exports)
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(
        config.interests,
        Some(vec!["hiking".to_owned(), "coffee".to_owned()])
    );
    assert_eq!(
        config.recipient,
        Some(RecipientSelection {
            path: exports.recipients().to_path_buf(),
            id: 7,
        })
    );
    assert_eq!(config.limit, 3);
    assert!(!config.personalise);
}

#[rstest]
fn validate_sources_reports_missing_files(exports: ExportFiles) {
    let args = RecommendArgs {
        recipients: Some(exports.root().join("absent.json")),
        ..args_for(&exports)
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_RECIPIENTS);
            assert_eq!(path, exports.root().join("absent.json"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories(exports: ExportFiles) {
    let args = RecommendArgs {
        gifts_path: Some(exports.root().to_path_buf()),
        ..RecommendArgs::default()
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    let err = config
        .validate_sources()
        .expect_err("expected directory rejection");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_GIFTS),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn request_falls_back_to_recipient_interests(exports: ExportFiles) {
    let config = RecommendConfig::try_from(args_for(&exports)).expect("config should build");
    let recipient = Recipient {
        id: 7,
        name: "Sam".to_owned(),
        interests: vec!["coffee".to_owned()],
        gift_history: std::collections::BTreeSet::new(),
    };
    assert_eq!(config.request_for(Some(&recipient)).interests, ["coffee"]);
    assert!(config.request_for(None).interests.is_empty());

    let explicit = RecommendConfig {
        interests: Some(vec!["hiking".to_owned()]),
        ..config
    };
    assert_eq!(explicit.request_for(Some(&recipient)).interests, ["hiking"]);
}

#[rstest]
fn unknown_recipient_is_reported(exports: ExportFiles) {
    let args = RecommendArgs {
        recipients: Some(exports.recipients().to_path_buf()),
        recipient_id: Some(99),
        ..args_for(&exports)
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    let err = config
        .load_recipient()
        .expect_err("unknown recipient should fail");
    match err {
        CliError::UnknownRecipient { id, path } => {
            assert_eq!(id, 99);
            assert_eq!(path, exports.recipients());
        }
        other => panic!("expected UnknownRecipient, found {other:?}"),
    }
}

#[rstest]
fn malformed_gift_export_surfaces_load_error(exports: ExportFiles) {
    let broken = exports.root().join("broken.json");
    write_utf8(&broken, b"{ not valid json");
    let args = RecommendArgs {
        gifts_path: Some(broken),
        ..RecommendArgs::default()
    };
    let mut buffer = Vec::new();
    let err = run_recommend_with(args, &mut buffer).expect_err("broken export should fail");
    match err {
        CliError::LoadExport(giftwise_data::DataError::Parse { .. }) => {}
        other => panic!("expected LoadExport, found {other:?}"),
    }
    assert!(buffer.is_empty());
}

#[rstest]
fn negative_budget_is_rejected(exports: ExportFiles) {
    let args = RecommendArgs {
        budget: Some(-5.0),
        ..args_for(&exports)
    };
    let mut buffer = Vec::new();
    let err = run_recommend_with(args, &mut buffer).expect_err("negative budget should fail");
    match err {
        CliError::Recommend(_) => {}
        other => panic!("expected Recommend, found {other:?}"),
    }
}

#[rstest]
fn run_writes_ranked_json(exports: ExportFiles) {
    let args = RecommendArgs {
        recipients: Some(exports.recipients().to_path_buf()),
        recipient_id: Some(7),
        budget: Some(100.0),
        ..args_for(&exports)
    };
    let mut buffer = Vec::new();
    run_recommend_with(args, &mut buffer).expect("recommend should succeed");

    let stdout = String::from_utf8(buffer).expect("stdout utf-8");
    assert!(stdout.ends_with('\n'));
    let response: RecommendResponse =
        serde_json::from_str(&stdout).expect("output should be a JSON response");
    let ranked: Vec<(&str, u8)> = response
        .gifts
        .iter()
        .map(|entry| (entry.gift.title.as_str(), entry.match_score.get()))
        .collect();
    assert_eq!(
        ranked,
        [("Trail Running Shoes", 70), ("Burr Coffee Grinder", 60)]
    );
    assert_eq!(response.diagnostics.candidates_considered, 2);
    assert!(response.diagnostics.personalised);
}

#[rstest]
fn interests_without_recipient_keep_priors(exports: ExportFiles) {
    let args = RecommendArgs {
        interests: Some("hiking".to_owned()),
        budget: Some(0.0),
        ..args_for(&exports)
    };
    let mut buffer = Vec::new();
    run_recommend_with(args, &mut buffer).expect("recommend should succeed");

    let response: RecommendResponse =
        serde_json::from_slice(&buffer).expect("output should be a JSON response");
    assert!(!response.diagnostics.personalised);
    assert_eq!(response.diagnostics.candidates_considered, 3);
    assert!(response.gifts.iter().all(|entry| entry.personalization_delta == 0));
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "limit": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let root = Utf8PathBuf::from("/srv/giftwise");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "gifts_path": root.join("from-file.json").as_str(),
            "budget": 40.0,
            "limit": 5,
        }),
        None,
    );
    composer.push_environment(json!({
        "gifts_path": root.join("from-env.json").as_str(),
        "limit": 8,
    }));
    composer.push_cli(json!({
        "limit": 3,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.gifts_path, root.join("from-env.json"));
    assert_eq!(config.budget, Some(40.0));
    assert_eq!(config.limit, 3);
    assert!(config.personalise);
}
