use adwire::automl::{
    input_config, model_export_output_config, BigQuerySource, GcrDestination, GcsSource,
    InputConfig, ModelExportOutputConfig,
};
use adwire::provenance::{
    hash, repo_source, source, Artifact, BuildProvenance, FileHashes, Hash, RepoSource, Source,
    StorageSource,
};
use prost::{Message, Name};
use prost_types::{Any, Timestamp};

use crate::{check_message, roundtrip};

fn provenance() -> BuildProvenance {
    let mut source = Source {
        artifact_storage_source: Some(StorageSource {
            bucket: "artifacts".to_owned(),
            object: "inputs.tar.gz".to_owned(),
            generation: 1571234567890123,
        }),
        source: Some(source::Source::RepoSource(RepoSource {
            project_id: "demo".to_owned(),
            repo_name: "service".to_owned(),
            dir: "server".to_owned(),
            revision: Some(repo_source::Revision::TagName("v1.2.0".to_owned())),
        })),
        ..Default::default()
    };
    source.file_hashes.insert(
        "server/main.rs".to_owned(),
        FileHashes {
            file_hash: vec![Hash::sha256(vec![7u8; 32])],
        },
    );

    let mut provenance = BuildProvenance {
        id: "5b1a".to_owned(),
        project_id: "demo".to_owned(),
        built_artifacts: vec![Artifact {
            checksum: "sha256:abcd".to_owned(),
            id: "gcr.io/demo/service@sha256:abcd".to_owned(),
            names: vec!["gcr.io/demo/service:v1.2.0".to_owned()],
        }],
        create_time: Some(Timestamp {
            seconds: 1_560_000_000,
            nanos: 0,
        }),
        start_time: Some(Timestamp {
            seconds: 1_560_000_010,
            nanos: 0,
        }),
        finish_time: Some(Timestamp {
            seconds: 1_560_000_130,
            nanos: 5,
        }),
        creator: "builder@example.com".to_owned(),
        source_provenance: Some(source),
        builder_version: "1.0".to_owned(),
        ..Default::default()
    };
    provenance
        .build_options
        .insert("machine_type".to_owned(), "N1_HIGHCPU_8".to_owned());
    provenance
}

#[test]
fn provenance_roundtrip() {
    let provenance = provenance();
    check_message(&provenance);
    roundtrip::<BuildProvenance>(&provenance.encode_to_vec()).unwrap();
    assert_eq!(provenance.validate(), Ok(()));
    assert_eq!(provenance.duration().map(|d| d.seconds), Some(120));
}

#[test]
fn provenance_in_any() {
    let any = Any::from_msg(&provenance()).unwrap();
    assert_eq!(
        any.type_url,
        "type.googleapis.com/google.devtools.containeranalysis.v1alpha1.BuildProvenance"
    );
    assert_eq!(any.to_msg::<BuildProvenance>().unwrap(), provenance());
}

#[test]
fn revision_oneof_keeps_one_alternative() {
    let mut buf = RepoSource {
        revision: Some(repo_source::Revision::BranchName("main".to_owned())),
        ..Default::default()
    }
    .encode_to_vec();
    RepoSource {
        revision: Some(repo_source::Revision::CommitSha("9f2c".to_owned())),
        ..Default::default()
    }
    .encode(&mut buf)
    .unwrap();

    let decoded = RepoSource::decode(buf.as_slice()).unwrap();
    assert_eq!(
        decoded.revision,
        Some(repo_source::Revision::CommitSha("9f2c".to_owned()))
    );
}

#[test]
fn hash_type_is_open() {
    let hash = Hash {
        r#type: 5,
        value: vec![0u8; 4].into(),
    };
    let decoded = Hash::decode(hash.encode_to_vec().as_slice()).unwrap();
    assert_eq!(decoded.r#type, 5);
    assert_eq!(decoded.r#type(), hash::HashType::None);
}

#[test]
fn automl_configs() {
    let mut input = InputConfig {
        source: Some(input_config::Source::GcsSource(GcsSource {
            input_uris: vec![
                "gs://bucket/train.csv".to_owned(),
                "gs://bucket/test.csv".to_owned(),
            ],
        })),
        ..Default::default()
    };
    input.params.insert("a".to_owned(), "1".to_owned());
    input.params.insert("b".to_owned(), "2".to_owned());
    check_message(&input);
    roundtrip::<InputConfig>(&input.encode_to_vec()).unwrap();
    assert_eq!(input.validate(), Ok(()));

    input.source = Some(input_config::Source::BigquerySource(BigQuerySource {
        input_uri: "projectId.dataset.table".to_owned(),
    }));
    assert!(input
        .validate()
        .unwrap_err()
        .has("bigquery_source.input_uri"));

    let export = ModelExportOutputConfig {
        model_format: "docker".to_owned(),
        destination: Some(model_export_output_config::Destination::GcrDestination(
            GcrDestination {
                output_uri: "eu.gcr.io/demo/model:latest".to_owned(),
            },
        )),
        ..Default::default()
    };
    assert_eq!(export.validate(), Ok(()));
    assert_eq!(
        ModelExportOutputConfig::full_name(),
        "google.cloud.automl.v1beta1.ModelExportOutputConfig"
    );
}
