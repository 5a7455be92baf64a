//! AutoML input and output locations (`google.cloud.automl.v1beta1`).
//!
//! Each config names where data is read from or written to. Where the schema
//! offers several kinds of location they form a oneof, so at most one is set.

use std::collections::BTreeMap;

use crate::error::{ValidationError, ViolationKind, Violations};

/// Input configuration for `ImportData`.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct InputConfig {
    /// Additional domain-specific parameters describing the semantic of the
    /// imported data.
    #[prost(btree_map = "string, string", tag = "2")]
    pub params: BTreeMap<String, String>,
    /// The source of the input.
    #[prost(oneof = "input_config::Source", tags = "1, 3")]
    pub source: ::core::option::Option<input_config::Source>,
}

/// Nested message and enum types in `InputConfig`.
pub mod input_config {
    /// The source of the input.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    #[cfg_attr(
        feature = "serde",
        derive(::serde::Serialize, ::serde::Deserialize),
        serde(rename_all = "snake_case")
    )]
    pub enum Source {
        /// The Google Cloud Storage location for the input content.
        #[prost(message, tag = "1")]
        GcsSource(super::GcsSource),
        /// The BigQuery location for the input content.
        #[prost(message, tag = "3")]
        BigquerySource(super::BigQuerySource),
    }
}

/// Input configuration for `BatchPredict`.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct BatchPredictInputConfig {
    /// Required. The source of the input.
    #[prost(oneof = "batch_predict_input_config::Source", tags = "1, 2")]
    pub source: ::core::option::Option<batch_predict_input_config::Source>,
}

/// Nested message and enum types in `BatchPredictInputConfig`.
pub mod batch_predict_input_config {
    /// Required. The source of the input.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    #[cfg_attr(
        feature = "serde",
        derive(::serde::Serialize, ::serde::Deserialize),
        serde(rename_all = "snake_case")
    )]
    pub enum Source {
        #[prost(message, tag = "1")]
        GcsSource(super::GcsSource),
        #[prost(message, tag = "2")]
        BigquerySource(super::BigQuerySource),
    }
}

/// Input configuration of a single document.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct DocumentInputConfig {
    /// The Google Cloud Storage location of the document file. Only a single path
    /// should be given.
    #[prost(message, optional, tag = "1")]
    pub gcs_source: ::core::option::Option<GcsSource>,
}

/// Output configuration for `ExportData`.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct OutputConfig {
    /// Required. The destination of the output.
    #[prost(oneof = "output_config::Destination", tags = "1, 2")]
    pub destination: ::core::option::Option<output_config::Destination>,
}

/// Nested message and enum types in `OutputConfig`.
pub mod output_config {
    /// Required. The destination of the output.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    #[cfg_attr(
        feature = "serde",
        derive(::serde::Serialize, ::serde::Deserialize),
        serde(rename_all = "snake_case")
    )]
    pub enum Destination {
        #[prost(message, tag = "1")]
        GcsDestination(super::GcsDestination),
        #[prost(message, tag = "2")]
        BigqueryDestination(super::BigQueryDestination),
    }
}

/// Output configuration for `BatchPredict`.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct BatchPredictOutputConfig {
    /// Required. The destination of the output.
    #[prost(oneof = "batch_predict_output_config::Destination", tags = "1, 2")]
    pub destination: ::core::option::Option<batch_predict_output_config::Destination>,
}

/// Nested message and enum types in `BatchPredictOutputConfig`.
pub mod batch_predict_output_config {
    /// Required. The destination of the output.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    #[cfg_attr(
        feature = "serde",
        derive(::serde::Serialize, ::serde::Deserialize),
        serde(rename_all = "snake_case")
    )]
    pub enum Destination {
        #[prost(message, tag = "1")]
        GcsDestination(super::GcsDestination),
        #[prost(message, tag = "2")]
        BigqueryDestination(super::BigQueryDestination),
    }
}

/// Output configuration for `ExportModel`.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct ModelExportOutputConfig {
    /// The format in which the model must be exported, for example
    /// `tflite` or `docker`. Empty selects the default for the model type.
    #[prost(string, tag = "4")]
    pub model_format: ::prost::alloc::string::String,
    /// Additional model-type and format specific parameters describing the
    /// requirements for the model files to be exported.
    #[prost(btree_map = "string, string", tag = "2")]
    pub params: BTreeMap<String, String>,
    /// Required. The destination of the output.
    #[prost(oneof = "model_export_output_config::Destination", tags = "1, 3")]
    pub destination: ::core::option::Option<model_export_output_config::Destination>,
}

/// Nested message and enum types in `ModelExportOutputConfig`.
pub mod model_export_output_config {
    /// Required. The destination of the output.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    #[cfg_attr(
        feature = "serde",
        derive(::serde::Serialize, ::serde::Deserialize),
        serde(rename_all = "snake_case")
    )]
    pub enum Destination {
        #[prost(message, tag = "1")]
        GcsDestination(super::GcsDestination),
        /// The GCR location where the model image is to be pushed to. Only for
        /// the `docker` model format.
        #[prost(message, tag = "3")]
        GcrDestination(super::GcrDestination),
    }
}

/// Output configuration for `ExportEvaluatedExamples`.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct ExportEvaluatedExamplesOutputConfig {
    /// Required. The destination of the output.
    #[prost(oneof = "export_evaluated_examples_output_config::Destination", tags = "2")]
    pub destination:
        ::core::option::Option<export_evaluated_examples_output_config::Destination>,
}

/// Nested message and enum types in `ExportEvaluatedExamplesOutputConfig`.
pub mod export_evaluated_examples_output_config {
    /// Required. The destination of the output.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    #[cfg_attr(
        feature = "serde",
        derive(::serde::Serialize, ::serde::Deserialize),
        serde(rename_all = "snake_case")
    )]
    pub enum Destination {
        #[prost(message, tag = "2")]
        BigqueryDestination(super::BigQueryDestination),
    }
}

/// The Google Cloud Storage location for the input content.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct GcsSource {
    /// Required. Google Cloud Storage URIs to input files, up to 2000 characters
    /// long, e.g. `gs://bucket/directory/object.csv`.
    #[prost(string, repeated, tag = "1")]
    pub input_uris: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

/// The BigQuery location for the input content.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct BigQuerySource {
    /// Required. BigQuery URI to a table, up to 2000 characters long, e.g.
    /// `bq://projectId.bqDatasetId.bqTableId`.
    #[prost(string, tag = "1")]
    pub input_uri: ::prost::alloc::string::String,
}

/// The Google Cloud Storage location where the output is to be written to.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct GcsDestination {
    /// Required. Google Cloud Storage URI to output directory, up to 2000
    /// characters long. Accepted forms are `gs://bucket/directory` and
    /// `gs://bucket`.
    #[prost(string, tag = "1")]
    pub output_uri_prefix: ::prost::alloc::string::String,
}

/// The BigQuery location for the output content.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct BigQueryDestination {
    /// Required. BigQuery URI to a project, up to 2000 characters long, e.g.
    /// `bq://projectId`.
    #[prost(string, tag = "1")]
    pub output_uri: ::prost::alloc::string::String,
}

/// The GCR location where the image must be pushed to.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Serialize, ::serde::Deserialize),
    serde(default)
)]
pub struct GcrDestination {
    /// Required. Google Container Registry URI of the new image, up to 2000
    /// characters long, e.g. `gcr.io/project/image:tag`.
    #[prost(string, tag = "1")]
    pub output_uri: ::prost::alloc::string::String,
}

impl_name!("google.cloud.automl.v1beta1" => {
    InputConfig = "InputConfig",
    BatchPredictInputConfig = "BatchPredictInputConfig",
    DocumentInputConfig = "DocumentInputConfig",
    OutputConfig = "OutputConfig",
    BatchPredictOutputConfig = "BatchPredictOutputConfig",
    ModelExportOutputConfig = "ModelExportOutputConfig",
    ExportEvaluatedExamplesOutputConfig = "ExportEvaluatedExamplesOutputConfig",
    GcsSource = "GcsSource",
    BigQuerySource = "BigQuerySource",
    GcsDestination = "GcsDestination",
    BigQueryDestination = "BigQueryDestination",
    GcrDestination = "GcrDestination",
});

const MAX_URI_LEN: usize = 2000;

/// Registry hosts accepted for exported model images.
pub const GCR_HOSTS: &[&str] = &["gcr.io", "us.gcr.io", "eu.gcr.io", "asia.gcr.io"];

/// Model formats `ExportModel` understands.
pub const MODEL_FORMATS: &[&str] = &[
    "tflite",
    "edgetpu_tflite",
    "tf_saved_model",
    "tf_js",
    "docker",
    "core_ml",
];

fn check_uri(field: String, uri: &str, scheme: &'static str, violations: &mut Violations) {
    if uri.is_empty() {
        violations.push(field, ViolationKind::Required);
        return;
    }
    let expected = match scheme {
        "gs://" => "a gs://bucket URI",
        _ => "a bq://project URI",
    };
    let well_formed = uri.len() <= MAX_URI_LEN
        && uri
            .strip_prefix(scheme)
            .map_or(false, |rest| !rest.is_empty() && !rest.starts_with('/'));
    if !well_formed {
        violations.push(field, ViolationKind::Malformed { expected });
    }
}

fn check_gcr_uri(field: String, uri: &str, violations: &mut Violations) {
    if uri.is_empty() {
        violations.push(field, ViolationKind::Required);
        return;
    }
    let well_formed = uri.len() <= MAX_URI_LEN
        && uri.split_once('/').map_or(false, |(host, image)| {
            GCR_HOSTS.contains(&host) && !image.is_empty()
        });
    if !well_formed {
        violations.push(
            field,
            ViolationKind::Malformed {
                expected: "a gcr.io/project/image URI",
            },
        );
    }
}

fn required(field: &'static str, violations: &mut Violations) {
    violations.push(field, ViolationKind::Required);
}

impl GcsSource {
    fn check(&self, prefix: &str, violations: &mut Violations) {
        if self.input_uris.is_empty() {
            violations.push(format!("{}.input_uris", prefix), ViolationKind::Required);
        }
        for (index, uri) in self.input_uris.iter().enumerate() {
            check_uri(
                format!("{}.input_uris[{}]", prefix, index),
                uri,
                "gs://",
                violations,
            );
        }
    }
}

impl BigQuerySource {
    fn check(&self, prefix: &str, violations: &mut Violations) {
        check_uri(
            format!("{}.input_uri", prefix),
            &self.input_uri,
            "bq://",
            violations,
        );
    }
}

impl GcsDestination {
    fn check(&self, prefix: &str, violations: &mut Violations) {
        check_uri(
            format!("{}.output_uri_prefix", prefix),
            &self.output_uri_prefix,
            "gs://",
            violations,
        );
    }
}

impl BigQueryDestination {
    fn check(&self, prefix: &str, violations: &mut Violations) {
        check_uri(
            format!("{}.output_uri", prefix),
            &self.output_uri,
            "bq://",
            violations,
        );
    }
}

impl InputConfig {
    /// Checks that a source is set and its URIs are well formed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();
        match &self.source {
            None => required("source", &mut violations),
            Some(input_config::Source::GcsSource(source)) => {
                source.check("gcs_source", &mut violations)
            }
            Some(input_config::Source::BigquerySource(source)) => {
                source.check("bigquery_source", &mut violations)
            }
        }
        violations.finish("InputConfig")
    }
}

impl BatchPredictInputConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();
        match &self.source {
            None => required("source", &mut violations),
            Some(batch_predict_input_config::Source::GcsSource(source)) => {
                source.check("gcs_source", &mut violations)
            }
            Some(batch_predict_input_config::Source::BigquerySource(source)) => {
                source.check("bigquery_source", &mut violations)
            }
        }
        violations.finish("BatchPredictInputConfig")
    }
}

impl DocumentInputConfig {
    /// Checks that exactly one document path is given.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();
        match &self.gcs_source {
            None => required("gcs_source", &mut violations),
            Some(source) => {
                source.check("gcs_source", &mut violations);
                if source.input_uris.len() > 1 {
                    violations.push(
                        "gcs_source.input_uris",
                        ViolationKind::OutOfRange {
                            expected: "a single document path",
                        },
                    );
                }
            }
        }
        violations.finish("DocumentInputConfig")
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();
        match &self.destination {
            None => required("destination", &mut violations),
            Some(output_config::Destination::GcsDestination(destination)) => {
                destination.check("gcs_destination", &mut violations)
            }
            Some(output_config::Destination::BigqueryDestination(destination)) => {
                destination.check("bigquery_destination", &mut violations)
            }
        }
        violations.finish("OutputConfig")
    }
}

impl BatchPredictOutputConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();
        match &self.destination {
            None => required("destination", &mut violations),
            Some(batch_predict_output_config::Destination::GcsDestination(destination)) => {
                destination.check("gcs_destination", &mut violations)
            }
            Some(batch_predict_output_config::Destination::BigqueryDestination(destination)) => {
                destination.check("bigquery_destination", &mut violations)
            }
        }
        violations.finish("BatchPredictOutputConfig")
    }
}

impl ModelExportOutputConfig {
    /// Checks the destination and model format. Container images can only be
    /// pushed for the `docker` format.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();
        if !self.model_format.is_empty() && !MODEL_FORMATS.contains(&self.model_format.as_str()) {
            violations.push(
                "model_format",
                ViolationKind::Malformed {
                    expected: "a supported model format",
                },
            );
        }
        match &self.destination {
            None => required("destination", &mut violations),
            Some(model_export_output_config::Destination::GcsDestination(destination)) => {
                destination.check("gcs_destination", &mut violations)
            }
            Some(model_export_output_config::Destination::GcrDestination(destination)) => {
                check_gcr_uri(
                    "gcr_destination.output_uri".to_owned(),
                    &destination.output_uri,
                    &mut violations,
                );
                if self.model_format != "docker" {
                    violations.push(
                        "model_format",
                        ViolationKind::OutOfRange {
                            expected: "docker for a GCR destination",
                        },
                    );
                }
            }
        }
        violations.finish("ModelExportOutputConfig")
    }
}

impl ExportEvaluatedExamplesOutputConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();
        match &self.destination {
            None => required("destination", &mut violations),
            Some(export_evaluated_examples_output_config::Destination::BigqueryDestination(
                destination,
            )) => destination.check("bigquery_destination", &mut violations),
        }
        violations.finish("ExportEvaluatedExamplesOutputConfig")
    }
}
