//! Build provenance (`google.devtools.containeranalysis.v1alpha1`).
//!
//! Records how a set of artifacts was produced: the source it was built from,
//! the commands that ran and the artifacts that came out.

use std::collections::BTreeMap;

use prost_types::{Duration, Timestamp};

use crate::error::{ValidationError, ViolationKind, Violations};

/// Provenance of a build. Contains all information needed to verify the full
/// details about the build from source to completion.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuildProvenance {
    /// Unique identifier of the build.
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    /// ID of the project.
    #[prost(string, tag = "2")]
    pub project_id: ::prost::alloc::string::String,
    /// Commands requested by the build.
    #[prost(message, repeated, tag = "5")]
    pub commands: ::prost::alloc::vec::Vec<Command>,
    /// Output of the build.
    #[prost(message, repeated, tag = "6")]
    pub built_artifacts: ::prost::alloc::vec::Vec<Artifact>,
    /// Time at which the build was created.
    #[prost(message, optional, tag = "7")]
    pub create_time: ::core::option::Option<Timestamp>,
    /// Time at which execution of the build was started.
    #[prost(message, optional, tag = "8")]
    pub start_time: ::core::option::Option<Timestamp>,
    /// Time at which execution of the build was finished.
    #[prost(message, optional, tag = "9")]
    pub finish_time: ::core::option::Option<Timestamp>,
    /// E-mail address of the user who initiated this build. Note that this was
    /// the user's e-mail address at the time the build was initiated; this
    /// address may not represent the same end-user for all time.
    #[prost(string, tag = "11")]
    pub creator: ::prost::alloc::string::String,
    /// Google Cloud Storage bucket where logs were written.
    #[prost(string, tag = "13")]
    pub logs_bucket: ::prost::alloc::string::String,
    /// Details of the Source input to the build.
    #[prost(message, optional, tag = "14")]
    pub source_provenance: ::core::option::Option<Source>,
    /// Trigger identifier if the build was triggered automatically; empty if
    /// not.
    #[prost(string, tag = "15")]
    pub trigger_id: ::prost::alloc::string::String,
    /// Special options applied to this build. This is a catch-all field where
    /// build providers can enter any desired additional details.
    #[prost(btree_map = "string, string", tag = "16")]
    pub build_options: BTreeMap<String, String>,
    /// Version string of the builder at the time this build was executed.
    #[prost(string, tag = "17")]
    pub builder_version: ::prost::alloc::string::String,
}

/// Source describes the location of the source used for the build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Source {
    /// If provided, the input binary artifacts for the build came from this
    /// location.
    #[prost(message, optional, tag = "4")]
    pub artifact_storage_source: ::core::option::Option<StorageSource>,
    /// Hash(es) of the build source, which can be used to verify that the
    /// original source integrity was maintained in the build.
    ///
    /// The keys to this map are file paths used as build source and the values
    /// contain the hash values for those files.
    #[prost(btree_map = "string, message", tag = "3")]
    pub file_hashes: BTreeMap<String, FileHashes>,
    /// Source input to the build.
    #[prost(oneof = "source::Source", tags = "1, 2")]
    pub source: ::core::option::Option<source::Source>,
}

/// Nested message and enum types in `Source`.
pub mod source {
    /// Source input to the build.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Source {
        /// If provided, get the source from this location in Google Cloud
        /// Storage.
        #[prost(message, tag = "1")]
        StorageSource(super::StorageSource),
        /// If provided, get source from this location in a Cloud Repo.
        #[prost(message, tag = "2")]
        RepoSource(super::RepoSource),
    }
}

/// Container message for hashes of byte content of files, used in Source
/// messages to verify integrity of source input to the build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileHashes {
    /// Collection of file hashes.
    #[prost(message, repeated, tag = "1")]
    pub file_hash: ::prost::alloc::vec::Vec<Hash>,
}

/// Container message for hash values.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Hash {
    /// The type of hash that was performed.
    #[prost(enumeration = "hash::HashType", tag = "1")]
    pub r#type: i32,
    /// The hash value.
    #[prost(bytes = "bytes", tag = "2")]
    pub value: ::prost::bytes::Bytes,
}

/// Nested message and enum types in `Hash`.
pub mod hash {
    enumeration! {
        /// Specifies the hash algorithm, if any.
        pub enum HashType {
            /// No hash requested.
            None = 0 => "NONE",
            /// A sha256 hash.
            Sha256 = 1 => "SHA256",
        }
    }

    impl HashType {
        /// Length in bytes of a digest of this type, if it has a fixed length.
        pub fn digest_len(self) -> Option<usize> {
            match self {
                HashType::None => None,
                HashType::Sha256 => Some(32),
            }
        }
    }
}

/// Source describes the location of the source used for the build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StorageSource {
    /// Google Cloud Storage bucket containing source (see [Bucket Name
    /// Requirements](<https://cloud.google.com/storage/docs/bucket-naming#requirements>)).
    #[prost(string, tag = "1")]
    pub bucket: ::prost::alloc::string::String,
    /// Google Cloud Storage object containing source.
    #[prost(string, tag = "2")]
    pub object: ::prost::alloc::string::String,
    /// Google Cloud Storage generation for the object.
    #[prost(int64, tag = "3")]
    pub generation: i64,
}

/// RepoSource describes the location of the source in a Google Cloud Source
/// Repository.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RepoSource {
    /// ID of the project that owns the repo.
    #[prost(string, tag = "1")]
    pub project_id: ::prost::alloc::string::String,
    /// Name of the repo.
    #[prost(string, tag = "2")]
    pub repo_name: ::prost::alloc::string::String,
    /// Directory, relative to the source root, in which to run the build.
    #[prost(string, tag = "7")]
    pub dir: ::prost::alloc::string::String,
    /// A revision within the source repository must be specified in
    /// one of these ways.
    #[prost(oneof = "repo_source::Revision", tags = "3, 4, 5")]
    pub revision: ::core::option::Option<repo_source::Revision>,
}

/// Nested message and enum types in `RepoSource`.
pub mod repo_source {
    /// A revision within the source repository must be specified in
    /// one of these ways.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Revision {
        /// Name of the branch to build.
        #[prost(string, tag = "3")]
        BranchName(::prost::alloc::string::String),
        /// Name of the tag to build.
        #[prost(string, tag = "4")]
        TagName(::prost::alloc::string::String),
        /// Explicit commit SHA to build.
        #[prost(string, tag = "5")]
        CommitSha(::prost::alloc::string::String),
    }
}

/// Command describes a step performed as part of the build pipeline.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Command {
    /// Name of the command, as presented on the command line, or if the command
    /// is packaged as a Docker container, as presented to `docker pull`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Environment variables set before running this Command.
    #[prost(string, repeated, tag = "2")]
    pub env: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Command-line arguments used when executing this Command.
    #[prost(string, repeated, tag = "3")]
    pub args: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Working directory (relative to project source root) used when running
    /// this Command.
    #[prost(string, tag = "4")]
    pub dir: ::prost::alloc::string::String,
    /// Optional unique identifier for this Command, used in wait_for to
    /// reference this Command as a dependency.
    #[prost(string, tag = "5")]
    pub id: ::prost::alloc::string::String,
    /// The ID(s) of the Command(s) that this Command depends on.
    #[prost(string, repeated, tag = "6")]
    pub wait_for: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

/// Artifact describes a build product.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Artifact {
    /// Hash or checksum value of a binary, or Docker Registry 2.0 digest of a
    /// container.
    #[prost(string, tag = "1")]
    pub checksum: ::prost::alloc::string::String,
    /// Artifact ID, if any; for container images, this will be a URL by digest
    /// like gcr.io/projectID/imagename@sha256:123456
    #[prost(string, tag = "2")]
    pub id: ::prost::alloc::string::String,
    /// Related artifact names. This may be the path to a binary or jar file, or
    /// in the case of a container build, the name used to push the container
    /// image to Google Container Registry, as presented to `docker push`.
    #[prost(string, repeated, tag = "3")]
    pub names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

impl_name!("google.devtools.containeranalysis.v1alpha1" => {
    BuildProvenance = "BuildProvenance",
    Source = "Source",
    FileHashes = "FileHashes",
    Hash = "Hash",
    StorageSource = "StorageSource",
    RepoSource = "RepoSource",
    Command = "Command",
    Artifact = "Artifact",
});

impl Hash {
    /// A SHA-256 digest.
    pub fn sha256(digest: impl Into<::prost::bytes::Bytes>) -> Hash {
        Hash {
            r#type: hash::HashType::Sha256.into(),
            value: digest.into(),
        }
    }

    fn check(&self, prefix: &str, violations: &mut Violations) {
        let hash_type = match hash::HashType::try_from(self.r#type) {
            Ok(hash_type) => hash_type,
            Err(_) => {
                violations.push(
                    format!("{}.type", prefix),
                    ViolationKind::UnknownEnumValue(self.r#type),
                );
                return;
            }
        };
        if let Some(len) = hash_type.digest_len() {
            if self.value.len() != len {
                violations.push(
                    format!("{}.value", prefix),
                    ViolationKind::OutOfRange {
                        expected: "a digest as long as its hash type",
                    },
                );
            }
        }
    }
}

impl BuildProvenance {
    /// How long the build executed, if both ends are recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (start, finish) = (self.start_time.as_ref()?, self.finish_time.as_ref()?);
        let mut duration = Duration {
            seconds: finish.seconds.checked_sub(start.seconds)?,
            nanos: finish.nanos - start.nanos,
        };
        duration.normalize();
        Some(duration)
    }

    /// Checks hash lengths, command dependencies and timestamps.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::default();

        if self.id.is_empty() {
            violations.push("id", ViolationKind::Required);
        }
        if let Some(source) = &self.source_provenance {
            for (path, hashes) in &source.file_hashes {
                for (index, hash) in hashes.file_hash.iter().enumerate() {
                    hash.check(
                        &format!("source_provenance.file_hashes[{}].file_hash[{}]", path, index),
                        &mut violations,
                    );
                }
            }
        }

        // A command may only wait for commands declared before it.
        for (index, command) in self.commands.iter().enumerate() {
            for dependency in &command.wait_for {
                let declared = self.commands[..index]
                    .iter()
                    .any(|earlier| !earlier.id.is_empty() && earlier.id == *dependency);
                if !declared {
                    violations.push(
                        format!("commands[{}].wait_for", index),
                        ViolationKind::Malformed {
                            expected: "the id of an earlier command",
                        },
                    );
                }
            }
        }

        for (field, timestamp) in [
            ("create_time", &self.create_time),
            ("start_time", &self.start_time),
            ("finish_time", &self.finish_time),
        ] {
            if let Some(timestamp) = timestamp {
                if !(0..1_000_000_000).contains(&timestamp.nanos) {
                    violations.push(
                        field,
                        ViolationKind::OutOfRange {
                            expected: "nanos within 0..1e9",
                        },
                    );
                }
            }
        }
        if let (Some(start), Some(finish)) = (&self.start_time, &self.finish_time) {
            if (finish.seconds, finish.nanos) < (start.seconds, start.nanos) {
                violations.push("finish_time", ViolationKind::EndBeforeStart);
            }
        }

        violations.finish("BuildProvenance")
    }
}
