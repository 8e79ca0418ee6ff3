// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("no artifact for contract {name} under {}", .dir.display())]
    NotFound { name: String, dir: PathBuf },
    #[error("multiple artifacts for contract {name}: {}", display_paths(.paths))]
    Ambiguous { name: String, paths: Vec<PathBuf> },
    #[error("artifact {} has no bytecode", .0.display())]
    MissingBytecode(PathBuf),
    #[error("invalid artifact search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("failed to search for artifacts: {0}")]
    Glob(#[from] glob::GlobError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse artifact {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A compiled contract: its ABI and creation bytecode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    #[serde(default)]
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl Artifact {
    /// Finds and loads the artifact for `name` anywhere below `dir`.
    pub fn find(dir: impl AsRef<Path>, name: &str) -> Result<Self, ArtifactError> {
        let path = Self::locate(dir.as_ref(), name)?;
        Self::load(path)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let artifact: Artifact = serde_json::from_str(&text).map_err(|source| ArtifactError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::MissingBytecode(path.to_path_buf()));
        }
        debug!(@grey, "loaded artifact {}", path.display());
        Ok(artifact)
    }

    fn locate(dir: &Path, name: &str) -> Result<PathBuf, ArtifactError> {
        let pattern = format!(
            "{}/**/{}.json",
            glob::Pattern::escape(&dir.to_string_lossy()),
            glob::Pattern::escape(name)
        );
        let mut paths = glob::glob(&pattern)?.collect::<Result<Vec<_>, _>>()?;
        match paths.len() {
            0 => Err(ArtifactError::NotFound {
                name: name.to_string(),
                dir: dir.to_path_buf(),
            }),
            1 => Ok(paths.remove(0)),
            _ => Err(ArtifactError::Ambiguous {
                name: name.to_string(),
                paths,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"{
        "contractName": "Template",
        "abi": [{"type": "constructor", "inputs": [], "stateMutability": "nonpayable"}],
        "bytecode": "0x6080604052"
    }"#;

    fn write(dir: &Path, relative: &str, contents: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn finds_nested_artifact_and_skips_debug_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "contracts/Template.sol/Template.json", TEMPLATE);
        write(dir.path(), "contracts/Template.sol/Template.dbg.json", "{}");

        let artifact = Artifact::find(dir.path(), "Template").unwrap();
        assert_eq!(artifact.contract_name, "Template");
        assert_eq!(artifact.bytecode.as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
        assert!(artifact.abi.constructor.is_some());
    }

    #[test]
    fn artifacts_dir_with_glob_characters() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out [v1]*");
        write(&root, "contracts/Template.sol/Template.json", TEMPLATE);
        write(dir.path(), "out v/contracts/Template.json", TEMPLATE);

        let artifact = Artifact::find(&root, "Template").unwrap();
        assert_eq!(artifact.contract_name, "Template");
    }

    #[test]
    fn missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let err = Artifact::find(dir.path(), "Template").unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { ref name, .. } if name == "Template"));
    }

    #[test]
    fn duplicate_artifacts_are_ambiguous() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a/Template.json", TEMPLATE);
        write(dir.path(), "b/Template.json", TEMPLATE);
        let err = Artifact::find(dir.path(), "Template").unwrap_err();
        assert!(matches!(err, ArtifactError::Ambiguous { ref paths, .. } if paths.len() == 2));
    }

    #[test]
    fn empty_bytecode_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "Template.json",
            r#"{"contractName": "Template", "abi": [], "bytecode": "0x"}"#,
        );
        let err = Artifact::find(dir.path(), "Template").unwrap_err();
        assert!(matches!(err, ArtifactError::MissingBytecode(_)));
    }
}
