//! Loading of compiled contract artifacts.
//!
//! The staking pool is compiled by an external toolchain. Its build output
//! (Hardhat artifact layout) is read at runtime instead of being baked into
//! the binary, so a new contract build does not require recompiling the
//! deployer.

use {
    alloy::primitives::Bytes,
    anyhow::{Context, Result},
    serde::Deserialize,
    std::path::Path,
};

/// A compiled contract artifact in the Hardhat output layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    /// Kept as raw JSON. The deployer declares the constructor interface
    /// statically and never needs to interpret the ABI.
    pub abi: serde_json::Value,
    /// Creation bytecode. Empty for interfaces and abstract contracts.
    pub bytecode: Bytes,
}

impl Artifact {
    /// Reads and parses the artifact at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read contract artifact {path:?}"))?;
        Self::from_json(&json).with_context(|| format!("invalid contract artifact {path:?}"))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to deserialize contract artifact")
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::io::Write as _};

    const ARTIFACT: &str = r#"{
        "contractName": "NFTStaking",
        "abi": [],
        "bytecode": "0x60806040523480156100115760006000fd5b50",
        "linkReferences": {}
    }"#;

    #[test]
    fn parses_hardhat_artifact() {
        let artifact = Artifact::from_json(ARTIFACT).unwrap();
        assert_eq!(artifact.contract_name, "NFTStaking");
        assert_eq!(artifact.bytecode.first(), Some(&0x60));
        assert_eq!(artifact.bytecode.len(), 19);
    }

    #[test]
    fn interface_artifact_has_empty_bytecode() {
        let artifact = Artifact::from_json(
            r#"{"contractName": "IERC721", "abi": [], "bytecode": "0x"}"#,
        )
        .unwrap();
        assert!(artifact.bytecode.is_empty());
    }

    #[test]
    fn rejects_artifact_without_bytecode() {
        assert!(Artifact::from_json(r#"{"contractName": "NFTStaking", "abi": []}"#).is_err());
    }

    #[test]
    fn loads_artifact_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ARTIFACT.as_bytes()).unwrap();
        let artifact = Artifact::load(file.path()).unwrap();
        assert_eq!(artifact.contract_name, "NFTStaking");
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Artifact::load(Path::new("/does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read contract artifact"));
    }
}
