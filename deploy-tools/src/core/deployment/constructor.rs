// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Constructor argument encoding.

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::Constructor,
    primitives::Bytes,
};
use eyre::{bail, Context};

use super::DeploymentError;
use crate::core::artifact::Artifact;

/// Builds the creation code for `artifact`: its bytecode followed by the encoded arguments.
pub fn init_code(artifact: &Artifact, args: &[String]) -> Result<Bytes, DeploymentError> {
    let encoded = encode_constructor_args(artifact.abi.constructor.as_ref(), args)
        .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))?;
    let mut code = Vec::with_capacity(artifact.bytecode.len() + encoded.len());
    code.extend_from_slice(&artifact.bytecode);
    code.extend(encoded);
    Ok(code.into())
}

/// ABI-encodes textual constructor arguments, without a selector.
pub fn encode_constructor_args(
    constructor: Option<&Constructor>,
    args: &[String],
) -> eyre::Result<Vec<u8>> {
    let Some(constructor) = constructor else {
        if !args.is_empty() {
            bail!(
                "contract has no constructor but {} arguments were given",
                args.len()
            );
        }
        return Ok(Vec::new());
    };
    if args.len() != constructor.inputs.len() {
        bail!(
            "mismatch number of constructor arguments (want {}; got {})",
            constructor.inputs.len(),
            args.len(),
        );
    }

    let mut values = Vec::<DynSolValue>::with_capacity(args.len());
    for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
        let ty = param
            .resolve()
            .wrap_err_with(|| format!("could not resolve constructor arg: {param}"))?;
        let value = ty
            .coerce_str(arg)
            .wrap_err_with(|| format!("could not parse constructor arg: {param}"))?;
        values.push(value);
    }
    Ok(constructor.abi_encode_input_raw(&values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    fn artifact(abi: &str) -> Artifact {
        serde_json::from_str(&format!(
            r#"{{"contractName": "Template", "abi": {abi}, "bytecode": "0x6080"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn no_constructor_no_args() {
        let code = init_code(&artifact("[]"), &[]).unwrap();
        assert_eq!(code.as_ref(), &[0x60, 0x80]);
    }

    #[test]
    fn args_without_constructor() {
        let err = init_code(&artifact("[]"), &["1".to_string()]).unwrap_err();
        assert!(matches!(err, DeploymentError::InvalidConstructor(_)));
    }

    #[test]
    fn argument_count_mismatch() {
        let constructor = Constructor::parse("constructor(uint256 supply)").unwrap();
        let err = encode_constructor_args(Some(&constructor), &[]).unwrap_err();
        assert!(err.to_string().contains("want 1; got 0"));
    }

    #[test]
    fn appends_encoded_uint() {
        let abi = r#"[{"type": "constructor", "stateMutability": "nonpayable",
            "inputs": [{"name": "supply", "type": "uint256", "internalType": "uint256"}]}]"#;
        let code = init_code(&artifact(abi), &["42".to_string()]).unwrap();
        assert_eq!(code.len(), 2 + 32);
        assert_eq!(&code[..2], &[0x60, 0x80]);
        assert_eq!(U256::from_be_slice(&code[2..]), U256::from(42));
    }

    #[test]
    fn unparsable_arg() {
        let constructor = Constructor::parse("constructor(address owner)").unwrap();
        let err = encode_constructor_args(Some(&constructor), &["nope".to_string()]).unwrap_err();
        assert!(err.to_string().contains("could not parse constructor arg"));
    }
}
