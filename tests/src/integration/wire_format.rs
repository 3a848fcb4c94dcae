//! # Wire Format Tests
//!
//! Blocks and genesis constants arrive as camelCase JSON. Decoding faults
//! must surface as errors, never as an invalid verdict.

#[cfg(test)]
mod tests {
    use bc_block_validation::{
        decode_block, BlockValidationApi, GenesisConstants, GenesisError, ValidationError,
        ValidationPipeline,
    };
    use bc_compute::auto_detect;
    use shared_types::U256;

    use crate::fixtures;

    #[test]
    fn test_json_round_trip_still_validates() {
        let block = fixtures::block(5, 3, 4);
        let json = serde_json::to_vec(&block).unwrap();
        let decoded = decode_block(&json).unwrap();
        assert_eq!(decoded, block);

        let pipeline = ValidationPipeline::new(fixtures::genesis(), auto_detect());
        assert!(pipeline.is_valid_block(&decoded).unwrap());
    }

    #[test]
    fn test_distance_is_hex_on_the_wire() {
        let mut block = fixtures::valid_block();
        block.distance = U256::from(0xdead_beefu64);
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["distance"], "0xdeadbeef");
    }

    #[test]
    fn test_truncated_json_is_decode_error() {
        let json = serde_json::to_vec(&fixtures::valid_block()).unwrap();
        let result = decode_block(&json[..json.len() / 2]);
        assert!(matches!(result, Err(ValidationError::Decode(_))));
    }

    #[test]
    fn test_missing_field_is_decode_error() {
        let mut value = serde_json::to_value(fixtures::valid_block()).unwrap();
        value.as_object_mut().unwrap().remove("chainRoot");
        let json = serde_json::to_vec(&value).unwrap();
        assert!(matches!(decode_block(&json), Err(ValidationError::Decode(_))));
    }

    #[test]
    fn test_genesis_file_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genesis.json");
        let genesis = fixtures::genesis();
        std::fs::write(&path, serde_json::to_string(&genesis).unwrap()).unwrap();

        let loaded = GenesisConstants::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded, genesis);
    }

    #[test]
    fn test_genesis_with_zero_chains_is_rejected() {
        let json = format!(
            r#"{{"blockchainFingerprintsRoot":"{}","childBlockchainCount":0}}"#,
            fixtures::fingerprint()
        );
        assert!(matches!(
            GenesisConstants::from_json_str(&json),
            Err(GenesisError::InvalidConfig(_))
        ));
    }
}
