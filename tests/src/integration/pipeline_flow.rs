//! # Pipeline Flow Tests
//!
//! Drives the full pipeline with the production engines and checks which
//! stages run, which fail, and what the observer sees.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bc_block_validation::{
        BlockValidationApi, RecordingObserver, Stage, ValidationConfig, ValidationError,
        ValidationEvent, ValidationMode, ValidationPipeline,
    };
    use bc_compute::backends::sequential::SequentialEngine;
    use bc_compute::{create_backend, Backend, ComputeEngine};
    use shared_types::{ChildHeader, HeadersByChain};

    use crate::fixtures;

    fn pipeline_with(backend: Backend) -> (ValidationPipeline, Arc<RecordingObserver>) {
        let observer = Arc::new(RecordingObserver::new());
        let engine = create_backend(backend).unwrap();
        let pipeline =
            ValidationPipeline::new(fixtures::genesis(), engine).with_observer(observer.clone());
        (pipeline, observer)
    }

    fn pipeline() -> (ValidationPipeline, Arc<RecordingObserver>) {
        pipeline_with(Backend::Cpu)
    }

    // =========================================================================
    // ACCEPTANCE
    // =========================================================================

    #[test]
    fn test_fixture_block_is_valid_on_both_backends() {
        for backend in [Backend::Cpu, Backend::Sequential] {
            let (pipeline, observer) = pipeline_with(backend);
            let block = fixtures::valid_block();
            assert!(pipeline.is_valid_block(&block).unwrap(), "{backend} rejected fixture");
            assert_eq!(observer.evaluated_stages(), Stage::ALL.to_vec());
        }
    }

    #[test]
    fn test_large_block_is_valid() {
        let (pipeline, _) = pipeline();
        let block = fixtures::block(77_000, 12, 300);
        assert!(pipeline.is_valid_block(&block).unwrap());
    }

    #[test]
    fn test_header_gaps_are_allowed() {
        let (pipeline, _) = pipeline();
        let mut block = fixtures::valid_block();
        let btc = block.blockchain_headers.get_mut("btc").unwrap();
        btc.push(fixtures::child_header("btc", 549_010));
        fixtures::seal(&mut block);

        assert!(pipeline.is_valid_block(&block).unwrap());
    }

    #[test]
    fn test_child_hashes_in_native_encodings_are_valid() {
        let (pipeline, _) = pipeline();
        let mut block = fixtures::valid_block();

        let eth = &mut block.blockchain_headers.get_mut("eth").unwrap()[0];
        eth.hash = format!("0x{}", eth.hash);
        let wav = &mut block.blockchain_headers.get_mut("wav").unwrap()[0];
        wav.hash = "8mBjFzCwMdHVqz1NPyvYQV2NRwPTPa5XnzpNnX5gPgzW".into();
        fixtures::seal(&mut block);

        assert_eq!(pipeline.is_valid_block(&block), Ok(true));
    }

    // =========================================================================
    // SINGLE-FIELD REJECTIONS
    // =========================================================================

    #[test]
    fn test_each_tampered_field_fails_its_stage_first() {
        let (pipeline, _) = pipeline();

        let mut wrong_fp = fixtures::valid_block();
        wrong_fp.blockchain_fingerprints_root.push('0');

        let mut wrong_chain_root = fixtures::valid_block();
        wrong_chain_root.chain_root = fixtures::fingerprint();

        let mut wrong_merkle = fixtures::valid_block();
        wrong_merkle.txs.push("injected".into());

        let mut wrong_distance = fixtures::valid_block();
        wrong_distance.distance = wrong_distance.distance + 1u64;

        for (block, expected) in [
            (wrong_fp, Stage::GenesisFingerprint),
            (wrong_chain_root, Stage::ChainRoot),
            (wrong_merkle, Stage::MerkleRoot),
            (wrong_distance, Stage::Distance),
        ] {
            let report = pipeline.validate(&block).unwrap();
            assert_eq!(report.first_failure(), Some(expected));
            assert_eq!(report.evaluated(), expected as usize + 1);
        }
    }

    #[test]
    fn test_missing_chain_fails_count() {
        let (pipeline, _) = pipeline();
        let mut block = fixtures::valid_block();
        block.blockchain_headers.remove("neo");
        fixtures::seal(&mut block);

        let report = pipeline.diagnose(&block).unwrap();
        assert_eq!(report.failed_stages(), vec![Stage::ChildChainCount]);
    }

    #[test]
    fn test_emptied_chain_fails_count_not_ordering() {
        let (pipeline, _) = pipeline();
        let mut block = fixtures::valid_block();
        block.blockchain_headers.insert("neo".into(), vec![]);
        fixtures::seal(&mut block);

        let report = pipeline.diagnose(&block).unwrap();
        assert_eq!(report.outcome(Stage::HeaderOrdering), Some(true));
        assert_eq!(report.failed_stages(), vec![Stage::ChildChainCount]);
    }

    #[test]
    fn test_duplicate_height_fails_ordering() {
        let (pipeline, observer) = pipeline();
        let mut block = fixtures::valid_block();
        let eth = block.blockchain_headers.get_mut("eth").unwrap();
        let dup = eth[0].clone();
        eth.push(dup);
        fixtures::seal(&mut block);

        assert!(!pipeline.is_valid_block(&block).unwrap());
        assert_eq!(
            observer.evaluated_stages(),
            vec![
                Stage::GenesisFingerprint,
                Stage::ChildChainCount,
                Stage::HeaderOrdering
            ]
        );
    }

    #[test]
    fn test_nonce_change_fails_only_distance() {
        let (pipeline, _) = pipeline();
        let mut block = fixtures::valid_block();
        block.nonce = "0.0000000000000001".into();

        let report = pipeline.diagnose(&block).unwrap();
        assert_eq!(report.failed_stages(), vec![Stage::Distance]);
    }

    #[test]
    fn test_metadata_change_fails_only_merkle() {
        let (pipeline, _) = pipeline();
        let mut block = fixtures::valid_block();
        block.nrg_grant += 1;

        // Distance binds the declared merkle root, which is unchanged
        let report = pipeline.diagnose(&block).unwrap();
        assert_eq!(report.failed_stages(), vec![Stage::MerkleRoot]);
    }

    // =========================================================================
    // FLATTENING ORDER
    // =========================================================================

    // Engine that flattens chains in reverse name order
    struct ReversedFlattenEngine;

    impl ComputeEngine for ReversedFlattenEngine {
        fn hash(&self, data: &[u8]) -> String {
            SequentialEngine.hash(data)
        }

        fn flatten_headers(&self, headers: &HeadersByChain) -> Vec<String> {
            headers
                .values()
                .rev()
                .flat_map(|chain| chain.iter().map(|h| h.hash.clone()))
                .collect()
        }
    }

    #[test]
    fn test_flattening_order_changes_both_roots() {
        let pipeline = ValidationPipeline::new(fixtures::genesis(), Arc::new(ReversedFlattenEngine));
        let block = fixtures::valid_block();

        let report = pipeline.diagnose(&block).unwrap();
        assert_eq!(report.outcome(Stage::ChainRoot), Some(false));
        assert_eq!(report.outcome(Stage::MerkleRoot), Some(false));
        // Work preparation walks the map directly and is unaffected
        assert_eq!(report.outcome(Stage::Distance), Some(true));
    }

    // =========================================================================
    // MODES AND ERRORS
    // =========================================================================

    #[test]
    fn test_diagnose_matches_short_circuit_prefix() {
        let (pipeline, _) = pipeline();
        let mut block = fixtures::valid_block();
        block.chain_root = "00".repeat(32);
        block.nonce = "tampered".into();

        let short = pipeline.validate(&block).unwrap();
        let full = pipeline.diagnose(&block).unwrap();

        assert_eq!(short.mode, ValidationMode::ShortCircuit);
        assert_eq!(full.outcomes[..short.evaluated()], short.outcomes[..]);
        assert_eq!(full.failed_stages(), vec![Stage::ChainRoot, Stage::Distance]);
    }

    #[test]
    fn test_configured_mode_drives_validate() {
        let (pipeline, _) = pipeline();
        let pipeline = pipeline.with_config(ValidationConfig {
            mode: ValidationMode::Exhaustive,
            record_metrics: false,
        });
        let mut block = fixtures::valid_block();
        block.blockchain_fingerprints_root = "nope".into();

        assert_eq!(pipeline.validate(&block).unwrap().evaluated(), Stage::ALL.len());
    }

    #[test]
    fn test_malformed_header_never_reaches_stages() {
        let (pipeline, observer) = pipeline();
        let mut block = fixtures::valid_block();
        block
            .blockchain_headers
            .get_mut("lsk")
            .unwrap()
            .push(ChildHeader::new("lsk", "", 8_100_001));

        let err = pipeline.is_valid_block(&block).unwrap_err();
        assert!(matches!(err, ValidationError::Malformed(_)));
        assert!(observer.evaluated_stages().is_empty());
        assert!(matches!(
            observer.events().as_slice(),
            [ValidationEvent::Malformed { .. }]
        ));
    }

    #[test]
    fn test_observer_sees_completed_report_last() {
        let (pipeline, observer) = pipeline();
        pipeline.diagnose(&fixtures::valid_block()).unwrap();

        let events = observer.events();
        assert_eq!(events.len(), Stage::ALL.len() + 1);
        assert!(matches!(events.last(), Some(ValidationEvent::Completed { .. })));
    }
}
