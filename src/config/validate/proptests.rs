//! Property-based tests for configuration validation

use super::error::ConfigError;
use super::validator::validate_config;
use crate::config::schema::*;
use proptest::prelude::*;

fn arb_dataset() -> impl Strategy<Value = DatasetKind> {
    prop_oneof![
        Just(DatasetKind::EightGaussians),
        Just(DatasetKind::TwentyFiveGaussians),
        Just(DatasetKind::SwissRoll),
    ]
}

fn arb_valid_config() -> impl Strategy<Value = TrainingConfig> {
    (
        1usize..1024,  // dim
        1usize..20,    // critic_iters
        1usize..4096,  // batch_size
        1usize..10_000, // iters
        0.0f32..100.0, // penalty_weight
        arb_dataset(),
    )
        .prop_map(|(dim, critic_iters, batch_size, iters, penalty_weight, dataset)| {
            TrainingConfig {
                dim,
                critic_iters,
                batch_size,
                iters,
                penalty_weight,
                dataset,
                ..Default::default()
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_config_passes(config in arb_valid_config()) {
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_zero_batch_size_fails(config in arb_valid_config()) {
        let mut config = config;
        config.batch_size = 0;
        prop_assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidBatchSize(0))
        ));
    }

    #[test]
    fn prop_negative_penalty_weight_fails(config in arb_valid_config(), weight in -100.0f32..-1e-3) {
        let mut config = config;
        config.penalty_weight = weight;
        prop_assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidPenaltyWeight(_))
        ));
    }
}
