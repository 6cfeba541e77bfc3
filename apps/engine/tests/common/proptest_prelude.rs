// Proptest prelude for integration tests; see engine-test-support for the env knobs.

pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    engine_test_support::proptest_prelude::proptest_prelude_config()
}
