// Proptest prelude for domain unit tests; shares the workspace configuration.

pub fn proptest_config() -> proptest::prelude::ProptestConfig {
    engine_test_support::proptest_prelude::proptest_prelude_config()
}
