//! Names of the objects the suite creates in the engine.

pub const TEST_DC_NAME: &str = "test-dc";
pub const TEST_CLUSTER_NAME: &str = "test-cluster";
