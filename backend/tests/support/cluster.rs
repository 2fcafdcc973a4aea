//! Access to the process-wide embedded PostgreSQL cluster.
//!
//! Environments that cannot start a cluster may set `SKIP_TEST_CLUSTER` to a
//! truthy value; setup failures then skip the suite instead of failing it.

use std::time::Duration;

use pg_embedded_setup_unpriv::{BootstrapResult, ClusterHandle};

const SHARED_CLUSTER_RETRIES: usize = 5;
const SHARED_CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Fixed superuser password so a reused data directory still authenticates.
const STABLE_PASSWORD: &str = "qa_board_embedded_test";

/// Returns true when `SKIP_TEST_CLUSTER` is "1", "true" or "yes"
/// (case-insensitive).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip with a marker when `SKIP_TEST_CLUSTER` is set, otherwise panic with
/// `reason`.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Variables the bootstrap needs that the caller has not already provided.
///
/// `PG_PASSWORD` is pinned because the embedded settings otherwise pick a
/// random password each run. `PG_EMBEDDED_WORKER` points root runs at the
/// crate's `pg_worker` binary.
fn bootstrap_environment() -> Vec<(&'static str, Option<&'static str>)> {
    [
        ("PG_PASSWORD", STABLE_PASSWORD),
        ("PG_EMBEDDED_WORKER", env!("CARGO_BIN_EXE_pg_worker")),
    ]
    .into_iter()
    .filter(|(key, _)| std::env::var_os(key).is_none())
    .map(|(key, value)| (key, Some(value)))
    .collect()
}

/// The shared cluster, bootstrapping it on first use.
///
/// Bootstrap runs with the extra variables from [`bootstrap_environment`]
/// held under an `env_lock` guard and is retried a few times because
/// concurrent test binaries can race on the data directory.
pub fn shared_cluster() -> BootstrapResult<&'static ClusterHandle> {
    let mut attempt = 1;
    loop {
        let outcome = {
            let _env = env_lock::lock_env(bootstrap_environment());
            pg_embedded_setup_unpriv::test_support::shared_cluster_handle()
        };
        match outcome {
            Ok(handle) => return Ok(handle),
            Err(error) if attempt >= SHARED_CLUSTER_RETRIES => return Err(error),
            Err(_) => {
                std::thread::sleep(SHARED_CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
        }
    }
}
