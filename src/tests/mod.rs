mod test_growth;
mod test_tree;

/// Fixed seed shared by the deterministic tests.
pub const SEED: u64 = 128;

pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
