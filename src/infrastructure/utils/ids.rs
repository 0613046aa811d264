use chrono::Utc;

/// Returns a fresh identifier shaped `prefix_<random-hex>_<unix-millis>`.
/// Practically unique within a session; collision-freedom across
/// sessions is not a correctness requirement for this store.
pub fn create_id(prefix: &str) -> String {
    let random: u64 = rand::random();
    format!("{}_{:x}_{}", prefix, random, Utc::now().timestamp_millis())
}
