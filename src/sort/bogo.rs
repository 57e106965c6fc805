use rand::Rng;

use super::is_sorted;

/// Bogosort: shuffle the whole slice, check, repeat. Unbounded worst case,
/// O(n * n!) on average. Strictly a curiosity; be patient even at thirty
/// elements.
pub fn bogo<T: Ord>(values: &mut [T]) {
    if values.is_empty() {
        return;
    }

    let mut rng = rand::thread_rng();
    loop {
        for i in 0..values.len() {
            let j = rng.gen_range(0..values.len());
            values.swap(i, j);
        }
        if is_sorted(values) {
            return;
        }
    }
}
