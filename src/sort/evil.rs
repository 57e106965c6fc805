use super::is_sorted;

/// The pessimal sort: enumerate every possible ordering (each one many
/// times over), never short-cutting, and write the result only when a full
/// permutation happens to be sorted. Bounded above by O(n^(2n)). Kept as
/// the cautionary exhibit it was written to be.
pub fn evil<T: Ord + Clone>(values: &mut [T]) {
    let snapshot = values.to_vec();
    rec_sort(&snapshot, &[], values);
}

fn rec_sort<T: Ord + Clone>(first: &[T], second: &[T], result: &mut [T]) {
    if first.is_empty() && is_sorted(second) {
        for (i, v) in second.iter().enumerate() {
            result[i] = v.clone();
        }
        return;
    }

    for i in 0..first.len() {
        for j in 0..=second.len() {
            let mut t1 = Vec::with_capacity(first.len() - 1);
            t1.extend_from_slice(&first[..i]);
            t1.extend_from_slice(&first[i + 1..]);

            let mut t2 = Vec::with_capacity(second.len() + 1);
            t2.extend_from_slice(&second[..j]);
            t2.push(first[i].clone());
            t2.extend_from_slice(&second[j..]);

            rec_sort(&t1, &t2, result);
        }
    }
}
