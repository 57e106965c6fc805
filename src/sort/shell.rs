/// Shellsort with the default starting gap of 3.
pub fn shell<T: Ord>(values: &mut [T]) {
    shell_with_gap(values, 3);
}

/// Shellsort: insertion sort over elements `gap` apart, halving the gap
/// (N/2^k sequence) each round until it reaches 1. Performance depends
/// entirely on the gap sequence.
pub fn shell_with_gap<T: Ord>(values: &mut [T], mut gap: usize) {
    while gap > 0 {
        for i in 0..values.len() {
            let mut j = i;
            while j >= gap && values[j - gap] > values[j] {
                values.swap(j - gap, j);
                j -= gap;
            }
        }

        gap = if gap / 2 != 0 {
            gap / 2
        } else if gap == 1 {
            0
        } else {
            1
        };
    }
}
