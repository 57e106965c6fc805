/// Heapsort: build a max-heap by sifting the upper half down, then
/// repeatedly swap the heap's top to the back and re-sift. O(n log n) in
/// every case.
pub fn heap<T: Ord>(values: &mut [T]) {
    if values.is_empty() {
        return;
    }

    for i in (0..values.len() / 2).rev() {
        sift_down(values, i, values.len() - 1);
    }

    for i in (1..values.len()).rev() {
        values.swap(0, i);
        sift_down(values, 0, i - 1);
    }
}

fn sift_down<T: Ord>(values: &mut [T], mut root: usize, bottom: usize) {
    while root * 2 <= bottom {
        let max_child = if root * 2 == bottom {
            root * 2
        } else if values[root * 2] > values[root * 2 + 1] {
            root * 2
        } else {
            root * 2 + 1
        };

        if values[root] < values[max_child] {
            values.swap(root, max_child);
            root = max_child;
        } else {
            break;
        }
    }
}
