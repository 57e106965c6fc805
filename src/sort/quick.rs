/// Quicksort (partition-exchange): partition around the middle element's
/// value, recurse into both halves. Worst O(n²), average O(n log n).
pub fn quick<T: Ord + Clone>(values: &mut [T]) {
    if values.is_empty() {
        return;
    }
    sorting(values, 0, values.len() as isize - 1);
}

fn sorting<T: Ord + Clone>(values: &mut [T], left: isize, right: isize) {
    let mut i = left;
    let mut j = right;
    let pivot = values[((left + right) / 2) as usize].clone();

    while i <= j {
        while values[i as usize] < pivot {
            i += 1;
        }
        while values[j as usize] > pivot {
            j -= 1;
        }
        if i <= j {
            values.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    if left < j {
        sorting(values, left, j);
    }
    if i < right {
        sorting(values, i, right);
    }
}
