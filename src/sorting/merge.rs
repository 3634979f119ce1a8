/// Merge sort: recursively sort each half, then interleave the two sorted halves through an
/// auxiliary buffer and copy the result back.
pub fn sort(arr: &mut [i32]) {
    if arr.len() <= 1 {
        return;
    }

    let split = arr.len() / 2;
    {
        let (left, right) = arr.split_at_mut(split);
        sort(left);
        sort(right);
    }

    let mut buffer = Vec::with_capacity(arr.len());
    {
        let (left, right) = arr.split_at(split);
        let (mut l, mut r) = (0, 0);
        while l < left.len() && r < right.len() {
            if left[l] < right[r] {
                buffer.push(left[l]);
                l += 1;
            } else {
                buffer.push(right[r]);
                r += 1;
            }
        }
        buffer.extend_from_slice(&left[l..]);
        buffer.extend_from_slice(&right[r..]);
    }
    arr.copy_from_slice(&buffer);
}
