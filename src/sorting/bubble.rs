/// Bubble sort: repeated adjacent-swap passes with a shrinking upper boundary.
///
/// Each pass floats the largest remaining value to the end of the unsorted region, so the
/// boundary moves down one slot per pass.
pub fn sort(arr: &mut [i32]) {
    if arr.len() <= 1 {
        return;
    }
    let mut end = arr.len() - 1;
    while end > 0 {
        let mut index = 0;
        while index < end {
            if arr[index] > arr[index + 1] {
                arr.swap(index, index + 1);
            }
            index += 1;
        }
        end -= 1;
    }
}
