/// Shaker (cocktail) sort: bubble passes that alternate direction, shrinking the unsorted window
/// from both ends. Each forward pass parks the largest value at the top of the window, each
/// backward pass parks the smallest at the bottom.
pub fn sort(arr: &mut [i32]) {
    if arr.len() <= 1 {
        return;
    }
    let mut start = 0;
    let mut end = arr.len() - 1;
    let mut index = start;
    while start < end {
        while index < end {
            if arr[index] > arr[index + 1] {
                arr.swap(index, index + 1);
            }
            index += 1;
        }
        end -= 1;
        index -= 1;
        while index > start {
            if arr[index] < arr[index - 1] {
                arr.swap(index, index - 1);
            }
            index -= 1;
        }
        start += 1;
        index += 1;
    }
}
