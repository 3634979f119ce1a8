/// Gnome sort with teleportation: walk forward while the pair behind is ordered, swap backwards
/// while it isn't, and remember the furthest point reached so the walk can jump straight back
/// there instead of re-checking the sorted prefix.
pub fn sort(arr: &mut [i32]) {
    if arr.len() <= 1 {
        return;
    }
    let mut i = 1;
    let mut anchor = i;
    while i < arr.len() {
        if i == 0 || arr[i] >= arr[i - 1] {
            if i < anchor {
                anchor += 1;
                i = anchor;
            } else {
                i += 1;
                anchor = i;
            }
        } else {
            arr.swap(i, i - 1);
            i -= 1;
        }
    }
}
