use classic_lib::collections::linked::Queue;
use classic_lib::collections::tree::RedBlackTree;
use classic_lib::sorting;

fn main() {
    println!("[Tree Sort]\n");

    let mut arr = [
        64, 88, 49, 78, 99, 58, 52, 51, 36, 23, 16, 67, 14, 21, 55, 46, 19, 73, 12, 33, 44, 66,
        32, 85, 71, 45, 24, 17, 40, 27, 18, 39, 59, 38, 97, 63, 83, 87, 6, 20, 56, 50, 43, 91,
        34, 76, 31, 22, 28, 1,
    ];
    sorting::tree::sort(&mut arr);
    println!("{arr:?}");

    println!("\n[Red-Black Tree]\n");

    let mut tree = RedBlackTree::new();
    for value in [11, 2, 14, 15, 1, 7, 5, 8, 4] {
        tree.insert(value);
    }

    print!("in:   ");
    tree.traverse_in_order(|value| print!("{value} "));
    println!();

    print!("out:  ");
    tree.traverse_out_order(|value| print!("{value} "));
    println!();

    print!("pre:  ");
    tree.traverse_pre_order(|value| print!("{value} "));
    println!();

    print!("post: ");
    tree.traverse_post_order(|value| print!("{value} "));
    println!();

    println!("{tree:?}");

    println!("\n[Queue]\n");

    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    println!("{queue}");
    println!("dequeued: {:?}", queue.dequeue());
    println!("peek:     {:?}", queue.peek());
}
