//! Print the combinations for the classic sample input.
//!
//! Expected: [[1, 2], [4, 5], [5, 6], [0, 1, 4], [0, 1, 6]]

use marksum::finder::{combination_values, find_combinations};

fn main() {
    let elements = [8, 91, 9, 10, 1, 99, 1, 103];
    let combos = find_combinations(100, &elements).expect("sample input is valid");
    println!("{combos:?}");
    for c in &combos {
        println!("  {c:?} -> {:?}", combination_values(&elements, c));
    }
}
