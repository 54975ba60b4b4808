#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quire_reorder::{MoveDirection, ReorderableList, is_permutation_of};

#[derive(Debug, Arbitrary)]
enum Op {
    Start(u8),
    Enter(u8),
    Leave,
    Drop(u8),
    End,
    Up(u8),
    Down(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    len: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    // Indices are u8 so roughly a third of them overshoot a short list.
    let len = usize::from(input.len % 24);
    let original: Vec<usize> = (0..len).collect();
    let mut list = ReorderableList::new(original.clone());

    for op in input.ops.into_iter().take(1024) {
        match op {
            Op::Start(index) => list.drag_start(usize::from(index)),
            Op::Enter(index) => list.drag_enter(usize::from(index)),
            Op::Leave => list.drag_leave(),
            Op::Drop(index) => list.drop(usize::from(index)),
            Op::End => list.drag_end(),
            Op::Up(index) => list.move_item(usize::from(index), MoveDirection::Up),
            Op::Down(index) => list.move_item(usize::from(index), MoveDirection::Down),
        };

        assert_eq!(list.len(), len, "reorder changed the list length");
        assert!(is_permutation_of(&original, list.items()));
    }
});
