//! Fuzz target for cell wrapping.
//!
//! Wrapping arbitrary text to arbitrary widths must never panic, must keep
//! every non-space character and must fill the column when it is wide
//! enough for the padding.

#![no_main]

use arbitrary::Arbitrary;
use gridtable::{Align, Cell};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    width: u8,
    indent: u8,
    align: u8,
}

fuzz_target!(|input: Input<'_>| {
    let align = match input.align % 3 {
        0 => Align::Left,
        1 => Align::Center,
        _ => Align::Right,
    };
    let width = usize::from(input.width);
    let cell = Cell::new(input.text)
        .align(align)
        .newline_indent(usize::from(input.indent % 8));
    let lines = cell.wrap_lines(width);

    let kept: String = lines.concat().chars().filter(|c| *c != ' ').collect();
    let given: String = input
        .text
        .chars()
        .filter(|c| *c != ' ' && *c != '\n')
        .collect();
    assert_eq!(kept, given);

    if width >= cell.floor_width() {
        for line in &lines {
            assert_eq!(line.chars().count(), width);
        }
    }
});
