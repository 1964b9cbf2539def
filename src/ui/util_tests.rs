#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

#[test]
fn test_format_amount_small() {
    assert_eq!(format_amount(dec!(4.50)), "$4.50");
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_thousands() {
    assert_eq!(format_amount(dec!(1234.5)), "$1,234.50");
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-975.51)), "-$975.51");
}

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate("Coffee", 10), "Coffee");
    assert_eq!(truncate("Coffee", 6), "Coffee");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Groceries and sundries", 10), "Groceries…");
}

#[test]
fn test_truncate_zero_width() {
    assert_eq!(truncate("Coffee", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    let s = "café au lait végétal";
    let out = truncate(s, 8);
    assert_eq!(out.chars().count(), 8);
    assert!(out.ends_with('…'));
}

#[test]
fn test_scroll_down_and_up() {
    let mut index = 0;
    let mut scroll = 0;

    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);

    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 4);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let mut index = 1;
    let mut scroll = 0;
    scroll_down(&mut index, &mut scroll, 2, 5);
    scroll_down(&mut index, &mut scroll, 2, 5);
    assert_eq!(index, 1);
}

#[test]
fn test_scroll_to_top_and_bottom() {
    let mut index = 7;
    let mut scroll = 5;

    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));

    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!(index, 9);
    assert_eq!(scroll, 6);

    scroll_to_bottom(&mut index, &mut scroll, 0, 4);
    assert_eq!(index, 9);
}

#[test]
fn test_scroll_on_empty_list() {
    let mut index = 0;
    let mut scroll = 0;
    scroll_down(&mut index, &mut scroll, 0, 5);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}
