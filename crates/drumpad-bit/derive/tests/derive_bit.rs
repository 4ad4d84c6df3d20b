use drumpad_bit_derive::Bit;
use drumpad_bit_mask::{Bitable, Bitmask};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Bit)]
enum Pad {
    Don,
    Ka,
    Rim,
}

#[test]
fn bits_follow_declaration_order() {
    assert_eq!(Pad::Don.bit(), 0b001);
    assert_eq!(Pad::Ka.bit(), 0b010);
    assert_eq!(Pad::Rim.bit(), 0b100);
    assert_eq!(Pad::Rim.index(), 2);
}

#[test]
fn from_index_is_inverse_of_index() {
    for pad in Pad::ALL {
        assert_eq!(Pad::from_index(pad.index()), Some(pad));
    }
    assert_eq!(Pad::from_index(3), None);
}

#[test]
fn all_and_count_cover_every_variant() {
    assert_eq!(Pad::COUNT, 3);
    assert_eq!(Pad::ALL, [Pad::Don, Pad::Ka, Pad::Rim]);
}

#[test]
fn derived_enum_works_in_bitmask() {
    let mask = Bitmask::new(&[Pad::Rim, Pad::Don]);
    assert_eq!(mask.iter().collect::<Vec<_>>(), vec![Pad::Don, Pad::Rim]);
}
