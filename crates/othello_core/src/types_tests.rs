use super::*;

#[test]
fn test_side_values_negate() {
    for side in Side::ALL {
        assert_eq!(side.opponent().value(), -side.value());
        assert_eq!(side.opponent().opponent(), side);
        assert_eq!(Side::from_value(side.value()), Some(side));
    }
    assert_eq!(Side::from_value(0), None);
    assert_eq!(Side::from_value(2), None);
}

#[test]
fn test_cell_value_domain() {
    assert_eq!(Cell::from_value(0), Some(Cell::Empty));
    assert_eq!(Cell::from_value(1), Some(Cell::Black));
    assert_eq!(Cell::from_value(-1), Some(Cell::White));
    assert_eq!(Cell::from_value(3), None);
    assert_eq!(Cell::White.value(), -1);
    assert!(Cell::Black.is(Side::Black));
    assert!(!Cell::Empty.is(Side::White));
}

#[test]
fn test_move_notation() {
    let mv = Move::new(2, 3);
    assert_eq!(mv.to_string(), "d3");
    assert_eq!("d3".parse::<Move>().unwrap(), mv);
    assert_eq!("H8".parse::<Move>().unwrap(), Move::new(7, 7));
    assert!("i1".parse::<Move>().is_err());
    assert!("a9".parse::<Move>().is_err());
    assert!("a10".parse::<Move>().is_err());
}

#[test]
fn test_move_index() {
    assert_eq!(Move::new(0, 0).index(), 0);
    assert_eq!(Move::new(4, 5).index(), 37);
    assert_eq!(Move::from_index(37), Some(Move::new(4, 5)));
    assert_eq!(Move::from_index(64), None);
}

#[test]
fn test_side_parse() {
    assert_eq!("Black".parse::<Side>().unwrap(), Side::Black);
    assert_eq!("o".parse::<Side>().unwrap(), Side::White);
    assert!("red".parse::<Side>().is_err());
}
