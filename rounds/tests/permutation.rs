extern crate rounds;

use rounds::{Permutation, PositionTable, RoundsError};

#[test]
fn parse_whitespace_and_commas() {
    let spaced: Permutation = "2 1 4 7 5 3 6 8".parse().unwrap();
    let listed: Permutation = "[2, 1, 4, 7, 5, 3, 6, 8]".parse().unwrap();
    let mixed: Permutation = " 2,1\n4 7,5\t3 6 8 ".parse().unwrap();
    assert_eq!(spaced, listed);
    assert_eq!(spaced, mixed);
    assert_eq!(spaced.as_slice(), &[2, 1, 4, 7, 5, 3, 6, 8]);
    assert_eq!(spaced.rounds(), 4);
}

#[test]
fn parse_empty() {
    let empty: Permutation = "".parse().unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.rounds(), 0);
    let brackets: Permutation = "[]".parse().unwrap();
    assert_eq!(brackets, empty);
}

#[test]
fn parse_rejects_bad_tokens() {
    match "1 two 3".parse::<Permutation>() {
        Err(RoundsError::Parse { token, .. }) => assert_eq!(token, "two"),
        other => panic!("unexpected: {:?}", other),
    }
    match "1 -2".parse::<Permutation>() {
        Err(RoundsError::Parse { token, .. }) => assert_eq!(token, "-2"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn parse_rejects_non_permutations() {
    assert_eq!(
        "1 1".parse::<Permutation>(),
        Err(RoundsError::Duplicate { value: 1, first: 0, second: 1 }),
    );
    assert_eq!(
        "3 1".parse::<Permutation>(),
        Err(RoundsError::OutOfRange { value: 3, index: 0, len: 2 }),
    );
}

#[test]
fn display_round_trips_through_parse() {
    let perm = Permutation::new(vec![3, 1, 2]).unwrap();
    assert_eq!(perm.to_string(), "[3, 1, 2]");
    assert_eq!(perm.to_string().parse::<Permutation>(), Ok(perm));
}

#[test]
fn identity_and_reversed() {
    assert_eq!(Permutation::identity(3).as_slice(), &[1, 2, 3]);
    assert_eq!(Permutation::reversed(3).as_slice(), &[3, 2, 1]);
    assert_eq!(Permutation::identity(7).rounds(), 1);
    assert_eq!(Permutation::reversed(7).rounds(), 7);
}

#[test]
fn position_table_lookups() {
    let table = PositionTable::build(&[2, 1, 4, 7, 5, 3, 6, 8]).unwrap();
    assert_eq!(table.len(), 8);
    assert_eq!(table.position(1), Some(1));
    assert_eq!(table.position(8), Some(7));
    assert_eq!(table.position(0), None);
    assert_eq!(table.position(9), None);
    assert_eq!(table[7], 3);
    assert_eq!(table.round_starts().collect::<Vec<_>>(), vec![1, 2, 4, 7]);
}

#[test]
fn permutation_positions_match_build() {
    let perm = Permutation::new(vec![5, 3, 1, 2, 4]).unwrap();
    assert_eq!(perm.positions(), PositionTable::build(perm.as_slice()).unwrap());
}

#[test]
fn swap_keeps_a_permutation() {
    let mut perm = Permutation::reversed(5);
    perm.swap(0, 4).unwrap();
    assert_eq!(perm.as_slice(), &[1, 4, 3, 2, 5]);
    assert!(PositionTable::build(perm.as_slice()).is_ok());
    perm.swap(2, 2).unwrap();
    assert_eq!(perm.as_slice(), &[1, 4, 3, 2, 5]);
    assert_eq!(perm.swap(5, 0), Err(RoundsError::SwapOutOfRange { index: 5, len: 5 }));
}

#[test]
fn conversions() {
    let perm = Permutation::try_from(vec![2, 1]).unwrap();
    let values: Vec<usize> = perm.clone().into();
    assert_eq!(values, vec![2, 1]);
    assert_eq!(perm.as_ref(), &[2, 1]);
    assert!(Permutation::try_from(vec![2, 2]).is_err());
}
