use mcose_gen::random_balanced_sequence;
use mcose_seq::container::{ContainerType, ItemType};

#[test]
fn every_container_mode_yields_the_same_sequence() {
    let modes = [
        (ItemType::Number, ContainerType::List),
        (ItemType::Number, ContainerType::Tuple),
        (ItemType::Chr, ContainerType::Str),
        (ItemType::Chr, ContainerType::Tuple),
    ];

    let mut sequences = Vec::new();
    for (item_type, container_type) in modes {
        let (seq, _otc) = random_balanced_sequence(25, item_type, container_type, 42);
        sequences.push(seq);
    }

    for pair in sequences.windows(2) {
        assert_eq!(pair[0], pair[1], "container mode changed the decoded sequence");
    }
}

#[test]
fn larger_forest_round_trips_with_balanced_open_to_close() {
    use mcose_core::{Sequence, TokenKind};

    let (seq, open_to_close) =
        random_balanced_sequence(100, ItemType::Number, ContainerType::List, 7);
    assert_eq!(seq.len(), 200);

    let mut depth = 0i64;
    for tok in seq.iter() {
        match tok.kind {
            TokenKind::Open => {
                depth += 1;
                assert!(open_to_close.close_of(tok.id).is_some());
            }
            TokenKind::Close => depth -= 1,
        }
        assert!(depth >= 0, "sequence dipped below balance");
    }
    assert_eq!(depth, 0);
    let _: &Sequence = &seq;
}
