use bagdecode_core::{ByteOrder, Cursor, FieldError};

#[test]
fn reads_length_prefix_in_cursor_order() {
    let mut le = Cursor::new(vec![0x02, 0x00, 0x00, 0x00]);
    assert_eq!(le.read_length().expect("prefix"), 2);

    let mut be = Cursor::new(vec![0x00, 0x00, 0x00, 0x02]).with_order(ByteOrder::BigEndian);
    assert_eq!(be.read_length().expect("prefix"), 2);
    assert_eq!(be.order(), ByteOrder::BigEndian);
}

#[test]
fn negative_length_prefix_is_rejected() {
    let mut cursor = Cursor::new((-3i32).to_le_bytes().to_vec());
    let err = cursor.read_length().expect_err("negative prefix");
    assert_eq!(err, FieldError::InvalidLength(-3));
}

#[test]
fn take_advances_position_and_shares_bytes() {
    let mut cursor = Cursor::new(vec![1, 2, 3, 4, 5]);
    let head = cursor.take(2).expect("two bytes");
    assert_eq!(&head[..], &[1, 2]);
    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.remaining(), 3);
    assert!(!cursor.is_empty());

    let rest = cursor.take(3).expect("rest");
    assert_eq!(&rest[..], &[3, 4, 5]);
    assert!(cursor.is_empty());
}

#[test]
fn take_past_end_fails_without_consuming() {
    let mut cursor = Cursor::new(vec![1, 2, 3]);
    let err = cursor.take(4).expect_err("truncated");
    assert_eq!(
        err,
        FieldError::UnexpectedEof {
            needed: 4,
            available: 3
        }
    );
    assert_eq!(cursor.position(), 0);
}

#[test]
fn short_integer_read_reports_eof() {
    let mut cursor = Cursor::new(vec![1, 2]);
    let err = cursor.read_i32().expect_err("truncated");
    assert!(matches!(err, FieldError::UnexpectedEof { needed: 4, available: 2 }));
}

#[test]
fn set_order_applies_to_following_reads() {
    let mut cursor = Cursor::new(vec![0, 0, 0, 1, 0, 0, 0, 1]);
    assert_eq!(cursor.read_i32().expect("le"), 0x0100_0000);
    cursor.set_order(ByteOrder::BigEndian);
    assert_eq!(cursor.read_u32().expect("be"), 1);
}

#[test]
fn error_paths_collapse_into_one_dotted_path() {
    let leaf = FieldError::UnexpectedEof {
        needed: 4,
        available: 0,
    };
    let err = leaf.clone().at("x").at("[3]").at("points").at("cloud");
    match &err {
        FieldError::At { path, .. } => assert_eq!(path, "cloud.points[3].x"),
        other => panic!("expected path context, got {other:?}"),
    }
    assert_eq!(err.root_cause(), &leaf);
    assert_eq!(
        err.to_string(),
        "at cloud.points[3].x: unexpected end of buffer: needed 4 bytes, 0 remaining"
    );
}

#[test]
fn empty_segment_adds_no_context() {
    let err = FieldError::InvalidLength(-1).at("");
    assert_eq!(err, FieldError::InvalidLength(-1));
}
