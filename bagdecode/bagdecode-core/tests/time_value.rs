use bagdecode_core::{ByteOrder, Duration, FieldError, Time, Value};

#[test]
fn signed_halves_are_corrected_to_unsigned() {
    let t = Time::from_signed_pair(-1, 500_000_000);
    assert_eq!(t.sec, u32::MAX);
    assert_eq!(u64::from(t.sec), (1u64 << 32) - 1);
    assert_eq!(t.nsec, 500_000_000);

    let t = Time::from_signed_pair(i32::MIN, 0);
    assert_eq!(t.sec, 1 << 31);
}

#[test]
fn non_negative_halves_are_unchanged() {
    assert_eq!(Time::from_signed_pair(12, 34), Time::new(12, 34));
}

#[test]
fn time_reports_seconds_and_nanos() {
    let t = Time::new(3, 250_000_000);
    assert_eq!(t.as_nanos(), 3_250_000_000);
    assert!((t.as_secs_f64() - 3.25).abs() < 1e-12);
    assert_eq!(t.to_string(), "3.250000000");
}

#[cfg(feature = "chrono")]
#[test]
fn time_converts_to_datetime_with_nanos() {
    use chrono::Timelike;

    let dt = Time::new(1_700_000_000, 123_456_789)
        .to_datetime()
        .expect("in range");
    assert_eq!(dt.timestamp(), 1_700_000_000);
    assert_eq!(dt.nanosecond(), 123_456_789);

    let carried = Time::new(10, 1_500_000_000).to_datetime().expect("in range");
    assert_eq!(carried.timestamp(), 11);
    assert_eq!(carried.nanosecond(), 500_000_000);
}

#[test]
fn duration_is_seconds_plus_fraction() {
    assert!((Duration::new(2, 500_000_000).as_secs_f64() - 2.5).abs() < 1e-12);
    assert!((Duration::new(-1, 0).as_secs_f64() + 1.0).abs() < 1e-12);
}

#[cfg(feature = "chrono")]
#[test]
fn duration_converts_to_time_delta() {
    let delta = Duration::new(1, 250).to_chrono();
    assert_eq!(delta.num_nanoseconds(), Some(1_000_000_250));
}

#[test]
fn byte_order_reads_differ_for_multibyte_values() {
    let b = [0x01, 0x00, 0x00, 0x00];
    assert_eq!(ByteOrder::LittleEndian.read_i32(b), 1);
    assert_eq!(ByteOrder::BigEndian.read_i32(b), 0x0100_0000);
    assert_eq!(ByteOrder::default(), ByteOrder::LittleEndian);
    assert_eq!(ByteOrder::BigEndian.to_string(), "big-endian");
}

#[test]
fn value_accessors_check_variant() {
    let value = Value::Struct(vec![
        ("id".to_string(), Value::U32(7)),
        ("name".to_string(), Value::string("lidar")),
    ]);
    assert_eq!(value.get("id").expect("id").try_u64().expect("u64"), 7);
    assert_eq!(value.get("name").expect("name").try_str().expect("str"), "lidar");
    assert!(value.get("missing").is_none());

    let err = Value::F32(1.0).try_str().expect_err("mismatch");
    assert_eq!(err, FieldError::type_mismatch("F32", "String"));
}

#[test]
fn value_widens_integers_and_floats() {
    assert_eq!(Value::I16(-4).try_i64().expect("i64"), -4);
    assert_eq!(Value::U32(u32::MAX).try_i64().expect("i64"), i64::from(u32::MAX));
    assert!(Value::U64(1).try_i64().is_err());
    assert!((Value::F32(0.5).try_f64().expect("f64") - 0.5).abs() < f64::EPSILON);
}

#[test]
fn value_accessors_for_bool_bytes_and_time() {
    assert!(Value::Bool(true).try_bool().expect("bool"));
    assert_eq!(
        Value::Bytes(vec![1u8, 2].into()).try_bytes().expect("bytes"),
        &[1, 2]
    );
    assert_eq!(
        Value::Time(Time::new(5, 6)).try_time().expect("time"),
        Time::new(5, 6)
    );
    assert_eq!(
        Value::Duration(Duration::new(-1, 3)).try_duration().expect("duration"),
        Duration::new(-1, 3)
    );

    assert_eq!(
        Value::U8(1).try_bool().expect_err("mismatch"),
        FieldError::type_mismatch("U8", "Bool")
    );
    assert!(Value::string("x").try_bytes().is_err());
    assert!(Value::Duration(Duration::default()).try_time().is_err());
    assert!(Value::Time(Time::default()).try_duration().is_err());
}
