use crate::ByteOrder;

#[test]
fn test_u32_big_endian_is_most_significant_first() {
    assert_eq!(ByteOrder::BigEndian.u32_to_bytes(0x01020304), [1, 2, 3, 4]);
    assert_eq!(ByteOrder::BigEndian.u32_from_bytes([1, 2, 3, 4]), 0x01020304);
}

#[test]
fn test_u32_little_endian_is_least_significant_first() {
    assert_eq!(ByteOrder::LittleEndian.u32_to_bytes(0x01020304), [4, 3, 2, 1]);
    assert_eq!(ByteOrder::LittleEndian.u32_from_bytes([4, 3, 2, 1]), 0x01020304);
}

#[test]
fn test_u16_and_u64_orders() {
    assert_eq!(ByteOrder::BigEndian.u16_to_bytes(0xABCD), [0xAB, 0xCD]);
    assert_eq!(ByteOrder::LittleEndian.u16_to_bytes(0xABCD), [0xCD, 0xAB]);
    assert_eq!(
        ByteOrder::BigEndian.u64_to_bytes(0x0102030405060708),
        [1, 2, 3, 4, 5, 6, 7, 8]
    );
    assert_eq!(
        ByteOrder::LittleEndian.u64_from_bytes([8, 7, 6, 5, 4, 3, 2, 1]),
        0x0102030405060708
    );
}

#[test]
fn test_floats_use_bit_pattern() {
    // 1.0f32 = 0x3F800000
    assert_eq!(ByteOrder::BigEndian.f32_to_bytes(1.0), [0x3F, 0x80, 0, 0]);
    assert_eq!(ByteOrder::LittleEndian.f32_to_bytes(1.0), [0, 0, 0x80, 0x3F]);

    // -2.0f64 = 0xC000000000000000
    assert_eq!(
        ByteOrder::BigEndian.f64_to_bytes(-2.0),
        [0xC0, 0, 0, 0, 0, 0, 0, 0]
    );
    assert_eq!(ByteOrder::BigEndian.f64_from_bytes([0xC0, 0, 0, 0, 0, 0, 0, 0]), -2.0);
}

#[test]
fn test_nan_payload_survives() {
    let nan = f32::from_bits(0x7FC0_0001);
    let bytes = ByteOrder::LittleEndian.f32_to_bytes(nan);
    let back = ByteOrder::LittleEndian.f32_from_bytes(bytes);
    assert_eq!(back.to_bits(), 0x7FC0_0001);
}
