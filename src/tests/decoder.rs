use super::Trickle;
use crate::{ByteOrder, DecodeError, Decoder, Kind};

fn decode_le<T: crate::Decode + Default>(bytes: &[u8]) -> Result<T, DecodeError> {
    let mut value = T::default();
    crate::decode(bytes, ByteOrder::LittleEndian, &mut value)?;
    Ok(value)
}

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn test_u32_byte_order() {
    let mut value = 0u32;
    crate::decode(&[1u8, 2, 3, 4][..], ByteOrder::BigEndian, &mut value).unwrap();
    assert_eq!(value, 0x01020304);
    crate::decode(&[1u8, 2, 3, 4][..], ByteOrder::LittleEndian, &mut value).unwrap();
    assert_eq!(value, 0x04030201);
}

#[test]
fn test_any_nonzero_byte_is_true() {
    assert!(!decode_le::<bool>(&[0]).unwrap());
    assert!(decode_le::<bool>(&[1]).unwrap());
    assert!(decode_le::<bool>(&[0x80]).unwrap());
}

#[test]
fn test_signed_and_platform_ints() {
    assert_eq!(decode_le::<i8>(&[0xFF]).unwrap(), -1);
    assert_eq!(decode_le::<i16>(&[0xFE, 0xFF]).unwrap(), -2);
    assert_eq!(decode_le::<isize>(&[0xFF; 8]).unwrap(), -1);
    assert_eq!(decode_le::<usize>(&[9, 0, 0, 0, 0, 0, 0, 0]).unwrap(), 9);
}

#[test]
fn test_floats() {
    assert_eq!(decode_le::<f32>(&[0, 0, 0x80, 0x3F]).unwrap(), 1.0);
    assert_eq!(
        decode_le::<f64>(&[0, 0, 0, 0, 0, 0, 0xF0, 0x3F]).unwrap(),
        1.0
    );
}

#[test]
fn test_u64_from_four_bytes_is_short_read() {
    let err = decode_le::<u64>(&[1, 2, 3, 4]).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::ShortRead {
            needed: 8,
            available: 4
        }
    ));
}

#[test]
fn test_empty_source_is_short_read() {
    let err = decode_le::<u8>(&[]).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::ShortRead {
            needed: 1,
            available: 0
        }
    ));
}

#[test]
fn test_trickling_source_still_decodes() {
    let bytes = [0x08u8, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01];
    let mut value = 0u64;
    crate::decode(Trickle::new(&bytes, 1), ByteOrder::LittleEndian, &mut value).unwrap();
    assert_eq!(value, 0x0102030405060708);
}

// =============================================================================
// Text
// =============================================================================

#[test]
fn test_text_framing() {
    let text: String = decode_le(&[2, 0, 0, 0, b'h', b'i']).unwrap();
    assert_eq!(text, "hi");
}

#[test]
fn test_empty_text() {
    let mut text = String::from("stale");
    crate::decode(&[0u8, 0, 0, 0][..], ByteOrder::LittleEndian, &mut text).unwrap();
    assert_eq!(text, "");
}

#[test]
fn test_truncated_text_leaves_destination_alone() {
    let mut text = String::from("stale");
    let err = crate::decode(&[5u8, 0, 0, 0, b'a'][..], ByteOrder::LittleEndian, &mut text)
        .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::ShortRead {
            needed: 5,
            available: 1
        }
    ));
    assert_eq!(text, "stale");
}

#[test]
fn test_invalid_utf8_text() {
    let err = decode_le::<String>(&[2, 0, 0, 0, 0xC3, 0x28]).unwrap_err();
    match err {
        DecodeError::InvalidText { source } => assert_eq!(source.into_bytes(), [0xC3, 0x28]),
        other => panic!("expected InvalidText, got {other:?}"),
    }
}

#[test]
fn test_raw_bytes_share_text_wire_form() {
    let raw: Vec<u8> = decode_le(&[2, 0, 0, 0, 0xC3, 0x28]).unwrap();
    assert_eq!(raw, [0xC3, 0x28]);
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn test_sequence_resized_to_decoded_count() {
    let mut items = vec![9u16; 5];
    let bytes = [3u8, 0, 0, 0, 1, 0, 2, 0, 3, 0];
    crate::decode(&bytes[..], ByteOrder::LittleEndian, &mut items).unwrap();
    assert_eq!(items, [1, 2, 3]);
}

#[test]
fn test_sequence_allocated_before_elements() {
    // Count says 3, only one element follows.
    let mut items: Vec<u16> = Vec::new();
    let bytes = [3u8, 0, 0, 0, 7, 0];
    let err = crate::decode(&bytes[..], ByteOrder::LittleEndian, &mut items).unwrap_err();
    assert!(matches!(err, DecodeError::ShortRead { .. }));
    assert_eq!(items, [7, 0, 0]);
}

#[test]
fn test_length_limit() {
    let bytes = [0u8, 0, 0x10, 0];
    let mut decoder = Decoder::new(&bytes[..], ByteOrder::BigEndian).with_max_len(1024);
    let mut items: Vec<u8> = Vec::new();
    let err = decoder.decode_into(&mut items).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::LengthLimit {
            kind: Kind::Sequence,
            len: 0x1000,
            limit: 1024
        }
    ));
    assert!(items.is_empty());
}

#[test]
fn test_length_limit_applies_to_text() {
    let bytes = [0u8, 0, 0, 9];
    let mut decoder = Decoder::new(&bytes[..], ByteOrder::BigEndian).with_max_len(8);
    let mut text = String::new();
    let err = decoder.decode_into(&mut text).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::LengthLimit {
            kind: Kind::Text,
            ..
        }
    ));
}

// =============================================================================
// Records
// =============================================================================

#[derive(crate::Encode, crate::Decode, Debug, Default, PartialEq)]
struct Header {
    version: u8,
    length: u32,
}

#[derive(crate::Encode, crate::Decode, Debug, Default, PartialEq)]
struct Message {
    header: Header,
    urgent: bool,
    body: String,
}

#[derive(crate::Decode, Debug, Default, PartialEq)]
struct Swapped {
    length: u32,
    version: u8,
}

#[test]
fn test_record_round_trip() {
    let message = Message {
        header: Header {
            version: 2,
            length: 300,
        },
        urgent: true,
        body: "ping".into(),
    };
    let bytes = crate::to_vec(ByteOrder::BigEndian, &message).unwrap();

    let mut decoded = Message::default();
    let read = crate::decode(&bytes[..], ByteOrder::BigEndian, &mut decoded).unwrap();
    assert_eq!(decoded, message);
    assert_eq!(read, bytes.len());
}

#[test]
fn test_reordered_fields_decode_wrong_values() {
    let bytes = crate::to_vec(
        ByteOrder::BigEndian,
        &Header {
            version: 1,
            length: 2,
        },
    )
    .unwrap();

    let mut swapped = Swapped::default();
    crate::decode(&bytes[..], ByteOrder::BigEndian, &mut swapped).unwrap();
    assert_eq!(
        swapped,
        Swapped {
            length: 0x01000000,
            version: 2
        }
    );
}

#[test]
fn test_failed_record_is_partially_populated() {
    let bytes = [7u8, 0, 0];
    let mut message = Message::default();
    let err = crate::decode(&bytes[..], ByteOrder::BigEndian, &mut message).unwrap_err();
    assert!(matches!(err, DecodeError::ShortRead { .. }));
    assert_eq!(message.header.version, 7);
    assert_eq!(message.header.length, 0);
    assert!(!message.urgent);
}

#[test]
fn test_bytes_read_and_into_inner() {
    let bytes = [1u8, 2, 3];
    let mut decoder = Decoder::new(&bytes[..], ByteOrder::LittleEndian);
    let mut a = 0u16;
    decoder.decode_into(&mut a).unwrap();
    assert_eq!(decoder.bytes_read(), 2);
    assert_eq!(decoder.into_inner(), [3]);
}
