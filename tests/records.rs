//! Integration tests for record declaration and nesting.

use binstream::{length, record, DecodeExt, Encode, EncodeSize, Error};
use std::collections::HashMap;

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct SimpleStruct {
        a: u32,
        b: u64,
        c: bool,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct NestedStruct {
        simple: SimpleStruct,
        value: u16,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct UnitStruct {}
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Comment {
        author: String,
        likes: u32,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    struct Post {
        title: String,
        comments: Vec<Comment>,
        views_by_day: HashMap<u16, u64>,
    }
}

#[test]
fn test_simple_round_trip() {
    let value = SimpleStruct {
        a: u32::MAX,
        b: 0,
        c: false,
    };
    let encoded = value.encode();
    assert_eq!(encoded.size(), 13);
    let decoded = SimpleStruct::decode(encoded).unwrap();
    assert_eq!(value, decoded);
}

#[test]
fn test_nested_round_trip() {
    let value = NestedStruct {
        simple: SimpleStruct {
            a: 1,
            b: 2,
            c: true,
        },
        value: 3,
    };
    let encoded = value.encode();
    assert_eq!(encoded.size(), 13 + 2);
    let decoded = NestedStruct::decode(encoded).unwrap();
    assert_eq!(value, decoded);
}

#[test]
fn test_unit_round_trip() {
    let value = UnitStruct {};
    assert_eq!(value.encode_size(), 0);
    let decoded = UnitStruct::decode(value.encode()).unwrap();
    assert_eq!(value, decoded);
}

// A record containing a sequence of records containing text: the recursion
// the codec must sustain without any external schema.
#[test]
fn test_record_sequence_text_recursion() {
    let post = Post {
        title: "release notes".into(),
        comments: vec![
            Comment {
                author: "ana".into(),
                likes: 2,
            },
            Comment {
                author: String::new(),
                likes: 0,
            },
        ],
        views_by_day: HashMap::from([(1, 10), (2, 25)]),
    };

    let encoded = post.encode();
    assert_eq!(encoded.size(), post.encode_size());
    let decoded = Post::decode(encoded).unwrap();
    assert_eq!(post, decoded);
}

#[test]
fn test_encoded_bytes_follow_declaration_order() {
    let comment = Comment {
        author: "ab".into(),
        likes: 0x0102,
    };
    let encoded = comment.encode();
    let bytes = encoded.as_slice();

    // author: length field then the bytes, then likes little-endian.
    assert_eq!(&bytes[..length::SIZE], &length::encode(2));
    assert_eq!(&bytes[length::SIZE..length::SIZE + 2], b"ab");
    assert_eq!(&bytes[length::SIZE + 2..], &[0x02, 0x01, 0x00, 0x00]);
}

#[test]
fn test_truncated_record_fails() {
    let value = SimpleStruct {
        a: 1,
        b: 2,
        c: true,
    };
    let encoded = value.encode();
    let bytes = encoded.as_slice();
    for cut in 0..bytes.len() {
        assert!(matches!(
            SimpleStruct::decode(&bytes[..cut]),
            Err(Error::EndOfBuffer)
        ));
    }
}

#[test]
fn test_record_as_tuple_component() {
    let value = (
        SimpleStruct {
            a: 9,
            b: 9,
            c: true,
        },
        "tail".to_string(),
    );
    let encoded = value.encode();
    let decoded = <(SimpleStruct, String)>::decode(encoded).unwrap();
    assert_eq!(value, decoded);
}
