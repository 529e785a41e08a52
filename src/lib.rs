//! Serialize structured data and exchange it over files and sockets.
//!
//! # Overview
//!
//! A binary serialization library built around three operations that must
//! agree byte-for-byte: computing a value's encoded size, encoding it into
//! a buffer of exactly that size, and decoding it back. A [`Stream`]
//! composes the codec with a blocking byte [`transport`] (a local file, a
//! TCP connection, or an in-memory pair for tests) and exchanges values as
//! length-prefixed messages.
//!
//! # Supported shapes
//!
//! - Scalars: `u8`–`u128`, `i8`–`i128`, `f32`, `f64`, `bool`, and `[u8; N]`
//! - Text: `String`
//! - Sequences: `Vec<T>` and [`bytes::Bytes`]
//! - Tuples up to arity 12
//! - Maps: `HashMap<K, V>`
//! - Records declared with [`record!`], serialized field-by-field in
//!   declaration order
//!
//! Every variable-length shape is self-describing: a fixed 8-byte
//! little-endian length field precedes its payload, so nested values decode
//! from the bytes alone. The outer value's shape is not tagged; the caller
//! decodes into a statically known type.
//!
//! # Example
//!
//! ```
//! use binstream::{record, transport::mocks, Stream};
//!
//! record! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Entry {
//!         pub id: u32,
//!         pub name: String,
//!         pub tags: Vec<String>,
//!     }
//! }
//!
//! let (left, right) = mocks::pair();
//! let mut sender = Stream::new(left);
//! let mut receiver = Stream::new(right);
//!
//! let entry = Entry {
//!     id: 7,
//!     name: "abc".into(),
//!     tags: vec!["x".into(), "y".into()],
//! };
//! sender.push(&entry).unwrap();
//! let pulled: Entry = receiver.pull().unwrap();
//! assert_eq!(entry, pulled);
//! ```
//!
//! Values can also be encoded and decoded without a stream:
//!
//! ```
//! use binstream::{DecodeExt, Encode, EncodeSize};
//!
//! let value = (42u32, "hi".to_string());
//! let encoded = value.encode();
//! assert_eq!(encoded.size(), value.encode_size());
//! let decoded = <(u32, String)>::decode(encoded).unwrap();
//! assert_eq!(value, decoded);
//! ```

pub mod buffer;
pub mod codec;
pub mod error;
pub mod length;
pub mod stream;
pub mod transport;
pub mod types;
pub mod util;

// Re-export for use by the `record!` macro.
pub use bytes;

// Re-export main types and traits
pub use buffer::Buffer;
pub use codec::{
    Codec, Decode, DecodeExt, Encode, EncodeFixed, EncodeSize, FixedSize, Read, ReadExt, Write,
};
pub use error::Error;
pub use stream::Stream;
pub use transport::{Local, Mode, Tcp, Transport};
