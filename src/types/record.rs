//! Records: aggregate types serialized field-by-field.
//!
//! A record's encoding is the concatenation of its fields' encodings in
//! declaration order, with no prefix of its own. The codec never inspects a
//! struct's layout; it consumes an ordered field list declared once with
//! [`record!`], which generates the [`Write`](crate::Write),
//! [`EncodeSize`](crate::EncodeSize), and [`Read`](crate::Read)
//! implementations the same way a derive macro would.
//!
//! Every field type must itself be codec-capable with no read
//! configuration. Records nest freely: a field may be another record, a
//! sequence of records, and so on.
//!
//! # Example
//!
//! ```
//! use binstream::{record, DecodeExt, Encode};
//!
//! record! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Entry {
//!         pub id: u32,
//!         pub name: String,
//!     }
//! }
//!
//! let entry = Entry { id: 7, name: "abc".into() };
//! let decoded = Entry::decode(entry.encode()).unwrap();
//! assert_eq!(entry, decoded);
//! ```

/// Declares a struct together with its ordered serializable field list.
///
/// Expands to the struct definition plus `Write`, `EncodeSize`, and `Read`
/// implementations that visit each field in declaration order. Zero-field
/// records are valid and encode to zero bytes.
#[macro_export]
macro_rules! record {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fattr:meta])* $fvis:vis $field:ident : $ftype:ty ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        $vis struct $name {
            $( $(#[$fattr])* $fvis $field : $ftype ),*
        }

        impl $crate::Write for $name {
            fn write(&self, _buf: &mut impl $crate::bytes::BufMut) {
                $( $crate::Write::write(&self.$field, _buf); )*
            }
        }

        impl $crate::EncodeSize for $name {
            fn encode_size(&self) -> usize {
                0 $( + $crate::EncodeSize::encode_size(&self.$field) )*
            }
        }

        impl $crate::Read for $name {
            fn read_cfg(
                _buf: &mut impl $crate::bytes::Buf,
                _cfg: (),
            ) -> ::core::result::Result<Self, $crate::Error> {
                Ok(Self {
                    $( $field: $crate::ReadExt::read(_buf)? ),*
                })
            }
        }
    };
}
