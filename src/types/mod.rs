//! Codec implementations for every supported shape.
//!
//! The set of shapes is closed: scalars (and fixed-size byte arrays), text,
//! sequences, tuples, maps, and records. Each shape lives in its own module;
//! the recursion between them bottoms out at the scalars.

pub mod map;
pub mod primitives;
pub mod record;
pub mod sequence;
pub mod text;
pub mod tuple;
