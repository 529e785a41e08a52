//! Codec implementation for key-value maps.
//!
//! A map encodes as an entry count followed by each key/value pair in
//! iteration order. Iteration order is not stable across runs, so two
//! encodings of the same map may differ byte-for-byte while decoding to
//! equal maps. Decoding reads the count and inserts each pair; a repeated
//! key overwrites the earlier entry.

use crate::{length, EncodeSize, Error, Read, Write};
use bytes::{Buf, BufMut};
use std::{collections::HashMap, hash::Hash};

impl<K: Write, V: Write> Write for HashMap<K, V> {
    #[inline]
    fn write(&self, buf: &mut impl BufMut) {
        length::write(self.len(), buf);
        for (key, value) in self {
            key.write(buf);
            value.write(buf);
        }
    }
}

impl<K: EncodeSize, V: EncodeSize> EncodeSize for HashMap<K, V> {
    #[inline]
    fn encode_size(&self) -> usize {
        length::SIZE
            + self
                .iter()
                .map(|(key, value)| key.encode_size() + value.encode_size())
                .sum::<usize>()
    }
}

// Keys and values share the configuration type, like tuple components.
impl<Cfg: Clone, K: Read<Cfg> + Eq + Hash, V: Read<Cfg>> Read<Cfg> for HashMap<K, V> {
    #[inline]
    fn read_cfg(buf: &mut impl Buf, cfg: Cfg) -> Result<Self, Error> {
        let len = length::read(buf)?;
        if len > buf.remaining() {
            return Err(Error::InvalidLength(len));
        }
        let mut map = HashMap::with_capacity(len);
        for _ in 0..len {
            let key = K::read_cfg(buf, cfg.clone())?;
            let value = V::read_cfg(buf, cfg.clone())?;
            map.insert(key, value);
        }
        Ok(map)
    }
}
