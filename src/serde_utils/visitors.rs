// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use core::marker::PhantomData;
use serde::de;
use serde::de::{SeqAccess, Visitor};
use std::fmt::{self, Display};

/// Implement `Serialize` and `Deserialize` for a byte string type.
///
/// Valid UTF-8 serializes as a string, anything else as bytes.  For example:
///     serde_bytes_str!(Foo);
/// where `Foo: AsRef<[u8]> + TryFrom<Vec<u8>>`.
#[macro_export]
macro_rules! serde_bytes_str {
    ($id:ident) => {
        impl serde::Serialize for $id {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let bytes: &[u8] = self.as_ref();
                match std::str::from_utf8(bytes) {
                    Ok(s) => serializer.serialize_str(s),
                    Err(_) => serializer.serialize_bytes(bytes),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $id {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer.deserialize_byte_buf($crate::serde_utils::BytesVisitor::<Self>::default())
            }
        }
    };
}

/// Deserializes any type that can be built from owned bytes, accepting
/// strings, byte buffers and sequences of `u8`.
pub struct BytesVisitor<T>(PhantomData<T>);

impl<T> Default for BytesVisitor<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<'de, T: TryFrom<Vec<u8>, Error: Display>> Visitor<'de> for BytesVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or bytes")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_bytes(value.as_bytes())
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_byte_buf(value.into_bytes())
    }

    fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_byte_buf(value.to_vec())
    }

    fn visit_byte_buf<E>(self, value: Vec<u8>) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        T::try_from(value).map_err(|e| serde::de::Error::custom(e))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        self.visit_byte_buf(bytes)
    }
}
