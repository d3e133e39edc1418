// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use core::marker::PhantomData;
use serde::de;
use serde::de::Visitor;
use std::fmt;

/// Implement `Serialize` (as a string) and `Deserialize` (from a string or an
/// integer) for a `String` wrapper tuple. For example:
///     serde_id_str!(GroupId);
#[macro_export]
macro_rules! serde_id_str {
    ($id:ident) => {
        impl serde::Serialize for $id {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $id {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer
                    .deserialize_any($crate::serde_utils::IdVisitor::<Self>::default())
            }
        }
    };
}

/// Deserializes a wrapper around `String` from either a JSON string or a JSON
/// integer, since ids arrive both ways (`"123"` and `123`).
pub struct IdVisitor<T>(PhantomData<T>);

impl<T> Default for IdVisitor<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<'de, T: From<String>> Visitor<'de> for IdVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or an integer id")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(T::from(value.trim().to_string()))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(T::from(value.to_string()))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(T::from(value.to_string()))
    }
}
