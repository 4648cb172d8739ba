// Copyright 2025 bakri (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! YAML loading for sheets
//!
//! Builds a `serde_yaml::Value` with the loading rules sheets are written
//! against:
//! - a repeated mapping key keeps its first position and its last value
//! - `<<` merge keys are expanded, explicit keys winning over merged ones
//! - tags are dropped, so `!text Save` loads as the string `Save`
//!
//! `serde_yaml`'s own `Value` rejects duplicate keys outright, so loading
//! goes through a visitor that inserts into the mapping and overwrites.

use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess};
use serde_yaml::{Mapping, Number, Value};
use std::fmt;

/// Parses `content` into a document, applying duplicate-key and merge rules
///
/// # Errors
///
/// Returns the `serde_yaml` error for malformed YAML or an invalid merge
/// (a `<<` value that is not a mapping or list of mappings).
pub fn load(content: &str) -> Result<Value, serde_yaml::Error> {
    let Loaded(mut document) = serde_yaml::from_str(content)?;
    document.apply_merge()?;
    Ok(document)
}

/// A value deserialised with last-wins duplicate keys
struct Loaded(Value);

impl<'de> Deserialize<'de> for Loaded {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LoadedVisitor).map(Loaded)
    }
}

struct LoadedVisitor;

impl<'de> de::Visitor<'de> for LoadedVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(Number::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(Number::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(Number::from(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Loaded::deserialize(deserializer).map(|Loaded(value)| value)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(Loaded(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut mapping = Mapping::new();
        while let Some((Loaded(key), Loaded(value))) = map.next_entry()? {
            // insert keeps the first position and replaces the value
            mapping.insert(key, value);
        }
        Ok(Value::Mapping(mapping))
    }

    fn visit_enum<A>(self, data: A) -> Result<Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        // serde_yaml hands tagged nodes over as single-variant enums
        let (_tag, contents): (String, _) = data.variant()?;
        contents.newtype_variant::<Loaded>().map(|Loaded(value)| value)
    }
}
