// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Discriminated unions in JSON payloads.
//!
//! Some models are unions of several concrete types. The JSON object carries
//! a discriminator (for example `"type": "iscsi"`) that selects the concrete
//! type. The generated code represents these unions as Rust enums with one
//! branch per known variant, plus an `Unknown` branch holding a [Holder].
//!
//! Decoding is done in two phases:
//! 1. The JSON object is captured verbatim in a [Holder], together with the
//!    discriminator value and the attributes shared by all the variants.
//! 2. The holder is resolved into the concrete variant selected by the
//!    discriminator. If the discriminator is absent, empty, or not known to
//!    this version of the client, the holder itself is the result.
//!
//! The holder keeps the original bytes, so unknown variants are encoded
//! exactly as they were received.
//!
//! Encoding a known variant wraps it in a [Tagged] envelope that writes the
//! discriminator before the variant fields.

use serde::de::{DeserializeOwned, Error as _, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

/// Implemented by the generated discriminated unions.
pub trait Discriminated: Sized {
    /// The name of the union, used in logs and error messages.
    const NAME: &'static str;

    /// The JSON key holding the discriminator, such as `type`.
    const DISCRIMINATOR: &'static str;

    /// The attributes shared by all the variants.
    type Shell: DeserializeOwned + Clone + Default + std::fmt::Debug + PartialEq;

    /// Decodes the variant selected by `discriminator`.
    ///
    /// Returns `None` if the discriminator is not known.
    fn decode_variant(discriminator: &str, raw: &RawValue) -> Option<serde_json::Result<Self>>;

    /// Wraps an unresolved value.
    fn unknown(holder: Holder<Self>) -> Self;
}

/// The unresolved form of a discriminated union.
///
/// Retains the discriminator, the original JSON bytes, and the attributes
/// shared by all the variants.
pub struct Holder<T: Discriminated> {
    discriminator: String,
    raw: Box<RawValue>,
    shell: T::Shell,
}

impl<T: Discriminated> Holder<T> {
    /// Captures a JSON object.
    ///
    /// Fails if the input is not a JSON object, or if the discriminator or
    /// the shared attributes do not have the expected types.
    pub fn from_raw(raw: Box<RawValue>) -> serde_json::Result<Self> {
        let mut de = serde_json::Deserializer::from_str(raw.get());
        let discriminator = (&mut de)
            .deserialize_map(DiscriminatorVisitor::<T>::new())?
            .unwrap_or_default();
        let shell = serde_json::from_str::<T::Shell>(raw.get())?;
        Ok(Self {
            discriminator,
            raw,
            shell,
        })
    }

    /// Captures a JSON object from its string representation.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Self::from_raw(RawValue::from_string(json.to_string())?)
    }

    /// The discriminator value, empty if it was absent.
    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    /// The original JSON bytes.
    pub fn raw(&self) -> &RawValue {
        &self.raw
    }

    /// The attributes shared by all the variants.
    pub fn shell(&self) -> &T::Shell {
        &self.shell
    }

    /// Converts the holder into the variant selected by its discriminator.
    ///
    /// Unknown discriminators are not an error: the result wraps the holder.
    pub fn resolve(self) -> serde_json::Result<T> {
        if !self.discriminator.is_empty() {
            if let Some(variant) = T::decode_variant(&self.discriminator, &self.raw) {
                return variant;
            }
        }
        tracing::debug!(
            union = T::NAME,
            discriminator = %self.discriminator,
            "unknown discriminator value, keeping the unresolved form"
        );
        Ok(T::unknown(self))
    }
}

impl<T: Discriminated> Clone for Holder<T> {
    fn clone(&self) -> Self {
        Self {
            discriminator: self.discriminator.clone(),
            raw: self.raw.clone(),
            shell: self.shell.clone(),
        }
    }
}

impl<T: Discriminated> std::fmt::Debug for Holder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Holder")
            .field("union", &T::NAME)
            .field("discriminator", &self.discriminator)
            .field("raw", &self.raw.get())
            .finish()
    }
}

impl<T: Discriminated> PartialEq for Holder<T> {
    fn eq(&self, other: &Self) -> bool {
        self.discriminator == other.discriminator && self.raw.get() == other.raw.get()
    }
}

impl<T: Discriminated> Serialize for Holder<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de, T: Discriminated> Deserialize<'de> for Holder<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(D::Error::custom)
    }
}

/// Deserializes a discriminated union, resolving it in place.
///
/// The generated unions implement [Deserialize] with this function.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Discriminated,
    D: Deserializer<'de>,
{
    Holder::<T>::deserialize(deserializer)?
        .resolve()
        .map_err(D::Error::custom)
}

/// Decodes a concrete variant from the retained bytes.
pub fn decode<V: DeserializeOwned>(raw: &RawValue) -> serde_json::Result<V> {
    serde_json::from_str(raw.get())
}

/// Wraps a concrete variant with its discriminator.
///
/// The discriminator is not one of the variant fields, the envelope writes
/// it ahead of them.
#[derive(Serialize)]
pub struct Tagged<'a, V: Serialize> {
    #[serde(flatten)]
    discriminator: Discriminator,
    #[serde(flatten)]
    variant: &'a V,
}

impl<'a, V: Serialize> Tagged<'a, V> {
    pub fn new(key: &'static str, value: &'static str, variant: &'a V) -> Self {
        Self {
            discriminator: Discriminator { key, value },
            variant,
        }
    }
}

impl<V: Serialize> std::fmt::Debug for Tagged<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tagged")
            .field("key", &self.discriminator.key)
            .field("value", &self.discriminator.value)
            .finish()
    }
}

struct Discriminator {
    key: &'static str,
    value: &'static str,
}

impl Serialize for Discriminator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.value)?;
        map.end()
    }
}

struct DiscriminatorVisitor<T>(std::marker::PhantomData<T>);

impl<T> DiscriminatorVisitor<T> {
    fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<'de, T: Discriminated> Visitor<'de> for DiscriminatorVisitor<T> {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            formatter,
            "a JSON object for {} with an optional `{}` discriminator",
            T::NAME,
            T::DISCRIMINATOR
        )
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut found = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == T::DISCRIMINATOR {
                found = map.next_value::<Option<String>>()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    // A small union exercising the runtime without the generated code.
    #[derive(Clone, Debug, PartialEq)]
    enum Pet {
        Dog(Dog),
        Cat(Cat),
        Unknown(Holder<Pet>),
    }

    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct PetShell {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    }

    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Dog {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_good: Option<bool>,
    }

    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Cat {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        lives: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        friend: Option<Box<Pet>>,
    }

    impl Pet {
        fn name(&self) -> Option<&str> {
            match self {
                Self::Dog(v) => v.name.as_deref(),
                Self::Cat(v) => v.name.as_deref(),
                Self::Unknown(h) => h.shell().name.as_deref(),
            }
        }
    }

    impl Discriminated for Pet {
        const NAME: &'static str = "Pet";
        const DISCRIMINATOR: &'static str = "kind";
        type Shell = PetShell;

        fn decode_variant(
            discriminator: &str,
            raw: &RawValue,
        ) -> Option<serde_json::Result<Self>> {
            let v = match discriminator {
                "DOG" => decode(raw).map(Self::Dog),
                "CAT" => decode(raw).map(Self::Cat),
                _ => return None,
            };
            Some(v)
        }

        fn unknown(holder: Holder<Self>) -> Self {
            Self::Unknown(holder)
        }
    }

    impl Serialize for Pet {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Dog(v) => Tagged::new("kind", "DOG", v).serialize(serializer),
                Self::Cat(v) => Tagged::new("kind", "CAT", v).serialize(serializer),
                Self::Unknown(h) => h.serialize(serializer),
            }
        }
    }

    impl<'de> Deserialize<'de> for Pet {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            super::deserialize(deserializer)
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Owner {
        #[serde(skip_serializing_if = "Option::is_none")]
        pet: Option<Pet>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        others: Vec<Pet>,
    }

    #[test]
    fn encode_injects_discriminator() -> TestResult {
        let dog = Pet::Dog(Dog {
            name: Some("rex".into()),
            is_good: Some(true),
        });
        let got = serde_json::to_value(&dog)?;
        assert_eq!(got, json!({"kind": "DOG", "name": "rex", "isGood": true}));
        let text = serde_json::to_string(&dog)?;
        assert!(text.starts_with(r#"{"kind":"DOG""#), "{text}");
        Ok(())
    }

    #[test]
    fn decode_known() -> TestResult {
        let got = serde_json::from_str::<Pet>(r#"{"kind":"CAT","name":"tom","lives":9}"#)?;
        let want = Pet::Cat(Cat {
            name: Some("tom".into()),
            lives: Some(9),
            friend: None,
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn roundtrip_known() -> TestResult {
        let input = Pet::Cat(Cat {
            name: Some("tom".into()),
            lives: None,
            friend: Some(Box::new(Pet::Dog(Dog::default()))),
        });
        let json = serde_json::to_string(&input)?;
        let got = serde_json::from_str::<Pet>(&json)?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test_case(r#"{"kind":"PARROT","name":"polly"}"#, "PARROT"; "unknown")]
    #[test_case(r#"{"kind":"","name":"polly"}"#, ""; "empty")]
    #[test_case(r#"{"name":"polly"}"#, ""; "absent")]
    #[test_case(r#"{"kind":null,"name":"polly"}"#, ""; "null")]
    #[test_case(r#"{"kind":"dog","name":"polly"}"#, "dog"; "case sensitive")]
    fn decode_unknown(input: &str, discriminator: &str) -> TestResult {
        let got = serde_json::from_str::<Pet>(input)?;
        let Pet::Unknown(holder) = &got else {
            panic!("expected unknown variant, got={got:?}");
        };
        assert_eq!(holder.discriminator(), discriminator);
        assert_eq!(holder.raw().get(), input);
        assert_eq!(got.name(), Some("polly"));
        Ok(())
    }

    #[test]
    fn unknown_preserves_bytes() -> TestResult {
        let input = r#"{ "kind" : "PARROT",  "name":"polly", "extra": [1, 2, {"a": null}] }"#;
        let got = serde_json::from_str::<Pet>(input)?;
        assert_eq!(serde_json::to_string(&got)?, input);
        Ok(())
    }

    #[test]
    fn nested() -> TestResult {
        let input = json!({
            "pet": {"kind": "CAT", "name": "tom", "friend": {"kind": "DOG", "isGood": true}},
            "others": [{"kind": "DOG"}, {"kind": "FISH", "fins": 2}],
        });
        let got = serde_json::from_value::<Owner>(input.clone())?;
        let Some(Pet::Cat(cat)) = &got.pet else {
            panic!("expected a cat, got={got:?}");
        };
        assert_eq!(
            cat.friend.as_deref(),
            Some(&Pet::Dog(Dog {
                name: None,
                is_good: Some(true)
            }))
        );
        assert!(matches!(got.others[0], Pet::Dog(_)), "{got:?}");
        assert!(matches!(got.others[1], Pet::Unknown(_)), "{got:?}");
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn absent_and_null_fields() -> TestResult {
        let got = serde_json::from_str::<Owner>(r#"{"pet":null}"#)?;
        assert_eq!(got, Owner::default());
        assert_eq!(serde_json::to_value(&got)?, json!({}));
        Ok(())
    }

    #[test_case(r#""just a string""#)]
    #[test_case(r#"{"kind": 42}"#)]
    #[test_case(r#"{"kind": "DOG", "isGood": "yes"}"#)]
    #[test_case(r#"{"kind": "PARROT", "name": 7}"#)]
    fn decode_errors(input: &str) {
        let got = serde_json::from_str::<Pet>(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn holder() -> TestResult {
        let holder = Holder::<Pet>::from_json(r#"{"kind":"DOG","name":"rex"}"#)?;
        assert_eq!(holder.discriminator(), "DOG");
        assert_eq!(holder.shell().name.as_deref(), Some("rex"));
        let clone = holder.clone();
        assert_eq!(clone, holder);
        let fmt = format!("{holder:?}");
        assert!(fmt.contains("Pet"), "{fmt}");
        let got = holder.resolve()?;
        assert!(matches!(got, Pet::Dog(_)), "{got:?}");
        Ok(())
    }
}
