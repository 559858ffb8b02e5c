//! Serde representation of [`Result`] as a plain object.
//!
//! - `Success(v)` is `{"ok": true, "val": v}`
//! - `Failure(e)` is `{"ok": false, "err": e}`
//!
//! A payload that deserializes from unit (`()`, `Option<_>`) may be `null` or left out.
use serde::de::{self, IntoDeserializer};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::result::Result::{self, Failure, Success};

impl<V, E> Serialize for Result<V, E>
where
    V: Serialize,
    E: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Result", 2)?;
        match self {
            Success(value) => {
                state.serialize_field("ok", &true)?;
                state.serialize_field("val", value)?;
            }
            Failure(error) => {
                state.serialize_field("ok", &false)?;
                state.serialize_field("err", error)?;
            }
        }
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>, E: Deserialize<'de>"))]
struct Repr<V, E> {
    ok: bool,
    // Outer `None`: field left out. `Some(None)`: field is `null`.
    #[serde(default, deserialize_with = "present")]
    val: Option<Option<V>>,
    #[serde(default, deserialize_with = "present")]
    err: Option<Option<E>>,
}

fn present<'de, T, D>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl<'de, V, E> Deserialize<'de> for Result<V, E>
where
    V: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let repr = Repr::<V, E>::deserialize(deserializer)?;
        if repr.ok {
            payload("val", repr.val).map(Success)
        } else {
            payload("err", repr.err).map(Failure)
        }
    }
}

/// Payload of `field`. A `null` or missing field falls back to unit, for payload types that
/// accept it.
fn payload<'de, T, DeError>(
    field: &'static str,
    slot: Option<Option<T>>,
) -> std::result::Result<T, DeError>
where
    T: Deserialize<'de>,
    DeError: de::Error,
{
    let from_unit = || {
        T::deserialize(<() as IntoDeserializer<'de, DeError>>::into_deserializer(()))
    };
    match slot {
        Some(Some(value)) => Ok(value),
        Some(None) => from_unit(),
        None => from_unit().map_err(|_| DeError::missing_field(field)),
    }
}
