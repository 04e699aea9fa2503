// Module name shadows the `serde` crate — use `::serde` for the external crate.
use ::serde::de::{self, Deserializer, Visitor};
use ::serde::{Deserialize, Serializer};
use chrono::{DateTime, SecondsFormat, Utc};

/// Serialize `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

struct LenientU32Visitor;

impl Visitor<'_> for LenientU32Visitor {
    type Value = u32;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("an unsigned integer or a numeric string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
        u32::try_from(v).map_err(|_| E::custom("integer out of range"))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
        u32::try_from(v).map_err(|_| E::custom("integer out of range"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
        v.trim()
            .parse::<u32>()
            .map_err(|_| E::custom("string is not an unsigned integer"))
    }
}

/// Deserialize a `u32` from either a JSON number or a numeric string.
///
/// Clients submit one-time codes both ways; the two forms must compare
/// equal, so they are normalized at the edge.
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientU32Visitor)
}

/// `Option` wrapper around [`lenient_u32`], for optional code fields.
/// Use with `#[serde(default, deserialize_with = "...")]`.
pub fn lenient_u32_opt<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "lenient_u32")] u32);

    let opt = Option::<Wrapper>::deserialize(deserializer)?;
    Ok(opt.map(|Wrapper(v)| v))
}
