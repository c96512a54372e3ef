use std::ops::Deref;

use serde::Deserialize;

/// A duration given as whitespace-separated `<number><unit>` terms, where the
/// unit is one of `ms`, `s`, `m`, `h` or `d`. Terms accumulate, so
/// `"1m 30s"` is ninety seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        fn invalid<E: serde::de::Error>(term: &str) -> E {
            E::custom(format!(
                "invalid duration term {term:?}, expected e.g. \"1500ms\" or \"1h 30m\""
            ))
        }

        let s = String::deserialize(deserializer)?;
        let mut out = std::time::Duration::ZERO;
        for term in s.split_whitespace() {
            let unit_start = term
                .find(|c: char| !c.is_ascii_digit())
                .ok_or_else(|| invalid(term))?;
            let (number, unit) = term.split_at(unit_start);
            let number: u64 = number.parse().map_err(|_| invalid(term))?;
            out += match unit {
                "ms" => std::time::Duration::from_millis(number),
                "s" => std::time::Duration::from_secs(number),
                "m" => std::time::Duration::from_secs(number * 60),
                "h" => std::time::Duration::from_secs(number * 60 * 60),
                "d" => std::time::Duration::from_secs(number * 24 * 60 * 60),
                _ => return Err(invalid(term)),
            };
        }
        Ok(Self(out))
    }
}
