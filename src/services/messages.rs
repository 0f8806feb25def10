//! Lazy decoding of back-to-back JSON messages from a byte stream.
//!
//! The backup subcommand prints progress messages followed by a final
//! summary, with no framing beyond JSON's own structure. [`Messages`] yields
//! each decoded message in document order and leaves the stopping condition
//! to the consumer.

use crate::Result;
use serde::de::DeserializeOwned;
use serde_json::de::{IoRead, StreamDeserializer};
use std::io::Read;

/// Iterator over JSON messages in a stream. Fuses after the first error.
pub struct Messages<'de, R: Read, T> {
    inner: StreamDeserializer<'de, IoRead<R>, T>,
    failed: bool,
}

/// Create a message iterator over `reader`.
pub fn messages<'de, R, T>(reader: R) -> Messages<'de, R, T>
where
    R: Read,
    T: DeserializeOwned,
{
    Messages {
        inner: serde_json::Deserializer::from_reader(reader).into_iter::<T>(),
        failed: false,
    }
}

impl<R, T> Iterator for Messages<'_, R, T>
where
    R: Read,
    T: DeserializeOwned,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = self.inner.next()?;
        if item.is_err() {
            self.failed = true;
        }
        Some(item.map_err(Into::into))
    }
}
