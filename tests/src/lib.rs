#![allow(clippy::unreadable_literal)]

use anyhow::anyhow;
use bytes::Buf;
use prost::Message;

#[cfg(test)]
mod lifecycle;
#[cfg(test)]
mod peripheral;
#[cfg(test)]
mod properties;
#[cfg(test)]
mod unknown_fields;

pub enum RoundtripResult {
    /// The roundtrip succeeded.
    Ok(Vec<u8>),
    /// The data could not be decoded. This could indicate a bug in adwire, or
    /// it could indicate that the input was bogus.
    DecodeError(prost::DecodeError),
    /// Re-encoding the data failed or was unstable. This indicates a bug.
    Error(anyhow::Error),
}

impl RoundtripResult {
    /// Unwrap the roundtrip result.
    pub fn unwrap(self) -> Vec<u8> {
        match self {
            RoundtripResult::Ok(buf) => buf,
            RoundtripResult::DecodeError(error) => {
                panic!("failed to decode the roundtrip data: {}", error)
            }
            RoundtripResult::Error(error) => panic!("failed roundtrip: {}", error),
        }
    }

    /// Unwrap the roundtrip result. Panics if re-encoding failed.
    pub fn unwrap_error(self) -> Result<Vec<u8>, prost::DecodeError> {
        match self {
            RoundtripResult::Ok(buf) => Ok(buf),
            RoundtripResult::DecodeError(error) => Err(error),
            RoundtripResult::Error(error) => panic!("failed roundtrip: {}", error),
        }
    }
}

/// Decodes `data`, then checks that encoding is stable: the encoded length
/// matches `encoded_len`, and decoding and re-encoding reproduces the same
/// bytes. Messages must use `BTreeMap` for map fields so that entry order is
/// deterministic.
pub fn roundtrip<M>(data: &[u8]) -> RoundtripResult
where
    M: Message + Default + PartialEq,
{
    let message = match M::decode(data) {
        Ok(message) => message,
        Err(error) => return RoundtripResult::DecodeError(error),
    };

    let encoded_len = message.encoded_len();

    let mut buf1 = Vec::new();
    if let Err(error) = message.encode(&mut buf1) {
        return RoundtripResult::Error(anyhow!(error));
    }
    if encoded_len != buf1.len() {
        return RoundtripResult::Error(anyhow!(
            "expected encoded len ({}) did not match actual encoded len ({})",
            encoded_len,
            buf1.len()
        ));
    }

    let roundtrip = match M::decode(buf1.as_slice()) {
        Ok(roundtrip) => roundtrip,
        Err(error) => return RoundtripResult::Error(anyhow!(error)),
    };
    if roundtrip != message {
        return RoundtripResult::Error(anyhow!("decoded messages do not match"));
    }

    let buf2 = roundtrip.encode_to_vec();
    if buf1 != buf2 {
        return RoundtripResult::Error(anyhow!("roundtripped encoded buffers do not match"));
    }

    RoundtripResult::Ok(buf1)
}

/// Generic roundtrip serialization check for messages.
pub fn check_message<M>(msg: &M)
where
    M: Message + Default + PartialEq,
{
    let expected_len = msg.encoded_len();

    let mut buf = Vec::with_capacity(expected_len);
    msg.encode(&mut buf).unwrap();
    assert_eq!(expected_len, buf.len());

    let mut buf = buf.as_slice();
    let roundtrip = M::decode(&mut buf).unwrap();

    assert!(
        !buf.has_remaining(),
        "expected buffer to be empty: {}",
        buf.remaining()
    );
    assert_eq!(msg, &roundtrip);
}

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
