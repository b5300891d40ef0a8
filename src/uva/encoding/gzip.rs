extern crate flate2;
extern crate serde_yaml;

use crate::error::{encoding_error, persistence_error, Result};
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    io::{Read, Write},
    path::Path,
};

pub fn encode<W: Write, T: Serialize>(wdr: W, value: &T, path: &Path) -> Result<()> {
    let mut encoder = GzEncoder::new(wdr, Compression::default());
    serde_yaml::to_writer(&mut encoder, value).map_err(encoding_error(path))?;
    encoder.finish().map_err(persistence_error(path))?;
    Ok(())
}

pub fn decode<R: Read, T: DeserializeOwned>(rdr: R, path: &Path) -> Result<T> {
    serde_yaml::from_reader(GzDecoder::new(rdr)).map_err(encoding_error(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn output_is_compressed() {
        let mut buf = Vec::new();
        encode(&mut buf, &"hello".to_string(), Path::new("mem")).unwrap();
        assert_eq!(&buf[..2], &[0x1f, 0x8b]);
    }

    #[test]
    fn corrupt_input_is_a_persistence_failure() {
        let err = decode::<_, String>(&b"not gzip"[..], Path::new("mem")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PersistenceFailure);
    }
}
