//! Dictionary codec: gzip-compressed JSON.
//!
//! The persisted form is a single JSON object mapping normalized terms to
//! definitions, wrapped in a gzip stream. There is no header or version
//! field; `decode(encode(t)) == t` for every table.

use std::io::{self, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use lexicon_core::{LexiconError, Result, TermTable};

/// Encode a table into a compressed byte stream.
///
/// Only fails if the underlying writer does; errors are returned as
/// `io::Error` so the caller can attach the file path.
pub fn encode(table: &TermTable) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    serde_json::to_writer(&mut encoder, table)?;
    encoder.write_all(b"\n")?;
    encoder.finish()
}

/// Decode a compressed byte stream into a table.
///
/// Decompression failures and malformed JSON both yield `Decode`. Keys are
/// normalized on the way in; two keys that collide after normalization are
/// rejected.
pub fn decode(bytes: &[u8]) -> Result<TermTable> {
    let decoder = GzDecoder::new(bytes);
    serde_json::from_reader(decoder).map_err(|e| {
        if e.is_io() {
            LexiconError::decode(format!("decompression failed: {}", e))
        } else {
            LexiconError::decode(e.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicon_core::Term;
    use proptest::prelude::*;

    #[test]
    fn test_empty_table_round_trip() {
        let bytes = encode(&TermTable::new()).unwrap();
        assert!(decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_output_is_gzip() {
        let bytes = encode(&TermTable::new()).unwrap();
        // gzip magic
        assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
    }

    #[test]
    fn test_reads_foreign_json() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
        encoder
            .write_all(br#"{"Go":"a language","rust":"another one"}"#)
            .unwrap();
        let bytes = encoder.finish().unwrap();

        let table = decode(&bytes).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(&Term::new("go").unwrap()), Some("a language"));
    }

    #[test]
    fn test_uncompressed_input_is_decode_error() {
        let err = decode(br#"{"a":"b"}"#).unwrap_err();
        assert!(matches!(err, LexiconError::Decode { .. }));
    }

    #[test]
    fn test_empty_input_is_decode_error() {
        assert!(matches!(decode(b""), Err(LexiconError::Decode { .. })));
    }

    #[test]
    fn test_truncated_stream_is_decode_error() {
        let table = TermTable::try_from_entries([("a", "b"), ("c", "d")]).unwrap();
        let bytes = encode(&table).unwrap();
        let err = decode(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, LexiconError::Decode { .. }));
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"[\"not\", \"an object\"]").unwrap();
        let bytes = encoder.finish().unwrap();
        assert!(matches!(decode(&bytes), Err(LexiconError::Decode { .. })));
    }

    proptest! {
        #[test]
        fn prop_round_trip(entries in proptest::collection::hash_map("[a-z][a-z0-9 _-]{0,12}", ".{1,40}", 0..32)) {
            let table = TermTable::try_from_entries(entries).unwrap();
            let decoded = decode(&encode(&table).unwrap()).unwrap();
            prop_assert_eq!(decoded, table);
        }
    }
}
