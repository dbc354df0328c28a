//! Compound blobs: concatenations of serialised records with no separator,
//! self-delimiting through the per-record length tags, and the textual
//! forms they travel in.

mod decode;
mod encode;
mod serialise;
mod unserialise;

pub use decode::decode;
pub use encode::{encode, Representation};
pub use serialise::serialise;
pub use unserialise::{is_serialised, unserialise};

#[cfg(test)]
mod tests {
    use super::{decode, encode, unserialise, Representation};

    /// The seeded end-to-end corpus: textual input, expected
    /// `encode(Encoded)` output, expected blob bytes.
    const CORPUS: &[(&str, &str, &[u8])] = &[
        // Full records.
        (
            "5759b016-10c0-4526-a981-47d6d19f6fb4",
            "5759b016-10c0-4526-a981-47d6d19f6fb4",
            b"\x01\x57\x59\xb0\x16\x10\xc0\x45\x26\xa9\x81\x47\xd6\xd1\x9f\x6f\xb4",
        ),
        (
            "e8b13d1b-665f-4f4c-aa83-76fa782b030a",
            "e8b13d1b-665f-4f4c-aa83-76fa782b030a",
            b"\x01\xe8\xb1\x3d\x1b\x66\x5f\x4f\x4c\xaa\x83\x76\xfa\x78\x2b\x03\x0a",
        ),
        // Condensed.
        (
            "00000000-0000-1000-8000-000000000000",
            "00000000-0000-1000-8000-000000000000",
            b"\x1c\x00\x00\x00",
        ),
        (
            "11111111-1111-1111-8111-111111111111",
            "~yc9DnemYGNTMdKXsYYiTKOc",
            b"\x0f\x88\x88\x88\x88\x88\x88\x88\x82\x22\x22\x22\x22\x22\x22\x22",
        ),
        // Condensed and compacted.
        (
            "230c0800-dc3c-11e7-b966-a3ab262e682b",
            "~SsQq3dJdg3P",
            b"\x06\x2c\x02\x5b\x08\x39\x66\x57",
        ),
        (
            "f2238800-debf-11e7-bbf7-dffcee0c03ab",
            "~SUkSiXYTT8c",
            b"\x06\x2e\x86\x2a\x1f\xbb\xf7\x57",
        ),
        // Condensed and expanded.
        (
            "60579016-dec5-11e7-b616-34363bc9ddd6",
            "60579016-dec5-11e7-b616-34363bc9ddd6",
            b"\xe1\x17\x45\xcc\x29\xc4\x0b\x6c\x2c\x68\x6c\x77\x93\xbb\xac",
        ),
        (
            "4ec97478-c3a9-11e6-bbd0-a46ba9ba5662",
            "4ec97478-c3a9-11e6-bbd0-a46ba9ba5662",
            b"\x0e\x89\xb7\xc3\x62\xb6\x3c\x77\xa1\x48\xd7\x53\x74\xac\xc4",
        ),
        // Other kinds.
        (
            "00000000-0000-0000-0000-000000000000",
            "00000000-0000-0000-0000-000000000000",
            b"\x01\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00",
        ),
        (
            "00000000-0000-1000-8000-010000000000",
            "~notmet",
            b"\x1c\x00\x00\x01",
        ),
        (
            "11111111-1111-1111-8111-101111111111",
            "11111111-1111-1111-8111-101111111111",
            b"\xf7\x95\xb0\x6b\xa4\x86\x84\x88\x82\x22\x20\x22\x22\x22\x22\x22",
        ),
        (
            "00000000-0000-1000-a000-000000000000",
            "00000000-0000-1000-a000-000000000000",
            b"\x0a\x40\x00\x00\x00\x00\x00\x00\x00",
        ),
        // Compounds.
        (
            "5759b016-10c0-4526-a981-47d6d19f6fb4;e8b13d1b-665f-4f4c-aa83-76fa782b030a",
            "5759b016-10c0-4526-a981-47d6d19f6fb4;e8b13d1b-665f-4f4c-aa83-76fa782b030a",
            b"\x01\x57\x59\xb0\x16\x10\xc0\x45\x26\xa9\x81\x47\xd6\xd1\x9f\x6f\xb4\
              \x01\xe8\xb1\x3d\x1b\x66\x5f\x4f\x4c\xaa\x83\x76\xfa\x78\x2b\x03\x0a",
        ),
        (
            "00000000-0000-1000-8000-000000000000;11111111-1111-1111-8111-111111111111",
            "~WPQUDun7rkRr7TkQ2PSfCHGo4WWz",
            b"\x1c\x00\x00\x00\x0f\x88\x88\x88\x88\x88\x88\x88\x82\x22\x22\x22\x22\x22\x22\x22",
        ),
        (
            "230c0800-dc3c-11e7-b966-a3ab262e682b;f2238800-debf-11e7-bbf7-dffcee0c03ab",
            "~EYBuNUmS8MZs98Mq64McVQ",
            b"\x06\x2c\x02\x5b\x08\x39\x66\x57\x06\x2e\x86\x2a\x1f\xbb\xf7\x57",
        ),
        (
            "60579016-dec5-11e7-b616-34363bc9ddd6;4ec97478-c3a9-11e6-bbd0-a46ba9ba5662",
            "60579016-dec5-11e7-b616-34363bc9ddd6;4ec97478-c3a9-11e6-bbd0-a46ba9ba5662",
            b"\xe1\x17\x45\xcc\x29\xc4\x0b\x6c\x2c\x68\x6c\x77\x93\xbb\xac\
              \x0e\x89\xb7\xc3\x62\xb6\x3c\x77\xa1\x48\xd7\x53\x74\xac\xc4",
        ),
        (
            "00000000-0000-1000-8000-010000000000;11111111-1111-1111-8111-101111111111",
            "00000000-0000-1000-8000-010000000000;11111111-1111-1111-8111-101111111111",
            b"\x1c\x00\x00\x01\xf7\x95\xb0\x6b\xa4\x86\x84\x88\x82\x22\x20\x22\x22\x22\x22\x22",
        ),
    ];

    #[test]
    fn corpus_decodes_to_the_expected_blobs() {
        for (text, _, blob) in CORPUS {
            assert_eq!(&decode(text).expect("decodes"), blob, "{text}");
        }
    }

    #[test]
    fn corpus_blobs_recover_the_uuids() {
        for (text, _, blob) in CORPUS {
            let uuids = unserialise(blob).expect("valid blob");
            let joined = uuids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(";");
            assert_eq!(&joined, text);
        }
    }

    #[test]
    fn corpus_blobs_encode_to_the_expected_text() {
        for (text, encoded, blob) in CORPUS {
            assert_eq!(
                &encode(blob, Representation::Encoded).expect("valid blob"),
                encoded,
                "{text}"
            );
        }
    }

    #[test]
    fn encoded_output_decodes_back_to_the_blob() {
        for (_, encoded, blob) in CORPUS {
            assert_eq!(&decode(encoded).expect("decodes"), blob, "{encoded}");
        }
    }

    #[test]
    fn guid_and_urn_output_decode_back_to_the_blob() {
        for (text, _, blob) in CORPUS {
            let guid = encode(blob, Representation::Guid).expect("valid blob");
            assert_eq!(&decode(&guid).expect("decodes"), blob, "{text} via {guid}");

            let urn = encode(blob, Representation::Urn).expect("valid blob");
            assert_eq!(&decode(&urn).expect("decodes"), blob, "{text} via {urn}");
        }
    }
}
