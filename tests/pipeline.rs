use qrdata::*;

fn v(n: u8) -> Version {
    Version::new(n).unwrap()
}

#[test]
fn test_manual_pipeline_matches_encoder() {
    let data = "HELLO WORLD TEST STRING 1223321";
    let level = CorrectionLevel::H;

    let payload = encode_alphanumeric(data).unwrap();
    assert_eq!(payload.len(), 171);

    let header = build_header(DataType::Alphanumeric, data.len(), payload.len(), level).unwrap();
    assert_eq!(header.mode_indicator.to_string(), "0010");
    assert_eq!(header.count_indicator.to_string(), "000011111");
    assert_eq!(header.version, v(3));

    let mut bits = header.to_bits();
    bits.extend_from(&payload);
    let stream = pad(&bits, level, header.version).unwrap();
    assert_eq!(stream.len(), capacity_bits(level, header.version));

    let blocks = segment(&stream, level, header.version).unwrap();
    // H3: 26 bytes in 2 blocks
    assert_eq!(blocks.byte_sizes().collect::<Vec<_>>(), [13, 13]);

    let encoded = QrDataEncoder::new(EncodeOptions::new().correction_level(level))
        .encode(&Data::Alphanumeric(data.to_owned()))
        .unwrap();
    assert_eq!(encoded.stream(), &stream);
    assert_eq!(encoded.into_blocks(), blocks);
}

#[test]
fn test_numeric_digits_and_number_agree() {
    let encoder = QrDataEncoder::default();
    let a = encoder.encode_number(1234567887).unwrap();
    let b = encoder.encode(&Data::Digits("1234567887".into())).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.count_indicator().to_string(), "0000001010");
}

#[test]
fn test_every_level_yields_capacity_sized_stream() {
    for level in CorrectionLevel::ALL {
        let encoder = QrDataEncoder::new(EncodeOptions::new().correction_level(level));
        let encoded = encoder.encode_str("THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG $%*+-./:").unwrap();
        let version = encoded.version();

        assert_eq!(encoded.stream().len(), capacity_bits(level, version));
        assert_eq!(encoded.blocks().len(), block_count(level, version));
        assert_eq!(&encoded.blocks().concat(), encoded.stream());
        assert_eq!(select_versions(encoded.payload().len(), DataType::Alphanumeric).get(level), Some(version));
    }
}

#[test]
fn test_large_payload_uses_many_blocks() {
    let digits: String = (0..2000).map(|i| char::from(b'0' + (i % 10) as u8)).collect();
    let encoded = QrDataEncoder::new(EncodeOptions::new().correction_level(CorrectionLevel::Q))
        .encode(&Data::Digits(digits))
        .unwrap();

    // 2000 digits -> 6667 payload bits, 6667 + 4 + 14 <= Q28 (6968)
    assert_eq!(encoded.payload().len(), 6667);
    assert_eq!(encoded.version(), v(28));
    assert_eq!(encoded.count_indicator().len(), 14);

    let sizes: Vec<usize> = encoded.blocks().byte_sizes().collect();
    let min = *sizes.iter().min().unwrap();
    let max = *sizes.iter().max().unwrap();
    assert!(max - min <= 1);
    assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(sizes.iter().sum::<usize>() * 8, encoded.stream().len());
}

#[test]
fn test_block_bytes_round_trip_stream_bytes() {
    let encoded = QrDataEncoder::new(EncodeOptions::new().correction_level(CorrectionLevel::L).version(v(10)))
        .encode_str("HELLO")
        .unwrap();
    let flat: Vec<u8> = encoded.blocks().to_bytes().into_iter().flatten().collect();
    assert_eq!(flat, encoded.stream().to_bytes());
    assert_eq!(flat.len(), 274);
    assert_eq!(&flat[..2], [0b0010_0000, 0b0000_1010]);
}
