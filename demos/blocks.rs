use qrdata::*;

fn print_blocks(encoded: &EncodedData) {
    println!(
        "version {} / level {} ({} bits, {} blocks)",
        encoded.version(),
        encoded.correction_level(),
        encoded.stream().len(),
        encoded.blocks().len()
    );
    println!("  mode     {}", encoded.mode_indicator());
    println!("  count    {}", encoded.count_indicator());
    println!("  payload  {}", encoded.payload());
    for (i, block) in encoded.blocks().iter().enumerate() {
        let hex: Vec<String> = block.to_bytes().iter().map(|b| format!("{b:02X}")).collect();
        println!("  block {i:>2} {}", hex.join(" "));
    }
    println!();
}

fn main() -> Result<()> {
    let text = std::env::args().nth(1).unwrap_or_else(|| "HELLO WORLD".to_owned());
    let data = if text.bytes().all(|b| b.is_ascii_digit()) {
        Data::Digits(text)
    } else {
        Data::Alphanumeric(text)
    };

    for level in CorrectionLevel::ALL {
        let encoded = QrDataEncoder::new(EncodeOptions::new().correction_level(level)).encode(&data)?;
        print_blocks(&encoded);
    }
    Ok(())
}
