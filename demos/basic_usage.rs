use format_converter::{ConversionMode, EmojiCodec, MappingTable, TextConverter, COMMENT_STYLES};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let converter = TextConverter::new();
    let paragraph = "According to all known laws of aviation, there is no way a bee should be able to fly. \
Its wings are too small to get its fat little body off the ground.";

    println!("📝 Format Converter Demo\n");

    // One block per known comment style
    for style in COMMENT_STYLES.iter() {
        println!("{} ({})", style.symbol, style.languages);
        println!("{}\n", converter.convert(paragraph, &style.mode())?);
    }

    // EnMoji with the built-in table
    println!("🍄 EnMoji:");
    let secret = converter.convert("Meet me at 10   sharp!", &ConversionMode::EmojiEncrypt)?;
    println!("├─ Encrypted: {}", secret);
    let plain = converter.convert(&secret, &ConversionMode::EmojiDecrypt)?;
    println!("└─ Decrypted: {}\n", plain);

    // A custom table injected into a codec
    let table = MappingTable::new([('h', "\u{1F3E0}"), ('i', "\u{2139}\u{FE0F}")])?;
    let codec = EmojiCodec::new(&table);
    let encoded = codec.encode("Hi there");
    println!("🔧 Custom table:");
    println!("├─ Encoded: {}", encoded);
    println!("├─ Decoded: {}", codec.decode(&encoded));
    println!("└─ Fully mapped: {}", codec.is_encodable("Hi there"));

    Ok(())
}
