use bit_fields::{BitField, BitFieldError, TypeTag, Value};

fn main() {
    env_logger::init();
    println!("=== Bit Field Examples ===\n");

    if let Err(e) = example_packet_header() {
        eprintln!("packet header example failed: {e}");
    }
    if let Err(e) = example_truncation() {
        eprintln!("truncation example failed: {e}");
    }
}

fn example_packet_header() -> Result<(), BitFieldError> {
    println!("Example 1: A packet header with unaligned fields");

    let mut header = BitField::builder()
        .field("version", 4, TypeTag::U4)
        .field("priority", 3, TypeTag::U4)
        .field("ack", 1, TypeTag::U4)
        .field("length", 12, TypeTag::U12)
        .field("channel", 4, TypeTag::U4)
        .field("seq", 32, TypeTag::U32)
        .field("tag", 24, TypeTag::Bytes)
        .build()?;

    header.set_field("version", Value::U4(6))?;
    header.set_field("priority", Value::U4(5))?;
    header.set_field("ack", Value::U4(1))?;
    header.set_field("length", Value::U12(1500))?;
    header.set_field("channel", Value::U4(9))?;
    header.set_field("seq", 0x0102_0304u32)?;
    header.set_field("tag", "BIT")?;

    for field in header.fields() {
        println!(
            "  {:<9} bits {:>2}..{:<2} {:<5} = {}",
            field.name(),
            field.bit_offset(),
            field.bit_end(),
            field.tag(),
            header.get_field(field.name())?
        );
    }

    let (bytes, bits) = header.dump();
    println!("  {} bits in {} bytes: {:02x?}", bits, bytes.len(), bytes);

    let mut copy = BitField::builder()
        .field("version", 4, TypeTag::U4)
        .field("priority", 3, TypeTag::U4)
        .field("ack", 1, TypeTag::U4)
        .field("length", 12, TypeTag::U12)
        .field("channel", 4, TypeTag::U4)
        .field("seq", 32, TypeTag::U32)
        .field("tag", 24, TypeTag::Bytes)
        .build()?;
    copy.load(bytes)?;
    println!("  restored length = {}", copy.get_field("length")?);
    println!();

    Ok(())
}

fn example_truncation() -> Result<(), BitFieldError> {
    println!("Example 2: Values wider than their field");

    let mut record = BitField::new();
    record.create_field("small", 8, TypeTag::U16)?;

    let outcome = record.set_field("small", 0x1ABu16)?;
    println!("  set 0x1AB -> {:?}", outcome);
    println!("  stored    -> {}", record.get_field("small")?);
    println!();

    Ok(())
}
