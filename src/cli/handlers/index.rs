use crate::cli::{args::IndexArgs, config::read_input, global::GlobalArgs};
use vec64::{Settings, index_symbols_with_pad};

pub fn handle(
    args: IndexArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref(), global)?;
    let pad_with = args.pad_with.unwrap_or_else(|| settings.pad_with());

    let (symbols, consumed) = index_symbols_with_pad(&input, pad_with);

    if consumed < input.len() && !global.quiet {
        eprintln!(
            "Note: stopped at byte {} of {} (not in the Base64 alphabet)",
            consumed,
            input.len()
        );
    }

    if args.json || settings.json() {
        let output = serde_json::json!({
            "symbols": symbols,
            "consumed": consumed,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let line: Vec<String> = symbols.iter().map(u8::to_string).collect();
    println!("{}", line.join(" "));

    Ok(())
}
