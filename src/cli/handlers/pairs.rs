use crate::cli::{args::PairsArgs, config::read_input, global::GlobalArgs};
use vec64::{Settings, index_symbols, pair_encode};

pub fn handle(
    args: PairsArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref(), global)?;
    let (symbols, _) = index_symbols(&input);

    if args.start > symbols.len() && !global.quiet {
        eprintln!(
            "Warning: --start {} is past the last symbol ({})",
            args.start,
            symbols.len()
        );
    }

    let pairs = pair_encode(&symbols, args.start);

    if args.json || settings.json() {
        let output = serde_json::json!({ "pairs": pairs });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let line: Vec<String> = pairs.iter().map(u16::to_string).collect();
    println!("{}", line.join(" "));

    Ok(())
}
