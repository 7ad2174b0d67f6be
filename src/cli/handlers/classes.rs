use crate::cli::{args::ClassesArgs, global::GlobalArgs};
use vec64::{NAMED_CLASSES, Settings};

pub fn handle(
    args: ClassesArgs,
    _global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.json || settings.json() {
        let classes: Vec<_> = NAMED_CLASSES
            .iter()
            .map(|(name, class)| {
                serde_json::json!({
                    "name": name,
                    "value": class.bits(),
                    "symbols": class.symbol_count(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&classes)?);
        return Ok(());
    }

    println!("{:<16} {:>5} {:>7}", "CLASS", "VALUE", "SYMBOLS");
    for (name, class) in NAMED_CLASSES.iter() {
        println!("{:<16} {:>5} {:>7}", name, class.bits(), class.symbol_count());
    }

    Ok(())
}
