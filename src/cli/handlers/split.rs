use crate::cli::{args::SplitArgs, config::read_input, global::GlobalArgs};
use vec64::{CharClass, Settings, Splitter, index_symbols};

pub fn handle(
    args: SplitArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    // Flags win over config values
    let split_on = match &args.split_on {
        Some(name) => Some(name.parse::<CharClass>()?),
        None => settings.split_class()?,
    };
    let max_splits = args.max_splits.unwrap_or_else(|| settings.max_splits());

    let input = read_input(args.file.as_ref(), global)?;
    let (symbols, consumed) = index_symbols(&input);

    let splitter = Splitter::new().split_on(split_on).max_splits(max_splits);
    let result = splitter.classify_regions(&symbols)?;

    tracing::debug!(
        consumed,
        ranges = result.ranges.len(),
        split_entries = result.split_entries.len(),
        "classified input"
    );

    if args.json || settings.json() {
        let ranges = result
            .ranges
            .iter()
            .map(|range| {
                let mut value = serde_json::to_value(range)?;
                if args.probability {
                    value["probability"] = serde_json::json!(range.probability());
                }
                Ok(value)
            })
            .collect::<Result<Vec<_>, serde_json::Error>>()?;

        let output = serde_json::json!({
            "consumed": consumed,
            "ranges": ranges,
            "split_entries": result.split_entries,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for range in &result.ranges {
        if args.probability {
            println!(
                "{} {} {} {:.4e}",
                range.start,
                range.end,
                range.class,
                range.probability()
            );
        } else {
            println!("{} {} {}", range.start, range.end, range.class);
        }
    }

    if let Some(class) = splitter.split_class()
        && !global.quiet
    {
        let entries: Vec<String> = result.split_entries.iter().map(usize::to_string).collect();
        if entries.is_empty() {
            eprintln!("No {} split regions", class);
        } else {
            eprintln!("{} split regions at: {}", class, entries.join(", "));
        }
    }

    Ok(())
}
