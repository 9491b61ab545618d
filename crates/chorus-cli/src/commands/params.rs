//! List the chorus parameters.

use chorus_effect::ChorusParam;

/// Run the params command.
pub fn run() -> anyhow::Result<()> {
    println!("Chorus Parameters:\n");
    println!(
        "  {:<14} {:<14} {:>10}  {:<8}",
        "KEY", "NAME", "RANGE", "DEFAULT"
    );
    for param in ChorusParam::ALL {
        let d = param.descriptor();
        let range = format!("{}-{}", d.min, d.max);
        println!(
            "  {:<14} {:<14} {:>10}  {}{}",
            param.key(),
            d.name,
            range,
            d.default,
            d.unit.suffix()
        );
    }
    println!("\nPass values to 'chorus process' as --rate, --depth, --center-delay, --feedback, --mix.");
    Ok(())
}
