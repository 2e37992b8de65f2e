use anyhow::Result;
use nfasim::{CollectAutomaton, InteractiveCollector, simulate, write_trace};
use std::io;

fn main() -> Result<()> {
    let mut collector = InteractiveCollector::new()?;
    let collected = collector.collect()?;

    println!("\nAll inputs validated. Simulating NFA...\n");

    let trace = simulate(&collected.automaton, &collected.input);
    write_trace(&trace, &mut io::stdout().lock())?;

    Ok(())
}
