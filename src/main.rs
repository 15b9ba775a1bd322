//! # chatcount CLI
//!
//! Command-line interface for the chatcount library.

use std::path::Path;
use std::process;

use clap::Parser as ClapParser;

use chatcount::alias::AliasMap;
use chatcount::cli::Args;
use chatcount::count::count_messages;
use chatcount::partition::{dms_only, load_group_list};
use chatcount::report::write_report;
use chatcount::select::valid_chat_files;
use chatcount::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = <Args as ClapParser>::parse();
    args.validate()?;

    println!("chatcount v{}", env!("CARGO_PKG_VERSION"));
    println!("Input:  {}", args.indir);
    println!("Output: {}", args.output_file);
    if let Some(year) = &args.year {
        println!("Year:   {}", year);
    }
    println!();

    let files = valid_chat_files(Path::new(&args.indir))?;
    println!("Counting messages in {} chat export(s)...", files.len());

    let mut records = count_messages(&files, args.year.as_deref())?;

    if let Some(alias_file) = &args.alias_file {
        let aliases = AliasMap::load(Path::new(alias_file))?;
        aliases.apply(&mut records);
        println!("Applied {} alias mapping(s)", aliases.len());
    }

    // The report is only written once counting and substitution succeeded,
    // so a failed run leaves no partial output behind.
    let dms = match &args.group_list {
        Some(group_list) => {
            let groups = load_group_list(Path::new(group_list))?;
            Some(dms_only(&records, &groups))
        }
        None => None,
    };

    write_report(Path::new(&args.output_file), &records, dms.as_deref())?;

    let total: usize = records.iter().map(|r| r.count).sum();
    println!();
    println!("Done! {} message(s) across {} thread(s)", total, records.len());
    println!("Report saved to {}", args.output_file);

    Ok(())
}
