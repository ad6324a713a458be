//! # Codes Subcommand
//!
//! Prints the entries of a codelist, or a single entry, with the symbol
//! the mapper would emit for it.

use anyhow::Result;
use clap::Args;

use onix_codelist::{entry, CodeEntry, CodeList};

use crate::{EXIT_OK, EXIT_REJECTED};

/// Arguments for the codes subcommand.
#[derive(Args, Debug)]
pub struct CodesArgs {
    /// EDItEUR codelist number (e.g. 1, 17, 44).
    pub list: u16,

    /// Show only this code.
    pub code: Option<String>,
}

/// Execute the codes subcommand.
pub fn run_codes(args: &CodesArgs) -> Result<u8> {
    let list = CodeList::from_number(args.list).ok_or_else(|| {
        let known = CodeList::all()
            .iter()
            .map(|l| l.number().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::anyhow!("codelist {} is not carried. Known lists: {known}", args.list)
    })?;

    match &args.code {
        Some(code) => match entry(list, code) {
            Some(e) => {
                println!("{}", render(e));
                Ok(EXIT_OK)
            }
            None => {
                eprintln!("{list} has no code {code:?}");
                Ok(EXIT_REJECTED)
            }
        },
        None => {
            println!("{list}");
            for e in list.entries() {
                println!("  {}", render(e));
            }
            Ok(EXIT_OK)
        }
    }
}

fn render(e: &CodeEntry) -> String {
    format!("{:<6} {} [{}]", e.code, e.description, e.symbol())
}
