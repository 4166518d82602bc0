use super::read_input;
use crate::parser::{find_section, find_subsection, normalize_newlines, parse_numbered_list};
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SectionArgs {
    /// Markdown document (file path, or '-' / omitted for stdin)
    pub input: Option<PathBuf>,

    /// Heading text to look up
    #[arg(short, long)]
    pub name: String,

    /// Look up a `###` subsection (prefix match) instead of a `##` section
    #[arg(short, long)]
    pub subsection: bool,

    /// Print the numbered list items as a JSON array
    #[arg(short, long)]
    pub list: bool,
}

pub fn run(args: &SectionArgs) -> Result<()> {
    let md = normalize_newlines(&read_input(args.input.as_deref())?);
    let body = if args.subsection {
        find_subsection(&md, &args.name)
    } else {
        find_section(&md, &args.name)
    };

    let Some(body) = body else {
        anyhow::bail!("Section '{}' not found", args.name);
    };

    if args.list {
        println!("{}", serde_json::to_string_pretty(&parse_numbered_list(&body))?);
    } else {
        eprintln!("{}", format!("## {}", args.name).cyan());
        println!("{}", body);
    }
    Ok(())
}
