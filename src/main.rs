use clap::{Parser, Subcommand};
use doxnav::types::NavTreeData;
use doxnav::{check, emit, output, parse};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "doxnav")]
#[command(about = "Toolkit for Doxygen navigation tree data files")]
#[command(long_about = "\
Toolkit for Doxygen navigation tree data files

A navtreedata.js file is the machine-generated script that populates a
documentation site's sidebar. It defines three globals:

  NAVTREE        nested [ label, href, children ] tuples — the sidebar tree.
                 children is null (leaf), an inline array, or the name of a
                 deferred subtree script like \"annotated_dup\".
  NAVTREEINDEX   flat, ordered list of page paths (optionally with #anchor)
                 used positionally to sync the panel to the loaded page.
  SYNCONMSG /    tooltip strings for the panel-sync toggle.
  SYNCOFFMSG

doxnav parses these files into a typed model and works from there:

  show      print the tree inventory, index, and messages
  check     run integrity checks; --site also verifies links on disk
  fmt       re-emit in the generator's normalized format
  export    convert to JSON for other tooling
  import    convert JSON back to a navtree script

Checks distinguish errors (empty labels, empty child lists, bare-fragment
hrefs, invalid index paths) from warnings (index entries unmatched in the
tree, duplicates) — warnings never fail the exit code.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a navtree data file and print its contents
    Show {
        /// Path to navtreedata.js
        file: PathBuf,
    },
    /// Run data-integrity checks; exits non-zero on errors
    Check {
        /// Path to navtreedata.js
        file: PathBuf,
        /// Documentation root directory — verify that every referenced
        /// page exists on disk
        #[arg(long)]
        site: Option<PathBuf>,
    },
    /// Parse and re-emit in normalized form
    Fmt {
        /// Path to navtreedata.js
        file: PathBuf,
        /// Write here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Convert a navtree data file to JSON
    Export {
        /// Path to navtreedata.js
        file: PathBuf,
        /// Write here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Convert a JSON document back to a navtree data file
    Import {
        /// Path to the JSON document
        file: PathBuf,
        /// Write here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Show { file } => {
            let data = parse::parse_file(&file)?;
            output::print_show(&data);
        }
        Command::Check { file, site } => {
            let data = parse::parse_file(&file)?;
            let mut findings = check::check(&data);
            if let Some(site_root) = site {
                findings.extend(check::check_site(&data, &site_root)?);
            }
            output::print_check(&findings);
            if check::has_errors(&findings) {
                std::process::exit(1);
            }
        }
        Command::Fmt { file, output } => {
            let data = parse::parse_file(&file)?;
            write_result(output, emit::emit(&data))?;
        }
        Command::Export { file, output } => {
            let data = parse::parse_file(&file)?;
            let mut json = serde_json::to_string_pretty(&data)?;
            json.push('\n');
            write_result(output, json)?;
        }
        Command::Import { file, output } => {
            let content = fs::read_to_string(&file)?;
            let data: NavTreeData = serde_json::from_str(&content)?;
            write_result(output, emit::emit(&data))?;
        }
    }

    Ok(())
}

/// Write to the target path, or stdout when none was given.
fn write_result(target: Option<PathBuf>, content: String) -> std::io::Result<()> {
    match target {
        Some(path) => fs::write(path, content),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
