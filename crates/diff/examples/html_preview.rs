use anyhow::{Context, Result};
use markup_diff::{DiffAlgorithm, DiffConfig, Granularity};
use std::env;
use std::fs;
use std::path::Path;

const STYLE: &str = "\
.diff-addition { background: #e6ffec; }
.diff-deletion { background: #ffebe9; text-decoration: line-through; }
.diff-modification { background: #fff8c5; border-bottom: 1px dotted #9a6700; }
body { font-family: sans-serif; white-space: pre-wrap; max-width: 60em; margin: 2em auto; }
";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        println!("Usage: html_preview <old_file> <new_file> [output_file] [options]");
        println!("Options:");
        println!("  --char        Perform character-level diffing (default is word-level)");
        println!("  --myers       Use the Myers algorithm (default is the LCS table)");
        println!("  --no-limit    Diff inputs of any size");
        return Ok(());
    }

    let old_file = &args[1];
    let new_file = &args[2];
    let output_file = args.get(3).filter(|arg| !arg.starts_with("--"));

    let old_content = read_file(old_file)?;
    let new_content = read_file(new_file)?;

    let mut config = DiffConfig::default();
    for arg in &args[3..] {
        match arg.as_str() {
            "--char" => config = config.granularity(Granularity::Character),
            "--myers" => config = config.algorithm(DiffAlgorithm::Myers),
            "--no-limit" => config = config.max_table_cells(None),
            _ => {}
        }
    }

    let result = config.try_diff(&old_content, &new_content)?;

    let page = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n<p><strong>{}</strong></p>\n<div>{}</div>\n</body>\n</html>\n",
        markup_diff::escape_html(new_file),
        STYLE,
        result.stats,
        result.marked_up_text
    );

    match output_file {
        Some(path) => {
            fs::write(path, page).with_context(|| format!("failed to write {}", path))?;
            println!("Wrote {} ({})", path, result.stats);
        }
        None => print!("{}", page),
    }

    Ok(())
}

fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
