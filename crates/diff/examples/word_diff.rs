use markup_diff::{compute_diff, compute_inline_diff, ChangeKind, DiffConfig, Granularity};

fn main() {
    env_logger::init();

    // Sample texts with word-level differences
    let text1 = "The issuer shall publish an announcement as soon as practicable.";
    let text2 = "The issuer must publish a formal announcement as soon as reasonably practicable.";

    println!("=== Word-level diff ===");
    let result = compute_diff(text1, text2);
    for change in &result.changes {
        match change.kind {
            ChangeKind::Unchanged => println!("  = {:?}", change.content),
            ChangeKind::Addition => println!("  \x1b[32m+ {:?}\x1b[0m", change.content),
            ChangeKind::Deletion => println!(
                "  \x1b[31m- {:?}\x1b[0m",
                change.original_content.as_deref().unwrap_or_default()
            ),
            ChangeKind::Modification => println!(
                "  \x1b[33m~ {:?} -> {:?}\x1b[0m",
                change.original_content.as_deref().unwrap_or_default(),
                change.content
            ),
        }
    }

    println!("\nSummary: {}", result.stats);
    println!("Markup:\n{}", result.marked_up_text);

    println!("\n=== Character-level diff ===");
    let config = DiffConfig::default().granularity(Granularity::Character);
    let result = config.diff("colour", "color");
    println!("Summary: {}", result.summary());
    println!("Markup: {}", result.marked_up_text);

    println!("\n=== Inline diff ===");
    let inline = compute_inline_diff("HK$1.5bn", "HK$2.5bn");
    println!("Original: {}", inline.original_marked);
    println!("Modified: {}", inline.modified_marked);
}
