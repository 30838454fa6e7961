use colored::Colorize;
use indicatif::ProgressBar;
use std::time::Duration;

use crate::docs::{DocTopic, SHOPIFY_DEV_BASE_URL};
use crate::emit::EmitSummary;
use crate::scaffold::FileMapping;

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn print_file_tree(files: &FileMapping) {
    println!(
        "\n{}",
        "┏━━━━━━━━━━━━━━━━━━━━ Generated Files ━━━━━━━━━━━━━━━━━━━┓".bold()
    );
    for (path, content) in files {
        println!(
            "  {}  {}",
            path.green().bold(),
            format!("({} bytes)", content.len()).dimmed()
        );
    }
    println!(
        "{}",
        "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold()
    );
    println!("  {} file(s)\n", files.len());
}

pub fn print_emit_dashboard(sum: &EmitSummary) {
    println!(
        "\n{}",
        "┏━━━━━━━━━━━━━━━━━━━━━ Write Results ━━━━━━━━━━━━━━━━━━━━┓".bold()
    );
    println!(
        "  {}: {}   {}: {}B",
        "Written".green().bold(),
        sum.created,
        "Bytes".bold(),
        sum.bytes_written
    );
    println!(
        "{}",
        "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold()
    );
    for p in &sum.paths {
        println!("  {}", p.display());
    }
    println!();
}

pub fn print_doc_topic(topic: &DocTopic) {
    println!(
        "{}  {}{}",
        topic.title.bold(),
        SHOPIFY_DEV_BASE_URL,
        topic.url
    );
    println!("  {}", topic.description.dimmed());
}
