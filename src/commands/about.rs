//! About command - print the about page

use crate::about::{self, Block};
use crate::contact::CONTACT_EMAIL;
use crate::output;
use colored::Colorize;

/// Execute the about command
pub fn execute(brand_count: usize) {
    println!("{}", about::HERO_TITLE.bold());
    println!("{}\n", about::hero_text(brand_count));

    for section in about::SECTIONS {
        println!("{}", section.heading.bold().underline());
        for block in section.blocks {
            print_block(block);
        }
        println!();
    }

    println!("{} - {}", about::FOOTER_TITLE.bold(), about::FOOTER_TAGLINE.dimmed());
}

fn print_block(block: &Block) {
    match block {
        Block::Paragraph(text) => println!("{text}"),
        Block::Emphasis(lead, rest) if rest.is_empty() => println!("{}", lead.bold()),
        Block::Emphasis(lead, rest) => println!("{} {rest}", lead.bold()),
        Block::Bullets(items) => {
            for item in *items {
                println!("  • {item}");
            }
        }
        Block::Status(status, text) => println!("  {}  {text}", output::status_badge(*status)),
        Block::Contact(text) => println!("{text} {}", CONTACT_EMAIL.cyan().underline()),
    }
}
