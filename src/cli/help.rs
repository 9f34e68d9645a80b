//! Help message display for CLI.

#![allow(clippy::print_stdout)]

/// Print a short usage guide when no inputs were given.
pub fn print_usage_help() {
    println!("Cut the phrases of a FLEx text out of its recording:");
    println!();
    println!("   flexclip story.flextext story.wav");
    println!();
    println!("Pick a text by its title abbreviation and write clips elsewhere:");
    println!();
    println!("   flexclip story.flextext story.wav --text ABC --out-dir clips");
    println!();
    println!("See which texts a file contains:");
    println!();
    println!("   flexclip texts story.flextext");
    println!();
    println!("Existing clips are never overwritten, so runs can be repeated safely.");
    println!();
    println!("Run 'flexclip -h' for all options.");
}
