// src/cli/banner.rs
use console::style;

const LOGO: &str = r#"
  _____                           _____
 |  __ \                        / ____|
 | |__) |_ _ ___ ___  ___ _ __ | |  __  ___ _ __
 |  ___/ _` / __/ __|/ _ \ '_ \| | |_ |/ _ \ '_ \
 | |  | (_| \__ \__ \  __/ | | | |__| |  __/ | | |
 |_|   \__,_|___/___/\___|_| |_|\_____|\___|_| |_|

        Secure Password Generator
"#;

const SMALL_LOGO: &str = "PassenGen - Secure Passwords";

pub fn print_logo(small: bool) {
    let logo = if small { SMALL_LOGO } else { LOGO };
    println!("{}", style(logo).cyan().bold());
}

pub fn print_footer(seeded: bool) {
    println!();
    if seeded {
        println!("Password generated from a seed: anyone holding the seed can reproduce it.");
    } else {
        println!("Password generated using cryptographically secure methods.");
    }
    println!("Only the breach check (when requested) touches the network, and it sends a 5-character hash prefix.");
}
