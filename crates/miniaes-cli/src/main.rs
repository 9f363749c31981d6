//! Command-line interface for the mini-AES cipher.

#![forbid(unsafe_code)]

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use miniaes_core::{decrypt, encrypt, RoundKey};

/// Mini-AES CLI.
#[derive(Parser)]
#[command(
    name = "miniaes",
    version,
    about = "Single-round 2x2 AES over GF(2^3)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a plaintext string.
    Encrypt {
        /// Key as 12 binary digits.
        #[arg(long, value_name = "BITS")]
        key: String,
        /// Plaintext to encrypt.
        plaintext: String,
    },
    /// Decrypt a hex ciphertext.
    Decrypt {
        /// Key as 12 binary digits.
        #[arg(long, value_name = "BITS")]
        key: String,
        /// Ciphertext as hex digits.
        ciphertext: String,
    },
    /// Run the built-in encrypt/decrypt round-trip demos.
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Encrypt { key, plaintext }) => cmd_encrypt(&key, &plaintext),
        Some(Commands::Decrypt { key, ciphertext }) => cmd_decrypt(&key, &ciphertext),
        Some(Commands::Demo) => cmd_demo(),
        None => run_menu(),
    }
}

fn cmd_encrypt(key: &str, plaintext: &str) -> Result<()> {
    let ciphertext = encrypt(plaintext, key)?;
    println!("{ciphertext}");
    Ok(())
}

fn cmd_decrypt(key: &str, ciphertext: &str) -> Result<()> {
    let plaintext = decrypt(ciphertext.trim(), key)?;
    println!("{}", strip_padding(&plaintext));
    Ok(())
}

struct DemoCase {
    label: &'static str,
    plaintext: &'static str,
    key: &'static str,
}

const DEMO_CASES: &[DemoCase] = &[
    DemoCase {
        label: "Test 1 -- Short string",
        plaintext: "abc",
        key: "010100111100",
    },
    DemoCase {
        label: "Test 2 -- Single character",
        plaintext: "A",
        key: "110011001100",
    },
    DemoCase {
        label: "Test 3 -- Mixed content",
        plaintext: "Hello World!",
        key: "101010101010",
    },
    DemoCase {
        label: "Test 4 -- Repeated characters",
        plaintext: "aaaaaa",
        key: "111000111000",
    },
    DemoCase {
        label: "Test 5 -- Longer plaintext",
        plaintext: "BoJack Horseman",
        key: "010100111100",
    },
    DemoCase {
        label: "Test 6 -- Exact block boundary (3 chars = 24 bits = 2 blocks)",
        plaintext: "Hi!",
        key: "000111000111",
    },
];

fn cmd_demo() -> Result<()> {
    let separator = "*".repeat(60);
    println!("{separator}");
    println!("*  Mini-AES  //  Encrypt / Decrypt Round-Trip Tests");
    println!("{separator}");

    for case in DEMO_CASES {
        let ciphertext = encrypt(case.plaintext, case.key)?;
        let recovered = decrypt(&ciphertext, case.key)?;
        let recovered = strip_padding(&recovered);
        let status = if recovered == case.plaintext {
            "PASS"
        } else {
            "FAIL"
        };

        println!("*  {}", case.label);
        println!("*    Key:        {}", case.key);
        println!("*    Plaintext:  {:?}", case.plaintext);
        println!("*    Ciphertext: {ciphertext}");
        println!("*    Recovered:  {recovered:?}");
        println!("*    Result:     {status}");
        println!("{separator}");
    }
    Ok(())
}

fn run_menu() -> Result<()> {
    let banner = "*".repeat(50);
    println!("{banner}");
    println!("*  Mini-AES  //  2x2 Simplified AES in GF(2^3)");
    println!("{banner}");

    loop {
        println!();
        println!("*  [E] Encrypt");
        println!("*  [D] Decrypt");
        println!("*  [Q] Quit");
        let Some(choice) = read_line("*  > ")? else {
            break;
        };

        match choice.trim().to_lowercase().as_str() {
            "e" => {
                let Some(key) = prompt_key()? else { break };
                let Some(plaintext) = read_line("*  Enter plaintext: ")? else {
                    break;
                };
                let ciphertext = encrypt(&plaintext, &key)?;
                println!("*  Ciphertext (hex): {ciphertext}");
            }
            "d" => {
                let Some(key) = prompt_key()? else { break };
                let Some(ciphertext) = read_line("*  Enter ciphertext (hex): ")? else {
                    break;
                };
                match decrypt(ciphertext.trim(), &key) {
                    Ok(plaintext) => println!("*  Plaintext: {}", strip_padding(&plaintext)),
                    Err(err) => println!("*  Error: {err}"),
                }
            }
            "q" => {
                println!("*  Exiting.");
                break;
            }
            _ => println!("*  Invalid choice. Enter E, D, or Q."),
        }
    }
    Ok(())
}

fn prompt_key() -> Result<Option<String>> {
    loop {
        let Some(line) = read_line("*  Enter a 12-bit binary key: ")? else {
            return Ok(None);
        };
        let key = line.trim().to_string();
        match RoundKey::parse(&key) {
            Ok(_) => return Ok(Some(key)),
            Err(err) => println!("*  Error: {err}"),
        }
    }
}

// Returns None at end of input.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

// Block padding decrypts to trailing NULs.
fn strip_padding(plaintext: &str) -> &str {
    plaintext.trim_end_matches('\0')
}
