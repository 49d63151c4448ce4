//! Interactive menu shell for the affine cipher.
//!
//! All cipher logic lives in the `affine-crypto` crate; this binary only
//! reads the key and message, calls into the core, and prints the results.

use affine_crypto::Key;
use affine_crypto::preset::encoding_table::ALPHABET_SIZE;
use affine_crypto::ring::mod_inverse;

use std::io::{self, Write};

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_int(label: &str) -> io::Result<Option<i64>> {
    let raw = prompt(label)?;
    Ok(raw.trim().parse::<i64>().ok())
}

fn print_banner() {
    let rule = "=".repeat(60);

    println!("{rule}");
    println!("         AFFINE CIPHER - alphabet {{A, B, ..., Z, space}}");
    println!("{rule}");
    println!("\nFormulas:");
    println!("  Encryption : C = (a * M + b) mod 27");
    println!("  Decryption : M = a^(-1) * (C - b) mod 27");
    println!("\nCondition: a must be invertible modulo 27,");
    println!("           that is GCD(a, 27) = 1");
    println!("{rule}");
}

fn print_menu() {
    let rule = "-".repeat(60);

    println!("\n{rule}");
    println!("MAIN MENU");
    println!("{rule}");
    println!("1. Encrypt a message");
    println!("2. Decrypt a message");
    println!("3. Quit");
    println!("{rule}");
}

fn read_key() -> io::Result<Option<Key>> {
    println!("\n--- Enter the key (a, b) ---");

    let Some(a) = prompt_int("Value of a: ")? else {
        println!("\nERROR: please enter whole numbers!");
        return Ok(None);
    };
    let Some(b) = prompt_int("Value of b: ")? else {
        println!("\nERROR: please enter whole numbers!");
        return Ok(None);
    };

    match Key::try_with(a, b) {
        Ok(key) => {
            log::debug!("key accepted: a = {}, b = {}", key.a, key.b);
            Ok(Some(key))
        }
        Err(err) => {
            println!("\nWARNING: {err}");
            println!("Please pick another a.");
            Ok(None)
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    print_banner();

    loop {
        print_menu();

        let choice = prompt("\nYour choice (1, 2 or 3): ")?;
        match choice.as_str() {
            "3" => {
                println!("\nGoodbye!");
                break;
            }
            "1" | "2" => {}
            _ => {
                println!("\nInvalid choice! Please pick 1, 2 or 3.");
                continue;
            }
        }

        let Some(key) = read_key()? else {
            continue;
        };

        let message = prompt("\nEnter the message: ")?;

        if choice == "1" {
            println!("\n--- ENCRYPTION ---");
            match key.encrypt(&message) {
                Ok(cipher) => {
                    println!("\nKey used: a = {}, b = {}", key.a, key.b);
                    println!("Original message : {message}");
                    println!("Encrypted message: {cipher}");
                }
                Err(err) => println!("\nERROR: {err}"),
            }
        } else {
            println!("\n--- DECRYPTION ---");
            match key.decrypt(&message) {
                Ok(decoded) => {
                    // key.a is reduced into [0, 27), the inverse always exists here
                    let a_inv = mod_inverse(key.a, i64::from(ALPHABET_SIZE));

                    println!("\nKey used: a = {}, b = {}", key.a, key.b);
                    if let Some(a_inv) = a_inv {
                        println!("Inverse of a modulo 27: a^(-1) = {a_inv}");
                    }
                    println!("Encrypted message: {message}");
                    println!("Decrypted message: {decoded}");
                }
                Err(err) => println!("\nERROR: {err}"),
            }
        }
    }

    Ok(())
}
