// Console Shell
// Interactive menu loop driving the RSA core; owns all session state

use std::io::{self, Write};

use anyhow::{Context, Result};
use rand::rngs::ThreadRng;

use crate::rsa::{
    decode_message, decrypt_blocks, encode_message, encrypt_blocks, generate_keypair,
    CipherBlocks, KeyGenConfig, RsaKeyPair,
};
use crate::util::format::{format_blocks_dec, format_blocks_hex};

/// Session state owned by the menu loop. The core keeps nothing between
/// calls; the current keypair and ciphertext buffer live here.
struct Session {
    keypair: Option<RsaKeyPair>,
    ciphertext: Option<CipherBlocks>,
}

impl Session {
    fn new() -> Self {
        Self {
            keypair: None,
            ciphertext: None,
        }
    }
}

/// Run the interactive menu until the user exits.
pub fn run() -> Result<()> {
    let config = KeyGenConfig::default();
    let mut rng = rand::thread_rng();
    let mut session = Session::new();

    loop {
        println!();
        println!("{}", "=".repeat(40));
        println!("   RSA ENCRYPTION TOOL");
        println!("{}", "=".repeat(40));
        println!("1. [Setup] Generate key pair");
        println!("2. [Operation] Encrypt message");
        println!("3. [Operation] Decrypt current buffer");
        println!("0. Exit");

        let choice = prompt("\nChoose an operation: ")?;

        match choice.as_str() {
            "1" => generate_keys(&config, &mut rng, &mut session),
            "2" => encrypt_message(&mut session)?,
            "3" => decrypt_buffer(&session),
            "0" => {
                println!("Shutting down...");
                break;
            }
            _ => println!("Unknown option."),
        }
    }

    Ok(())
}

fn generate_keys(config: &KeyGenConfig, rng: &mut ThreadRng, session: &mut Session) {
    println!("\n[System] Generating cryptographic keys...");

    match generate_keypair(config, rng) {
        Ok(keypair) => {
            println!(" -> Primes chosen (via sieve): p={}, q={}", keypair.p, keypair.q);
            println!(" -> Modulus n: {}", keypair.public_key.n);
            println!(" -> Phi(n): {}", keypair.totient());
            println!("\n[Success] Keys generated:");
            println!(
                " >> Public (e, n): ({}, {})",
                keypair.public_key.e, keypair.public_key.n
            );
            println!(
                " >> Private (d, n): ({}, {})",
                keypair.private_key.d, keypair.private_key.n
            );

            // A new keypair invalidates any ciphertext from the old one
            session.ciphertext = None;
            session.keypair = Some(keypair);
        }
        Err(e) => println!("[Critical] {}", e),
    }
}

fn encrypt_message(session: &mut Session) -> Result<()> {
    let Some(keypair) = session.keypair.as_ref() else {
        println!("[!] Generate keys first (option 1).");
        return Ok(());
    };

    let text = prompt("Enter the message text: ")?;
    let blocks = encode_message(&text);
    println!("\n[Encoding] Original message: '{}'", text);
    println!("[Encoding] Hex representation: {}", format_blocks_hex(&blocks));

    match encrypt_blocks(&blocks, &keypair.public_key) {
        Ok(cipher) => {
            println!("[Encryption] Cipher blocks: {}", format_blocks_dec(&cipher.blocks));
            session.ciphertext = Some(cipher);
        }
        Err(e) => println!("[Error] {}", e),
    }

    Ok(())
}

fn decrypt_buffer(session: &Session) {
    let (Some(keypair), Some(cipher)) = (session.keypair.as_ref(), session.ciphertext.as_ref())
    else {
        println!("[!] Nothing to decrypt. Encrypt something first.");
        return;
    };

    let blocks = decrypt_blocks(cipher, &keypair.private_key);
    match decode_message(&blocks) {
        Ok(text) => println!("[Decryption] Recovered message: '{}'", text),
        Err(e) => println!("[Error] {}", e),
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}
