//! Hash a list of field elements and sign the digest.
//!
//! ```text
//! cargo run --example sign -- 0x1 0x2 0x3
//! ```
//!
//! The private key is read from the `STARK_PRIVATE_KEY` environment variable
//! when set, otherwise a random key is generated. Only the stark key, the
//! digest and the signature are printed.

use getrandom::SysRng;
use rand_core::UnwrapErr;
use stark252::{FieldElement, bridge, ecdsa::SigningKey, elliptic_curve::zeroize::Zeroizing};
use std::{env, error::Error, process::ExitCode};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let elements: Vec<String> = env::args().skip(1).collect();
    let elements: Vec<&str> = elements.iter().map(String::as_str).collect();

    let private_key = match env::var("STARK_PRIVATE_KEY") {
        Ok(private_key) => Zeroizing::new(private_key),
        Err(_) => {
            let signing_key = SigningKey::random(&mut UnwrapErr(SysRng));
            let private_key = Option::<FieldElement>::from(FieldElement::from_bytes(
                &signing_key.to_bytes(),
            ))
            .map(Zeroizing::new)
            .ok_or(stark252::Error::InvalidPrivateKey)?;
            Zeroizing::new(private_key.to_hex_string())
        }
    };

    let digest = bridge::compute_hash_on_elements(&elements)?;
    let stark_key = bridge::get_public_key(&private_key)?;
    let signature = bridge::ecdsa_sign(&private_key, &digest)?;

    println!("stark key: {stark_key}");
    println!("digest:    {digest}");
    println!("signature: {signature}");

    check_signature(&stark_key, &digest, &signature)
}

/// Fail unless `signature` verifies over `digest`.
fn check_signature(stark_key: &str, digest: &str, signature: &str) -> Result<(), Box<dyn Error>> {
    if bridge::ecdsa_verify(stark_key, digest, signature)? {
        Ok(())
    } else {
        Err("signature does not verify".into())
    }
}
