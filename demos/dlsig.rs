// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use dlsig_rs::{generate_keypair, sign, verify, GroupParameters};

fn main() {
    let mut rng = rand::thread_rng();
    let params = GroupParameters::rfc3526(&mut rng).expect("group");
    let (pk, sk) = generate_keypair(&params).expect("key pair");

    let message = String::from("Hello DLSIG.");
    let signature = sign(message.as_bytes(), &sk).expect("signature");
    println!("pubkey: {}", pk.y().to_str_radix(16));
    println!("r: {}", signature.r.to_str_radix(16));
    println!("s: {}", signature.s.to_str_radix(16));
    println!("valid: {}", verify(message.as_bytes(), &signature, &pk));
}
