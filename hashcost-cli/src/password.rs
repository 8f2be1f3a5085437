// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use rand::{CryptoRng, RngCore};

/// Characters a generated password is drawn from.
pub const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

/// Where the benchmarked password came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordSource {
    Provided,
    Generated,
}

impl PasswordSource {
    pub fn describe(&self) -> &'static str {
        match self {
            PasswordSource::Provided => "Provided",
            PasswordSource::Generated => "Generated (random)",
        }
    }
}

/// Generate a random password of `length` characters from [CHARSET]. Each character is one random
/// byte reduced modulo the size of the charset, so the distribution is slightly biased. That is
/// fine for a benchmark payload.
pub fn generate_password<R: RngCore + CryptoRng>(rng: &mut R, length: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; length];
    rng.fill_bytes(&mut bytes);
    bytes
        .into_iter()
        .map(|b| CHARSET[b as usize % CHARSET.len()])
        .collect()
}

/// Pick the password to benchmark: a random one if `generate_length` is positive, otherwise the
/// provided one.
pub fn resolve_password<R: RngCore + CryptoRng>(
    rng: &mut R,
    provided: &str,
    generate_length: usize,
) -> (Vec<u8>, PasswordSource) {
    if generate_length > 0 {
        (
            generate_password(rng, generate_length),
            PasswordSource::Generated,
        )
    } else {
        (provided.as_bytes().to_vec(), PasswordSource::Provided)
    }
}
