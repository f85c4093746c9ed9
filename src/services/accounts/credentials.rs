//! Random credential generation for account provisioning.

use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of randomly generated usernames.
pub const USERNAME_LEN: usize = 10;

/// Length of generated account passwords.
pub const PASSWORD_LEN: usize = 12;

fn random_string(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generate a random `[a-z0-9]` username.
pub fn random_username() -> String {
    random_string(USERNAME_LEN)
}

/// Generate a random `[a-z0-9]` password.
pub fn random_password() -> String {
    random_string(PASSWORD_LEN)
}
