//! Password generation.
//!
//! A secret is three dash-joined segments of 2, 4 and 12 characters, each
//! character sampled uniformly with replacement from [`POOL`].

use rand::rngs::OsRng;
use rand::Rng;
use zeroize::Zeroizing;

/// Characters a secret is drawn from.
pub const POOL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%&*()_+-=.,";

/// Length of each segment, in order.
pub const SEGMENT_LENGTHS: [usize; 3] = [2, 4, 12];

/// Separator between segments.
pub const SEPARATOR: char = '-';

/// Total length of a generated secret, separators included.
pub const SECRET_LEN: usize = 2 + 4 + 12 + 2;

const PREVIEW_LEN: usize = 4;

/// A generated password.
///
/// The backing buffer is zeroized on drop and `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Zeroizing<String>);

impl Secret {
    /// Wrap an existing value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// The clear-text value.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// First four characters, for console output.
    pub fn preview(&self) -> String {
        self.0.chars().take(PREVIEW_LEN).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret({}...)", self.preview())
    }
}

/// Generate a secret from the given randomness source.
pub fn generate_secret<R: Rng + ?Sized>(rng: &mut R) -> Secret {
    let mut value = String::with_capacity(SECRET_LEN);

    for (i, &len) in SEGMENT_LENGTHS.iter().enumerate() {
        if i > 0 {
            value.push(SEPARATOR);
        }
        for _ in 0..len {
            value.push(POOL[rng.gen_range(0..POOL.len())] as char);
        }
    }

    Secret::new(value)
}

/// Generate a secret from the operating system CSPRNG.
pub fn generate() -> Secret {
    generate_secret(&mut OsRng)
}
