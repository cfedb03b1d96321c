use rand::Rng;

/// Default number of digits in an OTP code
pub const DEFAULT_OTP_LENGTH: usize = 6;

/// Largest OTP length accepted over HTTP
pub const MAX_OTP_LENGTH: usize = 32;

/// OTP expiration time in seconds
pub const OTP_EXPIRATION_SECONDS: u64 = 60;

/// Source of decimal digits for OTP codes.
///
/// Implementations must only ever return ASCII digits `'0'..='9'`.
pub trait DigitSource: Send + Sync {
    fn next_digit(&self) -> char;
}

/// Uniformly random digits from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomDigits;

impl DigitSource for RandomDigits {
    fn next_digit(&self) -> char {
        let mut rng = rand::rng();
        let digit: u8 = rng.random_range(0..10);
        char::from(b'0' + digit)
    }
}

/// Generate a numeric OTP code of `length` digits, drawn in order
pub fn generate_otp_code(digits: &dyn DigitSource, length: usize) -> String {
    (0..length)
        .map(|_| {
            let c = digits.next_digit();
            debug_assert!(c.is_ascii_digit(), "digit source returned {:?}", c);
            c
        })
        .collect()
}

/// Replays a fixed digit string, wrapping around at the end
#[cfg(test)]
pub struct ScriptedDigits {
    script: Vec<char>,
    cursor: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl ScriptedDigits {
    pub fn new(script: &str) -> Self {
        assert!(script.chars().all(|c| c.is_ascii_digit()) && !script.is_empty());
        Self {
            script: script.chars().collect(),
            cursor: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
impl DigitSource for ScriptedDigits {
    fn next_digit(&self) -> char {
        let i = self
            .cursor
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.script[i % self.script.len()]
    }
}
