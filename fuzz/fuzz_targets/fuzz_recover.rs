#![no_main]

use libfuzzer_sys::fuzz_target;
use prime_shamir::SecretSharing;

// Fuzzing target for SecretSharing::recover
//
// Treats the fuzzer input as newline-separated candidate share strings and
// ensures recovery always returns a proper Result and never panics, no
// matter how malformed the share grammar, metadata fields or symbol
// content are.
fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Cap the share count to keep iterations fast
    let shares: Vec<String> = text.lines().take(16).map(str::to_string).collect();
    let _ = SecretSharing::recover(&shares);
});
