use prime_shamir::{
    Config, DECIMAL, PAD_MARKER, SHARE_ALPHABET, SecretSharing, convert_base,
};

#[test]
fn test_shares_are_printable_alphabet_strings() {
    let mut scheme = SecretSharing::builder(5, 3).build().unwrap();
    let shares = scheme.share(b"printable").unwrap();

    for share in &shares {
        assert!(
            share
                .chars()
                .all(|c| SHARE_ALPHABET.contains(c) || c == PAD_MARKER)
        );
    }
}

#[test]
fn test_share_metadata_fields() {
    let mut scheme = SecretSharing::builder(3, 2).build().unwrap();
    let shares = scheme.share(b"AB").unwrap();

    // 1-byte chunks: tag '1', field width 2, one field each for threshold,
    // sequence number and the two chunk values
    for (i, share) in shares.iter().enumerate() {
        assert_eq!(share.len(), 1 + 4 * 2);
        assert!(share.starts_with('1'));
        assert_eq!(&share[1..3], "02", "threshold field");
        let sequence = convert_base(&share[3..5], SHARE_ALPHABET, DECIMAL).unwrap();
        assert_eq!(sequence, (i + 1).to_string(), "sequence number field");
    }
}

#[test]
fn test_shares_of_one_operation_have_equal_length() {
    let mut scheme = SecretSharing::builder(7, 4).build().unwrap();
    let shares = scheme.share(b"some longer secret material").unwrap();
    let length = shares[0].len();
    assert!(shares.iter().all(|share| share.len() == length));
}

#[test]
fn test_pad_marker_run_reflects_partial_chunk() {
    // 3 secret bytes in 2-byte chunks leave one padding byte
    let config = Config::new().with_chunk_size(2).unwrap();
    let mut scheme = SecretSharing::builder(3, 2)
        .with_config(config)
        .build()
        .unwrap();

    let shares = scheme.share(b"abc").unwrap();
    for share in &shares {
        assert!(share.ends_with(PAD_MARKER));
        assert!(!share.ends_with("=="));
    }
    assert_eq!(SecretSharing::recover(&shares[0..2]).unwrap(), b"abc");
}

#[test]
fn test_aligned_secret_has_no_pad_markers() {
    let config = Config::new().with_chunk_size(2).unwrap();
    let mut scheme = SecretSharing::builder(3, 2)
        .with_config(config)
        .build()
        .unwrap();

    let shares = scheme.share(b"abcd").unwrap();
    for share in &shares {
        assert!(!share.contains(PAD_MARKER));
    }
}

#[test]
fn test_shares_are_pairwise_distinct() {
    let mut scheme = SecretSharing::builder(5, 3).build().unwrap();
    let shares = scheme.share(b"distinct").unwrap();
    for i in 0..shares.len() {
        for j in (i + 1)..shares.len() {
            assert_ne!(shares[i], shares[j]);
        }
    }
}

#[test]
fn test_alphabet_and_pad_marker_are_disjoint() {
    assert!(!SHARE_ALPHABET.contains(PAD_MARKER));
    // 46 distinct symbols
    let mut symbols: Vec<char> = SHARE_ALPHABET.chars().collect();
    assert_eq!(symbols.len(), 46);
    symbols.dedup();
    assert_eq!(symbols.len(), 46);
}
