use std::time::Duration;

use spotshuffle::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // SHA256 digest is 32 bytes, 43 characters unpadded base64
    assert_eq!(challenge.len(), 43);

    // Should be deterministic - same input produces same output
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_code_challenge_matches_rfc7636_example() {
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    assert_eq!(
        generate_code_challenge(verifier),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn test_format_track_length() {
    assert_eq!(format_track_length(0), "0:00");
    assert_eq!(format_track_length(59_999), "0:59");
    assert_eq!(format_track_length(201_000), "3:21");
    assert_eq!(format_track_length(3_725_000), "1:02:05");
}

#[test]
fn test_format_elapsed() {
    assert_eq!(format_elapsed(Duration::from_millis(850)), "850ms");
    assert_eq!(format_elapsed(Duration::from_millis(4_270)), "4.27s");
    assert_eq!(format_elapsed(Duration::from_secs(185)), "3m 05s");
}

#[test]
fn test_parse_playlist_id_accepts_common_forms() {
    let id = "37i9dQZF1DXcBWIGoYBM5M";
    assert_eq!(parse_playlist_id(id).unwrap(), id);
    assert_eq!(
        parse_playlist_id("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M").unwrap(),
        id
    );
    assert_eq!(
        parse_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc123")
            .unwrap(),
        id
    );
}

#[test]
fn test_parse_playlist_id_rejects_garbage() {
    assert!(parse_playlist_id("").is_err());
    assert!(parse_playlist_id("https://open.spotify.com/playlist/").is_err());
    assert!(parse_playlist_id("not an id").is_err());
}
