//! Integration tests for the star ledger public API

use ed25519_dalek::{Signer, SigningKey};
use star_ledger::{
    Challenge, DefaultStarLedger, LedgerConfig, LedgerError, Sha256Hasher, StarLedger,
    StdErrLogger,
};

fn wallet(seed: u8) -> (SigningKey, String) {
    let key = SigningKey::from_bytes(&[seed; 32]);
    let address = hex::encode(key.verifying_key().to_bytes());
    (key, address)
}

fn sign(key: &SigningKey, message: &str) -> String {
    hex::encode(key.sign(message.as_bytes()).to_bytes())
}

#[test]
fn test_fresh_ledger_has_only_genesis() {
    let ledger = DefaultStarLedger::new(Sha256Hasher).unwrap();

    assert_eq!(ledger.height(), 0);
    assert_eq!(ledger.len(), 1);
    assert!(ledger.validate().is_empty());

    let genesis = ledger.block_by_height(0).unwrap();
    assert!(genesis.is_genesis());
    assert!(genesis.previous_hash.is_none());
}

#[test]
fn test_challenge_shape() {
    let ledger = DefaultStarLedger::new(Sha256Hasher).unwrap();
    let message = ledger.request_challenge("aabbcc");

    let challenge = Challenge::parse(&message).unwrap();
    assert_eq!(challenge.address, "aabbcc");
    assert_eq!(challenge.suffix, "starRegistry");
    assert!(challenge.issued_at > 0);
}

#[test]
fn test_submit_and_query_round_trip() {
    let mut ledger = DefaultStarLedger::new(Sha256Hasher).unwrap();
    let (key, address) = wallet(1);

    let message = ledger.request_challenge(&address);
    let signature = sign(&key, &message);
    let star = serde_json::json!({"dec": "68° 52' 56.9", "ra": "16h 29m 1.0s", "story": "first"});

    let hash_hex = {
        let block = ledger
            .submit_star(&address, &message, &signature, star.clone())
            .unwrap();
        assert_eq!(block.height, 1);
        block.hash_hex()
    };

    assert_eq!(ledger.height(), 1);
    assert_eq!(ledger.block_by_hash_hex(&hash_hex).unwrap().height, 1);

    let stars = ledger.stars_by_owner(&address);
    assert_eq!(stars.len(), 1);
    assert_eq!(stars[0].owner, address);
    assert_eq!(stars[0].star, star);
}

#[test]
fn test_multiple_owners_query_isolation() {
    let mut ledger = DefaultStarLedger::new(Sha256Hasher).unwrap();
    let (key_a, addr_a) = wallet(1);
    let (key_b, addr_b) = wallet(2);

    for (key, addr, dec) in [(&key_a, &addr_a, "1"), (&key_b, &addr_b, "2"), (&key_a, &addr_a, "3")] {
        let message = ledger.request_challenge(addr);
        let signature = sign(key, &message);
        ledger
            .submit_star(addr, &message, &signature, serde_json::json!({"dec": dec, "ra": "0"}))
            .unwrap();
    }

    assert_eq!(ledger.height(), 3);
    let stars_a = ledger.stars_by_owner(&addr_a);
    assert_eq!(stars_a.len(), 2);
    assert_eq!(stars_a[0].star["dec"], "1");
    assert_eq!(stars_a[1].star["dec"], "3");
    assert_eq!(ledger.stars_by_owner(&addr_b).len(), 1);
    assert!(ledger.stars_by_owner("ffff").is_empty());
}

#[test]
fn test_signature_from_wrong_wallet_rejected() {
    let mut ledger = DefaultStarLedger::new(Sha256Hasher).unwrap();
    let (intruder_key, _) = wallet(1);
    let (_, address) = wallet(2);

    let message = ledger.request_challenge(&address);
    let signature = sign(&intruder_key, &message);

    let err = ledger
        .submit_star(&address, &message, &signature, serde_json::json!({"dec": "1", "ra": "2"}))
        .unwrap_err();

    assert!(matches!(err, LedgerError::InvalidSignature { .. }));
    assert_eq!(ledger.height(), 0);
}

#[test]
fn test_stale_challenge_rejected() {
    let mut ledger = DefaultStarLedger::new(Sha256Hasher).unwrap();
    let (key, address) = wallet(1);

    // Craft a challenge issued well beyond the window
    let stale = star_ledger::audit::current_timestamp() - 400;
    let message = Challenge::format(&address, stale, "starRegistry");
    let signature = sign(&key, &message);

    let err = ledger
        .submit_star(&address, &message, &signature, serde_json::json!({"dec": "1", "ra": "2"}))
        .unwrap_err();

    assert!(matches!(err, LedgerError::ExpiredChallenge { .. }));
    assert_eq!(ledger.height(), 0);
}

#[test]
fn test_linkage_survives_many_appends() {
    let mut ledger = DefaultStarLedger::new(Sha256Hasher).unwrap();
    let (key, address) = wallet(1);

    for _ in 0..20 {
        let message = ledger.request_challenge(&address);
        let signature = sign(&key, &message);
        ledger
            .submit_star(&address, &message, &signature, serde_json::json!({"dec": "1", "ra": "2"}))
            .unwrap();
    }

    assert_eq!(ledger.height(), 20);
    assert!(ledger.validate().is_empty());

    // Spot-check linkage through the query layer
    for h in 1..=20u64 {
        let block = ledger.block_by_height(h).unwrap();
        let parent = ledger.block_by_height(h - 1).unwrap();
        assert_eq!(block.previous_hash_hex(), Some(parent.hash_hex()));
    }
}

#[test]
fn test_custom_config_and_logger() {
    let config = LedgerConfig {
        challenge_window_secs: 60,
        challenge_suffix: "testRegistry".to_string(),
        genesis_data: "Test Genesis".to_string(),
        ..Default::default()
    };
    let ledger: StarLedger<[u8; 32], Sha256Hasher, StdErrLogger> =
        StarLedger::with_config_and_logger(Sha256Hasher, config, StdErrLogger).unwrap();

    let message = ledger.request_challenge("aabbcc");
    assert!(message.ends_with(":testRegistry"));

    let genesis: star_ledger::GenesisPayload =
        ledger.block_by_height(0).unwrap().decode_body().unwrap();
    assert_eq!(genesis.data, "Test Genesis");
}

#[test]
fn test_invalid_config_rejected() {
    let config = LedgerConfig {
        challenge_window_secs: 0,
        ..Default::default()
    };
    let result: Result<DefaultStarLedger, _> = StarLedger::with_config(Sha256Hasher, config);
    assert!(matches!(
        result,
        Err(LedgerError::InvalidConfiguration { .. })
    ));
}
