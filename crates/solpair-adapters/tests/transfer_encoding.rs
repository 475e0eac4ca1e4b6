use base64::{engine::general_purpose::STANDARD, Engine as _};
use solana_sdk::{hash::Hash, pubkey::Pubkey, system_program, transaction::Transaction};

use solpair_adapters::transfer::build_unsigned_transfer;
use solpair_core::{lamports_from_sol, RelayError};

#[test]
fn unsigned_transfer_round_trips_through_the_wire_format() {
    let sender = Pubkey::new_unique();
    let recipient = Pubkey::new_unique();
    let blockhash = Hash::new_unique();
    let lamports = lamports_from_sol(1.5).expect("1.5 SOL");

    let encoded = build_unsigned_transfer(
        &sender.to_string(),
        &recipient.to_string(),
        lamports,
        &blockhash.to_string(),
    )
    .expect("build transfer");

    let bytes = STANDARD.decode(&encoded).expect("base64");
    let tx: Transaction = bincode::deserialize(&bytes).expect("wire transaction");

    assert_eq!(tx.message.account_keys[0], sender);
    assert_eq!(tx.message.account_keys[1], recipient);
    assert_eq!(tx.message.recent_blockhash, blockhash);
    assert_eq!(tx.message.header.num_required_signatures, 1);
    assert!(tx.signatures.iter().all(|sig| *sig == Default::default()));

    let ix = &tx.message.instructions[0];
    assert_eq!(
        tx.message.account_keys[ix.program_id_index as usize],
        system_program::id()
    );
    assert_eq!(&ix.data[4..12], &lamports.to_le_bytes());
}

#[test]
fn zero_lamport_transfers_are_allowed() {
    let sender = Pubkey::new_unique();
    let recipient = Pubkey::new_unique();
    let blockhash = Hash::new_unique();

    let encoded = build_unsigned_transfer(
        &sender.to_string(),
        &recipient.to_string(),
        lamports_from_sol(0.0).expect("0 SOL"),
        &blockhash.to_string(),
    )
    .expect("build transfer");

    let bytes = STANDARD.decode(&encoded).expect("base64");
    let tx: Transaction = bincode::deserialize(&bytes).expect("wire transaction");
    assert_eq!(&tx.message.instructions[0].data[4..12], &0u64.to_le_bytes());
}

#[test]
fn invalid_recipient_is_its_own_error_kind() {
    let sender = Pubkey::new_unique();
    let blockhash = Hash::new_unique();

    let err = build_unsigned_transfer(
        &sender.to_string(),
        "not-a-pubkey",
        1,
        &blockhash.to_string(),
    )
    .expect_err("bad recipient");
    assert!(matches!(err, RelayError::InvalidRecipient(_)));
}

#[test]
fn garbled_resolve_pubkey_is_reported_as_malformed() {
    let recipient = Pubkey::new_unique();
    let blockhash = Hash::new_unique();

    let err = build_unsigned_transfer(
        "!!!",
        &recipient.to_string(),
        1,
        &blockhash.to_string(),
    )
    .expect_err("bad sender");
    assert!(matches!(err, RelayError::Malformed(_)));
}
