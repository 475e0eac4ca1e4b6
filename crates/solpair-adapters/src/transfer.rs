//! Unsigned System Program transfer construction.
//!
//! The relay expects the wire-format transaction, base64-encoded, with the
//! signature slots left zeroed; the paired wallet signs out of band.

use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use solana_sdk::{
    hash::Hash, message::Message, pubkey::Pubkey, system_instruction, transaction::Transaction,
};

use solpair_core::RelayError;

/// Build a single-instruction transfer with the sender as fee payer and
/// serialize it unsigned. `sender` comes from the relay's code resolution,
/// `recipient` from user input.
pub fn build_unsigned_transfer(
    sender: &str,
    recipient: &str,
    lamports: u64,
    blockhash: &str,
) -> Result<String, RelayError> {
    let from = Pubkey::from_str(sender)
        .map_err(|e| RelayError::Malformed(format!("sender pubkey {sender:?}: {e}")))?;
    let to = Pubkey::from_str(recipient)
        .map_err(|e| RelayError::InvalidRecipient(format!("{recipient}: {e}")))?;
    let recent = Hash::from_str(blockhash)
        .map_err(|e| RelayError::Malformed(format!("blockhash {blockhash:?}: {e}")))?;

    let instruction = system_instruction::transfer(&from, &to, lamports);
    let message = Message::new_with_blockhash(&[instruction], Some(&from), &recent);
    let tx = Transaction::new_unsigned(message);

    let bytes = bincode::serialize(&tx)
        .map_err(|e| RelayError::Malformed(format!("transaction encoding: {e}")))?;
    Ok(STANDARD.encode(bytes))
}
