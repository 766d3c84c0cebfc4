/*
[INPUT]:  Mint addresses extracted from payment failures
[OUTPUT]: Confirmed associated token accounts for the paying wallet
[POS]:    Payment layer - on-chain account provisioning
[UPDATE]: When the provisioning flow or RPC stack changes
*/

use async_trait::async_trait;
use solana_commitment_config::CommitmentConfig;
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_signer::Signer;
use solana_transaction::Transaction;
use spl_associated_token_account_client::address::get_associated_token_address_with_program_id;
use spl_associated_token_account_client::instruction::create_associated_token_account_idempotent;
use tracing::{debug, info};

use crate::http::{Result, SigilError};

/// Trait for provisioning the paying wallet's associated token account
#[async_trait]
pub trait AtaProvisioner: Send + Sync {
    /// Ensure the paying wallet holds an associated token account for `mint`
    async fn ensure_token_account(&self, mint: &str) -> Result<()>;
}

/// Provisioner backed by a Solana RPC endpoint
///
/// Flow: verify the mint exists (its owner selects the token program),
/// derive the associated token account address, skip creation when the
/// account is already present, otherwise submit a create-idempotent
/// transaction and wait for confirmed commitment.
pub struct RpcAtaProvisioner {
    rpc: RpcClient,
    payer: Keypair,
}

impl RpcAtaProvisioner {
    pub fn new(rpc_url: &str, payer: Keypair) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(
                rpc_url.to_string(),
                CommitmentConfig::confirmed(),
            ),
            payer,
        }
    }
}

#[async_trait]
impl AtaProvisioner for RpcAtaProvisioner {
    async fn ensure_token_account(&self, mint: &str) -> Result<()> {
        let mint: Pubkey = mint
            .parse()
            .map_err(|e| SigilError::Payment(format!("invalid mint address: {e}")))?;

        let mint_account = self
            .rpc
            .get_account(&mint)
            .await
            .map_err(|e| SigilError::Payment(format!("mint {mint} not found: {e}")))?;
        let token_program = mint_account.owner;

        let owner = self.payer.pubkey();
        let token_account =
            get_associated_token_address_with_program_id(&owner, &mint, &token_program);

        let existing = self
            .rpc
            .get_account_with_commitment(&token_account, CommitmentConfig::confirmed())
            .await
            .map_err(|e| SigilError::Payment(format!("account lookup failed: {e}")))?;
        if existing.value.is_some() {
            debug!(%token_account, "associated token account already exists");
            return Ok(());
        }

        let instruction =
            create_associated_token_account_idempotent(&owner, &owner, &mint, &token_program);
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .await
            .map_err(|e| SigilError::Payment(format!("failed to fetch blockhash: {e}")))?;
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&owner),
            &[&self.payer],
            blockhash,
        );

        let signature = self
            .rpc
            .send_and_confirm_transaction(&transaction)
            .await
            .map_err(|e| SigilError::Payment(format!("token account creation failed: {e}")))?;
        info!(%token_account, %signature, "created associated token account");

        Ok(())
    }
}
