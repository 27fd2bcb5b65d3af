//! `contract`: an on-chain contract registered by a seller.

use crate::scalars::{Jsonb, Timestamptz, Uuid};

crate::table! {
    /// A smart contract registration. `definition` holds the ABI.
    pub struct Contract = "contract";
    primary_key { id: Uuid }
    columns {
        ordered {
            Address address: String,
            Chain chain: String,
            ContractType contract_type: String,
            CreatedAt created_at: Timestamptz,
            DisplayName display_name: Option<String>,
            Id id: Uuid,
            SellerId seller_id: Uuid,
        }
        numeric {}
        jsonb {
            Definition definition: Option<Jsonb>,
        }
        other {
            IsVerified is_verified: bool,
        }
    }
    constraints {
        ContractChainAddressKey = "contract_chain_address_key" (chain, address),
        ContractPkey = "contract_pkey" (id),
    }
    object_relationships { seller: super::seller::Seller }
    array_relationships {
        airdrops / airdrops_aggregate: super::airdrop::Airdrop,
        checkouts / checkouts_aggregate: super::checkout::Checkout,
        contract_authorized_sellers / contract_authorized_sellers_aggregate: super::contract_authorized_seller::ContractAuthorizedSeller,
    }
}
