//! `contract_authorized_seller`

use crate::scalars::{Timestamptz, Uuid};

crate::table! {
    /// Grant letting another seller sell from a contract.
    pub struct ContractAuthorizedSeller = "contract_authorized_seller";
    primary_key { id: Uuid }
    columns {
        ordered {
            ContractId contract_id: Uuid,
            CreatedAt created_at: Timestamptz,
            Id id: Uuid,
            SellerId seller_id: Uuid,
        }
        numeric {}
        jsonb {}
        other {}
    }
    constraints {
        ContractAuthorizedSellerContractIdSellerIdKey = "contract_authorized_seller_contract_id_seller_id_key" (contract_id, seller_id),
        ContractAuthorizedSellerPkey = "contract_authorized_seller_pkey" (id),
    }
    object_relationships {
        contract: super::contract::Contract,
        seller: super::seller::Seller,
    }
    array_relationships {}
}
