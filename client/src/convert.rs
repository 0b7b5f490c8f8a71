//! Conversion from the JSON-facing types into on-chain instruction payloads.

use anyhow::{
    anyhow,
    Result,
};
use metadata_interface::state::{
    Creator,
    DataV2,
};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::data::{
    NFTCreator,
    NFTData,
};

pub fn convert_local_to_remote_data(local: NFTData) -> Result<DataV2> {
    let creators = local
        .creators
        .ok_or_else(|| anyhow!("no creators specified in json file"))?
        .iter()
        .map(convert_creator)
        .collect::<Result<Vec<Creator>>>()?;

    Ok(DataV2 {
        name: local.name,
        symbol: local.symbol,
        uri: local.uri,
        seller_fee_basis_points: local.seller_fee_basis_points,
        creators: Some(creators),
        collection: None,
        uses: None,
    })
}

fn convert_creator(c: &NFTCreator) -> Result<Creator> {
    Ok(Creator {
        address: Pubkey::from_str(&c.address)?,
        verified: c.verified,
        share: c.share,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nft_data(creators: Option<Vec<NFTCreator>>) -> NFTData {
        NFTData {
            name: "Test #1".to_string(),
            symbol: "TEST".to_string(),
            uri: "https://example.com/1.json".to_string(),
            seller_fee_basis_points: 250,
            creators,
        }
    }

    #[test]
    fn converts_creators() {
        let address = Pubkey::new_unique();
        let data = convert_local_to_remote_data(nft_data(Some(vec![NFTCreator {
            address: address.to_string(),
            verified: false,
            share: 100,
        }])))
        .unwrap();

        assert_eq!(data.name, "Test #1");
        assert_eq!(
            data.creators,
            Some(vec![Creator {
                address,
                verified: false,
                share: 100
            }])
        );
        assert_eq!(data.collection, None);
    }

    #[test]
    fn missing_creators_is_an_error() {
        assert!(convert_local_to_remote_data(nft_data(None)).is_err());
    }

    #[test]
    fn bad_creator_address_is_an_error() {
        let result = convert_local_to_remote_data(nft_data(Some(vec![NFTCreator {
            address: "garbage".to_string(),
            verified: false,
            share: 100,
        }])));

        assert!(result.is_err());
    }
}
