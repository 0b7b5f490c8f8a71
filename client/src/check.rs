//! `key=value` predicates over decoded metadata accounts.
//!
//! Values parse from CLI-style strings (`name=DeGod`,
//! `creators=addr:true:100,addr2:false:0`) and check against a decoded
//! [`Metadata`].

use std::{
    fmt::Display,
    str::FromStr,
};

use anyhow::{
    anyhow,
    Result,
};
use metadata_interface::state::{
    Creator,
    Metadata,
    ProgrammableConfig,
    TokenStandard,
};

use crate::decode::ToPubkey;

#[derive(Debug, Clone)]
pub enum MetadataValue {
    Name(String),
    Symbol(String),
    Uri(String),
    SellerFeeBasisPoints(u16),
    Creators(Vec<Creator>),
    UpdateAuthority(String),
    PrimarySaleHappened(bool),
    IsMutable(bool),
    TokenStandard(String),
    CollectionParent(String),
    CollectionVerified(bool),
    RuleSet(String),
}

impl FromStr for MetadataValue {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("expected key=value, got {s:?}"))?;

        match key {
            "name" => Ok(MetadataValue::Name(value.to_string())),
            "symbol" => Ok(MetadataValue::Symbol(value.to_string())),
            "uri" => Ok(MetadataValue::Uri(value.to_string())),
            "sfbp" => Ok(MetadataValue::SellerFeeBasisPoints(value.parse::<u16>()?)),
            "creators" => {
                let creators = value
                    .split(',')
                    .map(parse_creator)
                    .collect::<Result<Vec<Creator>>>()?;

                Ok(MetadataValue::Creators(creators))
            }
            "update_authority" => Ok(MetadataValue::UpdateAuthority(value.to_string())),
            "primary_sale_happened" => {
                Ok(MetadataValue::PrimarySaleHappened(value.parse::<bool>()?))
            }
            "is_mutable" => Ok(MetadataValue::IsMutable(value.parse::<bool>()?)),
            "token_standard" => Ok(MetadataValue::TokenStandard(value.to_string())),
            "collection_parent" => Ok(MetadataValue::CollectionParent(value.to_string())),
            "collection_verified" => Ok(MetadataValue::CollectionVerified(value.parse::<bool>()?)),
            "rule_set" => Ok(MetadataValue::RuleSet(value.to_string())),
            _ => Err(anyhow!("invalid metadata key: {key}")),
        }
    }
}

fn parse_creator(s: &str) -> Result<Creator> {
    let mut parts = s.split(':');
    let mut next = |field| {
        parts
            .next()
            .ok_or_else(|| anyhow!("creator is missing the {field} field: {s:?}"))
    };

    let address = next("address")?.to_pubkey()?;
    let verified = next("verified")?.parse::<bool>()?;
    let share = next("share")?.parse::<u8>()?;

    Ok(Creator {
        address,
        verified,
        share,
    })
}

impl Display for MetadataValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetadataValue::Name(name) => write!(f, "name={name}"),
            MetadataValue::Symbol(symbol) => write!(f, "symbol={symbol}"),
            MetadataValue::Uri(uri) => write!(f, "uri={uri}"),
            MetadataValue::SellerFeeBasisPoints(sfbp) => write!(f, "sfbp={sfbp}"),
            MetadataValue::Creators(creators) => {
                let creators = creators
                    .iter()
                    .map(|c| format!("{}:{}:{}", c.address, c.verified, c.share))
                    .collect::<Vec<String>>()
                    .join(",");

                write!(f, "creators={creators}")
            }
            MetadataValue::UpdateAuthority(update_authority) => {
                write!(f, "update_authority={update_authority}")
            }
            MetadataValue::PrimarySaleHappened(primary_sale_happened) => {
                write!(f, "primary_sale_happened={primary_sale_happened}")
            }
            MetadataValue::IsMutable(is_mutable) => write!(f, "is_mutable={is_mutable}"),
            MetadataValue::TokenStandard(token_standard) => {
                write!(f, "token_standard={token_standard}")
            }
            MetadataValue::CollectionParent(collection_parent) => {
                write!(f, "collection_parent={collection_parent}")
            }
            MetadataValue::CollectionVerified(collection_verified) => {
                write!(f, "collection_verified={collection_verified}")
            }
            MetadataValue::RuleSet(rule_set) => write!(f, "rule_set={rule_set}"),
        }
    }
}

/// Checks a single predicate against a decoded metadata account.
///
/// Name matching is substring; everything else is exact. The on-chain strings
/// are NUL-padded to fixed width, so they are trimmed before comparison.
pub fn check_metadata_value(metadata: &Metadata, value: &MetadataValue) -> bool {
    match value {
        MetadataValue::Name(name) => metadata
            .data
            .name
            .trim_matches(char::from(0))
            .contains(name),
        MetadataValue::Symbol(symbol) => symbol == metadata.data.symbol.trim_matches(char::from(0)),
        MetadataValue::Uri(uri) => uri == metadata.data.uri.trim_matches(char::from(0)),
        MetadataValue::SellerFeeBasisPoints(sfbp) => *sfbp == metadata.data.seller_fee_basis_points,
        MetadataValue::Creators(creators) => Some(creators) == metadata.data.creators.as_ref(),
        MetadataValue::UpdateAuthority(update_authority) => {
            update_authority == &metadata.update_authority.to_string()
        }
        MetadataValue::PrimarySaleHappened(primary_sale_happened) => {
            *primary_sale_happened == metadata.primary_sale_happened
        }
        MetadataValue::IsMutable(is_mutable) => *is_mutable == metadata.is_mutable,
        MetadataValue::TokenStandard(token_standard) => metadata
            .token_standard
            .as_ref()
            .is_some_and(|ts| token_standard.as_str() == token_standard_to_string(ts)),
        MetadataValue::CollectionParent(collection_parent) => metadata
            .collection
            .as_ref()
            .is_some_and(|collection| collection_parent == &collection.key.to_string()),
        MetadataValue::CollectionVerified(collection_verified) => metadata
            .collection
            .as_ref()
            .is_some_and(|collection| *collection_verified == collection.verified),
        MetadataValue::RuleSet(expected_rule_set) => {
            let Some(ProgrammableConfig::V1 { rule_set }) = &metadata.programmable_config else {
                return false;
            };

            rule_set
                .as_ref()
                .is_some_and(|pubkey| expected_rule_set == &pubkey.to_string())
        }
    }
}

fn token_standard_to_string(token_standard: &TokenStandard) -> &'static str {
    match token_standard {
        TokenStandard::Fungible => "fungible",
        TokenStandard::FungibleAsset => "fungible_asset",
        TokenStandard::NonFungible => "nonfungible",
        TokenStandard::NonFungibleEdition => "nonfungible_edition",
        TokenStandard::ProgrammableNonFungible => "programmable_nonfungible",
        TokenStandard::ProgrammableNonFungibleEdition => "programmable_nonfungible_edition",
    }
}

#[cfg(test)]
mod tests {
    use metadata_interface::state::{
        Data,
        Key,
    };
    use solana_sdk::pubkey::Pubkey;

    use super::*;

    fn metadata_fixture() -> Metadata {
        Metadata {
            key: Key::MetadataV1,
            update_authority: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            data: Data {
                // Padded the way the program stores them.
                name: format!("DeGod #42{}", "\0".repeat(23)),
                symbol: format!("DGOD{}", "\0".repeat(6)),
                uri: "https://example.com/42.json".to_string(),
                seller_fee_basis_points: 500,
                creators: None,
            },
            primary_sale_happened: true,
            is_mutable: false,
            edition_nonce: None,
            token_standard: Some(TokenStandard::NonFungible),
            collection: None,
            uses: None,
            collection_details: None,
            programmable_config: None,
        }
    }

    #[test]
    fn parse_and_display_round_trip() {
        for s in [
            "name=DeGod",
            "sfbp=500",
            "primary_sale_happened=true",
            "token_standard=nonfungible",
        ] {
            assert_eq!(MetadataValue::from_str(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn parse_creators() {
        let address = Pubkey::new_unique();
        let value = MetadataValue::from_str(&format!("creators={address}:true:100")).unwrap();

        let MetadataValue::Creators(creators) = value else {
            panic!("expected creators variant");
        };
        assert_eq!(
            creators,
            vec![Creator {
                address,
                verified: true,
                share: 100
            }]
        );
    }

    #[test]
    fn rejects_unknown_key_and_bare_value() {
        assert!(MetadataValue::from_str("edition=1").is_err());
        assert!(MetadataValue::from_str("name").is_err());
    }

    #[test]
    fn name_is_substring_match_on_trimmed_value() {
        let metadata = metadata_fixture();

        assert!(check_metadata_value(
            &metadata,
            &MetadataValue::Name("DeGod".to_string())
        ));
        assert!(!check_metadata_value(
            &metadata,
            &MetadataValue::Name("y00t".to_string())
        ));
    }

    #[test]
    fn symbol_is_exact_match_on_trimmed_value() {
        let metadata = metadata_fixture();

        assert!(check_metadata_value(
            &metadata,
            &MetadataValue::Symbol("DGOD".to_string())
        ));
        assert!(!check_metadata_value(
            &metadata,
            &MetadataValue::Symbol("DGO".to_string())
        ));
    }

    #[test]
    fn missing_optional_fields_never_match() {
        let metadata = metadata_fixture();

        assert!(!check_metadata_value(
            &metadata,
            &MetadataValue::CollectionVerified(false)
        ));
        assert!(!check_metadata_value(
            &metadata,
            &MetadataValue::RuleSet(Pubkey::new_unique().to_string())
        ));
    }

    #[test]
    fn token_standard_matches() {
        let metadata = metadata_fixture();

        assert!(check_metadata_value(
            &metadata,
            &MetadataValue::TokenStandard("nonfungible".to_string())
        ));
        assert!(!check_metadata_value(
            &metadata,
            &MetadataValue::TokenStandard("fungible".to_string())
        ));
    }
}
