use borsh::{
    BorshDeserialize,
    BorshSerialize,
};

/// Account discriminant stored in the first byte of every program account.
#[derive(BorshSerialize, BorshDeserialize, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Key {
    Uninitialized,
    EditionV1,
    MasterEditionV1,
    ReservationListV1,
    MetadataV1,
    ReservationListV2,
    MasterEditionV2,
    EditionMarker,
    UseAuthorityRecord,
    CollectionAuthorityRecord,
    TokenOwnedEscrow,
    TokenRecord,
    MetadataDelegate,
    EditionMarkerV2,
}
