//! Protobuf messages for the transaction wire format.
//!
//! Hand-written `prost` equivalents of the deployed `models.proto`:
//!
//! ```proto
//! message ProtoTransaction {
//!   message Data {
//!     uint32 nonce   = 1;
//!     uint32 epoch   = 2;
//!     uint32 type    = 3;
//!     bytes  to      = 4;
//!     bytes  amount  = 5;
//!     bytes  maxFee  = 6;
//!     bytes  tips    = 7;
//!     bytes  payload = 8;
//!   }
//!   Data  data      = 1;
//!   bytes signature = 2;
//! }
//! ```
//!
//! Tag numbers and wire types must not change. Proto3 leaves zero scalars
//! and empty byte strings off the wire, which is what makes "absent" and
//! "zero" indistinguishable for the optional fields.

/// Outer envelope: the signed data plus the signature over it.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoTransaction {
    #[prost(message, optional, tag = "1")]
    pub data: ::core::option::Option<ProtoTransactionData>,
    #[prost(bytes = "vec", tag = "2")]
    pub signature: ::prost::alloc::vec::Vec<u8>,
}

/// `ProtoTransaction.Data`: every field covered by the signature.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoTransactionData {
    #[prost(uint32, tag = "1")]
    pub nonce: u32,
    #[prost(uint32, tag = "2")]
    pub epoch: u32,
    #[prost(uint32, tag = "3")]
    pub r#type: u32,
    #[prost(bytes = "vec", tag = "4")]
    pub to: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    pub amount: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "6")]
    pub max_fee: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "7")]
    pub tips: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "8")]
    pub payload: ::prost::alloc::vec::Vec<u8>,
}
