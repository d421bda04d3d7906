//! Chair QR identity codec.

mod codec;

pub use codec::{
    decode, encode, encode_with_category, ChairIdentity, DecodedChair, PayloadFormat,
};
