use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FeistelError {
    #[error("totalBits ({total_bits}) cannot be greater than the word width ({width})")]
    TotalBitsExceedsWidth { total_bits: u32, width: u32 },
    #[error("totalBits must be even: {total_bits}")]
    OddTotalBits { total_bits: u32 },
    #[error("sourceBits ({source_bits}) + targetBits ({target_bits}) cannot be greater than totalBits ({total_bits})")]
    SplitExceedsTotal {
        source_bits: u32,
        target_bits: u32,
        total_bits: u32,
    },
    #[error("{a}x{b} overflows a {width}-bit word")]
    DomainOverflow { a: String, b: String, width: u32 },
    #[error("value out of range (min=0, max={max}): {value}")]
    OutOfRange { value: String, max: String },
    #[error("value out of range, the domain is empty: {value}")]
    EmptyDomain { value: String },
    #[error("result {value} does not fit into {width} bits")]
    Narrowing { value: u64, width: u32 },
}
