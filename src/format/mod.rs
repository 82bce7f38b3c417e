pub mod prefix;
pub mod sequence;
pub mod spec;

pub use prefix::derive_prefix;
pub use sequence::{SequenceState, format_code, next_sequence};
pub use spec::{CodeFormat, PrefixSource, SequenceStrategy};
