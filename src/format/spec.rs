/// How the next sequence number is obtained from the store.
///
/// The original handlers used both strategies for different entities; they
/// stay separate here and are selected per entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceStrategy {
    /// Parse the trailing digits of the most recently created code and
    /// increment. Resets to 1 when the table is empty or the tail is not
    /// numeric.
    SuffixIncrement,

    /// Next number = current row count + 1. Used for payment numbers.
    /// Deleting rows makes the count fall behind the highest issued
    /// number, which the collision loop then has to walk past.
    RowCount,
}

/// Where the code prefix comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixSource {
    /// Derived from the record's display name (first three letters,
    /// uppercased).
    FromName,
    /// A fixed literal such as `PAY`.
    Fixed(String),
}

/// Code shape for one entity type: prefix source, separator, padding width,
/// and sequence strategy.
///
/// # Examples
///
/// ```
/// use seqcode::{CodeFormat, SequenceStrategy};
///
/// let asset = CodeFormat::from_name();
/// let payment = CodeFormat::fixed("PAY")
///     .width(6)
///     .strategy(SequenceStrategy::RowCount);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CodeFormat {
    prefix: PrefixSource,
    separator: String,
    width: usize,
    strategy: SequenceStrategy,
}

impl CodeFormat {
    /// A format whose prefix is derived from the record name.
    ///
    /// Defaults: `-` separator, width 3, suffix-increment sequencing.
    pub fn from_name() -> Self {
        Self {
            prefix: PrefixSource::FromName,
            separator: "-".to_string(),
            width: 3,
            strategy: SequenceStrategy::SuffixIncrement,
        }
    }

    /// A format with a fixed prefix literal.
    pub fn fixed(prefix: &str) -> Self {
        Self {
            prefix: PrefixSource::Fixed(prefix.to_string()),
            ..Self::from_name()
        }
    }

    /// Set the separator between prefix and number (may be empty)
    pub fn separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    /// Set the zero-padding width of the numeric part
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the sequence strategy
    pub fn strategy(mut self, strategy: SequenceStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn prefix_source(&self) -> &PrefixSource {
        &self.prefix
    }

    pub fn separator_str(&self) -> &str {
        &self.separator
    }

    pub fn pad_width(&self) -> usize {
        self.width
    }

    pub fn sequence_strategy(&self) -> SequenceStrategy {
        self.strategy
    }

    /// Validate the format before registering it for an entity kind.
    pub fn validate(&self) -> Result<(), String> {
        if let PrefixSource::Fixed(prefix) = &self.prefix {
            if prefix.trim().is_empty() {
                return Err("Fixed prefix cannot be empty".to_string());
            }
        }

        if self.width == 0 {
            return Err("Padding width must be > 0".to_string());
        }

        Ok(())
    }

    /// Asset codes: `LAP-001`
    pub fn asset() -> Self {
        Self::from_name()
    }

    /// Subunit codes: `SUB001` (no separator)
    pub fn subunit() -> Self {
        Self::from_name().separator("")
    }

    /// Payment numbers: `PAY-000006` (fixed prefix, count-based)
    pub fn payment() -> Self {
        Self::fixed("PAY")
            .width(6)
            .strategy(SequenceStrategy::RowCount)
    }
}

impl Default for CodeFormat {
    fn default() -> Self {
        Self::from_name()
    }
}
