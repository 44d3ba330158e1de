//! Recognised marker vocabulary of the coded letter format

use std::fmt;
use std::str::FromStr;

/// A field name that can be extracted from coded letter text.
///
/// `G1` and `G2` are not markers of their own: both live inside the single
/// `<G .../...>` marker, split on its first slash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    F,
    Q,
    U,
    T,
    G1,
    G2,
    ST,
    SN,
    SA,
    SG,
    SJ,
    SP,
    AN,
    AA,
    AG,
    AJ,
    AP,
    O,
    RT,
    RN,
    RA,
    RG,
    RJ,
    L,
    D,
    X,
    WC,
    WD,
    WA,
    WT,
    CF,
    CO,
    MF,
    MI,
    ML,
}

impl Tag {
    /// Every recognised tag, in source-format order
    pub const ALL: [Tag; 35] = [
        Tag::F,
        Tag::Q,
        Tag::U,
        Tag::T,
        Tag::G1,
        Tag::G2,
        Tag::ST,
        Tag::SN,
        Tag::SA,
        Tag::SG,
        Tag::SJ,
        Tag::SP,
        Tag::AN,
        Tag::AA,
        Tag::AG,
        Tag::AJ,
        Tag::AP,
        Tag::O,
        Tag::RT,
        Tag::RN,
        Tag::RA,
        Tag::RG,
        Tag::RJ,
        Tag::L,
        Tag::D,
        Tag::X,
        Tag::WC,
        Tag::WD,
        Tag::WA,
        Tag::WT,
        Tag::CF,
        Tag::CO,
        Tag::MF,
        Tag::MI,
        Tag::ML,
    ];

    /// Field name as written by users (`G1`, `ST`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::F => "F",
            Tag::Q => "Q",
            Tag::U => "U",
            Tag::T => "T",
            Tag::G1 => "G1",
            Tag::G2 => "G2",
            Tag::ST => "ST",
            Tag::SN => "SN",
            Tag::SA => "SA",
            Tag::SG => "SG",
            Tag::SJ => "SJ",
            Tag::SP => "SP",
            Tag::AN => "AN",
            Tag::AA => "AA",
            Tag::AG => "AG",
            Tag::AJ => "AJ",
            Tag::AP => "AP",
            Tag::O => "O",
            Tag::RT => "RT",
            Tag::RN => "RN",
            Tag::RA => "RA",
            Tag::RG => "RG",
            Tag::RJ => "RJ",
            Tag::L => "L",
            Tag::D => "D",
            Tag::X => "X",
            Tag::WC => "WC",
            Tag::WD => "WD",
            Tag::WA => "WA",
            Tag::WT => "WT",
            Tag::CF => "CF",
            Tag::CO => "CO",
            Tag::MF => "MF",
            Tag::MI => "MI",
            Tag::ML => "ML",
        }
    }

    /// Name of the physical marker the value is read from (`G` for `G1`/`G2`)
    pub fn marker(&self) -> &'static str {
        match self {
            Tag::G1 | Tag::G2 => "G",
            other => other.as_str(),
        }
    }

    /// Whether the assembled document currently consumes this field.
    ///
    /// The remaining tags are reserved extraction points.
    pub fn feeds_document(&self) -> bool {
        matches!(
            self,
            Tag::F
                | Tag::Q
                | Tag::U
                | Tag::D
                | Tag::T
                | Tag::G1
                | Tag::G2
                | Tag::CF
                | Tag::CO
                | Tag::ST
                | Tag::RT
                | Tag::MF
                | Tag::MI
                | Tag::ML
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Tag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == upper)
            .ok_or_else(|| format!("Unknown tag: {}", s))
    }
}
