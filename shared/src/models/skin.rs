//! Skin characteristic model
//!
//! Five fixed axes, two mutually exclusive marks per axis. A complete
//! selection collapses into a [`SkinTypeCode`], the lookup key for the
//! additive and descriptive catalog tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// One of the five skin characteristic axes, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinAxis {
    Hydration,
    Sensitivity,
    Pigmentation,
    Wrinkle,
    Inflammation,
}

impl SkinAxis {
    pub const ALL: [SkinAxis; 5] = [
        SkinAxis::Hydration,
        SkinAxis::Sensitivity,
        SkinAxis::Pigmentation,
        SkinAxis::Wrinkle,
        SkinAxis::Inflammation,
    ];

    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            SkinAxis::Hydration => "보습",
            SkinAxis::Sensitivity => "민감성",
            SkinAxis::Pigmentation => "색소",
            SkinAxis::Wrinkle => "탄력",
            SkinAxis::Inflammation => "염증",
        }
    }

    /// The two marks that can be chosen on this axis
    pub fn marks(&self) -> [SkinMark; 2] {
        match self {
            SkinAxis::Hydration => [SkinMark::D, SkinMark::O],
            SkinAxis::Sensitivity => [SkinMark::S, SkinMark::R],
            SkinAxis::Pigmentation => [SkinMark::P, SkinMark::N],
            SkinAxis::Wrinkle => [SkinMark::W, SkinMark::T],
            SkinAxis::Inflammation => [SkinMark::A, SkinMark::C],
        }
    }
}

/// A single skin characteristic letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkinMark {
    /// Dry
    D,
    /// Oily
    O,
    /// Sensitive
    S,
    /// Resistant
    R,
    /// Pigmented
    P,
    /// Non-pigmented
    N,
    /// Wrinkled
    W,
    /// Tight
    T,
    /// Acne-prone
    A,
    /// Clear
    C,
}

impl SkinMark {
    /// Join order for codes, independent of the order marks were picked in
    pub const PRECEDENCE: [SkinMark; 10] = [
        SkinMark::D,
        SkinMark::O,
        SkinMark::S,
        SkinMark::R,
        SkinMark::P,
        SkinMark::N,
        SkinMark::W,
        SkinMark::T,
        SkinMark::A,
        SkinMark::C,
    ];

    pub fn axis(&self) -> SkinAxis {
        match self {
            SkinMark::D | SkinMark::O => SkinAxis::Hydration,
            SkinMark::S | SkinMark::R => SkinAxis::Sensitivity,
            SkinMark::P | SkinMark::N => SkinAxis::Pigmentation,
            SkinMark::W | SkinMark::T => SkinAxis::Wrinkle,
            SkinMark::A | SkinMark::C => SkinAxis::Inflammation,
        }
    }

    /// Position in [`SkinMark::PRECEDENCE`]
    pub fn rank(&self) -> usize {
        *self as usize
    }

    pub fn as_char(&self) -> char {
        match self {
            SkinMark::D => 'D',
            SkinMark::O => 'O',
            SkinMark::S => 'S',
            SkinMark::R => 'R',
            SkinMark::P => 'P',
            SkinMark::N => 'N',
            SkinMark::W => 'W',
            SkinMark::T => 'T',
            SkinMark::A => 'A',
            SkinMark::C => 'C',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::PRECEDENCE.into_iter().find(|m| m.as_char() == c)
    }

    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            SkinMark::D => "건성(Dry)",
            SkinMark::O => "지성(Oily)",
            SkinMark::S => "민감성(Sensitive)",
            SkinMark::R => "저항성(Resistant)",
            SkinMark::P => "색소성(Pigmented)",
            SkinMark::N => "비색소성(Non-pigmented)",
            SkinMark::W => "주름(Wrinkled)",
            SkinMark::T => "탱탱함(Tight)",
            SkinMark::A => "여드름성(Acne)",
            SkinMark::C => "비여드름성(Clear)",
        }
    }
}

/// Operator's picks, one optional slot per axis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinSelection {
    #[serde(default)]
    pub hydration: Option<SkinMark>,
    #[serde(default)]
    pub sensitivity: Option<SkinMark>,
    #[serde(default)]
    pub pigmentation: Option<SkinMark>,
    #[serde(default)]
    pub wrinkle: Option<SkinMark>,
    #[serde(default)]
    pub inflammation: Option<SkinMark>,
}

impl SkinSelection {
    pub fn get(&self, axis: SkinAxis) -> Option<SkinMark> {
        match axis {
            SkinAxis::Hydration => self.hydration,
            SkinAxis::Sensitivity => self.sensitivity,
            SkinAxis::Pigmentation => self.pigmentation,
            SkinAxis::Wrinkle => self.wrinkle,
            SkinAxis::Inflammation => self.inflammation,
        }
    }

    fn slot(&mut self, axis: SkinAxis) -> &mut Option<SkinMark> {
        match axis {
            SkinAxis::Hydration => &mut self.hydration,
            SkinAxis::Sensitivity => &mut self.sensitivity,
            SkinAxis::Pigmentation => &mut self.pigmentation,
            SkinAxis::Wrinkle => &mut self.wrinkle,
            SkinAxis::Inflammation => &mut self.inflammation,
        }
    }

    /// Pick `mark` on `axis`, replacing any earlier pick on that axis
    pub fn select(&mut self, axis: SkinAxis, mark: SkinMark) -> Result<(), AppError> {
        if mark.axis() != axis {
            return Err(AppError::new(ErrorCode::InvalidSkinMark)
                .with_detail("axis", axis.label())
                .with_detail("mark", mark.as_char().to_string()));
        }
        *self.slot(axis) = Some(mark);
        Ok(())
    }

    /// Well-formedness of deserialized input: every filled slot holds a mark of its own axis
    pub fn check(&self) -> Result<(), AppError> {
        for axis in SkinAxis::ALL {
            if let Some(mark) = self.get(axis)
                && mark.axis() != axis
            {
                return Err(AppError::new(ErrorCode::InvalidSkinMark)
                    .with_detail("axis", axis.label())
                    .with_detail("mark", mark.as_char().to_string()));
            }
        }
        Ok(())
    }

    pub fn selected(&self) -> impl Iterator<Item = SkinMark> + '_ {
        SkinAxis::ALL.into_iter().filter_map(|axis| self.get(axis))
    }

    pub fn is_complete(&self) -> bool {
        SkinAxis::ALL.iter().all(|axis| self.get(*axis).is_some())
    }
}

/// Canonical five-letter skin type code such as `DSPWC`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkinTypeCode(String);

impl SkinTypeCode {
    pub const LEN: usize = 5;

    /// Build from one mark per axis, given in canonical axis order
    pub fn from_ordered(marks: [SkinMark; 5]) -> Result<Self, AppError> {
        for (axis, mark) in SkinAxis::ALL.iter().zip(marks.iter()) {
            if mark.axis() != *axis {
                return Err(AppError::new(ErrorCode::InvalidSkinMark)
                    .with_detail("axis", axis.label())
                    .with_detail("mark", mark.as_char().to_string()));
            }
        }
        Ok(Self(marks.iter().map(SkinMark::as_char).collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First four letters, the key into the short summary table
    pub fn summary_key(&self) -> &str {
        &self.0[..4]
    }

    pub fn has(&self, mark: SkinMark) -> bool {
        self.0.contains(mark.as_char())
    }

    pub fn marks(&self) -> impl Iterator<Item = SkinMark> + '_ {
        self.0.chars().filter_map(SkinMark::from_char)
    }
}

impl FromStr for SkinTypeCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            AppError::with_message(ErrorCode::ValidationFailed, "Invalid skin type code")
                .with_detail("code", s)
        };
        let marks: Vec<SkinMark> = s
            .chars()
            .map(SkinMark::from_char)
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;
        let ordered: [SkinMark; 5] = marks.try_into().map_err(|_| invalid())?;
        Self::from_ordered(ordered).map_err(|_| invalid())
    }
}

impl TryFrom<String> for SkinTypeCode {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SkinTypeCode> for String {
    fn from(code: SkinTypeCode) -> Self {
        code.0
    }
}

impl fmt::Display for SkinTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
