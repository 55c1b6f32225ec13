//! Rating value and star row presentation state.
//!
//! The committed [`Rating`] is the only source of truth. [`StarRow`] is a
//! view of it that hover previews may temporarily overwrite; leaving the
//! stars always re-derives the row from the committed value.

use crate::error::ReviewKitError;
use crate::page::{FILLED_CLASS, OUTLINE_CLASS};

/// Number of star icons in the widget.
pub const STAR_COUNT: usize = 5;

/// Zero-based position of a star icon, always in `0..STAR_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StarIndex(usize);

impl StarIndex {
    /// Validates a zero-based star position.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewKitError::InvalidStarIndex`] when `index` is not below
    /// [`STAR_COUNT`].
    pub const fn new(index: usize) -> Result<Self, ReviewKitError> {
        if index < STAR_COUNT {
            Ok(Self(index))
        } else {
            Err(ReviewKitError::InvalidStarIndex { index })
        }
    }

    /// Returns the zero-based position.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the one-based position, which is also the rating it commits.
    #[must_use]
    pub const fn position(self) -> usize {
        self.0 + 1
    }

    /// Iterates over every star position in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..STAR_COUNT).map(Self)
    }
}

/// Committed rating: 0 when unset, otherwise `1..=5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    /// No star has been selected.
    pub const UNSET: Self = Self(0);

    /// Returns the rating committed by clicking `index`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "StarIndex is bounded by STAR_COUNT, which fits in u8"
    )]
    pub const fn from_index(index: StarIndex) -> Self {
        Self(index.position() as u8)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns true once the user has selected a star.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 > 0
    }

    /// Returns the star that commits this rating, if any.
    #[must_use]
    pub fn star(self) -> Option<StarIndex> {
        usize::from(self.0)
            .checked_sub(1)
            .and_then(|index| StarIndex::new(index).ok())
    }
}

impl TryFrom<u8> for Rating {
    type Error = ReviewKitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if usize::from(value) <= STAR_COUNT {
            Ok(Self(value))
        } else {
            Err(ReviewKitError::InvalidRating { value })
        }
    }
}

/// Visual variant of one star icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarVariant {
    /// Solid icon.
    Filled,
    /// Hollow icon.
    Outline,
}

impl StarVariant {
    /// CSS class carried by an icon of this variant.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Filled => FILLED_CLASS,
            Self::Outline => OUTLINE_CLASS,
        }
    }

    /// CSS class an icon of this variant must not carry.
    #[must_use]
    pub const fn other_class(self) -> &'static str {
        match self {
            Self::Filled => OUTLINE_CLASS,
            Self::Outline => FILLED_CLASS,
        }
    }
}

/// Variants of all star icons, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRow([StarVariant; STAR_COUNT]);

impl StarRow {
    /// Renders the row implied by a committed rating.
    #[must_use]
    pub fn rendered(rating: Rating) -> Self {
        let mut variants = [StarVariant::Outline; STAR_COUNT];
        for (position, variant) in variants.iter_mut().enumerate() {
            if position < usize::from(rating.get()) {
                *variant = StarVariant::Filled;
            }
        }
        Self(variants)
    }

    /// Fills every star up to and including `index`, leaving the rest alone.
    pub fn preview(&mut self, index: StarIndex) {
        for variant in self.0.iter_mut().take(index.position()) {
            *variant = StarVariant::Filled;
        }
    }

    /// Number of filled stars.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.0
            .iter()
            .filter(|variant| **variant == StarVariant::Filled)
            .count()
    }

    /// Iterates over `(index, variant)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (StarIndex, StarVariant)> + '_ {
        StarIndex::all().zip(self.0.iter().copied())
    }
}

impl Default for StarRow {
    fn default() -> Self {
        Self::rendered(Rating::UNSET)
    }
}

/// Committed rating together with what the stars currently show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingModel {
    committed: Rating,
    row: StarRow,
}

impl RatingModel {
    /// Returns the committed rating.
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.committed
    }

    /// Returns the row currently on display.
    #[must_use]
    pub const fn row(&self) -> StarRow {
        self.row
    }

    /// Applies a hover preview; the committed rating is untouched.
    pub fn hover(&mut self, index: StarIndex) -> StarRow {
        self.row.preview(index);
        self.row
    }

    /// Drops any preview and shows the committed rating again.
    pub fn unhover(&mut self) -> StarRow {
        self.row = StarRow::rendered(self.committed);
        self.row
    }

    /// Commits the rating selected by clicking `index`.
    pub fn click(&mut self, index: StarIndex) -> StarRow {
        self.committed = Rating::from_index(index);
        self.row = StarRow::rendered(self.committed);
        self.row
    }
}
