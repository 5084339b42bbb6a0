//! Outs and base occupancy for one half-inning.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{ParseError, StateError};
use crate::player::PlayerId;

/// Outs that end a half-inning.
pub const OUTS_PER_HALF_INNING: u8 = 3;

/// A base a runner can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Base {
    /// First base.
    First,
    /// Second base.
    Second,
    /// Third base.
    Third,
}

impl Base {
    /// All bases, nearest to home plate last.
    pub const ALL: [Base; 3] = [Base::First, Base::Second, Base::Third];

    /// Bit this base occupies in a [`BaseOccupancy`].
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Base::First => 0b001,
            Base::Second => 0b010,
            Base::Third => 0b100,
        }
    }

    /// The next base along the basepath, `None` from third (home is next).
    #[must_use]
    pub const fn next(self) -> Option<Base> {
        match self {
            Base::First => Some(Base::Second),
            Base::Second => Some(Base::Third),
            Base::Third => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Base::First => 0,
            Base::Second => 1,
            Base::Third => 2,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Base::First => "first",
            Base::Second => "second",
            Base::Third => "third",
        })
    }
}

/// Compact bitmap of occupied bases (bit 0 = first, bit 2 = third).
///
/// Displays as scorer notation: `---`, `1--`, `-2-`, ..., `123`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BaseOccupancy(u8);

impl BaseOccupancy {
    /// Bases empty.
    pub const EMPTY: Self = Self(0);
    /// Bases loaded.
    pub const LOADED: Self = Self(0b111);
    /// Every configuration, in bitmap order.
    pub const ALL: [Self; 8] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Build from a raw bitmap, `None` if any bit above the third is set.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits <= 0b111 { Some(Self(bits)) } else { None }
    }

    /// The raw bitmap (0-7).
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether a runner stands on `base`.
    #[must_use]
    pub const fn is_occupied(self, base: Base) -> bool {
        self.0 & base.bit() != 0
    }

    /// Number of runners on base.
    #[must_use]
    pub const fn count(self) -> u8 {
        // At most three bits set.
        #[allow(clippy::cast_possible_truncation)]
        let count = self.0.count_ones() as u8;
        count
    }

    /// This occupancy with `base` also occupied.
    #[must_use]
    pub const fn with(self, base: Base) -> Self {
        Self(self.0 | base.bit())
    }
}

impl fmt::Display for BaseOccupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (base, mark) in Base::ALL.into_iter().zip(['1', '2', '3']) {
            let c = if self.is_occupied(base) { mark } else { '-' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for BaseOccupancy {
    type Err = ParseError;

    /// Accepts `empty`, `loaded`, or any mix of `1`/`2`/`3` with `-`/`_`
    /// separators (`1-3`, `13`, `1_3`, `---`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "empty" | "none" => return Ok(Self::EMPTY),
            "loaded" => return Ok(Self::LOADED),
            _ => {}
        }
        if trimmed.is_empty() {
            return Err(ParseError::InvalidBases(s.to_string()));
        }
        let mut occupancy = Self::EMPTY;
        for c in trimmed.chars() {
            occupancy = match c {
                '1' => occupancy.with(Base::First),
                '2' => occupancy.with(Base::Second),
                '3' => occupancy.with(Base::Third),
                '-' | '_' => occupancy,
                _ => return Err(ParseError::InvalidBases(s.to_string())),
            };
        }
        Ok(occupancy)
    }
}

impl Serialize for BaseOccupancy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outs and runners at one moment of a half-inning.
///
/// Values are never edited in place: every transition builds a new state.
/// The occupancy bitmap is derived from the runner slots at construction and
/// always agrees with them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct BaserunningState {
    outs: u8,
    occupancy: BaseOccupancy,
    first: Option<PlayerId>,
    second: Option<PlayerId>,
    third: Option<PlayerId>,
}

impl BaserunningState {
    /// Start of a half-inning: no outs, bases empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            outs: 0,
            occupancy: BaseOccupancy::EMPTY,
            first: None,
            second: None,
            third: None,
        }
    }

    /// Build a state from outs and the three runner slots.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::OutsOutOfRange`] if `outs > 3` and
    /// [`StateError::DuplicateRunner`] if one runner is on two bases.
    pub fn new(
        outs: u8,
        first: Option<PlayerId>,
        second: Option<PlayerId>,
        third: Option<PlayerId>,
    ) -> Result<Self, StateError> {
        if outs > OUTS_PER_HALF_INNING {
            return Err(StateError::OutsOutOfRange(outs));
        }

        let slots = [(Base::First, &first), (Base::Second, &second), (Base::Third, &third)];
        for (i, (trailing, a)) in slots.iter().enumerate() {
            for (leading, b) in &slots[i + 1..] {
                if let (Some(a), Some(b)) = (a, b) {
                    if a == b {
                        return Err(StateError::DuplicateRunner {
                            runner: a.clone(),
                            first: *trailing,
                            second: *leading,
                        });
                    }
                }
            }
        }

        Ok(Self::from_slots(outs, [first, second, third]))
    }

    /// Build a state whose occupied bases hold placeholder runners
    /// `r1`, `r2` and `r3`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::OutsOutOfRange`] if `outs > 3`.
    pub fn with_placeholder_runners(
        outs: u8,
        occupancy: BaseOccupancy,
    ) -> Result<Self, StateError> {
        let runner =
            |base: Base, name: &str| occupancy.is_occupied(base).then(|| PlayerId::from(name));
        Self::new(
            outs,
            runner(Base::First, "r1"),
            runner(Base::Second, "r2"),
            runner(Base::Third, "r3"),
        )
    }

    /// Build from slots the caller guarantees hold distinct runners.
    pub(crate) fn from_slots(outs: u8, slots: [Option<PlayerId>; 3]) -> Self {
        let [first, second, third] = slots;
        let mut occupancy = BaseOccupancy::EMPTY;
        for (base, slot) in Base::ALL.into_iter().zip([&first, &second, &third]) {
            if slot.is_some() {
                occupancy = occupancy.with(base);
            }
        }
        Self {
            outs,
            occupancy,
            first,
            second,
            third,
        }
    }

    /// Outs recorded so far in the half-inning.
    #[must_use]
    pub const fn outs(&self) -> u8 {
        self.outs
    }

    /// Occupied bases as a bitmap.
    #[must_use]
    pub const fn occupancy(&self) -> BaseOccupancy {
        self.occupancy
    }

    /// The runner on `base`, if any.
    #[must_use]
    pub const fn runner(&self, base: Base) -> Option<&PlayerId> {
        match base {
            Base::First => self.first.as_ref(),
            Base::Second => self.second.as_ref(),
            Base::Third => self.third.as_ref(),
        }
    }

    /// Runners on base, trailing runner first.
    pub fn runners(&self) -> impl Iterator<Item = (Base, &PlayerId)> {
        Base::ALL
            .into_iter()
            .filter_map(|base| self.runner(base).map(|runner| (base, runner)))
    }

    /// The base `runner` stands on, if any.
    #[must_use]
    pub fn base_of(&self, runner: &PlayerId) -> Option<Base> {
        self.runners()
            .find_map(|(base, on_base)| (on_base == runner).then_some(base))
    }

    /// Whether no runner is on base.
    #[must_use]
    pub const fn bases_empty(&self) -> bool {
        self.occupancy.bits() == 0
    }

    /// The three runner slots, cloned, indexed first to third.
    pub(crate) fn slots(&self) -> [Option<PlayerId>; 3] {
        let mut slots: [Option<PlayerId>; 3] = Default::default();
        for base in Base::ALL {
            slots[base.index()] = self.runner(base).cloned();
        }
        slots
    }
}

/// Slot index for `base` inside a `[Option<PlayerId>; 3]`.
pub(crate) const fn slot(base: Base) -> usize {
    base.index()
}

impl fmt::Display for BaserunningState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outs = self.outs;
        let noun = if outs == 1 { "out" } else { "outs" };
        write!(f, "{} {outs} {noun}", self.occupancy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> Option<PlayerId> {
        Some(PlayerId::from(name))
    }

    #[test]
    fn test_empty_state() {
        let state = BaserunningState::empty();
        assert_eq!(state.outs(), 0);
        assert!(state.bases_empty());
        assert_eq!(state, BaserunningState::default());
    }

    #[test]
    fn test_bitmap_tracks_slots() {
        let state = BaserunningState::new(1, id("a"), None, id("c")).unwrap();
        assert_eq!(state.occupancy().bits(), 0b101);
        assert!(state.occupancy().is_occupied(Base::First));
        assert!(!state.occupancy().is_occupied(Base::Second));
        assert_eq!(state.runner(Base::Third), Some(&PlayerId::from("c")));
        assert_eq!(state.occupancy().count(), 2);
    }

    #[test]
    fn test_duplicate_runner_rejected() {
        let err = BaserunningState::new(0, id("a"), None, id("a")).unwrap_err();
        assert_eq!(
            err,
            StateError::DuplicateRunner {
                runner: PlayerId::from("a"),
                first: Base::First,
                second: Base::Third,
            }
        );
    }

    #[test]
    fn test_base_of_finds_runner() {
        let state = BaserunningState::new(1, id("a"), None, id("c")).unwrap();
        assert_eq!(state.base_of(&PlayerId::from("a")), Some(Base::First));
        assert_eq!(state.base_of(&PlayerId::from("c")), Some(Base::Third));
        assert_eq!(state.base_of(&PlayerId::from("b")), None);
    }

    #[test]
    fn test_outs_out_of_range_rejected() {
        assert!(BaserunningState::new(3, None, None, None).is_ok());
        assert_eq!(
            BaserunningState::new(4, None, None, None).unwrap_err(),
            StateError::OutsOutOfRange(4)
        );
    }

    #[test]
    fn test_occupancy_notation() {
        let rendered: Vec<String> = BaseOccupancy::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["---", "1--", "-2-", "12-", "--3", "1-3", "-23", "123"]);
        for occupancy in BaseOccupancy::ALL {
            assert_eq!(occupancy.to_string().parse::<BaseOccupancy>(), Ok(occupancy));
        }
    }

    #[test]
    fn test_occupancy_parse_aliases() {
        assert_eq!("13".parse(), Ok(BaseOccupancy::from_bits(0b101).unwrap()));
        assert_eq!("1_3".parse(), Ok(BaseOccupancy::from_bits(0b101).unwrap()));
        assert_eq!("loaded".parse(), Ok(BaseOccupancy::LOADED));
        assert_eq!("Empty".parse(), Ok(BaseOccupancy::EMPTY));
        assert!("14".parse::<BaseOccupancy>().is_err());
        assert!("".parse::<BaseOccupancy>().is_err());
    }

    #[test]
    fn test_placeholder_runners() {
        let state = BaserunningState::with_placeholder_runners(2, BaseOccupancy::LOADED).unwrap();
        assert_eq!(state.runner(Base::Second), Some(&PlayerId::from("r2")));
        assert_eq!(state.to_string(), "123 2 outs");
    }
}
