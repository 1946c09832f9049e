//! Container number generation for test data.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::code::{
    ContainerNumber, EquipmentCategoryId, MAX_SERIAL_NUMBER, OwnerCode, SerialNumber,
};
use crate::error::{ModelError, Result};
use crate::transposition::detect_transposition;

const SERIAL_NUMBER_SPACE: u32 = MAX_SERIAL_NUMBER + 1;

/// How serial numbers are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerialRange {
    /// Uniformly random serial numbers.
    #[default]
    Random,
    /// Consecutive serial numbers starting at the given one.
    From(SerialNumber),
    /// Consecutive serial numbers ending at the given one.
    Until(SerialNumber),
    /// Every serial number of the inclusive range; the count is ignored.
    Between(SerialNumber, SerialNumber),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub count: usize,
    /// Fixed owner code; a random registered owner is used per number otherwise.
    pub owner: Option<OwnerCode>,
    pub range: SerialRange,
    pub exclude_check_digit_10: bool,
    pub exclude_transposition_errors: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            count: 1,
            owner: None,
            range: SerialRange::Random,
            exclude_check_digit_10: false,
            exclude_transposition_errors: false,
        }
    }
}

/// Iterator over generated container numbers.
///
/// Sequential serial numbers wrap from 999999 to 000000. Excluded numbers
/// are skipped and do not count towards the requested count.
#[derive(Debug)]
pub struct Generator<R> {
    rng: R,
    owners: Vec<OwnerCode>,
    options: GeneratorOptions,
    cursor: Option<SerialNumber>,
    candidates_left: u32,
    target: usize,
    produced: usize,
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R, owners: Vec<OwnerCode>, options: GeneratorOptions) -> Result<Self> {
        if options.owner.is_none() && owners.is_empty() {
            return Err(ModelError::NoOwners);
        }
        let (cursor, candidates_left, target) = match options.range {
            SerialRange::Between(start, end) => {
                let span = (end.value() + SERIAL_NUMBER_SPACE - start.value())
                    % SERIAL_NUMBER_SPACE
                    + 1;
                (Some(start), span, span as usize)
            }
            _ if options.count == 0 => return Err(ModelError::ZeroCount),
            SerialRange::From(start) => (Some(start), SERIAL_NUMBER_SPACE, options.count),
            SerialRange::Until(end) => {
                let back = (options.count as u64 - 1) % u64::from(SERIAL_NUMBER_SPACE);
                let start = (u64::from(end.value()) + u64::from(SERIAL_NUMBER_SPACE) - back)
                    % u64::from(SERIAL_NUMBER_SPACE);
                let start = SerialNumber::new(start as u32)?;
                (Some(start), SERIAL_NUMBER_SPACE, options.count)
            }
            SerialRange::Random => (None, u32::MAX, options.count),
        };
        Ok(Self {
            rng,
            owners,
            options,
            cursor,
            candidates_left,
            target,
            produced: 0,
        })
    }

    fn next_serial(&mut self) -> Option<SerialNumber> {
        match self.cursor {
            Some(serial) => {
                if self.candidates_left == 0 {
                    return None;
                }
                self.candidates_left -= 1;
                self.cursor = Some(serial.wrapping_next());
                Some(serial)
            }
            None => SerialNumber::new(self.rng.gen_range(0..=MAX_SERIAL_NUMBER)).ok(),
        }
    }

    fn next_owner(&mut self) -> Option<OwnerCode> {
        match self.options.owner {
            Some(owner) => Some(owner),
            None => self.owners.choose(&mut self.rng).copied(),
        }
    }

    fn is_excluded(&self, number: &ContainerNumber) -> bool {
        if self.options.exclude_check_digit_10 && number.raw_check_digit() == 10 {
            return true;
        }
        self.options.exclude_transposition_errors
            && !detect_transposition(
                &number.owner,
                number.category,
                number.serial,
                number.raw_check_digit(),
            )
            .is_empty()
    }
}

impl<R: Rng> Iterator for Generator<R> {
    type Item = ContainerNumber;

    fn next(&mut self) -> Option<Self::Item> {
        if self.produced >= self.target {
            return None;
        }
        loop {
            let serial = self.next_serial()?;
            let owner = self.next_owner()?;
            let number = ContainerNumber::new(owner, EquipmentCategoryId::FREIGHT, serial);
            if self.is_excluded(&number) {
                continue;
            }
            self.produced += 1;
            return Some(number);
        }
    }
}
