// Copyright (C) 2025 Paul Hampson
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License version 3 as  published by the
// Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <https://www.gnu.org/licenses/>.

use strum::{EnumCount, EnumIter};

/// Timekeeping registers of the chip, in on-chip address order.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, EnumCount)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterAddress {
    Seconds = 0x00,
    Minutes = 0x01,
    /// BCD hour plus the mode and meridiem control bits
    Hours = 0x02,
    Weekday = 0x03,
    DayOfMonth = 0x04,
    Month = 0x05,
    /// Two digit year
    Year = 0x06,
}

impl RegisterAddress {
    /// Register offset sent on the bus.
    pub fn offset(self) -> u8 {
        self as u8
    }
}

/// Set when the hours register is in 12 hour mode.
pub const HOURS_MODE_BIT: u8 = 0x40;
/// Set for PM, only meaningful in 12 hour mode.
pub const HOURS_MERIDIEM_BIT: u8 = 0x20;
