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

use crate::bcd;
use crate::registers::{HOURS_MERIDIEM_BIT, HOURS_MODE_BIT};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourMode {
    /// 1..=12 with an AM/PM flag
    TwelveHour,
    /// 0..=23
    TwentyFourHour,
}

impl HourMode {
    /// Mode selected by the control bit of a raw hours register byte.
    pub fn from_register(byte: u8) -> Self {
        if byte & HOURS_MODE_BIT != 0 {
            HourMode::TwelveHour
        } else {
            HourMode::TwentyFourHour
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    Am,
    Pm,
}

/// Hour value in one of the two chip encodings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hours {
    TwentyFourHour(u8),
    TwelveHour(u8, Meridiem),
}

impl Hours {
    pub fn mode(&self) -> HourMode {
        match self {
            Hours::TwentyFourHour(_) => HourMode::TwentyFourHour,
            Hours::TwelveHour(_, _) => HourMode::TwelveHour,
        }
    }

    /// Decode a raw hours register byte using the mode bit it carries.
    pub fn from_register(byte: u8) -> Self {
        match HourMode::from_register(byte) {
            HourMode::TwentyFourHour => Hours::TwentyFourHour(bcd::decode(byte)),
            HourMode::TwelveHour => {
                let meridiem = if byte & HOURS_MERIDIEM_BIT != 0 {
                    Meridiem::Pm
                } else {
                    Meridiem::Am
                };
                let digits = byte & !(HOURS_MODE_BIT | HOURS_MERIDIEM_BIT);
                Hours::TwelveHour(bcd::decode(digits), meridiem)
            }
        }
    }

    /// Raw hours register byte for this value, control bits included.
    pub fn to_register(&self) -> u8 {
        match *self {
            Hours::TwentyFourHour(hour) => bcd::encode(hour),
            Hours::TwelveHour(hour, meridiem) => {
                let mut byte = bcd::encode(hour) | HOURS_MODE_BIT;
                if meridiem == Meridiem::Pm {
                    byte |= HOURS_MERIDIEM_BIT;
                }
                byte
            }
        }
    }

    /// Same instant of the day as a 24 hour value. 12 AM is hour 0.
    pub fn to_24_hour(&self) -> u8 {
        match *self {
            Hours::TwentyFourHour(hour) => hour,
            Hours::TwelveHour(12, Meridiem::Am) => 0,
            Hours::TwelveHour(hour, Meridiem::Am) => hour,
            Hours::TwelveHour(12, Meridiem::Pm) => 12,
            Hours::TwelveHour(hour, Meridiem::Pm) => hour.wrapping_add(12),
        }
    }

    /// Same instant of the day as a 12 hour value with its period.
    pub fn to_12_hour(&self) -> (u8, Meridiem) {
        match *self {
            Hours::TwelveHour(hour, meridiem) => (hour, meridiem),
            Hours::TwentyFourHour(0) => (12, Meridiem::Am),
            Hours::TwentyFourHour(hour @ 1..=11) => (hour, Meridiem::Am),
            Hours::TwentyFourHour(12) => (12, Meridiem::Pm),
            Hours::TwentyFourHour(hour) => (hour - 12, Meridiem::Pm),
        }
    }

    /// Re-express this value in the given mode.
    pub fn in_mode(&self, mode: HourMode) -> Hours {
        match mode {
            HourMode::TwentyFourHour => Hours::TwentyFourHour(self.to_24_hour()),
            HourMode::TwelveHour => {
                let (hour, meridiem) = self.to_12_hour();
                Hours::TwelveHour(hour, meridiem)
            }
        }
    }
}
