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

use crate::hours::{HourMode, Hours};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Date {
    /// Chip defined numbering, 1 = Monday when converted with chrono
    pub weekday: u8,
    pub day_of_month: u8,
    pub month: u8,
    /// Two digit year
    pub year: u8,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    pub seconds: u8,
    pub minutes: u8,
    pub hours: Hours,
}

impl Time {
    pub fn mode(&self) -> HourMode {
        self.hours.mode()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

impl DateTime {
    /// Convert to a chrono date-time, placing the two digit year in `century`
    /// (e.g. 2000).
    ///
    /// Returns `None` for field combinations that are not a real calendar date
    /// or time of day. The weekday field is ignored.
    pub fn to_naive_date_time(&self, century: i32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(
            century + i32::from(self.date.year),
            u32::from(self.date.month),
            u32::from(self.date.day_of_month),
        )?
        .and_hms_opt(
            u32::from(self.time.hours.to_24_hour()),
            u32::from(self.time.minutes),
            u32::from(self.time.seconds),
        )
    }

    /// Build register values for `dt`, expressing the hour in `mode`.
    pub fn from_naive_date_time(dt: &NaiveDateTime, mode: HourMode) -> Self {
        let hours = Hours::TwentyFourHour(dt.hour() as u8).in_mode(mode);
        Self {
            date: Date {
                weekday: dt.weekday().number_from_monday() as u8,
                day_of_month: dt.day() as u8,
                month: dt.month() as u8,
                year: dt.year().rem_euclid(100) as u8,
            },
            time: Time {
                seconds: dt.second() as u8,
                minutes: dt.minute() as u8,
                hours,
            },
        }
    }
}
