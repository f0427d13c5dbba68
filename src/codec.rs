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
use crate::datetime::{Date, DateTime, Time};
use crate::hours::{HourMode, Hours, Meridiem};
use crate::registers::RegisterAddress;
use crate::transport::RegisterTransport;
use log::{debug, warn};
use strum::{EnumCount, IntoEnumIterator};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The transport failed, the operation was abandoned part way
    Transport(E),
    /// An hour accessor was used while the chip is in the other hour mode
    ModeMismatch { expected: HourMode, actual: HourMode },
}

fn require_mode<E>(actual: HourMode, expected: HourMode) -> Result<(), Error<E>> {
    if actual != expected {
        warn!("hour mode mismatch: expected {:?}, chip is in {:?}", expected, actual);
        return Err(Error::ModeMismatch { expected, actual });
    }
    Ok(())
}

/// Date and time access to an RTC chip in terms of decimal values.
///
/// Every call goes straight to the transport. Nothing is cached, in particular
/// the hour mode, which is read back from the hours register by every hour
/// related call.
///
/// Operations touching several registers (`date`, `time`, `date_time` and their
/// setters) are a series of independent single register transactions. If the
/// chip ticks, or another bus user writes, part way through, the result is a
/// mix of old and new values. Callers needing a consistent snapshot must
/// detect that themselves, for example by reading twice.
pub struct RegisterCodec<T> {
    transport: T,
}

impl<T> RegisterCodec<T>
where
    T: RegisterTransport,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Give back the transport.
    pub fn release(self) -> T {
        self.transport
    }

    /// Raw register content, control bits included.
    pub fn read_register(&mut self, address: RegisterAddress) -> Result<u8, Error<T::Error>> {
        self.transport.read_byte(address).map_err(Error::Transport)
    }

    /// Overwrite a register with a raw byte, bypassing BCD encoding.
    pub fn write_register(
        &mut self,
        address: RegisterAddress,
        value: u8,
    ) -> Result<(), Error<T::Error>> {
        self.transport
            .write_byte(address, value)
            .map_err(Error::Transport)
    }

    /// Raw content of every register, indexed by register offset.
    pub fn dump_registers(&mut self) -> Result<[u8; RegisterAddress::COUNT], Error<T::Error>> {
        let mut registers = [0u8; RegisterAddress::COUNT];
        for address in RegisterAddress::iter() {
            registers[address.offset() as usize] = self.read_register(address)?;
        }
        Ok(registers)
    }

    fn read_field(&mut self, address: RegisterAddress) -> Result<u8, Error<T::Error>> {
        Ok(bcd::decode(self.read_register(address)?))
    }

    fn write_field(&mut self, address: RegisterAddress, value: u8) -> Result<(), Error<T::Error>> {
        self.write_register(address, bcd::encode(value))
    }

    pub fn seconds(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_field(RegisterAddress::Seconds)
    }

    pub fn set_seconds(&mut self, seconds: u8) -> Result<(), Error<T::Error>> {
        self.write_field(RegisterAddress::Seconds, seconds)
    }

    pub fn minutes(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_field(RegisterAddress::Minutes)
    }

    pub fn set_minutes(&mut self, minutes: u8) -> Result<(), Error<T::Error>> {
        self.write_field(RegisterAddress::Minutes, minutes)
    }

    pub fn weekday(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_field(RegisterAddress::Weekday)
    }

    pub fn set_weekday(&mut self, weekday: u8) -> Result<(), Error<T::Error>> {
        self.write_field(RegisterAddress::Weekday, weekday)
    }

    pub fn day_of_month(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_field(RegisterAddress::DayOfMonth)
    }

    pub fn set_day_of_month(&mut self, day: u8) -> Result<(), Error<T::Error>> {
        self.write_field(RegisterAddress::DayOfMonth, day)
    }

    pub fn month(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_field(RegisterAddress::Month)
    }

    pub fn set_month(&mut self, month: u8) -> Result<(), Error<T::Error>> {
        self.write_field(RegisterAddress::Month, month)
    }

    /// Two digit year.
    pub fn year(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_field(RegisterAddress::Year)
    }

    pub fn set_year(&mut self, year: u8) -> Result<(), Error<T::Error>> {
        self.write_field(RegisterAddress::Year, year)
    }

    /// Current hour mode, read from the chip.
    pub fn mode(&mut self) -> Result<HourMode, Error<T::Error>> {
        Ok(HourMode::from_register(
            self.read_register(RegisterAddress::Hours)?,
        ))
    }

    /// Hour in whichever mode the chip is currently in.
    pub fn hours(&mut self) -> Result<Hours, Error<T::Error>> {
        Ok(Hours::from_register(
            self.read_register(RegisterAddress::Hours)?,
        ))
    }

    /// Hour 0..=23. Fails with `ModeMismatch` if the chip is in 12 hour mode.
    pub fn hours_24(&mut self) -> Result<u8, Error<T::Error>> {
        let byte = self.read_register(RegisterAddress::Hours)?;
        require_mode(HourMode::from_register(byte), HourMode::TwentyFourHour)?;
        Ok(bcd::decode(byte))
    }

    /// Hour 1..=12 and its period. Fails with `ModeMismatch` if the chip is in
    /// 24 hour mode.
    pub fn hours_12(&mut self) -> Result<(u8, Meridiem), Error<T::Error>> {
        let byte = self.read_register(RegisterAddress::Hours)?;
        require_mode(HourMode::from_register(byte), HourMode::TwelveHour)?;
        Ok(Hours::from_register(byte).to_12_hour())
    }

    pub fn set_hours_24(&mut self, hours: u8) -> Result<(), Error<T::Error>> {
        require_mode(self.mode()?, HourMode::TwentyFourHour)?;
        self.write_register(
            RegisterAddress::Hours,
            Hours::TwentyFourHour(hours).to_register(),
        )
    }

    /// Write a 12 hour value. The mode bit is always written as set.
    pub fn set_hours_12(&mut self, hours: u8, meridiem: Meridiem) -> Result<(), Error<T::Error>> {
        require_mode(self.mode()?, HourMode::TwelveHour)?;
        self.write_register(
            RegisterAddress::Hours,
            Hours::TwelveHour(hours, meridiem).to_register(),
        )
    }

    /// Write `hours` through the accessor for its mode. The chip must already be
    /// in that mode.
    pub fn set_hours(&mut self, hours: Hours) -> Result<(), Error<T::Error>> {
        match hours {
            Hours::TwentyFourHour(hour) => self.set_hours_24(hour),
            Hours::TwelveHour(hour, meridiem) => self.set_hours_12(hour, meridiem),
        }
    }

    /// Switch the chip to `mode`, rewriting the current hour so the time of day
    /// is unchanged. Nothing is written if the chip is already in `mode`.
    pub fn set_mode(&mut self, mode: HourMode) -> Result<(), Error<T::Error>> {
        let current = self.hours()?;
        if current.mode() == mode {
            return Ok(());
        }
        let converted = current.in_mode(mode);
        debug!("switching hour mode: {:?} -> {:?}", current, converted);
        self.write_register(RegisterAddress::Hours, converted.to_register())
    }

    /// Weekday, day of month, month and year, read in that order.
    ///
    /// Not atomic, see the type level documentation.
    pub fn date(&mut self) -> Result<Date, Error<T::Error>> {
        Ok(Date {
            weekday: self.weekday()?,
            day_of_month: self.day_of_month()?,
            month: self.month()?,
            year: self.year()?,
        })
    }

    /// Seconds, minutes, then the hour in the mode the chip reports.
    ///
    /// Not atomic. A mode change between the mode read and the hour read
    /// surfaces as `ModeMismatch`.
    pub fn time(&mut self) -> Result<Time, Error<T::Error>> {
        let seconds = self.seconds()?;
        let minutes = self.minutes()?;
        let hours = match self.mode()? {
            HourMode::TwelveHour => {
                let (hour, meridiem) = self.hours_12()?;
                Hours::TwelveHour(hour, meridiem)
            }
            HourMode::TwentyFourHour => Hours::TwentyFourHour(self.hours_24()?),
        };
        Ok(Time {
            seconds,
            minutes,
            hours,
        })
    }

    pub fn date_time(&mut self) -> Result<DateTime, Error<T::Error>> {
        Ok(DateTime {
            date: self.date()?,
            time: self.time()?,
        })
    }

    /// Weekday, day of month, month and year, written in that order.
    pub fn set_date(&mut self, date: &Date) -> Result<(), Error<T::Error>> {
        self.set_weekday(date.weekday)?;
        self.set_day_of_month(date.day_of_month)?;
        self.set_month(date.month)?;
        self.set_year(date.year)
    }

    /// Seconds, minutes, then hours through the accessor matching
    /// `time.hours`.
    ///
    /// On `ModeMismatch` the seconds and minutes have already been written.
    pub fn set_time(&mut self, time: &Time) -> Result<(), Error<T::Error>> {
        self.set_seconds(time.seconds)?;
        self.set_minutes(time.minutes)?;
        self.set_hours(time.hours)
    }

    pub fn set_date_time(&mut self, date_time: &DateTime) -> Result<(), Error<T::Error>> {
        self.set_date(&date_time.date)?;
        self.set_time(&date_time.time)
    }
}
