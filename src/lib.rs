#![cfg_attr(not(test), no_std)]
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

//! Register level driver core for BCD real-time-clock chips.
//!
//! [`RegisterCodec`] turns decimal date and time values into the packed BCD
//! bytes the chip stores, and back, on top of any [`RegisterTransport`]. The
//! hours register also carries a 12/24 hour mode bit and an AM/PM bit, so hour
//! access is split into per-mode accessors that check the chip's current mode
//! before touching the value.
//!
//! ```ignore
//! let mut rtc = RegisterCodec::new(I2cTransport::new(i2c));
//! rtc.set_mode(HourMode::TwentyFourHour)?;
//! let now = rtc.date_time()?;
//! ```

pub mod bcd;
pub mod codec;
pub mod datetime;
pub mod hours;
pub mod registers;
pub mod transport;

#[cfg(test)]
mod testing;

pub use codec::{Error, RegisterCodec};
pub use datetime::{Date, DateTime, Time};
pub use hours::{HourMode, Hours, Meridiem};
pub use registers::RegisterAddress;
pub use transport::i2c::I2cTransport;
pub use transport::RegisterTransport;
