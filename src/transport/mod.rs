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

pub mod i2c;

use crate::registers::RegisterAddress;

/// Single byte register access to the RTC chip.
///
/// Calls block until the bus transaction completes. Timeouts, retries and bus
/// sharing are up to the implementation.
pub trait RegisterTransport {
    type Error;

    /// Read the current raw content of a register.
    fn read_byte(&mut self, address: RegisterAddress) -> Result<u8, Self::Error>;

    /// Overwrite a register with a raw byte.
    fn write_byte(&mut self, address: RegisterAddress, value: u8) -> Result<(), Self::Error>;
}

impl<T: RegisterTransport + ?Sized> RegisterTransport for &mut T {
    type Error = T::Error;

    fn read_byte(&mut self, address: RegisterAddress) -> Result<u8, Self::Error> {
        T::read_byte(self, address)
    }

    fn write_byte(&mut self, address: RegisterAddress, value: u8) -> Result<(), Self::Error> {
        T::write_byte(self, address, value)
    }
}
