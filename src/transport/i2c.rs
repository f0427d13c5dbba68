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

use crate::registers::RegisterAddress;
use crate::transport::RegisterTransport;
use embedded_hal::i2c::I2c;
use log::trace;

/// 7-bit address shared by the DS1307/DS3231 family.
pub const DEFAULT_DEVICE_ADDRESS: u8 = 0x68;

pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cTransport<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_DEVICE_ADDRESS)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> RegisterTransport for I2cTransport<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn read_byte(&mut self, address: RegisterAddress) -> Result<u8, Self::Error> {
        let mut data = [0u8; 1];
        self.i2c
            .write_read(self.address, &[address.offset()], &mut data)?;
        trace!("i2c {:#04x}: read {:?} = {:#04x}", self.address, address, data[0]);
        Ok(data[0])
    }

    fn write_byte(&mut self, address: RegisterAddress, value: u8) -> Result<(), Self::Error> {
        trace!("i2c {:#04x}: write {:?} = {:#04x}", self.address, address, value);
        self.i2c.write(self.address, &[address.offset(), value])
    }
}
