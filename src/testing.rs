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

//! In-memory transports for exercising the codec without a bus.

use crate::registers::RegisterAddress;
use crate::transport::RegisterTransport;
use std::vec::Vec;
use strum::EnumCount;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BusFault;

/// Register file with an access log.
///
/// `fail_on` makes every access to one register fail, and `on_read` runs after
/// each read so tests can change registers between transactions.
pub struct RegisterBank {
    pub registers: [u8; RegisterAddress::COUNT],
    pub reads: Vec<RegisterAddress>,
    pub writes: Vec<(RegisterAddress, u8)>,
    pub fail_on: Option<RegisterAddress>,
    pub on_read: Option<fn(RegisterAddress, &mut [u8; RegisterAddress::COUNT])>,
}

impl RegisterBank {
    pub fn new() -> Self {
        Self::with_registers([0; RegisterAddress::COUNT])
    }

    pub fn with_registers(registers: [u8; RegisterAddress::COUNT]) -> Self {
        Self {
            registers,
            reads: Vec::new(),
            writes: Vec::new(),
            fail_on: None,
            on_read: None,
        }
    }

    pub fn get(&self, address: RegisterAddress) -> u8 {
        self.registers[address.offset() as usize]
    }

    pub fn set(&mut self, address: RegisterAddress, value: u8) {
        self.registers[address.offset() as usize] = value;
    }
}

impl RegisterTransport for RegisterBank {
    type Error = BusFault;

    fn read_byte(&mut self, address: RegisterAddress) -> Result<u8, Self::Error> {
        if self.fail_on == Some(address) {
            return Err(BusFault);
        }
        self.reads.push(address);
        let value = self.get(address);
        if let Some(hook) = self.on_read {
            hook(address, &mut self.registers);
        }
        Ok(value)
    }

    fn write_byte(&mut self, address: RegisterAddress, value: u8) -> Result<(), Self::Error> {
        if self.fail_on == Some(address) {
            return Err(BusFault);
        }
        self.writes.push((address, value));
        self.set(address, value);
        Ok(())
    }
}
