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

//! Packed binary-coded-decimal conversion for single register bytes.
//!
//! One byte holds two decimal digits: tens in the high nibble, units in the low
//! nibble. Only 0..=99 is meaningful. Values outside that range are not
//! rejected: `encode` and `decode` return whatever the nibble arithmetic gives,
//! and callers are expected to keep inputs in range.

const UNITS_MASK: u8 = 0x0F;
const TENS_MASK: u8 = 0xF0;
const TENS_SHIFT: u32 = 4;

/// Encode a decimal value (0..=99) as a packed BCD byte.
///
/// `encode(100)` gives `0xA0`, which no chip will read back as 100.
pub fn encode(value: u8) -> u8 {
    if value <= 9 {
        return value;
    }
    ((value / 10) << TENS_SHIFT) | (value % 10)
}

/// Decode a packed BCD byte into its decimal value.
///
/// Nibbles above 9 are not rejected, so `decode(0xFF)` is 165.
pub fn decode(byte: u8) -> u8 {
    let units = byte & UNITS_MASK;
    let tens = (byte & TENS_MASK) >> TENS_SHIFT;
    10 * tens + units
}
