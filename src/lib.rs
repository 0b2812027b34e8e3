// SNES controller emulator for the ESP32 (console-port adapter)

#![no_std]

pub mod board;
pub mod drivers;
pub mod kernel;
