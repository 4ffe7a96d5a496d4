pub const SERIAL_PORT: &str = "/dev/ttyACM0"; // Change this to match your serial port
pub const SERIAL_READ_SIZE: usize = 256;
pub const PROBE_SEQUENCE: [u8; 8] = [0x55, 0xAA, 0x55, 0xAA, 0x4F, 0x4B, 0x0D, 0x0A];
