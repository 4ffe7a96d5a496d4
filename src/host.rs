use std::time::Duration;

use serialport::SerialPort;

use crate::constants::link_speed;

/// Opens the serial device at the agreed link speed.
///
/// The builder takes the numeric form; on unix the termios token is then
/// applied to the open descriptor, the same call the daemon side makes.
pub fn open_link(path: &str, timeout: Duration) -> serialport::Result<Box<dyn SerialPort>> {
    let builder = serialport::new(path, link_speed::LINK_SPEED_INTEGER).timeout(timeout);
    #[cfg(unix)]
    {
        use std::os::unix::io::AsRawFd;
        let port = builder.open_native()?;
        set_output_speed(port.as_raw_fd())?;
        Ok(Box::new(port))
    }
    #[cfg(not(unix))]
    {
        builder.open()
    }
}

/// Sets the output speed of an already open descriptor to the agreed rate,
/// through the opaque termios token.
#[cfg(unix)]
pub fn set_output_speed(fd: std::os::unix::io::RawFd) -> std::io::Result<()> {
    let mut tio = unsafe { std::mem::zeroed::<libc::termios>() };
    if unsafe { libc::tcgetattr(fd, &mut tio) } != 0 {
        return Err(std::io::Error::last_os_error());
    }
    if unsafe { libc::cfsetospeed(&mut tio, link_speed::LINK_SPEED_SPEED_T) } != 0 {
        return Err(std::io::Error::last_os_error());
    }
    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &tio) } != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}
