//
// Definition shared by the two ends of the USB serial link:
//   linkcheck / host daemon   configures its open descriptor with the
//                             termios token, via cfsetospeed
//   board sketch              passes the plain integer to its serial init
//
// Both forms below denote the same physical rate. The token is derived from
// the integer in const context, so there is exactly one literal to edit and
// a rate without a termios token fails the build instead of silently opening
// a mismatched line.

/// Canonical speed of the host<->board serial link, in baud.
pub const LINK_SPEED_INTEGER: u32 = 115_200;

/// The same rate as the opaque termios token, for cfsetospeed-style calls.
/// Never assume its numeric encoding; on Linux `B115200` is not 115200.
#[cfg(unix)]
pub const LINK_SPEED_SPEED_T: libc::speed_t = speed_token(LINK_SPEED_INTEGER);

/// Maps a plain baud rate to its termios speed token.
///
/// Only rates termios defines across the supported unix platforms are
/// listed. Evaluated in const context, so an unlisted rate is a compile
/// error at the constant that uses it, never a runtime fault.
#[cfg(unix)]
pub const fn speed_token(baud: u32) -> libc::speed_t {
    match baud {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19_200 => libc::B19200,
        38_400 => libc::B38400,
        57_600 => libc::B57600,
        115_200 => libc::B115200,
        230_400 => libc::B230400,
        _ => panic!("no termios speed token for this baud rate"),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn derived_token_matches_platform_constant() {
        assert_eq!(LINK_SPEED_SPEED_T, libc::B115200);
    }

    #[test]
    fn token_resolves_in_const_context() {
        const TOKEN: libc::speed_t = speed_token(LINK_SPEED_INTEGER);
        assert_eq!(TOKEN, LINK_SPEED_SPEED_T);
    }

    #[test]
    fn translation_table_covers_termios_rates() {
        assert_eq!(speed_token(1200), libc::B1200);
        assert_eq!(speed_token(2400), libc::B2400);
        assert_eq!(speed_token(4800), libc::B4800);
        assert_eq!(speed_token(9600), libc::B9600);
        assert_eq!(speed_token(19_200), libc::B19200);
        assert_eq!(speed_token(38_400), libc::B38400);
        assert_eq!(speed_token(57_600), libc::B57600);
        assert_eq!(speed_token(230_400), libc::B230400);
    }
}
