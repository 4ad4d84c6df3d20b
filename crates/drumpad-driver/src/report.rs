//! Input report wire format.
//!
//! ```text
//! offset  size  field
//!      0     1  message type (0x00)
//!      1     1  message size (0x14)
//!      2     2  button bitmask, LE
//!      4     1  left side/rim hit intensity
//!      5     1  right side/rim hit intensity
//!      6     2  left thumb x, LE signed
//!      8     2  left thumb y, LE signed
//!     10     2  right thumb x, LE signed
//!     12     2  right thumb y, LE signed
//!     14     6  reserved
//! ```

/// Length of the input report in bytes.
pub const REPORT_LEN: usize = 20;
/// Documented value of the message type byte.
pub const MSG_TYPE_INPUT: u8 = 0x00;
/// Documented value of the message size byte.
pub const MSG_SIZE: u8 = REPORT_LEN as u8;

const OFFSET_MSG_TYPE: usize = 0;
const OFFSET_MSG_SIZE: usize = 1;
const OFFSET_BUTTONS: usize = 2;
const OFFSET_LEFT_HIT: usize = 4;
const OFFSET_RIGHT_HIT: usize = 5;
const OFFSET_LEFT_THUMB_X: usize = 6;
const OFFSET_LEFT_THUMB_Y: usize = 8;
const OFFSET_RIGHT_THUMB_X: usize = 10;
const OFFSET_RIGHT_THUMB_Y: usize = 12;
const OFFSET_RESERVED: usize = 14;
const RESERVED_LEN: usize = REPORT_LEN - OFFSET_RESERVED;

type Frame = [u8; REPORT_LEN];

/// One decoded input report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawReport {
    pub msg_type: u8,
    pub msg_size: u8,
    /// Native button bitmask, see [`NativeButton`](crate::NativeButton).
    pub buttons: u16,
    pub left_hit: u8,
    pub right_hit: u8,
    pub left_thumb_x: i16,
    pub left_thumb_y: i16,
    pub right_thumb_x: i16,
    pub right_thumb_y: i16,
    pub reserved: [u8; RESERVED_LEN],
}

impl RawReport {
    /// Decode the first [`REPORT_LEN`] bytes of `data`.
    ///
    /// Returns `None` for shorter buffers. The header is not checked.
    pub fn parse(data: &[u8]) -> Option<Self> {
        let frame: &Frame = data.get(..REPORT_LEN)?.try_into().ok()?;
        let mut reserved = [0u8; RESERVED_LEN];
        reserved.copy_from_slice(&frame[OFFSET_RESERVED..]);

        Some(Self {
            msg_type: read_u8(frame, OFFSET_MSG_TYPE),
            msg_size: read_u8(frame, OFFSET_MSG_SIZE),
            buttons: read_u16_le(frame, OFFSET_BUTTONS),
            left_hit: read_u8(frame, OFFSET_LEFT_HIT),
            right_hit: read_u8(frame, OFFSET_RIGHT_HIT),
            left_thumb_x: read_i16_le(frame, OFFSET_LEFT_THUMB_X),
            left_thumb_y: read_i16_le(frame, OFFSET_LEFT_THUMB_Y),
            right_thumb_x: read_i16_le(frame, OFFSET_RIGHT_THUMB_X),
            right_thumb_y: read_i16_le(frame, OFFSET_RIGHT_THUMB_Y),
            reserved,
        })
    }

    /// A report with the documented header and everything else zeroed.
    pub fn idle() -> Self {
        Self {
            msg_type: MSG_TYPE_INPUT,
            msg_size: MSG_SIZE,
            ..Self::default()
        }
    }

    /// Whether the type/size bytes hold their documented constants.
    pub fn has_expected_header(&self) -> bool {
        self.msg_type == MSG_TYPE_INPUT && self.msg_size == MSG_SIZE
    }

    /// Encode back into wire bytes.
    pub fn to_bytes(&self) -> [u8; REPORT_LEN] {
        let mut frame = [0u8; REPORT_LEN];
        frame[OFFSET_MSG_TYPE] = self.msg_type;
        frame[OFFSET_MSG_SIZE] = self.msg_size;
        write_u16_le(&mut frame, OFFSET_BUTTONS, self.buttons);
        frame[OFFSET_LEFT_HIT] = self.left_hit;
        frame[OFFSET_RIGHT_HIT] = self.right_hit;
        write_u16_le(&mut frame, OFFSET_LEFT_THUMB_X, self.left_thumb_x as u16);
        write_u16_le(&mut frame, OFFSET_LEFT_THUMB_Y, self.left_thumb_y as u16);
        write_u16_le(&mut frame, OFFSET_RIGHT_THUMB_X, self.right_thumb_x as u16);
        write_u16_le(&mut frame, OFFSET_RIGHT_THUMB_Y, self.right_thumb_y as u16);
        frame[OFFSET_RESERVED..].copy_from_slice(&self.reserved);
        frame
    }
}

#[inline]
fn read_u8(frame: &Frame, offset: usize) -> u8 {
    frame[offset]
}

#[inline]
fn read_u16_le(frame: &Frame, offset: usize) -> u16 {
    u16::from_le_bytes([frame[offset], frame[offset + 1]])
}

#[inline]
fn read_i16_le(frame: &Frame, offset: usize) -> i16 {
    i16::from_le_bytes([frame[offset], frame[offset + 1]])
}

#[inline]
fn write_u16_le(frame: &mut Frame, offset: usize, value: u16) {
    frame[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> [u8; REPORT_LEN] {
        [
            0x00, 0x14, // header
            0x40, 0x10, // buttons = 0x1040
            0x32, 0xff, // hits
            0x01, 0x80, // left x = -32767
            0xff, 0x7f, // left y = 32767
            0xfe, 0xff, // right x = -2
            0x00, 0x01, // right y = 256
            1, 2, 3, 4, 5, 6,
        ]
    }

    #[test]
    fn parse_extracts_fields_little_endian() {
        let report = RawReport::parse(&sample_frame()).unwrap();
        assert_eq!(report.msg_type, 0x00);
        assert_eq!(report.msg_size, 0x14);
        assert_eq!(report.buttons, 0x1040);
        assert_eq!(report.left_hit, 0x32);
        assert_eq!(report.right_hit, 0xff);
        assert_eq!(report.left_thumb_x, -32767);
        assert_eq!(report.left_thumb_y, 32767);
        assert_eq!(report.right_thumb_x, -2);
        assert_eq!(report.right_thumb_y, 256);
        assert_eq!(report.reserved, [1, 2, 3, 4, 5, 6]);
        assert!(report.has_expected_header());
    }

    #[test]
    fn parse_rejects_short_buffers() {
        let frame = sample_frame();
        for len in 0..REPORT_LEN {
            assert_eq!(RawReport::parse(&frame[..len]), None, "len {len}");
        }
    }

    #[test]
    fn parse_uses_prefix_of_longer_buffers() {
        let mut long = sample_frame().to_vec();
        long.extend_from_slice(&[0xaa; 12]);
        assert_eq!(RawReport::parse(&long), RawReport::parse(&sample_frame()));
    }

    #[test]
    fn header_mismatch_is_parsed_but_flagged() {
        let mut frame = sample_frame();
        frame[0] = 0x01;
        let report = RawReport::parse(&frame).unwrap();
        assert!(!report.has_expected_header());

        let mut frame = sample_frame();
        frame[1] = 0x13;
        assert!(!RawReport::parse(&frame).unwrap().has_expected_header());
    }

    #[test]
    fn to_bytes_restores_wire_layout() {
        let frame = sample_frame();
        let report = RawReport::parse(&frame).unwrap();
        assert_eq!(report.to_bytes(), frame);
    }

    #[test]
    fn idle_report_has_documented_header() {
        let bytes = RawReport::idle().to_bytes();
        assert_eq!(&bytes[..2], &[0x00, 0x14]);
        assert!(bytes[2..].iter().all(|b| *b == 0));
    }
}
