//! Module format detection from header bytes
//!
//! Detection is crude on purpose: it looks at a handful of magic strings and,
//! failing those, guesses at the headerless 15-sample STK layout. Rules are
//! checked in a fixed priority order so that formats with strong signatures
//! win over the heuristics.

use std::fmt;
use std::io::{self, Read, Seek, SeekFrom};

/// "Extended Module: " at offset 0
pub const XM_MAGIC: &[u8; 17] = b"Extended Module: ";
/// "DIGI Booster module" plus its NUL terminator at offset 0
pub const DIGI_MAGIC: &[u8; 20] = b"DIGI Booster module\0";
/// "SCRM" at offset 0x2C
pub const S3M_MAGIC: &[u8; 4] = b"SCRM";
/// Impulse Tracker header at offset 0
pub const IT_MAGIC: &[u8; 4] = b"IMPM";

/// Tracker signatures at offset 0x14 of an STM header
const STM_MAGICS: [&[u8; 8]; 4] = [b"!Scream!", b"BMOD2STM", b"WUZAMOD!", b"SWavePro"];

/// Fixed 4-byte IDs at offset 1080 of a MOD file
const MOD_IDS: [&[u8; 4]; 16] = [
    b"M.K.", b"M!K!", b"NSMS", b"LARD", b"PATT", b"FLT4", b"FLT8", b"EXO4", b"EXO8", b"N.T.",
    b"M&K!", b"FEST", b"CD61", b"CD81", b"OKTA", b"OCTA",
];

/// Bytes of the file start kept in the snapshot
pub const HEAD_LEN: usize = 256;
/// Offset of the MOD channel/format ID
pub const MOD_ID_OFFSET: u64 = 1080;
/// Offset of the STK order count and tempo bytes
pub const STK_FIELDS_OFFSET: u64 = 470;
/// Smallest file that can hold a 15-sample STK module
pub const STK_MIN_FILE_LEN: u64 = 1624;
/// Largest possible 15-sample STK module
pub const STK_MAX_FILE_LEN: u64 = 984_634;

/// A supported module format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleFormat {
    /// FastTracker II
    Xm,
    /// ProTracker and multichannel variants
    Mod,
    /// Scream Tracker 3
    S3m,
    /// Scream Tracker 2
    Stm,
    /// DIGI Booster (non-Pro)
    Digi,
    /// Headerless 15-sample Soundtracker module; a guess, not a match
    PossiblyStk,
}

impl ModuleFormat {
    /// Every format, in registry order
    pub const ALL: [ModuleFormat; 6] = [
        Self::Xm,
        Self::Mod,
        Self::S3m,
        Self::Stm,
        Self::Digi,
        Self::PossiblyStk,
    ];

    /// Short display name
    pub fn name(self) -> &'static str {
        match self {
            Self::Xm => "XM",
            Self::Mod => "MOD",
            Self::S3m => "S3M",
            Self::Stm => "STM",
            Self::Digi => "DIGI",
            Self::PossiblyStk => "STK",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Xm => 0,
            Self::Mod => 1,
            Self::S3m => 2,
            Self::Stm => 3,
            Self::Digi => 4,
            Self::PossiblyStk => 5,
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The header bytes detection looks at
///
/// Bytes past the end of the file read as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSnapshot {
    pub head: [u8; HEAD_LEN],
    pub mod_id: [u8; 4],
    /// STK order count and tempo byte
    pub stk_fields: [u8; 2],
    pub file_len: u64,
}

impl HeaderSnapshot {
    /// Take a snapshot of `reader`, restoring its position afterwards
    ///
    /// The position is restored on failure too.
    pub fn read<R: Read + Seek + ?Sized>(reader: &mut R) -> io::Result<Self> {
        let start = reader.stream_position()?;
        let snapshot = Self::read_fields(reader);
        let restored = reader.seek(SeekFrom::Start(start));
        let snapshot = snapshot?;
        restored?;
        Ok(snapshot)
    }

    fn read_fields<R: Read + Seek + ?Sized>(reader: &mut R) -> io::Result<Self> {
        let file_len = reader.seek(SeekFrom::End(0))?;

        let mut snapshot = Self {
            head: [0; HEAD_LEN],
            mod_id: [0; 4],
            stk_fields: [0; 2],
            file_len,
        };

        reader.seek(SeekFrom::Start(0))?;
        read_up_to(reader, &mut snapshot.head)?;
        reader.seek(SeekFrom::Start(MOD_ID_OFFSET))?;
        read_up_to(reader, &mut snapshot.mod_id)?;
        reader.seek(SeekFrom::Start(STK_FIELDS_OFFSET))?;
        read_up_to(reader, &mut snapshot.stk_fields)?;
        Ok(snapshot)
    }

    /// Build a snapshot from an in-memory file
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut snapshot = Self {
            head: [0; HEAD_LEN],
            mod_id: [0; 4],
            stk_fields: [0; 2],
            file_len: data.len() as u64,
        };
        copy_at(data, 0, &mut snapshot.head);
        copy_at(data, MOD_ID_OFFSET as usize, &mut snapshot.mod_id);
        copy_at(data, STK_FIELDS_OFFSET as usize, &mut snapshot.stk_fields);
        snapshot
    }

    /// Apply the detection rules; `None` means unsupported
    pub fn classify(&self) -> Option<ModuleFormat> {
        let d = &self.head;

        if &d[..20] == DIGI_MAGIC && (1..=8).contains(&d[0x19]) {
            return Some(ModuleFormat::Digi);
        }

        if &d[0x2C..0x30] == S3M_MAGIC && d[0x1D] == 16 {
            return Some(ModuleFormat::S3m);
        }

        if STM_MAGICS.iter().any(|m| &d[0x14..0x1C] == *m) && d[0x1D] == 2 {
            return Some(ModuleFormat::Stm);
        }

        if is_mod_id(&self.mod_id) {
            return Some(ModuleFormat::Mod);
        }

        // Impulse Tracker files would otherwise fall through to the STK guess
        if &d[..4] == IT_MAGIC && d[0x16] == 0 {
            return None;
        }

        if &d[..17] == XM_MAGIC {
            return Some(ModuleFormat::Xm);
        }

        if !(STK_MIN_FILE_LEN..=STK_MAX_FILE_LEN).contains(&self.file_len) {
            return None;
        }

        let [num_orders, tempo] = self.stk_fields;
        if num_orders <= 128 && tempo <= 220 {
            Some(ModuleFormat::PossiblyStk)
        } else {
            None
        }
    }
}

/// Check the 4-byte ID at offset 1080 against the MOD channel tags
fn is_mod_id(id: &[u8; 4]) -> bool {
    let nonzero_digit = |b: u8| (b'1'..=b'9').contains(&b);

    // xCHN: 1-9 channels
    if nonzero_digit(id[0]) && &id[1..] == b"CHN" {
        return true;
    }

    // FA0x: Digital Tracker, 4-8 channels
    if &id[..3] == b"FA0" && (b'4'..=b'8').contains(&id[3]) {
        return true;
    }

    // xxCH / xxCN: 10-99 channels
    if nonzero_digit(id[0])
        && id[1].is_ascii_digit()
        && (&id[2..] == b"CH" || &id[2..] == b"CN")
    {
        return true;
    }

    MOD_IDS.iter().any(|m| id == *m)
}

/// Detect the format of a seekable stream
///
/// The stream position is the same on return as on entry. `Ok(None)` means
/// the file is not a supported module.
pub fn detect_format<R: Read + Seek + ?Sized>(reader: &mut R) -> io::Result<Option<ModuleFormat>> {
    let snapshot = HeaderSnapshot::read(reader)?;
    let format = snapshot.classify();
    tracing::debug!(
        file_len = snapshot.file_len,
        detected = format.map(ModuleFormat::name).unwrap_or("unknown"),
        "Sniffed module header"
    );
    Ok(format)
}

/// Fill as much of `buf` as the reader can supply; the rest stays zero
fn read_up_to<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn copy_at(data: &[u8], offset: usize, out: &mut [u8]) {
    if let Some(src) = data.get(offset..) {
        let n = src.len().min(out.len());
        out[..n].copy_from_slice(&src[..n]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn put(data: &mut [u8], offset: usize, bytes: &[u8]) {
        data[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    fn file_with_mod_id(id: &[u8; 4]) -> Vec<u8> {
        let mut data = vec![0u8; 2048];
        put(&mut data, 1080, id);
        data
    }

    fn sniff(data: &[u8]) -> Option<ModuleFormat> {
        detect_format(&mut Cursor::new(data)).unwrap()
    }

    // =========================================================================
    // Signature matches
    // =========================================================================

    #[test]
    fn test_detect_xm() {
        let mut data = vec![0u8; 400];
        put(&mut data, 0, XM_MAGIC);
        assert_eq!(sniff(&data), Some(ModuleFormat::Xm));
    }

    #[test]
    fn test_detect_mod_classic_ids() {
        for id in MOD_IDS {
            assert_eq!(sniff(&file_with_mod_id(id)), Some(ModuleFormat::Mod), "{:?}", id);
        }
    }

    #[test]
    fn test_detect_mod_channel_tags() {
        for id in [b"6CHN", b"FA04", b"FA08", b"10CH", b"32CN", b"99CH"] {
            assert_eq!(sniff(&file_with_mod_id(id)), Some(ModuleFormat::Mod), "{:?}", id);
        }
    }

    #[test]
    fn test_reject_bad_mod_channel_tags() {
        for id in [b"0CHN", b"FA03", b"FA09", b"05CH", b"1ACH"] {
            assert!(!is_mod_id(id), "{:?}", id);
        }
    }

    #[test]
    fn test_detect_s3m() {
        let mut data = vec![0u8; 2048];
        put(&mut data, 0x2C, S3M_MAGIC);
        data[0x1D] = 16;
        assert_eq!(sniff(&data), Some(ModuleFormat::S3m));

        // Wrong type byte falls through to the STK guess
        data[0x1D] = 17;
        assert_eq!(sniff(&data), Some(ModuleFormat::PossiblyStk));
    }

    #[test]
    fn test_detect_stm() {
        for magic in STM_MAGICS {
            let mut data = vec![0u8; 2048];
            put(&mut data, 0x14, magic);
            data[0x1D] = 2;
            assert_eq!(sniff(&data), Some(ModuleFormat::Stm));
        }
    }

    #[test]
    fn test_detect_digi() {
        let mut data = vec![0u8; 2048];
        put(&mut data, 0, DIGI_MAGIC);
        data[0x19] = 4;
        assert_eq!(sniff(&data), Some(ModuleFormat::Digi));

        let mut data = vec![0u8; 100];
        put(&mut data, 0, DIGI_MAGIC);
        data[0x19] = 9;
        assert_eq!(sniff(&data), None);
    }

    #[test]
    fn test_priority_s3m_before_mod() {
        let mut data = file_with_mod_id(b"M.K.");
        put(&mut data, 0x2C, S3M_MAGIC);
        data[0x1D] = 16;
        assert_eq!(sniff(&data), Some(ModuleFormat::S3m));
    }

    // =========================================================================
    // Rejections and the STK heuristic
    // =========================================================================

    #[test]
    fn test_impulse_tracker_rejected() {
        // Large enough that the STK guess would otherwise accept it
        let mut data = vec![0u8; 4096];
        put(&mut data, 0, IT_MAGIC);
        assert_eq!(sniff(&data), None);

        // A nonzero byte at 0x16 is not treated as IT
        data[0x16] = 1;
        assert_eq!(sniff(&data), Some(ModuleFormat::PossiblyStk));
    }

    #[test]
    fn test_stk_size_bounds() {
        assert_eq!(sniff(&vec![0u8; 1623]), None);
        assert_eq!(sniff(&vec![0u8; 1624]), Some(ModuleFormat::PossiblyStk));
        assert_eq!(sniff(&vec![0u8; 984_634]), Some(ModuleFormat::PossiblyStk));
        assert_eq!(sniff(&vec![0u8; 984_635]), None);
    }

    #[test]
    fn test_stk_field_limits() {
        let mut data = vec![0u8; 2000];
        put(&mut data, 470, &[128, 220]);
        assert_eq!(sniff(&data), Some(ModuleFormat::PossiblyStk));

        put(&mut data, 470, &[129, 0]);
        assert_eq!(sniff(&data), None);

        put(&mut data, 470, &[10, 221]);
        assert_eq!(sniff(&data), None);
    }

    #[test]
    fn test_empty_file_unknown() {
        assert_eq!(sniff(&[]), None);
    }

    #[test]
    fn test_position_restored() {
        let data = file_with_mod_id(b"M.K.");
        let mut cursor = Cursor::new(&data);
        cursor.set_position(77);
        assert_eq!(detect_format(&mut cursor).unwrap(), Some(ModuleFormat::Mod));
        assert_eq!(cursor.position(), 77);
    }

    /// Cursor whose reads fail once past `fail_at`
    struct BrokenTail {
        inner: Cursor<Vec<u8>>,
        fail_at: u64,
    }

    impl Read for BrokenTail {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.inner.position() >= self.fail_at {
                return Err(io::Error::other("bad sector"));
            }
            self.inner.read(buf)
        }
    }

    impl Seek for BrokenTail {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.inner.seek(pos)
        }
    }

    #[test]
    fn test_position_restored_on_read_error() {
        let mut reader = BrokenTail {
            inner: Cursor::new(file_with_mod_id(b"M.K.")),
            fail_at: 1000,
        };
        reader.inner.set_position(77);

        let err = detect_format(&mut reader).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(reader.inner.position(), 77);
    }

    #[test]
    fn test_snapshot_from_bytes_matches_read() {
        let mut data = vec![0u8; 1500];
        put(&mut data, 0, XM_MAGIC);
        put(&mut data, 470, &[5, 6]);
        let read = HeaderSnapshot::read(&mut Cursor::new(&data)).unwrap();
        assert_eq!(read, HeaderSnapshot::from_bytes(&data));
        assert_eq!(read.stk_fields, [5, 6]);
        assert_eq!(read.mod_id, [0; 4]);
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ModuleFormat::S3m.to_string(), "S3M");
        assert_eq!(ModuleFormat::PossiblyStk.to_string(), "STK");
    }
}
