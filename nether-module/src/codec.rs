//! Raw PCM payload transforms
//!
//! Module formats store samples as 8-bit or 16-bit PCM, signed or unsigned,
//! sometimes delta-encoded, and sometimes as "split" stereo where all left
//! frames come first and all right frames follow (not interleaved). The
//! replayer only plays signed mono, so stereo input is folded into the left
//! half as `(left + right) >> 1`.
//!
//! Payloads are padded on both sides so a resampling interpolator can read
//! past either end of the logical data without bounds checks. The padding is
//! owned here but filled in by whoever prepares the sample for the mixer.

/// Frames reserved before the logical data
pub const SAMPLE_LEFT_PAD: usize = 15;

/// Total frames reserved around the logical data (left + right)
pub const SAMPLE_PAD_LENGTH: usize = SAMPLE_LEFT_PAD + 16;

/// Sample bit depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitDepth {
    #[default]
    Eight,
    Sixteen,
}

impl BitDepth {
    /// Bytes per sample frame
    pub const fn bytes_per_sample(self) -> usize {
        match self {
            Self::Eight => 1,
            Self::Sixteen => 2,
        }
    }
}

/// How the channels of a payload are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelLayout {
    #[default]
    Mono,
    /// First half holds the left channel, second half the right channel
    SplitStereo,
}

/// A PCM sample type the codec can operate on
pub trait PcmSample: Copy + Default {
    /// Toggle the sign bit (unsigned <-> signed)
    fn flip_sign(self) -> Self;
    /// Addition with wraparound at the sample's bit width
    fn wrapping_add(self, rhs: Self) -> Self;
    /// `(a + b) >> 1` computed without overflow
    fn average(a: Self, b: Self) -> Self;
}

impl PcmSample for i8 {
    fn flip_sign(self) -> Self {
        (self as u8 ^ 0x80) as i8
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        i8::wrapping_add(self, rhs)
    }

    fn average(a: Self, b: Self) -> Self {
        ((i32::from(a) + i32::from(b)) >> 1) as i8
    }
}

impl PcmSample for i16 {
    fn flip_sign(self) -> Self {
        (self as u16 ^ 0x8000) as i16
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        i16::wrapping_add(self, rhs)
    }

    fn average(a: Self, b: Self) -> Self {
        ((i32::from(a) + i32::from(b)) >> 1) as i16
    }
}

/// Convert unsigned samples to signed in place
///
/// For split stereo, both halves are converted and their average is written
/// into the first half; the second half is left as it was. The caller is
/// responsible for halving the sample length afterwards.
pub fn sign_convert<T: PcmSample>(data: &mut [T], layout: ChannelLayout) {
    match layout {
        ChannelLayout::Mono => {
            for s in data.iter_mut() {
                *s = s.flip_sign();
            }
        }
        ChannelLayout::SplitStereo => {
            let half = data.len() / 2;
            let (left, right) = data.split_at_mut(half);
            for (l, r) in left.iter_mut().zip(right.iter()) {
                *l = T::average(l.flip_sign(), r.flip_sign());
            }
        }
    }
}

/// Decode delta-encoded samples in place
///
/// Each channel keeps its own running sum starting at zero. For split stereo
/// the right half receives its decoded values and the first half receives the
/// mono average, same as [`sign_convert`].
pub fn delta_decode<T: PcmSample>(data: &mut [T], layout: ChannelLayout) {
    match layout {
        ChannelLayout::Mono => {
            let mut old = T::default();
            for s in data.iter_mut() {
                old = old.wrapping_add(*s);
                *s = old;
            }
        }
        ChannelLayout::SplitStereo => {
            let half = data.len() / 2;
            let (left, right) = data.split_at_mut(half);
            let mut old_l = T::default();
            let mut old_r = T::default();
            for (l, r) in left.iter_mut().zip(right.iter_mut()) {
                old_l = old_l.wrapping_add(*l);
                old_r = old_r.wrapping_add(*r);
                *r = old_r;
                *l = T::average(old_l, old_r);
            }
        }
    }
}

/// Padded PCM storage owned by a sample slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePayload {
    frames: Frames,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Frames {
    I8(Vec<i8>),
    I16(Vec<i16>),
}

fn try_zeroed<T: PcmSample>(len: usize) -> Option<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).ok()?;
    buf.resize(len, T::default());
    Some(buf)
}

fn logical<T>(buf: &[T]) -> &[T] {
    &buf[SAMPLE_LEFT_PAD..buf.len() - (SAMPLE_PAD_LENGTH - SAMPLE_LEFT_PAD)]
}

fn logical_mut<T>(buf: &mut [T]) -> &mut [T] {
    let end = buf.len() - (SAMPLE_PAD_LENGTH - SAMPLE_LEFT_PAD);
    &mut buf[SAMPLE_LEFT_PAD..end]
}

fn try_resize<T: PcmSample>(buf: &mut Vec<T>, old_len: usize, new_len: usize) -> bool {
    let keep = SAMPLE_LEFT_PAD + old_len.min(new_len);
    let total = new_len + SAMPLE_PAD_LENGTH;
    if total > buf.len() && buf.try_reserve_exact(total - buf.len()).is_err() {
        return false;
    }
    buf.truncate(keep);
    buf.resize(total, T::default());
    true
}

impl SamplePayload {
    /// Allocate `length` zeroed frames plus padding
    ///
    /// Aborts on allocation failure like any `Vec`; loaders handling
    /// untrusted lengths should use [`SamplePayload::try_allocate`].
    pub fn allocate(length: usize, depth: BitDepth) -> Self {
        let total = length + SAMPLE_PAD_LENGTH;
        let frames = match depth {
            BitDepth::Eight => Frames::I8(vec![0; total]),
            BitDepth::Sixteen => Frames::I16(vec![0; total]),
        };
        Self { frames }
    }

    /// Allocate `length` zeroed frames plus padding, `None` if memory is short
    pub fn try_allocate(length: usize, depth: BitDepth) -> Option<Self> {
        let total = length.checked_add(SAMPLE_PAD_LENGTH)?;
        let frames = match depth {
            BitDepth::Eight => Frames::I8(try_zeroed(total)?),
            BitDepth::Sixteen => Frames::I16(try_zeroed(total)?),
        };
        Some(Self { frames })
    }

    /// Decode raw little-endian bytes into a padded payload
    ///
    /// A trailing odd byte is ignored for 16-bit data.
    pub fn from_le_bytes(bytes: &[u8], depth: BitDepth) -> Option<Self> {
        let length = bytes.len() / depth.bytes_per_sample();
        let mut payload = Self::try_allocate(length, depth)?;
        match &mut payload.frames {
            Frames::I8(buf) => {
                let data = &mut buf[SAMPLE_LEFT_PAD..SAMPLE_LEFT_PAD + length];
                for (dst, &src) in data.iter_mut().zip(bytes) {
                    *dst = src as i8;
                }
            }
            Frames::I16(buf) => {
                let data = &mut buf[SAMPLE_LEFT_PAD..SAMPLE_LEFT_PAD + length];
                for (dst, src) in data.iter_mut().zip(bytes.chunks_exact(2)) {
                    *dst = i16::from_le_bytes([src[0], src[1]]);
                }
            }
        }
        Some(payload)
    }

    pub fn depth(&self) -> BitDepth {
        match self.frames {
            Frames::I8(_) => BitDepth::Eight,
            Frames::I16(_) => BitDepth::Sixteen,
        }
    }

    /// Logical length in frames
    pub fn len(&self) -> usize {
        let total = match &self.frames {
            Frames::I8(buf) => buf.len(),
            Frames::I16(buf) => buf.len(),
        };
        total - SAMPLE_PAD_LENGTH
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes held, padding included
    pub fn allocated_bytes(&self) -> usize {
        (self.len() + SAMPLE_PAD_LENGTH) * self.depth().bytes_per_sample()
    }

    /// Logical 8-bit frames
    pub fn as_i8(&self) -> Option<&[i8]> {
        match &self.frames {
            Frames::I8(buf) => Some(logical(buf)),
            Frames::I16(_) => None,
        }
    }

    /// Logical 8-bit frames, mutable
    pub fn as_i8_mut(&mut self) -> Option<&mut [i8]> {
        match &mut self.frames {
            Frames::I8(buf) => Some(logical_mut(buf)),
            Frames::I16(_) => None,
        }
    }

    /// Logical 16-bit frames
    pub fn as_i16(&self) -> Option<&[i16]> {
        match &self.frames {
            Frames::I16(buf) => Some(logical(buf)),
            Frames::I8(_) => None,
        }
    }

    /// Logical 16-bit frames, mutable
    pub fn as_i16_mut(&mut self) -> Option<&mut [i16]> {
        match &mut self.frames {
            Frames::I16(buf) => Some(logical_mut(buf)),
            Frames::I8(_) => None,
        }
    }

    /// The whole 8-bit buffer including padding
    pub fn padded_i8_mut(&mut self) -> Option<&mut [i8]> {
        match &mut self.frames {
            Frames::I8(buf) => Some(buf),
            Frames::I16(_) => None,
        }
    }

    /// The whole 16-bit buffer including padding
    pub fn padded_i16_mut(&mut self) -> Option<&mut [i16]> {
        match &mut self.frames {
            Frames::I16(buf) => Some(buf),
            Frames::I8(_) => None,
        }
    }

    /// Change the logical length, keeping existing frames and the padding layout
    ///
    /// Returns false (payload unchanged) if memory could not be reserved.
    pub fn resize(&mut self, length: usize) -> bool {
        let old_len = self.len();
        match &mut self.frames {
            Frames::I8(buf) => try_resize(buf, old_len, length),
            Frames::I16(buf) => try_resize(buf, old_len, length),
        }
    }

    /// [`sign_convert`] over the logical frames
    pub fn sign_convert(&mut self, layout: ChannelLayout) {
        match &mut self.frames {
            Frames::I8(buf) => sign_convert(logical_mut(buf), layout),
            Frames::I16(buf) => sign_convert(logical_mut(buf), layout),
        }
    }

    /// [`delta_decode`] over the logical frames
    pub fn delta_decode(&mut self, layout: ChannelLayout) {
        match &mut self.frames {
            Frames::I8(buf) => delta_decode(logical_mut(buf), layout),
            Frames::I16(buf) => delta_decode(logical_mut(buf), layout),
        }
    }
}
