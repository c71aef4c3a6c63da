//! Imp sprite frames.
//!
//! The four wing positions are embedded cell art. `SpriteSet::load`
//! validates the set once at startup; the renderer then stamps whichever
//! frame the simulation's frame index selects.

use crate::constants::IMP_FRAME_COUNT;
use std::io;

/// One animation frame with its declared cell dimensions.
pub struct ImpFrame {
    pub art: &'static str,
    pub width: usize,
    pub height: usize,
}

impl ImpFrame {
    pub const fn new(art: &'static str, width: usize, height: usize) -> Self {
        Self { art, width, height }
    }
}

// ── Wing cycle: up, mid, down, glide ────────────────────────────────

pub const IMP_FRAME_WING_UP: ImpFrame = ImpFrame::new(
    r" \^o=>
  (_/",
    6,
    2,
);

pub const IMP_FRAME_WING_MID: ImpFrame = ImpFrame::new(
    r"  ^o=>
 =(_/",
    6,
    2,
);

pub const IMP_FRAME_WING_DOWN: ImpFrame = ImpFrame::new(
    r"  ^o=>
 /(_/",
    6,
    2,
);

pub const IMP_FRAME_GLIDE: ImpFrame = ImpFrame::new(
    r"  ^o=>
 ~(_/",
    6,
    2,
);

pub const IMP_FRAMES: [ImpFrame; IMP_FRAME_COUNT] = [
    IMP_FRAME_WING_UP,
    IMP_FRAME_WING_MID,
    IMP_FRAME_WING_DOWN,
    IMP_FRAME_GLIDE,
];

/// The validated frame set handed to the renderer.
#[derive(Debug)]
pub struct SpriteSet {
    pub width: usize,
    pub height: usize,
    frames: Vec<Vec<&'static str>>,
}

impl SpriteSet {
    /// Validate and parse the embedded frames. Fails if any frame
    /// disagrees with the first frame's dimensions or its art spills
    /// outside them; gameplay never starts with a broken set.
    pub fn load() -> io::Result<Self> {
        Self::from_frames(&IMP_FRAMES)
    }

    fn from_frames(frames: &[ImpFrame]) -> io::Result<Self> {
        let first = frames.first().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "imp sprite set is empty")
        })?;
        if first.width == 0 || first.height == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "imp frame 0 declares zero dimensions",
            ));
        }

        let mut parsed = Vec::with_capacity(frames.len());
        for (i, frame) in frames.iter().enumerate() {
            if frame.width != first.width || frame.height != first.height {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "imp frame {}: {}x{} does not match frame 0 at {}x{}",
                        i, frame.width, frame.height, first.width, first.height
                    ),
                ));
            }

            let lines: Vec<&'static str> = frame.art.lines().collect();
            if lines.len() > frame.height {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "imp frame {}: {} rows exceed declared height {}",
                        i,
                        lines.len(),
                        frame.height
                    ),
                ));
            }
            for line in &lines {
                if line.chars().count() > frame.width {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("imp frame {}: row wider than declared width {}", i, frame.width),
                    ));
                }
            }

            parsed.push(lines);
        }

        Ok(Self {
            width: first.width,
            height: first.height,
            frames: parsed,
        })
    }

    /// Rows of the frame at `index`, wrapping past the end of the cycle.
    pub fn frame(&self, index: usize) -> &[&'static str] {
        &self.frames[index % self.frames.len()]
    }
}
