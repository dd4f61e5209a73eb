use sdl2::pixels::PixelFormatEnum;

use vip8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use vip8_core::FrameBuffer;

const SCALE: usize = 10;

/// Phosphor-on-olive palette, RGB triplets.
const FOREGROUND: [u8; 3] = [0x00, 0x00, 0x00];
const BACKGROUND: [u8; 3] = [0xBA, 0xB8, 0x6C];

/// Renders the core's 64x32 1-bit framebuffer into an SDL2 window.
///
/// The window is `SCALE` times the native resolution; each frame is
/// streamed as an RGB24 texture built from the framebuffer snapshot.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
}

impl Display {
    /// Creates a window bound to an sdl2 context and sized for the machine's
    /// native resolution.
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "vip8",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display { canvas })
    }

    /// Expands the 1-bit framebuffer into concatenated RGB rows for an SDL2
    /// RGB24 texture, sampling row words from their high bit down so column
    /// 0 lands leftmost.
    fn frame_to_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .rows()
            .iter()
            .flat_map(|row| (0..DISPLAY_WIDTH).map(move |col| row >> (63 - col) & 1))
            .flat_map(|bit| if bit == 1 { FOREGROUND } else { BACKGROUND })
            .collect()
    }

    /// Uploads and presents one frame.
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Display::frame_to_texture(frame));
            })
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_texture_expands_bits_to_rgb() {
        let mut frame = FrameBuffer::new();
        frame.draw_sprite(0, 1, &[0b0100_0000]).unwrap();
        let texture = Display::frame_to_texture(&frame);

        assert_eq!(texture.len(), DISPLAY_WIDTH * DISPLAY_HEIGHT * 3);

        let row = DISPLAY_WIDTH * 3;
        // row 0 is all background
        assert_eq!(&texture[..3], &BACKGROUND);
        // row 1: column 0 off, column 1 on
        assert_eq!(&texture[row..row + 3], &BACKGROUND);
        assert_eq!(&texture[row + 3..row + 6], &FOREGROUND);
        assert_eq!(&texture[row + 6..row + 9], &BACKGROUND);
    }
}
