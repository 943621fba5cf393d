use crate::foundation::core::{Canvas, CanvasFrame};
use crate::foundation::error::{MosaikaError, MosaikaResult};
use std::path::Path;

/// Background the canvas is cleared to on session start (#111111, opaque).
pub const SESSION_BACKGROUND: [u8; 4] = [0x11, 0x11, 0x11, 0xff];

/// Accumulating CPU paint surface.
///
/// Each frame's primitives are rasterized into a transparent scratch pixmap
/// and then composited premultiplied-over onto the persistent canvas, so a
/// frame lands atomically. The canvas is append-only within a session:
/// nothing erases, new primitives overlay old ones.
pub struct PaintSurface {
    dims: Canvas,
    canvas: vello_cpu::Pixmap,
    scratch: vello_cpu::Pixmap,
    ctx: vello_cpu::RenderContext,
}

impl PaintSurface {
    /// Allocate a surface, cleared to [`SESSION_BACKGROUND`].
    pub fn new(dims: Canvas) -> MosaikaResult<Self> {
        let w: u16 = dims
            .width
            .try_into()
            .map_err(|_| MosaikaError::render("surface width exceeds u16"))?;
        let h: u16 = dims
            .height
            .try_into()
            .map_err(|_| MosaikaError::render("surface height exceeds u16"))?;
        let mut out = Self {
            dims,
            canvas: vello_cpu::Pixmap::new(w, h),
            scratch: vello_cpu::Pixmap::new(w, h),
            ctx: vello_cpu::RenderContext::new(w, h),
        };
        out.clear(SESSION_BACKGROUND);
        Ok(out)
    }

    /// Surface dimensions.
    pub fn canvas(&self) -> Canvas {
        self.dims
    }

    /// Reset every canvas pixel to `rgba` (straight alpha).
    pub fn clear(&mut self, rgba: [u8; 4]) {
        let px = premul_rgba8(rgba);
        for chunk in self.canvas.data_as_u8_slice_mut().chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Rasterize one frame batch and composite it over the canvas.
    ///
    /// `paint` receives a reset context; the draw calls issued there become
    /// the frame's batch. Nothing is visible on the canvas until the closure
    /// returns.
    pub(crate) fn paint_frame(
        &mut self,
        paint: impl FnOnce(&mut vello_cpu::RenderContext),
    ) -> MosaikaResult<()> {
        self.ctx.reset();
        self.ctx
            .set_blend_mode(vello_cpu::peniko::BlendMode::default());
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        paint(&mut self.ctx);
        self.ctx.flush();

        self.scratch.data_as_u8_slice_mut().fill(0);
        self.ctx.render_to_pixmap(&mut self.scratch);
        premul_over_in_place(
            self.canvas.data_as_u8_slice_mut(),
            self.scratch.data_as_u8_slice(),
        )
    }

    /// Lossless snapshot of the current canvas, taken synchronously.
    ///
    /// The canvas is opaque (opaque background, opaque primitives), so the
    /// premultiplied store equals straight RGBA8.
    pub fn snapshot(&self) -> CanvasFrame {
        CanvasFrame {
            width: self.dims.width,
            height: self.dims.height,
            data: self.canvas.data_as_u8_slice().to_vec(),
        }
    }

    /// Write the current canvas as a PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> MosaikaResult<()> {
        let path = path.as_ref();
        let frame = self.snapshot();
        image::save_buffer_with_format(
            path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| MosaikaError::render(format!("write png '{}': {e}", path.display())))
    }
}

fn premul_rgba8(rgba: [u8; 4]) -> [u8; 4] {
    let [r, g, b, a] = rgba;
    let a16 = u16::from(a);
    let premul = |c: u8| -> u8 { (((u16::from(c) * a16) + 127) / 255) as u8 };
    [premul(r), premul(g), premul(b), a]
}

fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> MosaikaResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(MosaikaError::render(
            "frame composite expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = u16::from(s[3]);
        if sa == 0 {
            continue;
        }
        let inv = 255u16 - sa;
        d[3] = s[3].saturating_add(mul_div255(u16::from(d[3]), inv));
        for c in 0..3 {
            d[c] = s[c].saturating_add(mul_div255(u16::from(d[c]), inv));
        }
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}
