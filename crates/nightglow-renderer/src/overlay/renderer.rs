use glyphon::{
    Attrs, Buffer as TextBuffer, Cache, Color as GlyphonColor, Family, FontSystem, Metrics,
    Resolution, Shaping, SwashCache, TextArea, TextAtlas, TextBounds,
    TextRenderer as GlyphonRenderer, Viewport,
};

use crate::gpu::RendererError;

const FONT_SIZE: f32 = 14.0;
const LINE_HEIGHT: f32 = 18.0;
const MARGIN: f32 = 10.0;
const TEXT_COLOR: GlyphonColor = GlyphonColor::rgb(230, 230, 230);

/// Debug overlay text drawn in the top-left corner, backed by glyphon.
pub struct OverlayRenderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
    _cache: Cache,
    atlas: TextAtlas,
    viewport: Viewport,
    renderer: GlyphonRenderer,
    buffer: TextBuffer,
    text: String,
}

impl OverlayRenderer {
    /// Create an overlay renderer for the surface format, using system fonts.
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let mut font_system = FontSystem::new();
        let swash_cache = SwashCache::new();
        let cache = Cache::new(device);
        let mut atlas = TextAtlas::new(device, queue, &cache, format);
        let viewport = Viewport::new(device, &cache);
        let renderer =
            GlyphonRenderer::new(&mut atlas, device, wgpu::MultisampleState::default(), None);
        let buffer = TextBuffer::new(&mut font_system, Metrics::new(FONT_SIZE, LINE_HEIGHT));

        Self {
            font_system,
            swash_cache,
            _cache: cache,
            atlas,
            viewport,
            renderer,
            buffer,
            text: String::new(),
        }
    }

    /// Lay out `lines` and upload glyphs for a `width`×`height` surface.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        lines: &[String],
    ) -> Result<(), RendererError> {
        self.viewport.update(queue, Resolution { width, height });

        let text = lines.join("\n");
        if text != self.text {
            let attrs = Attrs::new().family(Family::Monospace).color(TEXT_COLOR);
            self.buffer.set_size(
                &mut self.font_system,
                Some(width as f32 - MARGIN),
                Some(height as f32 - MARGIN),
            );
            self.buffer
                .set_text(&mut self.font_system, &text, attrs, Shaping::Basic);
            self.buffer.shape_until_scroll(&mut self.font_system, false);
            self.text = text;
        }

        let area = TextArea {
            buffer: &self.buffer,
            left: MARGIN,
            top: MARGIN,
            scale: 1.0,
            bounds: TextBounds {
                left: 0,
                top: 0,
                right: width as i32,
                bottom: height as i32,
            },
            default_color: TEXT_COLOR,
            custom_glyphs: &[],
        };

        self.renderer
            .prepare(
                device,
                queue,
                &mut self.font_system,
                &mut self.atlas,
                &self.viewport,
                [area],
                &mut self.swash_cache,
            )
            .map_err(|e| RendererError::TextError(format!("{e:?}")))
    }

    /// Draw the prepared text into a pass on the surface.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>) {
        self.renderer
            .render(&self.atlas, &self.viewport, pass)
            .unwrap_or_else(|e| {
                tracing::warn!("glyphon render error: {:?}", e);
            });
    }

    /// Drop glyphs not used since the last prepare.
    pub fn trim(&mut self) {
        self.atlas.trim();
    }
}
