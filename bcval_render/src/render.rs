use tracing::debug;

use bcval_core::SymbologyTag;
use bcval_validate::{Rejection, Validator};

use crate::color::normalize_color;

/// Background used when no background color is requested.
pub const DEFAULT_BACKGROUND: &str = "ffffff";

/// Default printed width and height, in millimeters.
pub const DEFAULT_SIZE_MM: u32 = 10;

/// Everything the rendering engine needs to draw one barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    tag: SymbologyTag,
    payload: String,
    bar_color: String,
    background_color: String,
    width_mm: u32,
    height_mm: u32,
}

impl RenderRequest {
    /// Start building a request drawing `payload` as `tag`.
    pub fn builder<S: Into<String>>(tag: SymbologyTag, payload: S) -> RenderRequestBuilder {
        RenderRequestBuilder::new(tag, payload)
    }

    pub fn tag(&self) -> SymbologyTag {
        self.tag
    }

    /// Identifier of the symbology as understood by the engine.
    pub fn symbology_id(&self) -> &'static str {
        self.tag.render_id()
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Bar color, as bare hex digits.
    pub fn bar_color(&self) -> &str {
        &self.bar_color
    }

    /// Background color, as bare hex digits.
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    pub fn width_mm(&self) -> u32 {
        self.width_mm
    }

    pub fn height_mm(&self) -> u32 {
        self.height_mm
    }
}

/// Builder of a [RenderRequest]. Colors may be given with or without a leading `#`.
#[derive(Debug, Clone)]
pub struct RenderRequestBuilder {
    tag: SymbologyTag,
    payload: String,
    bar_color: Option<String>,
    background_color: Option<String>,
    width_mm: u32,
    height_mm: u32,
}

impl RenderRequestBuilder {
    pub fn new<S: Into<String>>(tag: SymbologyTag, payload: S) -> Self {
        Self {
            tag,
            payload: payload.into(),
            bar_color: None,
            background_color: None,
            width_mm: DEFAULT_SIZE_MM,
            height_mm: DEFAULT_SIZE_MM,
        }
    }

    /// Set the bar `color`.
    pub fn with_bar_color(mut self, color: &str) -> Self {
        self.bar_color = Some(color.into());
        self
    }

    /// Set the background `color`.
    pub fn with_background_color(mut self, color: &str) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the printed size in millimeters.
    pub fn with_size(mut self, width_mm: u32, height_mm: u32) -> Self {
        self.width_mm = width_mm;
        self.height_mm = height_mm;
        self
    }

    /// Peek at the payload to be drawn.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn tag(&self) -> SymbologyTag {
        self.tag
    }

    /// Normalize the colors and produce the request. The payload is not validated.
    /// # Example
    /// ```
    /// use bcval_core::SymbologyTag;
    /// use bcval_render::RenderRequest;
    /// let request = RenderRequest::builder(SymbologyTag::Nw7, "A12345D")
    ///     .with_bar_color("#f50505")
    ///     .build();
    /// assert_eq!(request.symbology_id(), "rationalizedCodabar");
    /// assert_eq!(request.bar_color(), "f50505");
    /// assert_eq!(request.background_color(), "ffffff");
    /// ```
    pub fn build(self) -> RenderRequest {
        RenderRequest {
            tag: self.tag,
            payload: self.payload,
            bar_color: normalize_color(self.bar_color.as_deref(), None),
            background_color: normalize_color(self.background_color.as_deref(), Some(DEFAULT_BACKGROUND)),
            width_mm: self.width_mm,
            height_mm: self.height_mm,
        }
    }
}

/// Engine turning a [RenderRequest] into encoded image bytes.
pub trait Renderer {
    type Error: std::error::Error + 'static;

    fn render(&self, request: &RenderRequest) -> Result<Vec<u8>, Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError<E: std::error::Error + 'static> {
    #[error("cannot render {0} payload: {1}")]
    Rejected(SymbologyTag, Rejection),
    #[error("rendering engine failed: {0}")]
    Engine(#[source] E),
}

/// Validate the payload of `builder` and hand the resulting request to `renderer`. The renderer is only invoked on
/// valid payloads.
pub fn render_validated<R: Renderer>(
    validator: &Validator,
    renderer: &R,
    builder: RenderRequestBuilder,
) -> Result<Vec<u8>, RenderError<R::Error>> {
    let tag = builder.tag();
    validator
        .check(tag, builder.payload())
        .map_err(|reason| RenderError::Rejected(tag, reason))?;
    let request = builder.build();
    debug!(
        "rendering {} as {} ({}x{} mm)",
        request.tag(),
        request.symbology_id(),
        request.width_mm(),
        request.height_mm()
    );
    renderer.render(&request).map_err(RenderError::Engine)
}
