use wasm_bindgen::prelude::*;
use crate::{ConversionMode, Rain, RainConfig, TextConverter, COMMENT_STYLES};

#[wasm_bindgen]
pub fn init() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct WasmTextConverter {
    converter: TextConverter<'static>,
}

#[wasm_bindgen]
impl WasmTextConverter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmTextConverter {
        init();
        WasmTextConverter {
            converter: TextConverter::new(),
        }
    }

    /// Convert text; `mode` is e.g. "comment//", "emojiEncrypt" or "emojiDecrypt"
    #[wasm_bindgen]
    pub fn convert(&self, text: &str, mode: &str) -> Result<String, JsValue> {
        let mode: ConversionMode = mode.parse()
            .map_err(|e: crate::ConverterError| JsValue::from_str(&e.to_string()))?;
        self.converter.convert(text, &mode)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn encode(&self, text: &str) -> String {
        self.converter.codec().encode(text)
    }

    #[wasm_bindgen]
    pub fn decode(&self, text: &str) -> String {
        self.converter.codec().decode(text)
    }
}

impl Default for WasmTextConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
pub fn format_as_comment(text: &str, symbol: &str) -> String {
    crate::format_as_comment(text, symbol)
}

/// Cleanup over the lines of `text`
#[wasm_bindgen]
pub fn cleanup(text: &str) -> String {
    crate::cleanup_text(text)
}

/// Known comment styles as an array of `{ symbol, languages }`
#[wasm_bindgen]
pub fn comment_styles() -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(&COMMENT_STYLES)?)
}

#[wasm_bindgen]
pub struct WasmRain {
    rain: Rain,
}

#[wasm_bindgen]
impl WasmRain {
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, particles: usize, seed: u64) -> Result<WasmRain, JsValue> {
        let config = RainConfig { width, height, particles, ..RainConfig::default() };
        let rain = Rain::with_seed(config, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmRain { rain })
    }

    /// Advance one frame and return it
    #[wasm_bindgen]
    pub fn step(&mut self) -> String {
        self.rain.step();
        self.rain.render()
    }

    /// Suggested delay between frames, in milliseconds
    #[wasm_bindgen]
    pub fn update_rate_ms(&self) -> u64 {
        self.rain.config().update_rate_ms
    }
}
