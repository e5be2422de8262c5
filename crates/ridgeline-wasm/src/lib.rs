use serde::Serialize;
use wasm_bindgen::prelude::*;
use ridgeline_core::{generate, LogoParams, RenderedLogo};

/// Upper bound (exclusive) of host-chosen seeds.
const SEED_RANGE: u32 = 999_999;

#[derive(Serialize)]
struct LogoBundle<'a> {
    seed: u64,
    theme: &'static str,
    background: usize,
    renders: &'a [RenderedLogo],
}

fn to_js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Seed in `[0, 999999)` drawn from the browser's crypto source.
#[wasm_bindgen]
pub fn entropy_seed() -> Result<u32, JsValue> {
    let mut buf = [0u8; 4];
    getrandom::getrandom(&mut buf).map_err(to_js_err)?;
    Ok(u32::from_le_bytes(buf) % SEED_RANGE)
}

/// Render the logo described by `params_json` (any subset of `LogoParams`).
///
/// Returns `{ seed, theme, background, renders: [{ region_id, size, svg }] }`;
/// the host writes each `svg` into the element whose id is `region_id`.
#[wasm_bindgen]
pub fn render(params_json: &str) -> Result<JsValue, JsValue> {
    let params: LogoParams = serde_json::from_str(params_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid params: {e}")))?;
    render_params(&params)
}

/// Render the three standard sizes for a seed chosen by the host.
/// Non-integral, negative or non-finite seeds are rejected.
#[wasm_bindgen]
pub fn render_seed(seed: f64) -> Result<JsValue, JsValue> {
    ridgeline_core::ParkMiller::try_from_f64(seed).map_err(to_js_err)?;
    render_params(&LogoParams { seed: seed as u64, ..LogoParams::default() })
}

fn render_params(params: &LogoParams) -> Result<JsValue, JsValue> {
    let result = generate(params).map_err(to_js_err)?;
    let bundle = LogoBundle {
        seed: result.seed,
        theme: result.scene.theme.name(),
        background: result.scene.background,
        renders: &result.renders,
    };
    serde_wasm_bindgen::to_value(&bundle).map_err(to_js_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn render_default_params() {
        let value = render("{}").unwrap();
        assert!(value.is_object());
    }

    #[wasm_bindgen_test]
    fn render_rejects_fractional_seed() {
        assert!(render_seed(1.5).is_err());
    }

    #[wasm_bindgen_test]
    fn entropy_seed_in_range() {
        assert!(entropy_seed().unwrap() < SEED_RANGE);
    }
}
