//! WASM bindings for the radial-grid library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Each export is a thin wrapper over a plain function so the JSON handling
//! can be exercised natively.

use glam::Vec3;
use serde_json::to_string;
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::error::{LayoutError, Result};
use crate::inspector::visible_fields;
use crate::layout::{RadialLayout, RadialLayoutConfig, RectNode, debug_overlay};
use crate::output::LayoutOutput;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

fn parse_children(input: &str) -> Result<Vec<RectNode>> {
    serde_json::from_str(input).map_err(LayoutError::InvalidChildren)
}

/// Lay out `children_json` (an array of rect nodes) with `config_json`.
pub fn run_layout(config_json: &str, children_json: &str) -> LayoutOutput {
    let config = match RadialLayoutConfig::from_json(config_json) {
        Ok(config) => config,
        Err(e) => return LayoutOutput::error(e.to_string()),
    };
    let mut children = match parse_children(children_json) {
        Ok(children) => children,
        Err(e) => return LayoutOutput::error(e.to_string()),
    };

    let mut layout = RadialLayout::new(config);
    match layout.compute(&children) {
        Ok((plan, placements)) => {
            RadialLayout::apply(&mut children, &placements);
            LayoutOutput {
                children,
                element_count: layout.element_count(),
                plan: plan.map(Into::into),
                error: None,
            }
        }
        Err(e) => {
            warn!(error = %e, "radial layout pass failed");
            LayoutOutput {
                children,
                element_count: layout.element_count(),
                plan: None,
                error: Some(e.to_string()),
            }
        }
    }
}

#[wasm_bindgen]
pub fn layout_radial(config_json: &str, children_json: &str) -> String {
    let output = run_layout(config_json, children_json);
    if let Some(err) = &output.error {
        console_error(&format!("Error laying out children: {}", err));
    }
    to_string(&output).unwrap_or_else(|_| "{\"error\": \"Serialization error\"}".to_string())
}

#[wasm_bindgen]
pub fn debug_overlay_lines(config_json: &str, element_count: usize, cx: f32, cy: f32) -> String {
    let config = match RadialLayoutConfig::from_json(config_json) {
        Ok(config) => config,
        Err(e) => {
            console_error(&format!("Error parsing config: {}", e));
            return "{\"lines\": []}".to_string();
        }
    };
    let drawing = debug_overlay(&config, element_count, Vec3::new(cx, cy, 0.0));
    to_string(&drawing).unwrap_or_else(|_| "{\"lines\": []}".to_string())
}

/// Returns a JSON array of the fields an inspector should show.
#[wasm_bindgen]
pub fn inspector_fields(config_json: &str) -> String {
    let config = match RadialLayoutConfig::from_json(config_json) {
        Ok(config) => config,
        Err(_) => {
            // Return empty array on parse error
            return "[]".to_string();
        }
    };
    to_string(&visible_fields(&config)).unwrap_or_else(|_| "[]".to_string())
}
