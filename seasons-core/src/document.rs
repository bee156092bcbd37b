use serde_json::Value;

use crate::error::Error;

const DEFAULT_FRAME_RATE: f64 = 30.0;
const SOLID_LAYER: u64 = 1;

/// Decoded Lottie animation.
///
/// The document is kept as raw JSON and handed to the renderer untouched; only
/// the few top-level fields needed to drive playback are read here.
#[derive(Clone, Debug)]
pub struct AnimationDocument {
    root: Value,
}

impl AnimationDocument {
    pub fn from_slice(body: &[u8]) -> Result<Self, Error> {
        let root = serde_json::from_slice(body)?;
        Ok(Self { root })
    }

    /// The full document as received. Renderers that understand more than solid
    /// layers read everything else from here.
    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn timing(&self) -> Timing {
        let number = |key: &str| self.root.get(key).and_then(Value::as_f64);

        let frame_rate = number("fr")
            .filter(|fr| *fr > 0.0)
            .unwrap_or(DEFAULT_FRAME_RATE);
        let in_point = number("ip").unwrap_or(0.0);
        let out_point = number("op")
            .filter(|op| *op > in_point)
            .unwrap_or(in_point + frame_rate);
        Timing {
            frame_rate,
            in_point,
            out_point,
            width: number("w").unwrap_or(0.0),
            height: number("h").unwrap_or(0.0),
        }
    }

    /// Solid-colour layers, bottom-most first.
    pub fn solid_layers(&self) -> Vec<SolidLayer> {
        let Some(layers) = self.root.get("layers").and_then(Value::as_array) else {
            return Vec::new();
        };
        // Lottie lists layers top-most first.
        layers
            .iter()
            .rev()
            .filter(|layer| layer.get("ty").and_then(Value::as_u64) == Some(SOLID_LAYER))
            .filter_map(SolidLayer::from_value)
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub frame_rate: f64,
    pub in_point: f64,
    pub out_point: f64,
    pub width: f64,
    pub height: f64,
}

impl Timing {
    pub fn duration_frames(&self) -> f64 {
        self.out_point - self.in_point
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolidLayer {
    pub color: String,
    pub width: f64,
    pub height: f64,
    pub in_point: f64,
    pub out_point: f64,
    pub opacity: f64,
}

impl SolidLayer {
    fn from_value(layer: &Value) -> Option<Self> {
        let number = |key: &str| layer.get(key).and_then(Value::as_f64);

        let color = layer.get("sc")?.as_str()?.to_owned();
        // Animated opacity is drawn fully opaque.
        let opacity = layer
            .pointer("/ks/o/k")
            .and_then(Value::as_f64)
            .unwrap_or(100.0);
        Some(Self {
            color,
            width: number("sw").unwrap_or(0.0),
            height: number("sh").unwrap_or(0.0),
            in_point: number("ip").unwrap_or(f64::NEG_INFINITY),
            out_point: number("op").unwrap_or(f64::INFINITY),
            opacity: (opacity / 100.0).clamp(0.0, 1.0),
        })
    }

    pub fn is_visible_at(&self, frame: f64) -> bool {
        self.in_point <= frame && frame < self.out_point
    }
}
