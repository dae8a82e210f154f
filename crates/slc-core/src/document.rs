//! Document model produced by a successful parse.
//!
//! # Overview
//!
//! - [`Document`]: The named list of shapes declared by one SLC source file.
//! - [`Shape`]: A single drawable declaration with its parameters and style.
//! - [`ParamValue`]: A typed parameter value (integer, float or string).
//!
//! A [`Document`] is a pure value. It is built once by the parser and never
//! mutated afterwards; shapes keep source order, which renderers use as the
//! drawing (z) order.
//!
//! # Renderer conventions
//!
//! Renderers expect numeric `x`/`y` parameters, a `color` style entry and
//! optional `width`/`height` style entries. The accessors on [`Shape`]
//! ([`Shape::origin`], [`Shape::color`], [`Shape::width`], [`Shape::height`])
//! apply the conventional fallbacks. The parser never enforces them.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Fallback size for a shape without a usable `width`/`height` style entry.
pub const DEFAULT_DIMENSION: u32 = 50;

/// Fallback fill color for a shape without a `color` style entry.
pub const DEFAULT_COLOR: &str = "#FFFFFF";

/// A typed parameter value from a shape header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// An integer literal such as `100` or `-4`.
    Integer(i64),
    /// A decimal literal such as `2.5`.
    Float(f64),
    /// A quoted literal with its quotes removed.
    String(String),
}

impl ParamValue {
    /// Returns the value as a float if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::String(_) => None,
        }
    }

    /// Returns the value as a string slice if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "\"{value}\""),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// One drawable declaration: `Create <Type> <Name>(params) { Style { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    shape_type: String,
    name: String,
    params: IndexMap<String, ParamValue>,
    style: IndexMap<String, String>,
}

impl Shape {
    /// Creates a new shape.
    ///
    /// # Arguments
    ///
    /// * `shape_type` - The declared type, e.g. `Square` or `Circle`.
    /// * `name` - The unique shape name.
    /// * `params` - Parameters from the header, in source order.
    /// * `style` - Entries from the style block, in source order.
    pub fn new(
        shape_type: impl Into<String>,
        name: impl Into<String>,
        params: IndexMap<String, ParamValue>,
        style: IndexMap<String, String>,
    ) -> Self {
        Self {
            shape_type: shape_type.into(),
            name: name.into(),
            params,
            style,
        }
    }

    /// Returns the declared shape type.
    pub fn shape_type(&self) -> &str {
        &self.shape_type
    }

    /// Returns the shape name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameters in declaration order.
    pub fn params(&self) -> &IndexMap<String, ParamValue> {
        &self.params
    }

    /// Returns a single parameter by key.
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Returns the style entries in declaration order.
    pub fn style(&self) -> &IndexMap<String, String> {
        &self.style
    }

    /// Returns the drawing origin from the `x`/`y` parameters.
    ///
    /// Missing or non-numeric coordinates fall back to `0`.
    pub fn origin(&self) -> (f64, f64) {
        let coord = |key| {
            self.params
                .get(key)
                .and_then(ParamValue::as_f64)
                .unwrap_or_default()
        };
        (coord("x"), coord("y"))
    }

    /// Returns the `color` style entry or [`DEFAULT_COLOR`].
    pub fn color(&self) -> &str {
        self.style
            .get("color")
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR)
    }

    /// Returns the `width` style entry as an integer or [`DEFAULT_DIMENSION`].
    pub fn width(&self) -> u32 {
        self.dimension("width")
    }

    /// Returns the `height` style entry as an integer or [`DEFAULT_DIMENSION`].
    pub fn height(&self) -> u32 {
        self.dimension("height")
    }

    fn dimension(&self, key: &str) -> u32 {
        self.style
            .get(key)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_DIMENSION)
    }
}

/// The result of parsing one SLC source: a named, ordered list of shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    list_name: String,
    shapes: Vec<Shape>,
}

impl Document {
    /// Creates a new document.
    ///
    /// # Arguments
    ///
    /// * `list_name` - The name from the `Create List <Name>() {` header.
    /// * `shapes` - The shapes in source order.
    pub fn new(list_name: impl Into<String>, shapes: Vec<Shape>) -> Self {
        Self {
            list_name: list_name.into(),
            shapes,
        }
    }

    /// Returns the list name.
    pub fn list_name(&self) -> &str {
        &self.list_name
    }

    /// Returns the shapes in source (drawing) order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Looks up a shape by name.
    pub fn shape(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.name == name)
    }

    /// Returns the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the document holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Consumes the document and returns its shapes.
    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }
}
