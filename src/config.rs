//! Render configuration.
//!
//! A [`Configuration`] is built exactly once per invocation from the parsed
//! command-line flags and never mutated afterwards. The numeric `--type`
//! selector is the only input for the diagram style: it fully determines the
//! connector [`Shape`], the client-side [`LayoutAlgorithm`] and the node
//! [`Gaps`]. Those derived values are computed in [`Configuration::new`] and
//! are only reachable through read accessors.
//!
//! ## Type Selector Mapping
//!
//! | `--type` | Diagram | Shape | Layout | Gaps (v, h) |
//! |----------|---------|-------|--------|-------------|
//! | `1` | layered tree | `smooth` | `CompactBoxTree` | 10, 100 |
//! | `2` | indented tree | `VH` | `IndentedTree` | 5, 18 |
//! | anything else | dendrogram | `smooth` | `Dendrogram` | 10, 100 |
//!
//! The last row is a fallback arm, not validation: `--type 7` renders a
//! dendrogram exactly like `--type 3`.
//!
//! ## Direction
//!
//! The documented directions are `LR`, `RL`, `H`, `TB`, `BT` and `V`.
//! Anything else is carried through to the client script untouched so newer
//! script versions can accept new values; [`Direction::is_known`] lets the
//! caller warn about it.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Output path used when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "TreeMap.html";

/// Direction used when `--direction` is not given.
pub const DEFAULT_DIRECTION: &str = "LR";

/// Directions understood by the bundled client script.
pub const KNOWN_DIRECTIONS: [&str; 6] = ["LR", "RL", "H", "TB", "BT", "V"];

/// Diagram style chosen by the numeric `--type` selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagramType {
    /// Selector `1`: nodes grouped by depth level.
    #[default]
    Layered,
    /// Selector `2`: nested indented rows, file-explorer style.
    Indented,
    /// Any other selector, `3` being the documented one.
    Dendrogram,
}

impl DiagramType {
    /// Map a raw selector onto a diagram type.
    ///
    /// `2` is checked before `1`; every value that is neither lands on
    /// [`DiagramType::Dendrogram`].
    pub fn from_selector(selector: i64) -> Self {
        match selector {
            2 => DiagramType::Indented,
            1 => DiagramType::Layered,
            _ => DiagramType::Dendrogram,
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            DiagramType::Indented => Shape::Vh,
            DiagramType::Layered | DiagramType::Dendrogram => Shape::Smooth,
        }
    }

    pub fn layout(self) -> LayoutAlgorithm {
        match self {
            DiagramType::Layered => LayoutAlgorithm::CompactBoxTree,
            DiagramType::Indented => LayoutAlgorithm::IndentedTree,
            DiagramType::Dendrogram => LayoutAlgorithm::Dendrogram,
        }
    }

    pub fn gaps(self) -> Gaps {
        match self {
            DiagramType::Indented => Gaps {
                vertical: 5,
                horizontal: 18,
            },
            DiagramType::Layered | DiagramType::Dendrogram => Gaps {
                vertical: 10,
                horizontal: 100,
            },
        }
    }
}

/// Connector style between parent and child nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shape {
    /// Curved connectors.
    #[serde(rename = "smooth")]
    Smooth,
    /// Right-angle vertical/horizontal connectors.
    #[serde(rename = "VH")]
    Vh,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Smooth => "smooth",
            Shape::Vh => "VH",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout algorithm name handed to the client-side tree script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayoutAlgorithm {
    CompactBoxTree,
    IndentedTree,
    Dendrogram,
}

impl LayoutAlgorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutAlgorithm::CompactBoxTree => "CompactBoxTree",
            LayoutAlgorithm::IndentedTree => "IndentedTree",
            LayoutAlgorithm::Dendrogram => "Dendrogram",
        }
    }
}

impl fmt::Display for LayoutAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spacing between sibling nodes (vertical) and tree levels (horizontal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gaps {
    pub vertical: u32,
    pub horizontal: u32,
}

/// Tree orientation, kept as the raw string the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Direction(String);

impl Direction {
    pub fn new(raw: impl Into<String>) -> Self {
        Direction(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the bundled client script documents this direction.
    pub fn is_known(&self) -> bool {
        KNOWN_DIRECTIONS.contains(&self.0.as_str())
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::new(DEFAULT_DIRECTION)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything one render needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    input_path: PathBuf,
    output_path: PathBuf,
    direction: Direction,
    selector: i64,
    diagram_type: DiagramType,
}

impl Configuration {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        direction: Direction,
        selector: i64,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            direction,
            selector,
            diagram_type: DiagramType::from_selector(selector),
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn direction(&self) -> &Direction {
        &self.direction
    }

    /// The `--type` value exactly as given.
    pub fn selector(&self) -> i64 {
        self.selector
    }

    pub fn diagram_type(&self) -> DiagramType {
        self.diagram_type
    }

    pub fn shape(&self) -> Shape {
        self.diagram_type.shape()
    }

    pub fn layout(&self) -> LayoutAlgorithm {
        self.diagram_type.layout()
    }

    pub fn gaps(&self) -> Gaps {
        self.diagram_type.gaps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(selector: i64) -> Configuration {
        Configuration::new("in.json", DEFAULT_OUTPUT, Direction::default(), selector)
    }

    #[test]
    fn type_one_is_compact_box_tree() {
        let config = config_for(1);
        assert_eq!(config.diagram_type(), DiagramType::Layered);
        assert_eq!(config.shape(), Shape::Smooth);
        assert_eq!(config.layout(), LayoutAlgorithm::CompactBoxTree);
        assert_eq!(
            config.gaps(),
            Gaps {
                vertical: 10,
                horizontal: 100
            }
        );
    }

    #[test]
    fn type_two_is_indented_tree() {
        let config = config_for(2);
        assert_eq!(config.shape(), Shape::Vh);
        assert_eq!(config.layout(), LayoutAlgorithm::IndentedTree);
        assert_eq!(
            config.gaps(),
            Gaps {
                vertical: 5,
                horizontal: 18
            }
        );
    }

    #[test]
    fn type_three_is_dendrogram() {
        let config = config_for(3);
        assert_eq!(config.shape(), Shape::Smooth);
        assert_eq!(config.layout(), LayoutAlgorithm::Dendrogram);
        assert_eq!(
            config.gaps(),
            Gaps {
                vertical: 10,
                horizontal: 100
            }
        );
    }

    #[test]
    fn unrecognized_selectors_fall_back_to_dendrogram() {
        for selector in [0, 4, 42, -1, i64::MAX, i64::MIN] {
            let config = config_for(selector);
            assert_eq!(config.layout(), LayoutAlgorithm::Dendrogram, "{selector}");
            assert_eq!(config.shape(), Shape::Smooth, "{selector}");
            assert_eq!(config.gaps().vertical, 10, "{selector}");
            assert_eq!(config.gaps().horizontal, 100, "{selector}");
            assert_eq!(config.selector(), selector);
        }
    }

    #[test]
    fn default_diagram_type_is_layered() {
        assert_eq!(DiagramType::default(), DiagramType::Layered);
        assert_eq!(DiagramType::from_selector(1), DiagramType::default());
    }

    #[test]
    fn identifiers_match_client_script_names() {
        assert_eq!(Shape::Smooth.to_string(), "smooth");
        assert_eq!(Shape::Vh.to_string(), "VH");
        assert_eq!(
            serde_json::to_string(&Shape::Vh).unwrap(),
            "\"VH\"".to_string()
        );
        assert_eq!(
            serde_json::to_string(&LayoutAlgorithm::IndentedTree).unwrap(),
            "\"IndentedTree\"".to_string()
        );
        assert_eq!(LayoutAlgorithm::Dendrogram.to_string(), "Dendrogram");
    }

    #[test]
    fn documented_directions_are_known() {
        for raw in KNOWN_DIRECTIONS {
            assert!(Direction::new(raw).is_known(), "{raw}");
        }
        assert!(Direction::default().is_known());
        assert_eq!(Direction::default().as_str(), "LR");
    }

    #[test]
    fn unknown_direction_passes_through_unchanged() {
        let direction = Direction::new("diagonal");
        assert!(!direction.is_known());
        assert_eq!(direction.as_str(), "diagonal");
        assert!(!Direction::new("lr").is_known());
    }

    #[test]
    fn paths_are_kept_as_given() {
        let config = Configuration::new("data/tree.json", "out/tree.html", Direction::new("TB"), 2);
        assert_eq!(config.input_path(), Path::new("data/tree.json"));
        assert_eq!(config.output_path(), Path::new("out/tree.html"));
        assert_eq!(config.direction().as_str(), "TB");
    }
}
