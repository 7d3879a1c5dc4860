#![forbid(unsafe_code)]

//! Retained view hierarchy, flattened into a back-to-front draw list.
//!
//! A [`Scene`] is what the host's drawing backend consumes: every node has a
//! frame in host coordinates, an optional fill, optional text or image, and
//! an opacity that already includes the presentation fade.

use modalert_core::Rect;
use modalert_style::{Font, Rgba};

use crate::alert::Image;

/// Horizontal alignment of text inside its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
    Justified,
}

/// What a node represents in the alert's view hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Backdrop,
    Background,
    Icon,
    TitleIcon,
    Title,
    Message,
    Timer,
    ButtonDivider,
    CancelButton,
    CancelLabel,
    DismissButton,
    DismissLabel,
}

/// Text content of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font: Font,
    pub color: Rgba,
    pub alignment: TextAlignment,
    /// Minimum line height (paragraph style), if any.
    pub min_line_height: Option<f32>,
}

/// A single view in the draw list.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub role: NodeRole,
    /// Frame in host coordinates.
    pub frame: Rect,
    pub fill: Option<Rgba>,
    pub corner_radius: f32,
    pub opacity: f32,
    pub text: Option<TextRun>,
    pub image: Option<Image>,
    /// Vertical scroll offset of the content (scrollable message only).
    pub content_offset: f32,
    /// Whether the node accepts scrolling/interaction.
    pub interactive: bool,
}

impl SceneNode {
    /// A plain node with no fill, text or image.
    #[must_use]
    pub fn new(role: NodeRole, frame: Rect) -> Self {
        Self {
            role,
            frame,
            fill: None,
            corner_radius: 0.0,
            opacity: 1.0,
            text: None,
            image: None,
            content_offset: 0.0,
            interactive: false,
        }
    }

    #[must_use]
    pub fn fill(mut self, color: Rgba) -> Self {
        self.fill = Some(color);
        self
    }

    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn text(mut self, run: TextRun) -> Self {
        self.text = Some(run);
        self
    }

    #[must_use]
    pub fn image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }
}

/// Back-to-front list of nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    #[must_use]
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// First node with `role`.
    #[must_use]
    pub fn node(&self, role: NodeRole) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.role == role)
    }

    /// Roles in draw order.
    pub fn roles(&self) -> impl Iterator<Item = NodeRole> + '_ {
        self.nodes.iter().map(|n| n.role)
    }

    /// Text of the node with `role`, if any.
    #[must_use]
    pub fn text_of(&self, role: NodeRole) -> Option<&str> {
        self.node(role)?.text.as_ref().map(|run| run.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_lookup_by_role() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        scene.push(SceneNode::new(NodeRole::Backdrop, Rect::new(0.0, 0.0, 10.0, 10.0)));
        scene.push(
            SceneNode::new(NodeRole::Title, Rect::new(1.0, 1.0, 8.0, 2.0)).text(TextRun {
                text: "Hi".into(),
                font: Font::system(16.0, modalert_style::FontWeight::Regular),
                color: Rgba::BLACK,
                alignment: TextAlignment::Center,
                min_line_height: None,
            }),
        );
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.text_of(NodeRole::Title), Some("Hi"));
        assert_eq!(scene.text_of(NodeRole::Backdrop), None);
        assert!(scene.node(NodeRole::Timer).is_none());
        assert_eq!(
            scene.roles().collect::<Vec<_>>(),
            vec![NodeRole::Backdrop, NodeRole::Title]
        );
    }

    #[test]
    fn opacity_is_clamped() {
        let node = SceneNode::new(NodeRole::Background, Rect::ZERO).opacity(1.7);
        assert_eq!(node.opacity, 1.0);
    }
}
