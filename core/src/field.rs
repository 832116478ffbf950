use crate::random::{rand_range, splitmix32};
use crate::theme::Theme;

pub const MAX_NODES: usize = 50;
/// Pixels of viewport width per node; lower values give a denser field.
pub const NODE_DENSITY: f64 = 35.0;
pub const CONNECTION_DISTANCE: f64 = 180.0;
pub const NODE_SPEED: f64 = 0.15;
pub const NODE_RADIUS_MIN: f64 = 1.0;
pub const NODE_RADIUS_MAX: f64 = 3.0;
pub const GLOW_SCALE: f64 = 4.0;
pub const LINK_WIDTH: f64 = 0.5;

pub const LINK_START: Rgb = Rgb::new(6, 182, 212);
pub const LINK_END: Rgb = Rgb::new(139, 92, 246);
pub const NODE_PALETTE: [Rgb; 3] = [
    Rgb::new(0x06, 0xb6, 0xd4),
    Rgb::new(0x8b, 0x5c, 0xf6),
    Rgb::new(0xec, 0x48, 0x99),
];

const SALTS_PER_NODE: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn hex_alpha(self, alpha: f64) -> String {
        format!("{}{:02x}", self.hex(), alpha_byte(alpha))
    }

    pub fn rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

fn alpha_byte(alpha: f64) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Node {
    /// Moves one tick and reflects off the viewport edges.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
        self.x = self.x.clamp(0.0, width.max(0.0));
        self.y = self.y.clamp(0.0, height.max(0.0));
    }

    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Proximity line between two nodes, `alpha` before theme scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldOpacity {
    pub line: f64,
    pub node: f64,
}

impl FieldOpacity {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                line: 0.4,
                node: 1.0,
            },
            Theme::Light => Self {
                line: 0.15,
                node: 0.4,
            },
        }
    }
}

pub trait FieldSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn draw_link(&mut self, link: &Link);
    fn draw_node(&mut self, node: &Node, color: Rgb, opacity: f64);
}

pub fn node_count(width: f64) -> usize {
    if !width.is_finite() || width <= 0.0 {
        return 0;
    }
    let by_density = (width / NODE_DENSITY).floor() as usize;
    by_density.min(MAX_NODES)
}

pub fn node_color(index: usize) -> Rgb {
    NODE_PALETTE[index % NODE_PALETTE.len()]
}

/// Radial glow color stops: opaque-ish core fading to transparent.
pub fn glow_stops(color: Rgb, node_opacity: f64) -> [(f64, String); 3] {
    [
        (0.0, color.hex_alpha(0.8 * node_opacity)),
        (0.5, color.hex_alpha(0.3 * node_opacity)),
        (1.0, color.hex_alpha(0.0)),
    ]
}

pub fn link_alpha(distance: f64) -> Option<f64> {
    if distance < CONNECTION_DISTANCE {
        Some(1.0 - distance / CONNECTION_DISTANCE)
    } else {
        None
    }
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    width: f64,
    height: f64,
    seed: u32,
    nodes: Vec<Node>,
}

impl ParticleField {
    pub fn new(seed: u32) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            seed,
            nodes: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Discards every node and scatters a fresh set across the new viewport.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self.seed = splitmix32(self.seed);
        let count = node_count(self.width);
        let (seed, width, height) = (self.seed, self.width, self.height);
        self.nodes = (0..count as u32)
            .map(|index| {
                let salt = index * SALTS_PER_NODE;
                Node {
                    x: rand_range(seed, salt, 0.0, width),
                    y: rand_range(seed, salt + 1, 0.0, height),
                    vx: rand_range(seed, salt + 2, -NODE_SPEED, NODE_SPEED),
                    vy: rand_range(seed, salt + 3, -NODE_SPEED, NODE_SPEED),
                    radius: rand_range(seed, salt + 4, NODE_RADIUS_MIN, NODE_RADIUS_MAX),
                }
            })
            .collect();
    }

    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.nodes.iter().enumerate() {
            for b in &self.nodes[i + 1..] {
                if let Some(alpha) = link_alpha(a.distance_to(b)) {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        alpha,
                    });
                }
            }
        }
        links
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for node in &mut self.nodes {
            node.advance(width, height);
        }
    }

    /// One animation frame: links from the current positions, then every
    /// node is moved and drawn on top.
    pub fn tick<S: FieldSurface + ?Sized>(&mut self, surface: &mut S, opacity: FieldOpacity) {
        surface.clear(self.width, self.height);
        for link in self.links() {
            surface.draw_link(&Link {
                alpha: link.alpha * opacity.line,
                ..link
            });
        }
        self.step();
        for (index, node) in self.nodes.iter().enumerate() {
            surface.draw_node(node, node_color(index), opacity.node);
        }
    }
}
